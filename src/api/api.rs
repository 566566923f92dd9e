use actix_web::{delete, get, patch, post, web, HttpResponse};
use mongodb::bson::oid::ObjectId;

use crate::dto::{InfoMessage, InsertAck, SuccessMessage, TodoDto};
use crate::error::ApiError;
use crate::models::todo::Todo;
use crate::repository::TodoStore;

fn parse_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::InvalidId)
}

#[get("/")]
pub async fn get_todos(db: web::Data<dyn TodoStore>) -> Result<HttpResponse, ApiError> {
    let todos = db.find_all().await?;
    if todos.is_empty() {
        return Ok(HttpResponse::Ok().json(InfoMessage {
            msg: "No todos found".to_string(),
        }));
    }
    Ok(HttpResponse::Ok().json(todos.iter().map(TodoDto::from).collect::<Vec<_>>()))
}

#[get("/{id}")]
pub async fn get_todo_by_id(db: web::Data<dyn TodoStore>, id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let todo = db.find_by_id(id).await?;
    Ok(HttpResponse::Ok().json(TodoDto::from(&todo)))
}

#[post("/")]
pub async fn create_todo(db: web::Data<dyn TodoStore>, new_todo: web::Json<TodoDto>) -> Result<HttpResponse, ApiError> {
    let mut todo = Todo::from(new_todo.into_inner());
    if todo.body.is_empty() {
        return Err(ApiError::EmptyBody);
    }
    let id = db.insert(&todo).await?;
    todo.id = Some(id);
    tracing::info!(id = %id, "todo created");
    Ok(HttpResponse::Created().json(InsertAck::from(id)))
}

#[patch("/{id}")]
pub async fn update_todo_by_id(
    db: web::Data<dyn TodoStore>,
    id: web::Path<String>,
    updated_todo: web::Json<TodoDto>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    let updated_todo = updated_todo.into_inner();
    db.update_fields(id, &updated_todo.body, updated_todo.completed).await?;
    Ok(HttpResponse::Ok().json(SuccessMessage { success: true }))
}

#[delete("/{id}")]
pub async fn delete_todo_by_id(db: web::Data<dyn TodoStore>, id: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let id = parse_id(&id)?;
    db.delete_by_id(id).await?;
    Ok(HttpResponse::Ok().json(SuccessMessage { success: true }))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| ApiError::MalformedBody(err.to_string()).into())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(json_config())
            .service(get_todos)
            .service(get_todo_by_id)
            .service(create_todo)
            .service(update_todo_by_id)
            .service(delete_todo_by_id),
    );
}
