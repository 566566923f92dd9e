use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{options::ClientOptions, Client, Collection};

use crate::config::Config;
use crate::models::todo::Todo;
use crate::repository::{StoreError, TodoStore};

const DB_NAME: &str = "Todo";
const COLLECTION_NAME: &str = "Todo";

#[derive(Clone, Debug)]
pub struct MongoDbClient {
    client: Client,
}

impl MongoDbClient {
    pub async fn new(config: &Config) -> Result<Self, StoreError> {
        let client_options = ClientOptions::parse(&config.mongodb_uri).await?;
        let client = Client::with_options(client_options)?;
        Ok(Self { client })
    }

    /// Round trip to the server; the driver connects lazily, so this is the
    /// first point a bad URI or unreachable host shows up.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await?;
        Ok(())
    }

    fn get_todos_collection(&self) -> Collection<Todo> {
        let db = self.client.database(DB_NAME);
        db.collection(COLLECTION_NAME)
    }
}

#[async_trait]
impl TodoStore for MongoDbClient {
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        let mut cursor = self.get_todos_collection().find(doc! {}, None).await?;
        let mut result: Vec<Todo> = Vec::new();
        while cursor.advance().await? {
            result.push(cursor.deserialize_current()?);
        }
        Ok(result)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Todo, StoreError> {
        let filter = doc! { "_id": id };
        self.get_todos_collection()
            .find_one(filter, None)
            .await?
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, todo: &Todo) -> Result<ObjectId, StoreError> {
        let result = self.get_todos_collection().insert_one(todo, None).await?;
        result
            .inserted_id
            .as_object_id()
            .ok_or(StoreError::MissingInsertedId)
    }

    async fn update_fields(&self, id: ObjectId, body: &str, completed: bool) -> Result<(), StoreError> {
        let filter = doc! { "_id": id };
        let update = doc! { "$set": { "completed": completed, "body": body } };
        self.get_todos_collection()
            .update_one(filter, update, None)
            .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), StoreError> {
        let filter = doc! { "_id": id };
        self.get_todos_collection().delete_one(filter, None).await?;
        Ok(())
    }
}
