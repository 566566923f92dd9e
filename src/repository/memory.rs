use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc, Mutex,
};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::models::todo::Todo;
use crate::repository::{StoreError, TodoStore};

/// Vec-backed stand-in for the Mongo collection used by handler tests.
#[derive(Default)]
pub struct MemoryStore {
    pub todos: Arc<Mutex<Vec<Todo>>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail like a dropped connection.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            let err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
            return Err(StoreError::Driver(err.into()));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Todo>, StoreError> {
        self.check_available()?;
        Ok(self.todos.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Todo, StoreError> {
        self.check_available()?;
        let todos = self.todos.lock().unwrap();
        todos
            .iter()
            .find(|todo| todo.id == Some(id))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn insert(&self, todo: &Todo) -> Result<ObjectId, StoreError> {
        self.check_available()?;
        let id = ObjectId::new();
        let todo = Todo {
            id: Some(id),
            ..todo.clone()
        };
        self.todos.lock().unwrap().push(todo);
        Ok(id)
    }

    async fn update_fields(&self, id: ObjectId, body: &str, completed: bool) -> Result<(), StoreError> {
        self.check_available()?;
        let mut todos = self.todos.lock().unwrap();
        if let Some(todo) = todos.iter_mut().find(|todo| todo.id == Some(id)) {
            todo.body = body.to_string();
            todo.completed = completed;
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<(), StoreError> {
        self.check_available()?;
        let mut todos = self.todos.lock().unwrap();
        if let Some(index) = todos.iter().position(|todo| todo.id == Some(id)) {
            todos.remove(index);
        }
        Ok(())
    }
}
