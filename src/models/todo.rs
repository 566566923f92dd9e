use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::dto::TodoDto;

/// A todo as stored in the `Todo` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub body: String,
    pub completed: bool,
}

impl Todo {
    pub fn new(body: String, completed: bool) -> Self {
        Self {
            id: None,
            body,
            completed,
        }
    }
}

// Client supplied ids are never trusted; the store assigns them on insert.
impl From<TodoDto> for Todo {
    fn from(value: TodoDto) -> Self {
        Self::new(value.body, value.completed)
    }
}
