use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::todo::Todo;

/// Wire representation of a todo. Every field may be omitted on input.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodoDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub completed: bool,
}

/// Acknowledgement returned by create, shaped like the driver's insert result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsertAck {
    #[serde(rename = "InsertedID")]
    pub inserted_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InfoMessage {
    pub msg: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub error: String,
}

impl From<&Todo> for TodoDto {
    fn from(value: &Todo) -> Self {
        Self {
            id: value.id.map(|id| id.to_hex()),
            body: value.body.clone(),
            completed: value.completed,
        }
    }
}

impl From<ObjectId> for InsertAck {
    fn from(value: ObjectId) -> Self {
        Self {
            inserted_id: value.to_hex(),
        }
    }
}
