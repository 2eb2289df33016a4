/// Data models for the to-do service
///
/// `Todo` is the stored document (camelCase field names, `_id` ObjectId,
/// BSON datetimes). `TodoPayload`/`TodoPatch` are the write bodies accepted
/// at the HTTP boundary and `TodoResponse` is the API shape returned to
/// clients, with the id rendered as a hex string.
use bson::oid::ObjectId;
use bson::{doc, Bson, Document};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppError;
use crate::validation::parse_due_date;

/// Social network a to-do post is scheduled for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Platform {
    Instagram,
    Twitter,
    Facebook,
    TikTok,
    Other,
}

impl Platform {
    /// Allowed values, for validation messages
    pub const ALLOWED: &'static str = "Instagram, Twitter, Facebook, TikTok, Other";

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Instagram => "Instagram",
            Platform::Twitter => "Twitter",
            Platform::Facebook => "Facebook",
            Platform::TikTok => "TikTok",
            Platform::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Instagram" => Some(Platform::Instagram),
            "Twitter" => Some(Platform::Twitter),
            "Facebook" => Some(Platform::Facebook),
            "TikTok" => Some(Platform::TikTok),
            "Other" => Some(Platform::Other),
            _ => None,
        }
    }
}

/// Publication state of a to-do post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum TodoStatus {
    #[default]
    Draft,
    Scheduled,
    Published,
}

impl TodoStatus {
    /// Allowed values, for validation messages
    pub const ALLOWED: &'static str = "Draft, Scheduled, Published";

    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Draft => "Draft",
            TodoStatus::Scheduled => "Scheduled",
            TodoStatus::Published => "Published",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Draft" => Some(TodoStatus::Draft),
            "Scheduled" => Some(TodoStatus::Scheduled),
            "Published" => Some(TodoStatus::Published),
            _ => None,
        }
    }
}

/// To-do document as stored in the collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub brand: String,
    pub platform: Platform,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub due_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<f64>,
    pub status: TodoStatus,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Write body for create and full update, before validation.
///
/// Every field is optional here; `validation::validate_payload` enforces the
/// schema and produces a `NewTodo`. Unknown JSON fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoPayload {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub platform: Option<String>,
    /// RFC 3339 datetime or a plain `YYYY-MM-DD` date
    pub due_date: Option<String>,
    pub payment: Option<f64>,
    pub status: Option<String>,
}

/// Validated, normalized write record
#[derive(Debug, Clone, PartialEq)]
pub struct NewTodo {
    pub title: String,
    pub brand: String,
    pub platform: Platform,
    pub due_date: DateTime<Utc>,
    pub payment: Option<f64>,
    pub status: TodoStatus,
}

impl NewTodo {
    /// Fields written by a full update. `payment` is only written when
    /// submitted, so an omitted payment leaves the stored value untouched.
    pub fn into_document(self) -> Document {
        let mut fields = doc! {
            "title": self.title,
            "brand": self.brand,
            "platform": self.platform.as_str(),
            "dueDate": Bson::DateTime(bson::DateTime::from_chrono(self.due_date)),
            "status": self.status.as_str(),
        };
        if let Some(payment) = self.payment {
            fields.insert("payment", payment);
        }
        fields
    }
}

/// Write body for partial update.
///
/// The partial-update path deliberately skips schema validation, so single
/// fields can be patched without resubmitting the record. Enum and date
/// fields are still typed; a value the document model cannot hold is
/// rejected when the body is read.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoPatch {
    pub title: Option<String>,
    pub brand: Option<String>,
    pub platform: Option<Platform>,
    /// RFC 3339 datetime or a plain `YYYY-MM-DD` date
    pub due_date: Option<String>,
    pub payment: Option<f64>,
    pub status: Option<TodoStatus>,
}

impl TodoPatch {
    /// Fields to merge into the stored document, shallow replacement only.
    pub fn into_document(self) -> Result<Document, AppError> {
        let mut fields = Document::new();
        if let Some(title) = self.title {
            fields.insert("title", title);
        }
        if let Some(brand) = self.brand {
            fields.insert("brand", brand);
        }
        if let Some(platform) = self.platform {
            fields.insert("platform", platform.as_str());
        }
        if let Some(raw) = self.due_date {
            let due_date = parse_due_date(&raw)
                .ok_or_else(|| AppError::BadRequest("dueDate must be a valid date".to_string()))?;
            fields.insert("dueDate", Bson::DateTime(bson::DateTime::from_chrono(due_date)));
        }
        if let Some(payment) = self.payment {
            fields.insert("payment", payment);
        }
        if let Some(status) = self.status {
            fields.insert("status", status.as_str());
        }
        Ok(fields)
    }
}

/// To-do record as returned to API clients
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    /// Hex form of the stored ObjectId
    pub id: String,
    pub title: String,
    pub brand: String,
    pub platform: Platform,
    pub due_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment: Option<f64>,
    pub status: TodoStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: todo.title,
            brand: todo.brand,
            platform: todo.platform,
            due_date: todo.due_date,
            payment: todo.payment,
            status: todo.status,
            created_at: todo.created_at,
            updated_at: todo.updated_at,
        }
    }
}

/// Confirmation / error body shape
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
