/// To-Do Service Library
///
/// A small CRUD service for scheduled social-media posts ("to-dos").
/// Each to-do names the brand, target platform, due date and optional
/// payment for one post, and moves through Draft/Scheduled/Published.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and the route table
/// - `models`: Document model, enums and request/response shapes
/// - `validation`: Write-payload validation at the HTTP boundary
/// - `db`: MongoDB store adapter
/// - `error`: Error types and HTTP mapping
/// - `config`: Configuration management
/// - `openapi`: OpenAPI document served by Swagger UI
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod validation;

pub use config::Config;
pub use error::{AppError, Result};
