/// OpenAPI documentation for the to-do service
use utoipa::OpenApi;

use crate::handlers;
use crate::models::{MessageResponse, Platform, TodoPatch, TodoPayload, TodoResponse, TodoStatus};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Social Media To-Do API",
        version = "1.0.0",
        description = "API for managing social media to-do posts",
        license(name = "MIT")
    ),
    paths(
        handlers::todos::list_todos,
        handlers::todos::get_todo,
        handlers::todos::create_todo,
        handlers::todos::update_todo,
        handlers::todos::patch_todo,
        handlers::todos::delete_todo,
    ),
    components(schemas(
        TodoResponse,
        TodoPayload,
        TodoPatch,
        Platform,
        TodoStatus,
        MessageResponse
    )),
    tags(
        (name = "todos", description = "API endpoints for managing social media to-do posts"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_covers_every_route() {
        let json = ApiDoc::openapi().to_json().expect("document serializes");
        let doc: serde_json::Value = serde_json::from_str(&json).unwrap();

        let collection = &doc["paths"]["/api/todos"];
        assert!(collection.get("get").is_some());
        assert!(collection.get("post").is_some());

        let item = &doc["paths"]["/api/todos/{id}"];
        assert!(item.get("get").is_some());
        assert!(item.get("put").is_some());
        assert!(item.get("patch").is_some());
        assert!(item.get("delete").is_some());
    }

    #[test]
    fn document_serializes_to_json() {
        let json = ApiDoc::openapi().to_json().expect("document serializes");
        assert!(json.contains("Social Media To-Do API"));
        assert!(json.contains("TodoResponse"));
    }
}
