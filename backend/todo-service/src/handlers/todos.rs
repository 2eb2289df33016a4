/// To-do handlers - HTTP endpoints for to-do post operations
///
/// Each handler performs exactly one store operation (delete checks
/// existence first) and maps store failures by operation kind: reads
/// surface as 500, writes as 400.
use actix_web::{web, HttpResponse};

use crate::db::TodoStore;
use crate::error::{AppError, Result};
use crate::models::{MessageResponse, TodoPatch, TodoPayload, TodoResponse};
use crate::validation::validate_payload;

/// List all to-do posts
#[utoipa::path(
    get,
    path = "/api/todos",
    tag = "todos",
    responses(
        (status = 200, description = "List of to-do posts", body = Vec<TodoResponse>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn list_todos(store: web::Data<TodoStore>) -> Result<HttpResponse> {
    let todos = store.find_all().await.map_err(AppError::store_read)?;
    let body: Vec<TodoResponse> = todos.into_iter().map(TodoResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Get a single to-do post by ID
#[utoipa::path(
    get,
    path = "/api/todos/{id}",
    tag = "todos",
    params(("id" = String, Path, description = "ID of the to-do post")),
    responses(
        (status = 200, description = "A single to-do post", body = TodoResponse),
        (status = 404, description = "To-do post not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn get_todo(store: web::Data<TodoStore>, id: web::Path<String>) -> Result<HttpResponse> {
    match store.find_by_id(&id).await.map_err(AppError::store_read)? {
        Some(todo) => Ok(HttpResponse::Ok().json(TodoResponse::from(todo))),
        None => Err(AppError::not_found()),
    }
}

/// Create a new to-do post
#[utoipa::path(
    post,
    path = "/api/todos",
    tag = "todos",
    request_body = TodoPayload,
    responses(
        (status = 201, description = "To-do post created", body = TodoResponse),
        (status = 400, description = "Invalid request body", body = MessageResponse)
    )
)]
pub async fn create_todo(
    store: web::Data<TodoStore>,
    payload: web::Json<TodoPayload>,
) -> Result<HttpResponse> {
    let new_todo = validate_payload(payload.into_inner())?;
    let todo = store.insert(new_todo).await.map_err(AppError::store_write)?;
    Ok(HttpResponse::Created().json(TodoResponse::from(todo)))
}

/// Update a to-do post (full update, validated like create)
#[utoipa::path(
    put,
    path = "/api/todos/{id}",
    tag = "todos",
    params(("id" = String, Path, description = "ID of the to-do post")),
    request_body = TodoPayload,
    responses(
        (status = 200, description = "To-do post updated", body = TodoResponse),
        (status = 400, description = "Invalid request body", body = MessageResponse),
        (status = 404, description = "To-do post not found", body = MessageResponse)
    )
)]
pub async fn update_todo(
    store: web::Data<TodoStore>,
    id: web::Path<String>,
    payload: web::Json<TodoPayload>,
) -> Result<HttpResponse> {
    let new_todo = validate_payload(payload.into_inner())?;
    let updated = store
        .update_by_id(&id, new_todo.into_document())
        .await
        .map_err(AppError::store_write)?;

    match updated {
        Some(todo) => Ok(HttpResponse::Ok().json(TodoResponse::from(todo))),
        None => Err(AppError::not_found()),
    }
}

/// Partially update a to-do post. Skips schema validation so single fields
/// can be patched on their own.
#[utoipa::path(
    patch,
    path = "/api/todos/{id}",
    tag = "todos",
    params(("id" = String, Path, description = "ID of the to-do post")),
    request_body = TodoPatch,
    responses(
        (status = 200, description = "To-do post updated", body = TodoResponse),
        (status = 400, description = "Invalid request body", body = MessageResponse),
        (status = 404, description = "To-do post not found", body = MessageResponse)
    )
)]
pub async fn patch_todo(
    store: web::Data<TodoStore>,
    id: web::Path<String>,
    patch: web::Json<TodoPatch>,
) -> Result<HttpResponse> {
    let fields = patch.into_inner().into_document()?;
    let updated = store
        .update_by_id(&id, fields)
        .await
        .map_err(AppError::store_write)?;

    match updated {
        Some(todo) => Ok(HttpResponse::Ok().json(TodoResponse::from(todo))),
        None => Err(AppError::not_found()),
    }
}

/// Delete a to-do post
#[utoipa::path(
    delete,
    path = "/api/todos/{id}",
    tag = "todos",
    params(("id" = String, Path, description = "ID of the to-do post to delete")),
    responses(
        (status = 200, description = "To-do post deleted", body = MessageResponse),
        (status = 404, description = "To-do post not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    )
)]
pub async fn delete_todo(
    store: web::Data<TodoStore>,
    id: web::Path<String>,
) -> Result<HttpResponse> {
    if store
        .find_by_id(&id)
        .await
        .map_err(AppError::unexpected)?
        .is_none()
    {
        return Err(AppError::not_found());
    }

    store.delete_by_id(&id).await.map_err(AppError::unexpected)?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "To-do deleted successfully".to_string(),
    }))
}

/// Register routes
pub fn register_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/todos")
            .service(
                web::resource("")
                    .route(web::get().to(list_todos))
                    .route(web::post().to(create_todo)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_todo))
                    .route(web::put().to(update_todo))
                    .route(web::patch().to(patch_todo))
                    .route(web::delete().to(delete_todo)),
            ),
    );
}
