use crate::{
    api::models::*,
    core::{
        models::user::{User, UserInput},
        services::UserService,
    },
    infrastructure::{logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage},
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use std::sync::Arc;

pub type SharedUserService = Arc<UserService<InMemoryLogging, InMemoryStorage>>;

// Define API routes
pub fn api_routes(service: SharedUserService) -> Router {
    Router::new()
        .route("/user", post(create_user))
        .route("/users", get(list_users))
        .route("/user/{id}", get(get_user).put(update_user).delete(delete_user))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/user",
    request_body = UserInput,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(service): State<SharedUserService>,
    JsonBody(req): JsonBody<UserInput>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = service.create_user(req).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All stored users", body = Vec<User>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_users(State(service): State<SharedUserService>) -> Result<Json<Vec<User>>, ApiError> {
    let users = service.list_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/user/{id}",
    params(
        ("id" = String, Path, description = "ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = User),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(service): State<SharedUserService>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = service.get_user(&id).await?;
    Ok(Json(user))
}

#[utoipa::path(
    put,
    path = "/api/user/{id}",
    request_body = UserInput,
    params(
        ("id" = String, Path, description = "ID of the user to update")
    ),
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 400, description = "Invalid input or malformed user id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn update_user(
    State(service): State<SharedUserService>,
    Path(id): Path<String>,
    JsonBody(req): JsonBody<UserInput>,
) -> Result<Json<User>, ApiError> {
    let user = service.update_user(&id, req).await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    params(
        ("id" = String, Path, description = "ID of the user to delete")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 400, description = "Malformed user id", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(service): State<SharedUserService>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    service.delete_user(&id).await?;
    Ok(Json(MessageResponse {
        message: "User deleted successfully".to_string(),
    }))
}
