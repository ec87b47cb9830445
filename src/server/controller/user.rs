use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{error::AppError, service::user::UserService, state::AppState},
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Register a new user.
///
/// Hashes the password with Argon2id and stores the account as active. The email
/// must be unique across all users.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Username, email and plaintext password
///
/// # Returns
/// - `201 Created` - The created user, without the password hash
/// - `400 Bad Request` - Malformed fields or email already registered
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/v1/users/",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto),
        (status = 400, description = "Invalid user data or email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.create(payload).await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// List all users.
///
/// # Returns
/// - `200 OK` - Every user, unpaginated
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/users/",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.list().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a user by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the user
///
/// # Returns
/// - `200 OK` - The user
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .get(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Partially update a user.
///
/// Only the fields present in the payload change; unknown fields are ignored. A new
/// password is rehashed and a new email is checked for uniqueness.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - ID of the user to update
/// - `payload` - Fields to change
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Malformed fields or email taken by another user
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    put,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid user data or email already registered", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.update(id, payload).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user and their decks.
///
/// # Returns
/// - `200 OK` - The deleted user
/// - `404 Not Found` - No user with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Get a user by email address.
///
/// # Returns
/// - `200 OK` - The user registered with the email
/// - `404 Not Found` - No user has that email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/v1/users/email/{email}",
    tag = USER_TAG,
    params(
        ("email" = String, Path, description = "Email address")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let user = service.get_by_email(&email).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// List users whose account is active.
#[utoipa::path(
    get,
    path = "/api/v1/users/active",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved active users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_active_users(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let users = service.list_active().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|u| u.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
