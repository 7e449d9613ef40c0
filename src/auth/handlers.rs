use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, SignupRequest, SignupResponse},
        password,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        warn!("signup missing fields");
        return Err(ApiError::Validation(
            "Username and password are required".into(),
        ));
    }
    if payload.username.len() < 3 {
        warn!("signup username too short");
        return Err(ApiError::Validation(
            "Username must be at least 3 characters".into(),
        ));
    }
    if payload.password.len() < 6 {
        warn!("signup password too short");
        return Err(ApiError::Validation(
            "Password must be at least 6 characters".into(),
        ));
    }

    // Check first; the unique index on usernames is the backstop.
    if state
        .store
        .find_user_by_username(&payload.username)
        .await?
        .is_some()
    {
        warn!(username = %payload.username, "username already taken");
        return Err(ApiError::Conflict("Username already exists".into()));
    }

    let hash = password::hash_password_blocking(payload.password).await?;
    let user = state.store.create_user(&payload.username, &hash).await?;

    info!(user_id = %user.id, username = %user.username, "user created");
    Ok(Json(SignupResponse {
        success: true,
        message: "User created successfully".into(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        warn!("login missing fields");
        return Err(ApiError::Validation(
            "Username and password are required".into(),
        ));
    }

    let user = match state.store.find_user_by_username(&payload.username).await? {
        Some(u) => u,
        None => {
            warn!(username = %payload.username, "login unknown username");
            return Err(invalid_credentials());
        }
    };

    let ok =
        password::verify_password_blocking(payload.password, user.password_hash.clone()).await?;
    if !ok {
        warn!(user_id = %user.id, "login invalid password");
        return Err(invalid_credentials());
    }

    info!(user_id = %user.id, username = %user.username, "user logged in");
    Ok(Json(LoginResponse {
        success: true,
        user_id: user.id,
        username: user.username,
        message: "Login successful".into(),
    }))
}

// Unknown username and wrong password must be indistinguishable on the wire.
fn invalid_credentials() -> ApiError {
    ApiError::Authentication("Invalid username or password".into())
}
