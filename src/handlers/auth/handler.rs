//! Authentication handler implementations

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Redirect,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::{AuthService, OAuthService},
    state::AppState,
};

use super::{
    request::{
        ChangePasswordRequest, ForgotPasswordRequest, GoogleCallbackQuery, LoginRequest,
        RegisterRequest, ResetPasswordRequest,
    },
    response::{
        LoginResponse, MessageResponse, ProfileResponse, RegisterResponse, UserSummary,
        VerifyResetTokenResponse,
    },
};

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    payload.validate()?;

    let user = AuthService::register(
        state.db(),
        &payload.username,
        &payload.email,
        &payload.full_name,
        &payload.password,
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Đăng ký thành công!".to_string(),
            user_id: user.id,
        }),
    ))
}

/// Login with username and password
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    payload.validate()?;

    let (user, access_token, expires_in) = AuthService::login(
        state.db(),
        state.config(),
        &payload.username,
        &payload.password,
    )
    .await?;

    Ok(Json(LoginResponse {
        access_token,
        token_type: "bearer".to_string(),
        expires_in,
        user: UserSummary::from(&user),
    }))
}

/// Get the authenticated user's profile
pub async fn get_me(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
) -> AppResult<Json<ProfileResponse>> {
    let user = AuthService::get_user_by_id(state.db(), auth_user.id)
        .await?
        .ok_or_else(|| AppError::NotFound("Không tìm thấy user".to_string()))?;

    Ok(Json(ProfileResponse::from(user)))
}

/// Change the authenticated user's password
pub async fn change_password(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Json(payload): Json<ChangePasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    payload.validate()?;

    AuthService::change_password(
        state.db(),
        auth_user.id,
        &payload.old_password,
        &payload.new_password,
    )
    .await?;

    Ok(Json(MessageResponse {
        message: "Đổi mật khẩu thành công!".to_string(),
    }))
}

/// Request a password-reset link.
///
/// The response is identical whether or not the email is registered.
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    payload.validate()?;

    AuthService::forgot_password(state.db(), state.config(), &payload.email).await?;

    Ok(Json(MessageResponse {
        message: "Nếu email tồn tại trong hệ thống, bạn sẽ nhận được email reset.".to_string(),
    }))
}

/// Validate a password-reset token
pub async fn verify_reset_token(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> AppResult<Json<VerifyResetTokenResponse>> {
    let user_id = AuthService::verify_reset_token(state.db(), state.config(), &token).await?;

    Ok(Json(VerifyResetTokenResponse {
        valid: true,
        message: "Token hợp lệ".to_string(),
        user_id,
    }))
}

/// Reset a password with a valid reset token
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordRequest>,
) -> AppResult<Json<MessageResponse>> {
    payload.validate()?;

    AuthService::reset_password(
        state.db(),
        state.redis(),
        state.config(),
        &payload.token,
        &payload.new_password,
    )
    .await?;

    Ok(Json(MessageResponse {
        message: "Đặt lại mật khẩu thành công!".to_string(),
    }))
}

/// Redirect the browser to Google's consent screen
pub async fn google_auth(State(state): State<AppState>) -> AppResult<Redirect> {
    let url = OAuthService::authorize_url(state.config())?;
    Ok(Redirect::temporary(&url))
}

/// Google OAuth callback: log the user in and bounce back to the frontend
pub async fn google_callback(
    State(state): State<AppState>,
    Query(query): Query<GoogleCallbackQuery>,
) -> AppResult<Redirect> {
    let user = OAuthService::handle_callback(
        state.db(),
        state.http(),
        state.config(),
        query.code,
    )
    .await?;

    let (access_token, _expires_in) = AuthService::generate_access_token(&user, state.config())?;

    let redirect_url = format!(
        "{}/auth/callback/google?token={}&role={}",
        state.config().server.frontend_url,
        access_token,
        user.role
    );

    Ok(Redirect::to(&redirect_url))
}
