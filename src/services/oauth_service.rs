//! Google OAuth login service

use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, RedirectUrl, Scope,
    TokenResponse, TokenUrl, basic::BasicClient,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::{
    config::Config,
    db::repositories::UserRepository,
    error::{AppError, AppResult},
    models::User,
    utils::crypto,
};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

/// Profile returned by Google's userinfo endpoint
#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    /// Google's stable account id
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    pub picture: Option<String>,
}

/// Google OAuth login service
pub struct OAuthService;

impl OAuthService {
    fn client(
        config: &Config,
    ) -> AppResult<
        BasicClient<
            oauth2::EndpointSet,
            oauth2::EndpointNotSet,
            oauth2::EndpointNotSet,
            oauth2::EndpointNotSet,
            oauth2::EndpointSet,
        >,
    > {
        let client_id = config
            .google
            .client_id
            .clone()
            .ok_or_else(|| AppError::Configuration("GOOGLE_CLIENT_ID not set".to_string()))?;
        let client_secret = config
            .google
            .client_secret
            .clone()
            .ok_or_else(|| AppError::Configuration("GOOGLE_CLIENT_SECRET not set".to_string()))?;

        let client = BasicClient::new(ClientId::new(client_id))
            .set_client_secret(ClientSecret::new(client_secret))
            .set_auth_uri(
                AuthUrl::new(GOOGLE_AUTH_URL.to_string())
                    .map_err(|e| AppError::Configuration(e.to_string()))?,
            )
            .set_token_uri(
                TokenUrl::new(GOOGLE_TOKEN_URL.to_string())
                    .map_err(|e| AppError::Configuration(e.to_string()))?,
            )
            .set_redirect_uri(
                RedirectUrl::new(config.google.redirect_url.clone())
                    .map_err(|e| AppError::Configuration(e.to_string()))?,
            );

        Ok(client)
    }

    /// Build the Google consent URL to redirect the browser to
    pub fn authorize_url(config: &Config) -> AppResult<String> {
        let client = Self::client(config)?;

        let (auth_url, _csrf_token) = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .url();

        Ok(auth_url.to_string())
    }

    /// Exchange the authorization code and resolve it to a local user,
    /// creating one on first login
    pub async fn handle_callback(
        pool: &PgPool,
        http: &reqwest::Client,
        config: &Config,
        code: String,
    ) -> AppResult<User> {
        let client = Self::client(config)?;

        let oauth_http = oauth2::reqwest::ClientBuilder::new()
            .redirect(oauth2::reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| AppError::Internal(anyhow::anyhow!("HTTP client error: {}", e)))?;

        let token = client
            .exchange_code(AuthorizationCode::new(code))
            .request_async(&oauth_http)
            .await
            .map_err(|e| AppError::InvalidInput(format!("Google login failed: {}", e)))?;

        let info: GoogleUserInfo = http
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(token.access_token().secret())
            .send()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Google login failed: {}", e)))?
            .error_for_status()
            .map_err(|e| AppError::InvalidInput(format!("Google login failed: {}", e)))?
            .json()
            .await
            .map_err(|e| AppError::InvalidInput(format!("Google login failed: {}", e)))?;

        Self::find_or_create_user(pool, &info).await
    }

    /// Look up the account by email; first OAuth login creates a local user
    /// with no password
    pub async fn find_or_create_user(pool: &PgPool, info: &GoogleUserInfo) -> AppResult<User> {
        if let Some(user) = UserRepository::find_by_email(pool, &info.email).await? {
            return Ok(user);
        }

        let username = Self::username_from_email(pool, &info.email).await?;

        UserRepository::create_oauth(
            pool,
            &username,
            &info.email,
            &info.name,
            "google",
            &info.id,
            info.picture.as_deref(),
        )
        .await
    }

    /// Derive a username from the email local part, suffixing on collision
    async fn username_from_email(pool: &PgPool, email: &str) -> AppResult<String> {
        let local = email.split('@').next().unwrap_or(email);

        if UserRepository::find_by_username(pool, local).await?.is_none() {
            return Ok(local.to_string());
        }

        Ok(format!(
            "{}_{}",
            local,
            crypto::generate_secure_token(4).to_lowercase()
        ))
    }
}
