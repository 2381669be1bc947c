// src/services/auth.rs

use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use reqwest::Url;
use serde::Deserialize;

use crate::{
    common::error::AppError,
    config::OAuthConfig,
    db::RoleRepository,
    models::auth::{Claims, OAuthProfile, Role, SessionUser},
};

// O que o endpoint de token do provedor devolve (só usamos o access_token)
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Clone)]
pub struct AuthService {
    role_repo: RoleRepository,
    http: reqwest::Client,
    oauth: OAuthConfig,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(
        role_repo: RoleRepository,
        http: reqwest::Client,
        oauth: OAuthConfig,
        jwt_secret: String,
    ) -> Self {
        Self {
            role_repo,
            http,
            oauth,
            jwt_secret,
        }
    }

    /// URL de consentimento do provedor, com o `state` anti-CSRF.
    pub fn authorize_url(&self, state: &str) -> Result<String, AppError> {
        let url = Url::parse_with_params(
            &self.oauth.auth_url,
            &[
                ("client_id", self.oauth.client_id.as_str()),
                ("redirect_uri", self.oauth.redirect_url.as_str()),
                ("response_type", "code"),
                ("scope", "profile email"),
                ("state", state),
            ],
        )
        .map_err(|e| anyhow::anyhow!("URL de autorização inválida: {}", e))?;

        Ok(url.to_string())
    }

    /// Troca o código de autorização pelo perfil verificado do usuário.
    /// O provedor é consumido só pelo contrato token/userinfo.
    pub async fn exchange_code(&self, code: &str) -> Result<OAuthProfile, AppError> {
        let token: TokenResponse = self
            .http
            .post(&self.oauth.token_url)
            .form(&[
                ("code", code),
                ("client_id", self.oauth.client_id.as_str()),
                ("client_secret", self.oauth.client_secret.as_str()),
                ("redirect_uri", self.oauth.redirect_url.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let profile: OAuthProfile = self
            .http
            .get(&self.oauth.userinfo_url)
            .bearer_auth(&token.access_token)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(profile)
    }

    /// Resolve o papel do e-mail verificado. Ausência de linha derruba o
    /// login ("acesso negado"); erro de storage é um sinal separado
    /// ("erro de banco"), nunca os dois misturados.
    pub async fn resolve_role(&self, email: &str) -> Result<Role, AppError> {
        self.role_repo
            .find_role_by_email(email)
            .await?
            .ok_or(AppError::RoleNotAssigned)
    }

    /// Monta a identidade de sessão a partir do perfil + papel resolvido.
    pub fn build_session(&self, profile: OAuthProfile, role: Role) -> SessionUser {
        let name = profile.name.unwrap_or_else(|| profile.email.clone());
        SessionUser {
            id: profile.id,
            name,
            email: profile.email,
            photo: profile.photo,
            role,
        }
    }

    // O papel fica embutido no token: é um cache válido pela vida da
    // sessão, não re-derivado da tabela a cada requisição.
    pub fn create_token(&self, user: &SessionUser) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            photo: user.photo.clone(),
            role: user.role,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }

    pub fn validate_token(&self, token: &str) -> Result<SessionUser, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims.into())
    }
}
