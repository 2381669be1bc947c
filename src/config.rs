// src/config.rs

use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::{env, str::FromStr, time::Duration};

use crate::{
    db::{
        AssignmentRepository, DepartmentRepository, EffortRepository, EmployeeRepository,
        ProjectRepository, QueryRepository, RoleRepository,
    },
    services::{AdvisorService, AllocationService, AuthService, DirectoryService, RbacService},
};

// Endpoints e credenciais do provedor de identidade
#[derive(Clone)]
pub struct OAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl OAuthConfig {
    pub fn google(client_id: String, client_secret: String, redirect_url: String) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_url,
            auth_url: "https://accounts.google.com/o/oauth2/v2/auth".to_string(),
            token_url: "https://oauth2.googleapis.com/token".to_string(),
            userinfo_url: "https://openidconnect.googleapis.com/v1/userinfo".to_string(),
        }
    }
}

// Serviço remoto de completions; ausente, o assistente usa só as
// respostas locais.
#[derive(Clone)]
pub struct RemoteCompletionConfig {
    pub api_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt_secret: String,
    pub oauth: OAuthConfig,
    pub completion: Option<RemoteCompletionConfig>,
}

impl AppConfig {
    // Carrega as configurações do ambiente (.env é opcional).
    // .expect() é bom aqui: sem credenciais a aplicação não deve iniciar.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://resource_allocation.db".to_string());
        let jwt_secret = env::var("SESSION_SECRET").expect("SESSION_SECRET deve ser definida");

        let client_id = env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID deve ser definida");
        let client_secret =
            env::var("GOOGLE_CLIENT_SECRET").expect("GOOGLE_CLIENT_SECRET deve ser definida");
        let redirect_url = env::var("OAUTH_REDIRECT_URL")
            .unwrap_or_else(|_| "http://localhost:5000/auth/google/callback".to_string());

        // A chamada remota só fica ativa com URL e chave presentes
        let completion = match (env::var("COMPLETION_API_URL"), env::var("COMPLETION_API_KEY")) {
            (Ok(api_url), Ok(api_key)) => Some(RemoteCompletionConfig {
                api_url,
                api_key,
                model: env::var("COMPLETION_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            }),
            _ => None,
        };

        Self {
            database_url,
            jwt_secret,
            oauth: OAuthConfig::google(client_id, client_secret, redirect_url),
            completion,
        }
    }
}

// O estado compartilhado que será acessível em toda a aplicação.
// Construído explicitamente a partir da configuração e injetado nos
// handlers; não há singleton de módulo.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: SqlitePool,
    pub auth_service: AuthService,
    pub directory_service: DirectoryService,
    pub allocation_service: AllocationService,
    pub rbac_service: RbacService,
    pub advisor_service: AdvisorService,
    pub query_repo: QueryRepository,
}

impl AppState {
    pub async fn new() -> anyhow::Result<Self> {
        Self::from_config(AppConfig::from_env()).await
    }

    pub async fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        // Dimensionamento do pool: 20 conexões, 15s para adquirir,
        // 30s de despejo por ociosidade. A conexão é devolvida ao fim
        // de cada operação lógica em qualquer caminho de saída.
        let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
        let db_pool = SqlitePoolOptions::new()
            .max_connections(20)
            .acquire_timeout(Duration::from_secs(15))
            .idle_timeout(Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        Ok(Self::with_pool(config, db_pool))
    }

    /// Monta repositórios e serviços sobre um pool já criado
    /// (os testes passam um pool em memória por aqui).
    pub fn with_pool(config: AppConfig, db_pool: SqlitePool) -> Self {
        let http = reqwest::Client::new();

        let employee_repo = EmployeeRepository::new(db_pool.clone());
        let project_repo = ProjectRepository::new(db_pool.clone());
        let department_repo = DepartmentRepository::new(db_pool.clone());
        let effort_repo = EffortRepository::new(db_pool.clone());
        let assignment_repo = AssignmentRepository::new(db_pool.clone());
        let role_repo = RoleRepository::new(db_pool.clone());
        let query_repo = QueryRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            role_repo.clone(),
            http.clone(),
            config.oauth.clone(),
            config.jwt_secret.clone(),
        );
        let directory_service = DirectoryService::new(
            employee_repo,
            project_repo,
            department_repo,
            effort_repo.clone(),
            assignment_repo.clone(),
            db_pool.clone(),
        );
        let allocation_service =
            AllocationService::new(effort_repo, assignment_repo, db_pool.clone());
        let rbac_service = RbacService::new(role_repo);
        let advisor_service = AdvisorService::new(http, config.completion.clone());

        Self {
            db_pool,
            auth_service,
            directory_service,
            allocation_service,
            rbac_service,
            advisor_service,
            query_repo,
        }
    }
}
