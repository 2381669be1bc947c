// src/bin/setup_admin.rs
//
// Bootstrap dos administradores: garante que os e-mails de ADMIN_EMAILS
// tenham papel admin antes do primeiro login.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{env, str::FromStr};

use resource_allocation::{MIGRATOR, db::RoleRepository, models::auth::Role};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).compact().init();
    dotenvy::dotenv().ok();

    let database_url = env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://resource_allocation.db".to_string());
    let emails = env::var("ADMIN_EMAILS")
        .expect("ADMIN_EMAILS deve ser definida (lista separada por vírgulas)");

    let options = SqliteConnectOptions::from_str(&database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    MIGRATOR.run(&pool).await?;

    let repo = RoleRepository::new(pool);
    for email in emails.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        repo.upsert(email, Role::Admin).await?;
        tracing::info!("✅ {} agora é admin", email);
    }

    tracing::info!("🎉 Setup de administradores concluído!");

    Ok(())
}
