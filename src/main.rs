use devterminal::{AppState, app, auth, db};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("devterminal=info")),
        )
        .init();

    let database_url =
        dotenv::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://devterminal.db?mode=rwc".to_owned());
    let db_pool = db::connect(&database_url).await?;

    let secret = match dotenv::var("JWT_SECRET") {
        Ok(secret) => secret,
        Err(_) => {
            tracing::warn!(
                "JWT_SECRET is not set; using the built-in development secret. \
                 Tokens signed with it are forgeable by anyone."
            );
            auth::token::DEV_SECRET.to_owned()
        }
    };
    let keys = auth::TokenKeys::from_secret(secret.as_bytes());

    let app = app(AppState { db_pool, keys });

    let port: u16 = dotenv::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("listening on port {port}");
    axum::serve(listener, app).await?;
    Ok(())
}
