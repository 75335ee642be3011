use anyhow::Result;
use scopepress::application::{
    ports::{CacheStorePort, ClockPort, ContentProviderPort},
    services::ApplicationServices,
};
use scopepress::config::AppConfig;
use scopepress::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use scopepress::infrastructure::{
    cache::{InMemoryCacheStore, RedisCacheStore},
    database,
    provider::EsaContentProvider,
    repositories::{PostgresArticleReadRepository, PostgresArticleWriteRepository},
    time::SystemClock,
};
use scopepress::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool));

    let clock: Arc<ClockPort> = Arc::new(SystemClock);
    let cache_store: Arc<CacheStorePort> = match config.redis_url() {
        Some(url) => {
            tracing::info!("using redis cache store");
            Arc::new(RedisCacheStore::from_url(url)?)
        }
        None => {
            tracing::warn!("REDIS_URL not set; using in-process cache store");
            Arc::new(InMemoryCacheStore::new(Arc::clone(&clock)))
        }
    };
    let provider: Arc<ContentProviderPort> = Arc::new(EsaContentProvider::new(
        config.esa_api_base(),
        config.esa_access_token(),
        config.provider_timeout(),
    )?);

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        cache_store,
        provider,
        clock,
        config.service_settings(),
    ));

    let state = HttpState { services };
    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
