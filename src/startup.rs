use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::handlers;
use crate::services::MongoDb;
use axum::{routing::get, Router};
use std::future::IntoFuture;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: ServiceConfig,
    /// None when the startup connection attempt failed; data routes then
    /// report the outage instead of silently reconnecting per request.
    pub db: Option<MongoDb>,
}

impl AppState {
    pub fn db(&self) -> Result<&MongoDb, AppError> {
        self.db.as_ref().ok_or(AppError::DatabaseUnavailable)
    }
}

pub fn router(state: AppState) -> Router {
    // Open deployment posture: any origin, method, or header.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::read_root))
        .route("/test", get(handlers::test_database))
        .route(
            "/api/hospitals",
            get(handlers::list_hospitals).post(handlers::create_hospital),
        )
        .route(
            "/api/doctors",
            get(handlers::list_doctors).post(handlers::create_doctor),
        )
        .route(
            "/api/procedures",
            get(handlers::list_procedures).post(handlers::create_procedure),
        )
        .route(
            "/api/procedures/:slug/documents",
            get(handlers::list_procedure_documents).post(handlers::create_procedure_document),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
    state: AppState,
}

impl Application {
    pub async fn build(config: ServiceConfig) -> Result<Self, AppError> {
        // Connect once at startup. A failure degrades the service rather than
        // aborting it: routes answer 500 and /test reports the outage.
        let db = match MongoDb::connect(&config.mongodb.uri, &config.mongodb.database).await {
            Ok(db) => Some(db),
            Err(e) => {
                tracing::warn!("Starting without a database connection: {}", e);
                None
            }
        };

        let state = AppState {
            config: config.clone(),
            db,
        };

        let app = router(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
            state,
        })
    }

    pub fn db(&self) -> Option<&MongoDb> {
        self.state.db.as_ref()
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
