//! Web server module
//!
//! HTTP surface for the book library and URL cleanup APIs.

pub mod config;
pub mod handlers;
pub mod routes;
pub mod types;

pub use config::*;
pub use routes::*;
pub use types::*;

use std::sync::Arc;

use axum::Router;
use thiserror::Error;
use tower_http::cors::CorsLayer;

use crate::books::{BookService, BookStore, MemoryBookStore, MongoBookStore};

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("failed to bind server: {0}")]
    Bind(std::io::Error),

    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Web server
pub struct WebServer {
    config: WebConfig,
}

impl WebServer {
    pub fn new(config: WebConfig) -> Self {
        Self { config }
    }

    /// Binds the configured address and serves requests until ctrl-c.
    pub async fn start(&self) -> Result<(), ServerError> {
        let store = connect_book_store(self.config.mongo_config.as_ref()).await;
        let app_state = Arc::new(AppState {
            books: BookService::new(store),
        });

        let app = create_router(app_state);

        let listener = tokio::net::TcpListener::bind(self.config.listen_address())
            .await
            .map_err(ServerError::Bind)?;

        tracing::info!(
            "web server starting at http://{}",
            self.config.listen_address()
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(ServerError::Serve)?;

        Ok(())
    }
}

fn create_router(app_state: Arc<AppState>) -> Router {
    create_routes()
        .with_state(app_state)
        .layer(CorsLayer::permissive())
}

/// Connects the configured MongoDB store, falling back to the in-memory
/// store when the database is missing or unreachable. The server stays up
/// either way; book data just stops persisting.
async fn connect_book_store(config: Option<&MongoConfig>) -> BookStore {
    if let Some(config) = config {
        match mongodb::Client::with_uri_str(&config.connection_string).await {
            Ok(client) => {
                let db = client.database(&config.database_name);
                // with_uri_str does not touch the network; ping does.
                match db.run_command(bson::doc! { "ping": 1 }).await {
                    Ok(_) => {
                        tracing::info!("connected to mongodb database '{}'", config.database_name);
                        return BookStore::Mongo(MongoBookStore::new(db, &config.collection_name));
                    }
                    Err(err) => tracing::warn!("mongodb ping failed: {}", err),
                }
            }
            Err(err) => tracing::warn!("failed to initialize mongodb client: {}", err),
        }
        tracing::warn!("continuing with the in-memory book store; book data will not persist");
    } else {
        tracing::warn!("no mongodb configured, using the in-memory book store");
    }

    BookStore::Memory(MemoryBookStore::new())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("server is shutting down"),
        Err(err) => tracing::error!("failed to listen for shutdown signal: {}", err),
    }
}
