// rest/mod.rs — Public REST API server.
//
// Axum HTTP server exposing the task CRUD surface.
//
// Endpoints:
//   GET    /tasks        — list all tasks
//   POST   /tasks        — create a task
//   DELETE /tasks/{id}   — delete a task
//   PATCH  /tasks/{id}   — mark a task completed
//   (any other path)     — two-line welcome text, any method

pub mod error;
pub mod routes;

use anyhow::Result;
use axum::routing::{delete, get};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppContext;

const WELCOME: &str = "Welcome to the taskd TODO API!\nUse the /tasks endpoint to manage your TODOs.\n";

/// Bind and serve until ctrl-c. Listener failures are fatal and propagate
/// out of `main`.
pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("REST API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        .route(
            "/tasks",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/tasks/{id}",
            delete(routes::tasks::delete_task).patch(routes::tasks::complete_task),
        )
        // Everything else, any method: the welcome message. Routing is
        // exact-match, so `/tasks/` and `/tasks/1/extra` land here rather
        // than in the id handlers.
        .fallback(welcome)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}

async fn welcome() -> &'static str {
    WELCOME
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
