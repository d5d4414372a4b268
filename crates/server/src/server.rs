use axum::{
    Router,
    http::StatusCode,
    routing::{get, patch},
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use std::{future::Future, sync::Arc, time::Duration};

use crate::expenses;
use engine::Engine;

const LIVENESS: &str = "Expense tracker API is up";

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

/// Knobs for the HTTP layer. Nothing here changes request semantics.
#[derive(Clone, Debug)]
pub struct ServerOptions {
    /// Requests running longer than this are answered with 408.
    pub request_timeout: Duration,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
        }
    }
}

async fn root() -> &'static str {
    LIVENESS
}

pub fn router(engine: Engine, options: &ServerOptions) -> Router {
    let state = ServerState {
        engine: Arc::new(engine),
    };

    let routes = Router::new()
        .route("/", get(root))
        .route("/expenses", get(expenses::list).post(expenses::create))
        .route(
            "/expenses/{id}",
            patch(expenses::update).delete(expenses::delete),
        );

    with_http_layers(routes, options).with_state(state)
}

fn with_http_layers<S>(routes: Router<S>, options: &ServerOptions) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    routes
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            options.request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Serve until `shutdown` resolves, then drain in-flight requests.
pub async fn run_with_listener(
    engine: Engine,
    options: ServerOptions,
    listener: tokio::net::TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router(engine, &options))
        .with_graceful_shutdown(shutdown)
        .await
}

pub fn spawn_with_listener(
    engine: Engine,
    options: ServerOptions,
    listener: tokio::net::TcpListener,
) -> Result<std::net::SocketAddr, std::io::Error> {
    let addr = listener.local_addr()?;

    tokio::spawn(async move {
        if let Err(err) =
            run_with_listener(engine, options, listener, std::future::pending()).await
        {
            tracing::error!("server failed: {err}");
        }
    });

    Ok(addr)
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn slow_request_times_out_with_408() {
        let routes: Router = Router::new().route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "done"
            }),
        );
        let options = ServerOptions {
            request_timeout: Duration::from_millis(10),
        };

        let response = with_http_layers(routes, &options)
            .oneshot(Request::get("/slow").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
