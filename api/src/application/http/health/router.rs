use axum::{Router, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    health::{__path_health, health},
    live::{__path_live, live},
    ready::{__path_ready, ready},
};
use crate::application::http::server::app_state::AppState;

#[derive(OpenApi)]
#[openapi(paths(health, live, ready))]
pub struct HealthApiDoc;

pub fn health_routes(root_path: &str) -> Router<AppState> {
    Router::new()
        .route(&format!("{}/health", root_path), get(health))
        .route(&format!("{}/health/live", root_path), get(live))
        .route(&format!("{}/health/ready", root_path), get(ready))
}

#[cfg(test)]
mod tests {
    use axum_test::TestServer;

    use super::*;
    use crate::application::http::health::handlers::live::LiveResponse;

    #[tokio::test]
    async fn liveness_does_not_need_the_database() {
        let app = Router::new().route("/health/live", get(live));
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health/live").await;

        response.assert_status_ok();
        assert_eq!(
            response.json::<LiveResponse>(),
            LiveResponse {
                status: "ok".to_string()
            }
        );
    }
}
