use std::sync::Arc;

use axum::{middleware::from_fn, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::{Config, StorageBackend};
use crate::core::database;
use crate::core::middleware;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::donations::{
    routes as donations_routes, DonationService, DonationStore, InMemoryDonationStore,
    PgDonationStore,
};
use crate::features::locations::{routes as locations_routes, LocationService};

/// Everything a running server needs, assembled once at startup
pub struct AppContext {
    pub config: Config,
    pub store: Arc<dyn DonationStore>,
}

impl AppContext {
    pub fn new(config: Config, store: Arc<dyn DonationStore>) -> Self {
        Self { config, store }
    }

    /// Connect the configured donation store and build the context
    pub async fn from_config(config: Config) -> anyhow::Result<Self> {
        let store: Arc<dyn DonationStore> = match (config.storage.backend, &config.database) {
            (StorageBackend::Postgres, Some(db_config)) => {
                let pool = database::create_pool(db_config).await?;
                tracing::info!("Database connection pool created");
                database::run_migrations(&pool).await?;
                Arc::new(PgDonationStore::new(pool))
            }
            (StorageBackend::Postgres, None) => {
                return Err(anyhow::anyhow!(
                    "Postgres storage selected but no database configuration loaded"
                ));
            }
            (StorageBackend::Memory, _) => {
                tracing::warn!("Using in-memory donation store, data is lost on restart");
                Arc::new(InMemoryDonationStore::new())
            }
        };

        Ok(Self::new(config, store))
    }

    /// Feature routes without Swagger or HTTP layers
    pub fn api_router(&self) -> Router {
        let location_service = Arc::new(LocationService::new());
        tracing::info!("Location service initialized");

        let donation_service = Arc::new(DonationService::new(
            Arc::clone(&self.store),
            Arc::clone(&location_service),
        ));
        tracing::info!("Donation service initialized");

        let dashboard_service = Arc::new(DashboardService::new(Arc::clone(&self.store)));
        tracing::info!("Dashboard service initialized");

        async fn health_check() -> axum::http::StatusCode {
            axum::http::StatusCode::OK
        }

        Router::new()
            .route("/health", axum::routing::get(health_check))
            .merge(locations_routes::routes(location_service))
            .merge(donations_routes::routes(Arc::clone(&donation_service)))
            .merge(donations_routes::admin_routes(donation_service))
            .merge(dashboard_routes::routes(dashboard_service))
    }

    fn swagger_router(&self) -> Router {
        let swagger_modifier = SwaggerInfoModifier {
            title: self.config.swagger.title.clone(),
            version: self.config.swagger.version.clone(),
            description: self.config.swagger.description.clone(),
        };

        let mut openapi = ApiDoc::openapi();
        swagger_modifier.modify(&mut openapi);

        let swagger =
            Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi));

        if let Some(credentials) = self.config.swagger.credentials() {
            tracing::info!("Swagger UI basic auth enabled");
            swagger.layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
        } else {
            tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
            swagger
        }
    }

    /// Full application router with Swagger, CORS, tracing and request ids
    pub fn router(&self) -> Router {
        Router::new()
            .merge(self.swagger_router())
            .merge(self.api_router())
            .layer(middleware::cors_layer(
                self.config.app.cors_allowed_origins.clone(),
            ))
            // Propagate X-Request-Id to response headers
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(middleware::MakeSpanWithRequestId)
                    .on_request(DefaultOnRequest::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
            // Generate X-Request-Id using UUID v7 (or use client-provided one)
            .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{AppConfig, StorageConfig, SwaggerConfig};
    use crate::features::donations::models::{Donation, DonationCategory};
    use crate::shared::test_helpers::{date, donation_from};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use chrono::{Duration, Utc};
    use fake::{faker::company::en::CompanyName, Fake};
    use serde_json::{json, Value};

    fn test_config() -> Config {
        Config {
            app: AppConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_allowed_origins: vec!["*".to_string()],
            },
            storage: StorageConfig {
                backend: StorageBackend::Memory,
            },
            database: None,
            swagger: SwaggerConfig {
                username: None,
                password: None,
                title: "NourishNet API".to_string(),
                version: "0.1.0".to_string(),
                description: "test".to_string(),
            },
        }
    }

    fn server_with(donations: Vec<Donation>) -> TestServer {
        let store = Arc::new(InMemoryDonationStore::with_donations(donations));
        let context = AppContext::new(test_config(), store);
        TestServer::new(context.router()).unwrap()
    }

    fn donation_body(donor: &str, days_ahead: i64) -> Value {
        let expiry = Utc::now().date_naive() + Duration::days(days_ahead);
        json!({
            "donor": donor,
            "contact": "donor@example.com",
            "category": "Cooked",
            "foodItem": "Lemon rice",
            "quantity": 12,
            "expiryDate": expiry,
            "location": "Park Street",
            "city": "Kolkata"
        })
    }

    #[tokio::test]
    async fn test_health() {
        let server = server_with(Vec::new());
        server.get("/health").await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_submit_view_collect_delete_flow() {
        let server = server_with(Vec::new());
        let donor: String = CompanyName().fake();

        let created = server
            .post("/api/donations")
            .json(&donation_body(&donor, 2))
            .await;
        created.assert_status(StatusCode::CREATED);
        let created: Value = created.json();
        assert_eq!(created["data"]["status"], "Available");
        assert_eq!(created["data"]["latitude"], 22.5726);
        let id = created["data"]["id"].as_str().unwrap().to_string();

        server
            .post("/api/donations")
            .json(&donation_body("Another Kitchen", 3))
            .await
            .assert_status(StatusCode::CREATED);

        let summary: Value = server.get("/api/donations/summary").await.json();
        assert_eq!(summary["data"]["activeDonations"], 2);
        assert_eq!(summary["data"]["totalDonations"], 2);

        let collected = server
            .post("/api/donations/collect")
            .json(&json!({ "donor": donor }))
            .await;
        collected.assert_status_ok();
        let collected: Value = collected.json();
        assert_eq!(collected["data"]["affected"], 1);
        assert_eq!(
            collected["message"],
            format!("Donations by {} marked as collected.", donor)
        );

        let fetched: Value = server.get(&format!("/api/donations/{}", id)).await.json();
        assert_eq!(fetched["data"]["status"], "Collected");

        let view: Value = server
            .get("/api/donations")
            .add_query_param("status", "Collected")
            .await
            .json();
        assert_eq!(view["data"]["items"].as_array().unwrap().len(), 1);
        assert_eq!(view["meta"]["total"], 1);

        let deleted = server
            .delete("/api/admin/donations")
            .add_query_param("donor", &donor)
            .await;
        deleted.assert_status_ok();
        let deleted: Value = deleted.json();
        assert_eq!(deleted["data"]["affected"], 1);

        let summary: Value = server.get("/api/donations/summary").await.json();
        assert_eq!(summary["data"]["totalDonations"], 1);
    }

    #[tokio::test]
    async fn test_donor_name_is_stored_as_submitted() {
        let server = server_with(Vec::new());

        let created: Value = server
            .post("/api/donations")
            .json(&donation_body("Annapurna ", 1))
            .await
            .json();
        assert_eq!(created["data"]["donor"], "Annapurna ");

        let trimmed: Value = server
            .post("/api/donations/collect")
            .json(&json!({ "donor": "Annapurna" }))
            .await
            .json();
        assert_eq!(trimmed["data"]["affected"], 0);

        let collected: Value = server
            .post("/api/donations/collect")
            .json(&json!({ "donor": "Annapurna " }))
            .await
            .json();
        assert_eq!(collected["data"]["affected"], 1);

        let deleted: Value = server
            .delete("/api/admin/donations")
            .add_query_param("donor", "Annapurna ")
            .await
            .json();
        assert_eq!(deleted["data"]["affected"], 1);
    }

    #[tokio::test]
    async fn test_view_selectors_are_case_sensitive() {
        let server = server_with(vec![donation_from(
            "Annapurna",
            DonationCategory::Cooked,
            date(2024, 1, 2),
        )]);

        server
            .get("/api/donations")
            .add_query_param("category", "cooked")
            .await
            .assert_status(StatusCode::BAD_REQUEST);
        server
            .get("/api/donations")
            .add_query_param("category", "all")
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let lowercase_status: Value = server
            .get("/api/donations")
            .add_query_param("status", "all")
            .await
            .json();
        assert_eq!(lowercase_status["data"]["items"], json!([]));

        let exact: Value = server
            .get("/api/donations")
            .add_query_param("category", "Cooked")
            .add_query_param("status", "All")
            .await
            .json();
        assert_eq!(exact["data"]["items"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_donor_actions_without_match_succeed() {
        let server = server_with(Vec::new());

        let collected = server
            .post("/api/donations/collect")
            .json(&json!({ "donor": "Nobody" }))
            .await;
        collected.assert_status_ok();
        let collected: Value = collected.json();
        assert_eq!(collected["data"]["affected"], 0);

        let deleted = server
            .delete("/api/admin/donations")
            .add_query_param("donor", "Nobody")
            .await;
        deleted.assert_status_ok();
    }

    #[tokio::test]
    async fn test_view_reports_expired_warning() {
        let server = server_with(vec![
            donation_from("Annapurna", DonationCategory::Cooked, date(2024, 1, 1)),
            donation_from("Saravana", DonationCategory::Raw, date(2024, 7, 1)),
        ]);

        let view = server
            .get("/api/donations")
            .add_query_param("asOf", "2024-06-01")
            .await;
        view.assert_status_ok();
        let view: Value = view.json();
        assert_eq!(view["data"]["expiredCount"], 1);
        assert_eq!(
            view["message"],
            "1 donation(s) have expired. Please review."
        );

        let raw: Value = server
            .get("/api/donations")
            .add_query_param("category", "Raw")
            .add_query_param("asOf", "2024-06-01")
            .await
            .json();
        assert_eq!(raw["data"]["items"].as_array().unwrap().len(), 1);
        assert_eq!(raw["data"]["expiredCount"], 0);
        assert!(raw["message"].is_null());
    }

    #[tokio::test]
    async fn test_view_rejects_unknown_category() {
        let server = server_with(Vec::new());
        let response = server
            .get("/api/donations")
            .add_query_param("category", "Frozen")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_submit_validation_errors() {
        let server = server_with(Vec::new());

        let mut body = donation_body("Annapurna", 1);
        body["quantity"] = json!(0);
        server
            .post("/api/donations")
            .json(&body)
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let mut body = donation_body("   ", 1);
        body["city"] = json!("Delhi");
        server
            .post("/api/donations")
            .json(&body)
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let body = donation_body("Annapurna", -1);
        server
            .post("/api/donations")
            .json(&body)
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        let mut body = donation_body("Annapurna", 1);
        body["category"] = json!("Frozen");
        server
            .post("/api/donations")
            .json(&body)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_dashboard_endpoints() {
        let mut mapped = donation_from("Annapurna", DonationCategory::Cooked, date(2024, 1, 2));
        mapped.latitude = Some(12.9716);
        mapped.longitude = Some(77.5946);
        let server = server_with(vec![
            mapped,
            donation_from("Saravana", DonationCategory::Cooked, date(2024, 1, 1)),
            donation_from("Haldiram", DonationCategory::Raw, date(2024, 1, 2)),
        ]);

        let overview: Value = server.get("/api/dashboard").await.json();
        assert_eq!(overview["data"]["totalDonations"], 3);
        assert!(overview["message"].is_null());

        let categories: Value = server.get("/api/dashboard/by-category").await.json();
        assert_eq!(
            categories["data"],
            json!([
                { "category": "Cooked", "count": 2 },
                { "category": "Raw", "count": 1 }
            ])
        );

        let per_day: Value = server.get("/api/dashboard/per-day").await.json();
        assert_eq!(
            per_day["data"],
            json!([
                { "date": "2024-01-01", "count": 1 },
                { "date": "2024-01-02", "count": 2 }
            ])
        );

        let map: Value = server.get("/api/dashboard/map").await.json();
        assert_eq!(map["data"].as_array().unwrap().len(), 1);
        assert_eq!(map["data"][0]["latitude"], 12.9716);
    }

    #[tokio::test]
    async fn test_dashboard_empty_messages() {
        let server = server_with(Vec::new());

        let overview: Value = server.get("/api/dashboard").await.json();
        assert_eq!(
            overview["message"],
            "No donation data available for dashboard."
        );

        let map: Value = server.get("/api/dashboard/map").await.json();
        assert_eq!(map["message"], "No geolocation data available for mapping.");
        assert_eq!(map["data"], json!([]));
    }

    #[tokio::test]
    async fn test_filter_options_and_cities() {
        let server = server_with(vec![donation_from(
            "Annapurna",
            DonationCategory::Packaged,
            date(2024, 1, 2),
        )]);

        let options: Value = server.get("/api/donations/filters").await.json();
        assert_eq!(options["data"]["categories"], json!(["All", "Packaged"]));

        let cities: Value = server.get("/api/locations/cities").await.json();
        assert_eq!(cities["meta"]["total"], 5);

        server
            .get("/api/locations/cities/Mumbai")
            .await
            .assert_status_ok();
        server
            .get("/api/locations/cities/Pune")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_responses_carry_request_id() {
        let server = server_with(Vec::new());
        let response = server.get("/health").await;
        assert!(response.headers().contains_key("x-request-id"));
    }
}
