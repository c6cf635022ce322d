//! 회원가입/로그인 API 서버.
//!
//! 설정을 로드하고 저장소, 해셔, 토큰 발급자를 조립한 뒤 Axum 서버를 시작합니다.

use std::sync::Arc;
use std::time::Duration;

use auth_core::{init_logging, AppConfig, LogConfig, ServerConfig, SystemClock};
use axum::{http::StatusCode, middleware, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

use auth_api::metrics::setup_metrics_recorder;
use auth_api::middleware::metrics_layer;
use auth_api::openapi::openapi_router;
use auth_api::repository::PgUserStore;
use auth_api::routes::create_api_router;
use auth_api::state::AppState;

/// 저장소를 선택하여 AppState 생성.
///
/// `database.url`이 있으면 PostgreSQL에 연결하고 마이그레이션을 실행합니다.
/// 없으면 인메모리 저장소를 사용합니다.
async fn create_app_state(config: &AppConfig) -> Result<AppState, Box<dyn std::error::Error>> {
    let Some(database_url) = config.database.url.as_deref() else {
        warn!("database.url not set, using in-memory user store (data is lost on restart)");
        return Ok(AppState::in_memory(&config.jwt));
    };

    let pool = PgPoolOptions::new()
        .max_connections(config.database.max_connections)
        .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
        .connect(database_url)
        .await
        .map_err(|e| {
            error!("Failed to connect to database: {}", e);
            e
        })?;
    info!("Connected to PostgreSQL successfully");

    let store = PgUserStore::new(pool);
    store.migrate().await?;

    Ok(AppState::new(
        Arc::new(store),
        "postgres",
        &config.jwt,
        Arc::new(SystemClock),
    ))
}

/// CORS 레이어 생성.
///
/// `server.cors_origins`가 비어 있으면 모든 origin을 허용합니다 (개발 모드).
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<axum::http::HeaderValue> = server
        .cors_origin_list()
        .iter()
        .filter_map(|s| s.parse().ok())
        .collect();

    let restricted = !origins.is_empty();
    let allow_origin = if restricted {
        info!("CORS configured with {} allowed origins", origins.len());
        AllowOrigin::list(origins)
    } else {
        warn!("CORS origins not configured, allowing any origin (development mode)");
        AllowOrigin::any()
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        // 브라우저가 로그인 응답의 토큰 헤더를 읽을 수 있도록 노출
        .expose_headers([axum::http::header::AUTHORIZATION])
        .allow_credentials(restricted)
        .max_age(Duration::from_secs(3600))
}

/// /metrics 엔드포인트 핸들러.
async fn metrics_handler(
    axum::extract::State(handle): axum::extract::State<PrometheusHandle>,
) -> String {
    handle.render()
}

/// 전체 라우터 생성.
fn create_router(
    state: Arc<AppState>,
    metrics_handle: PrometheusHandle,
    server: &ServerConfig,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(metrics_handle);

    Router::new()
        .merge(metrics_router)
        .merge(create_api_router().with_state(state))
        .merge(openapi_router())
        .layer(middleware::from_fn(metrics_layer))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(server.request_timeout_secs),
        ))
        .layer(cors_layer(server))
}

/// OpenAPI 스펙 내보내기 처리.
///
/// `--export-openapi` 플래그가 있으면 스펙을 stdout으로 출력하고 `true`를 반환합니다.
fn handle_export_openapi() -> Result<bool, serde_json::Error> {
    use auth_api::openapi::ApiDoc;
    use utoipa::OpenApi as _;

    if !std::env::args().any(|arg| arg == "--export-openapi") {
        return Ok(false);
    }

    println!("{}", serde_json::to_string_pretty(&ApiDoc::openapi())?);
    Ok(true)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // .env 파일 로드 (있는 경우)
    let _ = dotenvy::dotenv();

    if handle_export_openapi()? {
        return Ok(());
    }

    let config = AppConfig::load_default()?;
    init_logging(LogConfig::from(&config.logging))?;

    info!("Starting User Auth API server...");

    let metrics_handle = setup_metrics_recorder()?;
    let state = Arc::new(create_app_state(&config).await?);
    let app = create_router(state, metrics_handle, &config.server);

    let addr = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(%addr, "API server listening");
    info!("OpenAPI spec at http://{}/api-docs/openapi.json", addr);
    info!("Metrics available at http://{}/metrics", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Graceful shutdown 시그널 대기 (Ctrl+C 또는 SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
