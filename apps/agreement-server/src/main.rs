//! Rental Agreement Server
//!
//! REST front end for agreement generation. Provides endpoints for:
//!
//! - Full agreement generation (validated request in, PDF + summary out)
//! - Standalone validation
//! - Duration and cost derivations
//! - Document type dispatch
//!
//! ## Architecture
//!
//! Handlers are thin: they deserialize, call into `agreement-core`, and map
//! the outcome to a status code. Rendering happens on tokio's blocking pool
//! under the configured timeout.

use std::net::SocketAddr;
use std::sync::Arc;

use agreement_core::{AgreementGenerator, GeneratorConfig};
use axum::{
    routing::{get, post},
    Router,
};
use clap::Parser;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use typst_engine::compiler::OutputFormat;

mod api;
mod error;

use api::{
    handle_calculate_costs, handle_calculate_duration, handle_generate_agreement,
    handle_generate_document, handle_health, handle_validate_agreement,
};

/// Command-line arguments for the agreement server
#[derive(Parser, Debug)]
#[command(name = "agreement-server")]
#[command(about = "Rental agreement generation server")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Render timeout in milliseconds
    #[arg(long, default_value = "10000")]
    timeout_ms: u64,

    /// Rate limit: requests per second per IP
    #[arg(long, default_value = "10")]
    rate_limit: u32,

    /// Agreement output format: pdf, svg or png
    #[arg(long, default_value = "pdf")]
    format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generator: AgreementGenerator,
}

impl AppState {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            generator: AgreementGenerator::new(config),
        }
    }
}

/// Per-IP burst allowance: two seconds' worth of requests
pub fn burst_size(rate_limit: u32) -> u32 {
    rate_limit.saturating_mul(2)
}

/// All routes, without transport middleware
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/agreements/generate", post(handle_generate_agreement))
        .route("/api/agreements/validate", post(handle_validate_agreement))
        .route("/api/agreements/duration", post(handle_calculate_duration))
        .route("/api/agreements/costs", post(handle_calculate_costs))
        .route("/api/documents/generate", post(handle_generate_document))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting agreement server on {}:{}", args.host, args.port);

    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(args.rate_limit.into())
            .burst_size(burst_size(args.rate_limit))
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limit: {}", args.rate_limit))?,
    );

    let state = AppState::new(GeneratorConfig {
        render_timeout_ms: args.timeout_ms,
        format: args.format,
        ..GeneratorConfig::default()
    });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(cors)
            .layer(GovernorLayer {
                config: governor_conf,
            }),
    );

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", args.rate_limit);
    info!("Render timeout: {}ms, format: {}", args.timeout_ms, args.format);

    // Governor keys on the peer address
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
