use std::sync::Arc;

use axum_prometheus::PrometheusMetricLayer;
use clap::Parser;
use dishscale_api::application::http::server::http_server::{router, state, with_metrics};
use dishscale_api::application::telemetry::init_logging;
use dishscale_api::args::Args;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logging(&args.log)?;
    args.validate().map_err(anyhow::Error::msg)?;

    let app_state = state(args.clone());
    let mut router = router(app_state)?;

    if args.server.metrics {
        router = with_metrics(router, &args.server.root_path, PrometheusMetricLayer::pair());
    }

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", args.server.host, args.server.port)).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
