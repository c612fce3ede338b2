//! View access report runtime.

#![forbid(unsafe_code)]

mod config;
mod render;

use std::env;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;
use view_access_application::{ViewAccessOptions, ViewAccessService};
use view_access_core::AppError;
use view_access_infrastructure::{JsonFileGroupSource, JsonFileViewSource};

use crate::config::ReportConfig;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ReportConfig::load(|name| env::var(name).ok())?;
    let service = ViewAccessService::new(
        Arc::new(JsonFileViewSource::new(config.views_path.clone())),
        Arc::new(JsonFileGroupSource::new(config.groups_path.clone())),
        ViewAccessOptions::new().with_reject_unknown_views(config.reject_unknown_views),
    );

    info!(
        views_path = %config.views_path.display(),
        groups_path = %config.groups_path.display(),
        reject_unknown_views = config.reject_unknown_views,
        "view-access-report started"
    );

    let output = match config.view_id {
        Some(view_id) => {
            let report = service.report_for_view(view_id).await?;
            render::report_lines(&report)
        }
        None => {
            let views = service.list_views().await?;
            render::view_lines(&views)
        }
    };

    for line in output {
        println!("{line}");
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
