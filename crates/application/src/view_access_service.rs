use std::sync::Arc;

use tracing::{debug, info, warn};
use view_access_core::{AppError, AppResult};
use view_access_domain::{AccessError, AccessResolver, View, ViewAccessReport, ViewId, ViewTree};

mod config;
mod ports;

pub use config::ViewAccessOptions;
pub use ports::{GroupSource, ViewSource};

/// Application service reporting which groups can access a view.
#[derive(Clone)]
pub struct ViewAccessService {
    view_source: Arc<dyn ViewSource>,
    group_source: Arc<dyn GroupSource>,
    options: ViewAccessOptions,
}

impl ViewAccessService {
    /// Creates a new service from its snapshot sources.
    #[must_use]
    pub fn new(
        view_source: Arc<dyn ViewSource>,
        group_source: Arc<dyn GroupSource>,
        options: ViewAccessOptions,
    ) -> Self {
        Self {
            view_source,
            group_source,
            options,
        }
    }

    /// Lists selectable views ordered by identifier.
    pub async fn list_views(&self) -> AppResult<Vec<View>> {
        let tree = self.load_tree().await?;
        Ok(tree.views().into_iter().cloned().collect())
    }

    /// Computes the access report for one view.
    ///
    /// A missing view snapshot aborts before any group is read. Groups whose
    /// ancestry cannot be walked are kept in the report as failures.
    pub async fn report_for_view(&self, view_id: ViewId) -> AppResult<ViewAccessReport> {
        let tree = self.load_tree().await?;

        if !tree.contains(view_id) {
            if self.options.reject_unknown_views {
                return Err(AccessError::UnknownView(view_id).into());
            }
            debug!(view_id = %view_id, "view is not in the hierarchy snapshot");
        }

        let groups = self.group_source.fetch_groups().await?;
        if groups.is_empty() {
            return Err(AppError::NotFound("no user groups available".to_owned()));
        }

        let report = AccessResolver::new(&tree).resolve_all(view_id, &groups);

        for failure in report.failures() {
            warn!(
                view_id = %view_id,
                group = %failure.group_name(),
                error = %failure.error(),
                "failed to resolve group access"
            );
        }

        info!(
            view_id = %view_id,
            group_count = groups.len(),
            granted_count = report.entries().len(),
            failed_count = report.failures().len(),
            "view access resolved"
        );

        Ok(report)
    }

    async fn load_tree(&self) -> AppResult<ViewTree> {
        let views = self.view_source.fetch_views().await?;
        debug!(view_count = views.len(), "fetched view hierarchy");

        Ok(ViewTree::build(views)?)
    }
}
