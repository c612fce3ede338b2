use async_trait::async_trait;
use view_access_core::AppResult;
use view_access_domain::{Group, View};

/// Port supplying the full view hierarchy snapshot.
#[async_trait]
pub trait ViewSource: Send + Sync {
    /// Fetches every view known to the platform.
    async fn fetch_views(&self) -> AppResult<Vec<View>>;
}

/// Port supplying user groups and their explicit view permissions.
#[async_trait]
pub trait GroupSource: Send + Sync {
    /// Fetches every group with its permission records.
    ///
    /// Root-scope records are included alongside view records.
    async fn fetch_groups(&self) -> AppResult<Vec<Group>>;
}
