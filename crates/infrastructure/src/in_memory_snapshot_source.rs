use async_trait::async_trait;
use tokio::sync::RwLock;
use view_access_application::{GroupSource, ViewSource};
use view_access_core::AppResult;
use view_access_domain::{Group, View};

/// In-memory view and group snapshots.
#[derive(Debug, Default)]
pub struct InMemorySnapshotSource {
    views: RwLock<Vec<View>>,
    groups: RwLock<Vec<Group>>,
}

impl InMemorySnapshotSource {
    /// Creates a source serving the given snapshots.
    #[must_use]
    pub fn new(views: Vec<View>, groups: Vec<Group>) -> Self {
        Self {
            views: RwLock::new(views),
            groups: RwLock::new(groups),
        }
    }

    /// Replaces the view snapshot served by later fetches.
    pub async fn replace_views(&self, views: Vec<View>) {
        *self.views.write().await = views;
    }

    /// Replaces the group snapshot served by later fetches.
    pub async fn replace_groups(&self, groups: Vec<Group>) {
        *self.groups.write().await = groups;
    }
}

#[async_trait]
impl ViewSource for InMemorySnapshotSource {
    async fn fetch_views(&self) -> AppResult<Vec<View>> {
        Ok(self.views.read().await.clone())
    }
}

#[async_trait]
impl GroupSource for InMemorySnapshotSource {
    async fn fetch_groups(&self) -> AppResult<Vec<Group>> {
        Ok(self.groups.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use view_access_application::{GroupSource, ViewSource};
    use view_access_domain::{Group, View, ViewId};

    use super::InMemorySnapshotSource;

    #[tokio::test]
    async fn replaced_snapshots_are_served_to_later_fetches() {
        let source = InMemorySnapshotSource::default();
        assert!(source.fetch_views().await.unwrap_or_default().is_empty());

        source
            .replace_views(vec![View::new(ViewId::new(1), ViewId::ROOT)])
            .await;
        source
            .replace_groups(vec![
                Group::new("Operators", Vec::new()).unwrap_or_else(|_| unreachable!()),
            ])
            .await;

        assert_eq!(source.fetch_views().await.unwrap_or_default().len(), 1);
        let groups = source.fetch_groups().await.unwrap_or_default();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name().as_str(), "Operators");
    }
}
