//! Snapshot adapters reading platform exports from JSON files.
//!
//! Views are exported as `[{"id": 1, "parent_id": -1, "name": "A"}]` and groups
//! as `[{"name": "Admins", "views": [{"id": -1, "write_access": true,
//! "editable": true}]}]`. An id of -1 addresses the top of the hierarchy.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use view_access_application::{GroupSource, ViewSource};
use view_access_core::{AppError, AppResult};
use view_access_domain::{Group, View, ViewId, ViewPermission};

#[derive(Debug, Deserialize)]
struct ViewRow {
    id: i32,
    parent_id: i32,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GroupRow {
    name: String,
    #[serde(default)]
    views: Vec<GroupViewRow>,
}

#[derive(Debug, Deserialize)]
struct GroupViewRow {
    id: i32,
    #[serde(default)]
    write_access: bool,
    #[serde(default)]
    editable: bool,
}

impl From<ViewRow> for View {
    fn from(row: ViewRow) -> Self {
        let view = View::new(ViewId::new(row.id), ViewId::new(row.parent_id));
        match row.name {
            Some(name) => view.with_name(name),
            None => view,
        }
    }
}

impl TryFrom<GroupRow> for Group {
    type Error = AppError;

    fn try_from(row: GroupRow) -> Result<Self, Self::Error> {
        let permissions = row
            .views
            .into_iter()
            .map(|view| {
                ViewPermission::new(ViewId::new(view.id).into(), view.write_access, view.editable)
            })
            .collect();

        Group::new(row.name, permissions)
    }
}

/// View source reading a JSON export of the hierarchy.
#[derive(Debug, Clone)]
pub struct JsonFileViewSource {
    path: PathBuf,
}

impl JsonFileViewSource {
    /// Creates a source bound to one export file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ViewSource for JsonFileViewSource {
    async fn fetch_views(&self) -> AppResult<Vec<View>> {
        let contents = read_snapshot(self.path.as_path()).await?;
        let views = parse_views(contents.as_str())
            .map_err(|error| snapshot_error(self.path.as_path(), error))?;
        debug!(path = %self.path.display(), view_count = views.len(), "loaded view snapshot");

        Ok(views)
    }
}

/// Group source reading a JSON export of user groups.
#[derive(Debug, Clone)]
pub struct JsonFileGroupSource {
    path: PathBuf,
}

impl JsonFileGroupSource {
    /// Creates a source bound to one export file.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl GroupSource for JsonFileGroupSource {
    async fn fetch_groups(&self) -> AppResult<Vec<Group>> {
        let contents = read_snapshot(self.path.as_path()).await?;
        let groups = parse_groups(contents.as_str())
            .map_err(|error| snapshot_error(self.path.as_path(), error))?;
        debug!(path = %self.path.display(), group_count = groups.len(), "loaded group snapshot");

        Ok(groups)
    }
}

async fn read_snapshot(path: &Path) -> AppResult<String> {
    tokio::fs::read_to_string(path).await.map_err(|error| {
        AppError::Internal(format!(
            "failed to read snapshot '{}': {error}",
            path.display()
        ))
    })
}

fn snapshot_error(path: &Path, error: AppError) -> AppError {
    match error {
        AppError::Validation(message) => AppError::Validation(format!(
            "invalid snapshot '{}': {message}",
            path.display()
        )),
        other => other,
    }
}

fn parse_views(contents: &str) -> AppResult<Vec<View>> {
    let rows: Vec<ViewRow> = serde_json::from_str(contents)
        .map_err(|error| AppError::Validation(format!("malformed view export: {error}")))?;

    Ok(rows.into_iter().map(View::from).collect())
}

fn parse_groups(contents: &str) -> AppResult<Vec<Group>> {
    let rows: Vec<GroupRow> = serde_json::from_str(contents)
        .map_err(|error| AppError::Validation(format!("malformed group export: {error}")))?;

    rows.into_iter().map(Group::try_from).collect()
}
