//! Effective view access resolution.
//!
//! A group's explicit record on a view wins. Without one, the nearest ancestor
//! holding a record decides. A group that fully controls the root scope has
//! full access everywhere, whatever narrower records it also holds.

use std::collections::HashSet;

use serde::Serialize;
use thiserror::Error;
use view_access_core::AppError;

use crate::{AccessLevel, Group, ViewId, ViewPermission, ViewTree};

/// Failures raised while building a tree or resolving access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// No views were supplied.
    #[error("no views available")]
    EmptyInput,

    /// The parent chain loops back on itself.
    #[error("view hierarchy loops at view {view_id} while resolving group '{group_name}'")]
    InvalidHierarchy {
        /// Group whose resolution hit the loop.
        group_name: String,
        /// First view visited twice.
        view_id: ViewId,
    },

    /// The requested view was never fetched.
    #[error("view {0} is unknown")]
    UnknownView(ViewId),
}

impl From<AccessError> for AppError {
    fn from(value: AccessError) -> Self {
        match value {
            AccessError::EmptyInput | AccessError::UnknownView(_) => {
                AppError::NotFound(value.to_string())
            }
            AccessError::InvalidHierarchy { .. } => AppError::Conflict(value.to_string()),
        }
    }
}

/// Effective access of one group on the requested view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolutionResult {
    group_name: String,
    access_level: AccessLevel,
}

impl ResolutionResult {
    /// Creates a resolution entry.
    #[must_use]
    pub fn new(group_name: impl Into<String>, access_level: AccessLevel) -> Self {
        Self {
            group_name: group_name.into(),
            access_level,
        }
    }

    /// Returns the group name.
    #[must_use]
    pub fn group_name(&self) -> &str {
        self.group_name.as_str()
    }

    /// Returns the effective access level.
    #[must_use]
    pub fn access_level(&self) -> AccessLevel {
        self.access_level
    }
}

/// Group whose resolution failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupResolutionFailure {
    group_name: String,
    error: AccessError,
}

impl GroupResolutionFailure {
    /// Returns the group name.
    #[must_use]
    pub fn group_name(&self) -> &str {
        self.group_name.as_str()
    }

    /// Returns the failure.
    #[must_use]
    pub fn error(&self) -> &AccessError {
        &self.error
    }
}

/// Access report for one view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewAccessReport {
    view_id: ViewId,
    entries: Vec<ResolutionResult>,
    failures: Vec<GroupResolutionFailure>,
}

impl ViewAccessReport {
    /// Returns the view the report was computed for.
    #[must_use]
    pub fn view_id(&self) -> ViewId {
        self.view_id
    }

    /// Returns groups with some access, in input order.
    #[must_use]
    pub fn entries(&self) -> &[ResolutionResult] {
        &self.entries
    }

    /// Returns groups that could not be resolved, in input order.
    #[must_use]
    pub fn failures(&self) -> &[GroupResolutionFailure] {
        &self.failures
    }

    /// Returns whether every group resolved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resolves effective access against a borrowed view tree.
#[derive(Debug, Clone, Copy)]
pub struct AccessResolver<'a> {
    tree: &'a ViewTree,
}

impl<'a> AccessResolver<'a> {
    /// Creates a resolver over a built tree.
    #[must_use]
    pub fn new(tree: &'a ViewTree) -> Self {
        Self { tree }
    }

    /// Resolves the access level of one group on one view.
    pub fn resolve(&self, view_id: ViewId, group: &Group) -> Result<AccessLevel, AccessError> {
        if group.has_full_root_access() {
            return Ok(AccessLevel::Full);
        }

        Ok(self
            .effective_permission(view_id, group)?
            .map_or(AccessLevel::None, ViewPermission::access_level))
    }

    /// Resolves every group, dropping those without access.
    pub fn resolve_all<'g>(
        &self,
        view_id: ViewId,
        groups: impl IntoIterator<Item = &'g Group>,
    ) -> ViewAccessReport {
        let mut entries = Vec::new();
        let mut failures = Vec::new();

        for group in groups {
            match self.resolve(view_id, group) {
                Ok(level) if level.has_access() => {
                    entries.push(ResolutionResult::new(group.name().as_str(), level));
                }
                Ok(_) => {}
                Err(error) => failures.push(GroupResolutionFailure {
                    group_name: group.name().as_str().to_owned(),
                    error,
                }),
            }
        }

        ViewAccessReport {
            view_id,
            entries,
            failures,
        }
    }

    fn effective_permission<'g>(
        &self,
        view_id: ViewId,
        group: &'g Group,
    ) -> Result<Option<&'g ViewPermission>, AccessError> {
        let mut visited = HashSet::new();
        let mut current = view_id;

        loop {
            if !visited.insert(current) {
                return Err(AccessError::InvalidHierarchy {
                    group_name: group.name().as_str().to_owned(),
                    view_id: current,
                });
            }

            if let Some(permission) = group.permission_for(current.into()) {
                return Ok(Some(permission));
            }

            match self.tree.parent_of(current) {
                Some(parent_id) => current = parent_id,
                None => return Ok(None),
            }
        }
    }
}
