use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use view_access_core::{AppResult, NonEmptyString};

use crate::ViewId;

/// Target of an explicit permission record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionTarget {
    /// The top of the whole hierarchy rather than any single view.
    RootScope,
    /// One concrete view.
    View(ViewId),
}

impl PermissionTarget {
    /// Returns the platform identifier used for this target.
    #[must_use]
    pub fn view_id(&self) -> ViewId {
        match self {
            Self::RootScope => ViewId::ROOT,
            Self::View(view_id) => *view_id,
        }
    }
}

impl From<ViewId> for PermissionTarget {
    fn from(value: ViewId) -> Self {
        if value.is_root() {
            Self::RootScope
        } else {
            Self::View(value)
        }
    }
}

/// Effective access a group holds on a view.
///
/// Variants are ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessLevel {
    /// No explicit or inherited record.
    None,
    /// May change the view's configuration only.
    Config,
    /// May change the view's data.
    Write,
    /// May change both data and structure.
    Full,
}

impl AccessLevel {
    /// Returns a stable transport value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Config => "config",
            Self::Write => "write",
            Self::Full => "full",
        }
    }

    /// Returns whether the level grants any access at all.
    #[must_use]
    pub fn has_access(&self) -> bool {
        *self != Self::None
    }
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Explicit grant of one group on one view or on the root scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewPermission {
    target: PermissionTarget,
    write_access: bool,
    editable: bool,
}

impl ViewPermission {
    /// Creates a permission record.
    #[must_use]
    pub fn new(target: PermissionTarget, write_access: bool, editable: bool) -> Self {
        Self {
            target,
            write_access,
            editable,
        }
    }

    /// Returns the record target.
    #[must_use]
    pub fn target(&self) -> PermissionTarget {
        self.target
    }

    /// Returns whether the record grants data modification.
    #[must_use]
    pub fn write_access(&self) -> bool {
        self.write_access
    }

    /// Returns whether the record grants structure modification.
    #[must_use]
    pub fn editable(&self) -> bool {
        self.editable
    }

    /// Returns whether both flags are set.
    #[must_use]
    pub fn grants_full(&self) -> bool {
        self.write_access && self.editable
    }

    /// Classifies the record.
    ///
    /// Write access dominates: `editable` alone never lifts a record above
    /// [`AccessLevel::Config`].
    #[must_use]
    pub fn access_level(&self) -> AccessLevel {
        if self.grants_full() {
            AccessLevel::Full
        } else if self.write_access {
            AccessLevel::Write
        } else {
            AccessLevel::Config
        }
    }
}

/// Named user group with its sparse permission records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: NonEmptyString,
    permissions: Vec<ViewPermission>,
    by_target: HashMap<PermissionTarget, usize>,
}

impl Group {
    /// Creates a validated group.
    ///
    /// When a target appears in more than one record the first one is used.
    pub fn new(name: impl Into<String>, permissions: Vec<ViewPermission>) -> AppResult<Self> {
        let mut by_target = HashMap::with_capacity(permissions.len());
        for (position, permission) in permissions.iter().enumerate() {
            by_target.entry(permission.target()).or_insert(position);
        }

        Ok(Self {
            name: NonEmptyString::new(name)?,
            permissions,
            by_target,
        })
    }

    /// Returns the group name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the records as supplied.
    #[must_use]
    pub fn permissions(&self) -> &[ViewPermission] {
        &self.permissions
    }

    /// Finds the record bound to a target.
    #[must_use]
    pub fn permission_for(&self, target: PermissionTarget) -> Option<&ViewPermission> {
        self.by_target
            .get(&target)
            .and_then(|position| self.permissions.get(*position))
    }

    /// Returns whether the group fully controls the root scope.
    #[must_use]
    pub fn has_full_root_access(&self) -> bool {
        self.permission_for(PermissionTarget::RootScope)
            .is_some_and(ViewPermission::grants_full)
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessLevel, Group, PermissionTarget, ViewPermission};
    use crate::ViewId;

    fn on_view(id: i32, write_access: bool, editable: bool) -> ViewPermission {
        ViewPermission::new(ViewId::new(id).into(), write_access, editable)
    }

    #[test]
    fn classification_is_write_dominant() {
        assert_eq!(on_view(1, true, true).access_level(), AccessLevel::Full);
        assert_eq!(on_view(1, true, false).access_level(), AccessLevel::Write);
        assert_eq!(on_view(1, false, true).access_level(), AccessLevel::Config);
        assert_eq!(on_view(1, false, false).access_level(), AccessLevel::Config);
    }

    #[test]
    fn sentinel_identifier_maps_to_root_scope() {
        assert_eq!(
            PermissionTarget::from(ViewId::ROOT),
            PermissionTarget::RootScope
        );
        assert_eq!(PermissionTarget::RootScope.view_id(), ViewId::ROOT);
        assert_eq!(
            PermissionTarget::from(ViewId::new(3)),
            PermissionTarget::View(ViewId::new(3))
        );
    }

    #[test]
    fn group_keeps_first_record_per_target() {
        let group = Group::new(
            "Operators",
            vec![on_view(4, true, false), on_view(4, false, false)],
        )
        .unwrap_or_else(|_| unreachable!());

        let found = group.permission_for(PermissionTarget::View(ViewId::new(4)));
        assert_eq!(found.map(ViewPermission::access_level), Some(AccessLevel::Write));
        assert_eq!(group.permissions().len(), 2);
    }

    #[test]
    fn group_name_must_not_be_blank() {
        assert!(Group::new("  ", Vec::new()).is_err());
    }

    #[test]
    fn full_root_access_requires_both_flags() {
        let partial = Group::new("Partial", vec![on_view(-1, true, false)])
            .unwrap_or_else(|_| unreachable!());
        let full = Group::new("Admins", vec![on_view(-1, true, true)])
            .unwrap_or_else(|_| unreachable!());

        assert!(!partial.has_full_root_access());
        assert!(full.has_full_root_access());
    }

    #[test]
    fn access_levels_order_from_none_to_full() {
        assert!(AccessLevel::None < AccessLevel::Config);
        assert!(AccessLevel::Config < AccessLevel::Write);
        assert!(AccessLevel::Write < AccessLevel::Full);
        assert!(!AccessLevel::None.has_access());
        assert_eq!(AccessLevel::Write.to_string(), "write");
    }
}
