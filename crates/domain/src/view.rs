use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use view_access_core::AppError;

use crate::AccessError;

/// Platform identifier of a view in the hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(i32);

impl ViewId {
    /// Top of the whole view hierarchy.
    pub const ROOT: Self = Self(-1);

    /// Creates a view identifier from the platform value.
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the platform value.
    #[must_use]
    pub fn as_i32(&self) -> i32 {
        self.0
    }

    /// Returns whether this identifier is the top of the hierarchy.
    #[must_use]
    pub fn is_root(&self) -> bool {
        *self == Self::ROOT
    }
}

impl FromStr for ViewId {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        value
            .trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| AppError::Validation(format!("'{value}' is not a valid view id")))
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// One node of the view hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct View {
    id: ViewId,
    parent_id: Option<ViewId>,
    name: Option<String>,
}

impl View {
    /// Creates a view from its platform identifier and parent identifier.
    ///
    /// A parent of [`ViewId::ROOT`] places the view directly under the top of
    /// the hierarchy. The top itself never has a parent, whatever the
    /// platform reports for it.
    #[must_use]
    pub fn new(id: ViewId, parent_id: ViewId) -> Self {
        Self {
            id,
            parent_id: (!id.is_root()).then_some(parent_id),
            name: None,
        }
    }

    /// Attaches a display name. Blank names are ignored.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into().trim().to_owned();
        self.name = (!name.is_empty()).then_some(name);
        self
    }

    /// Returns the view identifier.
    #[must_use]
    pub fn id(&self) -> ViewId {
        self.id
    }

    /// Returns the parent identifier, `None` for the top of the hierarchy.
    #[must_use]
    pub fn parent_id(&self) -> Option<ViewId> {
        self.parent_id
    }

    /// Returns the display name, if the platform supplied one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the display name or the identifier when the view is unnamed.
    #[must_use]
    pub fn label(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("view {}", self.id))
    }
}

/// Read-only index of every view fetched for a session.
#[derive(Debug, Clone)]
pub struct ViewTree {
    views: HashMap<ViewId, View>,
}

impl ViewTree {
    /// Indexes views by identifier.
    ///
    /// When an identifier is listed twice the first view wins.
    pub fn build(views: impl IntoIterator<Item = View>) -> Result<Self, AccessError> {
        let mut indexed = HashMap::new();
        for view in views {
            indexed.entry(view.id()).or_insert(view);
        }

        if indexed.is_empty() {
            return Err(AccessError::EmptyInput);
        }

        Ok(Self { views: indexed })
    }

    /// Returns the parent of a view.
    ///
    /// Unknown views and the top of the hierarchy have no further parent.
    #[must_use]
    pub fn parent_of(&self, view_id: ViewId) -> Option<ViewId> {
        if view_id.is_root() {
            return None;
        }

        self.views.get(&view_id).and_then(View::parent_id)
    }

    /// Returns whether the view was fetched into the tree.
    ///
    /// The top of the hierarchy is always present.
    #[must_use]
    pub fn contains(&self, view_id: ViewId) -> bool {
        view_id.is_root() || self.views.contains_key(&view_id)
    }

    /// Finds one indexed view.
    #[must_use]
    pub fn get(&self, view_id: ViewId) -> Option<&View> {
        self.views.get(&view_id)
    }

    /// Returns all views ordered by identifier.
    #[must_use]
    pub fn views(&self) -> Vec<&View> {
        let mut views: Vec<&View> = self.views.values().collect();
        views.sort_by_key(|view| view.id());
        views
    }

    /// Returns the number of indexed views.
    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    /// Returns whether the tree holds no views. Always false once built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
