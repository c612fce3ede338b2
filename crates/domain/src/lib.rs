//! Domain entities and invariants for view access reporting.

#![forbid(unsafe_code)]

mod access;
mod security;
mod view;

pub use access::{
    AccessError, AccessResolver, GroupResolutionFailure, ResolutionResult, ViewAccessReport,
};
pub use security::{AccessLevel, Group, PermissionTarget, ViewPermission};
pub use view::{View, ViewId, ViewTree};
