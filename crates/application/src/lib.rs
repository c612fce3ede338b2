//! Application services and ports.

#![forbid(unsafe_code)]

mod view_access_service;

pub use view_access_service::{GroupSource, ViewAccessOptions, ViewAccessService, ViewSource};
