//! Command handlers grouped by concern.

pub(crate) mod analysis;
pub(crate) mod auth;
pub(crate) mod tasks;
