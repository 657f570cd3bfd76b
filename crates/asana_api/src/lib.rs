//! Typed Asana API client crate used by the native app backend.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod rate_limiter;

pub use client::AsanaClient;
pub use config::AsanaConfig;
pub use error::{AsanaError, Result};
pub use models::{Project, ProjectStatus, TaskCounts, UserProfile, Workspace};
