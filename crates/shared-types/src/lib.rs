pub mod config;
pub mod error;
pub mod models;

pub use config::{AppConfig, Backend, BackendKind, FeatureFlags, Limits};
pub use error::{AppError, AppErrorKind};
pub use models::{NewAccount, Session, UserRole};
