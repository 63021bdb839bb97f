pub mod config;
pub mod domain;
pub mod engine;
pub mod errors;

pub use config::{AppConfig, ConfigError, EngineConfig, LoadOptions, LogFormat};
pub use domain::{
    Category, CategoryInterest, ClearanceItem, ItemId, PopupDecision, Recommendation,
    SessionContext, SuppressionReason, UserProfile,
};
pub use engine::{ClearanceEngine, EngineState, RecentlyShown, UrgencySource};
pub use errors::{ApplicationError, DomainError, InterfaceError};
