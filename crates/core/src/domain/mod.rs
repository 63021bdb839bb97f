pub mod item;
pub mod profile;
pub mod recommendation;
pub mod session;

pub use item::{Category, ClearanceItem, ItemId};
pub use profile::{CategoryInterest, UserProfile};
pub use recommendation::{PopupDecision, Recommendation, SuppressionReason};
pub use session::SessionContext;
