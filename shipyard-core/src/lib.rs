//! Shipyard Core Library
//!
//! Platform-independent business logic for the Shipyard ship registry form:
//! - Record store (ordered, in-memory)
//! - Form controller (`Idle` / `Editing` state machine and affordances)
//! - Field validation (all messages collected, fixed order)
//!
//! Nothing here knows about terminals or widgets; the TUI front end only
//! translates input into [`FormAction`]s and renders [`Outcome`]s.

pub mod error;
pub mod form;
pub mod store;
pub mod types;
pub mod validation;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use form::{
    Affordances, Confirmation, DeletePrompt, EditMode, Effect, FormAction, FormController,
    FormState, Outcome,
};
pub use store::RecordStore;
pub use types::{Field, FieldValues, ShipRecord};
pub use validation::{validate_fields, MessageStyle, ValidationError, ValidationErrors};
