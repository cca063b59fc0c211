//! Form state machine
//!
//! ```text
//!            add / edit
//!   Idle ───────────────▶ Editing(Adding | Updating)
//!    ▲  ◀───────────────     │ submit (invalid) ─┐
//!    │   submit (valid)      │                   │
//!    │   cancel              ◀───────────────────┘
//!    │
//!    └── delete (confirmed / declined), select
//! ```
//!
//! [`FormController`] applies [`FormAction`]s and reports an [`Outcome`]
//! carrying the new [`Affordances`]; front ends render from those.

mod action;
mod controller;
mod state;

pub use action::{Confirmation, DeletePrompt, Effect, FormAction, Outcome};
pub use controller::FormController;
pub use state::{Affordances, EditMode, FormState};
