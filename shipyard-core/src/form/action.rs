//! Form actions and their outcomes

use serde::Serialize;

use super::state::{Affordances, EditMode, FormState};
use crate::types::{Field, ShipRecord};

/// The user's answer to the delete confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// Everything a user can do to the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Add,
    Edit,
    Submit,
    Cancel,
    /// Delete the selected record, already confirmed or declined.
    Delete(Confirmation),
    /// Pick a list row, or `None` to deselect.
    Select(Option<usize>),
    /// Type one character into a field.
    Input(Field, char),
    /// Remove the last character of a field.
    Backspace(Field),
    /// Replace the whole text of a field (paste).
    SetField(Field, String),
}

impl FormAction {
    /// Short name used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Submit => "submit",
            Self::Cancel => "cancel",
            Self::Delete(_) => "delete",
            Self::Select(_) => "select",
            Self::Input(..) | Self::Backspace(_) | Self::SetField(..) => "input",
        }
    }
}

/// Text of the delete confirmation for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletePrompt {
    pub index: usize,
    pub name: String,
    pub code: String,
}

impl DeletePrompt {
    pub const TITLE: &'static str = "Confirm Ship Deletion";

    pub fn new(index: usize, record: &ShipRecord) -> Self {
        Self {
            index,
            name: record.name.clone(),
            code: record.code.clone(),
        }
    }

    pub fn message(&self) -> String {
        format!(
            "Are you sure you want to delete the ship {} ({})?",
            self.name, self.code
        )
    }
}

/// What an applied action did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Entered `Editing`.
    EditingStarted(EditMode),
    /// A valid submit stored the record at `index`.
    Committed { index: usize, mode: EditMode },
    /// Editing was abandoned.
    Cancelled,
    /// The record formerly at `index` was removed.
    Deleted { index: usize, record: ShipRecord },
    /// The user declined the delete confirmation.
    DeleteDeclined,
    /// The selection (and the displayed fields) changed.
    SelectionChanged(Option<usize>),
    /// Field text changed; `accepted` is false when the filter dropped input.
    FieldEdited { field: Field, accepted: bool },
}

/// Result of a successfully applied action: the new state, the affordance
/// set to render, and what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub state: FormState,
    pub affordances: Affordances,
    pub selection: Option<usize>,
    pub effect: Effect,
}
