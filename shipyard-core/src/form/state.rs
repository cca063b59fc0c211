//! Form state machine states and the affordance set derived from them

use serde::Serialize;

/// What an `Editing` session is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum EditMode {
    /// A new record is being entered (no selection).
    Adding,
    /// The record at `index` is being modified.
    Updating { index: usize },
}

/// Form state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum FormState {
    /// Browsing: fields read-only, add/edit/delete available.
    #[default]
    Idle,
    /// An add or edit is in progress: fields writable, submit/cancel available.
    Editing(EditMode),
}

impl FormState {
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_editing(self) -> bool {
        matches!(self, Self::Editing(_))
    }

    /// Short name used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Editing(EditMode::Adding) => "adding",
            Self::Editing(EditMode::Updating { .. }) => "editing",
        }
    }
}

/// Which controls are currently usable.
///
/// Purely a function of the form state and whether the store has records;
/// front ends render from this instead of toggling widgets themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Affordances {
    pub fields_enabled: bool,
    pub add: bool,
    pub edit: bool,
    pub delete: bool,
    pub submit: bool,
    pub cancel: bool,
}

impl Affordances {
    pub fn compute(state: FormState, store_is_empty: bool) -> Self {
        match state {
            FormState::Idle => Self {
                fields_enabled: false,
                add: true,
                edit: !store_is_empty,
                delete: !store_is_empty,
                submit: false,
                cancel: false,
            },
            FormState::Editing(_) => Self {
                fields_enabled: true,
                add: false,
                edit: false,
                delete: false,
                submit: true,
                cancel: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_with_records() {
        let a = Affordances::compute(FormState::Idle, false);
        assert!(a.add && a.edit && a.delete);
        assert!(!a.fields_enabled && !a.submit && !a.cancel);
    }

    #[test]
    fn test_idle_empty_store_only_allows_add() {
        let a = Affordances::compute(FormState::Idle, true);
        assert_eq!(
            a,
            Affordances {
                add: true,
                ..Affordances::default()
            }
        );
    }

    #[test]
    fn test_editing_is_independent_of_store() {
        for empty in [true, false] {
            for mode in [EditMode::Adding, EditMode::Updating { index: 0 }] {
                let a = Affordances::compute(FormState::Editing(mode), empty);
                assert!(a.fields_enabled && a.submit && a.cancel);
                assert!(!a.add && !a.edit && !a.delete);
            }
        }
    }

    #[test]
    fn test_state_names() {
        assert_eq!(FormState::Idle.name(), "idle");
        assert_eq!(FormState::Editing(EditMode::Adding).name(), "adding");
        assert_eq!(
            FormState::Editing(EditMode::Updating { index: 3 }).name(),
            "editing"
        );
    }
}
