//! Form controller
//!
//! Owns the record store, the selection and the field text, and is the only
//! thing that moves the form between `Idle` and `Editing`. Every public
//! operation either succeeds and returns an [`Outcome`] or fails without
//! touching any state.

use log::{debug, info, warn};

use super::action::{Confirmation, DeletePrompt, Effect, FormAction, Outcome};
use super::state::{Affordances, EditMode, FormState};
use crate::error::{CoreError, CoreResult};
use crate::store::RecordStore;
use crate::types::{Field, FieldValues, ShipRecord};
use crate::validation::{validate_fields, MessageStyle};

/// Ship form controller
#[derive(Debug, Clone, Default)]
pub struct FormController {
    store: RecordStore,
    selection: Option<usize>,
    state: FormState,
    fields: FieldValues,
    message_style: MessageStyle,
}

impl FormController {
    /// Empty store, nothing selected, idle.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing records. Nothing is selected.
    #[must_use]
    pub fn with_records(store: RecordStore) -> Self {
        Self {
            store,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_message_style(mut self, style: MessageStyle) -> Self {
        self.message_style = style;
        self
    }

    pub fn set_message_style(&mut self, style: MessageStyle) {
        self.message_style = style;
    }

    // ===== Accessors =====

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn selected_record(&self) -> Option<&ShipRecord> {
        self.selection.and_then(|index| self.store.get(index))
    }

    pub fn current_state(&self) -> FormState {
        self.state
    }

    pub fn fields(&self) -> &FieldValues {
        &self.fields
    }

    pub fn message_style(&self) -> MessageStyle {
        self.message_style
    }

    pub fn affordances(&self) -> Affordances {
        Affordances::compute(self.state, self.store.is_empty())
    }

    // ===== Dispatch =====

    /// Apply one user action.
    pub fn apply(&mut self, action: FormAction) -> CoreResult<Outcome> {
        debug!("Applying '{}' while {}", action.name(), self.state.name());
        match action {
            FormAction::Add => self.add(),
            FormAction::Edit => self.edit(),
            FormAction::Submit => self.submit(),
            FormAction::Cancel => self.cancel(),
            FormAction::Delete(confirmation) => self.delete(confirmation),
            FormAction::Select(selection) => self.select(selection),
            FormAction::Input(field, ch) => self.input(field, ch),
            FormAction::Backspace(field) => self.backspace(field),
            FormAction::SetField(field, text) => self.set_field(field, &text),
        }
    }

    // ===== Transitions =====

    /// `Idle -> Editing(Adding)`: deselects and clears the fields.
    pub fn add(&mut self) -> CoreResult<Outcome> {
        self.ensure_allowed("add", self.affordances().add)?;

        self.selection = None;
        self.fields.clear();
        self.state = FormState::Editing(EditMode::Adding);

        debug!("Started adding a ship");
        Ok(self.outcome(Effect::EditingStarted(EditMode::Adding)))
    }

    /// `Idle -> Editing(Updating)`: fields show the selected record.
    pub fn edit(&mut self) -> CoreResult<Outcome> {
        self.ensure_allowed("edit", self.affordances().edit)?;
        let index = self.require_selection()?;

        self.populate_fields();
        let mode = EditMode::Updating { index };
        self.state = FormState::Editing(mode);

        debug!("Started editing ship at index {index}");
        Ok(self.outcome(Effect::EditingStarted(mode)))
    }

    /// Validate and commit. On failure the form stays in `Editing` and the
    /// error carries every validation message.
    pub fn submit(&mut self) -> CoreResult<Outcome> {
        self.ensure_allowed("submit", self.affordances().submit)?;
        let FormState::Editing(mode) = self.state else {
            return Err(self.not_allowed("submit"));
        };

        let record = validate_fields(
            &self.fields,
            &self.store,
            self.selection,
            self.message_style,
        )
        .map_err(|errors| {
            warn!("Submit rejected with {} validation error(s)", errors.len());
            CoreError::Validation(errors)
        })?;

        let index = match self.selection {
            Some(index) => {
                self.store.replace(index, record)?;
                info!("Updated ship at index {index}");
                index
            }
            None => {
                let index = self.store.append(record);
                info!("Added ship at index {index}");
                index
            }
        };

        self.selection = Some(index);
        self.populate_fields();
        self.state = FormState::Idle;

        Ok(self.outcome(Effect::Committed { index, mode }))
    }

    /// `Editing -> Idle` without committing.
    ///
    /// An abandoned add falls back to the first record (if any); an
    /// abandoned edit keeps its selection and restores the record's text.
    pub fn cancel(&mut self) -> CoreResult<Outcome> {
        self.ensure_allowed("cancel", self.affordances().cancel)?;

        if self.selection.is_none() {
            self.selection = (!self.store.is_empty()).then_some(0);
        }
        self.populate_fields();
        self.state = FormState::Idle;

        debug!("Editing cancelled, selection {:?}", self.selection);
        Ok(self.outcome(Effect::Cancelled))
    }

    /// Confirmation text for deleting the selected record. Mutates nothing.
    pub fn delete_prompt(&self) -> CoreResult<DeletePrompt> {
        self.ensure_allowed("delete", self.affordances().delete)?;
        let index = self.require_selection()?;
        let record = self.store.get(index).ok_or(CoreError::IndexOutOfRange {
            index,
            len: self.store.count(),
        })?;
        Ok(DeletePrompt::new(index, record))
    }

    /// Delete the selected record once the user has answered the prompt.
    ///
    /// The selection moves to the previous row; deleting row 0 leaves
    /// nothing selected.
    pub fn delete(&mut self, confirmation: Confirmation) -> CoreResult<Outcome> {
        let prompt = self.delete_prompt()?;

        if confirmation == Confirmation::Declined {
            debug!("Deletion of {} declined", prompt.code);
            return Ok(self.outcome(Effect::DeleteDeclined));
        }

        let record = self.store.remove_at(prompt.index)?;
        self.selection = prompt.index.checked_sub(1);
        self.populate_fields();

        info!("Deleted ship {} at index {}", record.code, prompt.index);
        Ok(self.outcome(Effect::Deleted {
            index: prompt.index,
            record,
        }))
    }

    /// Change the selection while idle; the fields follow it.
    pub fn select(&mut self, selection: Option<usize>) -> CoreResult<Outcome> {
        if !self.state.is_idle() {
            return Err(self.warn_not_allowed("select"));
        }
        if let Some(index) = selection {
            let len = self.store.count();
            if index >= len {
                return Err(CoreError::IndexOutOfRange { index, len });
            }
        }

        self.selection = selection;
        self.populate_fields();
        Ok(self.outcome(Effect::SelectionChanged(selection)))
    }

    // ===== Field editing =====

    /// Type one character; length/width silently refuse non-digits.
    pub fn input(&mut self, field: Field, ch: char) -> CoreResult<Outcome> {
        self.ensure_allowed("input", self.affordances().fields_enabled)?;

        let accepted = field.accepts(ch);
        if accepted {
            self.fields.get_mut(field).push(ch);
        } else {
            debug!("Filtered {ch:?} from {field:?}");
        }
        Ok(self.outcome(Effect::FieldEdited { field, accepted }))
    }

    pub fn backspace(&mut self, field: Field) -> CoreResult<Outcome> {
        self.ensure_allowed("input", self.affordances().fields_enabled)?;

        self.fields.get_mut(field).pop();
        Ok(self.outcome(Effect::FieldEdited {
            field,
            accepted: true,
        }))
    }

    /// Replace a field's text, applying the same filter as typing.
    pub fn set_field(&mut self, field: Field, text: &str) -> CoreResult<Outcome> {
        self.ensure_allowed("input", self.affordances().fields_enabled)?;

        let accepted = self.fields.set(field, text);
        Ok(self.outcome(Effect::FieldEdited { field, accepted }))
    }

    // ===== Helpers =====

    fn populate_fields(&mut self) {
        self.fields = self
            .selected_record()
            .map(FieldValues::from_record)
            .unwrap_or_default();
    }

    fn require_selection(&self) -> CoreResult<usize> {
        self.selection.ok_or(CoreError::NoSelection)
    }

    fn ensure_allowed(&self, action: &'static str, allowed: bool) -> CoreResult<()> {
        if allowed {
            Ok(())
        } else {
            Err(self.warn_not_allowed(action))
        }
    }

    fn warn_not_allowed(&self, action: &'static str) -> CoreError {
        let err = self.not_allowed(action);
        warn!("{err}");
        err
    }

    fn not_allowed(&self, action: &'static str) -> CoreError {
        CoreError::ActionNotAllowed {
            action,
            state: self.state.name(),
        }
    }

    fn outcome(&self, effect: Effect) -> Outcome {
        Outcome {
            state: self.state,
            affordances: self.affordances(),
            selection: self.selection,
            effect,
        }
    }
}
