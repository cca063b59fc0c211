//! Form validation
//!
//! Validation runs only when a submit is attempted. It never stops at the
//! first problem: every applicable message is collected, in a fixed order
//! (name, code, length, width), so the user can fix all of them at once.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::store::RecordStore;
use crate::types::{Field, FieldValues, ShipRecord};

/// Ship codes look like `AAAA-1111-A1`.
#[allow(clippy::expect_used)]
static SHIP_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{4}-[0-9]{4}-[A-Za-z][0-9]$").expect("ship code pattern is a valid literal")
});

/// Whether `code` is a well-formed ship code (either case).
pub fn is_valid_ship_code(code: &str) -> bool {
    SHIP_CODE_PATTERN.is_match(code)
}

/// Wording used for the width messages.
///
/// `Legacy` reports width failures with the length messages, word for word;
/// `Corrected` names the width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStyle {
    #[default]
    Corrected,
    Legacy,
}

/// A single validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationError {
    NameEmpty,
    CodeEmpty,
    CodeInvalid,
    CodeDuplicate,
    LengthEmpty,
    LengthInvalid,
    WidthEmpty,
    WidthInvalid,
}

impl ValidationError {
    /// The field this error refers to.
    pub fn field(self) -> Field {
        match self {
            Self::NameEmpty => Field::Name,
            Self::CodeEmpty | Self::CodeInvalid | Self::CodeDuplicate => Field::Code,
            Self::LengthEmpty | Self::LengthInvalid => Field::Length,
            Self::WidthEmpty | Self::WidthInvalid => Field::Width,
        }
    }

    /// User-facing message text.
    pub fn message(self, style: MessageStyle) -> &'static str {
        match (self, style) {
            (Self::NameEmpty, _) => "Please enter a ship name.",
            (Self::CodeEmpty, _) => "Please enter a ship code.",
            (Self::CodeInvalid, _) => "Please enter a valid ship code.",
            (Self::CodeDuplicate, _) => "Ship code already exists.",
            (Self::LengthEmpty, _) | (Self::WidthEmpty, MessageStyle::Legacy) => {
                "Please enter a ship length."
            }
            (Self::LengthInvalid, _) | (Self::WidthInvalid, MessageStyle::Legacy) => {
                "Please enter a valid ship length."
            }
            (Self::WidthEmpty, MessageStyle::Corrected) => "Please enter a ship width.",
            (Self::WidthInvalid, MessageStyle::Corrected) => "Please enter a valid ship width.",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message(MessageStyle::default()))
    }
}

/// Every validation failure of one submit attempt, in check order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
    style: MessageStyle,
}

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn contains(&self, error: ValidationError) -> bool {
        self.errors.contains(&error)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Messages in check order, worded per the configured style.
    pub fn messages(&self) -> Vec<&'static str> {
        self.errors.iter().map(|e| e.message(self.style)).collect()
    }

    /// Field of the first failure, where the cursor should go.
    pub fn first_field(&self) -> Option<Field> {
        self.errors.first().map(|e| e.field())
    }
}

/// One message per line.
impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.messages().join("\n"))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate the form fields and build the record they describe.
///
/// `selection` is the record being edited, if any; its own code is not
/// treated as a duplicate.
pub fn validate_fields(
    fields: &FieldValues,
    store: &RecordStore,
    selection: Option<usize>,
    style: MessageStyle,
) -> Result<ShipRecord, ValidationErrors> {
    let mut errors = Vec::new();

    if fields.name.is_empty() {
        errors.push(ValidationError::NameEmpty);
    }

    if fields.code.is_empty() {
        errors.push(ValidationError::CodeEmpty);
    } else if !is_valid_ship_code(&fields.code) {
        errors.push(ValidationError::CodeInvalid);
    } else if store.code_exists(&fields.code, selection) {
        errors.push(ValidationError::CodeDuplicate);
    }

    let length = parse_dimension(
        &fields.length,
        ValidationError::LengthEmpty,
        ValidationError::LengthInvalid,
    )
    .map_err(|e| errors.push(e))
    .ok();

    let width = parse_dimension(
        &fields.width,
        ValidationError::WidthEmpty,
        ValidationError::WidthInvalid,
    )
    .map_err(|e| errors.push(e))
    .ok();

    match (length, width) {
        (Some(length), Some(width)) if errors.is_empty() => {
            Ok(ShipRecord::new(fields.name.clone(), &fields.code, length, width))
        }
        _ => Err(ValidationErrors { errors, style }),
    }
}

/// Parse a length/width field into a positive integer.
///
/// Text that slipped past the keystroke filter (signs, spaces, overflow)
/// fails as invalid rather than panicking.
fn parse_dimension(
    text: &str,
    empty: ValidationError,
    invalid: ValidationError,
) -> Result<u32, ValidationError> {
    if text.is_empty() {
        return Err(empty);
    }
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid);
    }
    match text.parse::<u32>() {
        Ok(0) | Err(_) => Err(invalid),
        Ok(value) => Ok(value),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn fields(name: &str, code: &str, length: &str, width: &str) -> FieldValues {
        FieldValues {
            name: name.to_string(),
            code: code.to_string(),
            length: length.to_string(),
            width: width.to_string(),
        }
    }

    fn store_with(codes: &[&str]) -> RecordStore {
        codes
            .iter()
            .enumerate()
            .map(|(i, code)| ShipRecord::new(format!("Ship {i}"), code, 10, 5))
            .collect()
    }

    // ==================== ship code pattern ====================

    #[test]
    fn test_ship_code_pattern() {
        assert!(is_valid_ship_code("ABCD-1234-E5"));
        assert!(is_valid_ship_code("abcd-1234-e5"));
        assert!(is_valid_ship_code("AbCd-0000-z9"));

        assert!(!is_valid_ship_code("ABC-1234-E5"));
        assert!(!is_valid_ship_code("ABCD-123-E5"));
        assert!(!is_valid_ship_code("ABCD-1234-55"));
        assert!(!is_valid_ship_code("ABCD-1234-EE"));
        assert!(!is_valid_ship_code("ABCD1234E5"));
        assert!(!is_valid_ship_code(" ABCD-1234-E5"));
        assert!(!is_valid_ship_code("XABCD-1234-E5"));
        assert!(!is_valid_ship_code("ABCD-1234-E55"));
        assert!(!is_valid_ship_code("ÀBCD-1234-E5"));
    }

    // ==================== validate_fields ====================

    #[test]
    fn test_valid_fields_build_uppercase_record() {
        let store = RecordStore::new();
        let record = validate_fields(
            &fields("Enterprise", "abcd-1234-e5", "300", "80"),
            &store,
            None,
            MessageStyle::Corrected,
        )
        .unwrap();
        assert_eq!(record, ShipRecord::new("Enterprise", "ABCD-1234-E5", 300, 80));
    }

    #[test]
    fn test_all_empty_collects_every_message_in_order() {
        let errors = validate_fields(
            &FieldValues::default(),
            &RecordStore::new(),
            None,
            MessageStyle::Corrected,
        )
        .unwrap_err();
        assert_eq!(
            errors.messages(),
            [
                "Please enter a ship name.",
                "Please enter a ship code.",
                "Please enter a ship length.",
                "Please enter a ship width.",
            ]
        );
        assert_eq!(errors.first_field(), Some(Field::Name));
    }

    #[test]
    fn test_legacy_style_repeats_length_messages_for_width() {
        let empty = validate_fields(
            &fields("A", "ABCD-1234-E5", "", ""),
            &RecordStore::new(),
            None,
            MessageStyle::Legacy,
        )
        .unwrap_err();
        assert_eq!(
            empty.messages(),
            ["Please enter a ship length.", "Please enter a ship length."]
        );

        let zero = validate_fields(
            &fields("A", "ABCD-1234-E5", "0", "0"),
            &RecordStore::new(),
            None,
            MessageStyle::Legacy,
        )
        .unwrap_err();
        assert_eq!(
            zero.messages(),
            [
                "Please enter a valid ship length.",
                "Please enter a valid ship length."
            ]
        );
    }

    #[test]
    fn test_zero_dimensions_are_invalid() {
        let errors = validate_fields(
            &fields("A", "ABCD-1234-E5", "0", "000"),
            &RecordStore::new(),
            None,
            MessageStyle::Corrected,
        )
        .unwrap_err();
        assert_eq!(
            errors.errors(),
            [ValidationError::LengthInvalid, ValidationError::WidthInvalid]
        );
        assert_eq!(
            errors.to_string(),
            "Please enter a valid ship length.\nPlease enter a valid ship width."
        );
    }

    #[test]
    fn test_non_numeric_and_overflow_fail_instead_of_panicking() {
        for bad in ["12a", "+5", " 5", "-1", "99999999999999999999"] {
            let errors = validate_fields(
                &fields("A", "ABCD-1234-E5", bad, "5"),
                &RecordStore::new(),
                None,
                MessageStyle::Corrected,
            )
            .unwrap_err();
            assert_eq!(errors.errors(), [ValidationError::LengthInvalid], "input {bad:?}");
        }
    }

    #[test]
    fn test_leading_zeros_are_accepted() {
        let record = validate_fields(
            &fields("A", "ABCD-1234-E5", "007", "01"),
            &RecordStore::new(),
            None,
            MessageStyle::Corrected,
        )
        .unwrap();
        assert_eq!((record.length, record.width), (7, 1));
    }

    #[test]
    fn test_invalid_code_skips_duplicate_check() {
        let store = store_with(&["ABCD-1234-E5"]);
        let errors = validate_fields(
            &fields("A", "ABCD-1234", "1", "1"),
            &store,
            None,
            MessageStyle::Corrected,
        )
        .unwrap_err();
        assert_eq!(errors.errors(), [ValidationError::CodeInvalid]);
    }

    #[test]
    fn test_duplicate_code_case_insensitive() {
        let store = store_with(&["ABCD-1234-E5", "WXYZ-9999-Q1"]);
        let errors = validate_fields(
            &fields("A", "wxyz-9999-q1", "1", "1"),
            &store,
            None,
            MessageStyle::Corrected,
        )
        .unwrap_err();
        assert_eq!(errors.messages(), ["Ship code already exists."]);
    }

    #[test]
    fn test_own_code_is_not_a_duplicate_when_editing() {
        let store = store_with(&["ABCD-1234-E5", "WXYZ-9999-Q1"]);
        assert!(validate_fields(
            &fields("Renamed", "WXYZ-9999-Q1", "1", "1"),
            &store,
            Some(1),
            MessageStyle::Corrected,
        )
        .is_ok());

        // 另一条记录的编号仍然冲突
        let errors = validate_fields(
            &fields("Renamed", "ABCD-1234-E5", "1", "1"),
            &store,
            Some(1),
            MessageStyle::Corrected,
        )
        .unwrap_err();
        assert!(errors.contains(ValidationError::CodeDuplicate));
    }

    #[test]
    fn test_errors_from_every_field_accumulate() {
        let store = store_with(&["ABCD-1234-E5"]);
        let errors = validate_fields(
            &fields("", "abcd-1234-e5", "0", ""),
            &store,
            None,
            MessageStyle::Corrected,
        )
        .unwrap_err();
        assert_eq!(
            errors.errors(),
            [
                ValidationError::NameEmpty,
                ValidationError::CodeDuplicate,
                ValidationError::LengthInvalid,
                ValidationError::WidthEmpty,
            ]
        );
    }

    #[test]
    fn test_message_style_serde() {
        assert_eq!(
            serde_json::from_str::<MessageStyle>("\"legacy\"").unwrap(),
            MessageStyle::Legacy
        );
        assert_eq!(
            serde_json::to_string(&MessageStyle::Corrected).unwrap(),
            "\"corrected\""
        );
    }
}
