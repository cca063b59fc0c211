//! Form field identity and field text

use serde::Serialize;

use super::ShipRecord;

/// One of the four input fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Code,
    Length,
    Width,
}

impl Field {
    /// All fields in tab order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Code, Self::Length, Self::Width];

    /// Human-readable label
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Ship Name",
            Self::Code => "Ship Code",
            Self::Length => "Length",
            Self::Width => "Width",
        }
    }

    /// Length and width only take ASCII digits.
    pub fn is_numeric(self) -> bool {
        matches!(self, Self::Length | Self::Width)
    }

    /// Keystroke filter: whether `ch` may be typed into this field.
    pub fn accepts(self, ch: char) -> bool {
        !self.is_numeric() || ch.is_ascii_digit()
    }

    /// Next field in tab order (wraps around).
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Code,
            Self::Code => Self::Length,
            Self::Length => Self::Width,
            Self::Width => Self::Name,
        }
    }

    /// Previous field in tab order (wraps around).
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Width,
            Self::Code => Self::Name,
            Self::Length => Self::Code,
            Self::Width => Self::Length,
        }
    }
}

/// Raw text currently held by the input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldValues {
    pub name: String,
    pub code: String,
    pub length: String,
    pub width: String,
}

impl FieldValues {
    /// Field text as displayed for an existing record.
    pub fn from_record(record: &ShipRecord) -> Self {
        Self {
            name: record.name.clone(),
            code: record.code.clone(),
            length: record.length.to_string(),
            width: record.width.to_string(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Code => &self.code,
            Field::Length => &self.length,
            Field::Width => &self.width,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Code => &mut self.code,
            Field::Length => &mut self.length,
            Field::Width => &mut self.width,
        }
    }

    /// Replace the text of a field, dropping characters its filter rejects.
    ///
    /// Returns `true` when nothing had to be dropped.
    pub fn set(&mut self, field: Field, text: &str) -> bool {
        let filtered: String = text.chars().filter(|ch| field.accepts(*ch)).collect();
        let clean = filtered.len() == text.len();
        *self.get_mut(field) = filtered;
        clean
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_fields_reject_non_digits() {
        for field in [Field::Length, Field::Width] {
            assert!(field.accepts('0'));
            assert!(field.accepts('9'));
            assert!(!field.accepts('a'));
            assert!(!field.accepts('-'));
            assert!(!field.accepts('+'));
            assert!(!field.accepts(' '));
            assert!(!field.accepts('٣'));
        }
    }

    #[test]
    fn test_text_fields_accept_anything() {
        for field in [Field::Name, Field::Code] {
            assert!(field.accepts('a'));
            assert!(field.accepts('-'));
            assert!(field.accepts(' '));
            assert!(field.accepts('7'));
        }
    }

    #[test]
    fn test_tab_order_wraps() {
        let mut field = Field::Name;
        for expected in [Field::Code, Field::Length, Field::Width, Field::Name] {
            field = field.next();
            assert_eq!(field, expected);
        }
        assert_eq!(Field::Name.prev(), Field::Width);
        assert_eq!(Field::Width.prev(), Field::Length);
    }

    #[test]
    fn test_set_filters_numeric_text() {
        let mut values = FieldValues::default();
        assert!(!values.set(Field::Length, "1a2b3"));
        assert_eq!(values.length, "123");
        assert!(values.set(Field::Code, "abcd-1234-e5"));
        assert_eq!(values.code, "abcd-1234-e5");
    }

    #[test]
    fn test_from_record() {
        let record = ShipRecord::new("Enterprise", "ABCD-1234-E5", 300, 80);
        let values = FieldValues::from_record(&record);
        assert_eq!(values.get(Field::Name), "Enterprise");
        assert_eq!(values.get(Field::Code), "ABCD-1234-E5");
        assert_eq!(values.get(Field::Length), "300");
        assert_eq!(values.get(Field::Width), "80");
    }
}
