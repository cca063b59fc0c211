//! Ship record type

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single ship record managed by the form.
///
/// Records are only ever built by validation, so `code` is always the
/// uppercase form of a well-formed ship code and both dimensions are
/// strictly positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipRecord {
    /// Ship name
    pub name: String,
    /// Ship code, e.g. `ABCD-1234-E5`
    pub code: String,
    /// Length
    pub length: u32,
    /// Width
    pub width: u32,
}

impl ShipRecord {
    /// Create a record, normalizing the code to uppercase.
    pub fn new(name: impl Into<String>, code: &str, length: u32, width: u32) -> Self {
        Self {
            name: name.into(),
            code: code.to_ascii_uppercase(),
            length,
            width,
        }
    }
}

/// List rendering: `"<code>, <name>"`
impl fmt::Display for ShipRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.code, self.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uppercases_code() {
        let ship = ShipRecord::new("Enterprise", "abcd-1234-e5", 300, 80);
        assert_eq!(ship.code, "ABCD-1234-E5");
        assert_eq!(ship.name, "Enterprise");
    }

    #[test]
    fn test_display_is_code_then_name() {
        let ship = ShipRecord::new("Enterprise", "ABCD-1234-E5", 300, 80);
        assert_eq!(ship.to_string(), "ABCD-1234-E5, Enterprise");
    }

    #[test]
    fn test_serde_field_names() {
        let ship = ShipRecord::new("Defiant", "WXYZ-0001-A1", 120, 50);
        let json = serde_json::to_value(&ship).unwrap();
        assert_eq!(json["code"], "WXYZ-0001-A1");
        assert_eq!(json["length"], 120);
        assert_eq!(json["width"], 50);
    }
}
