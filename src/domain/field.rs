use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// The kind of value a table column holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Status,
    Number,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Date => "date",
            Self::Status => "status",
            Self::Number => "number",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A typed cell value, read from or written to a record field
///
/// Replaces stringly-typed `record[key]` lookup: every column declares its
/// kind, and reads/writes move through this tagged value.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Date(NaiveDate),
    Status(String),
    Number(f64),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text(_) => FieldKind::Text,
            Self::Date(_) => FieldKind::Date,
            Self::Status(_) => FieldKind::Status,
            Self::Number(_) => FieldKind::Number,
        }
    }

    pub fn text(s: impl AsRef<str>) -> Self {
        Self::Text(s.as_ref().to_string())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Status(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Natural comparison for sorting table rows
    ///
    /// Numbers compare numerically, dates chronologically, text and status
    /// values lexicographically by code unit (plain `<`/`>` on strings);
    /// genuinely mixed kinds fall back to their display strings.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            (Self::Text(a) | Self::Status(a), Self::Text(b) | Self::Status(b)) => a.cmp(b),
            _ => self.to_string().cmp(&other.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) | Self::Status(s) => write!(f, "{}", s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Column descriptor implemented by each record type's field enum
///
/// `key` is the wire/column identifier (matching the serialized field name),
/// `kind` drives both cell rendering and write-time validation.
pub trait FieldDef: Copy + Eq + fmt::Debug + 'static {
    fn key(&self) -> &'static str;
    fn kind(&self) -> FieldKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_field_value_kinds() {
        assert_eq!(FieldValue::text("hola").kind(), FieldKind::Text);
        assert_eq!(FieldValue::Number(3.5).kind(), FieldKind::Number);
        assert_eq!(FieldValue::Date(date(2023, 11, 5)).kind(), FieldKind::Date);
        assert_eq!(
            FieldValue::Status("Entregado".to_string()).kind(),
            FieldKind::Status
        );
    }

    #[test]
    fn test_number_comparison() {
        let a = FieldValue::Number(150.0);
        let b = FieldValue::Number(1200.0);

        // Numeric, not lexicographic: "1200" < "150" as strings
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a), Ordering::Equal);
    }

    #[test]
    fn test_date_comparison() {
        let early = FieldValue::Date(date(2023, 10, 30));
        let late = FieldValue::Date(date(2023, 11, 5));
        assert_eq!(early.compare(&late), Ordering::Less);
    }

    #[test]
    fn test_text_comparison_is_lexicographic_by_code_unit() {
        let upper = FieldValue::text("BANANA");
        let lower = FieldValue::text("apple");

        // Uppercase sorts before lowercase, exactly as `<` on strings does
        assert_eq!(upper.compare(&lower), Ordering::Less);
        assert_eq!(lower.compare(&upper), Ordering::Greater);
        assert_eq!(lower.compare(&lower), Ordering::Equal);
    }

    #[test]
    fn test_text_and_status_compare_as_strings() {
        let text = FieldValue::text("En Espera");
        let status = FieldValue::Status("Entregado".to_string());
        assert_eq!(text.compare(&status), Ordering::Less);
    }

    #[test]
    fn test_display() {
        assert_eq!(FieldValue::Date(date(2023, 11, 5)).to_string(), "2023-11-05");
        assert_eq!(FieldValue::Number(400.0).to_string(), "400");
        assert_eq!(FieldValue::text("Centro").to_string(), "Centro");
    }
}
