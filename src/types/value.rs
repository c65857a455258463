//! Dynamic argument values and numeric coercion.
//!
//! A connect-style entry point accepts loosely typed arguments. `ArgValue`
//! models whatever a caller placed in an argument slot, so validation can
//! report exactly what it received.

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A value occupying an argument slot or an options field.
#[derive(Debug, Clone, Default)]
pub enum ArgValue {
    /// The slot was not supplied at all.
    #[default]
    Undefined,
    /// An explicit null.
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<ArgValue>),
    Object(BTreeMap<String, ArgValue>),
}

impl ArgValue {
    /// An empty object (`{}`).
    pub fn empty_object() -> Self {
        Self::Object(BTreeMap::new())
    }

    /// Name of the value's type as a caller would describe it.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    /// True for `undefined` and `null`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }

    /// Borrow the contained string, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric interpretation of numbers and strings.
    ///
    /// Other types have no numeric interpretation and return `None`.
    pub fn to_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::String(s) => Some(string_to_number(s)),
            _ => None,
        }
    }
}

/// Numbers compare with same-value-zero semantics: `NaN` equals `NaN` and
/// `0` equals `-0`.
impl PartialEq for ArgValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => same_value_zero(*a, *b),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

pub(crate) fn same_value_zero(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => write!(f, "undefined"),
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", format_number(*n)),
            Self::String(s) => write!(f, "'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")),
            Self::Array(items) if items.is_empty() => write!(f, "[]"),
            Self::Array(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[ {} ]", parts.join(", "))
            }
            Self::Object(fields) if fields.is_empty() => write!(f, "{{}}"),
            Self::Object(fields) => {
                let parts: Vec<String> = fields
                    .iter()
                    .map(|(key, value)| format!("{}: {}", key, value))
                    .collect();
                write!(f, "{{ {} }}", parts.join(", "))
            }
        }
    }
}

/// Render a number the way it would be printed back to a user.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if n == 0.0 && n.is_sign_negative() {
        "-0".to_string()
    } else {
        n.to_string()
    }
}

impl Serialize for ArgValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Undefined => serializer.serialize_str("undefined"),
            Self::Null => serializer.serialize_unit(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Self::Number(n) => serializer.serialize_str(&format_number(*n)),
            Self::String(s) => serializer.serialize_str(s),
            Self::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Object(fields) => {
                let mut map = serializer.serialize_map(Some(fields.len()))?;
                for (key, value) in fields {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<serde_json::Value> for ArgValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(fields) => Self::Object(
                fields
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u16> for ArgValue {
    fn from(value: u16) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<ArgValue>> for ArgValue {
    fn from(value: Vec<ArgValue>) -> Self {
        Self::Array(value)
    }
}

/// Literal grammar used for command-line input.
///
/// JSON is tried first, then the bare tokens `undefined`, `NaN` and
/// `Infinity` (optionally signed). Anything else is taken as a bare string,
/// so `0x50` is the string `"0x50"` while `80` is the number 80.
impl FromStr for ArgValue {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = match s.trim() {
            "undefined" => Self::Undefined,
            "NaN" => Self::Number(f64::NAN),
            "Infinity" | "+Infinity" => Self::Number(f64::INFINITY),
            "-Infinity" => Self::Number(f64::NEG_INFINITY),
            _ => match serde_json::from_str::<serde_json::Value>(s) {
                Ok(json) => Self::from(json),
                Err(_) => Self::String(s.to_string()),
            },
        };
        Ok(value)
    }
}

fn is_numeric_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// True when the string holds nothing but whitespace.
pub(crate) fn is_blank(s: &str) -> bool {
    s.trim_matches(is_numeric_whitespace).is_empty()
}

/// Convert a string to a number using the string-numeric-literal grammar.
///
/// Surrounding whitespace is ignored and an empty string is 0. Unsigned
/// `0x`, `0o` and `0b` literals are read in their radix; signed decimal
/// literals may carry a fraction and an exponent. Anything else is `NaN`.
pub fn string_to_number(input: &str) -> f64 {
    let s = input.trim_matches(is_numeric_whitespace);
    if s.is_empty() {
        return 0.0;
    }
    if let Some(value) = parse_prefixed(s) {
        return value;
    }
    match s {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if is_decimal_literal(s) => s.parse().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Parse a radix-prefixed literal. `None` means the string carries no prefix.
fn parse_prefixed(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

fn is_decimal_literal(s: &str) -> bool {
    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    let (mantissa, exponent) = match body.find(['e', 'E']) {
        Some(idx) => (&body[..idx], Some(&body[idx + 1..])),
        None => (body, None),
    };
    let (int_part, frac_part) = match mantissa.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (mantissa, None),
    };

    if !all_digits(int_part) || !frac_part.map_or(true, all_digits) {
        return false;
    }
    if int_part.is_empty() && frac_part.map_or(true, str::is_empty) {
        return false;
    }

    match exponent {
        None => true,
        Some(exp) => {
            let digits = exp.strip_prefix(['+', '-']).unwrap_or(exp);
            !digits.is_empty() && all_digits(digits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_strings() {
        assert_eq!(string_to_number("80"), 80.0);
        assert_eq!(string_to_number("  443\n"), 443.0);
        assert_eq!(string_to_number("+22"), 22.0);
        assert_eq!(string_to_number("-1"), -1.0);
        assert_eq!(string_to_number("1e3"), 1000.0);
        assert_eq!(string_to_number("80.5"), 80.5);
        assert_eq!(string_to_number(".5"), 0.5);
        assert_eq!(string_to_number("5."), 5.0);
    }

    #[test]
    fn test_prefixed_strings() {
        assert_eq!(string_to_number("0x50"), 80.0);
        assert_eq!(string_to_number("0XfF"), 255.0);
        assert_eq!(string_to_number("0o17"), 15.0);
        assert_eq!(string_to_number("0b101"), 5.0);
        assert!(string_to_number("0x").is_nan());
        assert!(string_to_number("-0x1").is_nan());
        assert!(string_to_number("0xZZ").is_nan());
    }

    #[test]
    fn test_non_numeric_strings() {
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number("   "), 0.0);
        assert!(string_to_number("abc").is_nan());
        assert!(string_to_number("80abc").is_nan());
        assert!(string_to_number("1e").is_nan());
        assert!(string_to_number(".").is_nan());
        assert!(string_to_number("inf").is_nan());
        assert!(string_to_number("nan").is_nan());
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_to_number() {
        assert_eq!(ArgValue::from(80).to_number(), Some(80.0));
        assert_eq!(ArgValue::from("0x50").to_number(), Some(80.0));
        assert!(ArgValue::from("abc").to_number().unwrap().is_nan());
        assert_eq!(ArgValue::Bool(true).to_number(), None);
        assert_eq!(ArgValue::Null.to_number(), None);
        assert!(ArgValue::Null.is_nullish());
        assert!(!ArgValue::from(0).is_nullish());
        assert_eq!(ArgValue::from("80").as_str(), Some("80"));
    }

    #[test]
    fn test_same_value_zero_equality() {
        assert_eq!(ArgValue::Number(f64::NAN), ArgValue::Number(f64::NAN));
        assert_eq!(ArgValue::Number(0.0), ArgValue::Number(-0.0));
        assert_ne!(ArgValue::Number(1.0), ArgValue::String("1".into()));
        assert_ne!(ArgValue::Undefined, ArgValue::Null);
    }

    #[test]
    fn test_display() {
        assert_eq!(ArgValue::Number(80.0).to_string(), "80");
        assert_eq!(ArgValue::Number(1.5).to_string(), "1.5");
        assert_eq!(ArgValue::Number(f64::NAN).to_string(), "NaN");
        assert_eq!(ArgValue::Number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(ArgValue::from("0x").to_string(), "'0x'");
        assert_eq!(ArgValue::from("it's").to_string(), r"'it\'s'");
        assert_eq!(ArgValue::from(r"a\").to_string(), r"'a\\'");
        assert_eq!(ArgValue::from(r"a\'").to_string(), r"'a\\\''");
        assert_eq!(ArgValue::Array(vec![]).to_string(), "[]");
        assert_eq!(ArgValue::empty_object().to_string(), "{}");

        let mut fields = BTreeMap::new();
        fields.insert("port".to_string(), ArgValue::from(80));
        assert_eq!(ArgValue::Object(fields).to_string(), "{ port: 80 }");
    }

    #[test]
    fn test_literal_parsing() {
        let parse = |s: &str| s.parse::<ArgValue>().unwrap();
        assert_eq!(parse("80"), ArgValue::Number(80.0));
        assert_eq!(parse("-1"), ArgValue::Number(-1.0));
        assert_eq!(parse("\"80\""), ArgValue::from("80"));
        assert_eq!(parse("0x50"), ArgValue::from("0x50"));
        assert_eq!(parse("true"), ArgValue::Bool(true));
        assert_eq!(parse("null"), ArgValue::Null);
        assert_eq!(parse("undefined"), ArgValue::Undefined);
        assert_eq!(parse("[]"), ArgValue::Array(vec![]));
        assert_eq!(parse("{}"), ArgValue::empty_object());
        assert!(matches!(parse("NaN"), ArgValue::Number(n) if n.is_nan()));
        assert_eq!(parse(" "), ArgValue::from(" "));
        assert_eq!(parse(""), ArgValue::from(""));
    }

    #[test]
    fn test_serialize_non_finite() {
        let json = serde_json::to_string(&ArgValue::Number(f64::NAN)).unwrap();
        assert_eq!(json, "\"NaN\"");
        let json = serde_json::to_string(&ArgValue::Undefined).unwrap();
        assert_eq!(json, "\"undefined\"");
        let json = serde_json::to_string(&ArgValue::Number(80.0)).unwrap();
        assert_eq!(json, "80.0");
    }
}
