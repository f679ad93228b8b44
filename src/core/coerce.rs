// src/core/coerce.rs
// Tolerant readers for loosely typed JSON fields.
// The API mixes numbers and numeric strings for the same field across endpoints.

use serde_json::Value;

/// Integer from a JSON number or numeric string. Floats must be whole.
pub fn int(v: Option<&Value>) -> Option<i64> {
    match v? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && f.is_finite()).map(|f| f as i64)),
        Value::String(s) => {
            let t = s.trim();
            t.parse::<i64>().ok().or_else(|| {
                t.parse::<f64>().ok().filter(|f| f.fract() == 0.0 && f.is_finite()).map(|f| f as i64)
            })
        }
        Value::Bool(b) => Some(*b as i64),
        _ => None,
    }
}

/// Like [`int`], but missing or non-numeric falls back to `default`.
pub fn int_or(v: Option<&Value>, default: i64) -> i64 {
    int(v).unwrap_or(default)
}

/// Float from a JSON number or numeric string.
pub fn float(v: Option<&Value>) -> Option<f64> {
    match v? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// Text as the API sent it. Numbers are rendered; null stays absent.
pub fn text(v: Option<&Value>) -> Option<String> {
    match v? {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

pub fn text_or(v: Option<&Value>, default: &str) -> String {
    text(v).unwrap_or_else(|| s!(default))
}

/// Year coercion: anything non-numeric becomes 0, never a missing marker.
pub fn year(v: Option<&Value>) -> i32 {
    int(v).and_then(|y| i32::try_from(y).ok()).unwrap_or(0)
}

/// Missing or whitespace-only text.
pub fn is_blank(s: &Option<String>) -> bool {
    s.as_deref().map_or(true, |t| t.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn int_accepts_numbers_and_numeric_strings() {
        assert_eq!(int(Some(&json!(42))), Some(42));
        assert_eq!(int(Some(&json!("42"))), Some(42));
        assert_eq!(int(Some(&json!(" 7 "))), Some(7));
        assert_eq!(int(Some(&json!(3.0))), Some(3));
        assert_eq!(int(Some(&json!("3.0"))), Some(3));
        assert_eq!(int(Some(&json!(3.5))), None);
        assert_eq!(int(Some(&json!("abc"))), None);
        assert_eq!(int(Some(&Value::Null)), None);
        assert_eq!(int(None), None);
    }

    #[test]
    fn year_defaults_to_zero() {
        assert_eq!(year(Some(&json!("2019"))), 2019);
        assert_eq!(year(Some(&json!(1997))), 1997);
        assert_eq!(year(Some(&json!("n/a"))), 0);
        assert_eq!(year(None), 0);
        assert_eq!(year(Some(&json!(99_999_999_999_i64))), 0);
    }

    #[test]
    fn text_renders_scalars() {
        assert_eq!(text(Some(&json!("MSG"))), Some(s!("MSG")));
        assert_eq!(text(Some(&json!(4.5))), Some(s!("4.5")));
        assert_eq!(text(Some(&Value::Null)), None);
        assert_eq!(text_or(None, "Phish"), "Phish");
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(&None));
        assert!(is_blank(&Some(s!(""))));
        assert!(is_blank(&Some(s!("  "))));
        assert!(!is_blank(&Some(s!("VT"))));
    }
}
