//! Permissive value coercion shared by every boundary that reads host data.
//!
//! Saved records and dialog forms are untyped. Every read goes through these
//! helpers so that partial or corrupted data degrades to zero (numbers) or an
//! empty string (text) instead of failing.

use serde_json::Value;

/// Read a number the way a permissive form field does: zero unless the value
/// is a finite number or a string holding one.
///
/// - absent, `null`, `false` → 0, `true` → 1
/// - JSON numbers → their value
/// - strings → trimmed and parsed, empty → 0
/// - everything else (arrays, objects, unparsable or non-finite input) → 0
pub fn number(value: Option<&Value>) -> f64 {
    match value {
        None | Some(Value::Null) => 0.0,
        Some(Value::Bool(flag)) => {
            if *flag {
                1.0
            } else {
                0.0
            }
        }
        Some(Value::Number(number)) => finite_or_zero(number.as_f64().unwrap_or(0.0)),
        Some(Value::String(text)) => number_str(text),
        Some(Value::Array(_)) | Some(Value::Object(_)) => 0.0,
    }
}

/// String half of [`number`], used directly for raw form input.
pub fn number_str(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Read free text; anything that is not a string or scalar becomes empty.
pub fn text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Number(number)) => number.to_string(),
        Some(Value::Bool(flag)) => flag.to_string(),
        _ => String::new(),
    }
}

/// Convert a coerced number into a chit count.
///
/// Fractions are floored and large values saturate; negative or non-finite
/// input yields 0.
pub fn chit_count(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    let floored = value.floor();
    if floored >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        floored as u32
    }
}

/// Format a number for display: integral values print without a fraction.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_from_json_values() {
        assert_eq!(number(None), 0.0);
        assert_eq!(number(Some(&Value::Null)), 0.0);
        assert_eq!(number(Some(&json!(false))), 0.0);
        assert_eq!(number(Some(&json!(true))), 1.0);
        assert_eq!(number(Some(&json!(4.5))), 4.5);
        assert_eq!(number(Some(&json!(" 5 "))), 5.0);
        assert_eq!(number(Some(&json!(""))), 0.0);
        assert_eq!(number(Some(&json!("lots"))), 0.0);
        assert_eq!(number(Some(&json!([1]))), 0.0);
        assert_eq!(number(Some(&json!({ "magnitude": 2 }))), 0.0);
    }

    #[test]
    fn non_finite_strings_become_zero() {
        assert_eq!(number_str("inf"), 0.0);
        assert_eq!(number_str("NaN"), 0.0);
        assert_eq!(number_str("-2.5"), -2.5);
    }

    #[test]
    fn text_reads_scalars_only() {
        assert_eq!(text(Some(&json!("careful"))), "careful");
        assert_eq!(text(Some(&json!(3))), "3");
        assert_eq!(text(Some(&Value::Null)), "");
        assert_eq!(text(None), "");
        assert_eq!(text(Some(&json!(["a"]))), "");
    }

    #[test]
    fn chit_count_floors_and_clamps() {
        assert_eq!(chit_count(3.9), 3);
        assert_eq!(chit_count(-1.0), 0);
        assert_eq!(chit_count(f64::NAN), 0);
        assert_eq!(chit_count(1e12), u32::MAX);
    }

    #[test]
    fn integral_numbers_print_without_fraction() {
        assert_eq!(format_number(7.0), "7");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(2.5), "2.5");
    }
}
