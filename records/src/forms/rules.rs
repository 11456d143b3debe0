//! Primitive validation rules shared by the form schemas.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

/// Non-empty after trimming.
pub fn required(value: &str, message: &str) -> Result<(), String> {
    if value.trim().is_empty() { Err(message.to_owned()) } else { Ok(()) }
}

/// Length bounds on the trimmed value.
pub fn length(
    value: &str,
    min: usize,
    max: usize,
    too_short: &str,
    too_long: &str,
) -> Result<(), String> {
    let len = value.trim().chars().count();
    if len < min {
        Err(too_short.to_owned())
    } else if len > max {
        Err(too_long.to_owned())
    } else {
        Ok(())
    }
}

/// Loose email shape: one `@`, non-empty local part, dotted domain.
/// Full RFC validation is the backend's problem.
pub fn email(value: &str, message: &str) -> Result<(), String> {
    let value = value.trim();
    let Some((local, domain)) = value.split_once('@') else {
        return Err(message.to_owned());
    };
    let dotted = domain.split('.').count() >= 2 && !domain.starts_with('.') && !domain.ends_with('.');
    if local.is_empty() || domain.is_empty() || !dotted || value.contains(' ') {
        return Err(message.to_owned());
    }
    Ok(())
}

/// Optional field: empty passes, anything else must satisfy `rule`.
pub fn optional(
    value: &str,
    rule: impl FnOnce(&str) -> Result<(), String>,
) -> Result<(), String> {
    if value.trim().is_empty() { Ok(()) } else { rule(value) }
}

/// Integer coercion with a floor. Empty and out-of-range report `too_small`,
/// unparseable input reports `not_a_number`.
pub fn int_at_least(
    value: &str,
    min: i64,
    too_small: &str,
    not_a_number: &str,
) -> Result<i64, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(too_small.to_owned());
    }
    let parsed: i64 = value.parse().map_err(|_| not_a_number.to_owned())?;
    if parsed < min {
        return Err(too_small.to_owned());
    }
    Ok(parsed)
}

/// Numeric coercion for score-like fields.
pub fn number(value: &str, required_msg: &str, not_a_number: &str) -> Result<f64, String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(required_msg.to_owned());
    }
    value.parse::<f64>().map_err(|_| not_a_number.to_owned())
}
