use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Optional sign, digits with optional thousands separators, optional decimals, optional `%`.
static NUMERIC_CELL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-?(?:[0-9][0-9,]*(?:\.[0-9]*)?|\.[0-9]+))\s*(%)?$")
        .expect("numeric cell pattern should compile")
});

/// 1) Trim whitespace + strip outer quotes if present.
pub fn clean_str(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].trim()
    } else {
        trimmed
    }
}

/// A parsed numeric cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number {
    pub value: f64,
    pub percent_sign: bool,
}

/// 2) Parse a numeric cell. `Ok(None)` for an empty cell.
pub fn parse_number(raw: &str) -> Result<Option<Number>> {
    let cleaned = clean_str(raw);
    if cleaned.is_empty() {
        return Ok(None);
    }
    let Some(caps) = NUMERIC_CELL.captures(cleaned) else {
        bail!("not a number: {:?}", raw);
    };
    let digits = caps[1].replace(',', "");
    let value = match digits.parse::<f64>() {
        Ok(v) => v,
        Err(e) => bail!("not a number: {:?} ({})", raw, e),
    };
    if !value.is_finite() {
        bail!("number out of range: {:?}", raw);
    }
    Ok(Some(Number {
        value,
        percent_sign: caps.get(2).is_some(),
    }))
}

/// 3) Parse a count cell; integral floats such as `80.0` are accepted.
pub fn parse_count(raw: &str) -> Result<Option<i64>> {
    match parse_number(raw)?.map(|n| n.value) {
        None => Ok(None),
        Some(v) if v.fract() == 0.0 && v.abs() <= i64::MAX as f64 => Ok(Some(v as i64)),
        Some(_) => bail!("not a whole number: {:?}", raw),
    }
}
