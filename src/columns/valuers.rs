//! Value transforms
//!
//! A valuer is a pure `&str -> String` function applied after a column's
//! mapped/literal value has been resolved.

use std::sync::Arc;

/// Shared transform function
pub type Valuer = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Names accepted by [`builtin`]
pub const BUILTIN_VALUERS: &[&str] = &[
    "trim",
    "uppercase",
    "lowercase",
    "escape_quotes",
    "increment",
    "decrement",
];

/// Look up a built-in valuer by name
pub fn builtin(name: &str) -> Option<Valuer> {
    let valuer: Valuer = match name {
        "trim" => Arc::new(|v: &str| v.trim().to_string()),
        "uppercase" => Arc::new(|v: &str| v.to_uppercase()),
        "lowercase" => Arc::new(|v: &str| v.to_lowercase()),
        "escape_quotes" => Arc::new(|v: &str| v.replace('\'', "''")),
        "increment" => Arc::new(|v: &str| shift_integer(v, 1)),
        "decrement" => Arc::new(|v: &str| shift_integer(v, -1)),
        _ => return None,
    };
    Some(valuer)
}

/// Compose valuers left to right
pub fn chain(valuers: Vec<Valuer>) -> Valuer {
    Arc::new(move |value: &str| {
        valuers
            .iter()
            .fold(value.to_string(), |acc, valuer| valuer(&acc))
    })
}

/// Add `delta` to an integer value; anything else passes through unchanged
fn shift_integer(value: &str, delta: i64) -> String {
    match value.trim().parse::<i64>() {
        Ok(n) => n.saturating_add(delta).to_string(),
        Err(_) => value.to_string(),
    }
}
