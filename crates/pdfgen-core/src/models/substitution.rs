//! Values substituted into `{ key }` placeholders.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

use crate::error::CoreError;

/// A scalar value a caller may substitute into a template.
#[derive(Debug, Clone, PartialEq)]
pub enum SubstitutionValue {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl SubstitutionValue {
    /// Convert a JSON value from the request payload.
    ///
    /// Only scalars are accepted. Lists, maps and `null` have no agreed text
    /// form, so they are rejected with the offending key named.
    pub fn try_from_json(key: &str, value: Value) -> Result<Self, CoreError> {
        let kind = match value {
            Value::String(s) => return Ok(SubstitutionValue::Text(s)),
            Value::Number(n) => return Ok(SubstitutionValue::Number(n)),
            Value::Bool(b) => return Ok(SubstitutionValue::Bool(b)),
            Value::Null => "null",
            Value::Array(_) => "a list",
            Value::Object(_) => "an object",
        };
        Err(CoreError::InvalidSubstitution {
            key: key.to_string(),
            kind,
        })
    }

    /// The text that replaces the placeholder.
    ///
    /// Text is inserted verbatim. Booleans are written `True` / `False` and
    /// integers in plain decimal. Floats use their shortest round-trip
    /// digits, in exponent form (`1e+16`, `1e-05`) outside `1e-4 <= |x| < 1e16`
    /// and with at least one fractional digit otherwise (`100.0`).
    pub fn as_template_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SubstitutionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubstitutionValue::Text(s) => f.write_str(s),
            SubstitutionValue::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() => f.write_str(&float_text(x)),
                _ => write!(f, "{n}"),
            },
            SubstitutionValue::Bool(true) => f.write_str("True"),
            SubstitutionValue::Bool(false) => f.write_str("False"),
        }
    }
}

impl From<&str> for SubstitutionValue {
    fn from(s: &str) -> Self {
        SubstitutionValue::Text(s.to_string())
    }
}

impl From<String> for SubstitutionValue {
    fn from(s: String) -> Self {
        SubstitutionValue::Text(s)
    }
}

impl From<bool> for SubstitutionValue {
    fn from(b: bool) -> Self {
        SubstitutionValue::Bool(b)
    }
}

impl From<i64> for SubstitutionValue {
    fn from(n: i64) -> Self {
        SubstitutionValue::Number(n.into())
    }
}

fn float_text(x: f64) -> String {
    // `{:e}` yields the shortest round-trip digits, e.g. `-1.25e-7`.
    let sci = format!("{x:e}");
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    if !(-4..16).contains(&exp) {
        let (first, rest) = digits.split_at(1);
        let fraction = if rest.is_empty() { String::new() } else { format!(".{rest}") };
        let exp_sign = if exp < 0 { '-' } else { '+' };
        return format!("{sign}{first}{fraction}e{exp_sign}{:02}", exp.abs());
    }

    if exp < 0 {
        let zeros = "0".repeat((-exp - 1) as usize);
        return format!("{sign}0.{zeros}{digits}");
    }

    let int_len = exp as usize + 1;
    if digits.len() > int_len {
        let (int_part, frac_part) = digits.split_at(int_len);
        format!("{sign}{int_part}.{frac_part}")
    } else {
        let zeros = "0".repeat(int_len - digits.len());
        format!("{sign}{digits}{zeros}.0")
    }
}

/// The merged key → value mapping applied to a template.
///
/// Keys are kept sorted so logs and iteration are deterministic; the
/// substitution result does not depend on this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Substitutions(BTreeMap<String, SubstitutionValue>);

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the payload's `variable_substitutions` object.
    pub fn try_from_json(map: serde_json::Map<String, Value>) -> Result<Self, CoreError> {
        let mut subs = Self::new();
        for (key, value) in map {
            let value = SubstitutionValue::try_from_json(&key, value)?;
            subs.insert(key, value);
        }
        Ok(subs)
    }

    /// Insert a value. An existing value under the same key is replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SubstitutionValue>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&SubstitutionValue> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SubstitutionValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Substitutions
where
    K: Into<String>,
    V: Into<SubstitutionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut subs = Self::new();
        for (k, v) in iter {
            subs.insert(k, v);
        }
        subs
    }
}
