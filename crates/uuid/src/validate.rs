//! Syntactic validation of candidate UUID values.
//!
//! Validation never fails: malformed or structured input is simply reported as not valid.

use crate::constants::{BINARY_LEN, HYPHEN_OFFSETS, TEXT_LEN};
use crate::UuidError;
use std::borrow::Cow;
use std::{fmt, str::FromStr};

/// Which UUID form a candidate is checked against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ValidationForm {
    /// Valid in either form
    #[default]
    Any,
    /// Exactly 16 bytes
    Binary,
    /// 36 lowercase hex characters grouped 8-4-4-4-12
    Text,
}

impl ValidationForm {
    fn accepts_text(self) -> bool {
        matches!(self, Self::Any | Self::Text)
    }

    fn accepts_binary(self) -> bool {
        matches!(self, Self::Any | Self::Binary)
    }
}

impl fmt::Display for ValidationForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Any => "any",
            Self::Binary => "binary",
            Self::Text => "text",
        };
        f.write_str(name)
    }
}

impl FromStr for ValidationForm {
    type Err = UuidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "any" => Ok(Self::Any),
            "binary" => Ok(Self::Binary),
            "text" => Ok(Self::Text),
            other => Err(UuidError::InvalidInput(format!(
                "validation form must be one of any, binary, text; got '{}'",
                other
            ))),
        }
    }
}

/// An arbitrary value offered for validation.
///
/// Scalars are judged on their byte content: strings and byte slices directly, numbers and
/// booleans by their string rendering. Floats of magnitude `1e15` and above, or below `1e-4`,
/// render in exponent form such as `1.0E+15`. `Structured` stands for records, lists and any
/// other compound value, which is never a valid UUID.
#[derive(Clone, Debug, PartialEq)]
pub enum Candidate<'a> {
    Text(&'a str),
    Bytes(&'a [u8]),
    Integer(i128),
    Float(f64),
    Bool(bool),
    Structured,
}

impl Candidate<'_> {
    /// Returns the scalar's byte content, or `None` for structured values.
    fn scalar_bytes(&self) -> Option<Cow<'_, [u8]>> {
        match self {
            Self::Text(s) => Some(Cow::Borrowed(s.as_bytes())),
            Self::Bytes(b) => Some(Cow::Borrowed(*b)),
            Self::Integer(n) => Some(Cow::Owned(n.to_string().into_bytes())),
            Self::Float(x) => Some(Cow::Owned(render_float(*x).into_bytes())),
            // true renders as "1", false as the empty string
            Self::Bool(b) => Some(Cow::Borrowed(if *b { &b"1"[..] } else { &[] })),
            Self::Structured => None,
        }
    }
}

fn render_float(x: f64) -> String {
    let magnitude = x.abs();
    if !x.is_finite() || x == 0.0 || (1e-4..1e15).contains(&magnitude) {
        return x.to_string();
    }

    let exponent_form = format!("{:e}", x);
    let (mantissa, exponent) = exponent_form.split_once('e').unwrap_or((exponent_form.as_str(), "0"));
    let mantissa = if mantissa.contains('.') {
        mantissa.to_string()
    } else {
        format!("{}.0", mantissa)
    };
    match exponent.strip_prefix('-') {
        Some(digits) => format!("{}E-{}", mantissa, digits),
        None => format!("{}E+{}", mantissa, exponent),
    }
}

impl<'a> From<&'a str> for Candidate<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for Candidate<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

impl<'a> From<&'a [u8]> for Candidate<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Bytes(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Candidate<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::Bytes(value.as_slice())
    }
}

impl<'a> From<&'a Vec<u8>> for Candidate<'a> {
    fn from(value: &'a Vec<u8>) -> Self {
        Self::Bytes(value.as_slice())
    }
}

macro_rules! integer_candidate {
    ($($t:ty),*) => {
        $(impl From<$t> for Candidate<'_> {
            fn from(value: $t) -> Self {
                Self::Integer(i128::from(value))
            }
        })*
    };
}

integer_candidate!(i8, i16, i32, i64, u8, u16, u32, u64);

impl From<f64> for Candidate<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Candidate<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

#[cfg(feature = "serde")]
impl<'a> From<&'a serde_json::Value> for Candidate<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::String(s) => Self::Text(s.as_str()),
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => match (n.as_i64(), n.as_u64(), n.as_f64()) {
                (Some(i), _, _) => Self::Integer(i128::from(i)),
                (None, Some(u), _) => Self::Integer(i128::from(u)),
                (None, None, Some(x)) => Self::Float(x),
                (None, None, None) => Self::Structured,
            },
            Value::Null | Value::Array(_) | Value::Object(_) => Self::Structured,
        }
    }
}

/// Reports whether `candidate` is a well-formed UUID in the requested `form`.
///
/// - Structured candidates are never valid.
/// - Text: exactly 36 characters matching
///   `^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$`.
/// - Binary: exactly 16 bytes.
///
/// With [`ValidationForm::Any`] either check passing is enough.
pub fn validate<'a>(candidate: impl Into<Candidate<'a>>, form: ValidationForm) -> bool {
    let candidate = candidate.into();
    let Some(bytes) = candidate.scalar_bytes() else {
        return false;
    };

    if form.accepts_text() && is_canonical_text(&bytes) {
        return true;
    }

    form.accepts_binary() && bytes.len() == BINARY_LEN
}

fn is_canonical_text(bytes: &[u8]) -> bool {
    bytes.len() == TEXT_LEN
        && bytes.iter().enumerate().all(|(i, b)| {
            if HYPHEN_OFFSETS.contains(&i) {
                *b == b'-'
            } else {
                matches!(b, b'0'..=b'9' | b'a'..=b'f')
            }
        })
}
