//! Schema-less view of a decoded response body.
//!
//! Responses are converted once, right after decoding, into [`RenderValue`] so
//! the renderer can match on shape instead of probing JSON types at every
//! step. Object field order is carried over from `serde_json` (built with
//! `preserve_order`), which keeps the server's field order intact.

use std::fmt::{self, Display, Formatter};

use serde_json::{Number, Value};

/// Textual token printed for a JSON `null`.
pub(crate) const NONE_TOKEN: &str = "None";

/// Leaf value printed as its literal text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Display for Scalar {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => formatter.write_str(NONE_TOKEN),
            Self::Bool(flag) => formatter.write_str(bool_token(*flag)),
            Self::Number(number) => Display::fmt(number, formatter),
            Self::String(text) => formatter.write_str(text),
        }
    }
}

/// Decoded response value: a scalar, an ordered mapping, or a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum RenderValue {
    Scalar(Scalar),
    Mapping(Vec<(String, RenderValue)>),
    Sequence(Vec<RenderValue>),
}

impl RenderValue {
    /// Short shape name used in diagnostics.
    #[must_use]
    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Mapping(_) => "mapping",
            Self::Sequence(_) => "sequence",
        }
    }

    /// Look up a field of a mapping; `None` for other shapes or missing keys.
    #[must_use]
    pub(crate) fn field(&self, name: &str) -> Option<&Self> {
        match self {
            Self::Mapping(entries) => entries
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value),
            Self::Scalar(_) | Self::Sequence(_) => None,
        }
    }
}

impl From<Value> for RenderValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Scalar(Scalar::Null),
            Value::Bool(flag) => Self::Scalar(Scalar::Bool(flag)),
            Value::Number(number) => Self::Scalar(Scalar::Number(number)),
            Value::String(text) => Self::Scalar(Scalar::String(text)),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

/// Boolean token shared by rendered values and query flags.
#[must_use]
pub(crate) const fn bool_token(flag: bool) -> &'static str {
    if flag { "True" } else { "False" }
}
