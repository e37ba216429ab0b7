use std::fmt;

/// A field's value as read from live or submitted form state.
///
/// Single-value controls (text, number, radio groups, dropdowns) produce
/// `Single`; checkbox groups and multi-selects produce `Many` with the
/// selected values in control order. The comparator treats the two shapes
/// uniformly where the operator allows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A single string value.
    Single(String),
    /// An ordered sequence of selected values.
    Many(Vec<String>),
}

impl FieldValue {
    /// An unset field, indistinguishable from an empty text input.
    #[must_use]
    pub fn empty() -> Self {
        FieldValue::Single(String::new())
    }

    /// True when the value carries no usable content: an empty or
    /// whitespace-only scalar, or a sequence with no non-blank element.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Single(v) => v.trim().is_empty(),
            FieldValue::Many(vs) => vs.iter().all(|v| v.trim().is_empty()),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Single(v.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Single(v)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(vs: Vec<String>) -> Self {
        FieldValue::Many(vs)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(vs: Vec<&str>) -> Self {
        FieldValue::Many(vs.into_iter().map(str::to_owned).collect())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Single(v) => write!(f, "\"{v}\""),
            FieldValue::Many(vs) => {
                write!(f, "[")?;
                for (i, v) in vs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{v}\"")?;
                }
                write!(f, "]")
            }
        }
    }
}
