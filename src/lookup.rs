//! Field-value lookup contracts for the two execution contexts.
//!
//! The live context implements [`ValueSource`] over rendered control
//! state (see [`FormView`](crate::FormView)); the submission context uses
//! [`SubmittedValues`], a reader over the posted value set. Both feed the
//! same evaluator.

use std::collections::BTreeMap;

use crate::types::FieldValue;

/// Read access to live or submitted field values.
///
/// Lookups never fail: an unknown field reads as an empty single value,
/// which the comparator then treats like an untouched text input.
pub trait ValueSource {
    fn value_of(&self, field_id: &str) -> FieldValue;
}

/// Submitted form values, keyed the way the submission pipeline posts
/// them: single-value fields under the bare field id, checkbox-style
/// sub-inputs under `{fieldId}.{n}`, multi-select lists under the bare id.
///
/// [`value_of`](ValueSource::value_of) reconstructs sub-input fields by
/// scanning for `{fieldId}.{n}` / `{fieldId}_{n}` keys, keeping non-empty
/// sub-values in key order. When nothing matches the result is an empty
/// `Single`, never an empty `Many`: the live context can legitimately
/// produce an empty sequence (no box checked), the submission reader by
/// design cannot, and the two must not be unified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmittedValues {
    entries: BTreeMap<String, FieldValue>,
}

impl SubmittedValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain-style insert under a field key (`"3"` or `"5.2"`).
    #[must_use]
    pub fn set(mut self, key: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value.into());
        self
    }

    /// Insert a value under a field key.
    pub fn insert(&mut self, key: &str, value: FieldValue) {
        self.entries.insert(key.to_owned(), value);
    }

    /// Insert from a posted input name (`input_3`, `input_5_2`). The
    /// `input_` prefix is stripped and sub-input underscores are rewritten
    /// back to the dotted sub-id the schema uses.
    pub fn insert_input(&mut self, name: &str, value: impl Into<FieldValue>) {
        let key = name.strip_prefix("input_").unwrap_or(name);
        self.insert(&key.replace('_', "."), value.into());
    }

    /// Build from posted `(input name, value)` pairs.
    pub fn from_inputs<N, V, I>(inputs: I) -> Self
    where
        N: AsRef<str>,
        V: Into<FieldValue>,
        I: IntoIterator<Item = (N, V)>,
    {
        let mut values = Self::new();
        for (name, value) in inputs {
            values.insert_input(name.as_ref(), value);
        }
        values
    }

    /// The raw entry stored under a key, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries.get(key)
    }

    /// Keys of the sub-input entries belonging to a field, in key order.
    #[must_use]
    pub fn sub_keys(&self, field_id: &str) -> Vec<String> {
        self.entries
            .keys()
            .filter(|key| is_sub_key(key, field_id))
            .cloned()
            .collect()
    }

    /// Non-empty sub-input values belonging to a field, in key order.
    #[must_use]
    pub fn sub_values(&self, field_id: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(key, _)| is_sub_key(key, field_id))
            .filter_map(|(_, value)| match value {
                FieldValue::Single(v) if !v.is_empty() => Some(v.clone()),
                _ => None,
            })
            .collect()
    }
}

/// `{fieldId}.{n}` or `{fieldId}_{n}` where `n` is one or more digits.
fn is_sub_key(key: &str, field_id: &str) -> bool {
    if field_id.is_empty() {
        return false;
    }
    let Some(rest) = key.strip_prefix(field_id) else {
        return false;
    };
    let mut chars = rest.chars();
    if !matches!(chars.next(), Some('.' | '_')) {
        return false;
    }
    let digits = chars.as_str();
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

impl ValueSource for SubmittedValues {
    fn value_of(&self, field_id: &str) -> FieldValue {
        if let Some(value) = self.entries.get(field_id) {
            return value.clone();
        }
        let picked = self.sub_values(field_id);
        if picked.is_empty() {
            FieldValue::empty()
        } else {
            FieldValue::Many(picked)
        }
    }
}
