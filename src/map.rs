//! Per-form projection of enabled choice logic.
//!
//! The live context does not need the full form schema, only the choices
//! that can actually change visibility. The map is rebuilt wholesale from
//! the authoritative schema on every render and never mutated in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ChoicegateError;
use crate::types::{ChoiceLogic, FieldType, FormDef};

/// The choice-logic entries of one mapped field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogicMapField {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub choices: BTreeMap<String, ChoiceLogic>,
}

/// Compact projection of a form down to the choices carrying enabled
/// conditional logic.
///
/// Fields and choices with no enabled logic are omitted entirely, so an
/// empty `fields` map means there is nothing to evaluate and the live
/// runner can skip all work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicMap {
    pub form_id: String,
    pub fields: BTreeMap<String, LogicMapField>,
    #[serde(default = "default_i18n")]
    pub i18n: BTreeMap<String, String>,
}

/// User-facing message strings shipped alongside the map so the live
/// context can render failures without a second round trip.
fn default_i18n() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "invalidSelection".to_owned(),
            "Please select a valid option.".to_owned(),
        ),
        (
            "noOptionsAvailable".to_owned(),
            "No options available. Please adjust your previous selections.".to_owned(),
        ),
    ])
}

impl LogicMap {
    /// Project a form schema down to its enabled choice logic.
    ///
    /// Unsupported field types, choice-less fields, and fields whose
    /// choices carry no enabled logic are dropped.
    #[must_use]
    pub fn build(form: &FormDef) -> Self {
        let mut fields = BTreeMap::new();

        for field in &form.fields {
            if !field.field_type.supports_choices() || field.choices.is_empty() {
                continue;
            }

            let choices: BTreeMap<String, ChoiceLogic> = field
                .choices
                .iter()
                .filter_map(|choice| match &choice.logic {
                    Some(logic) if logic.enabled => Some((choice.value.clone(), logic.clone())),
                    _ => None,
                })
                .collect();

            if choices.is_empty() {
                continue;
            }

            fields.insert(
                field.id.clone(),
                LogicMapField {
                    field_type: field.field_type,
                    choices,
                },
            );
        }

        LogicMap {
            form_id: form.id.clone(),
            fields,
            i18n: default_i18n(),
        }
    }

    /// True when no choice in the form carries enabled logic.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize the payload delivered to the live context.
    ///
    /// # Errors
    ///
    /// Returns [`ChoicegateError`] if encoding fails.
    pub fn to_json(&self) -> Result<String, ChoicegateError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a previously delivered payload.
    ///
    /// # Errors
    ///
    /// Returns [`ChoicegateError`] on malformed JSON.
    pub fn from_json(payload: &str) -> Result<Self, ChoicegateError> {
        Ok(serde_json::from_str(payload)?)
    }
}
