//! Server-side checkpoints over submitted values.
//!
//! Two independent passes, both required before a submission is accepted:
//! validation rejects submissions that select a hidden choice or leave a
//! required field with nothing visible, and sanitization strips hidden
//! values before persistence regardless of the validation outcome. Even a
//! client that bypasses validation cannot get a hidden-choice value into
//! storage.

use tracing::debug;

use crate::evaluate::visible_choices;
use crate::lookup::SubmittedValues;
use crate::types::{FieldDef, FieldValue, FormDef, ValidationFailure, ValidationReport};

/// Validation checkpoint.
///
/// For every supported, choice-bearing field that is not hidden by the
/// host's own field-level logic: a required field with zero visible
/// choices fails with [`ValidationFailure::NoOptionsAvailable`] (and no
/// per-choice failure is reported for it); any non-empty submitted value
/// outside the visible set fails with
/// [`ValidationFailure::InvalidSelection`]. All field failures accumulate;
/// the scan never short-circuits.
pub fn validate_submission(form: &FormDef, values: &SubmittedValues) -> ValidationReport {
    let mut report = ValidationReport::default();

    for field in &form.fields {
        if !field.field_type.supports_choices() || field.choices.is_empty() {
            continue;
        }
        if field.hidden {
            continue;
        }

        let visible = visible_choices(field, values);

        if field.required && visible.is_empty() {
            debug!(field = %field.id, "required field has no visible choices");
            report.push(ValidationFailure::NoOptionsAvailable {
                field_id: field.id.clone(),
            });
            continue;
        }

        for value in submitted_values_for(field, values) {
            if value.is_empty() {
                continue;
            }
            if !visible.contains(&value) {
                debug!(field = %field.id, value = %value, "submitted value is not visible");
                report.push(ValidationFailure::InvalidSelection {
                    field_id: field.id.clone(),
                });
                break;
            }
        }
    }

    report
}

/// Sanitization checkpoint.
///
/// Recomputes every supported field's visible set against a snapshot of
/// the values taken at entry and strips anything hidden: sub-input
/// entries are blanked, multi-select lists filtered, scalar selections
/// blanked. Runs for every supported field regardless of the host's
/// hidden flag and independently of whether validation passed.
pub fn sanitize_submission(form: &FormDef, values: &mut SubmittedValues) {
    let snapshot = values.clone();

    for field in &form.fields {
        if !field.field_type.supports_choices() || field.choices.is_empty() {
            continue;
        }

        let visible = visible_choices(field, &snapshot);

        if field.field_type.uses_sub_inputs() {
            for key in snapshot.sub_keys(&field.id) {
                let Some(FieldValue::Single(value)) = snapshot.get(&key) else {
                    continue;
                };
                if !value.is_empty() && !visible.contains(value) {
                    debug!(field = %field.id, value = %value, "stripping hidden choice value");
                    values.insert(&key, FieldValue::empty());
                }
            }
        } else {
            match snapshot.get(&field.id) {
                Some(FieldValue::Many(list)) => {
                    let kept: Vec<String> = list
                        .iter()
                        .filter(|value| visible.contains(*value))
                        .cloned()
                        .collect();
                    if kept.len() != list.len() {
                        debug!(field = %field.id, "stripping hidden multi-select values");
                        values.insert(&field.id, FieldValue::Many(kept));
                    }
                }
                Some(FieldValue::Single(value)) => {
                    if !value.is_empty() && !visible.contains(value) {
                        debug!(field = %field.id, value = %value, "stripping hidden choice value");
                        values.insert(&field.id, FieldValue::empty());
                    }
                }
                None => {}
            }
        }
    }
}

/// The submitted value(s) for one field: sub-input fields collect their
/// non-empty sub-values, everything else reads the direct entry.
fn submitted_values_for(field: &FieldDef, values: &SubmittedValues) -> Vec<String> {
    if field.field_type.uses_sub_inputs() {
        return values.sub_values(&field.id);
    }
    match values.get(&field.id) {
        Some(FieldValue::Single(value)) => vec![value.clone()],
        Some(FieldValue::Many(list)) => list.clone(),
        None => Vec::new(),
    }
}
