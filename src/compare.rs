//! Comparison semantics across scalar and sequence field values.
//!
//! One operator table per value shape. Scalar comparisons are case- and
//! whitespace-insensitive (form input is user-typed); sequence comparisons
//! normalize each element the same way. Operators a shape cannot support
//! fail closed rather than picking an arbitrary element.

use crate::types::{FieldValue, Operator};

/// Compare a field value against a rule's literal operand.
///
/// Total over its whole input domain: unsupported operator/shape
/// combinations and unparseable numeric operands resolve to `false`,
/// never to an error.
///
/// Scalar `contains`/`starts_with`/`ends_with` with an empty operand match
/// every value: the empty string is a substring, prefix and suffix of
/// anything. Live and server evaluation must agree on this, so it is part
/// of the contract rather than an accident to tighten.
#[must_use]
pub fn compare(value: &FieldValue, operator: Operator, target: &str) -> bool {
    match value {
        FieldValue::Single(v) => compare_scalar(v, operator, target),
        FieldValue::Many(vs) => compare_sequence(vs, operator, target),
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse().ok()
}

/// Numeric operators compare the raw operands; either side failing to
/// parse as a number fails the whole comparison.
fn numeric(lhs: &str, rhs: &str, cmp: fn(f64, f64) -> bool) -> bool {
    match (parse_number(lhs), parse_number(rhs)) {
        (Some(a), Some(b)) => cmp(a, b),
        _ => false,
    }
}

fn compare_scalar(raw: &str, operator: Operator, target_raw: &str) -> bool {
    let val = normalize(raw);
    let target = normalize(target_raw);

    match operator {
        Operator::Is => val == target,
        Operator::IsNot => val != target,
        Operator::Contains => val.contains(&target),
        Operator::StartsWith => val.starts_with(&target),
        Operator::EndsWith => val.ends_with(&target),
        Operator::GreaterThan => numeric(raw, target_raw, |a, b| a > b),
        Operator::LessThan => numeric(raw, target_raw, |a, b| a < b),
        Operator::GreaterOrEqual => numeric(raw, target_raw, |a, b| a >= b),
        Operator::LessOrEqual => numeric(raw, target_raw, |a, b| a <= b),
        Operator::IsEmpty => val.is_empty(),
        Operator::IsNotEmpty => !val.is_empty(),
        Operator::Unknown => false,
    }
}

fn compare_sequence(raw: &[String], operator: Operator, target_raw: &str) -> bool {
    let values: Vec<String> = raw.iter().map(|v| normalize(v)).collect();
    let target = normalize(target_raw);

    match operator {
        Operator::Is => values.iter().any(|v| *v == target),
        Operator::IsNot => values.iter().all(|v| *v != target),
        Operator::Contains => values.iter().any(|v| v.contains(&target)),
        Operator::IsEmpty => values.iter().all(String::is_empty),
        Operator::IsNotEmpty => values.iter().any(|v| !v.is_empty()),
        // No single element carries a prefix/suffix or numeric reading for
        // the whole selection.
        Operator::StartsWith
        | Operator::EndsWith
        | Operator::GreaterThan
        | Operator::LessThan
        | Operator::GreaterOrEqual
        | Operator::LessOrEqual
        | Operator::Unknown => false,
    }
}
