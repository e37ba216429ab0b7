//! The shared visibility algorithm.
//!
//! This is the one function both execution contexts must agree on: the
//! live runner calls it against the rendered form's current values, the
//! submission guard calls it against the posted values. Any divergence
//! would let a hidden choice be silently accepted, so both contexts are
//! thin adapters over [`is_visible`].

use crate::compare::compare;
use crate::lookup::ValueSource;
use crate::types::{ActionType, ChoiceLogic, FieldDef, LogicType, Rule};

/// Decide whether a choice carrying `logic` is visible given the current
/// field values.
///
/// Disabled logic and an explicitly empty rule list both mean
/// unconditional visibility; absence of logic never hides anything.
/// Otherwise every rule is evaluated against the value looked up for its
/// trigger field, the results are AND-ed (`all`) or OR-ed (`any`), and
/// the aggregate is inverted when the action is `hide`.
///
/// Pure: identical `(logic, values)` always yield the identical boolean.
#[must_use]
pub fn is_visible(logic: &ChoiceLogic, values: &impl ValueSource) -> bool {
    if !logic.enabled {
        return true;
    }
    if logic.rules.is_empty() {
        return true;
    }

    let met = match logic.logic_type {
        LogicType::All => logic.rules.iter().all(|r| rule_matches(r, values)),
        LogicType::Any => logic.rules.iter().any(|r| rule_matches(r, values)),
    };

    match logic.action_type {
        ActionType::Show => met,
        ActionType::Hide => !met,
    }
}

/// Evaluate one rule against the looked-up trigger value.
///
/// A placeholder rule (empty `fieldId`) never matches; this short-circuit
/// runs before the lookup so neither context can drift on it.
fn rule_matches(rule: &Rule, values: &impl ValueSource) -> bool {
    if rule.field_id.is_empty() {
        return false;
    }
    let value = values.value_of(&rule.field_id);
    compare(&value, rule.operator, &rule.value)
}

/// Collect the values of a field's currently-visible choices, in
/// declaration order. Choices without enabled logic are always included.
#[must_use]
pub fn visible_choices(field: &FieldDef, values: &impl ValueSource) -> Vec<String> {
    field
        .choices
        .iter()
        .filter(|choice| match &choice.logic {
            Some(logic) if logic.enabled => is_visible(logic, values),
            _ => true,
        })
        .map(|choice| choice.value.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::SubmittedValues;
    use crate::types::{Choice, FieldType, Operator};

    fn show_all(rules: Vec<Rule>) -> ChoiceLogic {
        ChoiceLogic::new(ActionType::Show, LogicType::All, rules)
    }

    #[test]
    fn disabled_logic_is_always_visible() {
        let logic = ChoiceLogic::disabled();
        let values = SubmittedValues::new();
        assert!(is_visible(&logic, &values));
    }

    #[test]
    fn disabled_logic_ignores_failing_rules() {
        let mut logic = show_all(vec![Rule::new("1", Operator::Is, "never")]);
        logic.enabled = false;
        let values = SubmittedValues::new().set("1", "other");
        assert!(is_visible(&logic, &values));
    }

    #[test]
    fn empty_rule_list_is_visible() {
        let logic = show_all(vec![]);
        let values = SubmittedValues::new();
        assert!(is_visible(&logic, &values));
    }

    #[test]
    fn single_rule_match() {
        let logic = show_all(vec![Rule::new("2", Operator::Is, "b")]);
        assert!(is_visible(&logic, &SubmittedValues::new().set("2", "b")));
        assert!(!is_visible(&logic, &SubmittedValues::new().set("2", "a")));
    }

    #[test]
    fn all_requires_every_rule() {
        let logic = show_all(vec![
            Rule::new("1", Operator::Is, "x"),
            Rule::new("2", Operator::Is, "y"),
        ]);
        let both = SubmittedValues::new().set("1", "x").set("2", "y");
        let one = SubmittedValues::new().set("1", "x").set("2", "z");
        assert!(is_visible(&logic, &both));
        assert!(!is_visible(&logic, &one));
    }

    #[test]
    fn any_requires_one_rule() {
        let logic = ChoiceLogic::new(
            ActionType::Show,
            LogicType::Any,
            vec![
                Rule::new("1", Operator::Is, "x"),
                Rule::new("2", Operator::Is, "y"),
            ],
        );
        let one = SubmittedValues::new().set("1", "x").set("2", "z");
        let neither = SubmittedValues::new().set("1", "q").set("2", "z");
        assert!(is_visible(&logic, &one));
        assert!(!is_visible(&logic, &neither));
    }

    #[test]
    fn hide_inverts_the_aggregate() {
        let rules = vec![Rule::new("2", Operator::Is, "b")];
        let show = show_all(rules.clone());
        let hide = ChoiceLogic::new(ActionType::Hide, LogicType::All, rules);

        let matching = SubmittedValues::new().set("2", "b");
        let other = SubmittedValues::new().set("2", "a");

        assert!(is_visible(&show, &matching));
        assert!(!is_visible(&hide, &matching));
        assert!(!is_visible(&show, &other));
        assert!(is_visible(&hide, &other));
    }

    #[test]
    fn placeholder_rule_never_matches() {
        let logic = show_all(vec![Rule::placeholder()]);
        let values = SubmittedValues::new().set("", "anything");
        assert!(!is_visible(&logic, &values));

        // Even is_empty, which would hold for the unset lookup fallback.
        let logic = show_all(vec![Rule::new("", Operator::IsEmpty, "")]);
        assert!(!is_visible(&logic, &SubmittedValues::new()));
    }

    #[test]
    fn unknown_trigger_field_reads_as_empty() {
        let logic = show_all(vec![Rule::new("99", Operator::IsEmpty, "")]);
        assert!(is_visible(&logic, &SubmittedValues::new()));

        let logic = show_all(vec![Rule::new("99", Operator::Is, "x")]);
        assert!(!is_visible(&logic, &SubmittedValues::new()));
    }

    #[test]
    fn evaluation_is_idempotent() {
        let logic = ChoiceLogic::new(
            ActionType::Hide,
            LogicType::Any,
            vec![Rule::new("1", Operator::Contains, "lu")],
        );
        let values = SubmittedValues::new().set("1", "Blue");
        let first = is_visible(&logic, &values);
        assert_eq!(first, is_visible(&logic, &values));
        assert_eq!(first, is_visible(&logic, &values));
    }

    #[test]
    fn visible_choices_keeps_plain_and_passing() {
        let field = FieldDef::new("1", FieldType::Radio).with_choices(vec![
            Choice::plain("a"),
            Choice::with_logic("b", show_all(vec![Rule::new("2", Operator::Is, "yes")])),
            Choice::with_logic("c", show_all(vec![Rule::new("2", Operator::Is, "no")])),
        ]);

        let values = SubmittedValues::new().set("2", "yes");
        assert_eq!(visible_choices(&field, &values), vec!["a", "b"]);
    }

    #[test]
    fn visible_choices_treats_disabled_logic_as_plain() {
        let field = FieldDef::new("1", FieldType::Select).with_choices(vec![Choice::with_logic(
            "a",
            ChoiceLogic::disabled(),
        )]);
        assert_eq!(visible_choices(&field, &SubmittedValues::new()), vec!["a"]);
    }

    #[test]
    fn visible_choices_empty_field() {
        let field = FieldDef::new("1", FieldType::Radio);
        assert!(visible_choices(&field, &SubmittedValues::new()).is_empty());
    }
}
