use serde::de::{Deserialize, Deserializer};
use serde::Serialize;

use super::operator::Operator;

/// One atomic condition: compare a trigger field's value to a literal.
///
/// A rule with an empty `field_id` is a not-yet-configured placeholder and
/// never matches, in either execution context.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rule {
    pub field_id: String,
    pub operator: Operator,
    pub value: String,
}

impl Rule {
    pub fn new(field_id: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            field_id: field_id.into(),
            operator,
            value: value.into(),
        }
    }

    /// The placeholder a rule editor starts from.
    #[must_use]
    pub fn placeholder() -> Self {
        Self::default()
    }
}

/// AND/OR aggregation across a choice's rules.
///
/// Any wire token other than `"all"` selects the permissive `Any` branch;
/// untrusted payloads are repaired, not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogicType {
    #[default]
    All,
    Any,
}

impl<'de> Deserialize<'de> for LogicType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(if token == "all" {
            LogicType::All
        } else {
            LogicType::Any
        })
    }
}

/// Whether met conditions show the choice or hide it.
///
/// Any wire token other than `"hide"` selects `Show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionType {
    #[default]
    Show,
    Hide,
}

impl<'de> Deserialize<'de> for ActionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        Ok(if token == "hide" {
            ActionType::Hide
        } else {
            ActionType::Show
        })
    }
}

/// The full condition attached to one choice.
///
/// When `enabled` is false the choice is always visible and the remaining
/// fields are irrelevant. Deserialization repairs partial payloads instead
/// of rejecting them: a missing `rules` list is backfilled with a single
/// placeholder rule, missing `logicType`/`actionType` take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChoiceLogic {
    pub enabled: bool,
    pub action_type: ActionType,
    pub logic_type: LogicType,
    pub rules: Vec<Rule>,
}

impl Default for ChoiceLogic {
    fn default() -> Self {
        Self {
            enabled: false,
            action_type: ActionType::default(),
            logic_type: LogicType::default(),
            rules: vec![Rule::placeholder()],
        }
    }
}

impl ChoiceLogic {
    /// Enabled logic with the given aggregation and rules.
    pub fn new(action_type: ActionType, logic_type: LogicType, rules: Vec<Rule>) -> Self {
        Self {
            enabled: true,
            action_type,
            logic_type,
            rules,
        }
    }

    /// Disabled logic: the choice is unconditionally visible.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }
}
