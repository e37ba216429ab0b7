use serde::{Deserialize, Serialize};

use super::rule::ChoiceLogic;

/// Form field type tags understood by the engine.
///
/// The first five bear choices and can carry per-choice logic; every tag
/// listed here is usable as a rule's trigger field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Radio,
    Checkbox,
    Select,
    Multiselect,
    MultiChoice,
    Text,
    Textarea,
    Number,
    Date,
    Hidden,
    Calculation,
    Product,
    Total,
    Quantity,
    Price,
}

impl FieldType {
    /// Field types that support per-choice conditional logic.
    pub const SUPPORTED: [FieldType; 5] = [
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::Select,
        FieldType::Multiselect,
        FieldType::MultiChoice,
    ];

    /// Field types usable as a rule's trigger field.
    pub const TRIGGERS: [FieldType; 15] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Multiselect,
        FieldType::Radio,
        FieldType::Checkbox,
        FieldType::Number,
        FieldType::Date,
        FieldType::Hidden,
        FieldType::Calculation,
        FieldType::Product,
        FieldType::Total,
        FieldType::Quantity,
        FieldType::Price,
        FieldType::MultiChoice,
    ];

    /// Whether fields of this type carry choices that can be gated.
    #[must_use]
    pub fn supports_choices(self) -> bool {
        Self::SUPPORTED.contains(&self)
    }

    /// Whether fields of this type may appear as a rule's `fieldId`.
    #[must_use]
    pub fn can_trigger(self) -> bool {
        Self::TRIGGERS.contains(&self)
    }

    /// Whether submissions for this type arrive as numbered sub-inputs
    /// (`{fieldId}.{n}`) rather than one entry under the bare field id.
    #[must_use]
    pub fn uses_sub_inputs(self) -> bool {
        matches!(self, FieldType::Checkbox | FieldType::MultiChoice)
    }
}

/// One selectable option within a multi-choice field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub value: String,
    #[serde(
        default,
        rename = "conditionalLogic",
        skip_serializing_if = "Option::is_none"
    )]
    pub logic: Option<ChoiceLogic>,
}

impl Choice {
    /// A choice without conditional logic, always visible.
    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            logic: None,
        }
    }

    pub fn with_logic(value: impl Into<String>, logic: ChoiceLogic) -> Self {
        Self {
            value: value.into(),
            logic: Some(logic),
        }
    }
}

/// Read-only projection of one host form field.
///
/// Built by a host adapter per render or submission; the engine never
/// assumes the host's concrete schema type. `hidden` is the host's own
/// field-level conditional-logic verdict at snapshot time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDef {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl FieldDef {
    pub fn new(id: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            id: id.into(),
            field_type,
            required: false,
            hidden: false,
            choices: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_choices(mut self, choices: Vec<Choice>) -> Self {
        self.choices = choices;
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

/// Read-only projection of a whole host form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDef {
    pub id: String,
    #[serde(default)]
    pub fields: Vec<FieldDef>,
}

impl FormDef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_bearing_types() {
        assert!(FieldType::Radio.supports_choices());
        assert!(FieldType::MultiChoice.supports_choices());
        assert!(!FieldType::Text.supports_choices());
        assert!(!FieldType::Total.supports_choices());
    }

    #[test]
    fn every_listed_type_can_trigger() {
        for ty in FieldType::TRIGGERS {
            assert!(ty.can_trigger());
        }
        assert_eq!(FieldType::TRIGGERS.len(), 15);
    }

    #[test]
    fn sub_input_types() {
        assert!(FieldType::Checkbox.uses_sub_inputs());
        assert!(FieldType::MultiChoice.uses_sub_inputs());
        assert!(!FieldType::Multiselect.uses_sub_inputs());
        assert!(!FieldType::Radio.uses_sub_inputs());
    }

    #[test]
    fn serde_tokens_are_snake_case() {
        assert_eq!(
            serde_json::to_string(&FieldType::MultiChoice).unwrap(),
            "\"multi_choice\""
        );
        assert_eq!(
            serde_json::to_string(&FieldType::Multiselect).unwrap(),
            "\"multiselect\""
        );
        let ty: FieldType = serde_json::from_str("\"textarea\"").unwrap();
        assert_eq!(ty, FieldType::Textarea);
    }

    #[test]
    fn field_def_builders() {
        let field = FieldDef::new("2", FieldType::Radio)
            .required()
            .with_choices(vec![Choice::plain("a"), Choice::plain("b")]);
        assert!(field.required);
        assert!(!field.hidden);
        assert_eq!(field.choices.len(), 2);
    }

    #[test]
    fn choice_logic_key_is_conditional_logic() {
        let choice = Choice::with_logic("c", ChoiceLogic::default());
        let json = serde_json::to_string(&choice).unwrap();
        assert!(json.contains("\"conditionalLogic\""));

        let plain = serde_json::to_string(&Choice::plain("c")).unwrap();
        assert!(!plain.contains("conditionalLogic"));
    }
}
