use choicegate::{
    is_visible, ActionType, Choice, ChoiceLogic, FieldDef, FieldType, FormDef, LogicMap, LogicType,
    Operator, Rule, SubmittedValues,
};

#[test]
fn choice_logic_round_trip_preserves_evaluation() {
    let logic = ChoiceLogic::new(
        ActionType::Hide,
        LogicType::Any,
        vec![
            Rule::new("2", Operator::Contains, "lu"),
            Rule::new("3", Operator::GreaterOrEqual, "10"),
        ],
    );

    let json = serde_json::to_string(&logic).unwrap();
    let back: ChoiceLogic = serde_json::from_str(&json).unwrap();
    assert_eq!(back, logic);

    for values in [
        SubmittedValues::new().set("2", "Blue").set("3", "5"),
        SubmittedValues::new().set("2", "red").set("3", "12"),
        SubmittedValues::new(),
    ] {
        assert_eq!(is_visible(&logic, &values), is_visible(&back, &values));
    }
}

#[test]
fn choice_logic_wire_keys_are_camel_case() {
    let logic = ChoiceLogic::new(
        ActionType::Show,
        LogicType::All,
        vec![Rule::new("7", Operator::Is, "x")],
    );
    let json = serde_json::to_string(&logic).unwrap();

    assert!(json.contains("\"enabled\":true"));
    assert!(json.contains("\"actionType\":\"show\""));
    assert!(json.contains("\"logicType\":\"all\""));
    assert!(json.contains("\"rules\":[{\"fieldId\":\"7\",\"operator\":\"is\",\"value\":\"x\"}]"));
}

#[test]
fn editor_payload_with_missing_pieces_still_evaluates() {
    // A sparse payload straight out of a half-configured editor session.
    let logic: ChoiceLogic = serde_json::from_str(r#"{"enabled":true}"#).unwrap();

    // The backfilled placeholder rule never matches, so under show/all the
    // choice stays hidden until the designer finishes the rule.
    assert!(!is_visible(&logic, &SubmittedValues::new()));

    // An explicitly empty rules list means no conditions at all.
    let logic: ChoiceLogic = serde_json::from_str(r#"{"enabled":true,"rules":[]}"#).unwrap();
    assert!(is_visible(&logic, &SubmittedValues::new()));
}

#[test]
fn operator_tokens_survive_the_wire() {
    for op in Operator::ALL {
        let json = serde_json::to_string(&op).unwrap();
        let back: Operator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, op);
    }
}

#[test]
fn logic_map_payload_shape() {
    let form = FormDef::new("42").field(
        FieldDef::new("1", FieldType::Select).with_choices(vec![
            Choice::plain("a"),
            Choice::with_logic(
                "b",
                ChoiceLogic::new(
                    ActionType::Show,
                    LogicType::All,
                    vec![Rule::new("2", Operator::Is, "yes")],
                ),
            ),
        ]),
    );

    let map = LogicMap::build(&form);
    let payload = map.to_json().unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed["formId"], "42");
    assert_eq!(parsed["fields"]["1"]["type"], "select");
    assert!(parsed["fields"]["1"]["choices"]["b"]["enabled"]
        .as_bool()
        .unwrap());
    // The ungated choice is not in the payload at all.
    assert!(parsed["fields"]["1"]["choices"].get("a").is_none());
    assert!(parsed["i18n"]["invalidSelection"].is_string());
    assert!(parsed["i18n"]["noOptionsAvailable"].is_string());

    let back = LogicMap::from_json(&payload).unwrap();
    assert_eq!(back, map);
}

#[test]
fn logic_map_payload_without_i18n_gets_defaults() {
    let payload = r#"{"formId":"7","fields":{}}"#;
    let map = LogicMap::from_json(payload).unwrap();
    assert!(map.is_empty());
    assert!(map.i18n.contains_key("invalidSelection"));
}
