use super::*;

fn with_id(id: &str, label: &str) -> FieldSnapshot {
    let mut snapshot = FieldSnapshot {
        id: Some(id.to_string()),
        ..Default::default()
    };
    snapshot
        .labels_for
        .insert(id.to_string(), label.to_string());
    snapshot
}

#[test]
fn test_explicit_label_wins() {
    let mut field = with_id("email", "  Email address  ");
    field.placeholder = Some("you@example.com".to_string());
    field.preceding_siblings = vec![SiblingNode::element("Contact")];

    assert_eq!(infer_label(&field), Some("Email address".to_string()));
    assert_eq!(recorded_label(&field), Some("Email address".to_string()));
}

#[test]
fn test_id_without_matching_label_falls_through() {
    let field = FieldSnapshot {
        id: Some("phone".to_string()),
        placeholder: Some("Phone".to_string()),
        ..Default::default()
    };

    assert_eq!(infer_label(&field), Some("Phone".to_string()));
}

#[test]
fn test_nearest_sibling_with_text_is_used() {
    let field = FieldSnapshot {
        preceding_siblings: vec![
            SiblingNode::element("   "),
            SiblingNode::element("City"),
            SiblingNode::label("Address"),
        ],
        ..Default::default()
    };

    assert_eq!(infer_label(&field), Some("City".to_string()));
    // Recording only trusts real labels
    assert_eq!(recorded_label(&field), Some("Address".to_string()));
}

#[test]
fn test_empty_sibling_label_stops_sibling_search() {
    let field = FieldSnapshot {
        preceding_siblings: vec![SiblingNode::label(""), SiblingNode::element("Ignored")],
        parent_label: Some("Company".to_string()),
        ..Default::default()
    };

    assert_eq!(infer_label(&field), Some("Company".to_string()));
    // The blank label is still the first label, so nothing is recorded
    assert_eq!(recorded_label(&field), None);
}

#[test]
fn test_blank_explicit_label_is_not_recorded() {
    let mut field = with_id("company", "   ");
    field.preceding_siblings = vec![SiblingNode::label("Employer")];
    field.parent_label = Some("Work".to_string());

    assert_eq!(infer_label(&field), Some("Employer".to_string()));
    assert_eq!(recorded_label(&field), None);
}

#[test]
fn test_placeholder_before_name() {
    let field = FieldSnapshot {
        placeholder: Some("Your nickname".to_string()),
        name: Some("user_name".to_string()),
        ..Default::default()
    };

    assert_eq!(infer_label(&field), Some("Your nickname".to_string()));
}

#[test]
fn test_blank_placeholder_hides_name() {
    let field = FieldSnapshot {
        placeholder: Some("   ".to_string()),
        name: Some("user_name".to_string()),
        ..Default::default()
    };

    assert_eq!(infer_label(&field), None);
}

#[test]
fn test_empty_placeholder_falls_back_to_name() {
    let field = FieldSnapshot {
        placeholder: Some(String::new()),
        name: Some("user_name".to_string()),
        ..Default::default()
    };

    assert_eq!(infer_label(&field), Some("user name".to_string()));
}

#[test]
fn test_name_separators_become_spaces() {
    let field = FieldSnapshot {
        name: Some(" billing-postal_code ".to_string()),
        ..Default::default()
    };

    assert_eq!(infer_label(&field), Some("billing postal code".to_string()));
}

#[test]
fn test_recorded_label_ignores_placeholder_and_name() {
    let field = FieldSnapshot {
        placeholder: Some("Search".to_string()),
        name: Some("q".to_string()),
        ..Default::default()
    };

    assert_eq!(recorded_label(&field), None);
}

#[test]
fn test_no_context_yields_none() {
    let field = FieldSnapshot::default();

    assert_eq!(infer_label(&field), None);
    assert_eq!(recorded_label(&field), None);
}

#[test]
fn test_snapshot_deserializes_from_camel_case() {
    let json = r#"{
        "id": "first",
        "labelsFor": {"first": "First name"},
        "precedingSiblings": [{"isLabel": false, "text": "Step 1"}]
    }"#;

    let field: FieldSnapshot = serde_json::from_str(json).unwrap();

    assert_eq!(field.preceding_siblings[0].text, "Step 1");
    assert_eq!(infer_label(&field), Some("First name".to_string()));
}
