use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_occurrence_default_is_exactly_one() {
    assert_eq!(Occurrence::default(), Occurrence { min: 1, max: Some(1) });
}

#[test]
fn test_occurrence_constants() {
    assert_eq!(Occurrence::OPTIONAL, Occurrence::bounded(0, 1));
    assert!(Occurrence::ZERO_OR_MORE.is_unbounded());
    assert_eq!(Occurrence::ONE_OR_MORE.min, 1);
}

#[test]
fn test_occurrence_well_formed() {
    assert!(Occurrence::bounded(2, 5).is_well_formed());
    assert!(Occurrence::unbounded(9).is_well_formed());
    assert!(!Occurrence::bounded(5, 2).is_well_formed());
}

#[test]
fn test_occurrence_display() {
    assert_eq!(Occurrence::bounded(1, 3).to_string(), "1*3");
    assert_eq!(Occurrence::ZERO_OR_MORE.to_string(), "0*");
}

#[test]
fn test_primitive_keywords_roundtrip() {
    for primitive in PrimitiveType::ALL {
        assert_eq!(PrimitiveType::from_keyword(primitive.as_str()), Some(primitive));
    }
    assert_eq!(PrimitiveType::from_keyword("person"), None);
    assert_eq!(PrimitiveType::from_keyword("any"), None);
}

#[test]
fn test_property_type_from_ident() {
    assert_eq!(
        PropertyType::from_ident("bstr"),
        PropertyType::Primitive(PrimitiveType::Bstr)
    );
    assert_eq!(
        PropertyType::from_ident("address"),
        PropertyType::Named("address".to_owned())
    );
}

#[test]
fn test_range_and_tag_accessors() {
    let range = PropertyType::range(false, PropertyType::int(0), PropertyType::int(10));
    let r = range.as_range().unwrap();
    assert!(!r.inclusive);
    assert_eq!(r.max, PropertyType::int(10));
    assert!(range.as_tag().is_none());

    let tag = PropertyType::tag(6, PrimitiveType::Bstr.into());
    assert_eq!(tag.as_tag().unwrap().numeric_part, 6);
}

#[test]
fn test_literal_display() {
    assert_eq!(Literal::Int(-3).to_string(), "-3");
    assert_eq!(Literal::Float(1.0).to_string(), "1.0");
    assert_eq!(Literal::Text("a".into()).to_string(), "\"a\"");
}

#[test]
fn test_assignment_accessors() {
    let group = Assignment::Group(Group {
        name: "person".into(),
        properties: vec![Property {
            has_cut: true,
            occurrence: Occurrence::EXACTLY_ONE,
            name: "age".into(),
            ty: vec![PrimitiveType::Uint.into()],
            comment: String::new(),
        }],
    });
    assert_eq!(group.name(), "person");
    assert_eq!(group.members().len(), 1);
    assert!(group.as_array().is_none());

    let variable = Assignment::Variable(Variable {
        name: "port".into(),
        ty: vec![PrimitiveType::Uint.into()],
    });
    assert!(variable.members().is_empty());
    assert_eq!(variable.as_variable().unwrap().ty.len(), 1);
}

#[test]
fn test_group_reference_detection() {
    let reference = Property {
        has_cut: false,
        occurrence: Occurrence::EXACTLY_ONE,
        name: String::new(),
        ty: vec![PropertyType::GroupRef("base".into())],
        comment: String::new(),
    };
    assert!(reference.is_group_reference());

    let keyed = Property {
        name: "base".into(),
        ..reference.clone()
    };
    assert!(!keyed.is_group_reference());
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_tags_assignment_kind() {
    let variable = Assignment::Variable(Variable {
        name: "port".into(),
        ty: vec![PrimitiveType::Uint.into()],
    });
    let json = serde_json::to_value(&variable).unwrap();
    assert_eq!(json["kind"], "variable");
    assert_eq!(json["name"], "port");
}
