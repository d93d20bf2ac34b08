use cddl_ir::{
    Array, Assignment, Group, Literal, Occurrence, PrimitiveType, Property, PropertyType,
    Variable,
};
use pretty_assertions::assert_eq;

use super::parse_source;
use crate::MAX_NESTING_DEPTH;

fn parse_one(source: &str) -> Assignment {
    let mut rules = parse_source(source).unwrap();
    assert_eq!(rules.len(), 1, "expected exactly one rule in {source:?}");
    rules.remove(0)
}

fn members(source: &str) -> Vec<Property> {
    parse_one(source).members().to_vec()
}

fn prim(p: PrimitiveType) -> PropertyType {
    PropertyType::Primitive(p)
}

fn keyed(name: &str, ty: Vec<PropertyType>) -> Property {
    Property {
        has_cut: true,
        occurrence: Occurrence::EXACTLY_ONE,
        name: name.to_owned(),
        ty,
        comment: String::new(),
    }
}

#[test]
fn test_parse_variable() {
    assert_eq!(
        parse_one("port = uint"),
        Assignment::Variable(Variable {
            name: "port".into(),
            ty: vec![prim(PrimitiveType::Uint)],
        })
    );
}

#[test]
fn test_parse_variable_named_reference() {
    assert_eq!(
        parse_one("home = address"),
        Assignment::Variable(Variable {
            name: "home".into(),
            ty: vec![PropertyType::Named("address".into())],
        })
    );
}

#[test]
fn test_parse_variable_union() {
    let rule = parse_one("value = tstr / int / float");
    assert_eq!(
        rule.as_variable().unwrap().ty,
        vec![
            prim(PrimitiveType::Tstr),
            prim(PrimitiveType::Int),
            prim(PrimitiveType::Float),
        ]
    );
}

#[test]
fn test_parse_variable_literals() {
    let rule = parse_one(r#"color = "red" / 3 / 1.5"#);
    assert_eq!(
        rule.as_variable().unwrap().ty,
        vec![
            PropertyType::text("red"),
            PropertyType::int(3),
            PropertyType::Literal(Literal::Float(1.5)),
        ]
    );
}

#[test]
fn test_parse_group() {
    assert_eq!(
        parse_one("person = { name: tstr, age: uint }"),
        Assignment::Group(Group {
            name: "person".into(),
            properties: vec![
                keyed("name", vec![prim(PrimitiveType::Tstr)]),
                keyed("age", vec![prim(PrimitiveType::Uint)]),
            ],
        })
    );
}

#[test]
fn test_group_preserves_declaration_order() {
    let names: Vec<String> = members("g = { c: int, a: int, b: int, }")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["c", "a", "b"]);
}

#[test]
fn test_parse_array() {
    assert_eq!(
        parse_one("point = [ x: int, y: int ]"),
        Assignment::Array(Array {
            name: "point".into(),
            values: vec![
                keyed("x", vec![prim(PrimitiveType::Int)]),
                keyed("y", vec![prim(PrimitiveType::Int)]),
            ],
        })
    );
}

#[test]
fn test_parenthesized_group() {
    let rule = parse_one("common = ( id: uint )");
    assert_eq!(rule.as_group().unwrap().properties.len(), 1);
}

#[test]
fn test_brace_paren_group_closes_on_both() {
    let rules = parse_source("a = {( x: int, y: int )}\nb = uint").unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].as_group().unwrap().properties.len(), 2);
    assert_eq!(rules[1].name(), "b");
}

#[test]
fn test_empty_group_and_array() {
    assert_eq!(
        parse_one("empty = {}"),
        Assignment::Group(Group {
            name: "empty".into(),
            properties: vec![],
        })
    );
    assert_eq!(
        parse_one("none = []"),
        Assignment::Array(Array {
            name: "none".into(),
            values: vec![],
        })
    );
}

#[test]
fn test_default_occurrence_is_exactly_one() {
    for property in members("g = { a: int, b => tstr, \"c\": bool }") {
        assert_eq!(property.occurrence, Occurrence::bounded(1, 1));
    }
}

#[test]
fn test_occurrence_indicators() {
    let occurrences: Vec<Occurrence> = members(
        "g = { ? a: int, * b: int, + c: int, ?3 d: int, *5 e: int, +2 f: int }",
    )
    .into_iter()
    .map(|p| p.occurrence)
    .collect();
    assert_eq!(
        occurrences,
        vec![
            Occurrence::bounded(0, 1),
            Occurrence::unbounded(0),
            Occurrence::unbounded(1),
            Occurrence::bounded(0, 3),
            Occurrence::bounded(0, 5),
            Occurrence::bounded(1, 2),
        ]
    );
}

#[test]
fn test_numbered_occurrence() {
    let occurrences: Vec<Occurrence> = members("g = { 1*10 bedroom: size, 2* door: int }")
        .into_iter()
        .map(|p| p.occurrence)
        .collect();
    assert_eq!(
        occurrences,
        vec![Occurrence::bounded(1, 10), Occurrence::unbounded(2)]
    );
}

#[test]
fn test_malformed_occurrence_is_recorded_not_rejected() {
    let property = &members("g = { 5*2 a: int }")[0];
    assert_eq!(property.occurrence, Occurrence::bounded(5, 2));
    assert!(!property.occurrence.is_well_formed());
}

#[test]
fn test_cut_markers() {
    let props = members(r#"g = { "a" ^ => int, "b" => int, c: int }"#);
    let cuts: Vec<bool> = props.iter().map(|p| p.has_cut).collect();
    assert_eq!(cuts, vec![true, false, true]);
    assert_eq!(props[0].name, "a");
}

#[test]
fn test_optional_quoted_key_with_cut() {
    let props = members(r#"g = { ? "optional-key" ^ => int, }"#);
    assert_eq!(
        props,
        vec![Property {
            has_cut: true,
            occurrence: Occurrence::OPTIONAL,
            name: "optional-key".into(),
            ty: vec![prim(PrimitiveType::Int)],
            comment: String::new(),
        }]
    );
}

#[test]
fn test_inclusive_range() {
    let rule = parse_one("byte = 0..255");
    let range = rule.as_variable().unwrap().ty[0].as_range().unwrap();
    assert!(range.inclusive);
    assert_eq!(range.min, PropertyType::int(0));
    assert_eq!(range.max, PropertyType::int(255));
}

#[test]
fn test_exclusive_range() {
    let rule = parse_one("small = 0...10");
    let range = rule.as_variable().unwrap().ty[0].as_range().unwrap();
    assert!(!range.inclusive);
    assert_eq!(range.max, PropertyType::int(10));
}

#[test]
fn test_range_member_and_float_bounds() {
    let props = members("g = { ratio: 0.0..1.0, count: 1..max-count }");
    assert_eq!(
        props[0].ty,
        vec![PropertyType::range(
            true,
            PropertyType::Literal(Literal::Float(0.0)),
            PropertyType::Literal(Literal::Float(1.0)),
        )]
    );
    assert_eq!(
        props[1].ty,
        vec![PropertyType::range(
            true,
            PropertyType::int(1),
            PropertyType::Named("max-count".into()),
        )]
    );
}

#[test]
fn test_range_of_ranges_is_accepted() {
    let rule = parse_one("odd = 0..5..10");
    let outer = rule.as_variable().unwrap().ty[0].as_range().unwrap();
    assert_eq!(outer.min, PropertyType::int(0));
    assert!(outer.max.as_range().is_some());
}

#[test]
fn test_tag() {
    let rule = parse_one("binary = #6(bstr)");
    let tag = rule.as_variable().unwrap().ty[0].as_tag().unwrap();
    assert_eq!(tag.numeric_part, 6);
    assert_eq!(tag.type_part, prim(PrimitiveType::Bstr));
}

#[test]
fn test_tag_member_in_union() {
    let props = members("g = { time: #1(int) / tstr }");
    assert_eq!(
        props[0].ty,
        vec![
            PropertyType::tag(1, prim(PrimitiveType::Int)),
            prim(PrimitiveType::Tstr),
        ]
    );
}

#[test]
fn test_nested_tag() {
    let rule = parse_one("wrapped = #24(#6(bytes))");
    assert_eq!(
        rule.as_variable().unwrap().ty,
        vec![PropertyType::tag(
            24,
            PropertyType::tag(6, prim(PrimitiveType::Bytes))
        )]
    );
}

#[test]
fn test_member_union() {
    let props = members("g = { id: tstr / int / float, }");
    assert_eq!(
        props[0].ty,
        vec![
            prim(PrimitiveType::Tstr),
            prim(PrimitiveType::Int),
            prim(PrimitiveType::Float),
        ]
    );
}

#[test]
fn test_group_references() {
    let props = members("g = { base, extra: int, other }");
    assert_eq!(props.len(), 3);
    assert!(props[0].is_group_reference());
    assert_eq!(props[0].ty, vec![PropertyType::GroupRef("base".into())]);
    assert_eq!(props[1].name, "extra");
    assert_eq!(props[2].ty, vec![PropertyType::GroupRef("other".into())]);
}

#[test]
fn test_group_reference_to_primitive_stays_primitive() {
    let props = members("list = [* tstr]");
    assert_eq!(
        props,
        vec![Property {
            has_cut: false,
            occurrence: Occurrence::ZERO_OR_MORE,
            name: String::new(),
            ty: vec![prim(PrimitiveType::Tstr)],
            comment: String::new(),
        }]
    );
}

#[test]
fn test_group_reference_comment() {
    let props = members("g = {\n  base, ; inherited fields\n  x: int\n}");
    assert_eq!(props[0].comment, "inherited fields");
    assert_eq!(props[1].comment, "");
}

#[test]
fn test_trailing_comments() {
    let props = members(
        "person = {\n  name: tstr, ; full name\n  age: uint   ; in years\n}",
    );
    assert_eq!(props[0].comment, "full name");
    assert_eq!(props[1].comment, "in years");
}

#[test]
fn test_comment_absent_is_empty_string() {
    assert_eq!(members("g = { a: int }")[0].comment, "");
}

#[test]
fn test_comment_marker_is_two_chars() {
    assert_eq!(members("g = { a: int ;tight }")[0].comment, "ight");
}

#[test]
fn test_standalone_comments_are_skipped() {
    let source = "; schema header\n; second line\na = int ; after a variable\n\n; before b\nb = {\n  ; leading member comment\n  x: int\n}\n; trailing\n";
    let rules = parse_source(source).unwrap();
    let names: Vec<&str> = rules.iter().map(Assignment::name).collect();
    assert_eq!(names, vec!["a", "b"]);
    assert_eq!(rules[1].members()[0].name, "x");
}

#[test]
fn test_inline_group_value() {
    let props = members("g = { inner: { a: int } }");
    assert_eq!(
        props[0].ty,
        vec![PropertyType::Group(Group {
            name: String::new(),
            properties: vec![keyed("a", vec![prim(PrimitiveType::Int)])],
        })]
    );
}

#[test]
fn test_inline_array_value() {
    let props = members("g = { tags: [* tstr], pair: [int, int] }");
    let PropertyType::Array(tags) = &props[0].ty[0] else {
        panic!("expected inline array, got {:?}", props[0].ty);
    };
    assert_eq!(tags.values[0].occurrence, Occurrence::ZERO_OR_MORE);
    let PropertyType::Array(pair) = &props[1].ty[0] else {
        panic!("expected inline array, got {:?}", props[1].ty);
    };
    assert_eq!(pair.values.len(), 2);
}

#[test]
fn test_inline_array_in_union() {
    let props = members("g = { v: tstr / [* tstr] }");
    assert_eq!(props[0].ty.len(), 2);
    assert!(matches!(props[0].ty[1], PropertyType::Array(_)));
}

#[test]
fn test_multiple_rules_keep_declaration_order() {
    let source = r#"
        person = {
            name: tstr,
            ? age: uint,
            address: address,
        }
        address = [ street: tstr, number: uint ]
        port = 0..65535
        id = tstr / uint
    "#;
    let rules = parse_source(source).unwrap();
    let names: Vec<&str> = rules.iter().map(Assignment::name).collect();
    assert_eq!(names, vec!["person", "address", "port", "id"]);
    assert!(rules[0].as_group().is_some());
    assert!(rules[1].as_array().is_some());
    assert!(rules[2].as_variable().is_some());
    assert_eq!(
        rules[0].members()[2].ty,
        vec![PropertyType::Named("address".into())]
    );
}

#[test]
fn test_duplicate_rule_names_are_kept() {
    let rules = parse_source("a = int\na = tstr").unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].name(), rules[1].name());
}

#[test]
fn test_empty_input() {
    assert_eq!(parse_source("").unwrap(), vec![]);
    assert_eq!(parse_source("; only a comment").unwrap(), vec![]);
}

#[test]
fn test_members_without_commas() {
    let props = members("g = {\n  a: int\n  b: tstr\n}");
    assert_eq!(props.len(), 2);
}

#[test]
fn test_nesting_up_to_the_limit() {
    let depth = MAX_NESTING_DEPTH as usize;
    let source = format!("deep = {}int{}", "[ x: ".repeat(depth), " ]".repeat(depth));
    let rule = parse_one(&source);
    assert!(rule.as_array().is_some());

    let chain = format!("r = {}1", "1..".repeat(depth - 1));
    let rule = parse_one(&chain);
    assert!(rule.as_variable().unwrap().ty[0].as_range().is_some());
}
