use pretty_assertions::assert_eq;

use super::*;

fn lit(text: &str) -> FormatToken {
    FormatToken::Literal(text.to_string())
}

fn ph(kind: PlaceholderKind) -> FormatToken {
    FormatToken::Placeholder(kind)
}

fn field_names(def: &DiagnosticDef) -> Vec<String> {
    def.slots().map(Slot::field_name).collect()
}

// === Placeholder kinds ===

#[test]
fn markers_round_trip_through_from_marker() {
    for kind in PlaceholderKind::ALL {
        assert_eq!(PlaceholderKind::from_marker(kind.marker()), Some(kind));
    }
}

#[test]
fn unknown_markers_are_not_kinds() {
    assert_eq!(PlaceholderKind::from_marker("%x"), None);
    assert_eq!(PlaceholderKind::from_marker("%"), None);
    assert_eq!(PlaceholderKind::from_marker("%tt"), None);
    assert_eq!(PlaceholderKind::from_marker(" %t"), None);
}

#[test]
fn kind_set_from_letters() {
    assert_eq!(KindSet::from_letters("tp"), Ok(KindSet::TYPE_REF | KindSet::POSITION));
    assert_eq!(KindSet::from_letters("tpcd"), Ok(KindSet::all()));
    assert_eq!(KindSet::from_letters(""), Ok(KindSet::empty()));
    assert_eq!(KindSet::from_letters("tx"), Err('x'));
}

#[test]
fn kind_set_recognizes_members_only() {
    let set = KindSet::TYPE_REF | KindSet::POSITION;
    assert!(set.recognizes(PlaceholderKind::TypeRef));
    assert!(set.recognizes(PlaceholderKind::Position));
    assert!(!set.recognizes(PlaceholderKind::Char));
    assert!(!set.recognizes(PlaceholderKind::Integer));
}

// === Slot naming ===

#[test]
fn slots_are_numbered_per_kind() {
    let def = DiagnosticDef::new(
        "mismatch",
        "error",
        vec![
            ph(PlaceholderKind::TypeRef),
            lit("vs"),
            ph(PlaceholderKind::TypeRef),
            lit("at"),
            ph(PlaceholderKind::Position),
            ph(PlaceholderKind::Char),
            ph(PlaceholderKind::Integer),
            ph(PlaceholderKind::TypeRef),
        ],
    );

    assert_eq!(
        field_names(&def),
        vec!["type1", "type2", "pos1", "c1", "i1", "type3"]
    );
}

#[test]
fn counters_restart_for_every_diagnostic() {
    let first = DiagnosticDef::new("a", "error", vec![ph(PlaceholderKind::Position); 3]);
    let second = DiagnosticDef::new("b", "error", vec![ph(PlaceholderKind::Position)]);

    assert_eq!(field_names(&first), vec!["pos1", "pos2", "pos3"]);
    assert_eq!(field_names(&second), vec!["pos1"]);
}

#[test]
fn segments_are_stable_across_walks() {
    let def = DiagnosticDef::new(
        "unused_var",
        "warning",
        vec![lit("variable"), ph(PlaceholderKind::Char), lit("is unused at"), ph(PlaceholderKind::Position)],
    );

    let first: Vec<_> = def.segments().collect();
    let second: Vec<_> = def.segments().collect();
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec![
            Segment::Literal("variable"),
            Segment::Slot(Slot { kind: PlaceholderKind::Char, ordinal: 1 }),
            Segment::Literal("is unused at"),
            Segment::Slot(Slot { kind: PlaceholderKind::Position, ordinal: 1 }),
        ]
    );
}

// === Naming ===

#[test]
fn tag_and_constructor_names() {
    let def = DiagnosticDef::new("unused_var", "warning", vec![]);
    assert_eq!(def.tag(), "DIAG_UNUSED_VAR");
    assert_eq!(def.constructor_name(), "log_unused_var");
}

#[test]
fn constructor_name_preserves_case() {
    let def = DiagnosticDef::new("BadCast", "error", vec![]);
    assert_eq!(def.tag(), "DIAG_BADCAST");
    assert_eq!(def.constructor_name(), "log_BadCast");
}

#[test]
fn payload_presence() {
    let bare = DiagnosticDef::new("internal_error", "fatal", vec![lit("compiler bug")]);
    let typed = DiagnosticDef::new("x", "error", vec![ph(PlaceholderKind::Integer)]);
    assert!(!bare.has_typed_payload());
    assert!(typed.has_typed_payload());
}

#[test]
fn model_preserves_order_and_filters_payloads() {
    let model = Model::from_defs(vec![
        DiagnosticDef::new("b", "error", vec![ph(PlaceholderKind::Char)]),
        DiagnosticDef::new("a", "error", vec![lit("plain")]),
        DiagnosticDef::new("c", "error", vec![ph(PlaceholderKind::Integer)]),
    ]);

    let names: Vec<_> = model.iter().map(DiagnosticDef::name).collect();
    assert_eq!(names, vec!["b", "a", "c"]);

    let with_payload: Vec<_> = model.with_payload().map(DiagnosticDef::name).collect();
    assert_eq!(with_payload, vec!["b", "c"]);
    assert_eq!(model.get("a").map(DiagnosticDef::category), Some("error"));
    assert!(model.get("missing").is_none());
}
