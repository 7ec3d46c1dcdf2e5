#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use super::*;
use crate::parser::SpecErrorKind;

const SPEC: &str = "unused_var warning \"variable\" %c \"is unused at\" %p\n\
                    internal_error fatal \"compiler bug\"\n";

fn write_spec(dir: &TempDir, text: &str) -> PathBuf {
    let path = dir.path().join("diags.spec");
    fs::write(&path, text).unwrap();
    path
}

#[test]
fn artifact_names() {
    assert_eq!("header".parse::<Artifact>(), Ok(Artifact::Declarations));
    assert_eq!("declarations".parse::<Artifact>(), Ok(Artifact::Declarations));
    assert_eq!("source".parse::<Artifact>(), Ok(Artifact::Definitions));
    assert_eq!("definitions".parse::<Artifact>(), Ok(Artifact::Definitions));
    assert!("both".parse::<Artifact>().is_err());
}

#[test]
fn writes_both_artifacts() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, SPEC);
    let header = dir.path().join("diags.h");
    let source = dir.path().join("diags.inc");
    let config = GeneratorConfig::default();

    run(Artifact::Declarations, &input, &header, &config).unwrap();
    run(Artifact::Definitions, &input, &source, &config).unwrap();

    let header = fs::read_to_string(header).unwrap();
    let source = fs::read_to_string(source).unwrap();
    assert!(header.contains("    DIAG_UNUSED_VAR,\n    DIAG_INTERNAL_ERROR\n} DiagKind;"));
    assert!(source.contains("log_internal_error(SourcePosition range) {"));
}

#[test]
fn overwrites_existing_output() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, SPEC);
    let output = dir.path().join("diags.h");
    fs::write(&output, "stale").unwrap();

    run(Artifact::Declarations, &input, &output, &GeneratorConfig::default()).unwrap();

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("/* Generated by diaggen. Do not edit. */"));
}

#[test]
fn duplicate_names_produce_no_output() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, "dup error %d\ndup error %t\n");
    let output = dir.path().join("diags.h");

    let err = run(Artifact::Declarations, &input, &output, &GeneratorConfig::default())
        .unwrap_err();

    match err {
        GenerateError::Spec { source, .. } => {
            assert_eq!(source.line, 2);
            assert!(matches!(source.kind, SpecErrorKind::DuplicateName { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output.exists());
}

#[test]
fn failed_run_keeps_previous_output() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, "broken error \"unterminated\n");
    let output = dir.path().join("diags.h");
    fs::write(&output, "previous").unwrap();

    assert!(run(Artifact::Declarations, &input, &output, &GeneratorConfig::default()).is_err());
    assert_eq!(fs::read_to_string(&output).unwrap(), "previous");
}

#[test]
fn empty_spec_is_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, "# nothing yet\n\n");
    let output = dir.path().join("diags.h");

    let err = run(Artifact::Declarations, &input, &output, &GeneratorConfig::default())
        .unwrap_err();
    assert!(matches!(err, GenerateError::EmptySpec { .. }));
    assert!(!output.exists());
}

#[test]
fn missing_input_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let err = run(
        Artifact::Definitions,
        &dir.path().join("absent.spec"),
        &dir.path().join("out.inc"),
        &GeneratorConfig::default(),
    )
    .unwrap_err();
    assert!(matches!(err, GenerateError::Read { .. }));
    assert!(err.to_string().starts_with("cannot read `"));
}

#[test]
fn unwritable_destination_is_a_write_error() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, SPEC);
    let output = dir.path().join("no_such_dir").join("diags.h");

    let err = run(Artifact::Declarations, &input, &output, &GeneratorConfig::default())
        .unwrap_err();
    assert!(matches!(err, GenerateError::Write { .. }));
}

#[test]
fn config_reaches_parser_and_renderer() {
    let dir = TempDir::new().unwrap();
    let input = write_spec(&dir, "old error %t %c\n");
    let output = dir.path().join("diags.inc");
    let config = GeneratorConfig::default()
        .with_kinds(crate::model::KindSet::TYPE_REF | crate::model::KindSet::POSITION)
        .with_policy(RendererPolicy::Fallback);

    run(Artifact::Definitions, &input, &output, &config).unwrap();

    let source = fs::read_to_string(output).unwrap();
    assert!(source.contains("/* Renderer policy: fallback. */"));
    assert!(source.contains("log_old(SourcePosition range, Type *type1) {"));
}
