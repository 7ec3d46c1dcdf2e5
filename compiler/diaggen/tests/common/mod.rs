//! Helpers for reading generated C back in tests.
//!
//! These only understand the exact layout diaggen writes.

#![allow(dead_code, reason = "each test binary uses a different subset")]

/// Tags listed in the `DiagKind` enum, separators included (`DIAG_A,`).
pub fn enum_entries(header: &str) -> Vec<String> {
    header
        .lines()
        .skip_while(|line| *line != "typedef enum {")
        .skip(1)
        .take_while(|line| !line.starts_with('}'))
        .map(|line| line.trim().to_string())
        .collect()
}

/// Field declarations of the union member for `name`, or `None` if the
/// diagnostic has no member.
pub fn payload_fields(header: &str, name: &str) -> Option<Vec<String>> {
    let lines: Vec<&str> = header.lines().collect();
    let union_start = lines.iter().position(|line| line.starts_with("union DiagData {"))?;
    let union_len = lines[union_start..].iter().position(|line| *line == "};")?;
    let union = &lines[union_start..union_start + union_len];

    let close = format!("}} {name};");
    let end = union.iter().position(|line| line.trim() == close)?;
    let start = union[..end].iter().rposition(|line| line.trim() == "struct {")?;
    Some(
        union[start + 1..end]
            .iter()
            .map(|line| line.trim().trim_end_matches(';').to_string())
            .collect(),
    )
}

/// Parameters of the `log_<name>` prototype.
pub fn prototype_params(header: &str, name: &str) -> Option<Vec<String>> {
    let prefix = format!("void log_{name}(");
    let line = header.lines().find(|line| line.starts_with(&prefix))?;
    let inner = line.strip_prefix(&prefix)?.strip_suffix(");")?;
    Some(inner.split(", ").map(str::to_string).collect())
}

/// Parameters of the `log_<name>` definition.
pub fn definition_params(source: &str, name: &str) -> Option<Vec<String>> {
    let prefix = format!("log_{name}(");
    let line = source.lines().find(|line| line.starts_with(&prefix))?;
    let inner = line.strip_prefix(&prefix)?.strip_suffix(") {")?;
    Some(inner.split(", ").map(str::to_string).collect())
}

/// Payload fields the `log_<name>` body assigns, in order.
pub fn assigned_fields(source: &str, name: &str) -> Vec<String> {
    let prefix = format!("diag.data.{name}.");
    source
        .lines()
        .filter_map(|line| line.trim().strip_prefix(&prefix))
        .filter_map(|rest| rest.split(' ').next())
        .map(str::to_string)
        .collect()
}

/// Payload fields the renderer case for `name` reads, in order.
pub fn rendered_fields(source: &str, name: &str) -> Vec<String> {
    let needle = format!("diag->data.{name}.");
    source
        .lines()
        .filter_map(|line| line.split_once(&needle))
        .map(|(_, rest)| rest.trim_end_matches(");").to_string())
        .collect()
}
