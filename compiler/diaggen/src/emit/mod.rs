//! C emitters for a diagnostic [`Model`](crate::model::Model).
//!
//! Two artifacts come out of one model:
//!
//! ```text
//!            Model
//!          ↙       ↘
//!  declarations    definitions
//!  (diags.h)       (constructors + renderer)
//! ```
//!
//! Both sides name payload fields and constructor parameters through
//! [`DiagnosticDef::segments`](crate::model::DiagnosticDef::segments) and the
//! helpers in this module. Nothing here keeps its own counters.
//!
//! The generated code relies on these external symbols:
//!
//! - `SourcePosition` (from `helper.h`) and `Type` (from `type.h`)
//! - `void errors_log(Diag diag)`, the sink every constructor hands off to
//! - `error_output_type`, `error_output_pos`, `error_output_char`,
//!   `error_output_int`, the per-kind formatters the renderer calls

mod declarations;
mod definitions;
mod writer;

pub use declarations::emit_declarations;
pub use definitions::emit_definitions;
pub use writer::CodeWriter;

use crate::model::{DiagnosticDef, PlaceholderKind, Slot};

/// Include guard of the declarations artifact.
pub const INCLUDE_GUARD: &str = "DIAGS_H";
/// Headers declaring `SourcePosition` and `Type`.
pub const EXTERNAL_HEADERS: [&str; 2] = ["helper.h", "type.h"];
pub const KIND_ENUM: &str = "DiagKind";
pub const PAYLOAD_UNION: &str = "DiagData";
pub const RECORD_TYPE: &str = "Diag";
/// Name of the mandatory leading constructor parameter.
pub const RANGE_PARAM: &str = "range";
pub const SINK_FN: &str = "errors_log";
pub const RENDERER_FN: &str = "diag_output";
/// What every diagnostic renders as under the fallback policy.
pub const FALLBACK_MESSAGE: &str = "compilation error";

const POSITION_TYPE: &str = "SourcePosition";

/// C declaration of a value of `kind` named `name`.
pub fn c_declaration(kind: PlaceholderKind, name: &str) -> String {
    match kind {
        PlaceholderKind::TypeRef => format!("Type *{name}"),
        PlaceholderKind::Position => format!("{POSITION_TYPE} {name}"),
        PlaceholderKind::Char => format!("uint8_t {name}"),
        PlaceholderKind::Integer => format!("int {name}"),
    }
}

/// The external routine that prints a value of `kind`.
pub fn c_formatter(kind: PlaceholderKind) -> &'static str {
    match kind {
        PlaceholderKind::TypeRef => "error_output_type",
        PlaceholderKind::Position => "error_output_pos",
        PlaceholderKind::Char => "error_output_char",
        PlaceholderKind::Integer => "error_output_int",
    }
}

fn slot_declaration(slot: Slot) -> String {
    c_declaration(slot.kind, &slot.field_name())
}

/// Payload struct fields of `def`, in template order.
fn payload_fields(def: &DiagnosticDef) -> Vec<String> {
    def.slots().map(slot_declaration).collect()
}

/// Constructor parameter list: the range, then one parameter per slot.
///
/// Shared by the prototype and the definition so the two signatures are the
/// same string.
fn constructor_params(def: &DiagnosticDef) -> String {
    std::iter::once(format!("{POSITION_TYPE} {RANGE_PARAM}"))
        .chain(def.slots().map(slot_declaration))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renderer signature, shared by the prototype and the definition.
fn renderer_signature() -> String {
    format!("{RENDERER_FN}(const {RECORD_TYPE} *diag, FILE *file)")
}

/// Quote `text` as a C string literal.
///
/// Non-printable and non-ASCII bytes become three-digit octal escapes, and a
/// `?` following another `?` is escaped so no trigraph can form.
pub fn c_string_literal(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    let mut prev = 0u8;
    for byte in text.bytes() {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'"' => out.push_str("\\\""),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b'?' if prev == b'?' => out.push_str("\\?"),
            0x20..=0x7e => out.push(char::from(byte)),
            _ => out.push_str(&format!("\\{byte:03o}")),
        }
        prev = byte;
    }
    out.push('"');
    out
}

/// Leading comment of every artifact.
fn banner(w: &mut CodeWriter, extra: Option<&str>) {
    w.writeln("/* Generated by diaggen. Do not edit. */");
    if let Some(extra) = extra {
        w.writeln(&format!("/* {extra} */"));
    }
    w.newline();
}
