//! Definitions artifact: constructor bodies and the renderer.
//!
//! The output is meant to be textually included into the translation unit
//! that defines the sink and the per-kind formatters.

use tracing::{debug, trace};

use super::{
    banner, c_formatter, c_string_literal, constructor_params, renderer_signature, CodeWriter,
    FALLBACK_MESSAGE, RANGE_PARAM, RECORD_TYPE, SINK_FN,
};
use crate::config::RendererPolicy;
use crate::model::{DiagnosticDef, Model, Segment};

/// Emit constructor definitions and the renderer for `model`.
pub fn emit_definitions(model: &Model, policy: RendererPolicy) -> String {
    let mut w = CodeWriter::new();

    banner(&mut w, Some(&format!("Renderer policy: {policy}.")));

    for def in model {
        emit_constructor(&mut w, def);
        w.newline();
    }

    match policy {
        RendererPolicy::Full => emit_full_renderer(&mut w, model),
        RendererPolicy::Fallback => emit_fallback_renderer(&mut w, model),
    }

    debug!(diagnostics = model.len(), %policy, "emitted definitions");
    w.finish()
}

/// `log_<name>`: fill a record and hand it to the sink.
fn emit_constructor(w: &mut CodeWriter, def: &DiagnosticDef) {
    let name = def.name();

    w.writeln("void");
    w.writeln(&format!("{}({}) {{", def.constructor_name(), constructor_params(def)));
    w.indent();
    w.writeln(&format!("{RECORD_TYPE} diag = {{0}};"));
    w.writeln(&format!("diag.t = {};", def.tag()));
    w.writeln(&format!("diag.{RANGE_PARAM} = {RANGE_PARAM};"));
    for slot in def.slots() {
        let field = slot.field_name();
        w.writeln(&format!("diag.data.{name}.{field} = {field};"));
    }
    w.writeln(&format!("{SINK_FN}(diag);"));
    w.dedent();
    w.writeln("}");
}

fn emit_renderer_open(w: &mut CodeWriter) {
    w.writeln("void");
    w.writeln(&format!("{} {{", renderer_signature()));
    w.indent();
    // No default case: -Wswitch reports a kind without a case.
    w.writeln("switch (diag->t) {");
}

fn emit_renderer_close(w: &mut CodeWriter) {
    w.writeln("}");
    w.dedent();
    w.writeln("}");
}

fn emit_full_renderer(w: &mut CodeWriter, model: &Model) {
    emit_renderer_open(w);

    for def in model {
        let name = def.name();
        w.writeln(&format!("case {}:", def.tag()));
        w.indent();
        for segment in def.segments() {
            match segment {
                Segment::Literal("") => {}
                Segment::Literal(text) => {
                    w.writeln(&format!("fputs({}, file);", c_string_literal(text)));
                }
                Segment::Slot(slot) => {
                    w.writeln(&format!(
                        "{}(file, diag->data.{name}.{});",
                        c_formatter(slot.kind),
                        slot.field_name()
                    ));
                }
            }
        }
        w.writeln("break;");
        w.dedent();
        trace!(name, "emitted renderer case");
    }

    emit_renderer_close(w);
}

/// Every case shares one generic message.
fn emit_fallback_renderer(w: &mut CodeWriter, model: &Model) {
    emit_renderer_open(w);

    for def in model {
        w.writeln(&format!("case {}:", def.tag()));
    }
    w.indent();
    w.writeln(&format!("fputs({}, file);", c_string_literal(FALLBACK_MESSAGE)));
    w.writeln("break;");
    w.dedent();

    emit_renderer_close(w);
}
