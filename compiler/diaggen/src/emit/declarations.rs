//! Declarations artifact: kind enum, payload union, record type, prototypes.

use tracing::debug;

use super::{
    banner, constructor_params, payload_fields, renderer_signature, CodeWriter,
    EXTERNAL_HEADERS, INCLUDE_GUARD, KIND_ENUM, PAYLOAD_UNION, POSITION_TYPE, RANGE_PARAM,
    RECORD_TYPE,
};
use crate::model::{DiagnosticDef, Model};

/// Emit the declarations header for `model`.
pub fn emit_declarations(model: &Model) -> String {
    let mut w = CodeWriter::new();

    banner(&mut w, None);
    w.writeln(&format!("#ifndef {INCLUDE_GUARD}"));
    w.writeln(&format!("#define {INCLUDE_GUARD}"));
    w.newline();
    w.writeln("#include <stdint.h>");
    w.writeln("#include <stdio.h>");
    w.newline();
    for header in EXTERNAL_HEADERS {
        w.writeln(&format!("#include \"{header}\""));
    }
    w.newline();

    emit_kind_enum(&mut w, model);
    w.newline();
    emit_payload_union(&mut w, model);
    w.newline();
    emit_record_type(&mut w);
    w.newline();

    for def in model {
        w.writeln(&format!("void {}({});", def.constructor_name(), constructor_params(def)));
    }
    w.newline();
    w.writeln(&format!("void {};", renderer_signature()));
    w.newline();
    w.writeln(&format!("#endif /* {INCLUDE_GUARD} */"));

    debug!(
        diagnostics = model.len(),
        payloads = model.with_payload().count(),
        "emitted declarations"
    );
    w.finish()
}

fn emit_kind_enum(w: &mut CodeWriter, model: &Model) {
    let tags: Vec<String> = model.iter().map(DiagnosticDef::tag).collect();

    w.writeln("typedef enum {");
    w.indent();
    w.write_separated(&tags, ",");
    w.dedent();
    w.writeln(&format!("}} {KIND_ENUM};"));
}

/// One member struct per diagnostic with placeholders.
fn emit_payload_union(w: &mut CodeWriter, model: &Model) {
    w.writeln(&format!("union {PAYLOAD_UNION} {{"));
    w.indent();

    let mut members = 0usize;
    for def in model.with_payload() {
        w.writeln("struct {");
        w.indent();
        for field in payload_fields(def) {
            w.writeln(&format!("{field};"));
        }
        w.dedent();
        w.writeln(&format!("}} {};", def.name()));
        members += 1;
    }

    // C forbids empty unions.
    if members == 0 {
        w.writeln("char none;");
    }

    w.dedent();
    w.writeln("};");
}

fn emit_record_type(w: &mut CodeWriter) {
    w.writeln("typedef struct {");
    w.indent();
    w.writeln(&format!("{KIND_ENUM} t;"));
    w.writeln(&format!("union {PAYLOAD_UNION} data;"));
    w.writeln(&format!("{POSITION_TYPE} {RANGE_PARAM};"));
    w.dedent();
    w.writeln(&format!("}} {RECORD_TYPE};"));
}
