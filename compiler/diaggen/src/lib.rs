//! Diagnostic code generator.
//!
//! Turns a line-oriented diagnostic spec into the C a compiler frontend uses
//! to raise and print its diagnostics. Each diagnostic is declared once:
//!
//! ```text
//! unused_var    warning "variable" %c "is unused at" %p
//! internal_error fatal  "compiler bug"
//! ```
//!
//! and from that single record the generator emits the enum tag
//! (`DIAG_UNUSED_VAR`), a payload union member (`uint8_t c1;
//! SourcePosition pos1;`), a constructor (`log_unused_var(range, c1, pos1)`)
//! and a case in the renderer.
//!
//! # Architecture
//!
//! ```text
//! spec text
//!     ↓
//!   parser     (shell-quoted records → Model)
//!     ↓
//!   Model      (DiagnosticDef + FormatToken, slots derived on demand)
//!     ↓
//!   emit       (declarations | definitions, same slot walk)
//!     ↓
//!   driver     (staged write of one artifact)
//! ```
//!
//! # Debugging
//!
//! - `RUST_LOG=diaggen=debug`: one event per phase.
//! - `RUST_LOG=diaggen=trace`: one event per record and renderer case.

pub mod config;
pub mod driver;
pub mod emit;
pub mod instance;
pub mod model;
pub mod parser;

use std::sync::Once;

pub use config::{GeneratorConfig, RendererPolicy};
pub use driver::{run, Artifact, GenerateError};
pub use instance::{ArgFormatter, ArgValue, DiagInstance, InstanceError, PlainFormatter, Span};
pub use model::{DiagnosticDef, FormatToken, KindSet, Model, PlaceholderKind, Segment, Slot};
pub use parser::{parse, SpecError, SpecErrorKind};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Does nothing unless `RUST_LOG` is set.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(EnvFilter::from_default_env())
                .init();
        }
    });
}
