//! Diagnostic instances on the Rust side.
//!
//! [`DiagInstance`] is what a generated `log_<name>` call builds, expressed in
//! Rust: a tag, a range, and the payload fields keyed by slot. Rendering walks
//! the same [`Segment`] sequence the C renderer is generated from, so it
//! produces exactly the text the generated `diag_output` writes, given
//! formatters that match the C ones.

use thiserror::Error;

use crate::config::RendererPolicy;
use crate::emit::FALLBACK_MESSAGE;
use crate::model::{DiagnosticDef, PlaceholderKind, Segment, Slot};

/// Byte range the diagnostic points at.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }
}

/// A typed argument value.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum ArgValue {
    /// A type, carried as its printed name.
    Type(String),
    /// A source position, carried as the text it covers.
    Position(String),
    Char(u8),
    Integer(i32),
}

impl ArgValue {
    pub fn kind(&self) -> PlaceholderKind {
        match self {
            ArgValue::Type(_) => PlaceholderKind::TypeRef,
            ArgValue::Position(_) => PlaceholderKind::Position,
            ArgValue::Char(_) => PlaceholderKind::Char,
            ArgValue::Integer(_) => PlaceholderKind::Integer,
        }
    }
}

/// Arguments that do not fit a diagnostic's slots.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InstanceError {
    #[error("`{name}` takes {expected} argument(s), got {found}")]
    Arity {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("`{name}` argument `{slot}` expects {expected}, got {found}")]
    KindMismatch {
        name: String,
        slot: String,
        expected: PlaceholderKind,
        found: PlaceholderKind,
    },
}

/// Per-kind output routines, the Rust counterpart of `error_output_*`.
pub trait ArgFormatter {
    fn format_type(&self, out: &mut String, name: &str);
    fn format_position(&self, out: &mut String, text: &str);
    fn format_char(&self, out: &mut String, c: u8);
    fn format_integer(&self, out: &mut String, value: i32);
}

/// Formats values the way the stock C formatters print them: type names and
/// position text verbatim, the character as-is, integers in decimal.
#[derive(Copy, Clone, Debug, Default)]
pub struct PlainFormatter;

impl ArgFormatter for PlainFormatter {
    fn format_type(&self, out: &mut String, name: &str) {
        out.push_str(name);
    }

    fn format_position(&self, out: &mut String, text: &str) {
        out.push_str(text);
    }

    fn format_char(&self, out: &mut String, c: u8) {
        out.push(char::from(c));
    }

    fn format_integer(&self, out: &mut String, value: i32) {
        out.push_str(&value.to_string());
    }
}

/// One raised diagnostic.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiagInstance<'a> {
    def: &'a DiagnosticDef,
    range: Span,
    fields: Vec<(Slot, ArgValue)>,
}

impl DiagnosticDef {
    /// Build an instance, checking `args` against the slots in order.
    pub fn instantiate(
        &self,
        range: Span,
        args: Vec<ArgValue>,
    ) -> Result<DiagInstance<'_>, InstanceError> {
        let slots: Vec<Slot> = self.slots().collect();
        if slots.len() != args.len() {
            return Err(InstanceError::Arity {
                name: self.name().to_string(),
                expected: slots.len(),
                found: args.len(),
            });
        }

        let fields = slots
            .into_iter()
            .zip(args)
            .map(|(slot, arg)| {
                if arg.kind() == slot.kind {
                    Ok((slot, arg))
                } else {
                    Err(InstanceError::KindMismatch {
                        name: self.name().to_string(),
                        slot: slot.field_name(),
                        expected: slot.kind,
                        found: arg.kind(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(DiagInstance {
            def: self,
            range,
            fields,
        })
    }
}

impl<'a> DiagInstance<'a> {
    pub fn def(&self) -> &'a DiagnosticDef {
        self.def
    }

    pub fn tag(&self) -> String {
        self.def.tag()
    }

    pub fn range(&self) -> Span {
        self.range
    }

    /// Payload field by its generated name (`c1`, `pos2`, ...).
    pub fn field(&self, name: &str) -> Option<&ArgValue> {
        self.fields
            .iter()
            .find(|(slot, _)| slot.field_name() == name)
            .map(|(_, value)| value)
    }

    fn slot_value(&self, slot: Slot) -> Option<&ArgValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == slot)
            .map(|(_, value)| value)
    }

    /// Render with the full policy.
    pub fn render(&self, formatter: &impl ArgFormatter) -> String {
        self.render_with(RendererPolicy::Full, formatter)
    }

    pub fn render_with(&self, policy: RendererPolicy, formatter: &impl ArgFormatter) -> String {
        let mut out = String::new();
        if policy == RendererPolicy::Fallback {
            out.push_str(FALLBACK_MESSAGE);
            return out;
        }

        for segment in self.def.segments() {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(slot) => match self.slot_value(slot) {
                    Some(ArgValue::Type(name)) => formatter.format_type(&mut out, name),
                    Some(ArgValue::Position(text)) => formatter.format_position(&mut out, text),
                    Some(ArgValue::Char(c)) => formatter.format_char(&mut out, *c),
                    Some(ArgValue::Integer(value)) => formatter.format_integer(&mut out, *value),
                    // `instantiate` fills every slot.
                    None => {}
                },
            }
        }
        out
    }
}
