//! In-memory model of a diagnostic spec.
//!
//! A [`Model`] is an ordered list of [`DiagnosticDef`]s, one per spec record.
//! Each definition owns its message template as a sequence of
//! [`FormatToken`]s. Argument slots (`type1`, `pos1`, `c1`, ...) are never
//! stored: they are derived on demand by [`DiagnosticDef::segments`], which is
//! the single left-to-right scan every emitter goes through. Payload fields,
//! constructor parameters, constructor assignments and renderer cases all come
//! out of that one scan, so they cannot drift apart.

use std::fmt;

mod kinds;

pub use kinds::KindSet;

/// Kind of a typed argument slot in a message template.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PlaceholderKind {
    /// `%t`: a reference to a compiler type.
    TypeRef,
    /// `%p`: a source position.
    Position,
    /// `%c`: a single byte character.
    Char,
    /// `%d`: a machine integer.
    Integer,
}

impl PlaceholderKind {
    /// Every kind, in marker order.
    pub const ALL: [PlaceholderKind; 4] = [
        PlaceholderKind::TypeRef,
        PlaceholderKind::Position,
        PlaceholderKind::Char,
        PlaceholderKind::Integer,
    ];

    /// The two-character marker used in spec files.
    pub fn marker(self) -> &'static str {
        match self {
            PlaceholderKind::TypeRef => "%t",
            PlaceholderKind::Position => "%p",
            PlaceholderKind::Char => "%c",
            PlaceholderKind::Integer => "%d",
        }
    }

    /// Look up the kind for an exact marker. Anything else is literal text.
    pub fn from_marker(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.marker() == token)
    }

    /// The marker letter (`t`, `p`, `c`, `d`).
    pub fn letter(self) -> char {
        match self {
            PlaceholderKind::TypeRef => 't',
            PlaceholderKind::Position => 'p',
            PlaceholderKind::Char => 'c',
            PlaceholderKind::Integer => 'd',
        }
    }

    /// Prefix of the generated field/parameter name.
    pub fn field_prefix(self) -> &'static str {
        match self {
            PlaceholderKind::TypeRef => "type",
            PlaceholderKind::Position => "pos",
            PlaceholderKind::Char => "c",
            PlaceholderKind::Integer => "i",
        }
    }

    fn index(self) -> usize {
        match self {
            PlaceholderKind::TypeRef => 0,
            PlaceholderKind::Position => 1,
            PlaceholderKind::Char => 2,
            PlaceholderKind::Integer => 3,
        }
    }
}

impl fmt::Display for PlaceholderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderKind::TypeRef => write!(f, "type"),
            PlaceholderKind::Position => write!(f, "position"),
            PlaceholderKind::Char => write!(f, "char"),
            PlaceholderKind::Integer => write!(f, "integer"),
        }
    }
}

/// One element of a message template.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum FormatToken {
    /// Text copied verbatim into the rendered message.
    Literal(String),
    /// A positional typed argument.
    Placeholder(PlaceholderKind),
}

/// A named argument slot: a kind plus its 1-based ordinal among slots of the
/// same kind within one diagnostic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Slot {
    pub kind: PlaceholderKind,
    pub ordinal: u32,
}

impl Slot {
    /// Field and parameter name, e.g. `type2` or `c1`.
    pub fn field_name(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.field_prefix(), self.ordinal)
    }
}

/// Per-kind running counters. A fresh counter is created for every diagnostic.
#[derive(Clone, Debug, Default)]
pub struct SlotCounter {
    issued: [u32; 4],
}

impl SlotCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next slot of `kind`.
    pub fn next(&mut self, kind: PlaceholderKind) -> Slot {
        let issued = &mut self.issued[kind.index()];
        *issued += 1;
        Slot {
            kind,
            ordinal: *issued,
        }
    }
}

/// A template element with its slot resolved.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Segment<'a> {
    Literal(&'a str),
    Slot(Slot),
}

/// Iterator over the resolved segments of one template.
pub struct Segments<'a> {
    tokens: std::slice::Iter<'a, FormatToken>,
    counter: SlotCounter,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.tokens.next()?;
        Some(match token {
            FormatToken::Literal(text) => Segment::Literal(text),
            FormatToken::Placeholder(kind) => Segment::Slot(self.counter.next(*kind)),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.tokens.size_hint()
    }
}

/// One diagnostic declared in the spec.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DiagnosticDef {
    name: String,
    category: String,
    template: Vec<FormatToken>,
}

impl DiagnosticDef {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        template: Vec<FormatToken>,
    ) -> Self {
        DiagnosticDef {
            name: name.into(),
            category: category.into(),
            template,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The second spec column. Carried through, not interpreted.
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn template(&self) -> &[FormatToken] {
        &self.template
    }

    /// Enumeration tag, e.g. `DIAG_UNUSED_VAR`.
    pub fn tag(&self) -> String {
        tag_for(&self.name)
    }

    /// Constructor symbol, e.g. `log_unused_var`.
    pub fn constructor_name(&self) -> String {
        format!("log_{}", self.name)
    }

    /// Walk the template left to right, naming each placeholder.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            tokens: self.template.iter(),
            counter: SlotCounter::new(),
        }
    }

    /// The argument slots in template order.
    pub fn slots(&self) -> impl Iterator<Item = Slot> + '_ {
        self.segments().filter_map(|segment| match segment {
            Segment::Slot(slot) => Some(slot),
            Segment::Literal(_) => None,
        })
    }

    /// Whether the diagnostic carries any typed arguments.
    pub fn has_typed_payload(&self) -> bool {
        self.template
            .iter()
            .any(|token| matches!(token, FormatToken::Placeholder(_)))
    }
}

/// Enumeration tag for a diagnostic name.
pub fn tag_for(name: &str) -> String {
    format!("DIAG_{}", name.to_ascii_uppercase())
}

/// The ordered set of diagnostics from one spec file.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Model {
    diagnostics: Vec<DiagnosticDef>,
}

impl Model {
    /// Wrap already-validated definitions. Record order is preserved.
    pub(crate) fn from_defs(diagnostics: Vec<DiagnosticDef>) -> Self {
        Model { diagnostics }
    }

    pub fn diagnostics(&self) -> &[DiagnosticDef] {
        &self.diagnostics
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiagnosticDef> {
        self.diagnostics.iter()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&DiagnosticDef> {
        self.diagnostics.iter().find(|def| def.name == name)
    }

    /// Diagnostics that contribute a payload union member.
    pub fn with_payload(&self) -> impl Iterator<Item = &DiagnosticDef> {
        self.diagnostics.iter().filter(|def| def.has_typed_payload())
    }
}

impl<'a> IntoIterator for &'a Model {
    type Item = &'a DiagnosticDef;
    type IntoIter = std::slice::Iter<'a, DiagnosticDef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
