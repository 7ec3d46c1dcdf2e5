//! Sets of recognized placeholder kinds.

use bitflags::bitflags;

use super::PlaceholderKind;

bitflags! {
    /// Placeholder kinds the parser treats as markers.
    ///
    /// A marker whose kind is not in the set is parsed as literal text.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct KindSet: u8 {
        const TYPE_REF = 1 << 0;
        const POSITION = 1 << 1;
        const CHAR = 1 << 2;
        const INTEGER = 1 << 3;
    }
}

impl KindSet {
    /// The single-kind set for `kind`.
    pub fn of(kind: PlaceholderKind) -> Self {
        match kind {
            PlaceholderKind::TypeRef => KindSet::TYPE_REF,
            PlaceholderKind::Position => KindSet::POSITION,
            PlaceholderKind::Char => KindSet::CHAR,
            PlaceholderKind::Integer => KindSet::INTEGER,
        }
    }

    pub fn recognizes(self, kind: PlaceholderKind) -> bool {
        self.contains(Self::of(kind))
    }

    /// Parse marker letters such as `"tp"` or `"tpcd"`.
    ///
    /// Returns the first unknown letter on failure.
    pub fn from_letters(letters: &str) -> Result<Self, char> {
        letters.chars().try_fold(KindSet::empty(), |set, letter| {
            PlaceholderKind::ALL
                .into_iter()
                .find(|kind| kind.letter() == letter)
                .map(|kind| set | Self::of(kind))
                .ok_or(letter)
        })
    }
}

impl Default for KindSet {
    fn default() -> Self {
        KindSet::all()
    }
}
