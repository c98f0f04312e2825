//! Module with the scan-set membership table.

/// The byte membership table of a `%[...]` directive.
///
/// The table holds one bit per byte value. An inverted set (`%[^...]`) matches every byte that
/// is *not* a member.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct CharSet {
    bits: [u64; 4],
    invert: bool,
}

impl CharSet {
    /// Create an empty set.
    pub fn new(invert: bool) -> Self {
        Self {
            bits: [0; 4],
            invert,
        }
    }

    /// Add a single member.
    #[inline]
    pub fn insert(&mut self, b: u8) {
        self.bits[usize::from(b >> 6)] |= 1u64 << (b & 0x3f);
    }

    /// Add all bytes of the inclusive range `lo..=hi`.
    pub fn insert_range(&mut self, lo: u8, hi: u8) {
        for b in lo..=hi {
            self.insert(b);
        }
    }

    /// Check if the byte was added to the set, regardless of inversion.
    #[inline]
    pub fn is_member(&self, b: u8) -> bool {
        self.bits[usize::from(b >> 6)] & (1u64 << (b & 0x3f)) != 0
    }

    /// Check if the set matches the byte, honoring inversion.
    #[inline]
    pub fn matches(&self, b: u8) -> bool {
        self.is_member(b) != self.invert
    }

    /// Returns true for a `%[^...]` set.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.invert
    }

    /// Iterate over the explicit members in ascending order.
    pub fn members(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|b| self.is_member(*b))
    }
}

impl std::fmt::Debug for CharSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CharSet {{ invert: {}, members: \"", self.invert)?;
        for b in self.members() {
            write!(f, "{}", b.escape_ascii())?;
        }
        write!(f, "\" }}")
    }
}
