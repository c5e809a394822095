//! Compatibility modes selecting how a pattern is tokenised and normalised.

/// Dialect of the range grammar used when compiling a pattern.
///
/// # Examples
///
/// ```
/// use range_expression::CompatibilityMode;
///
/// let mode = CompatibilityMode::default();
/// assert!(!mode.is_legacy());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CompatibilityMode {
    /// Closed ranges over any value type. Each part and each side of `..` is
    /// trimmed, and a bare value `v` matches exactly `v`.
    #[default]
    Typed,
    /// The integer matcher dialect. All whitespace is stripped before
    /// splitting, `*` matches everything, and ends are stored half-open using
    /// the value's successor, so a bare value `v` becomes `[v, v + 1)`.
    Legacy,
}

impl CompatibilityMode {
    /// Returns `true` for [`CompatibilityMode::Legacy`].
    ///
    /// # Examples
    ///
    /// ```
    /// use range_expression::CompatibilityMode;
    ///
    /// assert!(CompatibilityMode::Legacy.is_legacy());
    /// assert!(!CompatibilityMode::Typed.is_legacy());
    /// ```
    #[must_use]
    pub const fn is_legacy(self) -> bool {
        matches!(self, Self::Legacy)
    }

    /// Returns `true` when the dialect accepts the `*` wildcard part.
    #[must_use]
    pub const fn allows_wildcard(self) -> bool {
        self.is_legacy()
    }

    /// Returns `true` when literals may carry an explicit `+` sign.
    #[must_use]
    pub const fn allows_plus_sign(self) -> bool {
        !self.is_legacy()
    }

    /// Returns `true` when compiled ranges need the value successor.
    #[must_use]
    pub const fn needs_successor(self) -> bool {
        self.is_legacy()
    }
}
