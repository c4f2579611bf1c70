//! Character style flags shared by the reader and the LaTeX renderer.
//!
//! Word stores character formatting in nested property blocks (`w:pPr`,
//! `w:rPr`). The reader folds every block it passes through into a single
//! [`Style`] set by OR-ing, so the effective style of a text node is the
//! union of all enclosing scopes.
use bitflags::bitflags;

bitflags! {
    /// Accumulated character formatting of a text node.
    ///
    /// The bit order determines the nesting order of LaTeX style commands
    /// (lowest bit outermost). Serialized documents store the flag names
    /// (`"BOLD | ITALIC"`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct Style: u8 {
        /// Bold (`w:b`)
        const BOLD = 1;
        /// Italic (`w:i`)
        const ITALIC = 1 << 1;
        /// Single underline (`w:u w:val="single"`)
        const UNDERLINE = 1 << 2;
        /// Subscript (`w:vertAlign` or a lowered `w:position`)
        const SUBSCRIPT = 1 << 3;
        /// Superscript (`w:vertAlign` or a raised `w:position`)
        const SUPERSCRIPT = 1 << 4;
    }
}

impl Style {
    /// Combine two style sets.
    ///
    /// Merging is a plain union, so it is commutative, associative and
    /// idempotent (`merge(s, s) == s`).
    #[inline]
    pub fn merge(self, other: Style) -> Style {
        self | other
    }

    /// Iterate over the individual flags of this set, lowest bit first.
    #[inline]
    pub fn flags(self) -> impl Iterator<Item = Style> {
        self.iter()
    }
}

/// Merge two style sets. See [`Style::merge`].
#[inline]
pub fn merge(left: Style, right: Style) -> Style {
    left.merge(right)
}

/// Decompose a style set into its individual flags.
///
/// The result is ordered from the lowest bit to the highest and omits
/// absent bits, e.g. `BOLD | ITALIC | UNDERLINE` becomes
/// `[BOLD, ITALIC, UNDERLINE]`.
pub fn calculate_flags(style: Style) -> Vec<Style> {
    style.flags().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_calculate_flags() {
        let flags = calculate_flags(Style::from_bits_truncate(1 | 2 | 4));
        assert_eq!(flags, vec![Style::BOLD, Style::ITALIC, Style::UNDERLINE]);
        let bits: Vec<u8> = flags.iter().map(|f| f.bits()).collect();
        assert_eq!(bits, vec![1, 2, 4]);

        let bits: Vec<u8> = calculate_flags(Style::from_bits_truncate(4 | 16))
            .iter()
            .map(|f| f.bits())
            .collect();
        assert_eq!(bits, vec![4, 16]);

        assert!(calculate_flags(Style::empty()).is_empty());
    }

    #[test]
    fn test_merge_accumulates() {
        let paragraph = Style::ITALIC;
        let run = Style::BOLD | Style::SUPERSCRIPT;
        let merged = merge(paragraph, run);
        assert!(merged.contains(Style::ITALIC));
        assert!(merged.contains(Style::BOLD));
        assert!(merged.contains(Style::SUPERSCRIPT));
        assert!(!merged.contains(Style::SUBSCRIPT));
    }

    proptest! {
        #[test]
        fn merge_is_idempotent(bits in 0u8..32) {
            let style = Style::from_bits_truncate(bits);
            prop_assert_eq!(merge(style, style), style);
        }

        #[test]
        fn flags_recombine_to_original(bits in 0u8..32) {
            let style = Style::from_bits_truncate(bits);
            let recombined = calculate_flags(style)
                .into_iter()
                .fold(Style::empty(), merge);
            prop_assert_eq!(recombined, style);
        }
    }
}
