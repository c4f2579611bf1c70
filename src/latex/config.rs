/// Configuration for LaTeX rendering.
///
/// # Examples
///
/// ```rust
/// use xdoc::latex::LatexOptions;
///
/// // Create with defaults
/// let options = LatexOptions::default();
///
/// // Or customize
/// let options = LatexOptions::new()
///     .with_reference_command("ref")
///     .with_labels(false)
///     .with_smart_quotes(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatexOptions {
    /// Command used for cross-references (`\Cref{...}` by default)
    pub reference_command: String,
    /// Whether bookmark names are emitted as `\label{...}`
    pub include_labels: bool,
    /// Width in points of each underscore in a fill-in blank
    pub underscore_width_pt: u32,
    /// Whether straight quote pairs are converted to TeX quotes
    pub smart_quotes: bool,
}

impl Default for LatexOptions {
    fn default() -> Self {
        Self {
            reference_command: "Cref".to_string(),
            include_labels: true,
            underscore_width_pt: 3,
            smart_quotes: true,
        }
    }
}

impl LatexOptions {
    /// Create a new `LatexOptions` with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the cross-reference command, without the backslash.
    ///
    /// The default `Cref` needs the `cleveref` package; `ref` works with
    /// plain LaTeX.
    #[inline]
    pub fn with_reference_command(mut self, command: impl Into<String>) -> Self {
        self.reference_command = command.into();
        self
    }

    /// Set whether to emit `\label{...}` for bookmarks.
    #[inline]
    pub fn with_labels(mut self, include: bool) -> Self {
        self.include_labels = include;
        self
    }

    /// Set the width in points of each underscore in a fill-in blank.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xdoc::latex::LatexOptions;
    ///
    /// // "___" becomes \underline{\hspace{12pt}}
    /// let options = LatexOptions::new().with_underscore_width(4);
    /// ```
    #[inline]
    pub fn with_underscore_width(mut self, width_pt: u32) -> Self {
        self.underscore_width_pt = width_pt;
        self
    }

    /// Set whether to convert straight quote pairs.
    #[inline]
    pub fn with_smart_quotes(mut self, enabled: bool) -> Self {
        self.smart_quotes = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latex_options_builder() {
        let options = LatexOptions::new()
            .with_reference_command("ref")
            .with_labels(false)
            .with_underscore_width(5)
            .with_smart_quotes(false);

        assert_eq!(options.reference_command, "ref");
        assert!(!options.include_labels);
        assert_eq!(options.underscore_width_pt, 5);
        assert!(!options.smart_quotes);
    }

    #[test]
    fn test_latex_options_default() {
        let options = LatexOptions::default();
        assert_eq!(options.reference_command, "Cref");
        assert!(options.include_labels);
        assert_eq!(options.underscore_width_pt, 3);
        assert!(options.smart_quotes);
    }
}
