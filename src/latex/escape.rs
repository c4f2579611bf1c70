//! Character escaping for LaTeX output.
//!
//! Text is escaped in three passes:
//!
//! 1. [`apply_replacements`]: one leftmost-first pass over an ordered
//!    replacement table (LaTeX specials, accented letters, math symbols,
//!    Symbol font private use characters, typographic punctuation)
//! 2. runs of underscores become an underlined blank of proportional width
//! 3. straight quote pairs become TeX quotes
use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Ordered `(pattern, replacement)` pairs.
///
/// When two patterns match at the same position the earlier one wins, so
/// `==>` is listed before `=>`.
pub static REPLACEMENTS: &[(&str, &str)] = &[
    // LaTeX specials; the backslash and braces must come first
    (r"\", r"\backslash{}"),
    ("{", r"\{"),
    ("}", r"\}"),
    ("$", r"\$"),
    ("#", r"\#"),

    // Accented letters
    ("á", r"\'a"),
    ("é", r"\'e"),
    ("í", r"\'i"),
    ("ó", r"\'o"),
    ("ú", r"\'u"),
    ("ő", r"\H{o}"),
    ("ű", r"\H{u}"),
    ("ò", r"\`{o}"),
    ("ö", r#"\"o"#),
    ("ü", r#"\"u"#),
    ("ô", r"\^{o}"),
    ("ŏ", r"\u{o}"),
    ("č", r"\v{c}"),

    // Combining diaeresis and acute
    ("\u{0308}", r#"\""#),
    ("\u{0301}", r"\'"),
    ("ø", r"\o"),
    ("Ø", r"\O"),

    // Logic, relations and sets; U+F0xx are Symbol font private use forms
    ("∧", r"$\wedge$"),
    ("∨", r"$\vee$"),
    ("∀", r"$\forall$"),
    ("\u{F022}", r"$\forall$"),
    ("∃", r"$\exists$"),
    ("\u{F024}", r"$\exists$"),
    ("¬", r"$\neg$"),
    ("≠", r"$\neq$"),
    ("≤", r"$\leq$"),
    ("\u{F03C}", "$<$"),
    ("<", r"\textless{}"),
    (">", r"\textgreater{}"),
    ("∈", r"$\in$"),
    ("\u{F0CE}", r"$\in$"),
    ("∅", r"$\emptyset$"),
    ("\u{F0C7}", r"$\cap$"),
    ("−", "$-$"),
    ("⊑", r"$\sqsubseteq$"),
    ("⊃", r"$\supset$"),
    ("⊂", r"$\subset$"),
    ("≡", r"$\equiv$"),
    ("⊆", r"$\subseteq$"),
    ("⊇", r"$\supseteq$"),
    ("≥", r"$\ge$"),
    ("×", r"$\times$"),
    ("∪", r"$\cup$"),

    // Curly quotes
    ("‘", "`"),
    ("’", "'"),
    ("“", "``"),
    ("”", "''"),
    ("…", r"\dots{}"),

    // Greek
    ("α", r"$\alpha$"),
    ("\u{F061}", r"$\alpha$"),
    ("λ", r"$\lambda$"),
    ("\u{F06C}", r"$\lambda$"),
    ("δ", r"$\delta$"),
    ("ε", r"$\epsilon$"),
    ("ι", r"$\iota$"),
    ("Π", r"$\Pi$"),
    ("π", r"$\pi$"),
    ("ϕ", r"$\phi$"),
    ("\u{F066}", r"$\phi$"),
    ("θ", r"$\theta$"),
    ("Θ", r"$\Theta$"),
    ("β", r"$\beta$"),
    ("\u{F062}", r"$\beta$"),
    ("\u{F020}", " "),
    ("\u{F070}", r"$\pi$"),
    ("\u{F02C}", ","),
    ("µ", r"$\mu$"),
    ("μ", r"$\mu$"),
    ("τ", r"$\tau$"),
    ("◊", r"$\lozenge$"),

    // Tab stops and arrows
    ("\t", r"\tab{}"),
    ("⇐", r"$\Leftarrow$"),
    ("⇔", r"$\Leftrightarrow$"),
    ("⇒", r"$\Rightarrow$"),
    ("→", r"$\to$"),
    ("&", r"\&"),
    ("—", "---"),
    ("–", "--"),
    ("∞", r"$\infty$"),
    ("☐", r"$\square$"),
    ("\u{00A0}", "~"),
    ("ﬁ", "fi"),
    ("\u{F07B}", r"\{"),
    ("\u{F07C}", "|"),
    ("\u{F03E}", "$>$"),
    ("%", r"\%"),

    // ASCII arrows
    ("==>", r"$\Rightarrow$"),
    ("=>", r"$\Rightarrow$"),
    ("||", r"\textbardbl{}"),

    // Left-to-right mark
    ("\u{200E}", ""),
];

// Static initialization: automaton is built only once, thread-safe
static REPLACER: Lazy<AhoCorasick> = Lazy::new(|| {
    AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostFirst)
        .build(REPLACEMENTS.iter().map(|(pattern, _)| *pattern))
        .expect("Failed to build LaTeX replacement automaton")
});

static REPLACEMENT_VALUES: Lazy<Vec<&'static str>> =
    Lazy::new(|| REPLACEMENTS.iter().map(|(_, value)| *value).collect());

static UNDERSCORES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"_+").expect("Failed to build underscore pattern"));

// Opening context, quoted span of at most ~200 characters, closing context
static SINGLE_QUOTES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|\(|\[| )'(\S[^']{1,200}\S)'($|\.|,|;|\?|\)|\]| )")
        .expect("Failed to build single quote pattern")
});

static DOUBLE_QUOTES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(^|\(|\[| )"(\S[^"]{1,200}\S)"($|\.|,|;|\?|\)|\]| )"#)
        .expect("Failed to build double quote pattern")
});

/// Replace every character in [`REPLACEMENTS`] in a single pass.
///
/// ```
/// use xdoc::latex::escape::apply_replacements;
/// assert_eq!(apply_replacements("{x}"), r"\{x\}");
/// assert_eq!(apply_replacements(r"a\b"), r"a\backslash{}b");
/// assert_eq!(apply_replacements("50% & more"), r"50\% \& more");
/// ```
pub fn apply_replacements(raw: &str) -> String {
    REPLACER.replace_all(raw, REPLACEMENT_VALUES.as_slice())
}

/// Turn each run of `n` underscores into `\underline{\hspace{<n * width>pt}}`.
pub fn replace_underscores(tex: &str, width_pt: u32) -> String {
    UNDERSCORES
        .replace_all(tex, |caps: &Captures| {
            let pt = caps[0].len() as u32 * width_pt;
            format!(r"\underline{{\hspace{{{}pt}}}}", pt)
        })
        .into_owned()
}

/// Convert straight quote pairs into TeX quotes.
///
/// A pair qualifies when it opens at the start of the text or after a
/// space or opening bracket, encloses at least three characters without
/// leading or trailing whitespace, and closes before a space, punctuation,
/// a closing bracket or the end of the text.
///
/// ```
/// use xdoc::latex::escape::fix_quotes;
/// assert_eq!(fix_quotes("say 'hello there' now"), "say `hello there' now");
/// assert_eq!(fix_quotes(r#"the "word"."#), "the ``word''.");
/// assert_eq!(fix_quotes("what's up?"), "what's up?");
/// ```
pub fn fix_quotes(tex: &str) -> String {
    let tex = SINGLE_QUOTES.replace_all(tex, "$1`$2'$3");
    DOUBLE_QUOTES.replace_all(&tex, "$1``$2''$3").into_owned()
}

/// Escape a piece of text for LaTeX with all three passes.
pub fn escape(raw: &str, underscore_width_pt: u32, smart_quotes: bool) -> String {
    let tex = apply_replacements(raw);
    let tex = replace_underscores(&tex, underscore_width_pt);
    if smart_quotes { fix_quotes(&tex) } else { tex }
}

/// Strip a bookmark name down to `[A-Za-z0-9-]`.
///
/// Word prefixes its generated bookmarks with `_`, which gb4e's automatic
/// subscript handling chokes on.
///
/// ```
/// use xdoc::latex::escape::clean_marker;
/// assert_eq!(clean_marker("_Ref226606793"), "Ref226606793");
/// assert_eq!(clean_marker("ex:1.a-b"), "ex1a-b");
/// ```
pub fn clean_marker(marker: &str) -> String {
    marker
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect()
}
