/// Unicode equivalents of the Symbol and Wingdings fonts.
///
/// Word inserts characters from these fonts as `<w:sym w:font="Symbol"
/// w:char="F061"/>`, where `w:char` is the font codepoint shifted into the
/// private use area at U+F000. The tables are keyed by the unshifted
/// codepoint. Wingdings glyphs without a Unicode counterpart map to a
/// parenthesized description.
use phf::phf_map;

/// Offset Word adds to Symbol/Wingdings codepoints in `w:char`.
pub const PRIVATE_USE_OFFSET: u32 = 0xF000;

/// Fonts with a translation table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolFont {
    Symbol,
    Wingdings,
}

impl SymbolFont {
    /// Match a `w:font` attribute value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Symbol" => Some(SymbolFont::Symbol),
            "Wingdings" => Some(SymbolFont::Wingdings),
            _ => None,
        }
    }

    fn table(self) -> &'static phf::Map<u32, &'static str> {
        match self {
            SymbolFont::Symbol => &SYMBOL,
            SymbolFont::Wingdings => &WINGDINGS,
        }
    }
}

/// Translate a `w:sym` element's attributes into text.
///
/// `char_code` is the hexadecimal `w:char` value. When the font has no
/// table, the value is not hex, or the codepoint is not in the table, the
/// raw `w:char` string is returned unchanged.
///
/// ```
/// use xdoc::ooxml::docx::symbols::translate;
/// assert_eq!(translate(Some("Symbol"), "F061"), "α");
/// assert_eq!(translate(Some("Wingdings"), "F04A"), "☺");
/// assert_eq!(translate(Some("Arial"), "F061"), "F061");
/// ```
pub fn translate<'a>(font: Option<&str>, char_code: &'a str) -> &'a str {
    lookup(font, char_code).unwrap_or(char_code)
}

/// Look up the Unicode text for a `w:sym`, without the raw fallback.
pub fn lookup(font: Option<&str>, char_code: &str) -> Option<&'static str> {
    let font = SymbolFont::from_name(font?)?;
    let code = u32::from_str_radix(char_code, 16)
        .ok()?
        .checked_sub(PRIVATE_USE_OFFSET)?;
    font.table().get(&code).copied()
}

/// Symbol font codepoints.
pub static SYMBOL: phf::Map<u32, &'static str> = phf_map! {
    33u32 => "!",
    34u32 => "∀",
    35u32 => "#",
    36u32 => "∃",
    37u32 => "%",
    38u32 => "&",
    39u32 => "∍",
    40u32 => "(",
    41u32 => ")",
    42u32 => "*",
    43u32 => "+",
    44u32 => ",",
    45u32 => "-",
    46u32 => ".",
    47u32 => "/",
    48u32 => "0",
    49u32 => "1",
    50u32 => "2",
    51u32 => "3",
    52u32 => "4",
    53u32 => "5",
    54u32 => "6",
    55u32 => "7",
    56u32 => "8",
    57u32 => "9",
    58u32 => ":",
    59u32 => ";",
    60u32 => "<",
    61u32 => "=",
    62u32 => ">",
    63u32 => "?",
    64u32 => "≅",
    65u32 => "Α",
    66u32 => "Β",
    67u32 => "Χ",
    68u32 => "Δ",
    69u32 => "Ε",
    70u32 => "Φ",
    71u32 => "Γ",
    72u32 => "Η",
    73u32 => "Ι",
    74u32 => "ϑ",
    75u32 => "Κ",
    76u32 => "Λ",
    77u32 => "Μ",
    78u32 => "Ν",
    79u32 => "Ο",
    80u32 => "Π",
    81u32 => "Θ",
    82u32 => "Ρ",
    83u32 => "Σ",
    84u32 => "Τ",
    85u32 => "Υ",
    86u32 => "ς",
    87u32 => "Ω",
    88u32 => "Ξ",
    89u32 => "Ψ",
    90u32 => "Ζ",
    91u32 => "[",
    92u32 => "∴",
    93u32 => "]",
    94u32 => "⊥",
    95u32 => "_",
    96u32 => "\u{F8E5}",
    97u32 => "α",
    98u32 => "β",
    99u32 => "χ",
    100u32 => "δ",
    101u32 => "ε",
    102u32 => "φ",
    103u32 => "γ",
    104u32 => "η",
    105u32 => "ι",
    106u32 => "ϕ",
    107u32 => "κ",
    108u32 => "λ",
    109u32 => "μ",
    110u32 => "ν",
    111u32 => "ο",
    112u32 => "π",
    113u32 => "θ",
    114u32 => "ρ",
    115u32 => "σ",
    116u32 => "τ",
    117u32 => "υ",
    118u32 => "ϖ",
    119u32 => "ω",
    120u32 => "ξ",
    121u32 => "ψ",
    122u32 => "ζ",
    123u32 => "{",
    124u32 => "|",
    125u32 => "}",
    126u32 => "~",
    127u32 => ".",
    160u32 => "€",
    161u32 => "ϒ",
    162u32 => "ʹ",
    163u32 => "≤",
    164u32 => "⁄",
    165u32 => "∞",
    166u32 => "ƒ",
    167u32 => "♣",
    168u32 => "♦",
    169u32 => "♥",
    170u32 => "♠",
    171u32 => "↔",
    172u32 => "←",
    173u32 => "↑",
    174u32 => "→",
    175u32 => "↓",
    176u32 => "°",
    177u32 => "±",
    178u32 => "ʺ",
    179u32 => "≥",
    180u32 => "×",
    181u32 => "∝",
    182u32 => "∂",
    183u32 => "•",
    184u32 => "÷",
    185u32 => "≠",
    186u32 => "≡",
    187u32 => "≈",
    188u32 => "…",
    189u32 => "⏐",
    190u32 => "⎯",
    191u32 => "↵",
    192u32 => "ℵ",
    193u32 => "ℑ",
    194u32 => "ℜ",
    195u32 => "℘",
    196u32 => "⊗",
    197u32 => "⊕",
    198u32 => "∅",
    199u32 => "∩",
    200u32 => "∪",
    201u32 => "⊃",
    202u32 => "⊇",
    203u32 => "⊄",
    204u32 => "⊂",
    205u32 => "⊆",
    206u32 => "∈",
    207u32 => "∉",
    208u32 => "∠",
    209u32 => "∇",
    210u32 => "®",
    211u32 => "©",
    212u32 => "™",
    213u32 => "∏",
    214u32 => "√",
    215u32 => "⋅",
    216u32 => "¬",
    217u32 => "∧",
    218u32 => "∨",
    219u32 => "⇔",
    220u32 => "⇐",
    221u32 => "⇑",
    222u32 => "⇒",
    223u32 => "⇓",
    224u32 => "◊",
    225u32 => "〈",
    226u32 => "®",
    227u32 => "©",
    228u32 => "™",
    229u32 => "∑",
    230u32 => "⎛",
    231u32 => "⎜",
    232u32 => "⎝",
    233u32 => "⎡",
    234u32 => "⎢",
    235u32 => "⎣",
    236u32 => "⎧",
    237u32 => "⎨",
    238u32 => "⎩",
    239u32 => "⎪",
    241u32 => "〉",
    242u32 => "∫",
    243u32 => "⌠",
    244u32 => "⎮",
    245u32 => "⌡",
    246u32 => "⎞",
    247u32 => "⎟",
    248u32 => "⎠",
    249u32 => "⎤",
    250u32 => "⎥",
    251u32 => "⎦",
    252u32 => "⎫",
    253u32 => "⎬",
    254u32 => "⎭",
};

/// Wingdings font codepoints.
pub static WINGDINGS: phf::Map<u32, &'static str> = phf_map! {
    33u32 => "✏",
    34u32 => "✂",
    35u32 => "✁",
    36u32 => "👓",
    37u32 => "🔔",
    38u32 => "📖",
    39u32 => "(Candle – no equivalent)",
    40u32 => "☎",
    41u32 => "✆",
    42u32 => "✉",
    43u32 => "(Envelope with address and stamp – no equivalent)",
    44u32 => "📪",
    45u32 => "📫",
    46u32 => "📬",
    47u32 => "📭",
    48u32 => "📁",
    49u32 => "📂",
    50u32 => "📄",
    51u32 => "(Printed page – no equivalent)",
    52u32 => "(Stack of printed pages – no equivalent)",
    53u32 => "(Filing cabinet – no equivalent)",
    54u32 => "⌛",
    55u32 => "⌨",
    56u32 => "(Mouse – no equivalent)",
    57u32 => "(Trackball – no equivalent)",
    58u32 => "💻",
    59u32 => "(Hard disk – no equivalent)",
    60u32 => "💾",
    61u32 => "(5¼\" Floppy disk – no equivalent)",
    62u32 => "✇",
    63u32 => "✍",
    64u32 => "(Writing left hand – no equivalent)",
    65u32 => "✌",
    66u32 => "👌",
    67u32 => "👍",
    68u32 => "👎",
    69u32 => "☜",
    70u32 => "☞",
    71u32 => "☝",
    72u32 => "☟",
    73u32 => "✋",
    74u32 => "☺",
    75u32 => "😐",
    76u32 => "☹",
    77u32 => "💣",
    78u32 => "☠",
    79u32 => "⚐",
    80u32 => "🚩",
    81u32 => "✈",
    82u32 => "☼",
    83u32 => "💧",
    84u32 => "❄",
    85u32 => "(White Latin cross – no equivalent)",
    86u32 => "✞",
    87u32 => "(Celtic cross – no equivalent)",
    88u32 => "✠",
    89u32 => "✡",
    90u32 => "☪",
    91u32 => "☯",
    92u32 => "ॐ",
    93u32 => "☸",
    94u32 => "♈",
    95u32 => "♉",
    96u32 => "♊",
    97u32 => "♋",
    98u32 => "♌",
    99u32 => "♍",
    100u32 => "♎",
    101u32 => "♏",
    102u32 => "♐",
    103u32 => "♑",
    104u32 => "♒",
    105u32 => "♓",
    106u32 => "&",
    107u32 => "&",
    108u32 => "●",
    109u32 => "❍",
    110u32 => "■",
    111u32 => "□",
    112u32 => "(Bold white square – no equivalent)",
    113u32 => "❑",
    114u32 => "❒",
    115u32 => "⬧",
    116u32 => "⧫",
    117u32 => "◆",
    118u32 => "❖",
    119u32 => "⬥",
    120u32 => "⌧",
    121u32 => "⍓",
    122u32 => "⌘",
    123u32 => "❀",
    124u32 => "✿",
    125u32 => "❝",
    126u32 => "❞",
    127u32 => "▯",
    128u32 => "⓪",
    129u32 => "①",
    130u32 => "②",
    131u32 => "③",
    132u32 => "④",
    133u32 => "⑤",
    134u32 => "⑥",
    135u32 => "⑦",
    136u32 => "⑧",
    137u32 => "⑨",
    138u32 => "⑩",
    139u32 => "⓿",
    140u32 => "❶",
    141u32 => "❷",
    142u32 => "❸",
    143u32 => "❹",
    144u32 => "❺",
    145u32 => "❻",
    146u32 => "❼",
    147u32 => "❽",
    148u32 => "❾",
    149u32 => "❿",
    150u32 => "(Bud and leaf north east – no equivalent)",
    151u32 => "(Bud and leaf north west – no equivalent)",
    152u32 => "(Bud and leaf south west – no equivalent)",
    153u32 => "(Bud and leaf south east – no equivalent)",
    154u32 => "(Bold vine leaf north east – no equivalent)",
    155u32 => "(Bold vine leaf north west – no equivalent)",
    156u32 => "(Bold vine leaf south west – no equivalent)",
    157u32 => "(Bold vine leaf south east – no equivalent)",
    158u32 => "·",
    159u32 => "•",
    160u32 => "▪",
    161u32 => "○",
    162u32 => "⭕",
    163u32 => "(Extra bold white circle – no equivalent)",
    164u32 => "◉",
    165u32 => "◎",
    166u32 => "(Upper right shadowed white circle – no equivalent)",
    167u32 => "▪",
    168u32 => "◻",
    169u32 => "(Black three pointed star – no equivalent)",
    170u32 => "✦",
    171u32 => "★",
    172u32 => "✶",
    173u32 => "✴",
    174u32 => "✹",
    175u32 => "✵",
    176u32 => "(Square register mark – no equivalent)",
    177u32 => "⌖",
    178u32 => "⟡",
    179u32 => "⌑",
    180u32 => "(Question mark in white diamond – no equivalent)",
    181u32 => "✪",
    182u32 => "✰",
    183u32 => "🕐",
    184u32 => "🕑",
    185u32 => "🕒",
    186u32 => "🕓",
    187u32 => "🕕",
    188u32 => "🕕",
    189u32 => "🕖",
    190u32 => "🕘",
    191u32 => "🕘",
    192u32 => "🕙",
    193u32 => "🕚",
    194u32 => "🕛",
    195u32 => "(White arrow pointing downwards then curving leftwards – no equivalent)",
    196u32 => "(White arrow pointing downwards then curving rightwards – no equivalent)",
    197u32 => "(White arrow pointing upwards then curving leftwards – no equivalent)",
    198u32 => "(White arrow pointing upwards then curving rightwards – no equivalent)",
    199u32 => "(White arrow pointing leftwards then curving upwards – no equivalent)",
    200u32 => "(White arrow pointing rightwards then curving upwards – no equivalent)",
    201u32 => "(White arrow pointing leftwards then curving downwards – no equivalent)",
    202u32 => "(White arrow pointing rightwards then curving downwards – no equivalent)",
    203u32 => "(Quilt square 2 – no equivalent)",
    204u32 => "(Black quilt square 2 – no equivalent)",
    205u32 => "(Leaf counterclockwise south west – no equivalent)",
    206u32 => "(Leaf counterclockwise north west – no equivalent)",
    207u32 => "(Leaf counterclockwise south east – no equivalent)",
    208u32 => "(Leaf counterclockwise north east – no equivalent)",
    209u32 => "(Leaf north west – no equivalent)",
    210u32 => "(Leaf south west – no equivalent)",
    211u32 => "(Leaf north east – no equivalent)",
    212u32 => "(Leaf south east – no equivalent)",
    213u32 => "⌫",
    214u32 => "⌦",
    215u32 => "(Three-D top-lighted leftwards arrowhead – no equivalent)",
    216u32 => "➢",
    217u32 => "(Three-D right-lighted upwards arrowhead – no equivalent)",
    218u32 => "(Three-D left-lighted downwards arrowhead – no equivalent)",
    219u32 => "(Circled heavy white leftwards arrow – no equivalent)",
    220u32 => "➲",
    221u32 => "(Circled heavy white upwards arrow – no equivalent)",
    222u32 => "(Circled heavy white downwards arrow – no equivalent)",
    223u32 => "⇦",
    224u32 => "⇨",
    225u32 => "⇧",
    226u32 => "⇩",
    227u32 => "(Wide-headed north west arrow – no equivalent)",
    228u32 => "(Wide-headed north east arrow – no equivalent)",
    229u32 => "(Wide-headed south west arrow – no equivalent)",
    230u32 => "(Wide-headed south east arrow – no equivalent)",
    231u32 => "⬅",
    232u32 => "➔",
    233u32 => "⬆",
    234u32 => "⬇",
    235u32 => "(Heavy wide-headed north west arrow – no equivalent)",
    236u32 => "(Heavy wide-headed north east arrow – no equivalent)",
    237u32 => "(Heavy wide-headed south west arrow – no equivalent)",
    238u32 => "(Heavy wide-headed south east arrow – no equivalent)",
    239u32 => "⇦",
    240u32 => "⇨",
    241u32 => "⇧",
    242u32 => "⇩",
    243u32 => "⬄",
    244u32 => "⇳",
    245u32 => "⬀",
    246u32 => "⬁",
    247u32 => "⬃",
    248u32 => "⬂",
    249u32 => "▭",
    250u32 => "▫",
    251u32 => "✗",
    252u32 => "✓",
    253u32 => "☒",
    254u32 => "☑",
    255u32 => "(Windows logo – no equivalent)",
};
