//! Built-in table of the 26 ASL alphabet hand shapes.
//!
//! Each entry carries the SVG fragments for the illustrated card style and the
//! glyph used by the emoji card style. Fragments are layered back-to-front
//! inside a 150x150 viewBox by [`crate::render::card`].

/// One ASL alphabet letter with both rendering styles.
#[derive(Clone, Copy, Debug)]
pub struct LetterSign {
    /// Lowercase ASCII letter, also the output file stem.
    pub letter: char,
    /// Short description of the hand shape.
    pub description: &'static str,
    /// SVG fragments layered back-to-front inside the card body.
    pub layers: &'static [&'static str],
    /// Glyph used by the emoji card style.
    pub emoji: &'static str,
}

/// All 26 letters in alphabetical order.
pub const LETTERS: [LetterSign; 26] = [
    LetterSign {
        letter: 'a',
        description: "Closed fist, thumb alongside index finger",
        layers: &[
            r##"<ellipse cx="75" cy="95" rx="24" ry="32" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<path d="M55 78 Q60 68 68 74 Q75 68 82 74 Q90 68 95 78 Q96 86 90 88 L60 88 Q54 86 55 78" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="52" cy="88" rx="8" ry="17" fill="#f59e0b"/>"##,
            r##"<circle cx="66" cy="76" r="2" fill="#f59e0b"/>"##,
            r##"<circle cx="76" cy="74" r="2" fill="#f59e0b"/>"##,
            r##"<circle cx="86" cy="76" r="2" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{270A}",
    },
    LetterSign {
        letter: 'b',
        description: "All fingers straight, thumb folded across palm",
        layers: &[
            r##"<rect x="55" y="60" width="40" height="48" rx="12" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="54" y="30" width="8" height="36" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="64" y="25" width="8" height="41" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="74" y="25" width="8" height="41" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="84" y="30" width="8" height="36" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="68" cy="82" rx="12" ry="6" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{1F91A}",
    },
    LetterSign {
        letter: 'c',
        description: "Curved hand like holding a cup",
        layers: &[
            r##"<path d="M 90 50 Q 60 35 45 70 Q 45 90 60 105 Q 90 120 95 100" fill="none" stroke="#fbbf24" stroke-width="15" stroke-linecap="round"/>"##,
            r##"<path d="M 50 65 Q 40 75 50 85" fill="none" stroke="#f59e0b" stroke-width="8" stroke-linecap="round"/>"##,
            r##"<ellipse cx="70" cy="85" rx="20" ry="25" fill="#fef3c7" opacity="0.7"/>"##,
        ],
        emoji: "\u{1F90F}",
    },
    LetterSign {
        letter: 'd',
        description: "Index finger up, other fingers touch thumb",
        layers: &[
            r##"<rect x="70" y="22" width="8" height="50" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="70" cy="88" rx="18" ry="22" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<circle cx="58" cy="76" r="7" fill="#f59e0b"/>"##,
            r##"<circle cx="80" cy="78" r="7" fill="#f59e0b"/>"##,
            r##"<ellipse cx="62" cy="70" rx="6" ry="10" fill="#fbbf24" stroke="#f59e0b" stroke-width="1"/>"##,
        ],
        emoji: "\u{1F446}",
    },
    LetterSign {
        letter: 'e',
        description: "All fingertips touch thumb",
        layers: &[
            r##"<ellipse cx="75" cy="90" rx="20" ry="25" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<path d="M 58 62 Q 65 52 72 62 Q 78 52 85 62 Q 90 52 95 62" fill="none" stroke="#fbbf24" stroke-width="8" stroke-linecap="round"/>"##,
            r##"<ellipse cx="60" cy="76" rx="8" ry="14" fill="#f59e0b"/>"##,
            r##"<circle cx="72" cy="62" r="4" fill="#f59e0b"/>"##,
            r##"<circle cx="85" cy="62" r="4" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{1F90F}",
    },
    LetterSign {
        letter: 'f',
        description: "Index and thumb touch, others extended",
        layers: &[
            r##"<rect x="66" y="26" width="8" height="40" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="76" y="21" width="8" height="45" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="86" y="26" width="8" height="40" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="70" cy="86" rx="16" ry="20" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<circle cx="54" cy="68" r="9" fill="none" stroke="#f59e0b" stroke-width="5"/>"##,
        ],
        emoji: "\u{1F44C}",
    },
    LetterSign {
        letter: 'g',
        description: "Index finger and thumb pointing sideways",
        layers: &[
            r##"<ellipse cx="72" cy="80" rx="13" ry="25" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="84" y="64" width="28" height="8" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="84" y="76" width="18" height="7" rx="3.5" fill="#f59e0b"/>"##,
            r##"<circle cx="66" cy="92" r="6" fill="#f59e0b"/>"##,
            r##"<circle cx="72" cy="96" r="6" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{1F448}",
    },
    LetterSign {
        letter: 'h',
        description: "Index and middle finger extended sideways",
        layers: &[
            r##"<ellipse cx="72" cy="82" rx="16" ry="21" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="86" y="62" width="28" height="8" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="86" y="74" width="28" height="8" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="66" cy="74" rx="8" ry="12" fill="#f59e0b"/>"##,
            r##"<circle cx="64" cy="92" r="6" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{270C}\u{FE0F}",
    },
    LetterSign {
        letter: 'i',
        description: "Pinky finger extended up",
        layers: &[
            r##"<ellipse cx="73" cy="86" rx="17" ry="21" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="86" y="24" width="6" height="46" rx="3" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<circle cx="64" cy="74" r="8" fill="#f59e0b"/>"##,
            r##"<circle cx="74" cy="70" r="8" fill="#f59e0b"/>"##,
            r##"<ellipse cx="58" cy="82" rx="8" ry="12" fill="#fbbf24" stroke="#f59e0b" stroke-width="1"/>"##,
        ],
        emoji: "\u{1F91F}",
    },
    LetterSign {
        letter: 'j',
        description: "Pinky extended, traces a J in the air",
        layers: &[
            r##"<ellipse cx="73" cy="86" rx="17" ry="21" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<path d="M 88 22 L 88 46 Q 88 56 80 56 Q 72 56 72 48" fill="none" stroke="#fbbf24" stroke-width="6" stroke-linecap="round"/>"##,
            r##"<path d="M 94 28 Q 99 36 94 44" fill="none" stroke="#dc2626" stroke-width="2"/>"##,
            r##"<circle cx="64" cy="74" r="8" fill="#f59e0b"/>"##,
            r##"<circle cx="74" cy="70" r="8" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{1F91F}",
    },
    LetterSign {
        letter: 'k',
        description: "Index and middle finger up, thumb between",
        layers: &[
            r##"<ellipse cx="75" cy="92" rx="16" ry="19" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="64" y="26" width="8" height="46" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="78" y="21" width="8" height="51" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="72" cy="56" rx="6" ry="15" fill="#f59e0b"/>"##,
            r##"<circle cx="88" cy="84" r="7" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{270C}\u{FE0F}",
    },
    LetterSign {
        letter: 'l',
        description: "Index finger up, thumb out (L shape)",
        layers: &[
            r##"<ellipse cx="80" cy="86" rx="13" ry="21" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="76" y="20" width="8" height="50" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="44" y="76" width="28" height="8" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<circle cx="88" cy="88" r="7" fill="#f59e0b"/>"##,
            r##"<circle cx="86" cy="98" r="7" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{1F446}",
    },
    LetterSign {
        letter: 'm',
        description: "Three fingers folded over thumb",
        layers: &[
            r##"<ellipse cx="75" cy="92" rx="20" ry="21" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="64" cy="72" rx="12" ry="8" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="75" cy="67" rx="12" ry="8" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="86" cy="72" rx="12" ry="8" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="72" cy="86" rx="15" ry="7" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{270A}",
    },
    LetterSign {
        letter: 'n',
        description: "Two fingers folded over thumb",
        layers: &[
            r##"<ellipse cx="75" cy="92" rx="20" ry="21" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="68" cy="71" rx="12" ry="8" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="80" cy="67" rx="12" ry="8" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="72" cy="86" rx="15" ry="7" fill="#f59e0b"/>"##,
            r##"<circle cx="90" cy="86" r="6" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{270A}",
    },
    LetterSign {
        letter: 'o',
        description: "All fingers curved into an O shape",
        layers: &[
            r##"<circle cx="75" cy="75" r="25" fill="none" stroke="#fbbf24" stroke-width="12"/>"##,
            r##"<path d="M 52 75 Q 45 65 52 55" fill="none" stroke="#f59e0b" stroke-width="8" stroke-linecap="round"/>"##,
            r##"<circle cx="75" cy="75" r="15" fill="#fef3c7" opacity="0.5"/>"##,
        ],
        emoji: "\u{1F44C}",
    },
    LetterSign {
        letter: 'p',
        description: "Like K but pointing down",
        layers: &[
            r##"<ellipse cx="75" cy="72" rx="21" ry="15" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="64" y="84" width="8" height="36" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="76" y="52" width="26" height="8" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="86" cy="58" rx="6" ry="10" fill="#f59e0b"/>"##,
            r##"<circle cx="90" cy="82" r="7" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{1F447}",
    },
    LetterSign {
        letter: 'q',
        description: "Index finger and thumb pointing down",
        layers: &[
            r##"<ellipse cx="74" cy="68" rx="16" ry="21" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="70" y="88" width="8" height="28" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="55" y="88" width="8" height="28" rx="4" fill="#f59e0b"/>"##,
            r##"<circle cx="82" cy="76" r="7" fill="#f59e0b"/>"##,
            r##"<circle cx="88" cy="84" r="7" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{1F447}",
    },
    LetterSign {
        letter: 'r',
        description: "Index and middle finger crossed",
        layers: &[
            r##"<ellipse cx="75" cy="92" rx="16" ry="19" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="68" y="26" width="8" height="50" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="75" y="21" width="8" height="50" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2" transform="rotate(15 79 46)"/>"##,
            r##"<ellipse cx="60" cy="86" rx="8" ry="12" fill="#f59e0b"/>"##,
            r##"<circle cx="88" cy="84" r="7" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{1F91E}",
    },
    LetterSign {
        letter: 's',
        description: "Fist with thumb across the fingers",
        layers: &[
            r##"<circle cx="75" cy="85" r="25" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="75" cy="70" rx="18" ry="8" fill="#f59e0b"/>"##,
            r##"<circle cx="62" cy="76" r="3" fill="#f59e0b"/>"##,
            r##"<circle cx="73" cy="73" r="3" fill="#f59e0b"/>"##,
            r##"<circle cx="84" cy="76" r="3" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{270A}",
    },
    LetterSign {
        letter: 't',
        description: "Thumb between index and middle finger",
        layers: &[
            r##"<ellipse cx="75" cy="92" rx="16" ry="19" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="64" cy="70" rx="8" ry="12" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="71" cy="64" rx="6" ry="15" fill="#f59e0b"/>"##,
            r##"<circle cx="79" cy="76" r="7" fill="#f59e0b"/>"##,
            r##"<circle cx="86" cy="84" r="7" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{1F44D}",
    },
    LetterSign {
        letter: 'u',
        description: "Index and middle finger up together",
        layers: &[
            r##"<ellipse cx="75" cy="92" rx="16" ry="19" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="67" y="26" width="8" height="50" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="77" y="26" width="8" height="50" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<ellipse cx="60" cy="86" rx="8" ry="12" fill="#f59e0b"/>"##,
            r##"<circle cx="88" cy="84" r="7" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{270C}\u{FE0F}",
    },
    LetterSign {
        letter: 'v',
        description: "Index and middle finger apart (victory)",
        layers: &[
            r##"<ellipse cx="75" cy="92" rx="16" ry="19" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="64" y="26" width="8" height="50" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2" transform="rotate(-10 68 51)"/>"##,
            r##"<rect x="80" y="26" width="8" height="50" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2" transform="rotate(10 84 51)"/>"##,
            r##"<ellipse cx="60" cy="86" rx="8" ry="12" fill="#f59e0b"/>"##,
            r##"<circle cx="88" cy="88" r="7" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{270C}\u{FE0F}",
    },
    LetterSign {
        letter: 'w',
        description: "Index, middle, and ring finger up",
        layers: &[
            r##"<ellipse cx="75" cy="92" rx="16" ry="19" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="62" y="26" width="7" height="50" rx="3.5" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="72" y="21" width="7" height="55" rx="3.5" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="82" y="26" width="7" height="50" rx="3.5" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<circle cx="92" cy="86" r="7" fill="#f59e0b"/>"##,
            r##"<ellipse cx="58" cy="86" rx="8" ry="12" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{1F91F}",
    },
    LetterSign {
        letter: 'x',
        description: "Index finger curved like a hook",
        layers: &[
            r##"<ellipse cx="75" cy="92" rx="16" ry="19" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<path d="M 70 66 Q 70 46 76 40 Q 82 46 79 56" fill="none" stroke="#fbbf24" stroke-width="8" stroke-linecap="round"/>"##,
            r##"<circle cx="78" cy="78" r="7" fill="#f59e0b"/>"##,
            r##"<circle cx="85" cy="84" r="7" fill="#f59e0b"/>"##,
            r##"<ellipse cx="64" cy="86" rx="6" ry="10" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{1F446}",
    },
    LetterSign {
        letter: 'y',
        description: "Thumb and pinky extended (hang loose)",
        layers: &[
            r##"<ellipse cx="75" cy="82" rx="16" ry="21" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="44" y="70" width="26" height="8" rx="4" fill="#f59e0b"/>"##,
            r##"<rect x="88" y="36" width="6" height="32" rx="3" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<circle cx="70" cy="74" r="7" fill="#f59e0b"/>"##,
            r##"<circle cx="80" cy="72" r="7" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{1F919}",
    },
    LetterSign {
        letter: 'z',
        description: "Index finger traces a Z in the air",
        layers: &[
            r##"<ellipse cx="75" cy="92" rx="16" ry="19" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<rect x="70" y="32" width="8" height="44" rx="4" fill="#fbbf24" stroke="#f59e0b" stroke-width="2"/>"##,
            r##"<path d="M 62 34 L 88 34 L 62 50 L 88 50" fill="none" stroke="#dc2626" stroke-width="3" stroke-linecap="round"/>"##,
            r##"<circle cx="86" cy="84" r="7" fill="#f59e0b"/>"##,
            r##"<ellipse cx="63" cy="86" rx="8" ry="12" fill="#f59e0b"/>"##,
        ],
        emoji: "\u{1F446}",
    },
];

/// Look up a letter (case-insensitive).
pub fn find(letter: char) -> Option<&'static LetterSign> {
    let lower = letter.to_ascii_lowercase();
    LETTERS.iter().find(|l| l.letter == lower)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_the_full_alphabet_in_order() {
        assert_eq!(LETTERS.len(), 26);
        for (i, sign) in LETTERS.iter().enumerate() {
            assert_eq!(sign.letter, (b'a' + i as u8) as char);
        }
    }

    #[test]
    fn every_letter_has_layers_and_a_glyph() {
        for sign in &LETTERS {
            assert!(!sign.layers.is_empty(), "letter {} has no layers", sign.letter);
            assert!(!sign.emoji.is_empty());
            assert!(!sign.description.is_empty());
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        assert_eq!(find('Q').unwrap().letter, 'q');
        assert_eq!(find('q').unwrap().letter, 'q');
        assert!(find('1').is_none());
    }
}
