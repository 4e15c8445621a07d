// Grapheme <-> precomposed Unicode codepoint mapping.
//
// Forward (`grapheme_to_char`) is offset arithmetic over the sub-blocks of
// "Greek and Coptic" (U+0370..U+03FF) and "Greek Extended" (U+1F00..U+1FFF).
// Many well-formed graphemes have no precomposed codepoint (capital upsilon
// with smooth breathing, capitals with circumflex and no breathing, any
// letter with both a length sign and another mark, ...). Those return `None`.
//
// Acute-accented letters have two canonically equivalent codepoints: the
// *tonos* forms in Greek and Coptic and the *oxia* forms in Greek Extended.
// Output always uses the tonos form, the one that survives NFC
// normalization. Converters that emit the oxia forms (U+1F71, U+1FBB,
// U+1FD3, ...) produce text that NFC rewrites; ours does not, so an acute
// ά here is U+03AC, not U+1F71. Decoding accepts both.
//
// Reverse (`char_to_grapheme`) is not hand-coded: the table is built once by
// running every well-formed grapheme through the forward rules (both acute
// forms), so decoding can never disagree with encoding. A handful of
// alternate letterforms (ϐ ϑ ϕ ϖ ϰ ϱ ϲ ...) are layered on top.
//
// Terminal flags only change the rendering of lower-case sigma. For any
// other grapheme the flag is dropped on the way out, and decoding yields
// the non-terminal grapheme.
//
// See also: `grapheme.rs`, `convert.rs` (which calls `punctuation_char` for
// best-effort recovery).

use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::debug;

use crate::beta_code;
use crate::glyph::{Accent, Breathing, Glyph};
use crate::grapheme::Grapheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AcuteForm {
    Tonos,
    Oxia,
}

// ---------------------------------------------------------------------------
// Offset helpers
// ---------------------------------------------------------------------------

/// alpha 0, epsilon 1, eta 2, iota 3, omicron 4, upsilon 5, omega 6.
fn vowel_index(letter: Glyph) -> Option<u32> {
    Some(match letter {
        Glyph::Alpha => 0,
        Glyph::Epsilon => 1,
        Glyph::Eta => 2,
        Glyph::Iota => 3,
        Glyph::Omicron => 4,
        Glyph::Upsilon => 5,
        Glyph::Omega => 6,
        _ => return None,
    })
}

/// Row of the vowels that can be long: alpha 0, eta 1, iota 2, upsilon 3,
/// omega 4. Used by the circumflex, iota-subscript and capital-accent rows.
fn long_row(letter: Glyph) -> Option<u32> {
    Some(match letter {
        Glyph::Alpha => 0,
        Glyph::Eta => 1,
        Glyph::Iota => 2,
        Glyph::Upsilon => 3,
        Glyph::Omega => 4,
        _ => return None,
    })
}

/// grave 1, acute 2, circumflex 3 (0 for none).
fn accent_number(accent: Option<Accent>) -> u32 {
    match accent {
        None => 0,
        Some(Accent::Grave) => 1,
        Some(Accent::Acute) => 2,
        Some(Accent::Circumflex) => 3,
    }
}

fn tonos_lower(letter: Glyph) -> Option<u32> {
    Some(match letter {
        Glyph::Alpha => 0x03AC,
        Glyph::Epsilon => 0x03AD,
        Glyph::Eta => 0x03AE,
        Glyph::Iota => 0x03AF,
        Glyph::Omicron => 0x03CC,
        Glyph::Upsilon => 0x03CD,
        Glyph::Omega => 0x03CE,
        _ => return None,
    })
}

fn tonos_capital(letter: Glyph) -> Option<u32> {
    Some(match letter {
        Glyph::Alpha => 0x0386,
        Glyph::Epsilon => 0x0388,
        Glyph::Eta => 0x0389,
        Glyph::Iota => 0x038A,
        Glyph::Omicron => 0x038C,
        Glyph::Upsilon => 0x038E,
        Glyph::Omega => 0x038F,
        _ => return None,
    })
}

// ---------------------------------------------------------------------------
// Forward mapping
// ---------------------------------------------------------------------------

/// The precomposed codepoint for a grapheme, if Unicode has one.
pub fn grapheme_to_char(g: &Grapheme) -> Option<char> {
    compose(g, AcuteForm::Tonos)
}

fn compose(g: &Grapheme, form: AcuteForm) -> Option<char> {
    let code = match g.letter() {
        None => compose_mark(g)?,
        Some(letter) => compose_letter(g, letter, form)?,
    };
    char::from_u32(code)
}

/// Spacing forms of bare diacritics.
fn compose_mark(g: &Grapheme) -> Option<u32> {
    if g.is_capital() {
        return None;
    }
    let accent = g.accent();
    let breathing = g.breathing();
    if g.has_length_sign() {
        if accent.is_some() || breathing.is_some() || g.has_iota_subscript() || g.has_diaeresis() {
            return None;
        }
        return Some(if g.has_macron() { 0x00AF } else { 0x02D8 });
    }
    if g.has_iota_subscript() {
        let alone = accent.is_none() && breathing.is_none() && !g.has_diaeresis();
        return alone.then_some(0x037A);
    }
    Some(match (breathing, accent, g.has_diaeresis()) {
        (None, None, false) => return None,
        (Some(b), Some(a), _) => {
            0x1FCD + 0x10 * (b == Breathing::Rough) as u32 + accent_number(Some(a)) - 1
        }
        (None, Some(Accent::Circumflex), true) => 0x1FC1,
        (None, Some(a), true) => 0x1FED + accent_number(Some(a)) - 1,
        (None, Some(Accent::Circumflex), false) => 0x1FC0,
        (None, Some(Accent::Grave), false) => 0x1FEF,
        (None, Some(Accent::Acute), false) => 0x1FFD,
        (None, None, true) => 0x00A8,
        (Some(Breathing::Smooth), None, _) => 0x1FBF,
        (Some(Breathing::Rough), None, _) => 0x1FFE,
    })
}

fn compose_letter(g: &Grapheme, letter: Glyph, form: AcuteForm) -> Option<u32> {
    let cap = g.is_capital() as u32;
    let accent = g.accent();
    let acute = (accent == Some(Accent::Acute)) as u32;
    let iota = g.has_iota_subscript();

    // Length signs combine with nothing else.
    if g.has_length_sign() {
        if accent.is_some() || g.breathing().is_some() || iota || g.has_diaeresis() {
            return None;
        }
        let row = match letter {
            Glyph::Alpha => 0,
            Glyph::Iota => 2,
            Glyph::Upsilon => 3,
            _ => return None,
        };
        return Some(0x1FB0 + 0x10 * row + 0x08 * cap + g.has_macron() as u32);
    }

    if let Some(breathing) = g.breathing() {
        let rough = (breathing == Breathing::Rough) as u32;
        if letter == Glyph::Rho {
            if cap == 1 && rough == 0 {
                return None;
            }
            return Some(0x1FE4 + rough + 0x07 * cap);
        }
        if letter == Glyph::Upsilon && cap == 1 && rough == 0 {
            return None;
        }
        let base = 0x1F00 + 0x10 * vowel_index(letter)? + 0x08 * cap + 0x02 * accent_number(accent) + rough;
        if !iota {
            return Some(base);
        }
        // The subscript rows start at U+1F80 for alpha, eta and omega in turn.
        let shift = match letter {
            Glyph::Alpha => 0,
            Glyph::Eta => 0x10,
            Glyph::Omega => 0x40,
            _ => return None,
        };
        return Some(base + 0x80 - shift);
    }

    if g.has_diaeresis() {
        let upsilon = (letter == Glyph::Upsilon) as u32;
        if cap == 1 {
            return accent.is_none().then_some(0x03AA + upsilon);
        }
        return Some(match accent {
            None => 0x03CA + upsilon,
            Some(Accent::Circumflex) => 0x1FD7 + 0x10 * upsilon,
            Some(Accent::Grave) => 0x1FD2 + 0x10 * upsilon,
            Some(Accent::Acute) => match form {
                AcuteForm::Tonos => 0x0390 + 0x20 * upsilon,
                AcuteForm::Oxia => 0x1FD3 + 0x10 * upsilon,
            },
        });
    }

    if let Some(a) = accent {
        if cap == 1 {
            if iota || a == Accent::Circumflex {
                return None;
            }
            if a == Accent::Acute && form == AcuteForm::Tonos {
                return tonos_capital(letter);
            }
            return Some(match letter {
                Glyph::Epsilon => 0x1FC8 + acute,
                Glyph::Omicron => 0x1FF8 + acute,
                _ => 0x1FBA + 0x10 * long_row(letter)? + acute,
            });
        }
        return match a {
            Accent::Circumflex => Some(0x1FB6 + 0x10 * long_row(letter)? + iota as u32),
            _ if iota => Some(0x1FB2 + 0x10 * long_row(letter)? + 0x02 * acute),
            Accent::Acute if form == AcuteForm::Tonos => tonos_lower(letter),
            _ => Some(0x1F70 + 0x02 * vowel_index(letter)? + acute),
        };
    }

    if iota {
        return Some(0x1FB3 + 0x10 * long_row(letter)? + 0x09 * cap);
    }

    if letter == Glyph::Digamma {
        return Some(0x03DD - cap);
    }

    // Basic alphabet. Final sigma occupies the slot before sigma, which
    // shifts every later lower-case letter (and, by layout, every capital
    // after rho, where U+03A2 is unassigned).
    let n = letter.letter_index()? as u32;
    let final_sigma = letter == Glyph::Sigma && g.is_terminal() && cap == 0;
    let shift = (n > 16 && !final_sigma) as u32;
    Some(0x03B1 + n + shift - 0x20 * cap)
}

/// Render a grapheme sequence. Absent if any grapheme has no codepoint.
pub fn graphemes_to_string(graphemes: &[Grapheme]) -> Option<String> {
    graphemes.iter().map(grapheme_to_char).collect()
}

// ---------------------------------------------------------------------------
// Punctuation
// ---------------------------------------------------------------------------

/// Standalone Unicode form of a punctuation or whitespace glyph.
pub fn punctuation_char(glyph: Glyph) -> Option<char> {
    Some(match glyph {
        Glyph::Period => '.',
        Glyph::Comma => ',',
        Glyph::QuestionMark => '\u{037E}',
        Glyph::Semicolon => '\u{0387}',
        Glyph::Apostrophe => '\u{2019}',
        Glyph::LeftParenthesis => '(',
        Glyph::RightParenthesis => ')',
        Glyph::Hyphen => '-',
        Glyph::Dash => '\u{2014}',
        Glyph::LeftSingleQuote => '\u{2018}',
        Glyph::RightSingleQuote => '\u{2019}',
        Glyph::Space => ' ',
        Glyph::Newline => '\n',
        _ => return None,
    })
}

/// The glyph for a punctuation character. U+2019 reads as an apostrophe.
/// The canonical equivalents of the Greek question mark (`;`) and ano
/// teleia (U+00B7) are accepted too.
pub fn punctuation_glyph(ch: char) -> Option<Glyph> {
    match ch {
        ';' => Some(Glyph::QuestionMark),
        '\u{00B7}' => Some(Glyph::Semicolon),
        '\u{2019}' => Some(Glyph::Apostrophe),
        _ => Glyph::ALL
            .into_iter()
            .find(|&g| punctuation_char(g) == Some(ch)),
    }
}

// ---------------------------------------------------------------------------
// Reverse mapping
// ---------------------------------------------------------------------------

fn reverse_table() -> &'static BTreeMap<char, Grapheme> {
    static TABLE: OnceLock<BTreeMap<char, Grapheme>> = OnceLock::new();
    TABLE.get_or_init(build_reverse_table)
}

/// Every well-formed non-empty grapheme, non-terminal ones first.
pub fn all_graphemes() -> Vec<Grapheme> {
    let letters = std::iter::once(None).chain(Glyph::LETTERS.into_iter().map(Some));
    let letters: Vec<Option<Glyph>> = letters.collect();
    let accents = [None, Some(Accent::Grave), Some(Accent::Acute), Some(Accent::Circumflex)];
    let breathings = [None, Some(Breathing::Smooth), Some(Breathing::Rough)];
    let lengths = [None, Some(Glyph::Macron), Some(Glyph::Breve)];

    let mut out = Vec::new();
    for terminal in [false, true] {
        for &letter in &letters {
            for accent in accents {
                for breathing in breathings {
                    for length in lengths {
                        for capital in [false, true] {
                            for iota in [false, true] {
                                for diaeresis in [false, true] {
                                    let glyphs = [
                                        letter,
                                        accent.map(Accent::glyph),
                                        breathing.map(Breathing::glyph),
                                        length,
                                        capital.then_some(Glyph::Capitalization),
                                        iota.then_some(Glyph::IotaSubscript),
                                        diaeresis.then_some(Glyph::Diaeresis),
                                        terminal.then_some(Glyph::Termination),
                                    ];
                                    let mut g = Grapheme::new();
                                    if glyphs.iter().flatten().all(|&gl| g.try_add(gl))
                                        && !g.is_empty()
                                    {
                                        out.push(g);
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    out
}

fn build_reverse_table() -> BTreeMap<char, Grapheme> {
    let mut table = BTreeMap::new();
    for g in all_graphemes() {
        for form in [AcuteForm::Tonos, AcuteForm::Oxia] {
            if let Some(ch) = compose(&g, form) {
                table.entry(ch).or_insert(g);
            }
        }
    }

    // Alternate letterforms and spacing tonos marks.
    let aliases: [(char, &str); 12] = [
        ('\u{0384}', "/"),
        ('\u{0385}', "+/"),
        ('\u{03D0}', "b"),
        ('\u{03D1}', "q"),
        ('\u{03D2}', "*u"),
        ('\u{03D3}', "*u/"),
        ('\u{03D4}', "*u+"),
        ('\u{03D5}', "f"),
        ('\u{03D6}', "p"),
        ('\u{03F0}', "k"),
        ('\u{03F1}', "r"),
        ('\u{03F2}', "s"),
    ];
    for (ch, beta) in aliases {
        if let Some(g) = Grapheme::from_beta(beta) {
            table.entry(ch).or_insert(g);
        }
    }

    debug!(entries = table.len(), "built Unicode reverse table");
    table
}

/// The grapheme a precomposed codepoint stands for.
pub fn char_to_grapheme(ch: char) -> Option<Grapheme> {
    reverse_table().get(&ch).copied()
}

/// Whether a character is a Greek letter, mark, or Greek punctuation mark.
pub fn is_greek_char(ch: char) -> bool {
    matches!(ch, '\u{037E}' | '\u{0387}' | '\u{2019}') || char_to_grapheme(ch).is_some()
}

/// Decode Unicode text into graphemes. Absent if any character is not a
/// decodable Greek codepoint.
pub fn decode(text: &str) -> Option<Vec<Grapheme>> {
    text.chars().map(char_to_grapheme).collect()
}

/// Transliterate Unicode text to beta code. Greek letters and marks become
/// their canonical beta code, known punctuation its beta character, and
/// anything else passes through.
pub fn to_beta_code(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if let Some(g) = char_to_grapheme(ch) {
            out.push_str(&beta_code::encode(&g));
        } else if let Some(glyph) = punctuation_glyph(ch) {
            out.push(beta_code::char_for(glyph));
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(beta: &str) -> Option<char> {
        let g = Grapheme::from_beta(beta).unwrap_or_else(|| panic!("bad beta code {:?}", beta));
        grapheme_to_char(&g)
    }

    #[test]
    fn test_basic_alphabet() {
        assert_eq!(render("a"), Some('\u{03B1}'));
        assert_eq!(render("r"), Some('\u{03C1}'));
        assert_eq!(render("s"), Some('\u{03C3}'));
        assert_eq!(render("s$"), Some('\u{03C2}'));
        assert_eq!(render("t"), Some('\u{03C4}'));
        assert_eq!(render("w"), Some('\u{03C9}'));
        assert_eq!(render("*a"), Some('\u{0391}'));
        assert_eq!(render("*s"), Some('\u{03A3}'));
        assert_eq!(render("*s$"), Some('\u{03A3}'));
        assert_eq!(render("*w"), Some('\u{03A9}'));
        assert_eq!(render("v"), Some('\u{03DD}'));
        assert_eq!(render("*v"), Some('\u{03DC}'));
    }

    #[test]
    fn test_terminal_only_affects_sigma() {
        assert_eq!(render("a$"), render("a"));
        assert_eq!(render("n$"), render("n"));
    }

    #[test]
    fn test_breathing_block() {
        assert_eq!(render("a)"), Some('\u{1F00}'));
        assert_eq!(render("a("), Some('\u{1F01}'));
        assert_eq!(render("a(/"), Some('\u{1F05}'));
        assert_eq!(render("a)="), Some('\u{1F06}'));
        assert_eq!(render("*a)"), Some('\u{1F08}'));
        assert_eq!(render("e(\\"), Some('\u{1F13}'));
        assert_eq!(render("*o(/"), Some('\u{1F4D}'));
        assert_eq!(render("u("), Some('\u{1F51}'));
        assert_eq!(render("*u("), Some('\u{1F59}'));
        assert_eq!(render("*u(="), Some('\u{1F5F}'));
        assert_eq!(render("*u)"), None);
        assert_eq!(render("w)="), Some('\u{1F66}'));
    }

    #[test]
    fn test_breathing_with_iota_subscript() {
        assert_eq!(render("a)|"), Some('\u{1F80}'));
        assert_eq!(render("h(=|"), Some('\u{1F97}'));
        assert_eq!(render("*w)|"), Some('\u{1FA8}'));
        assert_eq!(render("w(/|"), Some('\u{1FA5}'));
    }

    #[test]
    fn test_rho_breathings() {
        assert_eq!(render("r)"), Some('\u{1FE4}'));
        assert_eq!(render("r("), Some('\u{1FE5}'));
        assert_eq!(render("*r("), Some('\u{1FEC}'));
        assert_eq!(render("*r)"), None);
    }

    #[test]
    fn test_accents_without_breathing() {
        assert_eq!(render("a\\"), Some('\u{1F70}'));
        assert_eq!(render("a/"), Some('\u{03AC}'));
        assert_eq!(render("o/"), Some('\u{03CC}'));
        assert_eq!(render("w\\"), Some('\u{1F7C}'));
        assert_eq!(render("a="), Some('\u{1FB6}'));
        assert_eq!(render("h=|"), Some('\u{1FC7}'));
        assert_eq!(render("w=|"), Some('\u{1FF7}'));
        assert_eq!(render("a/|"), Some('\u{1FB4}'));
        assert_eq!(render("h\\|"), Some('\u{1FC2}'));
    }

    #[test]
    fn test_capital_accents() {
        assert_eq!(render("*a\\"), Some('\u{1FBA}'));
        assert_eq!(render("*a/"), Some('\u{0386}'));
        assert_eq!(render("*e\\"), Some('\u{1FC8}'));
        assert_eq!(render("*e/"), Some('\u{0388}'));
        assert_eq!(render("*o\\"), Some('\u{1FF8}'));
        assert_eq!(render("*w/"), Some('\u{038F}'));
        assert_eq!(render("*a="), None);
        assert_eq!(render("*a/|"), None);
    }

    #[test]
    fn test_iota_subscript_without_accent() {
        assert_eq!(render("a|"), Some('\u{1FB3}'));
        assert_eq!(render("*a|"), Some('\u{1FBC}'));
        assert_eq!(render("h|"), Some('\u{1FC3}'));
        assert_eq!(render("*w|"), Some('\u{1FFC}'));
    }

    #[test]
    fn test_diaeresis() {
        assert_eq!(render("i+"), Some('\u{03CA}'));
        assert_eq!(render("u+"), Some('\u{03CB}'));
        assert_eq!(render("*i+"), Some('\u{03AA}'));
        assert_eq!(render("i+\\"), Some('\u{1FD2}'));
        assert_eq!(render("i+/"), Some('\u{0390}'));
        assert_eq!(render("u+/"), Some('\u{03B0}'));
        assert_eq!(render("u+="), Some('\u{1FE7}'));
        assert_eq!(render("*i+/"), None);
    }

    #[test]
    fn test_length_signs() {
        assert_eq!(render("a#"), Some('\u{1FB0}'));
        assert_eq!(render("a:"), Some('\u{1FB1}'));
        assert_eq!(render("*a:"), Some('\u{1FB9}'));
        assert_eq!(render("i:"), Some('\u{1FD1}'));
        assert_eq!(render("*u#"), Some('\u{1FE8}'));
        assert_eq!(render("a:/"), None);
    }

    #[test]
    fn test_bare_marks() {
        assert_eq!(render(":"), Some('\u{00AF}'));
        assert_eq!(render("#"), Some('\u{02D8}'));
        assert_eq!(render("|"), Some('\u{037A}'));
        assert_eq!(render(")"), Some('\u{1FBF}'));
        assert_eq!(render("("), Some('\u{1FFE}'));
        assert_eq!(render(")/"), Some('\u{1FCE}'));
        assert_eq!(render("(="), Some('\u{1FDF}'));
        assert_eq!(render("+="), Some('\u{1FC1}'));
        assert_eq!(render("+\\"), Some('\u{1FED}'));
        assert_eq!(render("="), Some('\u{1FC0}'));
        assert_eq!(render("\\"), Some('\u{1FEF}'));
        assert_eq!(render("/"), Some('\u{1FFD}'));
        assert_eq!(render("+"), Some('\u{00A8}'));
        assert_eq!(render("*"), None);
        assert_eq!(render("|)"), None);
    }

    #[test]
    fn test_reverse_accepts_both_acute_forms() {
        let tonos = char_to_grapheme('\u{03AC}').unwrap();
        let oxia = char_to_grapheme('\u{1F71}').unwrap();
        assert_eq!(tonos, oxia);
        assert_eq!(beta_code::encode(&tonos), "a/");
        assert_eq!(char_to_grapheme('\u{1FD3}'), char_to_grapheme('\u{0390}'));
        assert_eq!(char_to_grapheme('\u{1FFB}'), char_to_grapheme('\u{038F}'));
    }

    #[test]
    fn test_reverse_sigmas() {
        assert!(char_to_grapheme('\u{03C2}').unwrap().is_terminal());
        assert!(!char_to_grapheme('\u{03C3}').unwrap().is_terminal());
        assert!(!char_to_grapheme('\u{03A3}').unwrap().is_terminal());
        assert!(!char_to_grapheme('\u{03B1}').unwrap().is_terminal());
    }

    #[test]
    fn test_reverse_alternate_letterforms() {
        assert_eq!(char_to_grapheme('\u{03D0}'), Grapheme::from_beta("b"));
        assert_eq!(char_to_grapheme('\u{03D1}'), Grapheme::from_beta("q"));
        assert_eq!(char_to_grapheme('\u{03F2}'), Grapheme::from_beta("s"));
        assert_eq!(char_to_grapheme('\u{03D3}'), Grapheme::from_beta("*u/"));
    }

    #[test]
    fn test_unassigned_codepoints() {
        assert_eq!(char_to_grapheme('\u{03A2}'), None);
        assert_eq!(char_to_grapheme('\u{1F16}'), None);
        assert_eq!(char_to_grapheme('\u{1F58}'), None);
        assert_eq!(char_to_grapheme('a'), None);
        assert!(!is_greek_char('x'));
        assert!(is_greek_char('\u{037E}'));
        assert!(is_greek_char('\u{1FFE}'));
    }

    #[test]
    fn test_punctuation_round_trip() {
        for g in Glyph::ALL {
            if let Some(ch) = punctuation_char(g) {
                let back = punctuation_glyph(ch).unwrap();
                if g != Glyph::RightSingleQuote {
                    assert_eq!(back, g);
                }
            }
        }
        assert_eq!(punctuation_glyph(';'), Some(Glyph::QuestionMark));
    }

    #[test]
    fn test_to_beta_code() {
        let text = "\u{1F00}\u{03BB}\u{03B7}\u{03B8}\u{1FF6}\u{03C2}";
        assert_eq!(to_beta_code(text), "a)lhqw=s$");
        assert_eq!(to_beta_code("\u{03C4}\u{03AF}\u{037E} x"), "ti/? x");
        assert_eq!(decode("ab"), None);
        assert_eq!(decode("").map(|v| v.len()), Some(0));
    }

    #[test]
    fn test_graphemes_to_string() {
        let gs = beta_code::parse("a)lhqw=s$").unwrap();
        assert_eq!(
            graphemes_to_string(&gs).as_deref(),
            Some("\u{1F00}\u{03BB}\u{03B7}\u{03B8}\u{1FF6}\u{03C2}")
        );
        let with_gap = beta_code::parse("*u)").unwrap();
        assert_eq!(graphemes_to_string(&with_gap), None);
    }
}
