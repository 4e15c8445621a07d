// Beta code: the ASCII transliteration of polytonic Greek.
//
// Each glyph has exactly one lower-case ASCII character (`BETA_CODE_TABLE`).
// Diacritics may appear before or after their letter in the input; the
// canonical output order produced by `encode` is
//
//   letter (upper-case if capital, `*` if capital with no letter),
//   breathing, accent, diaeresis, length sign, iota subscript, `$`.
//
// Upper-case letters are not part of the table. The tokenizer only accepts
// them through a recovering policy (see `convert.rs`), which is why
// `encode` round-trips through `BestEffort` rather than `Strict` for
// capitals.
//
// See also: `convert.rs` for the tokenizer, `grapheme.rs` for the composite.

use crate::convert::{self, Strict};
use crate::glyph::{Accent, Breathing, Glyph};
use crate::grapheme::Grapheme;

/// A beta code character and the glyph it stands for.
#[derive(Debug, Clone, Copy)]
pub struct BetaChar {
    pub ch: char,
    pub glyph: Glyph,
}

const fn bc(ch: char, glyph: Glyph) -> BetaChar {
    BetaChar { ch, glyph }
}

/// The complete beta code character table.
pub const BETA_CODE_TABLE: &[BetaChar] = &[
    bc('a', Glyph::Alpha),
    bc('b', Glyph::Beta),
    bc('g', Glyph::Gamma),
    bc('d', Glyph::Delta),
    bc('e', Glyph::Epsilon),
    bc('z', Glyph::Zeta),
    bc('h', Glyph::Eta),
    bc('q', Glyph::Theta),
    bc('i', Glyph::Iota),
    bc('k', Glyph::Kappa),
    bc('l', Glyph::Lambda),
    bc('m', Glyph::Mu),
    bc('n', Glyph::Nu),
    bc('c', Glyph::Xi),
    bc('o', Glyph::Omicron),
    bc('p', Glyph::Pi),
    bc('r', Glyph::Rho),
    bc('s', Glyph::Sigma),
    bc('t', Glyph::Tau),
    bc('u', Glyph::Upsilon),
    bc('f', Glyph::Phi),
    bc('x', Glyph::Chi),
    bc('y', Glyph::Psi),
    bc('w', Glyph::Omega),
    bc('v', Glyph::Digamma),
    bc('/', Glyph::Acute),
    bc('\\', Glyph::Grave),
    bc('=', Glyph::Circumflex),
    bc(')', Glyph::SmoothBreathing),
    bc('(', Glyph::RoughBreathing),
    bc('|', Glyph::IotaSubscript),
    bc(':', Glyph::Macron),
    bc('#', Glyph::Breve),
    bc('+', Glyph::Diaeresis),
    bc('*', Glyph::Capitalization),
    bc('$', Glyph::Termination),
    bc('.', Glyph::Period),
    bc(',', Glyph::Comma),
    bc('?', Glyph::QuestionMark),
    bc(';', Glyph::Semicolon),
    bc('\'', Glyph::Apostrophe),
    bc('[', Glyph::LeftParenthesis),
    bc(']', Glyph::RightParenthesis),
    bc('-', Glyph::Hyphen),
    bc('_', Glyph::Dash),
    bc('<', Glyph::LeftSingleQuote),
    bc('>', Glyph::RightSingleQuote),
    bc(' ', Glyph::Space),
    bc('\n', Glyph::Newline),
];

/// The glyph a beta code character stands for.
pub fn glyph_for(ch: char) -> Option<Glyph> {
    BETA_CODE_TABLE.iter().find(|b| b.ch == ch).map(|b| b.glyph)
}

/// The beta code character for a glyph.
pub fn char_for(glyph: Glyph) -> char {
    BETA_CODE_TABLE
        .iter()
        .find(|b| b.glyph == glyph)
        .map(|b| b.ch)
        .unwrap_or_else(|| unreachable!("{:?} missing from BETA_CODE_TABLE", glyph))
}

/// Serialize a grapheme in canonical order.
pub fn encode(g: &Grapheme) -> String {
    let mut out = String::new();
    match (g.letter(), g.is_capital()) {
        (Some(letter), true) => out.push(char_for(letter).to_ascii_uppercase()),
        (Some(letter), false) => out.push(char_for(letter)),
        (None, true) => out.push(char_for(Glyph::Capitalization)),
        (None, false) => {}
    }
    if let Some(b) = g.breathing() {
        out.push(char_for(Breathing::glyph(b)));
    }
    if let Some(a) = g.accent() {
        out.push(char_for(Accent::glyph(a)));
    }
    if g.has_diaeresis() {
        out.push(char_for(Glyph::Diaeresis));
    }
    if g.has_macron() {
        out.push(char_for(Glyph::Macron));
    }
    if g.has_breve() {
        out.push(char_for(Glyph::Breve));
    }
    if g.has_iota_subscript() {
        out.push(char_for(Glyph::IotaSubscript));
    }
    if g.is_terminal() {
        out.push(char_for(Glyph::Termination));
    }
    out
}

/// Serialize a sequence of graphemes.
pub fn encode_all(graphemes: &[Grapheme]) -> String {
    graphemes.iter().map(encode).collect()
}

/// Strictly tokenize beta code into graphemes. Absent if any character is
/// outside the grapheme-forming part of the table.
pub fn parse(beta: &str) -> Option<Vec<Grapheme>> {
    convert::to_graphemes(&Strict, beta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_a_bijection() {
        for (i, a) in BETA_CODE_TABLE.iter().enumerate() {
            for b in &BETA_CODE_TABLE[i + 1..] {
                assert_ne!(a.ch, b.ch, "character {:?} assigned twice", a.ch);
                assert_ne!(a.glyph, b.glyph, "glyph {:?} assigned twice", a.glyph);
            }
        }
        for g in Glyph::ALL {
            assert_eq!(glyph_for(char_for(g)), Some(g));
        }
    }

    #[test]
    fn test_uppercase_is_not_in_table() {
        assert_eq!(glyph_for('A'), None);
        assert_eq!(glyph_for('0'), None);
    }

    #[test]
    fn test_encode_canonical_order() {
        let g = Grapheme::from_beta("|/)a").unwrap();
        assert_eq!(encode(&g), "a)/|");

        let g = Grapheme::from_beta("+i:\\").unwrap();
        assert_eq!(encode(&g), "i\\+:");

        let g = Grapheme::from_beta("*(w=|").unwrap();
        assert_eq!(encode(&g), "W(=|");
    }

    #[test]
    fn test_encode_capital_without_letter() {
        let g = Grapheme::from_beta("*)").unwrap();
        assert_eq!(encode(&g), "*)");
    }

    #[test]
    fn test_encode_terminal_sigma() {
        let g = Grapheme::from_beta("s$").unwrap();
        assert_eq!(encode(&g), "s$");
    }

    #[test]
    fn test_parse_word() {
        let word = parse("a)lhqw=s").unwrap();
        assert_eq!(word.len(), 6);
        assert_eq!(encode_all(&word), "a)lhqw=s");
        assert_eq!(parse("a b"), None);
        assert_eq!(parse(""), Some(vec![]));
    }
}
