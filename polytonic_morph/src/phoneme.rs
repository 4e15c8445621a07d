// Phonemes of Attic Greek and the closed tables that combine them.
//
// A `Phoneme` is a sound unit: a short or long monophthong, a diphthong, a
// consonant, or a consonant cluster that Greek writes with one letter
// (ph, kh, th, zd, ks, ps). Units compose through two hand-authored tables:
//
// - `MODIFIER_RULES`: phoneme + modifier -> phoneme (vowel length, the
//   glide that makes short-final "ai"/"oi", movable nu);
// - `COMBINATION_RULES`: phoneme + phoneme -> phoneme (diphthongs,
//   aspirates, clusters).
//
// Both are looked up through `OnceLock`-backed maps built on first use.
// Anything not in a table does not combine.
//
// Each phoneme (except the aspiration `H`, which surfaces only as a rough
// breathing) has a representative beta code spelling, lowered to graphemes
// by `to_graphemes`.
//
// See also: `contraction.rs` for vowel contraction, `pitch.rs` for the
// pitched wrapper used in morphemes, `phono_code.rs` for the ASCII input
// format.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use polytonic_script::{Grapheme, beta_code};
use serde::{Deserialize, Serialize};

/// A sound unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phoneme {
    // Short monophthongs.
    A,
    E,
    I,
    O,
    U,
    // Long monophthongs.
    Aa,
    Ee,
    Ii,
    Oo,
    Uu,
    // Diphthongs. `Aj` and `Oj` are the glide forms, which count as short
    // at the end of a word.
    Aj,
    Ai,
    Aai,
    Au,
    Ei,
    Eei,
    Eu,
    Eeu,
    Oj,
    Oi,
    Ooi,
    Ou,
    Ui,
    Uui,
    // Consonants.
    L,
    M,
    N,
    R,
    S,
    H,
    B,
    G,
    D,
    P,
    K,
    T,
    Ph,
    Kh,
    Th,
    Zd,
    Ks,
    Ps,
    MovableNu,
    Ng,
}

/// Something that can be attached to a phoneme to derive another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    /// Vowel lengthening.
    Long,
    /// Semivowel glide.
    Glide,
    /// Movability, as in final nu.
    Movable,
}

impl Phoneme {
    pub const ALL: [Phoneme; 44] = [
        Phoneme::A,
        Phoneme::E,
        Phoneme::I,
        Phoneme::O,
        Phoneme::U,
        Phoneme::Aa,
        Phoneme::Ee,
        Phoneme::Ii,
        Phoneme::Oo,
        Phoneme::Uu,
        Phoneme::Aj,
        Phoneme::Ai,
        Phoneme::Aai,
        Phoneme::Au,
        Phoneme::Ei,
        Phoneme::Eei,
        Phoneme::Eu,
        Phoneme::Eeu,
        Phoneme::Oj,
        Phoneme::Oi,
        Phoneme::Ooi,
        Phoneme::Ou,
        Phoneme::Ui,
        Phoneme::Uui,
        Phoneme::L,
        Phoneme::M,
        Phoneme::N,
        Phoneme::R,
        Phoneme::S,
        Phoneme::H,
        Phoneme::B,
        Phoneme::G,
        Phoneme::D,
        Phoneme::P,
        Phoneme::K,
        Phoneme::T,
        Phoneme::Ph,
        Phoneme::Kh,
        Phoneme::Th,
        Phoneme::Zd,
        Phoneme::Ks,
        Phoneme::Ps,
        Phoneme::MovableNu,
        Phoneme::Ng,
    ];

    pub fn is_monophthong(self) -> bool {
        use Phoneme::*;
        matches!(self, A | E | I | O | U | Aa | Ee | Ii | Oo | Uu)
    }

    pub fn is_diphthong(self) -> bool {
        use Phoneme::*;
        matches!(
            self,
            Aj | Ai | Aai | Au | Ei | Eei | Eu | Eeu | Oj | Oi | Ooi | Ou | Ui | Uui
        )
    }

    pub fn is_vowel(self) -> bool {
        self.is_monophthong() || self.is_diphthong()
    }

    pub fn is_consonant(self) -> bool {
        !self.is_vowel()
    }

    /// Long monophthongs and every diphthong except the glide forms.
    pub fn is_long(self) -> bool {
        use Phoneme::*;
        self.is_vowel() && !matches!(self, A | E | I | O | U | Aj | Oj)
    }

    pub fn is_short(self) -> bool {
        self.is_vowel() && !self.is_long()
    }

    /// Vowels and rho can carry a breathing mark.
    pub fn can_have_breathing(self) -> bool {
        self.is_vowel() || self == Phoneme::R
    }

    /// Representative beta code spelling. The aspiration has none.
    pub fn spelling(self) -> Option<&'static str> {
        use Phoneme::*;
        Some(match self {
            A | Aa => "a",
            E => "e",
            Ee => "h",
            I | Ii => "i",
            O => "o",
            Oo => "w",
            U | Uu => "u",
            Aj | Ai => "ai",
            Aai => "a|",
            Au => "au",
            Ei => "ei",
            Eei => "h|",
            Eu => "eu",
            Eeu => "hu",
            Oj | Oi => "oi",
            Ooi => "w|",
            Ou => "ou",
            Ui | Uui => "ui",
            L => "l",
            M => "m",
            N | MovableNu => "n",
            R => "r",
            S => "s",
            H => return None,
            B => "b",
            G | Ng => "g",
            D => "d",
            P => "p",
            K => "k",
            T => "t",
            Ph => "f",
            Kh => "x",
            Th => "q",
            Zd => "z",
            Ks => "c",
            Ps => "y",
        })
    }

    /// Phono code for this phoneme; parsing it yields the phoneme back.
    pub fn code(self) -> &'static str {
        use Phoneme::*;
        match self {
            A => "a",
            E => "e",
            I => "i",
            O => "o",
            U => "u",
            Aa => "a:",
            Ee => "e:",
            Ii => "i:",
            Oo => "o:",
            Uu => "u:",
            Aj => "aj",
            Ai => "ai",
            Aai => "a:i",
            Au => "au",
            Ei => "ei",
            Eei => "e:i",
            Eu => "eu",
            Eeu => "e:u",
            Oj => "oj",
            Oi => "oi",
            Ooi => "o:i",
            Ou => "ou",
            Ui => "ui",
            Uui => "u:i",
            L => "l",
            M => "m",
            N => "n",
            R => "r",
            S => "s",
            H => "h",
            B => "b",
            G => "g",
            D => "d",
            P => "p",
            K => "k",
            T => "t",
            Ph => "ph",
            Kh => "kh",
            Th => "th",
            Zd => "sd",
            Ks => "ks",
            Ps => "ps",
            MovableNu => "n?",
            Ng => "ng",
        }
    }

    /// Fresh graphemes for the spelling. `None` for the aspiration.
    pub fn to_graphemes(self) -> Option<Vec<Grapheme>> {
        spellings().get(&self).cloned()
    }

    /// Combine with a following phoneme.
    pub fn plus(self, other: Phoneme) -> Option<Phoneme> {
        combinations().get(&(self, other)).copied()
    }

    /// Apply a modifier.
    pub fn plus_modifier(self, modifier: Modifier) -> Option<Phoneme> {
        modifications().get(&(self, modifier)).copied()
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// base + modifier -> result.
#[derive(Debug, Clone, Copy)]
pub struct ModifierRule {
    pub base: Phoneme,
    pub modifier: Modifier,
    pub result: Phoneme,
}

/// first + second -> result.
#[derive(Debug, Clone, Copy)]
pub struct CombinationRule {
    pub first: Phoneme,
    pub second: Phoneme,
    pub result: Phoneme,
}

const fn modr(base: Phoneme, modifier: Modifier, result: Phoneme) -> ModifierRule {
    ModifierRule {
        base,
        modifier,
        result,
    }
}

const fn comb(first: Phoneme, second: Phoneme, result: Phoneme) -> CombinationRule {
    CombinationRule {
        first,
        second,
        result,
    }
}

pub const MODIFIER_RULES: &[ModifierRule] = &[
    modr(Phoneme::A, Modifier::Long, Phoneme::Aa),
    modr(Phoneme::E, Modifier::Long, Phoneme::Ee),
    modr(Phoneme::I, Modifier::Long, Phoneme::Ii),
    modr(Phoneme::O, Modifier::Long, Phoneme::Oo),
    modr(Phoneme::U, Modifier::Long, Phoneme::Uu),
    modr(Phoneme::A, Modifier::Glide, Phoneme::Aj),
    modr(Phoneme::O, Modifier::Glide, Phoneme::Oj),
    modr(Phoneme::N, Modifier::Movable, Phoneme::MovableNu),
];

pub const COMBINATION_RULES: &[CombinationRule] = &[
    // Diphthongs.
    comb(Phoneme::A, Phoneme::I, Phoneme::Ai),
    comb(Phoneme::Aa, Phoneme::I, Phoneme::Aai),
    comb(Phoneme::A, Phoneme::U, Phoneme::Au),
    comb(Phoneme::E, Phoneme::I, Phoneme::Ei),
    comb(Phoneme::Ee, Phoneme::I, Phoneme::Eei),
    comb(Phoneme::E, Phoneme::U, Phoneme::Eu),
    comb(Phoneme::Ee, Phoneme::U, Phoneme::Eeu),
    comb(Phoneme::O, Phoneme::I, Phoneme::Oi),
    comb(Phoneme::Oo, Phoneme::I, Phoneme::Ooi),
    comb(Phoneme::O, Phoneme::U, Phoneme::Ou),
    comb(Phoneme::U, Phoneme::I, Phoneme::Ui),
    comb(Phoneme::Uu, Phoneme::I, Phoneme::Uui),
    // Aspirates.
    comb(Phoneme::P, Phoneme::H, Phoneme::Ph),
    comb(Phoneme::K, Phoneme::H, Phoneme::Kh),
    comb(Phoneme::T, Phoneme::H, Phoneme::Th),
    // Double consonants.
    comb(Phoneme::S, Phoneme::D, Phoneme::Zd),
    comb(Phoneme::K, Phoneme::S, Phoneme::Ks),
    comb(Phoneme::P, Phoneme::S, Phoneme::Ps),
    // Nasal before velar.
    comb(Phoneme::N, Phoneme::G, Phoneme::Ng),
];

fn modifications() -> &'static BTreeMap<(Phoneme, Modifier), Phoneme> {
    static MAP: OnceLock<BTreeMap<(Phoneme, Modifier), Phoneme>> = OnceLock::new();
    MAP.get_or_init(|| {
        MODIFIER_RULES
            .iter()
            .map(|r| ((r.base, r.modifier), r.result))
            .collect()
    })
}

fn combinations() -> &'static BTreeMap<(Phoneme, Phoneme), Phoneme> {
    static MAP: OnceLock<BTreeMap<(Phoneme, Phoneme), Phoneme>> = OnceLock::new();
    MAP.get_or_init(|| {
        COMBINATION_RULES
            .iter()
            .map(|r| ((r.first, r.second), r.result))
            .collect()
    })
}

fn spellings() -> &'static BTreeMap<Phoneme, Vec<Grapheme>> {
    static MAP: OnceLock<BTreeMap<Phoneme, Vec<Grapheme>>> = OnceLock::new();
    MAP.get_or_init(|| {
        Phoneme::ALL
            .into_iter()
            .filter_map(|p| Some((p, beta_code::parse(p.spelling()?)?)))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_partition() {
        for p in Phoneme::ALL {
            assert!(p.is_vowel() != p.is_consonant(), "{:?}", p);
            assert!(!(p.is_monophthong() && p.is_diphthong()), "{:?}", p);
            if p.is_vowel() {
                assert!(p.is_long() != p.is_short(), "{:?}", p);
            } else {
                assert!(!p.is_long() && !p.is_short(), "{:?}", p);
            }
        }
        assert_eq!(Phoneme::ALL.iter().filter(|p| p.is_vowel()).count(), 24);
    }

    #[test]
    fn test_glide_diphthongs_are_short() {
        assert!(Phoneme::Aj.is_short());
        assert!(Phoneme::Oj.is_short());
        assert!(Phoneme::Ai.is_long());
        assert!(Phoneme::Oi.is_long());
    }

    #[test]
    fn test_every_spelling_parses() {
        for p in Phoneme::ALL {
            match p.spelling() {
                Some(s) => {
                    let gs = p.to_graphemes();
                    assert!(gs.as_ref().is_some_and(|g| !g.is_empty()), "{:?} spelled {:?}", p, s);
                }
                None => assert_eq!(p, Phoneme::H),
            }
        }
        assert_eq!(Phoneme::Aai.to_graphemes().map(|g| g.len()), Some(1));
        assert_eq!(Phoneme::Ou.to_graphemes().map(|g| g.len()), Some(2));
    }

    #[test]
    fn test_modifiers() {
        assert_eq!(Phoneme::O.plus_modifier(Modifier::Long), Some(Phoneme::Oo));
        assert_eq!(Phoneme::A.plus_modifier(Modifier::Glide), Some(Phoneme::Aj));
        assert_eq!(Phoneme::N.plus_modifier(Modifier::Movable), Some(Phoneme::MovableNu));
        assert_eq!(Phoneme::E.plus_modifier(Modifier::Glide), None);
        assert_eq!(Phoneme::Aa.plus_modifier(Modifier::Long), None);
    }

    #[test]
    fn test_combinations() {
        assert_eq!(Phoneme::E.plus(Phoneme::I), Some(Phoneme::Ei));
        assert_eq!(Phoneme::Oo.plus(Phoneme::I), Some(Phoneme::Ooi));
        assert_eq!(Phoneme::T.plus(Phoneme::H), Some(Phoneme::Th));
        assert_eq!(Phoneme::S.plus(Phoneme::D), Some(Phoneme::Zd));
        assert_eq!(Phoneme::I.plus(Phoneme::A), None);
        assert_eq!(Phoneme::L.plus(Phoneme::M), None);
        assert_eq!(Phoneme::Oo.plus(Phoneme::U), None);
    }

    #[test]
    fn test_rule_tables_have_unique_keys() {
        for (i, a) in COMBINATION_RULES.iter().enumerate() {
            for b in &COMBINATION_RULES[i + 1..] {
                assert!(
                    (a.first, a.second) != (b.first, b.second),
                    "duplicate rule {:?} + {:?}",
                    a.first,
                    a.second
                );
            }
        }
        assert_eq!(combinations().len(), COMBINATION_RULES.len());
        assert_eq!(modifications().len(), MODIFIER_RULES.len());
    }

    #[test]
    fn test_breathing_capability() {
        assert!(Phoneme::R.can_have_breathing());
        assert!(Phoneme::Oi.can_have_breathing());
        assert!(!Phoneme::H.can_have_breathing());
        assert!(!Phoneme::L.can_have_breathing());
    }
}
