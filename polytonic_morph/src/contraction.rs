// Vowel contraction at a morpheme boundary.
//
// Contract verbs (stems ending in a, e, o) merge their final vowel with the
// first vowel of the ending. The result is a single phoneme, sometimes a
// diphthong. Only the 33 pairs below contract; everything else is left
// alone by the caller.
//
// See also: `pitch.rs` (`PitchedPhoneme::try_contract_with`) for how pitch
// follows a contraction, `morpheme.rs` (`ContractingMorpheme`) for where it
// is applied.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use crate::phoneme::Phoneme;

/// first + second contracts to result.
#[derive(Debug, Clone, Copy)]
pub struct ContractionRule {
    pub first: Phoneme,
    pub second: Phoneme,
    pub result: Phoneme,
}

const fn cr(first: Phoneme, second: Phoneme, result: Phoneme) -> ContractionRule {
    ContractionRule {
        first,
        second,
        result,
    }
}

use Phoneme::{A, Aa, Aai, Ai, E, Ee, Eei, Ei, I, O, Oi, Oo, Ooi, Ou};

pub const CONTRACTION_RULES: &[ContractionRule] = &[
    // alpha stems
    cr(A, A, Aa),
    cr(A, E, Aa),
    cr(A, Ei, Aai),
    cr(A, I, Ai),
    cr(A, Ee, Aa),
    cr(A, Eei, Aai),
    cr(A, O, Oo),
    cr(A, Ou, Oo),
    cr(A, Oi, Ooi),
    cr(A, Oo, Oo),
    cr(A, Ooi, Ooi),
    // epsilon stems
    cr(E, A, Ee),
    cr(E, E, Ei),
    cr(E, Ei, Ei),
    cr(E, I, Ei),
    cr(E, Ee, Ee),
    cr(E, Eei, Eei),
    cr(E, O, Ou),
    cr(E, Ou, Ou),
    cr(E, Oi, Oi),
    cr(E, Oo, Oo),
    cr(E, Ooi, Ooi),
    // omicron stems
    cr(O, A, Oo),
    cr(O, E, Ou),
    cr(O, Ei, Oi),
    cr(O, I, Oi),
    cr(O, Ee, Oo),
    cr(O, Eei, Oi),
    cr(O, O, Ou),
    cr(O, Ou, Ou),
    cr(O, Oi, Oi),
    cr(O, Oo, Oo),
    cr(O, Ooi, Ooi),
];

fn contractions() -> &'static BTreeMap<(Phoneme, Phoneme), Phoneme> {
    static MAP: OnceLock<BTreeMap<(Phoneme, Phoneme), Phoneme>> = OnceLock::new();
    MAP.get_or_init(|| {
        CONTRACTION_RULES
            .iter()
            .map(|r| ((r.first, r.second), r.result))
            .collect()
    })
}

/// The phoneme two adjacent vowels contract into, if they do.
pub fn contracted(first: Phoneme, second: Phoneme) -> Option<Phoneme> {
    contractions().get(&(first, second)).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phono_code;

    #[test]
    fn test_table_size_and_uniqueness() {
        assert_eq!(CONTRACTION_RULES.len(), 33);
        assert_eq!(contractions().len(), 33);
    }

    #[test]
    fn test_rules_match_phono_code_spellings() {
        // (first, second, result) as phono code.
        let spelled = [
            ("a", "a", "a:"),
            ("a", "ei", "a:i"),
            ("a", "i", "ai"),
            ("a", "oi", "o:i"),
            ("e", "e", "ei"),
            ("e", "a", "e:"),
            ("e", "o", "ou"),
            ("e", "e:i", "e:i"),
            ("o", "e:i", "oi"),
            ("o", "e", "ou"),
            ("o", "o:i", "o:i"),
        ];
        for (a, b, r) in spelled {
            let a = phono_code::parse_phoneme(a).unwrap();
            let b = phono_code::parse_phoneme(b).unwrap();
            let r = phono_code::parse_phoneme(r).unwrap();
            assert_eq!(contracted(a, b), Some(r), "{} + {}", a, b);
        }
    }

    #[test]
    fn test_only_short_stem_vowels_contract() {
        for rule in CONTRACTION_RULES {
            assert!(rule.first.is_short(), "{:?}", rule.first);
            assert!(rule.result.is_long(), "{:?}", rule.result);
        }
        assert_eq!(contracted(Phoneme::I, Phoneme::O), None);
        assert_eq!(contracted(Phoneme::Aj, Phoneme::O), None);
        assert_eq!(contracted(Phoneme::E, Phoneme::U), None);
    }
}
