// Morphemes: ordered sequences of pitched phonemes.
//
// A `Morpheme` is a word or part of a word. It owns its phonemes outright
// (every operation that joins morphemes copies), and knows how to:
//
// - concatenate (`plus`) or concatenate with boundary contraction
//   (`plus_contract`);
// - place a recessive accent (`throw_back_pitch`), the default accent of
//   finite verbs: as far from the end as the final vowel's length allows;
// - lower itself to graphemes, turning an initial aspiration `h` into a
//   rough breathing and giving any other initial vowel or rho a smooth one.
//
// `ContractingMorpheme` remembers the stem/ending boundary so that a contract
// verb can be accented before its boundary vowels merge.
//
// See also: `pitch.rs`, `phono_code.rs`, `verb.rs`.

use std::fmt;

use polytonic_script::{Breathing, Grapheme, graphemes_to_string};
use serde::{Deserialize, Serialize};

use crate::phono_code;
use crate::phoneme::Phoneme;
use crate::pitch::{Pitch, PitchedPhoneme};

/// Whether a clitic leans on the following word or the preceding one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CliticType {
    Proclitic,
    Enclitic,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Morpheme {
    phonemes: Vec<PitchedPhoneme>,
    clitic: Option<CliticType>,
}

impl Morpheme {
    pub fn new(phonemes: Vec<PitchedPhoneme>) -> Self {
        Self {
            phonemes,
            clitic: None,
        }
    }

    pub fn from_phono_code(code: &str) -> Option<Self> {
        phono_code::to_morpheme(code)
    }

    pub fn phonemes(&self) -> &[PitchedPhoneme] {
        &self.phonemes
    }

    pub fn len(&self) -> usize {
        self.phonemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phonemes.is_empty()
    }

    pub fn first(&self) -> Option<&PitchedPhoneme> {
        self.phonemes.first()
    }

    pub fn last(&self) -> Option<&PitchedPhoneme> {
        self.phonemes.last()
    }

    pub fn has_pitch(&self) -> bool {
        self.phonemes.iter().any(PitchedPhoneme::has_pitch)
    }

    pub fn clitic(&self) -> Option<CliticType> {
        self.clitic
    }

    pub fn is_proclitic(&self) -> bool {
        self.clitic == Some(CliticType::Proclitic)
    }

    pub fn is_enclitic(&self) -> bool {
        self.clitic == Some(CliticType::Enclitic)
    }

    /// Mark as a clitic. Only an unaccented morpheme that is not already a
    /// clitic can be marked.
    pub fn try_set_clitic(&mut self, clitic: CliticType) -> bool {
        let ok = self.clitic.is_none() && !self.has_pitch();
        if ok {
            self.clitic = Some(clitic);
        }
        ok
    }

    /// Concatenation. The result is not a clitic.
    pub fn plus(&self, other: &Morpheme) -> Morpheme {
        let mut result = Morpheme::new(self.phonemes.clone());
        result.append(other);
        result
    }

    pub fn append(&mut self, other: &Morpheme) {
        self.phonemes.extend_from_slice(&other.phonemes);
    }

    /// Concatenation that contracts the boundary vowels when they contract.
    pub fn plus_contract(&self, other: &Morpheme) -> Morpheme {
        let contraction = match (self.phonemes.last(), other.phonemes.first()) {
            (Some(last), Some(first)) => last.contracted(first),
            _ => None,
        };
        match contraction {
            Some(merged) => {
                let mut phonemes = Vec::with_capacity(self.len() + other.len() - 1);
                phonemes.extend_from_slice(&self.phonemes[..self.len() - 1]);
                phonemes.push(merged);
                phonemes.extend_from_slice(&other.phonemes[1..]);
                Morpheme::new(phonemes)
            }
            None => self.plus(other),
        }
    }

    fn vowel_positions(&self) -> Vec<usize> {
        self.phonemes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.phoneme().is_vowel())
            .map(|(i, _)| i)
            .collect()
    }

    /// Place a recessive accent, replacing any existing pitch.
    ///
    /// Counting vowels from the end, a circumflex may sit on the first vowel
    /// when it is long and either final, or penultimate before a short final.
    /// Otherwise the accent is an acute on the earliest vowel among the last
    /// two, or on the antepenult when the final vowel is short.
    pub fn throw_back_pitch(&mut self) {
        let vowels = self.vowel_positions();
        let Some(&last) = vowels.last() else {
            return;
        };
        let final_long = self.phonemes[last].phoneme().is_long();
        let n = vowels.len();

        for p in &mut self.phonemes {
            p.set_pitch(None);
        }

        let first = self.phonemes[vowels[0]].phoneme();
        let circumflex = match n {
            1 => first.is_long(),
            2 => first.is_long() && !final_long,
            _ => false,
        };
        if circumflex {
            self.phonemes[vowels[0]].set_pitch(Some(Pitch::Circumflex));
            return;
        }

        let acute_at = match n {
            1 | 2 => 0,
            _ if !final_long => n - 3,
            _ => n - 2,
        };
        self.phonemes[vowels[acute_at]].set_pitch(Some(Pitch::Acute));
    }

    /// Lower to graphemes. With `terminate`, the last grapheme is marked
    /// word-final (which selects final sigma).
    pub fn to_graphemes(&self, terminate: bool) -> Option<Vec<Grapheme>> {
        let mut result = Vec::new();
        let mut rough = false;
        for (i, unit) in self.phonemes.iter().enumerate() {
            let phoneme = unit.phoneme();
            if i == 0 && phoneme == Phoneme::H {
                rough = true;
                continue;
            }
            let graphemes = if (i == 0 || rough) && phoneme.can_have_breathing() {
                let breathing = if rough {
                    Breathing::Rough
                } else {
                    Breathing::Smooth
                };
                rough = false;
                unit.to_breathing_graphemes(breathing)?
            } else if rough {
                return None;
            } else {
                unit.to_graphemes()?
            };
            result.extend(graphemes);
        }
        if rough {
            return None;
        }
        if let Some(last) = result.last_mut().filter(|_| terminate) {
            last.try_make_terminal();
        }
        Some(result)
    }

    /// Lower straight to Unicode text.
    pub fn to_unicode(&self, terminate: bool) -> Option<String> {
        graphemes_to_string(&self.to_graphemes(terminate)?)
    }
}

impl From<Vec<PitchedPhoneme>> for Morpheme {
    fn from(phonemes: Vec<PitchedPhoneme>) -> Self {
        Self::new(phonemes)
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, p) in self.phonemes.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{}", p)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// ContractingMorpheme
// ---------------------------------------------------------------------------

/// A stem and an ending that may contract at their boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractingMorpheme {
    morpheme: Morpheme,
    /// Index of the stem's last phoneme, if the stem is non-empty.
    boundary: Option<usize>,
}

impl ContractingMorpheme {
    pub fn new(stem: &Morpheme, ending: &Morpheme) -> Self {
        Self {
            morpheme: stem.plus(ending),
            boundary: stem.len().checked_sub(1),
        }
    }

    pub fn throw_back_pitch(&mut self) {
        self.morpheme.throw_back_pitch();
    }

    /// Merge the boundary vowels. Returns whether a contraction happened;
    /// afterwards there is nothing left to contract.
    pub fn contract(&mut self) -> bool {
        let Some(i) = self.boundary else {
            return false;
        };
        let phonemes = &mut self.morpheme.phonemes;
        if i + 1 >= phonemes.len() {
            return false;
        }
        let next = phonemes[i + 1];
        if !phonemes[i].try_contract_with(&next) {
            return false;
        }
        phonemes.remove(i + 1);
        self.boundary = None;
        true
    }

    pub fn morpheme(&self) -> &Morpheme {
        &self.morpheme
    }

    pub fn into_morpheme(self) -> Morpheme {
        self.morpheme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(code: &str) -> Morpheme {
        Morpheme::from_phono_code(code).unwrap()
    }

    fn unicode(code: &str) -> Option<String> {
        m(code).to_unicode(true)
    }

    fn pitches(morpheme: &Morpheme) -> Vec<Option<Pitch>> {
        morpheme
            .phonemes()
            .iter()
            .filter(|p| p.phoneme().is_vowel())
            .map(|p| p.pitch())
            .collect()
    }

    #[test]
    fn test_breathing_and_final_sigma() {
        assert_eq!(unicode("ho").as_deref(), Some("\u{1F41}"));
        assert_eq!(unicode("hoi").as_deref(), Some("ο\u{1F31}"));
        assert_eq!(unicode("ou").as_deref(), Some("ο\u{1F50}"));
        assert_eq!(unicode("logos").as_deref(), Some("λογος"));
        assert_eq!(m("logos").to_unicode(false).as_deref(), Some("λογοσ"));
        assert_eq!(unicode("hre:to:r").as_deref(), Some("\u{1FE5}ητωρ"));
        assert_eq!(unicode("rhe:to:r"), None);
    }

    #[test]
    fn test_stranded_aspiration_fails() {
        assert_eq!(unicode("h"), None);
        assert_eq!(unicode("hl"), None);
        assert_eq!(unicode("eh"), None);
    }

    #[test]
    fn test_recessive_accent() {
        // short short short
        let mut w = m("luomen");
        w.throw_back_pitch();
        assert_eq!(pitches(&w), vec![Some(Pitch::Acute), None, None]);

        // final long holds the accent on the penult
        let mut w = m("luometha:");
        w.throw_back_pitch();
        assert_eq!(pitches(&w), vec![None, None, Some(Pitch::Acute), None]);

        // long penult before short final takes a circumflex
        let mut w = m("do:ron");
        w.throw_back_pitch();
        assert_eq!(pitches(&w), vec![Some(Pitch::Circumflex), None]);

        // single long vowel
        let mut w = m("pa:n");
        w.throw_back_pitch();
        assert_eq!(pitches(&w), vec![Some(Pitch::Circumflex)]);

        // short, long, short: acute on the antepenult, never a circumflex
        let mut w = m("elu:sa");
        w.throw_back_pitch();
        assert_eq!(pitches(&w), vec![Some(Pitch::Acute), None, None]);

        // glide diphthong counts as short at the end
        let mut w = m("luomaj");
        w.throw_back_pitch();
        assert_eq!(unicode_of(&w).as_deref(), Some("λ\u{03CD}ομαι"));
    }

    fn unicode_of(w: &Morpheme) -> Option<String> {
        w.to_unicode(true)
    }

    #[test]
    fn test_throw_back_replaces_existing_pitch() {
        let mut w = m("lu/o:");
        w.throw_back_pitch();
        assert_eq!(pitches(&w), vec![Some(Pitch::Acute), None]);
        let mut w = m("lo/gos");
        let before = w.clone();
        w.throw_back_pitch();
        assert_eq!(w, before);
    }

    #[test]
    fn test_throw_back_without_vowels() {
        let mut w = m("st");
        w.throw_back_pitch();
        assert!(!w.has_pitch());
    }

    #[test]
    fn test_plus_copies() {
        let a = m("lu");
        let b = m("o:");
        let c = a.plus(&b);
        assert_eq!(c.len(), 3);
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn test_plus_contract() {
        let stem = m("tima/");
        let ending = m("e");
        let word = stem.plus_contract(&ending);
        assert_eq!(word.len(), 4);
        assert_eq!(
            word.last().copied(),
            Some(PitchedPhoneme::with_pitch(Phoneme::Aa, Pitch::Circumflex))
        );

        // no contraction across consonants
        let word = m("lu").plus_contract(&m("tos"));
        assert_eq!(word, m("lutos"));
        assert_eq!(m("").plus_contract(&m("e")), m("e"));
    }

    #[test]
    fn test_contracting_morpheme_accents_before_merging() {
        let mut c = ContractingMorpheme::new(&m("poie"), &m("o:"));
        c.throw_back_pitch();
        assert!(c.contract());
        assert!(!c.contract());
        assert_eq!(c.morpheme().to_unicode(true).as_deref(), Some("ποι\u{1FF6}"));
    }

    #[test]
    fn test_contracting_morpheme_without_boundary() {
        let mut c = ContractingMorpheme::new(&m(""), &m("o:"));
        assert!(!c.contract());
        let mut c = ContractingMorpheme::new(&m("lu"), &m(""));
        assert!(!c.contract());
        assert_eq!(c.into_morpheme(), m("lu"));
    }

    #[test]
    fn test_clitic_marking() {
        let mut w = m("ho");
        assert!(w.try_set_clitic(CliticType::Proclitic));
        assert!(w.is_proclitic());
        assert!(!w.try_set_clitic(CliticType::Enclitic));

        let mut w = m("to/n");
        assert!(!w.try_set_clitic(CliticType::Proclitic));
        assert_eq!(w.clitic(), None);

        // concatenation drops clitic status
        let mut w = m("ho");
        w.try_set_clitic(CliticType::Proclitic);
        assert_eq!(w.plus(&m("s")).clitic(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(m("to/u").to_string(), "t-ou=");
        assert_eq!(m("lu:o:").to_string(), "l-u:-o:");
    }
}
