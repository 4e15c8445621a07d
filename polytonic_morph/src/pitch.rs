// Pitched phonemes: a phoneme plus an optional pitch accent.
//
// The accent follows the phoneme through every derivation. When a short
// vowel carrying an acute becomes long (by a length modifier, a diphthong
// combination, or a contraction) the acute is promoted to a circumflex,
// since Greek pitch spans the whole of a long vowel.
//
// Lowering to graphemes places both accent and breathing on the last
// grapheme of the phoneme's spelling, which is where Greek writes them on a
// diphthong (οὐ, αἱ, τοῦ).
//
// See also: `phoneme.rs` for the tables, `contraction.rs`, `morpheme.rs`.

use std::fmt;

use polytonic_script::{Accent, Breathing, Grapheme};
use serde::{Deserialize, Serialize};

use crate::contraction;
use crate::phoneme::{Modifier, Phoneme};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pitch {
    Acute,
    Grave,
    Circumflex,
}

impl Pitch {
    pub fn accent(self) -> Accent {
        match self {
            Pitch::Acute => Accent::Acute,
            Pitch::Grave => Accent::Grave,
            Pitch::Circumflex => Accent::Circumflex,
        }
    }

    /// Debug notation used by `Morpheme`'s `Display`.
    pub fn mark(self) -> char {
        match self {
            Pitch::Acute => '/',
            Pitch::Grave => '\\',
            Pitch::Circumflex => '=',
        }
    }
}

/// One item of phono code: a phoneme, a modifier, or a pitch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhonoObject {
    Phoneme(Phoneme),
    Modifier(Modifier),
    Pitch(Pitch),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchedPhoneme {
    phoneme: Phoneme,
    pitch: Option<Pitch>,
}

impl PitchedPhoneme {
    pub fn new(phoneme: Phoneme) -> Self {
        Self {
            phoneme,
            pitch: None,
        }
    }

    pub fn with_pitch(phoneme: Phoneme, pitch: Pitch) -> Self {
        Self {
            phoneme,
            pitch: Some(pitch),
        }
    }

    pub fn phoneme(&self) -> Phoneme {
        self.phoneme
    }

    pub fn pitch(&self) -> Option<Pitch> {
        self.pitch
    }

    pub fn has_pitch(&self) -> bool {
        self.pitch.is_some()
    }

    pub fn set_pitch(&mut self, pitch: Option<Pitch>) {
        self.pitch = pitch;
    }

    /// Acute becomes grave; any other pitch is unchanged.
    pub fn make_grave(&mut self) {
        if self.pitch == Some(Pitch::Acute) {
            self.pitch = Some(Pitch::Grave);
        }
    }

    fn is_pitched_short_vowel(&self) -> bool {
        self.pitch == Some(Pitch::Acute) && self.phoneme.is_short()
    }

    /// Replace the phoneme, promoting a short acute to circumflex if the
    /// new phoneme is long. Returns whether a promotion happened.
    fn lengthen_to(&mut self, result: Phoneme) -> bool {
        let was_short = self.is_pitched_short_vowel();
        self.phoneme = result;
        if was_short && result.is_long() {
            self.pitch = Some(Pitch::Circumflex);
            true
        } else {
            false
        }
    }

    /// Attach a phono code object. Only an acute pitch is accepted, and
    /// only when no pitch is set yet.
    pub fn try_add_object(&mut self, object: PhonoObject) -> bool {
        let result = match object {
            PhonoObject::Pitch(Pitch::Acute) if self.pitch.is_none() => {
                self.pitch = Some(Pitch::Acute);
                return true;
            }
            PhonoObject::Pitch(_) => return false,
            PhonoObject::Phoneme(p) => self.phoneme.plus(p),
            PhonoObject::Modifier(m) => self.phoneme.plus_modifier(m),
        };
        match result {
            Some(result) => {
                self.lengthen_to(result);
                true
            }
            None => false,
        }
    }

    /// Combine a following pitched phoneme into this one. Fails if both
    /// carry a pitch or the phonemes do not combine.
    pub fn try_add_pitched(&mut self, other: &PitchedPhoneme) -> bool {
        if self.has_pitch() && other.has_pitch() {
            return false;
        }
        let Some(result) = self.phoneme.plus(other.phoneme) else {
            return false;
        };
        if !self.lengthen_to(result) && other.has_pitch() {
            self.pitch = other.pitch;
        }
        true
    }

    /// Contract a following vowel into this one. A pitch on the second
    /// vowel carries over when this one has none.
    pub fn try_contract_with(&mut self, other: &PitchedPhoneme) -> bool {
        let Some(result) = contraction::contracted(self.phoneme, other.phoneme) else {
            return false;
        };
        if !self.lengthen_to(result) && self.pitch.is_none() {
            self.pitch = other.pitch;
        }
        true
    }

    /// Contracted copy, leaving `self` untouched.
    pub fn contracted(&self, other: &PitchedPhoneme) -> Option<PitchedPhoneme> {
        let mut result = *self;
        result.try_contract_with(other).then_some(result)
    }

    /// Spelling with the pitch on the last grapheme. Absent for the
    /// aspiration, or when the accent cannot be written on the spelling.
    pub fn to_graphemes(&self) -> Option<Vec<Grapheme>> {
        let mut graphemes = self.phoneme.to_graphemes()?;
        if let Some(pitch) = self.pitch {
            let last = graphemes.last_mut()?;
            if !last.try_add_accent(pitch.accent()) {
                return None;
            }
        }
        Some(graphemes)
    }

    /// Spelling with a breathing mark on the last grapheme.
    pub fn to_breathing_graphemes(&self, breathing: Breathing) -> Option<Vec<Grapheme>> {
        let mut graphemes = self.to_graphemes()?;
        let last = graphemes.last_mut()?;
        last.try_add_breathing(breathing).then_some(graphemes)
    }
}

impl From<Phoneme> for PitchedPhoneme {
    fn from(phoneme: Phoneme) -> Self {
        Self::new(phoneme)
    }
}

impl fmt::Display for PitchedPhoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.phoneme)?;
        if let Some(pitch) = self.pitch {
            write!(f, "{}", pitch.mark())?;
        }
        Ok(())
    }
}
