// Phono code: an ASCII phonemic transcription.
//
// Each character is a phoneme (a e i o u b g d p k t l m n r s h), a
// modifier (`:` long, `j` glide, `?` movable), or a pitch (`/` acute,
// `\` grave). Parsing runs in two passes:
//
// 1. Every phoneme character opens a new unit; modifiers and pitches attach
//    to the open unit with `PitchedPhoneme::try_add_object`.
// 2. Adjacent units combine greedily left to right with
//    `PitchedPhoneme::try_add_pitched` (so `ei` is one diphthong, `th` one
//    aspirate).
//
// Anything that does not attach (an unknown character, a modifier before any
// phoneme, a grave pitch) makes the whole code absent.
//
// See also: `pitch.rs`, `morpheme.rs`.

use tracing::trace;

use crate::morpheme::Morpheme;
use crate::phoneme::{Modifier, Phoneme};
use crate::pitch::{Pitch, PhonoObject, PitchedPhoneme};

/// A phono code character and what it stands for.
#[derive(Debug, Clone, Copy)]
pub struct PhonoChar {
    pub ch: char,
    pub object: PhonoObject,
}

const fn ph(ch: char, p: Phoneme) -> PhonoChar {
    PhonoChar {
        ch,
        object: PhonoObject::Phoneme(p),
    }
}

pub const PHONO_CODE_TABLE: &[PhonoChar] = &[
    // vowels
    ph('a', Phoneme::A),
    ph('e', Phoneme::E),
    ph('i', Phoneme::I),
    ph('o', Phoneme::O),
    ph('u', Phoneme::U),
    // voiced stops
    ph('b', Phoneme::B),
    ph('g', Phoneme::G),
    ph('d', Phoneme::D),
    // unvoiced stops
    ph('p', Phoneme::P),
    ph('k', Phoneme::K),
    ph('t', Phoneme::T),
    // liquids and nasals
    ph('l', Phoneme::L),
    ph('m', Phoneme::M),
    ph('n', Phoneme::N),
    ph('r', Phoneme::R),
    ph('s', Phoneme::S),
    // aspiration
    ph('h', Phoneme::H),
    PhonoChar {
        ch: ':',
        object: PhonoObject::Modifier(Modifier::Long),
    },
    PhonoChar {
        ch: 'j',
        object: PhonoObject::Modifier(Modifier::Glide),
    },
    PhonoChar {
        ch: '?',
        object: PhonoObject::Modifier(Modifier::Movable),
    },
    PhonoChar {
        ch: '/',
        object: PhonoObject::Pitch(Pitch::Acute),
    },
    PhonoChar {
        ch: '\\',
        object: PhonoObject::Pitch(Pitch::Grave),
    },
];

pub fn object_for(ch: char) -> Option<PhonoObject> {
    PHONO_CODE_TABLE.iter().find(|c| c.ch == ch).map(|c| c.object)
}

fn to_units(code: &str) -> Option<Vec<PitchedPhoneme>> {
    let mut units = Vec::new();
    let mut open: Option<PitchedPhoneme> = None;
    for (pos, ch) in code.chars().enumerate() {
        let Some(object) = object_for(ch) else {
            trace!(pos, ?ch, "unknown phono code character");
            return None;
        };
        match (object, open.as_mut()) {
            (PhonoObject::Phoneme(p), _) => {
                units.extend(open.replace(PitchedPhoneme::new(p)));
            }
            (_, None) => {
                trace!(pos, ?ch, "modifier with no phoneme");
                return None;
            }
            (_, Some(unit)) => {
                if !unit.try_add_object(object) {
                    trace!(pos, ?ch, unit = %unit, "modifier does not attach");
                    return None;
                }
            }
        }
    }
    units.extend(open);
    Some(units)
}

fn combine(units: Vec<PitchedPhoneme>) -> Vec<PitchedPhoneme> {
    let mut result: Vec<PitchedPhoneme> = Vec::with_capacity(units.len());
    let mut units = units.into_iter().peekable();
    while let Some(mut unit) = units.next() {
        while units.next_if(|next| unit.try_add_pitched(next)).is_some() {}
        result.push(unit);
    }
    result
}

/// Parse phono code into pitched phonemes.
pub fn to_pitched_phonemes(code: &str) -> Option<Vec<PitchedPhoneme>> {
    to_units(code).map(combine)
}

/// Parse phono code into a morpheme.
pub fn to_morpheme(code: &str) -> Option<Morpheme> {
    to_pitched_phonemes(code).map(Morpheme::new)
}

/// Parse phono code that spells exactly one unpitched phoneme.
pub fn parse_phoneme(code: &str) -> Option<Phoneme> {
    match to_pitched_phonemes(code)?.as_slice() {
        [p] if !p.has_pitch() => Some(p.phoneme()),
        _ => None,
    }
}
