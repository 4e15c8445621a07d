// Polytonic Greek script: glyphs, graphemes, beta code, and Unicode.
//
// Converts between the three written representations of polytonic Greek:
// ASCII beta code, a structured `Grapheme` model, and precomposed Unicode
// codepoints. No I/O; every table is a compile-time constant or built once
// on first use behind a `OnceLock`.
//
// Architecture:
// - `glyph.rs`: the closed set of atomic symbols and their capability
//   predicates.
// - `grapheme.rs`: the letter-plus-marks composite and its try-add rules.
// - `beta_code.rs`: beta code character table and canonical serializer.
// - `convert.rs`: the maximal-munch tokenizer and the `RecoveryPolicy`
//   hooks (`Strict`, `BestEffort`, `Terminating`).
// - `unicode.rs`: grapheme <-> codepoint mapping, punctuation, decoding.
//
// Failures are `None`, never panics: unknown input, impossible mark
// combinations, and graphemes with no precomposed codepoint are all normal
// domain outcomes that callers handle with their own policy.
//
// See also: `polytonic_morph`, which lowers morphemes into graphemes from
// this crate.

pub mod beta_code;
pub mod convert;
pub mod glyph;
pub mod grapheme;
pub mod unicode;

pub use convert::{
    BestEffort, ConvertedChar, PolicyKind, RecoveryPolicy, Strict, Terminating, UnknownPolicy,
    convert, to_graphemes, tokenize,
};
pub use glyph::{Accent, Breathing, Glyph, GlyphCategory};
pub use grapheme::Grapheme;
pub use unicode::{char_to_grapheme, grapheme_to_char, graphemes_to_string};
