// Grapheme: one rendered Greek character unit (a base letter plus marks).
//
// A `Grapheme` is a small `Copy` value with one slot per kind of mark. Slots
// are filled monotonically through the `try_*` operations: each either
// fills its slot and returns `true`, or leaves the grapheme untouched and
// returns `false`. Every `try_*` has a pure `can_*` twin so the tokenizer can
// look ahead without mutating.
//
// Well-formedness rules (all checked before any mutation):
// - a filled slot is never overwritten;
// - marks must be admissible on the base letter, if one is present, and a
//   letter added later must admit every mark already present;
// - breathing and diaeresis exclude each other;
// - macron and breve share one length-sign slot.
// The terminal flag has no structural letter restriction. Only a sigma
// renders differently when terminal, so callers decide where to set it.
//
// See also: `glyph.rs` for the per-letter predicates, `beta_code.rs` for the
// canonical serialization, `unicode.rs` for the codepoint mapping.

use serde::{Deserialize, Serialize};

use crate::glyph::{Accent, Breathing, Glyph, GlyphCategory};

/// A letter with its diacritics and flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grapheme {
    letter: Option<Glyph>,
    accent: Option<Accent>,
    breathing: Option<Breathing>,
    capital: bool,
    iota_subscript: bool,
    macron: bool,
    breve: bool,
    diaeresis: bool,
    terminal: bool,
}

impl Grapheme {
    /// An empty grapheme.
    pub fn new() -> Self {
        Self::default()
    }

    /// A bare lower-case letter. Returns `None` for non-letter glyphs.
    pub fn from_letter(letter: Glyph) -> Option<Self> {
        let mut g = Self::new();
        g.try_add_letter(letter).then_some(g)
    }

    /// Build a grapheme from beta code. Succeeds only if the whole input
    /// tokenizes, strictly, to exactly one grapheme.
    pub fn from_beta(beta: &str) -> Option<Self> {
        match crate::beta_code::parse(beta)?.as_slice() {
            [g] => Some(*g),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn letter(&self) -> Option<Glyph> {
        self.letter
    }

    pub fn has_letter(&self) -> bool {
        self.letter.is_some()
    }

    pub fn accent(&self) -> Option<Accent> {
        self.accent
    }

    pub fn breathing(&self) -> Option<Breathing> {
        self.breathing
    }

    pub fn is_capital(&self) -> bool {
        self.capital
    }

    pub fn has_iota_subscript(&self) -> bool {
        self.iota_subscript
    }

    pub fn has_macron(&self) -> bool {
        self.macron
    }

    pub fn has_breve(&self) -> bool {
        self.breve
    }

    pub fn has_length_sign(&self) -> bool {
        self.macron || self.breve
    }

    pub fn has_diaeresis(&self) -> bool {
        self.diaeresis
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// True if no slot is filled.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    // ------------------------------------------------------------------
    // Glyph dispatch
    // ------------------------------------------------------------------

    /// Add a glyph to whichever slot its category targets.
    pub fn try_add(&mut self, glyph: Glyph) -> bool {
        match glyph.category() {
            GlyphCategory::Letter => self.try_add_letter(glyph),
            GlyphCategory::Accent => glyph.as_accent().is_some_and(|a| self.try_add_accent(a)),
            GlyphCategory::Breathing => glyph
                .as_breathing()
                .is_some_and(|b| self.try_add_breathing(b)),
            GlyphCategory::LengthSign if glyph == Glyph::Macron => self.try_add_macron(),
            GlyphCategory::LengthSign => self.try_add_breve(),
            GlyphCategory::Diaeresis => self.try_add_diaeresis(),
            GlyphCategory::IotaSubscript => self.try_add_iota_subscript(),
            GlyphCategory::Capitalization => self.try_capitalize(),
            GlyphCategory::Termination => self.try_make_terminal(),
            GlyphCategory::Punctuation | GlyphCategory::Whitespace => false,
        }
    }

    /// Whether `try_add(glyph)` would succeed.
    pub fn can_add(&self, glyph: Glyph) -> bool {
        match glyph.category() {
            GlyphCategory::Letter => self.can_add_letter(glyph),
            GlyphCategory::Accent => glyph.as_accent().is_some_and(|a| self.can_add_accent(a)),
            GlyphCategory::Breathing => glyph
                .as_breathing()
                .is_some_and(|b| self.can_add_breathing(b)),
            GlyphCategory::LengthSign if glyph == Glyph::Macron => self.can_add_macron(),
            GlyphCategory::LengthSign => self.can_add_breve(),
            GlyphCategory::Diaeresis => self.can_add_diaeresis(),
            GlyphCategory::IotaSubscript => self.can_add_iota_subscript(),
            GlyphCategory::Capitalization => self.can_capitalize(),
            GlyphCategory::Termination => self.can_make_terminal(),
            GlyphCategory::Punctuation | GlyphCategory::Whitespace => false,
        }
    }

    // ------------------------------------------------------------------
    // Slot predicates
    // ------------------------------------------------------------------

    /// A letter fits if none is set and it admits every mark already present.
    pub fn can_add_letter(&self, letter: Glyph) -> bool {
        self.letter.is_none()
            && letter.is_letter()
            && self.accent.is_none_or(|a| letter.can_have_accent(a))
            && (self.breathing.is_none() || letter.can_have_breathing())
            && (!self.iota_subscript || letter.can_have_iota_subscript())
            && (!self.has_length_sign() || letter.can_have_length_sign())
            && (!self.diaeresis || letter.can_have_diaeresis())
    }

    pub fn can_add_accent(&self, accent: Accent) -> bool {
        self.accent.is_none() && self.letter.is_none_or(|l| l.can_have_accent(accent))
    }

    pub fn can_add_breathing(&self, _breathing: Breathing) -> bool {
        self.breathing.is_none()
            && !self.diaeresis
            && self.letter.is_none_or(|l| l.can_have_breathing())
    }

    pub fn can_capitalize(&self) -> bool {
        !self.capital
    }

    pub fn can_add_iota_subscript(&self) -> bool {
        !self.iota_subscript && self.letter.is_none_or(|l| l.can_have_iota_subscript())
    }

    pub fn can_add_macron(&self) -> bool {
        !self.has_length_sign() && self.letter.is_none_or(|l| l.can_have_length_sign())
    }

    pub fn can_add_breve(&self) -> bool {
        self.can_add_macron()
    }

    pub fn can_add_diaeresis(&self) -> bool {
        !self.diaeresis
            && self.breathing.is_none()
            && self.letter.is_none_or(|l| l.can_have_diaeresis())
    }

    pub fn can_make_terminal(&self) -> bool {
        !self.terminal
    }

    // ------------------------------------------------------------------
    // Slot mutators
    // ------------------------------------------------------------------

    pub fn try_add_letter(&mut self, letter: Glyph) -> bool {
        let ok = self.can_add_letter(letter);
        if ok {
            self.letter = Some(letter);
        }
        ok
    }

    pub fn try_add_accent(&mut self, accent: Accent) -> bool {
        let ok = self.can_add_accent(accent);
        if ok {
            self.accent = Some(accent);
        }
        ok
    }

    pub fn try_add_breathing(&mut self, breathing: Breathing) -> bool {
        let ok = self.can_add_breathing(breathing);
        if ok {
            self.breathing = Some(breathing);
        }
        ok
    }

    pub fn try_capitalize(&mut self) -> bool {
        let ok = self.can_capitalize();
        self.capital |= ok;
        ok
    }

    pub fn try_add_iota_subscript(&mut self) -> bool {
        let ok = self.can_add_iota_subscript();
        self.iota_subscript |= ok;
        ok
    }

    pub fn try_add_macron(&mut self) -> bool {
        let ok = self.can_add_macron();
        self.macron |= ok;
        ok
    }

    pub fn try_add_breve(&mut self) -> bool {
        let ok = self.can_add_breve();
        self.breve |= ok;
        ok
    }

    pub fn try_add_diaeresis(&mut self) -> bool {
        let ok = self.can_add_diaeresis();
        self.diaeresis |= ok;
        ok
    }

    pub fn try_make_terminal(&mut self) -> bool {
        let ok = self.can_make_terminal();
        self.terminal |= ok;
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(glyphs: &[Glyph]) -> Grapheme {
        let mut g = Grapheme::new();
        for &glyph in glyphs {
            assert!(g.try_add(glyph), "could not add {:?} to {:?}", glyph, g);
        }
        g
    }

    #[test]
    fn test_from_letter() {
        let g = Grapheme::from_letter(Glyph::Omega).unwrap();
        assert_eq!(g.letter(), Some(Glyph::Omega));
        assert!(!g.is_capital());
        assert_eq!(Some(g), Grapheme::from_beta("w"));
        assert_eq!(Grapheme::from_letter(Glyph::Acute), None);
        assert_eq!(Grapheme::from_letter(Glyph::Comma), None);
    }

    #[test]
    fn test_order_of_addition_does_not_matter() {
        let a = build(&[Glyph::SmoothBreathing, Glyph::Alpha, Glyph::Acute, Glyph::IotaSubscript]);
        let b = build(&[Glyph::Alpha, Glyph::SmoothBreathing, Glyph::Acute, Glyph::IotaSubscript]);
        let c = build(&[Glyph::Alpha, Glyph::RoughBreathing, Glyph::IotaSubscript, Glyph::Acute]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_filled_slot_is_never_overwritten() {
        let mut g = build(&[Glyph::Alpha, Glyph::Acute]);
        assert!(!g.try_add(Glyph::Grave));
        assert!(!g.try_add(Glyph::Beta));
        assert_eq!(g.accent(), Some(Accent::Acute));
        assert_eq!(g.letter(), Some(Glyph::Alpha));
    }

    #[test]
    fn test_failed_add_leaves_grapheme_unchanged() {
        let mut g = build(&[Glyph::Epsilon]);
        let before = g;
        assert!(!g.try_add(Glyph::Circumflex));
        assert_eq!(g, before);
        assert!(!g.try_add(Glyph::Circumflex));
        assert_eq!(g, before);
    }

    #[test]
    fn test_letter_must_admit_existing_marks() {
        let g = build(&[Glyph::Circumflex]);
        assert!(!g.can_add_letter(Glyph::Omicron));
        assert!(g.can_add_letter(Glyph::Omega));

        let g = build(&[Glyph::IotaSubscript]);
        assert!(!g.can_add_letter(Glyph::Epsilon));
        assert!(g.can_add_letter(Glyph::Eta));

        let g = build(&[Glyph::Macron]);
        assert!(!g.can_add_letter(Glyph::Eta));
        assert!(g.can_add_letter(Glyph::Iota));

        let g = build(&[Glyph::RoughBreathing]);
        assert!(g.can_add_letter(Glyph::Rho));
        assert!(!g.can_add_letter(Glyph::Sigma));
    }

    #[test]
    fn test_breathing_and_diaeresis_exclude_each_other() {
        let mut g = build(&[Glyph::Iota, Glyph::Diaeresis]);
        assert!(!g.try_add(Glyph::SmoothBreathing));
        let mut g2 = build(&[Glyph::Upsilon, Glyph::RoughBreathing]);
        assert!(!g2.try_add(Glyph::Diaeresis));
        assert!(!g.has_length_sign());
    }

    #[test]
    fn test_macron_and_breve_share_a_slot() {
        let mut g = build(&[Glyph::Alpha, Glyph::Macron]);
        assert!(!g.try_add(Glyph::Breve));
        assert!(g.has_macron() && !g.has_breve());
    }

    #[test]
    fn test_flags_set_once() {
        let mut g = build(&[Glyph::Capitalization, Glyph::Termination]);
        assert!(!g.try_add(Glyph::Capitalization));
        assert!(!g.try_add(Glyph::Termination));
        assert!(g.try_add(Glyph::Sigma));
        assert!(g.is_capital() && g.is_terminal());
    }

    #[test]
    fn test_punctuation_never_fits() {
        let g = Grapheme::new();
        assert!(!g.can_add(Glyph::Comma));
        assert!(!g.can_add(Glyph::Space));
        assert!(g.is_empty());
    }

    #[test]
    fn test_from_beta() {
        let g = Grapheme::from_beta("a)/|").unwrap();
        assert_eq!(g.letter(), Some(Glyph::Alpha));
        assert_eq!(g.breathing(), Some(Breathing::Smooth));
        assert_eq!(g.accent(), Some(Accent::Acute));
        assert!(g.has_iota_subscript());
        assert_eq!(Grapheme::from_beta("ab"), None);
        assert_eq!(Grapheme::from_beta(""), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let g = Grapheme::from_beta("w(=|").unwrap();
        let json = serde_json::to_string(&g).unwrap();
        let back: Grapheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, g);
    }
}
