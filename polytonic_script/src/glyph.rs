// Glyph catalog: the atomic symbols that graphemes are built from.
//
// A `Glyph` is one of the closed set of symbol kinds that beta code can
// express: the 24 letters of the classical alphabet plus digamma, the
// polytonic diacritics (accents, breathings, length signs, diaeresis, iota
// subscript), two meta-markers (capitalization and word-final termination),
// punctuation, and whitespace. Each glyph belongs to exactly one
// `GlyphCategory`.
//
// The composability predicates here (`can_have_accent`, `can_have_breathing`,
// and friends) are the per-letter half of the grapheme well-formedness rules.
// `grapheme.rs` combines them with the slot-level rules.
//
// See also: `grapheme.rs` for the composite, `beta_code.rs` for the ASCII
// character assigned to each glyph.

use serde::{Deserialize, Serialize};

/// The category a glyph belongs to. Determines which grapheme slot it fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlyphCategory {
    Letter,
    Accent,
    Breathing,
    LengthSign,
    Diaeresis,
    IotaSubscript,
    Capitalization,
    Termination,
    Punctuation,
    Whitespace,
}

/// Pitch accent marks as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Grave,
    Acute,
    Circumflex,
}

impl Accent {
    pub const ALL: [Accent; 3] = [Accent::Grave, Accent::Acute, Accent::Circumflex];

    /// The diacritic glyph for this accent.
    pub fn glyph(self) -> Glyph {
        match self {
            Accent::Grave => Glyph::Grave,
            Accent::Acute => Glyph::Acute,
            Accent::Circumflex => Glyph::Circumflex,
        }
    }
}

/// Breathing marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Breathing {
    Smooth,
    Rough,
}

impl Breathing {
    pub const ALL: [Breathing; 2] = [Breathing::Smooth, Breathing::Rough];

    /// The diacritic glyph for this breathing.
    pub fn glyph(self) -> Glyph {
        match self {
            Breathing::Smooth => Glyph::SmoothBreathing,
            Breathing::Rough => Glyph::RoughBreathing,
        }
    }
}

/// An atomic symbol kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Glyph {
    // Letters, in alphabet order.
    Alpha,
    Beta,
    Gamma,
    Delta,
    Epsilon,
    Zeta,
    Eta,
    Theta,
    Iota,
    Kappa,
    Lambda,
    Mu,
    Nu,
    Xi,
    Omicron,
    Pi,
    Rho,
    Sigma,
    Tau,
    Upsilon,
    Phi,
    Chi,
    Psi,
    Omega,
    Digamma,

    // Diacritics.
    Acute,
    Grave,
    Circumflex,
    SmoothBreathing,
    RoughBreathing,
    IotaSubscript,
    Macron,
    Breve,
    Diaeresis,

    // Meta-markers.
    Capitalization,
    Termination,

    // Punctuation.
    Period,
    Comma,
    QuestionMark,
    Semicolon,
    Apostrophe,
    LeftParenthesis,
    RightParenthesis,
    Hyphen,
    Dash,
    LeftSingleQuote,
    RightSingleQuote,

    // Whitespace.
    Space,
    Newline,
}

impl Glyph {
    /// The letters in alphabet order (digamma last).
    pub const LETTERS: [Glyph; 25] = [
        Glyph::Alpha,
        Glyph::Beta,
        Glyph::Gamma,
        Glyph::Delta,
        Glyph::Epsilon,
        Glyph::Zeta,
        Glyph::Eta,
        Glyph::Theta,
        Glyph::Iota,
        Glyph::Kappa,
        Glyph::Lambda,
        Glyph::Mu,
        Glyph::Nu,
        Glyph::Xi,
        Glyph::Omicron,
        Glyph::Pi,
        Glyph::Rho,
        Glyph::Sigma,
        Glyph::Tau,
        Glyph::Upsilon,
        Glyph::Phi,
        Glyph::Chi,
        Glyph::Psi,
        Glyph::Omega,
        Glyph::Digamma,
    ];

    /// Every glyph in declaration order.
    pub const ALL: [Glyph; 49] = [
        Glyph::Alpha,
        Glyph::Beta,
        Glyph::Gamma,
        Glyph::Delta,
        Glyph::Epsilon,
        Glyph::Zeta,
        Glyph::Eta,
        Glyph::Theta,
        Glyph::Iota,
        Glyph::Kappa,
        Glyph::Lambda,
        Glyph::Mu,
        Glyph::Nu,
        Glyph::Xi,
        Glyph::Omicron,
        Glyph::Pi,
        Glyph::Rho,
        Glyph::Sigma,
        Glyph::Tau,
        Glyph::Upsilon,
        Glyph::Phi,
        Glyph::Chi,
        Glyph::Psi,
        Glyph::Omega,
        Glyph::Digamma,
        Glyph::Acute,
        Glyph::Grave,
        Glyph::Circumflex,
        Glyph::SmoothBreathing,
        Glyph::RoughBreathing,
        Glyph::IotaSubscript,
        Glyph::Macron,
        Glyph::Breve,
        Glyph::Diaeresis,
        Glyph::Capitalization,
        Glyph::Termination,
        Glyph::Period,
        Glyph::Comma,
        Glyph::QuestionMark,
        Glyph::Semicolon,
        Glyph::Apostrophe,
        Glyph::LeftParenthesis,
        Glyph::RightParenthesis,
        Glyph::Hyphen,
        Glyph::Dash,
        Glyph::LeftSingleQuote,
        Glyph::RightSingleQuote,
        Glyph::Space,
        Glyph::Newline,
    ];

    pub fn category(self) -> GlyphCategory {
        use Glyph::*;
        match self {
            Alpha | Beta | Gamma | Delta | Epsilon | Zeta | Eta | Theta | Iota | Kappa
            | Lambda | Mu | Nu | Xi | Omicron | Pi | Rho | Sigma | Tau | Upsilon | Phi | Chi
            | Psi | Omega | Digamma => GlyphCategory::Letter,
            Acute | Grave | Circumflex => GlyphCategory::Accent,
            SmoothBreathing | RoughBreathing => GlyphCategory::Breathing,
            Macron | Breve => GlyphCategory::LengthSign,
            Diaeresis => GlyphCategory::Diaeresis,
            IotaSubscript => GlyphCategory::IotaSubscript,
            Capitalization => GlyphCategory::Capitalization,
            Termination => GlyphCategory::Termination,
            Period | Comma | QuestionMark | Semicolon | Apostrophe | LeftParenthesis
            | RightParenthesis | Hyphen | Dash | LeftSingleQuote | RightSingleQuote => {
                GlyphCategory::Punctuation
            }
            Space | Newline => GlyphCategory::Whitespace,
        }
    }

    /// Position in the alphabet (alpha = 0, omega = 23, digamma = 24).
    pub fn letter_index(self) -> Option<usize> {
        Glyph::LETTERS.iter().position(|&g| g == self)
    }

    pub fn is_letter(self) -> bool {
        self.category() == GlyphCategory::Letter
    }

    pub fn is_vowel(self) -> bool {
        matches!(
            self,
            Glyph::Alpha
                | Glyph::Epsilon
                | Glyph::Eta
                | Glyph::Iota
                | Glyph::Omicron
                | Glyph::Upsilon
                | Glyph::Omega
        )
    }

    pub fn is_consonant(self) -> bool {
        self.is_letter() && !self.is_vowel()
    }

    /// Epsilon and omicron: vowels that are always short.
    pub fn is_short_vowel(self) -> bool {
        matches!(self, Glyph::Epsilon | Glyph::Omicron)
    }

    /// Eta and omega: vowels that are always long.
    pub fn is_long_vowel(self) -> bool {
        matches!(self, Glyph::Eta | Glyph::Omega)
    }

    pub fn is_diacritic(self) -> bool {
        matches!(
            self.category(),
            GlyphCategory::Accent
                | GlyphCategory::Breathing
                | GlyphCategory::LengthSign
                | GlyphCategory::Diaeresis
                | GlyphCategory::IotaSubscript
        )
    }

    pub fn is_accent(self) -> bool {
        self.category() == GlyphCategory::Accent
    }

    pub fn is_breathing(self) -> bool {
        self.category() == GlyphCategory::Breathing
    }

    /// Macron or breve.
    pub fn is_length_sign(self) -> bool {
        self.category() == GlyphCategory::LengthSign
    }

    pub fn is_punctuation(self) -> bool {
        self.category() == GlyphCategory::Punctuation
    }

    pub fn is_whitespace(self) -> bool {
        self.category() == GlyphCategory::Whitespace
    }

    /// The typed accent for an accent glyph.
    pub fn as_accent(self) -> Option<Accent> {
        match self {
            Glyph::Grave => Some(Accent::Grave),
            Glyph::Acute => Some(Accent::Acute),
            Glyph::Circumflex => Some(Accent::Circumflex),
            _ => None,
        }
    }

    /// The typed breathing for a breathing glyph.
    pub fn as_breathing(self) -> Option<Breathing> {
        match self {
            Glyph::SmoothBreathing => Some(Breathing::Smooth),
            Glyph::RoughBreathing => Some(Breathing::Rough),
            _ => None,
        }
    }

    /// Whether this letter can carry the given accent. A circumflex needs a
    /// vowel that can be long.
    pub fn can_have_accent(self, accent: Accent) -> bool {
        match accent {
            Accent::Acute | Accent::Grave => self.is_vowel(),
            Accent::Circumflex => self.is_vowel() && !self.is_short_vowel(),
        }
    }

    /// Vowels and rho take breathings.
    pub fn can_have_breathing(self) -> bool {
        self.is_vowel() || self == Glyph::Rho
    }

    pub fn can_have_iota_subscript(self) -> bool {
        matches!(self, Glyph::Alpha | Glyph::Eta | Glyph::Omega)
    }

    /// Alpha, iota and upsilon are the vowels of ambiguous length.
    pub fn can_have_length_sign(self) -> bool {
        matches!(self, Glyph::Alpha | Glyph::Iota | Glyph::Upsilon)
    }

    pub fn can_have_diaeresis(self) -> bool {
        matches!(self, Glyph::Iota | Glyph::Upsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_glyph_listed_once() {
        for (i, a) in Glyph::ALL.iter().enumerate() {
            for b in &Glyph::ALL[i + 1..] {
                assert_ne!(a, b, "{:?} listed twice", a);
            }
        }
        assert_eq!(
            Glyph::ALL.iter().filter(|g| g.is_letter()).count(),
            Glyph::LETTERS.len()
        );
    }

    #[test]
    fn test_letter_index() {
        assert_eq!(Glyph::Alpha.letter_index(), Some(0));
        assert_eq!(Glyph::Rho.letter_index(), Some(16));
        assert_eq!(Glyph::Omega.letter_index(), Some(23));
        assert_eq!(Glyph::Digamma.letter_index(), Some(24));
        assert_eq!(Glyph::Acute.letter_index(), None);
    }

    #[test]
    fn test_vowel_classes() {
        let vowels: Vec<Glyph> = Glyph::LETTERS.iter().copied().filter(|g| g.is_vowel()).collect();
        assert_eq!(vowels.len(), 7);
        for v in vowels {
            assert!(
                !(v.is_short_vowel() && v.is_long_vowel()),
                "{:?} cannot be both short and long",
                v
            );
        }
        assert!(Glyph::Epsilon.is_short_vowel());
        assert!(Glyph::Omega.is_long_vowel());
        assert!(!Glyph::Alpha.is_short_vowel() && !Glyph::Alpha.is_long_vowel());
    }

    #[test]
    fn test_circumflex_needs_potentially_long_vowel() {
        assert!(Glyph::Alpha.can_have_accent(Accent::Circumflex));
        assert!(Glyph::Omega.can_have_accent(Accent::Circumflex));
        assert!(!Glyph::Epsilon.can_have_accent(Accent::Circumflex));
        assert!(!Glyph::Omicron.can_have_accent(Accent::Circumflex));
        assert!(Glyph::Omicron.can_have_accent(Accent::Acute));
        assert!(!Glyph::Kappa.can_have_accent(Accent::Grave));
    }

    #[test]
    fn test_capabilities() {
        assert!(Glyph::Rho.can_have_breathing());
        assert!(!Glyph::Sigma.can_have_breathing());
        assert!(Glyph::Eta.can_have_iota_subscript());
        assert!(!Glyph::Iota.can_have_iota_subscript());
        assert!(Glyph::Upsilon.can_have_length_sign());
        assert!(!Glyph::Eta.can_have_length_sign());
        assert!(Glyph::Iota.can_have_diaeresis());
        assert!(!Glyph::Alpha.can_have_diaeresis());
    }

    #[test]
    fn test_typed_views() {
        for a in Accent::ALL {
            assert_eq!(a.glyph().as_accent(), Some(a));
            assert_eq!(a.glyph().category(), GlyphCategory::Accent);
        }
        for b in Breathing::ALL {
            assert_eq!(b.glyph().as_breathing(), Some(b));
        }
        assert_eq!(Glyph::Macron.as_accent(), None);
        assert!(Glyph::Circumflex.is_accent());
        assert!(Glyph::RoughBreathing.is_breathing());
        assert!(!Glyph::RoughBreathing.is_accent());
        assert!(Glyph::Breve.is_length_sign());
        assert!(!Glyph::Diaeresis.is_length_sign());
    }
}
