// Greek phonology and morphology on top of `polytonic_script`.
//
// Words are built from sound, not spelling: a morpheme is a sequence of
// phonemes with pitch accents, written in ASCII phono code (`lu/o:`,
// `poie`, `ho`). Morphemes are joined, accented, and contracted at the
// phoneme level, then lowered to graphemes and Unicode text.
//
// Architecture:
// - `phoneme.rs`: the `Phoneme` set, its classes, and the closed
//   combination and modifier tables.
// - `contraction.rs`: the vowel contraction table.
// - `pitch.rs`: `PitchedPhoneme`, which carries an accent through
//   combination and contraction.
// - `phono_code.rs`: the phono code parser.
// - `morpheme.rs`: `Morpheme` (concatenation, recessive accent, lowering)
//   and `ContractingMorpheme`.
// - `grammar.rs`: category keys (`VerbForm`, `NominalForm`).
// - `verb.rs`: the ending table and lexical verb classes.
// - `article.rs`: the definite article table.
//
// Like `polytonic_script`, expected domain failures are `None`. Only loading
// the JSON tables has a real error type, `TableError`. The default tables are
// embedded from `data/` with `include_str!`.

pub mod article;
pub mod contraction;
pub mod grammar;
pub mod morpheme;
pub mod phono_code;
pub mod phoneme;
pub mod pitch;
pub mod verb;

pub use article::{ArticleTable, default_article};
pub use grammar::{Aspect, Case, Gender, Mood, NominalForm, Number, Person, Tense, VerbForm, Voice};
pub use morpheme::{CliticType, ContractingMorpheme, Morpheme};
pub use phoneme::{Modifier, Phoneme};
pub use pitch::{PhonoObject, Pitch, PitchedPhoneme};
pub use verb::{
    ConjugatedForm, EndingTable, IrregularForms, MixedVerb, StemClass, ThematicVerb, VerbLexeme,
    default_endings,
};

/// Failure to load a data table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("malformed table JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("phono code {code:?} does not parse")]
    BadPhonoCode { code: String },
}
