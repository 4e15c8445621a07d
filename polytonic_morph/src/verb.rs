// Verb endings and lexical verb classes.
//
// `EndingTable` maps a `VerbForm` to its ending morpheme. It is loaded from
// JSON (`data/verb_endings.json`), one block per tense/voice/mood with the
// endings spelled in phono code by number and person:
//
//   { "tense": "present", "voices": ["active"], "mood": "indicative",
//     "singular": { "first": "o:", ... }, "plural": { ... } }
//
// A lexical verb is anything implementing `VerbLexeme`: given the ending
// table and a form key it produces the form's morpheme, or nothing when the
// lexeme has no such form. Three implementations:
//
// - `ThematicVerb`: stem + ending with a recessive accent. Contract stems
//   are accented first and then contracted at the boundary.
// - `IrregularForms`: an explicit form list, for forms no rule predicts.
// - `MixedVerb`: ordered layers; the first layer that provides a form wins.
//
// See also: `morpheme.rs` (`ContractingMorpheme`), `grammar.rs` for the keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::TableError;
use crate::grammar::{Mood, Number, Person, Tense, Voice, VerbForm};
use crate::morpheme::{ContractingMorpheme, Morpheme};

// ---------------------------------------------------------------------------
// Ending table
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct EndingFile {
    paradigms: Vec<EndingBlock>,
}

#[derive(Debug, Deserialize)]
struct EndingBlock {
    tense: Tense,
    voices: Vec<Voice>,
    mood: Mood,
    #[serde(default)]
    singular: BTreeMap<Person, String>,
    #[serde(default)]
    plural: BTreeMap<Person, String>,
}

/// Verb endings keyed by form.
#[derive(Debug, Clone, Default)]
pub struct EndingTable {
    endings: BTreeMap<VerbForm, Morpheme>,
}

impl EndingTable {
    /// Parse an ending table from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let file: EndingFile = serde_json::from_str(json)?;
        let mut endings = BTreeMap::new();
        for block in &file.paradigms {
            let numbered = [
                (Number::Singular, &block.singular),
                (Number::Plural, &block.plural),
            ];
            for (number, persons) in numbered {
                for (&person, code) in persons {
                    let morpheme = Morpheme::from_phono_code(code)
                        .ok_or_else(|| TableError::BadPhonoCode { code: code.clone() })?;
                    for &voice in &block.voices {
                        let form = VerbForm::new(block.tense, voice, block.mood, person, number);
                        endings.insert(form, morpheme.clone());
                    }
                }
            }
        }
        debug!(count = endings.len(), "loaded verb endings");
        Ok(Self { endings })
    }

    pub fn get(&self, form: &VerbForm) -> Option<&Morpheme> {
        self.endings.get(form)
    }

    /// Forms with an ending, in key order.
    pub fn forms(&self) -> impl Iterator<Item = &VerbForm> {
        self.endings.keys()
    }

    pub fn len(&self) -> usize {
        self.endings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endings.is_empty()
    }
}

/// Load the default ending table embedded at compile time.
///
/// Panics if the embedded JSON is malformed.
pub fn default_endings() -> EndingTable {
    let json = include_str!("../../data/verb_endings.json");
    EndingTable::from_json(json).expect("embedded verb_endings.json is malformed")
}

// ---------------------------------------------------------------------------
// Lexical verbs
// ---------------------------------------------------------------------------

/// One inflected form of a lexical verb.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConjugatedForm {
    pub form: VerbForm,
    pub morpheme: Morpheme,
}

impl ConjugatedForm {
    pub fn to_unicode(&self) -> Option<String> {
        self.morpheme.to_unicode(true)
    }
}

/// A lexical verb.
pub trait VerbLexeme {
    /// The morpheme for a form, if the lexeme has that form.
    fn morpheme(&self, endings: &EndingTable, form: &VerbForm) -> Option<Morpheme>;

    fn conjugate(&self, endings: &EndingTable, form: &VerbForm) -> Option<ConjugatedForm> {
        let morpheme = self.morpheme(endings, form)?;
        Some(ConjugatedForm {
            form: *form,
            morpheme,
        })
    }

    /// Every form the lexeme provides, in key order.
    fn paradigm(&self, endings: &EndingTable) -> Vec<ConjugatedForm> {
        VerbForm::all()
            .filter_map(|form| self.conjugate(endings, &form))
            .collect()
    }
}

/// How a thematic stem joins its endings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StemClass {
    #[default]
    Uncontracted,
    /// Stems in a, e, o that contract with the ending's vowel.
    Contracted,
}

/// A thematic verb: one stem plus the regular endings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThematicVerb {
    stem: Morpheme,
    class: StemClass,
}

impl ThematicVerb {
    pub fn new(stem: Morpheme, class: StemClass) -> Self {
        Self { stem, class }
    }

    pub fn from_phono_code(stem: &str, class: StemClass) -> Option<Self> {
        Some(Self::new(Morpheme::from_phono_code(stem)?, class))
    }

    pub fn stem(&self) -> &Morpheme {
        &self.stem
    }

    pub fn class(&self) -> StemClass {
        self.class
    }
}

impl VerbLexeme for ThematicVerb {
    fn morpheme(&self, endings: &EndingTable, form: &VerbForm) -> Option<Morpheme> {
        let Some(ending) = endings.get(form) else {
            trace!(%form, "no ending");
            return None;
        };
        match self.class {
            StemClass::Uncontracted => {
                let mut word = self.stem.plus(ending);
                word.throw_back_pitch();
                Some(word)
            }
            StemClass::Contracted => {
                let mut word = ContractingMorpheme::new(&self.stem, ending);
                word.throw_back_pitch();
                word.contract();
                Some(word.into_morpheme())
            }
        }
    }
}

/// Explicitly listed forms, used as a layer of a `MixedVerb`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrregularForms {
    forms: BTreeMap<VerbForm, Morpheme>,
}

impl IrregularForms {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, form: VerbForm, morpheme: Morpheme) {
        self.forms.insert(form, morpheme);
    }
}

impl VerbLexeme for IrregularForms {
    fn morpheme(&self, _endings: &EndingTable, form: &VerbForm) -> Option<Morpheme> {
        self.forms.get(form).cloned()
    }
}

/// A verb built from layers. Layers added earlier mask later ones for the
/// forms they provide.
#[derive(Default)]
pub struct MixedVerb {
    layers: Vec<Box<dyn VerbLexeme>>,
}

impl MixedVerb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_layer(&mut self, layer: impl VerbLexeme + 'static) {
        self.layers.push(Box::new(layer));
    }

    pub fn with_layer(mut self, layer: impl VerbLexeme + 'static) -> Self {
        self.add_layer(layer);
        self
    }
}

impl VerbLexeme for MixedVerb {
    fn morpheme(&self, endings: &EndingTable, form: &VerbForm) -> Option<Morpheme> {
        self.layers
            .iter()
            .find_map(|layer| layer.morpheme(endings, form))
    }
}
