// The definite article.
//
// Loaded from `data/definite_article.json`: for each gender, the forms of
// each case by number, in phono code. The unaccented forms (ὁ, ἡ, οἱ, αἱ)
// are proclitics and are marked as such on load.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::debug;

use crate::TableError;
use crate::grammar::{Case, Gender, NominalForm, Number};
use crate::morpheme::{CliticType, Morpheme};

#[derive(Debug, Deserialize)]
struct ArticleFile {
    forms: BTreeMap<Gender, BTreeMap<Number, BTreeMap<Case, String>>>,
}

/// Article forms keyed by case, number, and gender.
#[derive(Debug, Clone, Default)]
pub struct ArticleTable {
    forms: BTreeMap<NominalForm, Morpheme>,
}

impl ArticleTable {
    /// Parse an article table from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, TableError> {
        let file: ArticleFile = serde_json::from_str(json)?;
        let mut forms = BTreeMap::new();
        for (&gender, numbers) in &file.forms {
            for (&number, cases) in numbers {
                for (&case, code) in cases {
                    let mut morpheme = Morpheme::from_phono_code(code)
                        .ok_or_else(|| TableError::BadPhonoCode { code: code.clone() })?;
                    // Only succeeds when the form is unaccented.
                    morpheme.try_set_clitic(CliticType::Proclitic);
                    forms.insert(NominalForm::new(case, number, gender), morpheme);
                }
            }
        }
        debug!(count = forms.len(), "loaded definite article");
        Ok(Self { forms })
    }

    pub fn get(&self, form: &NominalForm) -> Option<&Morpheme> {
        self.forms.get(form)
    }

    /// All forms, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&NominalForm, &Morpheme)> {
        self.forms.iter()
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

/// Load the default article table embedded at compile time.
///
/// Panics if the embedded JSON is malformed.
pub fn default_article() -> ArticleTable {
    let json = include_str!("../../data/definite_article.json");
    ArticleTable::from_json(json).expect("embedded definite_article.json is malformed")
}
