// Grammatical categories used as table keys.
//
// These are opaque keys for the ending and article tables: nothing in the
// phonology interprets them. They serialize as snake_case strings so the JSON
// data files under `data/` can name them directly.
//
// - Nominal: `Case`, `Number`, `Gender`, combined in `NominalForm`.
// - Verbal: `Tense` (with its `Aspect`), `Voice`, `Mood`, `Person`, `Number`,
//   combined in `VerbForm`.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Case {
    Nominative,
    Accusative,
    Genitive,
    Dative,
    Vocative,
}

impl Case {
    pub const ALL: [Case; 5] = [
        Case::Nominative,
        Case::Accusative,
        Case::Genitive,
        Case::Dative,
        Case::Vocative,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];
}

/// Verbal aspect: how the action is viewed, independent of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aspect {
    Imperfective,
    Perfective,
    Aorist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    Present,
    Future,
    Imperfect,
    Aorist,
    Perfect,
    Pluperfect,
    FuturePerfect,
}

impl Tense {
    pub const ALL: [Tense; 7] = [
        Tense::Present,
        Tense::Future,
        Tense::Imperfect,
        Tense::Aorist,
        Tense::Perfect,
        Tense::Pluperfect,
        Tense::FuturePerfect,
    ];

    pub fn aspect(self) -> Aspect {
        match self {
            Tense::Present | Tense::Future | Tense::Imperfect => Aspect::Imperfective,
            Tense::Aorist => Aspect::Aorist,
            Tense::Perfect | Tense::Pluperfect | Tense::FuturePerfect => Aspect::Perfective,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Voice {
    Active,
    Middle,
    Passive,
}

impl Voice {
    pub const ALL: [Voice; 3] = [Voice::Active, Voice::Middle, Voice::Passive];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Indicative,
    Subjunctive,
    Optative,
    Imperative,
}

impl Mood {
    pub const ALL: [Mood; 4] = [
        Mood::Indicative,
        Mood::Subjunctive,
        Mood::Optative,
        Mood::Imperative,
    ];
}

/// Key for a finite verb form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VerbForm {
    pub tense: Tense,
    pub voice: Voice,
    pub mood: Mood,
    pub person: Person,
    pub number: Number,
}

impl VerbForm {
    pub fn new(tense: Tense, voice: Voice, mood: Mood, person: Person, number: Number) -> Self {
        Self {
            tense,
            voice,
            mood,
            person,
            number,
        }
    }

    /// Every combination, in declaration order.
    pub fn all() -> impl Iterator<Item = VerbForm> {
        Tense::ALL.into_iter().flat_map(|t| {
            Voice::ALL.into_iter().flat_map(move |v| {
                Mood::ALL.into_iter().flat_map(move |m| {
                    Number::ALL.into_iter().flat_map(move |n| {
                        Person::ALL
                            .into_iter()
                            .map(move |p| VerbForm::new(t, v, m, p, n))
                    })
                })
            })
        })
    }
}

impl fmt::Display for VerbForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} {:?} {:?} {:?} {:?}",
            self.tense, self.voice, self.mood, self.person, self.number
        )
    }
}

/// Key for a declined form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NominalForm {
    pub case: Case,
    pub number: Number,
    pub gender: Gender,
}

impl NominalForm {
    pub fn new(case: Case, number: Number, gender: Gender) -> Self {
        Self {
            case,
            number,
            gender,
        }
    }
}

impl fmt::Display for NominalForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {:?} {:?}", self.gender, self.case, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tense_aspect() {
        assert_eq!(Tense::Present.aspect(), Aspect::Imperfective);
        assert_eq!(Tense::Imperfect.aspect(), Aspect::Imperfective);
        assert_eq!(Tense::Aorist.aspect(), Aspect::Aorist);
        assert_eq!(Tense::FuturePerfect.aspect(), Aspect::Perfective);
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Tense::FuturePerfect).unwrap();
        assert_eq!(json, "\"future_perfect\"");
        let parsed: Case = serde_json::from_str("\"dative\"").unwrap();
        assert_eq!(parsed, Case::Dative);
    }

    #[test]
    fn test_verb_form_deserialize() {
        let json = r#"{
            "tense": "present",
            "voice": "middle",
            "mood": "subjunctive",
            "person": "second",
            "number": "plural"
        }"#;
        let form: VerbForm = serde_json::from_str(json).unwrap();
        assert_eq!(
            form,
            VerbForm::new(
                Tense::Present,
                Voice::Middle,
                Mood::Subjunctive,
                Person::Second,
                Number::Plural
            )
        );
    }

    #[test]
    fn test_all_verb_forms_are_distinct() {
        let forms: Vec<VerbForm> = VerbForm::all().collect();
        assert_eq!(forms.len(), 7 * 3 * 4 * 2 * 3);
        let mut sorted = forms.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), forms.len());
    }
}
