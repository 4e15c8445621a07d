// The `betacode` command-line tool.
//
// Line-oriented front end over `polytonic_script` and `polytonic_morph`.
// Every text subcommand takes its input either as one argument or from
// stdin, one line at a time; a line that cannot be converted prints as an
// empty line so output stays aligned with input.
//
// Subcommands:
// - `beta`: beta code to Unicode under a recovery policy (default
//   best-effort).
// - `phono`: phono code to Unicode.
// - `decode`: Unicode to beta code.
// - `inspect`: JSON dump of the graphemes a beta code string parses into.
// - `conjugate`: the shipped paradigm of a thematic verb stem.
// - `article`: the definite article table.
//
// Argument parsing lives here rather than in `main.rs` so the command
// logic can be driven from tests with in-memory readers and writers.

use std::io::{BufRead, Write};

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info};

use polytonic_morph::{
    Morpheme, StemClass, ThematicVerb, VerbLexeme, default_article, default_endings,
};
use polytonic_script::{Grapheme, PolicyKind, beta_code, convert, unicode};

#[derive(Debug, Parser)]
#[command(
    name = "betacode",
    version,
    about = "Convert between beta code, phono code, and polytonic Greek"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert beta code to precomposed Unicode.
    Beta {
        /// Recovery policy: strict, best-effort, or terminating.
        #[arg(long, default_value = "best-effort")]
        policy: PolicyKind,
        /// Text to convert. Reads stdin line by line if absent.
        text: Option<String>,
    },
    /// Convert phono code to Unicode.
    Phono {
        /// Do not mark the last letter as word-final.
        #[arg(long)]
        no_terminate: bool,
        /// Code to convert. Reads stdin line by line if absent.
        code: Option<String>,
    },
    /// Transliterate Unicode Greek back to beta code.
    Decode {
        /// Text to transliterate. Reads stdin line by line if absent.
        text: Option<String>,
    },
    /// Show the graphemes and codepoints of a beta code string as JSON.
    Inspect {
        /// Beta code; must parse strictly.
        beta: String,
    },
    /// Conjugate a thematic verb stem given in phono code.
    Conjugate {
        /// Stem in phono code, e.g. `lu` or `poie`.
        stem: String,
        /// The stem contracts with the ending's vowel.
        #[arg(long)]
        contract: bool,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print the definite article.
    Article {
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("stem {0:?} is not valid phono code")]
    BadStem(String),
    #[error("{0:?} is not valid beta code")]
    BadBeta(String),
}

/// Run one subcommand against the given input and output streams.
pub fn run(command: &Command, input: impl BufRead, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Beta { policy, text } => {
            let policy = *policy;
            debug!(%policy, "converting beta code");
            for_each_line(text.as_deref(), input, out, |line| {
                convert(&policy, line).unwrap_or_default()
            })
        }
        Command::Phono { no_terminate, code } => {
            let terminate = !no_terminate;
            for_each_line(code.as_deref(), input, out, |line| {
                Morpheme::from_phono_code(line)
                    .and_then(|m| m.to_unicode(terminate))
                    .unwrap_or_default()
            })
        }
        Command::Decode { text } => {
            for_each_line(text.as_deref(), input, out, unicode::to_beta_code)
        }
        Command::Inspect { beta } => {
            let graphemes =
                beta_code::parse(beta).ok_or_else(|| CliError::BadBeta(beta.clone()))?;
            let report: Vec<InspectedGrapheme> =
                graphemes.iter().map(InspectedGrapheme::new).collect();
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            Ok(())
        }
        Command::Conjugate {
            stem,
            contract,
            json,
        } => {
            let class = if *contract {
                StemClass::Contracted
            } else {
                StemClass::Uncontracted
            };
            let verb = ThematicVerb::from_phono_code(stem, class)
                .ok_or_else(|| CliError::BadStem(stem.clone()))?;
            let paradigm = verb.paradigm(&default_endings());
            info!(stem = %stem, forms = paradigm.len(), "conjugated");
            if *json {
                let rows: Vec<FormRow> = paradigm
                    .iter()
                    .map(|f| FormRow {
                        form: f.form.to_string(),
                        phonemes: f.morpheme.to_string(),
                        text: f.to_unicode(),
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &rows)?;
                writeln!(out)?;
            } else {
                for f in &paradigm {
                    writeln!(out, "{}\t{}", f.form, f.to_unicode().unwrap_or_default())?;
                }
            }
            Ok(())
        }
        Command::Article { json } => {
            let table = default_article();
            if *json {
                let rows: Vec<FormRow> = table
                    .iter()
                    .map(|(form, m)| FormRow {
                        form: form.to_string(),
                        phonemes: m.to_string(),
                        text: m.to_unicode(true),
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &rows)?;
                writeln!(out)?;
            } else {
                for (form, m) in table.iter() {
                    writeln!(out, "{}\t{}", form, m.to_unicode(true).unwrap_or_default())?;
                }
            }
            Ok(())
        }
    }
}

/// Apply `f` to the argument, or to each line of `input` if there is none.
fn for_each_line(
    arg: Option<&str>,
    input: impl BufRead,
    out: &mut impl Write,
    mut f: impl FnMut(&str) -> String,
) -> Result<(), CliError> {
    if let Some(arg) = arg {
        writeln!(out, "{}", f(arg))?;
        return Ok(());
    }
    for line in input.lines() {
        writeln!(out, "{}", f(&line?))?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct InspectedGrapheme {
    beta: String,
    grapheme: Grapheme,
    unicode: Option<char>,
    codepoint: Option<String>,
}

impl InspectedGrapheme {
    fn new(g: &Grapheme) -> Self {
        let unicode = unicode::grapheme_to_char(g);
        Self {
            beta: beta_code::encode(g),
            grapheme: *g,
            unicode,
            codepoint: unicode.map(|c| format!("U+{:04X}", c as u32)),
        }
    }
}

#[derive(Debug, Serialize)]
struct FormRow {
    form: String,
    phonemes: String,
    text: Option<String>,
}
