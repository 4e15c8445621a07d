// Beta code tokenizer with pluggable recovery policies.
//
// The tokenizer makes one left-to-right pass. At each position it starts an
// empty grapheme and feeds it characters for as long as `try_add` accepts
// them (maximal munch, no backtracking). A character that cannot even start
// a grapheme is handed to the policy's `recover`, which may emit output and
// must move the cursor forward, or give up on the whole input.
//
// After tokenizing, a single terminal-marking pass asks the policy whether
// each lettered grapheme ends a word (which selects final sigma). Rendering
// then maps graphemes to codepoints; graphemes with no precomposed
// codepoint go to the policy's `fallback`.
//
// Policies:
// - `Strict`: every hook fails or declines. Default behaviour.
// - `BestEffort`: capitals, punctuation and unknown characters all recover;
//   unrenderable graphemes fall back to their beta code.
// - `Terminating`: strict tokenizing, but the last element is always
//   marked terminal.
//
// See also: `beta_code.rs` for the character table, `unicode.rs` for
// rendering.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use crate::beta_code;
use crate::glyph::Glyph;
use crate::grapheme::Grapheme;
use crate::unicode;

/// One element of tokenizer output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertedChar {
    /// A grapheme assembled from beta code.
    Grapheme(Grapheme),
    /// An input character passed through as-is.
    Passthrough(char),
    /// A punctuation mark rendered as `ch`, remembering its glyph.
    Punctuation { ch: char, glyph: Glyph },
}

impl ConvertedChar {
    pub fn grapheme(&self) -> Option<&Grapheme> {
        match self {
            ConvertedChar::Grapheme(g) => Some(g),
            _ => None,
        }
    }

    /// True for graphemes that have a base letter.
    pub fn has_letter(&self) -> bool {
        self.grapheme().is_some_and(Grapheme::has_letter)
    }

    /// The originating glyph of a punctuation element.
    pub fn glyph(&self) -> Option<Glyph> {
        match self {
            ConvertedChar::Punctuation { glyph, .. } => Some(*glyph),
            _ => None,
        }
    }

    /// The single character this element renders to, if any.
    pub fn to_char(&self) -> Option<char> {
        match self {
            ConvertedChar::Grapheme(g) => unicode::grapheme_to_char(g),
            ConvertedChar::Passthrough(ch) | ConvertedChar::Punctuation { ch, .. } => Some(*ch),
        }
    }
}

// ---------------------------------------------------------------------------
// Policies
// ---------------------------------------------------------------------------

/// Hooks that control how the tokenizer and renderer handle trouble.
///
/// The default bodies give strict behaviour: recovery fails, rendering
/// fallback fails, and nothing is marked terminal.
pub trait RecoveryPolicy {
    /// Handle `input[pos]`, which cannot start a grapheme. Returns the
    /// position to resume at (greater than `pos`), or `None` to fail the
    /// whole conversion.
    fn recover(&self, input: &[char], pos: usize, out: &mut Vec<ConvertedChar>) -> Option<usize> {
        let _ = (input, pos, out);
        None
    }

    /// Replacement text for an element with no Unicode rendering, or `None`
    /// to fail the whole conversion.
    fn fallback(&self, c: &ConvertedChar) -> Option<String> {
        let _ = c;
        None
    }

    /// Whether `curr` ends a word, given its neighbours.
    fn mark_terminal(
        &self,
        prev: Option<&ConvertedChar>,
        curr: &Grapheme,
        next: Option<&ConvertedChar>,
    ) -> bool {
        let _ = (prev, curr, next);
        false
    }
}

/// Fail on anything unexpected.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strict;

impl RecoveryPolicy for Strict {}

/// Recover from anything; never fail.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestEffort;

impl RecoveryPolicy for BestEffort {
    fn recover(&self, input: &[char], pos: usize, out: &mut Vec<ConvertedChar>) -> Option<usize> {
        let ch = input[pos];
        let lower = beta_code::glyph_for(ch.to_ascii_lowercase()).filter(|g| g.is_letter());

        if let (Some(letter), true) = (lower, ch.is_ascii_uppercase()) {
            // A capital may complete a preceding grapheme of bare
            // diacritics, e.g. ")A".
            let merged = match out.last_mut() {
                Some(ConvertedChar::Grapheme(prev)) => {
                    if prev.try_add_letter(letter) {
                        prev.try_capitalize();
                        Some(*prev)
                    } else {
                        None
                    }
                }
                _ => None,
            };
            let mut g = match merged {
                Some(prev) => {
                    out.pop();
                    prev
                }
                None => {
                    let mut g = Grapheme::from_letter(letter)?;
                    g.try_capitalize();
                    g
                }
            };
            let mut i = pos + 1;
            while i < input.len() && beta_code::glyph_for(input[i]).is_some_and(|gl| g.try_add(gl)) {
                i += 1;
            }
            trace!(ch = %ch, merged = merged.is_some(), "capital letter recovered");
            out.push(ConvertedChar::Grapheme(g));
            return Some(i);
        }

        match beta_code::glyph_for(ch) {
            Some(glyph) => match unicode::punctuation_char(glyph) {
                Some(uc) => out.push(ConvertedChar::Punctuation { ch: uc, glyph }),
                None => out.push(ConvertedChar::Passthrough(ch)),
            },
            None => {
                trace!(ch = %ch, "passing through unknown character");
                out.push(ConvertedChar::Passthrough(ch));
            }
        }
        Some(pos + 1)
    }

    fn fallback(&self, c: &ConvertedChar) -> Option<String> {
        Some(c.grapheme().map(beta_code::encode).unwrap_or_default())
    }

    fn mark_terminal(
        &self,
        prev: Option<&ConvertedChar>,
        _curr: &Grapheme,
        next: Option<&ConvertedChar>,
    ) -> bool {
        let prev_is_letter = prev.is_some_and(ConvertedChar::has_letter);
        let word_continues = next.is_some_and(|n| {
            n.has_letter() || matches!(n.glyph(), Some(Glyph::Apostrophe | Glyph::Hyphen))
        });
        prev_is_letter && !word_continues
    }
}

/// Strict tokenizing, but the final element is always terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct Terminating;

impl RecoveryPolicy for Terminating {
    fn mark_terminal(
        &self,
        _prev: Option<&ConvertedChar>,
        _curr: &Grapheme,
        next: Option<&ConvertedChar>,
    ) -> bool {
        next.is_none()
    }
}

/// Run-time selection of a policy, e.g. from a command-line flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolicyKind {
    #[default]
    Strict,
    BestEffort,
    Terminating,
}

impl PolicyKind {
    pub const ALL: [PolicyKind; 3] = [
        PolicyKind::Strict,
        PolicyKind::BestEffort,
        PolicyKind::Terminating,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Strict => "strict",
            PolicyKind::BestEffort => "best-effort",
            PolicyKind::Terminating => "terminating",
        }
    }

    fn policy(self) -> &'static dyn RecoveryPolicy {
        match self {
            PolicyKind::Strict => &Strict,
            PolicyKind::BestEffort => &BestEffort,
            PolicyKind::Terminating => &Terminating,
        }
    }
}

impl RecoveryPolicy for PolicyKind {
    fn recover(&self, input: &[char], pos: usize, out: &mut Vec<ConvertedChar>) -> Option<usize> {
        self.policy().recover(input, pos, out)
    }

    fn fallback(&self, c: &ConvertedChar) -> Option<String> {
        self.policy().fallback(c)
    }

    fn mark_terminal(
        &self,
        prev: Option<&ConvertedChar>,
        curr: &Grapheme,
        next: Option<&ConvertedChar>,
    ) -> bool {
        self.policy().mark_terminal(prev, curr, next)
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unrecognized policy name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown conversion policy '{0}' (expected strict, best-effort or terminating)")]
pub struct UnknownPolicy(pub String);

impl FromStr for PolicyKind {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownPolicy(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tokenizer and pipeline
// ---------------------------------------------------------------------------

/// Tokenize beta code. Empty input gives an empty sequence.
pub fn tokenize<P: RecoveryPolicy + ?Sized>(policy: &P, input: &str) -> Option<Vec<ConvertedChar>> {
    let chars: Vec<char> = input.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let mut g = Grapheme::new();
        if beta_code::glyph_for(chars[i]).is_some_and(|gl| g.try_add(gl)) {
            i += 1;
            while i < chars.len() && beta_code::glyph_for(chars[i]).is_some_and(|gl| g.try_add(gl)) {
                i += 1;
            }
            out.push(ConvertedChar::Grapheme(g));
        } else {
            match policy.recover(&chars, i, &mut out) {
                Some(next) if next > i => i = next,
                Some(_) => {
                    debug!(pos = i, "recovery did not advance; giving up");
                    return None;
                }
                None => {
                    debug!(pos = i, ch = %chars[i], "unrecoverable beta code character");
                    return None;
                }
            }
        }
    }

    mark_terminals(policy, &mut out);
    Some(out)
}

fn mark_terminals<P: RecoveryPolicy + ?Sized>(policy: &P, out: &mut [ConvertedChar]) {
    for i in 0..out.len() {
        if !out[i].has_letter() {
            continue;
        }
        let terminal = match &out[i] {
            ConvertedChar::Grapheme(curr) => {
                let prev = i.checked_sub(1).map(|p| &out[p]);
                policy.mark_terminal(prev, curr, out.get(i + 1))
            }
            _ => false,
        };
        if let (true, ConvertedChar::Grapheme(g)) = (terminal, &mut out[i]) {
            g.try_make_terminal();
        }
    }
}

/// Convert beta code to precomposed Unicode.
pub fn convert<P: RecoveryPolicy + ?Sized>(policy: &P, input: &str) -> Option<String> {
    let tokens = tokenize(policy, input)?;
    let mut out = String::with_capacity(input.len());
    for t in &tokens {
        match t.to_char() {
            Some(ch) => out.push(ch),
            None => match policy.fallback(t) {
                Some(s) => out.push_str(&s),
                None => {
                    debug!(token = ?t, "no Unicode codepoint for grapheme");
                    return None;
                }
            },
        }
    }
    Some(out)
}

/// The graphemes of a beta code string. Non-grapheme output of the policy
/// (punctuation, passthrough) is dropped.
pub fn to_graphemes<P: RecoveryPolicy + ?Sized>(policy: &P, input: &str) -> Option<Vec<Grapheme>> {
    Some(
        tokenize(policy, input)?
            .into_iter()
            .filter_map(|t| t.grapheme().copied())
            .collect(),
    )
}
