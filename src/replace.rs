//! Substitution primitives: what to look for and what to put in its place.

use std::fmt;
use std::sync::Arc;

use regex::{Captures, Regex, RegexBuilder};

use crate::error::ReplaceError;

/// The pattern being searched for.
#[derive(Debug, Clone)]
pub enum Needle {
    /// Matched verbatim, every non-overlapping occurrence, left to right.
    Literal(String),
    /// A compiled regex. `global` selects replace-all over first-match.
    Pattern { regex: Regex, global: bool },
}

impl Needle {
    pub fn literal(needle: impl Into<String>) -> Self {
        Needle::Literal(needle.into())
    }

    /// Compile `pattern` using a flag string made of `g`, `i` and `m`.
    ///
    /// With `m`, `^` and `$` match at `\n`, at `\r`, and around a `\r\n` pair
    /// (never between its two bytes). U+2028 and U+2029 are not line breaks.
    pub fn regex(pattern: &str, flags: &str) -> Result<Self, ReplaceError> {
        let mut global = false;
        let mut case_insensitive = false;
        let mut multi_line = false;

        for flag in flags.trim().chars() {
            let slot = match flag {
                'g' => &mut global,
                'i' => &mut case_insensitive,
                'm' => &mut multi_line,
                other => {
                    return Err(ReplaceError::config(format!(
                        "unsupported regex flag '{other}'! Possible values are: \"g\", \"i\" or \"m\""
                    )));
                }
            };
            if *slot {
                return Err(ReplaceError::config(format!(
                    "regex flag '{flag}' given more than once"
                )));
            }
            *slot = true;
        }

        let regex = RegexBuilder::new(pattern)
            .case_insensitive(case_insensitive)
            .multi_line(multi_line)
            .crlf(multi_line)
            .build()?;

        Ok(Needle::Pattern { regex, global })
    }

    /// Wrap an already compiled regex.
    pub fn from_regex(regex: Regex, global: bool) -> Self {
        Needle::Pattern { regex, global }
    }
}

impl From<&str> for Needle {
    fn from(s: &str) -> Self {
        Needle::Literal(s.to_string())
    }
}

impl From<String> for Needle {
    fn from(s: String) -> Self {
        Needle::Literal(s)
    }
}

type ReplaceFn = dyn Fn(&Captures<'_>) -> String + Send + Sync;

/// What every match is replaced with.
#[derive(Clone)]
pub enum Replacement {
    /// Inserted verbatim for literal needles; `$1`/`${name}` are expanded for
    /// pattern needles.
    Literal(String),
    Fn(Arc<ReplaceFn>),
}

impl Replacement {
    pub fn with_fn<F>(f: F) -> Self
    where
        F: Fn(&Captures<'_>) -> String + Send + Sync + 'static,
    {
        Replacement::Fn(Arc::new(f))
    }
}

impl fmt::Debug for Replacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Replacement::Literal(s) => f.debug_tuple("Literal").field(s).finish(),
            Replacement::Fn(_) => f.debug_tuple("Fn").field(&"<closure>").finish(),
        }
    }
}

impl From<&str> for Replacement {
    fn from(s: &str) -> Self {
        Replacement::Literal(s.to_string())
    }
}

impl From<String> for Replacement {
    fn from(s: String) -> Self {
        Replacement::Literal(s)
    }
}

/// A ready-to-apply `content -> content'` transform.
///
/// Pure and cheap to clone, so sync and async engines share the same value.
#[derive(Debug, Clone)]
pub struct Replacer {
    needle: Needle,
    replacement: Replacement,
}

impl Replacer {
    pub fn new(needle: Needle, replacement: Replacement) -> Result<Self, ReplaceError> {
        // A closure needs real captures, so a literal needle is escaped into a
        // global regex for it.
        let needle = match (needle, &replacement) {
            (Needle::Literal(lit), Replacement::Fn(_)) if !lit.is_empty() => Needle::Pattern {
                regex: Regex::new(&regex::escape(&lit))?,
                global: true,
            },
            (needle, _) => needle,
        };
        Ok(Self {
            needle,
            replacement,
        })
    }

    pub fn needle(&self) -> &Needle {
        &self.needle
    }

    pub fn apply(&self, content: &str) -> String {
        match (&self.needle, &self.replacement) {
            (Needle::Literal(needle), Replacement::Literal(rep)) => {
                replace_literal(content, needle, rep)
            }
            // Only reachable with an empty literal needle, see `new`.
            (Needle::Literal(_), Replacement::Fn(_)) => content.to_string(),
            (Needle::Pattern { regex, global }, Replacement::Literal(rep)) => {
                let rep = rep.as_str();
                if *global {
                    regex.replace_all(content, rep).into_owned()
                } else {
                    regex.replace(content, rep).into_owned()
                }
            }
            (Needle::Pattern { regex, global }, Replacement::Fn(f)) => {
                let call = |caps: &Captures<'_>| (f.as_ref())(caps);
                if *global {
                    regex.replace_all(content, call).into_owned()
                } else {
                    regex.replace(content, call).into_owned()
                }
            }
        }
    }
}

/// Replace every occurrence of `needle`, scanning from the end of the previous
/// match. An empty needle matches nothing.
pub fn replace_literal(content: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return content.to_string();
    }

    let mut result = String::with_capacity(content.len());
    let mut end = 0;

    while let Some(offset) = content[end..].find(needle) {
        let start = end + offset;
        result.push_str(&content[end..start]);
        result.push_str(replacement);
        end = start + needle.len();
    }

    result.push_str(&content[end..]);
    result
}
