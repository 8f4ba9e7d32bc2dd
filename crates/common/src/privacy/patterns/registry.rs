// Ordered registry of named PII recognition rules

use std::fmt;

use indexmap::IndexMap;
use regex::Regex;

use super::builtin::BUILTIN_REGEXES;
use super::detection::DetectionMap;
use super::error::{PiiError, PiiResult};

/// Inline-flag letters accepted after a `/source/flags` delimiter.
const DELIMITED_FLAGS: &str = "imsxu";

/// A named recognition rule.
#[derive(Clone)]
pub struct PatternRule {
    name: String,
    matcher: Regex,
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("name", &self.name)
            .field("pattern", &self.matcher.as_str())
            .finish()
    }
}

impl PatternRule {
    /// Compile `source` into a rule named `name`.
    ///
    /// `source` is either plain regex syntax or the delimited `/source/flags`
    /// form (flags drawn from `imsxu`; `u` is accepted and ignored since
    /// matching is always Unicode-aware).
    ///
    /// # Errors
    /// [`PiiError::InvalidPatternName`] for a blank name,
    /// [`PiiError::InvalidPattern`] if the source does not compile or can
    /// match the empty string.
    pub fn new(name: impl Into<String>, source: &str) -> PiiResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PiiError::InvalidPatternName(name));
        }

        let source = normalize_source(source);
        let matcher = Regex::new(&source).map_err(|e| PiiError::invalid_pattern(&name, &e))?;
        // An empty match would turn literal-substring redaction into a token
        // between every character.
        if matcher.is_match("") {
            return Err(PiiError::InvalidPattern {
                name,
                reason: "pattern matches the empty string".to_string(),
            });
        }
        Ok(Self { name, matcher })
    }

    /// Category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Compiled matcher.
    pub fn matcher(&self) -> &Regex {
        &self.matcher
    }

    /// Every non-overlapping leftmost-first match, verbatim.
    fn find_all(&self, content: &str) -> Vec<String> {
        self.matcher.find_iter(content).map(|m| m.as_str().to_string()).collect()
    }
}

/// Unwrap `/source/flags` into `(?flags)source`; anything else is returned
/// unchanged.
fn normalize_source(source: &str) -> String {
    let delimited = source
        .strip_prefix('/')
        .and_then(|rest| rest.rfind('/').map(|idx| (&rest[..idx], &rest[idx + 1..])))
        .filter(|(_, flags)| flags.chars().all(|c| DELIMITED_FLAGS.contains(c)));

    match delimited {
        Some((body, flags)) => {
            let inline: String = flags.chars().filter(|c| *c != 'u').collect();
            if inline.is_empty() {
                body.to_string()
            } else {
                format!("(?{}){}", inline, body)
            }
        }
        None => source.to_string(),
    }
}

/// Ordered mapping from category name to [`PatternRule`].
///
/// Immutable after construction; `scan` takes `&self` and touches no shared
/// state, so one registry can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    rules: IndexMap<String, PatternRule>,
}

impl PatternRegistry {
    /// Registry holding only the built-in categories.
    pub fn builtin() -> Self {
        let rules = BUILTIN_REGEXES
            .iter()
            .map(|(name, regex)| {
                let rule = PatternRule { name: (*name).to_string(), matcher: regex.clone() };
                ((*name).to_string(), rule)
            })
            .collect();
        Self { rules }
    }

    /// Built-ins overlaid with `custom_patterns`.
    ///
    /// A custom name that already exists keeps its position and gets its
    /// matcher replaced; new names are appended in iteration order.
    ///
    /// # Errors
    /// Fails on the first pattern that does not compile, before any scan can
    /// happen.
    pub fn build<I, K, V>(custom_patterns: I) -> PiiResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut registry = Self::builtin();
        for (name, source) in custom_patterns {
            let rule = PatternRule::new(name, source.as_ref())?;
            // IndexMap::insert keeps the slot of an existing key.
            registry.rules.insert(rule.name.clone(), rule);
        }
        Ok(registry)
    }

    /// Find every registered category in `content`.
    pub fn scan(&self, content: &str) -> DetectionMap {
        let mut detected = DetectionMap::new();
        if content.is_empty() {
            return detected;
        }

        for rule in self.rules.values() {
            let matches = rule.find_all(content);
            if !matches.is_empty() {
                detected.insert(&rule.name, matches);
            }
        }
        detected
    }

    /// Number of registered categories.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no category is registered.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Category names in scan order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Rule registered under `name`.
    pub fn get(&self, name: &str) -> Option<&PatternRule> {
        self.rules.get(name)
    }

    /// Rules in scan order.
    pub fn iter(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.values()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
