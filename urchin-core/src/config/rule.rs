use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::{TagSet, Tags};

/// A window rule as written in configuration.
///
/// `prop` is matched against `class:instance:title`. `tags` is matched against every
/// tag name; the window gets each tag whose name matches.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub prop: String,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub floating: bool,
    #[serde(default = "default_has_title")]
    pub has_title: bool,
}

const fn default_has_title() -> bool {
    true
}

/// A rule with its patterns compiled. Patterns that do not compile never match.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    prop: Option<Regex>,
    tags: Option<Regex>,
    floating: bool,
    has_title: bool,
}

/// What the rules decided about a window. `None` means no rule matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classification {
    pub floating: Option<bool>,
    pub has_title: Option<bool>,
    /// Union of all matched tags. Empty when no tag pattern matched.
    pub tags: TagSet,
}

fn compile(pattern: &str) -> Option<Regex> {
    match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(err) => {
            tracing::warn!("Ignoring window rule pattern {:?}: {}", pattern, err);
            None
        }
    }
}

impl From<&Rule> for CompiledRule {
    fn from(rule: &Rule) -> Self {
        Self {
            prop: compile(&rule.prop),
            tags: rule.tags.as_deref().and_then(compile),
            floating: rule.floating,
            has_title: rule.has_title,
        }
    }
}

impl CompiledRule {
    #[must_use]
    pub fn compile_all(rules: &[Rule]) -> Vec<Self> {
        rules.iter().map(Self::from).collect()
    }

    fn matches(&self, subject: &str) -> bool {
        self.prop.as_ref().is_some_and(|re| re.is_match(subject))
    }

    /// Run `rules` in order against `subject`. The first matching rule decides the
    /// floating and title policy; every matching rule contributes tags.
    #[must_use]
    pub fn classify(rules: &[Self], subject: &str, tags: &Tags) -> Classification {
        let mut result = Classification::default();
        for rule in rules.iter().filter(|r| r.matches(subject)) {
            if result.floating.is_none() {
                result.floating = Some(rule.floating);
                result.has_title = Some(rule.has_title);
            }
            if let Some(re) = &rule.tags {
                for tag in tags.all() {
                    if re.is_match(&tag.label) {
                        result.tags.set(tag.id, true);
                    }
                }
            }
        }
        result
    }
}
