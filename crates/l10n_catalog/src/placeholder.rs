use std::{collections::HashMap, fmt, sync::LazyLock};

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

static NAMED_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"%([a-zA-Z0-9_]+)%").expect("named placeholder pattern is valid")
});

/// Format type written after the `$` of a positional placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeSpec {
    /// `%1$@`
    String,
    /// `%1$lld`
    Integer,
}

impl TypeSpec {
    pub fn specifier(&self) -> &'static str {
        match self {
            TypeSpec::String => "@",
            TypeSpec::Integer => "lld",
        }
    }
}

impl fmt::Display for TypeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.specifier())
    }
}

/// Forces a type spec for placeholders of matching keys.
///
/// `placeholder: None` matches every placeholder of the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeSpecRule {
    pub key_contains: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    pub type_spec: TypeSpec,
}

impl TypeSpecRule {
    pub fn new(key_contains: &str, placeholder: Option<&str>, type_spec: TypeSpec) -> Self {
        Self {
            key_contains: key_contains.to_string(),
            placeholder: placeholder.map(str::to_string),
            type_spec,
        }
    }

    pub fn matches(&self, key: &str, name: &str) -> bool {
        key.contains(&self.key_contains)
            && self.placeholder.as_deref().is_none_or(|p| p == name)
    }

    /// Overrides every build starts with, checked in this order.
    pub fn builtin() -> Vec<TypeSpecRule> {
        vec![
            TypeSpecRule::new("expires_in", None, TypeSpec::Integer),
            TypeSpecRule::new("$domains_expire", Some("days"), TypeSpec::String),
        ]
    }
}

/// Placeholder name to 1-based position, scoped to one (key, locale) pair.
#[derive(Debug, Default, Clone)]
pub struct PlaceholderMap {
    indices: HashMap<String, usize>,
}

impl PlaceholderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `name`, assigning the next free one on first sight.
    pub fn index_of(&mut self, name: &str) -> usize {
        if let Some(index) = self.indices.get(name) {
            return *index;
        }
        let index = self.indices.len() + 1;
        self.indices.insert(name.to_string(), index);
        index
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Rewrites `%name%` placeholders into positional `%<n>$<type>` ones.
#[derive(Debug, Clone)]
pub struct PlaceholderReindexer {
    rules: Vec<TypeSpecRule>,
}

impl Default for PlaceholderReindexer {
    fn default() -> Self {
        Self::new(TypeSpecRule::builtin())
    }
}

impl PlaceholderReindexer {
    pub fn new(rules: Vec<TypeSpecRule>) -> Self {
        Self { rules }
    }

    /// Built-in rules followed by `extra`.
    pub fn with_extra_rules(extra: &[TypeSpecRule]) -> Self {
        let mut rules = TypeSpecRule::builtin();
        rules.extend_from_slice(extra);
        Self::new(rules)
    }

    pub fn rules(&self) -> &[TypeSpecRule] {
        &self.rules
    }

    /// First matching rule wins, otherwise `default`.
    pub fn effective_type_spec(&self, key: &str, name: &str, default: TypeSpec) -> TypeSpec {
        self.rules
            .iter()
            .find(|rule| rule.matches(key, name))
            .map(|rule| rule.type_spec)
            .unwrap_or(default)
    }

    /// Rewrite every named placeholder of `text`.
    ///
    /// `mapping` is shared by the caller across the plural forms of one value so
    /// the same name always gets the same position.
    pub fn reindex(
        &self,
        key: &str,
        text: &str,
        mapping: &mut PlaceholderMap,
        type_spec: TypeSpec,
    ) -> String {
        NAMED_PLACEHOLDER
            .replace_all(text, |caps: &Captures| {
                let name = &caps[1];
                let index = mapping.index_of(name);
                let applied = self.effective_type_spec(key, name, type_spec);
                format!("%{}${}", index, applied)
            })
            .into_owned()
    }
}
