//! Process-wide registry of custom validation rules.
//!
//! The registry is built on first use and never mutated afterwards, so it is
//! shared between workers without locking.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;
use validator::ValidationError;

use super::rules;

/// A named custom rule with its localized message template
#[derive(Clone, Copy)]
pub struct ValidationRule {
    pub tag: &'static str,
    pub predicate: fn(&str) -> bool,
    /// Message template; `{field}` and every parameter name are substituted
    pub template: &'static str,
    /// Parameters attached to each violation of this rule
    pub params: &'static [(&'static str, usize)],
}

impl ValidationRule {
    /// Violation carrying this rule's tag and parameters
    fn violation(&self) -> ValidationError {
        let mut error = ValidationError::new(self.tag);
        for (name, value) in self.params {
            error.add_param(Cow::Borrowed(*name), value);
        }
        error
    }
}

const RULES: &[ValidationRule] = &[
    ValidationRule {
        tag: "password",
        predicate: rules::is_password,
        template: "{field}は{min}文字以上{max}文字以下で、大文字、小文字、数字、特殊文字をそれぞれ1つ以上含む必要があります",
        params: &[
            ("min", rules::PASSWORD_MIN_LENGTH),
            ("max", rules::PASSWORD_MAX_LENGTH),
        ],
    },
    ValidationRule {
        tag: "datetime",
        predicate: rules::is_datetime,
        template: "{field}は日付時刻形式である必要があります",
        params: &[],
    },
    ValidationRule {
        tag: "vcf",
        predicate: rules::is_vcf_token,
        template: "{field}は`vcf-`と8文字の文字列である必要があります",
        params: &[],
    },
    ValidationRule {
        tag: "vcs",
        predicate: rules::is_vcs_token,
        template: "{field}は`vcs-`と8文字の文字列である必要があります",
        params: &[],
    },
    ValidationRule {
        tag: "alphanum_underscore",
        predicate: rules::is_alphanum_underscore,
        template: "{field}は半角英数字とアンダースコア(_)のみ使用できます",
        params: &[],
    },
    ValidationRule {
        tag: "numeric",
        predicate: rules::is_numeric,
        template: "{field}は正しい数字でなければなりません",
        params: &[],
    },
];

static REGISTRY: Lazy<RuleRegistry> = Lazy::new(RuleRegistry::build);

/// Read-only lookup of custom rules by tag
pub struct RuleRegistry {
    rules: HashMap<&'static str, ValidationRule>,
}

impl RuleRegistry {
    fn build() -> Self {
        let rules = RULES.iter().map(|rule| (rule.tag, *rule)).collect();
        Self { rules }
    }

    pub fn get(&self, tag: &str) -> Option<&ValidationRule> {
        self.rules.get(tag)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.rules.contains_key(tag)
    }

    /// Registered tags in sorted order
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.rules.keys().copied().collect();
        tags.sort_unstable();
        tags
    }

    /// Run the rule registered under `tag` against `value`.
    ///
    /// An unknown tag fails with an `unknown_rule` violation instead of
    /// passing.
    pub fn check(&self, tag: &str, value: &str) -> Result<(), ValidationError> {
        match self.rules.get(tag) {
            Some(rule) if (rule.predicate)(value) => Ok(()),
            Some(rule) => Err(rule.violation()),
            None => Err(ValidationError::new("unknown_rule")),
        }
    }
}

/// Shared registry instance
pub fn registry() -> &'static RuleRegistry {
    &REGISTRY
}
