//! Translation of `validator` errors into localized field violations.

use std::collections::HashMap;

use geo_shared::errors::FieldViolation;
use validator::{ValidationError, ValidationErrors};

use super::registry::registry;

/// One validated field of a request struct
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: Option<&'static str>,
    /// Rule tags in attribute order
    pub rules: &'static [&'static str],
}

impl Field {
    pub const fn new(name: &'static str, rules: &'static [&'static str]) -> Self {
        Self {
            name,
            label: None,
            rules,
        }
    }

    pub const fn labelled(
        name: &'static str,
        label: &'static str,
        rules: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label: Some(label),
            rules,
        }
    }

    /// Label when set, raw identifier otherwise
    pub fn attribute(&self) -> &'static str {
        self.label.unwrap_or(self.name)
    }
}

/// Field metadata for a validated request struct.
///
/// `FIELDS` lists every validated field in declaration order. That order
/// decides the order of reported violations, and a field's rule list decides
/// which failure is reported when several rules fail on it. The label, when
/// present, replaces the raw identifier in messages and in the `attribute` of
/// each violation.
pub trait FieldLabels {
    const FIELDS: &'static [Field];

    fn label(field: &str) -> Option<&'static str> {
        Self::FIELDS
            .iter()
            .find(|f| f.name == field)
            .and_then(|f| f.label)
    }
}

const GENERIC_TEMPLATE: &str = "{field}の値が正しくありません";

/// Translate field errors of `T` into one violation per failing field.
///
/// Fields missing from `T::FIELDS` come last, sorted by name.
pub fn translate<T: FieldLabels>(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let field_errors = errors.field_errors();
    let mut violations = Vec::new();

    for field in T::FIELDS {
        if let Some(error) = field_errors
            .get(field.name)
            .and_then(|errors| first_failure(field.rules, errors))
        {
            violations.push(violation(field.attribute(), error));
        }
    }

    let mut undeclared: Vec<_> = field_errors
        .iter()
        .filter(|(name, _)| !T::FIELDS.iter().any(|f| **name == f.name))
        .collect();
    undeclared.sort_by(|(a, _), (b, _)| a.cmp(b));

    for (name, errors) in undeclared {
        if let Some(error) = first_failure(&[], errors) {
            violations.push(violation(name, error));
        }
    }

    violations
}

/// First failure in rule order, falling back to the order `validator` reported
fn first_failure<'a>(
    rules: &[&str],
    errors: &'a [ValidationError],
) -> Option<&'a ValidationError> {
    rules
        .iter()
        .find_map(|tag| errors.iter().find(|error| error.code == *tag))
        .or_else(|| errors.first())
}

fn violation(attribute: &str, error: &ValidationError) -> FieldViolation {
    let template = template_for(error);
    let mut params: HashMap<&str, String> = error
        .params
        .iter()
        .map(|(name, value)| (&**name, param_to_string(value)))
        .collect();
    params.insert("field", attribute.to_string());

    FieldViolation::new(attribute, error.code.to_string(), format_message(template, &params))
}

fn template_for(error: &ValidationError) -> &'static str {
    let code: &str = &error.code;
    if let Some(rule) = registry().get(code) {
        return rule.template;
    }
    builtin_template(code, |name| error.params.contains_key(name)).unwrap_or(GENERIC_TEMPLATE)
}

/// Templates for the rules built into `validator`
fn builtin_template(code: &str, has_param: impl Fn(&str) -> bool) -> Option<&'static str> {
    let template = match code {
        "required" => "{field}は必須フィールドです",
        "length" if has_param("equal") => "{field}の長さは{equal}文字でなければなりません",
        "length" if has_param("min") && has_param("max") => {
            "{field}の長さは{min}文字以上{max}文字以下でなければなりません"
        }
        "length" if has_param("min") => "{field}の長さは少なくとも{min}文字でなければなりません",
        "length" => "{field}の長さは最大で{max}文字でなければなりません",
        "range" if has_param("min") && has_param("max") => {
            "{field}は{min}以上{max}以下でなければなりません"
        }
        "range" if has_param("min") => "{field}は{min}以上でなければなりません",
        "range" => "{field}は{max}以下でなければなりません",
        "email" => "{field}は正しいメールアドレスでなければなりません",
        "url" => "{field}は正しいURLでなければなりません",
        "regex" => "{field}の形式が正しくありません",
        _ => return None,
    };
    Some(template)
}

fn param_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Replace `{name}` placeholders with their parameter values
pub fn format_message(template: &str, params: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}
