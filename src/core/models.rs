//! Core data models for translation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Source language used when the caller does not name one
pub const AUTO_DETECT: &str = "auto";

/// Translation request as accepted on `POST /api/translate`.
///
/// Every field is optional so that a missing key is reported as a validation
/// failure rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: Option<String>,
    /// Source language, `auto` when absent
    pub source_lang: Option<String>,
    /// Target language
    pub target_lang: Option<String>,
}

impl TranslationRequest {
    /// Request for `text` into `target_lang` with automatic source detection
    pub fn new(text: impl Into<String>, target_lang: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            source_lang: None,
            target_lang: Some(target_lang.into()),
        }
    }

    /// Set an explicit source language
    pub fn with_source_lang(mut self, source_lang: impl Into<String>) -> Self {
        self.source_lang = Some(source_lang.into());
        self
    }

    /// Read a request out of an arbitrary JSON body.
    ///
    /// A field that is absent or holds an empty value (`null`, `false`, `0`,
    /// `""`, `[]`, `{}`) counts as missing, whatever its type. Once `text` and
    /// `target_lang` are both present, a field that is not a string is an
    /// error, as is a body that is not an object.
    pub fn from_json(body: &Value) -> Result<Self, String> {
        let Some(fields) = body.as_object() else {
            return Err(format!(
                "Request body must be a JSON object, got {}",
                json_type(body)
            ));
        };

        let field = |name: &str| fields.get(name).filter(|v| !is_empty_value(v));
        let text = field("text");
        let target_lang = field("target_lang");

        if text.is_none() || target_lang.is_none() {
            let as_string = |v: Option<&Value>| v.and_then(Value::as_str).map(str::to_string);
            return Ok(Self {
                text: as_string(text),
                source_lang: as_string(field("source_lang")),
                target_lang: as_string(target_lang),
            });
        }

        Ok(Self {
            text: string_field("text", text)?,
            source_lang: string_field("source_lang", field("source_lang"))?,
            target_lang: string_field("target_lang", target_lang)?,
        })
    }

    /// Check required fields and fill in defaults.
    ///
    /// Returns `None` when `text` or `target_lang` is missing or empty.
    pub fn validate(&self) -> Option<ValidTranslation> {
        let text = self.text.clone().filter(|t| !t.is_empty())?;
        let target_lang = self.target_lang.clone().filter(|t| !t.is_empty())?;
        let source_lang = self
            .source_lang
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| AUTO_DETECT.to_string());

        Some(ValidTranslation {
            text,
            source_lang,
            target_lang,
        })
    }
}

fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn string_field(name: &str, value: Option<&Value>) -> Result<Option<String>, String> {
    match value {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(format!("{} must be a string, got {}", name, json_type(other))),
    }
}

/// A request whose required fields have been checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidTranslation {
    /// Non-empty text
    pub text: String,
    /// Source language or `auto`
    pub source_lang: String,
    /// Non-empty target language
    pub target_lang: String,
}

impl fmt::Display for ValidTranslation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' from '{}' to '{}'",
            self.text, self.source_lang, self.target_lang
        )
    }
}

/// Successful translation body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResponse {
    /// Translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// One supported language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    /// Provider language code, e.g. `es`
    pub code: String,
    /// Display name, e.g. `spanish`
    pub name: String,
}

/// Turn a provider name -> code table into a list ordered by name.
///
/// Codes are unique in the result; when two names share a code the one that
/// sorts first is kept.
pub fn languages_from_table(table: HashMap<String, String>) -> Vec<LanguageEntry> {
    let mut languages: Vec<LanguageEntry> = table
        .into_iter()
        .map(|(name, code)| LanguageEntry { code, name })
        .collect();

    languages.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.code.cmp(&b.code)));

    let mut seen = std::collections::HashSet::new();
    languages.retain(|l| seen.insert(l.code.clone()));
    languages
}
