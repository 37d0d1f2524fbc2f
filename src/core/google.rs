//! Google Translate provider over the public `gtx` endpoint

use async_trait::async_trait;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::core::config::TranslatorConfig;
use crate::core::errors::{Result, TranslationError};
use crate::core::models::AUTO_DETECT;
use crate::core::provider::TranslationProvider;

/// Texts of this many characters or more are refused before any request
pub const MAX_CHARS: usize = 5000;

/// Languages the endpoint accepts, as lowercase display name and code
pub const GOOGLE_LANGUAGES: &[(&str, &str)] = &[
    ("afrikaans", "af"),
    ("albanian", "sq"),
    ("amharic", "am"),
    ("arabic", "ar"),
    ("armenian", "hy"),
    ("assamese", "as"),
    ("aymara", "ay"),
    ("azerbaijani", "az"),
    ("bambara", "bm"),
    ("basque", "eu"),
    ("belarusian", "be"),
    ("bengali", "bn"),
    ("bhojpuri", "bho"),
    ("bosnian", "bs"),
    ("bulgarian", "bg"),
    ("catalan", "ca"),
    ("cebuano", "ceb"),
    ("chichewa", "ny"),
    ("chinese (simplified)", "zh-CN"),
    ("chinese (traditional)", "zh-TW"),
    ("corsican", "co"),
    ("croatian", "hr"),
    ("czech", "cs"),
    ("danish", "da"),
    ("dhivehi", "dv"),
    ("dogri", "doi"),
    ("dutch", "nl"),
    ("english", "en"),
    ("esperanto", "eo"),
    ("estonian", "et"),
    ("ewe", "ee"),
    ("filipino", "tl"),
    ("finnish", "fi"),
    ("french", "fr"),
    ("frisian", "fy"),
    ("galician", "gl"),
    ("georgian", "ka"),
    ("german", "de"),
    ("greek", "el"),
    ("guarani", "gn"),
    ("gujarati", "gu"),
    ("haitian creole", "ht"),
    ("hausa", "ha"),
    ("hawaiian", "haw"),
    ("hebrew", "iw"),
    ("hindi", "hi"),
    ("hmong", "hmn"),
    ("hungarian", "hu"),
    ("icelandic", "is"),
    ("igbo", "ig"),
    ("ilocano", "ilo"),
    ("indonesian", "id"),
    ("irish", "ga"),
    ("italian", "it"),
    ("japanese", "ja"),
    ("javanese", "jw"),
    ("kannada", "kn"),
    ("kazakh", "kk"),
    ("khmer", "km"),
    ("kinyarwanda", "rw"),
    ("konkani", "gom"),
    ("korean", "ko"),
    ("krio", "kri"),
    ("kurdish (kurmanji)", "ku"),
    ("kurdish (sorani)", "ckb"),
    ("kyrgyz", "ky"),
    ("lao", "lo"),
    ("latin", "la"),
    ("latvian", "lv"),
    ("lingala", "ln"),
    ("lithuanian", "lt"),
    ("luganda", "lg"),
    ("luxembourgish", "lb"),
    ("macedonian", "mk"),
    ("maithili", "mai"),
    ("malagasy", "mg"),
    ("malay", "ms"),
    ("malayalam", "ml"),
    ("maltese", "mt"),
    ("maori", "mi"),
    ("marathi", "mr"),
    ("meiteilon (manipuri)", "mni-Mtei"),
    ("mizo", "lus"),
    ("mongolian", "mn"),
    ("myanmar", "my"),
    ("nepali", "ne"),
    ("norwegian", "no"),
    ("odia (oriya)", "or"),
    ("oromo", "om"),
    ("pashto", "ps"),
    ("persian", "fa"),
    ("polish", "pl"),
    ("portuguese", "pt"),
    ("punjabi", "pa"),
    ("quechua", "qu"),
    ("romanian", "ro"),
    ("russian", "ru"),
    ("samoan", "sm"),
    ("sanskrit", "sa"),
    ("scots gaelic", "gd"),
    ("sepedi", "nso"),
    ("serbian", "sr"),
    ("sesotho", "st"),
    ("shona", "sn"),
    ("sindhi", "sd"),
    ("sinhala", "si"),
    ("slovak", "sk"),
    ("slovenian", "sl"),
    ("somali", "so"),
    ("spanish", "es"),
    ("sundanese", "su"),
    ("swahili", "sw"),
    ("swedish", "sv"),
    ("tajik", "tg"),
    ("tamil", "ta"),
    ("tatar", "tt"),
    ("telugu", "te"),
    ("thai", "th"),
    ("tigrinya", "ti"),
    ("tsonga", "ts"),
    ("turkish", "tr"),
    ("turkmen", "tk"),
    ("twi", "ak"),
    ("ukrainian", "uk"),
    ("urdu", "ur"),
    ("uyghur", "ug"),
    ("uzbek", "uz"),
    ("vietnamese", "vi"),
    ("welsh", "cy"),
    ("xhosa", "xh"),
    ("yiddish", "yi"),
    ("yoruba", "yo"),
    ("zulu", "zu"),
];

/// Resolve a language code or display name to the code the endpoint expects.
///
/// Codes match case-insensitively (`zh-cn` gives `zh-CN`), names too.
/// `auto` is only meaningful as a source.
pub fn resolve_language(language: &str, allow_auto: bool) -> Result<&'static str> {
    let wanted = language.trim();

    if allow_auto && wanted.eq_ignore_ascii_case(AUTO_DETECT) {
        return Ok(AUTO_DETECT);
    }

    GOOGLE_LANGUAGES
        .iter()
        .find(|(name, code)| code.eq_ignore_ascii_case(wanted) || name.eq_ignore_ascii_case(wanted))
        .map(|(_, code)| *code)
        .ok_or_else(|| TranslationError::UnsupportedLanguage {
            language: language.to_string(),
        })
}

/// Check the text is sendable and return it trimmed.
///
/// The length limit applies to the text as received, before trimming.
fn check_payload(text: &str) -> Result<&str> {
    let chars = text.chars().count();
    if chars >= MAX_CHARS {
        return Err(TranslationError::InvalidPayload {
            message: format!("text must be under {} characters, got {}", MAX_CHARS, chars),
        });
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TranslationError::InvalidPayload {
            message: "text must contain more than whitespace".to_string(),
        });
    }

    Ok(trimmed)
}

/// Extract the translation from a `gtx` response body.
///
/// The body is an array whose element 0 lists segments; each segment holds its
/// translated piece at index 0.
pub fn parse_translation(json: &serde_json::Value) -> Result<String> {
    let segments = json
        .get(0)
        .and_then(|v| v.as_array())
        .ok_or_else(|| TranslationError::InvalidResponseError {
            message: "missing segment array".to_string(),
        })?;

    let translation: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(|v| v.as_str()))
        .collect();

    if translation.is_empty() {
        return Err(TranslationError::InvalidResponseError {
            message: "No translation in response".to_string(),
        });
    }

    Ok(translation)
}

/// Provider backed by Google Translate
#[derive(Debug, Clone)]
pub struct GoogleTranslateProvider {
    client: reqwest::Client,
    config: TranslatorConfig,
}

impl GoogleTranslateProvider {
    /// Create a provider; the HTTP client keeps reqwest's default timeouts
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// Create from environment
    pub fn from_env() -> Result<Self> {
        Self::new(TranslatorConfig::from_env())
    }

    /// Send actual HTTP request
    async fn send_request(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.config.api_endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| TranslationError::NetworkError {
                message: e.to_string(),
            })?;

        let status = response.status();

        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();
            warn!("Translation endpoint returned {}: {}", status_code, error_text);

            if status_code == 429 {
                return Err(TranslationError::TooManyRequests);
            }

            return Err(TranslationError::ApiError {
                status: status_code,
                message: error_text,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| TranslationError::InvalidResponseError {
                message: e.to_string(),
            })?;

        parse_translation(&json)
    }
}

#[async_trait]
impl TranslationProvider for GoogleTranslateProvider {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> Result<String> {
        let source = resolve_language(source_lang, true)?;
        let target = resolve_language(target_lang, false)?;
        let text = check_payload(text)?;

        if source == target {
            debug!("Source and target are both {}, returning text unchanged", source);
            return Ok(text.to_string());
        }

        self.send_request(text, source, target).await
    }

    async fn supported_languages(&self) -> Result<HashMap<String, String>> {
        Ok(GOOGLE_LANGUAGES
            .iter()
            .map(|(name, code)| (name.to_string(), code.to_string()))
            .collect())
    }
}
