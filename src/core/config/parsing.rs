use std::collections::HashMap;
use std::env;

use super::types::{ConfigError, Environment};

const DEFAULT_CORS_ORIGINS: &[&str] =
    &["http://localhost:5173", "http://localhost:3000", "http://localhost:4000"];

const BABY_WHITE_CLOUD_QUIZ: &str = "BabyWhiteCloud";
const BABY_WHITE_CLOUD_KEY: &[&str] = &["雪花", "变成", "甜", "尝一尝", "甜", "凉凉"];

pub(super) fn env_optional(key: &str) -> Option<String> {
    env::var(key).ok().map(|value| value.trim().to_string()).filter(|value| !value.is_empty())
}

pub(super) fn env_or_default(key: &str, default: &str) -> String {
    env_optional(key).unwrap_or_else(|| default.to_string())
}

pub(super) fn parse_u16(field: &'static str, value: String) -> Result<u16, ConfigError> {
    value.parse::<u16>().map_err(|_| ConfigError::InvalidValue { field, value })
}

pub(super) fn parse_cors_origins(value: Option<String>) -> Result<Vec<String>, ConfigError> {
    let Some(raw) = value else {
        return Ok(default_cors_origins());
    };

    if raw.trim().is_empty() {
        return Ok(default_cors_origins());
    }

    if raw.trim_start().starts_with('[') {
        let parsed: Vec<String> =
            serde_json::from_str(&raw).map_err(|_| ConfigError::InvalidCors(raw.clone()))?;
        if parsed.is_empty() {
            return Ok(default_cors_origins());
        }
        return Ok(parsed);
    }

    let items: Vec<String> = raw
        .split(',')
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() {
        return Ok(default_cors_origins());
    }

    Ok(items)
}

/// A JSON object of quiz id to ordered reference answers, e.g.
/// `{"BabyWhiteCloud": ["雪花", "变成"]}`. Missing or empty input falls back
/// to the built-in key.
pub(super) fn parse_answer_keys(
    value: Option<String>,
) -> Result<HashMap<String, Vec<String>>, ConfigError> {
    let Some(raw) = value else {
        return Ok(default_answer_keys());
    };

    if raw.trim().is_empty() {
        return Ok(default_answer_keys());
    }

    let parsed: HashMap<String, Vec<String>> =
        serde_json::from_str(&raw).map_err(|_| ConfigError::InvalidAnswerKeys(raw.clone()))?;

    if parsed.is_empty() {
        return Ok(default_answer_keys());
    }

    Ok(parsed)
}

pub(super) fn parse_bool(value: &str) -> bool {
    matches!(value, "1" | "true" | "TRUE" | "yes" | "YES" | "on" | "ON")
}

pub(super) fn parse_environment(value: Option<String>) -> Environment {
    match value.as_deref().map(|item| item.to_lowercase()) {
        Some(ref val) if val == "production" || val == "prod" => Environment::Production,
        Some(ref val) if val == "staging" => Environment::Staging,
        Some(ref val) if val == "test" || val == "testing" => Environment::Test,
        _ => Environment::Development,
    }
}

fn default_cors_origins() -> Vec<String> {
    DEFAULT_CORS_ORIGINS.iter().map(|item| item.to_string()).collect()
}

fn default_answer_keys() -> HashMap<String, Vec<String>> {
    HashMap::from([(
        BABY_WHITE_CLOUD_QUIZ.to_string(),
        BABY_WHITE_CLOUD_KEY.iter().map(|entry| entry.to_string()).collect(),
    )])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_cors_origins_json() {
        let raw = "[\"http://a\",\"http://b\"]".to_string();
        let parsed = parse_cors_origins(Some(raw)).expect("cors json");
        assert_eq!(parsed, vec!["http://a".to_string(), "http://b".to_string()]);
    }

    #[test]
    fn parse_cors_origins_csv() {
        let raw = "http://a, http://b".to_string();
        let parsed = parse_cors_origins(Some(raw)).expect("cors csv");
        assert_eq!(parsed, vec!["http://a".to_string(), "http://b".to_string()]);
    }

    #[test]
    fn parse_cors_origins_defaults_on_empty() {
        let parsed = parse_cors_origins(Some(" ".to_string())).expect("cors empty");
        assert_eq!(parsed, default_cors_origins());
    }

    #[test]
    fn parse_answer_keys_json_object() {
        let raw = "{\"BabyWhiteCloud\": [\"a\", \"b\"], \"Other\": [\"c\"]}".to_string();
        let parsed = parse_answer_keys(Some(raw)).expect("answer keys json");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed["BabyWhiteCloud"], vec!["a".to_string(), "b".to_string()]);
        assert_eq!(parsed["Other"], vec!["c".to_string()]);
    }

    #[test]
    fn parse_answer_keys_defaults_when_unset() {
        let parsed = parse_answer_keys(None).expect("answer keys default");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed["BabyWhiteCloud"].len(), 6);
        assert_eq!(parsed["BabyWhiteCloud"][0], "雪花");
    }

    #[test]
    fn parse_answer_keys_rejects_malformed_json() {
        let parsed = parse_answer_keys(Some("not-json".to_string()));
        assert!(parsed.is_err());
    }

    #[test]
    fn parse_bool_variants() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("yes"));
        assert!(parse_bool("on"));
        assert!(!parse_bool("false"));
        assert!(!parse_bool("0"));
    }

    #[test]
    fn parse_environment_variants() {
        assert_eq!(parse_environment(Some("prod".to_string())), Environment::Production);
        assert_eq!(parse_environment(Some("production".to_string())), Environment::Production);
        assert_eq!(parse_environment(Some("staging".to_string())), Environment::Staging);
        assert_eq!(parse_environment(Some("testing".to_string())), Environment::Test);
        assert_eq!(parse_environment(None), Environment::Development);
    }
}
