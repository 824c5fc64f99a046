//! Bot configuration loaded from the environment: token, optional mini app / channel URLs and an
//! optional Bot API server URL.

use std::env;
use std::fmt;

use tonhub_core::{BotError, Result, Url};
use tracing::warn;

/// Token variables, in lookup order.
pub const TOKEN_VARS: [&str; 3] = ["TELEGRAM_BOT_TOKEN", "BOT_TOKEN", "TELOXIDE_TOKEN"];

/// Printed to the console when no token is configured; the bot does not start.
pub const MISSING_TOKEN_HELP: &str = "Error: Please set the TELEGRAM_BOT_TOKEN environment variable.\n\
You can get a bot token from @BotFather on Telegram.";

/// Immutable bot config, shared for the whole process lifetime.
#[derive(Clone)]
pub struct BotConfig {
    pub bot_token: String,
    pub mini_app_url: Option<Url>,
    pub channel_url: Option<Url>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL, for a self-hosted Bot API server.
    pub telegram_api_url: Option<Url>,
}

impl BotConfig {
    /// Config with the given token and no optional URLs.
    pub fn new(bot_token: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            mini_app_url: None,
            channel_url: None,
            telegram_api_url: None,
        }
    }

    pub fn with_mini_app_url(mut self, url: Url) -> Self {
        self.mini_app_url = Some(url);
        self
    }

    pub fn with_channel_url(mut self, url: Url) -> Self {
        self.channel_url = Some(url);
        self
    }

    /// Loads from process env (call `dotenvy::dotenv()` first to pick up `.env`).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads using `lookup` for each variable. Empty values count as unset.
    ///
    /// Only a missing token fails ([`BotError::MissingToken`]). An optional URL that does not parse
    /// is logged and treated as unset; a mini app URL without https is kept with a warning and
    /// left for Telegram to reject at send time, where the start fallback covers it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bot_token = TOKEN_VARS
            .iter()
            .find_map(|key| get(*key))
            .ok_or(BotError::MissingToken)?;

        let mini_app_url = parse_optional_url("MINI_APP_URL", get("MINI_APP_URL"));
        if let Some(url) = &mini_app_url {
            if url.scheme() != "https" {
                warn!(url = %url, "MINI_APP_URL is not https; Telegram may reject the mini app button");
            }
        }
        let channel_url = parse_optional_url("CHANNEL_URL", get("CHANNEL_URL"));
        let telegram_api_url = parse_optional_url(
            "TELEGRAM_API_URL",
            get("TELEGRAM_API_URL").or_else(|| get("TELOXIDE_API_URL")),
        );

        Ok(Self {
            bot_token,
            mini_app_url,
            channel_url,
            telegram_api_url,
        })
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &mask_token(&self.bot_token))
            .field("mini_app_url", &self.mini_app_url.as_ref().map(Url::as_str))
            .field("channel_url", &self.channel_url.as_ref().map(Url::as_str))
            .field(
                "telegram_api_url",
                &self.telegram_api_url.as_ref().map(Url::as_str),
            )
            .finish()
    }
}

fn parse_optional_url(var: &str, value: Option<String>) -> Option<Url> {
    let raw = value?;
    match Url::parse(raw.trim()) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!(var = %var, value = %raw, error = %e, "Ignoring invalid URL");
            None
        }
    }
}

/// Masks a bot token for logging: keeps the numeric bot id before `:`, hides the secret.
/// Tokens without a numeric id are fully masked as `***`.
pub fn mask_token(token: &str) -> String {
    match token.split_once(':') {
        Some((id, _)) if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) => {
            format!("{}:***", id)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_token_is_reported() {
        let err = BotConfig::from_lookup(lookup_from(&[("MINI_APP_URL", "https://x.test")]))
            .unwrap_err();
        assert!(matches!(err, BotError::MissingToken));
    }

    #[test]
    fn test_empty_token_counts_as_missing() {
        let err = BotConfig::from_lookup(lookup_from(&[("TELEGRAM_BOT_TOKEN", "  ")])).unwrap_err();
        assert!(matches!(err, BotError::MissingToken));
    }

    #[test]
    fn test_token_fallback_order() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("BOT_TOKEN", "2:bbb"),
            ("TELOXIDE_TOKEN", "3:ccc"),
        ]))
        .unwrap();
        assert_eq!(config.bot_token, "2:bbb");

        let config = BotConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "1:aaa"),
            ("BOT_TOKEN", "2:bbb"),
        ]))
        .unwrap();
        assert_eq!(config.bot_token, "1:aaa");
    }

    #[test]
    fn test_load_all_urls() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:secret"),
            ("MINI_APP_URL", "https://x.test"),
            ("CHANNEL_URL", "https://t.me/tonhub"),
            ("TELOXIDE_API_URL", "http://localhost:8081"),
        ]))
        .unwrap();

        assert_eq!(config.mini_app_url.unwrap().as_str(), "https://x.test/");
        assert_eq!(config.channel_url.unwrap().as_str(), "https://t.me/tonhub");
        assert_eq!(
            config.telegram_api_url.unwrap().as_str(),
            "http://localhost:8081/"
        );
    }

    #[test]
    fn test_empty_urls_count_as_unset() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:secret"),
            ("MINI_APP_URL", ""),
            ("CHANNEL_URL", ""),
        ]))
        .unwrap();
        assert!(config.mini_app_url.is_none());
        assert!(config.channel_url.is_none());
        assert!(config.telegram_api_url.is_none());
    }

    #[test]
    fn test_invalid_urls_are_ignored() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:secret"),
            ("CHANNEL_URL", "t.me/tonhub"),
            ("MINI_APP_URL", "not a url"),
            ("TELEGRAM_API_URL", "localhost"),
        ]))
        .unwrap();
        assert_eq!(config.bot_token, "123:secret");
        assert!(config.channel_url.is_none());
        assert!(config.mini_app_url.is_none());
        assert!(config.telegram_api_url.is_none());
    }

    #[test]
    fn test_plain_http_mini_app_is_kept() {
        let config = BotConfig::from_lookup(lookup_from(&[
            ("TELEGRAM_BOT_TOKEN", "123:secret"),
            ("MINI_APP_URL", "http://harmonious.example"),
        ]))
        .unwrap();
        assert_eq!(
            config.mini_app_url.unwrap().as_str(),
            "http://harmonious.example/"
        );
    }

    #[test]
    fn test_mask_token() {
        assert_eq!(mask_token("123456789:AAFakeSecret"), "123456789:***");
        assert_eq!(mask_token("no-colon-token"), "***");
        assert_eq!(mask_token(":secret"), "***");
        assert_eq!(mask_token("abc:secret"), "***");
        assert_eq!(mask_token(""), "***");
    }

    #[test]
    fn test_debug_hides_secret() {
        let config = BotConfig::new("42:top-secret");
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("42:***"));
        assert!(!rendered.contains("top-secret"));
    }

    #[test]
    fn test_missing_token_help_text() {
        assert!(MISSING_TOKEN_HELP.contains("TELEGRAM_BOT_TOKEN"));
        assert!(MISSING_TOKEN_HELP.contains("@BotFather"));
    }

    #[test]
    #[serial]
    fn test_from_env_reads_process_environment() {
        for key in TOKEN_VARS {
            env::remove_var(key);
        }
        env::remove_var("MINI_APP_URL");
        env::remove_var("TELEGRAM_API_URL");
        env::remove_var("TELOXIDE_API_URL");
        env::set_var("TELEGRAM_BOT_TOKEN", "7:env-token");
        env::set_var("CHANNEL_URL", "https://t.me/tonhub");

        let config = BotConfig::from_env().unwrap();

        assert_eq!(config.bot_token, "7:env-token");
        assert_eq!(config.channel_url.unwrap().as_str(), "https://t.me/tonhub");
        assert!(config.mini_app_url.is_none());

        env::remove_var("TELEGRAM_BOT_TOKEN");
        env::remove_var("CHANNEL_URL");
    }

    #[test]
    #[serial]
    fn test_from_env_without_token() {
        for key in TOKEN_VARS {
            env::remove_var(key);
        }

        assert!(matches!(BotConfig::from_env(), Err(BotError::MissingToken)));
    }
}
