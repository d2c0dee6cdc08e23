use std::time::Duration;

use url::Url;

use crate::cli::Args;
use crate::data::{PlanTier, UnknownPlan};

pub const API_URL: &str = "SHARIAWATCH_API_URL";
pub const USER_ID: &str = "SHARIAWATCH_USER_ID";
pub const PLAN: &str = "SHARIAWATCH_PLAN";
pub const DETAILS_URL: &str = "SHARIAWATCH_DETAILS_URL";
pub const SYMBOL_SUFFIX: &str = "SHARIAWATCH_SYMBOL_SUFFIX";
pub const WEB_URL: &str = "SHARIAWATCH_WEB_URL";
pub const TIMEOUT_SECS: &str = "SHARIAWATCH_TIMEOUT_SECS";
pub const NOTICE_MS: &str = "SHARIAWATCH_NOTICE_MS";
pub const LOCALE: &str = "SHARIAWATCH_LOCALE";
pub const LOG: &str = "SHARIAWATCH_LOG";

const DEFAULT_SUFFIX: &str = ".NS";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_NOTICE: Duration = Duration::from_millis(1500);

/// Runtime settings, resolved once before entering full screen
#[derive(Clone, Debug)]
pub struct Config {
    pub api_url: Url,
    pub user_id: String,
    pub plan: PlanTier,
    pub details_url: Option<Url>,
    pub symbol_suffix: String,
    pub web_url: Option<String>,
    pub timeout: Duration,
    /// How long the removal success/failure notice stays up
    pub notice_for: Duration,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("{key}: invalid url `{value}`: {source}")]
    Url {
        key: &'static str,
        value: String,
        source: url::ParseError,
    },
    #[error("{key}: expected a positive integer, got `{value}`")]
    Number { key: &'static str, value: String },
    #[error(transparent)]
    Plan(#[from] UnknownPlan),
}

impl Config {
    pub fn from_env(args: &Args) -> Result<Self, ConfigError> {
        Self::from_lookup(args, env_value)
    }

    /// Resolve settings through `lookup`; CLI flags take precedence over it
    pub fn from_lookup(
        args: &Args,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let missing = missing_required(args, &lookup);
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let api_url = parse_url(API_URL, lookup(API_URL).unwrap_or_default())?;
        let user_id = args
            .user
            .clone()
            .or_else(|| lookup(USER_ID))
            .unwrap_or_default();
        let plan = match args.plan.clone().or_else(|| lookup(PLAN)) {
            Some(raw) => raw.parse()?,
            None => PlanTier::default(),
        };
        let details_url = lookup(DETAILS_URL)
            .map(|raw| parse_url(DETAILS_URL, raw))
            .transpose()?;

        Ok(Self {
            api_url,
            user_id,
            plan,
            details_url,
            symbol_suffix: lookup(SYMBOL_SUFFIX).unwrap_or_else(|| DEFAULT_SUFFIX.to_string()),
            web_url: lookup(WEB_URL).map(|url| url.trim_end_matches('/').to_string()),
            timeout: parse_number(TIMEOUT_SECS, &lookup)?
                .map_or(DEFAULT_TIMEOUT, Duration::from_secs),
            notice_for: parse_number(NOTICE_MS, &lookup)?
                .map_or(DEFAULT_NOTICE, Duration::from_millis),
        })
    }
}

/// Locale requested through the environment, `en` when unset
#[must_use]
pub fn locale() -> String {
    env_value(LOCALE).unwrap_or_else(|| "en".to_string())
}

#[must_use]
pub fn missing_required_env(args: &Args) -> Vec<&'static str> {
    missing_required(args, env_value)
}

fn missing_required(args: &Args, lookup: impl Fn(&str) -> Option<String>) -> Vec<&'static str> {
    let mut missing = vec![];
    if lookup(API_URL).is_none() {
        missing.push(API_URL);
    }
    if args.user.is_none() && lookup(USER_ID).is_none() {
        missing.push(USER_ID);
    }
    missing
}

/// Trimmed, non-blank value of `key`
fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_url(key: &'static str, value: String) -> Result<Url, ConfigError> {
    Url::parse(&value).map_err(|source| ConfigError::Url { key, value, source })
}

fn parse_number(
    key: &'static str,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Option<u64>, ConfigError> {
    let Some(value) = lookup(key) else {
        return Ok(None);
    };
    match value.parse::<u64>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(ConfigError::Number { key, value }),
    }
}

/// Display config guide (when required settings are missing)
pub fn print_config_guide() {
    eprintln!("Configuration error: required environment variables are missing");
    eprintln!();
    eprintln!("Set the following before starting:");
    eprintln!("  {API_URL}=<watchlist backend, e.g. http://localhost:5000>");
    eprintln!("  {USER_ID}=<your user id>   (or pass --user <id>)");
    eprintln!();
    eprintln!("Optional: {PLAN}=free|basic|premium (or --plan <tier>)");
    eprintln!("Optional: {DETAILS_URL} enables live price snapshots");
    eprintln!("Optional: {SYMBOL_SUFFIX} exchange suffix for price lookups (default {DEFAULT_SUFFIX})");
    eprintln!("Optional: {WEB_URL} web app origin used for navigation links");
    eprintln!("Optional: {TIMEOUT_SECS} / {NOTICE_MS} request timeout and notice duration");
    eprintln!("Optional: {LOCALE} UI language (default en)");
    eprintln!("Optional: {LOG} log filter (e.g. error,shariawatch=info)");
    eprintln!();
    eprintln!("Hint: a .env file in the working directory is loaded automatically");
}

#[cfg(test)]
mod tests {
    use super::{missing_required_env, Config, ConfigError, API_URL, USER_ID};
    use crate::cli::Args;
    use crate::data::PlanTier;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct EnvGuard {
        key: &'static str,
        previous: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &'static str, value: Option<&str>) -> Self {
            let previous = std::env::var(key).ok();
            match value {
                Some(value) => std::env::set_var(key, value),
                None => std::env::remove_var(key),
            }
            Self { key, previous }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            if let Some(previous) = &self.previous {
                std::env::set_var(self.key, previous);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn resolve(args: &Args, pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_lookup(args, |key| vars.get(key).cloned())
    }

    #[test]
    fn detects_missing_required_environment_variables() {
        let _lock = ENV_LOCK.lock().expect("poison");
        let _api = EnvGuard::set(API_URL, Some("  "));
        let _user = EnvGuard::set(USER_ID, None);

        let missing = missing_required_env(&Args::default());
        assert_eq!(missing, [API_URL, USER_ID]);

        let args = Args {
            user: Some("u1".to_string()),
            ..Args::default()
        };
        assert_eq!(missing_required_env(&args), [API_URL]);
    }

    #[test]
    fn reads_environment_when_present() {
        let _lock = ENV_LOCK.lock().expect("poison");
        let _api = EnvGuard::set(API_URL, Some("http://localhost:5000"));
        let _user = EnvGuard::set(USER_ID, Some(" user-42 "));

        let config = Config::from_env(&Args::default()).expect("config");
        assert_eq!(config.user_id, "user-42");
        assert_eq!(config.api_url.as_str(), "http://localhost:5000/");
    }

    #[test]
    fn applies_defaults() {
        let config = resolve(
            &Args::default(),
            &[(API_URL, "http://localhost:5000"), (USER_ID, "u1")],
        )
        .expect("config");
        assert_eq!(config.plan, PlanTier::Free);
        assert_eq!(config.symbol_suffix, ".NS");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.notice_for, Duration::from_millis(1500));
        assert!(config.details_url.is_none());
        assert!(config.web_url.is_none());
    }

    #[test]
    fn cli_flags_override_environment() {
        let args = Args {
            user: Some("cli-user".to_string()),
            plan: Some("premium".to_string()),
        };
        let config = resolve(
            &args,
            &[
                (API_URL, "http://localhost:5000"),
                (USER_ID, "env-user"),
                ("SHARIAWATCH_PLAN", "basic"),
            ],
        )
        .expect("config");
        assert_eq!(config.user_id, "cli-user");
        assert_eq!(config.plan, PlanTier::Premium);
    }

    #[test]
    fn rejects_invalid_values() {
        let base = [(API_URL, "http://localhost:5000"), (USER_ID, "u1")];

        let mut vars = base.to_vec();
        vars.push(("SHARIAWATCH_TIMEOUT_SECS", "soon"));
        assert!(matches!(
            resolve(&Args::default(), &vars),
            Err(ConfigError::Number { .. })
        ));

        let mut vars = base.to_vec();
        vars.push(("SHARIAWATCH_PLAN", "gold"));
        assert!(matches!(
            resolve(&Args::default(), &vars),
            Err(ConfigError::Plan(_))
        ));

        assert!(matches!(
            resolve(&Args::default(), &[(API_URL, "not a url"), (USER_ID, "u1")]),
            Err(ConfigError::Url { .. })
        ));
    }

    #[test]
    fn optional_services_are_parsed() {
        let config = resolve(
            &Args::default(),
            &[
                (API_URL, "http://localhost:5000"),
                (USER_ID, "u1"),
                ("SHARIAWATCH_DETAILS_URL", "http://localhost:8000"),
                ("SHARIAWATCH_WEB_URL", "https://shariastocks.in/"),
                ("SHARIAWATCH_NOTICE_MS", "500"),
            ],
        )
        .expect("config");
        assert!(config.details_url.is_some());
        assert_eq!(config.web_url.as_deref(), Some("https://shariastocks.in"));
        assert_eq!(config.notice_for, Duration::from_millis(500));
    }
}
