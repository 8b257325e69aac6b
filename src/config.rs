use anyhow::{bail, Context};

use crate::{models::identities::Identity, store::TransitionPolicy};

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
pub struct Config {
    pub bind_addr: String,
    pub log_filter: String,
    pub transition_policy: TransitionPolicy,
    /// Professor the dashboard is seeded for at startup.
    pub identity: Identity,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let strict = match lookup("STRICT_TRANSITIONS") {
            Some(value) => parse_bool(&value).context("Wrong format on 'STRICT_TRANSITIONS'")?,
            None => false,
        };

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            log_filter: lookup("LOG_FILTER").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            transition_policy: if strict {
                TransitionPolicy::Strict
            } else {
                TransitionPolicy::Lenient
            },
            identity: Identity {
                id: lookup("PROFESSOR_ID"),
                name: lookup("PROFESSOR_NAME"),
                subject: lookup("PROFESSOR_SUBJECT"),
            },
        })
    }
}

fn parse_bool(value: &str) -> anyhow::Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        other => bail!("Expected a boolean, got '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.transition_policy, TransitionPolicy::Lenient);
        assert_eq!(config.identity, Identity::default());
    }

    #[test]
    fn reads_identity_and_policy() {
        let config = config_from(&[
            ("BIND_ADDR", "0.0.0.0:9000"),
            ("STRICT_TRANSITIONS", "TRUE"),
            ("PROFESSOR_ID", "2"),
            ("PROFESSOR_SUBJECT", "Calculus"),
        ])
        .unwrap();
        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.transition_policy, TransitionPolicy::Strict);
        assert_eq!(config.identity.id.as_deref(), Some("2"));
        assert_eq!(config.identity.name, None);
        assert_eq!(config.identity.subject(), Some("Calculus"));
    }

    #[test]
    fn malformed_flag_is_an_error() {
        let err = config_from(&[("STRICT_TRANSITIONS", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("STRICT_TRANSITIONS"));
    }
}
