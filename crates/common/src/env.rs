use std::str::FromStr;

use anyhow::{anyhow, Result};

pub trait EnvVars: Sized {
    fn load() -> Result<Self>;
    fn get_env_var(&self, key: &str) -> Option<String>;
}

/// Reads `key`, treating an unset or empty value as absent.
pub fn optional_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parses `key` into `T`, falling back to `default` when unset.
/// A value that is present but malformed is an error.
pub fn parse_env_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_env_var(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("{} has an invalid value {:?}: {}", key, raw, e)),
        None => Ok(default),
    }
}

pub fn env_flag(present: bool) -> &'static str {
    if present { "✅ Set" } else { "❌ Not Set" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_var_uses_default_when_unset() {
        let port: u16 = parse_env_var("PACK_OPENER_TEST_UNSET_PORT", 8000).unwrap();
        assert_eq!(port, 8000);
    }

    #[test]
    fn test_parse_env_var_rejects_garbage() {
        std::env::set_var("PACK_OPENER_TEST_BAD_PORT", "eighty");
        let port = parse_env_var::<u16>("PACK_OPENER_TEST_BAD_PORT", 8000);
        assert!(port.is_err());
        assert!(port.unwrap_err().to_string().contains("PACK_OPENER_TEST_BAD_PORT"));
    }

    #[test]
    fn test_optional_env_var_ignores_blank() {
        std::env::set_var("PACK_OPENER_TEST_BLANK", "   ");
        assert_eq!(optional_env_var("PACK_OPENER_TEST_BLANK"), None);
    }

    #[test]
    fn test_env_flag() {
        assert_eq!(env_flag(true), "✅ Set");
        assert_eq!(env_flag(false), "❌ Not Set");
    }
}
