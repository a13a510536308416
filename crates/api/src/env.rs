use anyhow::{Context, Result};
use pack_opener_common::{optional_env_var, parse_env_var, EnvVars};

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default)]
pub struct ApiServerEnv {
    pub port: u16,
    pub request_timeout_secs: u64,
    /// Seeds one shared RNG for every request when set.
    pub pack_seed: Option<u64>,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl EnvVars for ApiServerEnv {
    fn load() -> Result<Self> {
        let pack_seed = optional_env_var("PACK_SEED")
            .map(|raw| raw.trim().parse::<u64>().with_context(|| format!("PACK_SEED has an invalid value {:?}", raw)))
            .transpose()?;

        Ok(Self {
            port: parse_env_var("PORT", DEFAULT_PORT)?,
            request_timeout_secs: parse_env_var("REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            pack_seed,
            database_url: optional_env_var("DATABASE_URL"),
            database_name: optional_env_var("DATABASE_NAME"),
        })
    }

    fn get_env_var(&self, key: &str) -> Option<String> {
        match key {
            "PORT" => Some(self.port.to_string()),
            "REQUEST_TIMEOUT_SECS" => Some(self.request_timeout_secs.to_string()),
            "PACK_SEED" => self.pack_seed.map(|s| s.to_string()),
            "DATABASE_URL" => self.database_url.clone(),
            "DATABASE_NAME" => self.database_name.clone(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_env_var() {
        let env = ApiServerEnv {
            port: 9000,
            request_timeout_secs: 5,
            pack_seed: Some(42),
            database_url: None,
            database_name: Some("cards".into()),
        };
        assert_eq!(env.get_env_var("PORT").as_deref(), Some("9000"));
        assert_eq!(env.get_env_var("PACK_SEED").as_deref(), Some("42"));
        assert_eq!(env.get_env_var("DATABASE_URL"), None);
        assert_eq!(env.get_env_var("DATABASE_NAME").as_deref(), Some("cards"));
        assert_eq!(env.get_env_var("SOMETHING_ELSE"), None);
    }
}
