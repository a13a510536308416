mod env;

pub use env::{EnvVars, env_flag, optional_env_var, parse_env_var};
