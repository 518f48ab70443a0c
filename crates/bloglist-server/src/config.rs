use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use bloglist_core::hash::{DEFAULT_M_COST, DEFAULT_T_COST};
use bloglist_core::identity::DEFAULT_MIN_PASSWORD_LEN;

/// Server settings, read from the environment (after `.env`).
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: PathBuf,
    pub min_password_len: usize,
    /// Argon2 memory cost in KiB and iteration count. `None` keeps the argon2 defaults.
    pub argon2_cost: Option<(u32, u32)>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("BLOGLIST_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let port = parse_var("BLOGLIST_PORT")?.unwrap_or(3003);
        let db_path = std::env::var("BLOGLIST_DB_PATH")
            .unwrap_or_else(|_| "bloglist.db".into())
            .into();
        let min_password_len =
            parse_var("BLOGLIST_MIN_PASSWORD_LEN")?.unwrap_or(DEFAULT_MIN_PASSWORD_LEN);

        let argon2_cost = match (
            parse_var("BLOGLIST_ARGON2_M_COST")?,
            parse_var("BLOGLIST_ARGON2_T_COST")?,
        ) {
            (None, None) => None,
            (m_cost, t_cost) => Some((
                m_cost.unwrap_or(DEFAULT_M_COST),
                t_cost.unwrap_or(DEFAULT_T_COST),
            )),
        };

        Ok(Self {
            host,
            port,
            db_path,
            min_password_len,
            argon2_cost,
        })
    }
}

fn parse_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    parse_raw(name, std::env::var(name).ok())
}

fn parse_raw<T>(name: &str, raw: Option<String>) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match raw {
        Some(raw) => raw
            .parse()
            .map(Some)
            .with_context(|| format!("{} is not valid: '{}'", name, raw)),
        None => Ok(None),
    }
}
