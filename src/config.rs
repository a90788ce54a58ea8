//! Local profile: API base URL and the stored session.
//!
//! Lives in a TOML file under the platform config directory. Environment
//! variables (optionally via a `.env` file) override the stored values:
//! `ASSESS_API_URL` for the base URL, `ASSESS_TOKEN` for the token.

use crate::auth::Session;
use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:5240";

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_url: Option<String>,
    pub session: Option<Session>,
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "linux") {
            dirs::config_dir()
                .context("Failed to get XDG config directory")?
                .join("assess-cli")
        } else {
            dirs::home_dir()
                .context("Failed to get home directory")?
                .join(".assess-cli")
        };

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {:?}", config_dir))?;
            info!("Created config directory: {:?}", config_dir);
        }

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = Self::config_path()?;
        debug!("Loading config from: {:?}", config_path);

        if !config_path.exists() {
            debug!("Config file doesn't exist, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        let content =
            toml::to_string_pretty(self).context("Failed to serialize config to TOML")?;
        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;
        debug!("Config saved to {:?}", config_path);
        Ok(())
    }

    /// Base URL, env override first, then the stored profile, then the
    /// development default.
    pub fn api_url(&self) -> String {
        std::env::var("ASSESS_API_URL")
            .ok()
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Current usable session. `ASSESS_TOKEN` yields an ad hoc session (for
    /// scripting against test backends); otherwise the stored one, if it has
    /// not expired.
    pub fn session(&self) -> Result<Session> {
        if let Ok(token) = std::env::var("ASSESS_TOKEN") {
            return Ok(Session {
                token,
                expires_at: Utc::now() + Duration::hours(1),
                user_id: String::new(),
                email: String::from("(env token)"),
            });
        }

        match &self.session {
            Some(session) if !session.is_expired() => Ok(session.clone()),
            Some(_) => anyhow::bail!("stored session has expired; run `assess-cli auth login`"),
            None => anyhow::bail!("not logged in; run `assess-cli auth login`"),
        }
    }

    pub fn set_session(&mut self, session: Session) -> Result<()> {
        info!("Storing session for {}", session.email);
        self.session = Some(session);
        self.save()
    }

    pub fn clear_session(&mut self) -> Result<()> {
        self.session = None;
        self.save()
    }
}
