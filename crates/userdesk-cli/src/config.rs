// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use userdesk_app::{PageSize, Route};
use userdesk_store::DEFAULT_USER_COUNT;

const CONFIG_VERSION: i64 = 1;
const CONFIG_PATH_ENV: &str = "USERDESK_CONFIG_PATH";
const LOG_PATH_ENV: &str = "USERDESK_LOG_PATH";
const DEFAULT_SEED: u64 = 42;
const DEFAULT_START_ROUTE: &str = "/login";
const DEFAULT_LOGIN_DELAY: &str = "1500ms";
const DEFAULT_LOG_LEVEL: &str = "info";
pub(crate) const MAX_USER_COUNT: usize = 100_000;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub version: i64,
    #[serde(default)]
    pub data: Data,
    #[serde(default)]
    pub ui: Ui,
    #[serde(default)]
    pub login: Login,
    #[serde(default)]
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            data: Data::default(),
            ui: Ui::default(),
            login: Login::default(),
            log: Log::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Data {
    pub user_count: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for Data {
    fn default() -> Self {
        Self {
            user_count: Some(DEFAULT_USER_COUNT),
            seed: Some(DEFAULT_SEED),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Ui {
    pub page_size: Option<usize>,
    pub start_route: Option<String>,
}

impl Default for Ui {
    fn default() -> Self {
        Self {
            page_size: Some(PageSize::default().get()),
            start_route: Some(DEFAULT_START_ROUTE.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Login {
    pub delay: Option<String>,
}

impl Default for Login {
    fn default() -> Self {
        Self {
            delay: Some(DEFAULT_LOGIN_DELAY.to_owned()),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Log {
    pub level: Option<String>,
    pub path: Option<String>,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: Some(DEFAULT_LOG_LEVEL.to_owned()),
            path: None,
        }
    }
}

impl Config {
    pub fn default_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_root = dirs::config_dir().ok_or_else(|| {
            anyhow!("cannot resolve config directory; set {CONFIG_PATH_ENV} to the config file")
        })?;

        let app_dir = config_root.join(userdesk_store::APP_NAME);
        fs::create_dir_all(&app_dir)
            .with_context(|| format!("create config directory {}", app_dir.display()))?;
        Ok(app_dir.join("config.toml"))
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let value: toml::Value = toml::from_str(&raw)
            .with_context(|| format!("parse TOML config {}", path.display()))?;

        let version = value
            .get("version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| {
                anyhow!(
                    "config file {} has no version. Add `version = 1` and put values under [data], [ui], [login] and [log]",
                    path.display()
                )
            })?;

        if version != CONFIG_VERSION {
            bail!(
                "unsupported config version {} in {}; expected version = 1. Run `userdesk --print-example-config` for the current layout",
                version,
                path.display()
            );
        }

        let config: Config = value
            .try_into()
            .with_context(|| format!("decode config {}", path.display()))?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(count) = self.data.user_count
            && count > MAX_USER_COUNT
        {
            bail!(
                "data.user_count in {} must be at most {MAX_USER_COUNT}, got {count}",
                path.display()
            );
        }

        if let Some(rows) = self.ui.page_size {
            PageSize::try_from(rows)
                .with_context(|| format!("invalid ui.page_size in {}", path.display()))?;
        }

        if let Some(route) = &self.ui.start_route {
            parse_start_route(route)
                .with_context(|| format!("invalid ui.start_route in {}", path.display()))?;
        }

        if let Some(delay) = &self.login.delay {
            parse_duration(delay)
                .with_context(|| format!("invalid login.delay in {}", path.display()))?;
        }

        if let Some(level) = &self.log.level {
            EnvFilter::try_new(level).with_context(|| {
                format!(
                    "invalid log.level {level:?} in {}; use a level such as info or debug",
                    path.display()
                )
            })?;
        }

        Ok(())
    }

    pub fn user_count(&self) -> usize {
        self.data.user_count.unwrap_or(DEFAULT_USER_COUNT)
    }

    pub fn seed(&self) -> u64 {
        self.data.seed.unwrap_or(DEFAULT_SEED)
    }

    pub fn page_size(&self) -> PageSize {
        self.ui
            .page_size
            .and_then(PageSize::from_rows)
            .unwrap_or_default()
    }

    pub fn start_route(&self) -> &str {
        self.ui
            .start_route
            .as_deref()
            .unwrap_or(DEFAULT_START_ROUTE)
    }

    pub fn login_delay(&self) -> Result<Duration> {
        parse_duration(self.login.delay.as_deref().unwrap_or(DEFAULT_LOGIN_DELAY))
    }

    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// `[log].path`, then `USERDESK_LOG_PATH`, then the platform data dir.
    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log.path {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = env::var_os(LOG_PATH_ENV) {
            return Ok(PathBuf::from(path));
        }
        let data_root = dirs::data_local_dir().ok_or_else(|| {
            anyhow!("cannot resolve data directory; set [log].path or {LOG_PATH_ENV}")
        })?;
        Ok(data_root
            .join(userdesk_store::APP_NAME)
            .join(format!("{}.log", userdesk_store::APP_NAME)))
    }

    pub fn example_config(path: &Path) -> String {
        format!(
            "# userdesk config\n# Place this file at: {}\n\nversion = 1\n\n[data]\n# Mock users generated at startup; the same seed always yields the same users.\nuser_count = {DEFAULT_USER_COUNT}\nseed = {DEFAULT_SEED}\n\n[ui]\n# One of 10, 20, 50, 100.\npage_size = {}\nstart_route = \"{DEFAULT_START_ROUTE}\"\n\n[login]\ndelay = \"{DEFAULT_LOGIN_DELAY}\"\n\n[log]\nlevel = \"{DEFAULT_LOG_LEVEL}\"\n# Optional. Default is the platform data dir (for example ~/.local/share/userdesk/userdesk.log)\n# path = \"/absolute/path/to/userdesk.log\"\n",
            path.display(),
            PageSize::default().get(),
        )
    }
}

/// Accepts only paths that have a screen behind them.
pub fn parse_start_route(raw: &str) -> Result<Route> {
    match Route::parse(raw) {
        Route::Unknown(path) => bail!(
            "start route {path:?} has no screen; use /login, /users or /users/<id>"
        ),
        route => Ok(route),
    }
}

pub fn parse_duration(raw: &str) -> Result<Duration> {
    if let Some(value) = raw.strip_suffix("ms") {
        let millis: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_millis(millis));
    }
    if let Some(value) = raw.strip_suffix('s') {
        let secs: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        return Ok(Duration::from_secs(secs));
    }
    if let Some(value) = raw.strip_suffix('m') {
        let mins: u64 = value
            .parse()
            .with_context(|| format!("invalid duration {raw:?}"))?;
        let secs = mins
            .checked_mul(60)
            .ok_or_else(|| anyhow!("duration {raw:?} is too large"))?;
        return Ok(Duration::from_secs(secs));
    }

    bail!("invalid duration {raw:?}; use one of: <N>ms, <N>s, <N>m (for example 1500ms or 2s)")
}
