use std::{collections::HashMap, fs, path::Path};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(about = "Serves the city selector page")]
pub struct Cli {
    /// Optional flat TOML file with `bind_addr`, `log_filter`, `max_body_bytes`.
    #[arg(long, default_value = "server.toml")]
    pub config: String,
    /// Overrides every other bind address source.
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_bind: String,
    pub log_filter: String,
    pub max_body_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:8080".into(),
            log_filter: "info".into(),
            max_body_bytes: 16 * 1024,
        }
    }
}

pub fn load_settings(cli: &Cli) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(Path::new(&cli.config)) {
        apply_file_settings(&mut settings, &raw);
    }
    apply_env_settings(&mut settings, |key| std::env::var(key).ok());

    if let Some(bind) = &cli.bind {
        settings.server_bind = bind.clone();
    }

    settings
}

pub(crate) fn apply_file_settings(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, toml::Value>>(raw) else {
        return;
    };
    if let Some(v) = file_cfg.get("bind_addr").and_then(toml::Value::as_str) {
        settings.server_bind = v.to_string();
    }
    if let Some(v) = file_cfg.get("log_filter").and_then(toml::Value::as_str) {
        settings.log_filter = v.to_string();
    }
    if let Some(v) = file_cfg
        .get("max_body_bytes")
        .and_then(toml::Value::as_integer)
        .and_then(|v| usize::try_from(v).ok())
    {
        settings.max_body_bytes = v;
    }
}

/// Later keys win: `APP__*` overrides the unprefixed name.
pub(crate) fn apply_env_settings(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = var("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = var("RUST_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = var("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = var("APP__MAX_BODY_BYTES") {
        if let Ok(parsed) = v.parse::<usize>() {
            settings.max_body_bytes = parsed;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
