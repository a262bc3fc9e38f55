use std::env;

use anyhow::Context;
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use server_api::mail::MailSettings;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub max_body_bytes: usize,
    pub mail: MailSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:3001".into(),
            max_body_bytes: 1024 * 1024,
            mail: MailSettings::default(),
        }
    }
}

/// Defaults, then `server.toml` (optional), then `APP__*` variables
/// (`APP__MAIL__SMTP_HOST`, `APP__MAIL__TO=a@x,b@y`, ...), then the legacy
/// `SERVER_BIND` and `SMTP_PASSWORD` variables.
pub fn load_settings() -> anyhow::Result<Settings> {
    let mut builder = with_defaults(Config::builder())?
        .add_source(File::with_name("server").required(false))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("mail.to")
                .try_parsing(true),
        );

    if let Ok(v) = env::var("SERVER_BIND") {
        builder = builder.set_override("server_bind", v)?;
    }
    if let Ok(v) = env::var("SMTP_PASSWORD") {
        builder = builder.set_override("mail.smtp_password", v)?;
    }

    builder
        .build()
        .context("failed to read server settings")?
        .try_deserialize()
        .context("invalid server settings")
}

pub fn load_settings_from_file(path: &str) -> anyhow::Result<Settings> {
    with_defaults(Config::builder())?
        .add_source(File::with_name(path).required(false))
        .build()
        .with_context(|| format!("failed to read settings file '{path}'"))?
        .try_deserialize()
        .context("invalid server settings")
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> anyhow::Result<ConfigBuilder<DefaultState>> {
    let defaults = Settings::default();
    Ok(builder
        .set_default("server_bind", defaults.server_bind)?
        .set_default("max_body_bytes", defaults.max_body_bytes as u64)?
        .set_default("mail.smtp_host", defaults.mail.smtp_host)?
        .set_default("mail.smtp_port", i64::from(defaults.mail.smtp_port))?
        .set_default("mail.smtp_username", defaults.mail.smtp_username)?
        .set_default("mail.smtp_password", defaults.mail.smtp_password)?
        .set_default("mail.from", defaults.mail.from)?
        .set_default("mail.to", defaults.mail.to)?)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
