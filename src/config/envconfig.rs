use std::path::Path;

use ::config as config_rs;
use anyhow::{Context, Result};
use config_rs::{ConfigBuilder, builder::DefaultState};
use serde::de::DeserializeOwned;

/// Typed settings read from an optional file overlaid with `APP_` variables
/// (`APP_DATABASE__URL`, `APP_AUTH__JWT_SECRET`, ...).
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "APP";
    const SEPARATOR: &'static str = "__";
    // Not under PREFIX, otherwise deny_unknown_fields would see it.
    const FILE_VAR: &'static str = "USER_ACCOUNTS_CONFIG";

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn from_env() -> Result<Self> {
        let manifest_env = Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
        if dotenvy::from_filename(manifest_env).is_err() {
            dotenvy::dotenv().ok();
        }

        let mut builder = config_rs::Config::builder();
        if let Ok(path) = std::env::var(Self::FILE_VAR) {
            builder = builder.add_source(config_rs::File::with_name(&path));
        }
        Self::from_builder(builder.add_source(
            config_rs::Environment::with_prefix(Self::PREFIX)
                .prefix_separator("_")
                .separator(Self::SEPARATOR)
                .try_parsing(true),
        ))
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let cfg = builder
            .build()
            .context("failed to read config sources")?
            .try_deserialize::<Self>()
            .context("failed to deserialize config")?;
        cfg.validate()?;
        Ok(cfg)
    }
}
