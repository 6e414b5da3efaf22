//! Configuration loaded from `fulfillment.toml`.
//!
//! [`FulfillmentConfig`] holds every tunable of the CLI. Keys missing from the
//! file take sensible defaults. The `FULFILLMENT_ROLE` environment variable
//! takes precedence over the file's `default_role`.

use serde::Deserialize;
use std::path::Path;

use fulfillment_status::{Reported, Role};

use crate::error::FulfillmentError;

pub const CONFIG_FILE: &str = "fulfillment.toml";
pub const ROLE_ENV: &str = "FULFILLMENT_ROLE";

/// Top-level configuration loaded from `fulfillment.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct FulfillmentConfig {
    /// Role used when `--role` is not passed.
    #[serde(default)]
    pub default_role: Option<String>,

    /// Width of the rendered progress bar, in cells.
    #[serde(default = "default_bar_width")]
    pub bar_width: u16,

    /// Styled terminal output.
    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_bar_width() -> u16 {
    30
}

fn default_color() -> bool {
    true
}

impl Default for FulfillmentConfig {
    fn default() -> Self {
        Self {
            default_role: None,
            bar_width: default_bar_width(),
            color: default_color(),
        }
    }
}

impl FulfillmentConfig {
    /// Loads `fulfillment.toml` from the current directory, or defaults if absent.
    pub fn load() -> Result<Self, FulfillmentError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, FulfillmentError> {
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            toml::from_str::<FulfillmentConfig>(&contents)?
        } else {
            Self::default()
        };

        if config.bar_width == 0 {
            return Err(FulfillmentError::Config(
                "bar_width must be greater than zero".into(),
            ));
        }

        config.apply_role_override(std::env::var(ROLE_ENV).ok());
        Ok(config)
    }

    fn apply_role_override(&mut self, value: Option<String>) {
        if let Some(role) = value
            && !role.trim().is_empty()
        {
            self.default_role = Some(role);
        }
    }

    /// Role for this invocation: the CLI flag wins, then configuration.
    ///
    /// An unknown role string is passed through so the policy can deny it.
    pub fn role(&self, flag: Option<&str>) -> Result<Reported<Role>, FulfillmentError> {
        flag.or(self.default_role.as_deref())
            .map(Reported::parse)
            .ok_or(FulfillmentError::MissingRole)
    }
}
