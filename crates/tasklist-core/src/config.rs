use anyhow::Context;
use serde::Deserialize;
use tracing::debug;

pub const DEFAULT_STORAGE_KEY: &str =
  "todo-tasks";
pub const DEFAULT_ENTRY_ANIMATION_MS: u32 =
  500;
pub const DEFAULT_EMPTY_MESSAGE: &str =
  "No tasks here. Add one to get started!";

#[derive(
  Debug, Clone, PartialEq, Eq, Deserialize,
)]
#[serde(default)]
pub struct Config {
  /// Name of the storage slot holding the task list.
  pub storage_key:        String,
  pub entry_animation_ms: u32,
  pub empty_message:      String
}

impl Default for Config {
  fn default() -> Self {
    Self {
      storage_key:        DEFAULT_STORAGE_KEY
        .to_string(),
      entry_animation_ms:
        DEFAULT_ENTRY_ANIMATION_MS,
      empty_message:      DEFAULT_EMPTY_MESSAGE
        .to_string()
    }
  }
}

impl Config {
  #[tracing::instrument(skip(text))]
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let mut cfg: Config = toml::from_str(text)
      .context("failed to parse tasklist config")?;

    if cfg.storage_key.trim().is_empty() {
      debug!(
        "blank storage key; using default"
      );
      cfg.storage_key =
        DEFAULT_STORAGE_KEY.to_string();
    }

    debug!(
      storage_key = %cfg.storage_key,
      entry_animation_ms = cfg.entry_animation_ms,
      "loaded config"
    );
    Ok(cfg)
  }
}
