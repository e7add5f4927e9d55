use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  error,
  info
};

use crate::store::RefreshPolicy;

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct BoardConfig {
  pub title:          String,
  pub refresh_policy: RefreshPolicy,
  /// Hide task details on board cards.
  pub compact_cards:  bool
}

impl Default for BoardConfig {
  fn default() -> Self {
    Self {
      title:          "Tasks".to_string(),
      refresh_policy: RefreshPolicy::default(),
      compact_cards:  false
    }
  }
}

impl BoardConfig {
  pub fn from_toml_str(
    text: &str
  ) -> anyhow::Result<Self> {
    let cfg: BoardConfig =
      toml::from_str(text).context(
        "failed to parse board config"
      )?;
    Ok(cfg)
  }

  /// Falls back to defaults when `text`
  /// does not parse.
  pub fn load_or_default(
    text: &str
  ) -> Self {
    match Self::from_toml_str(text) {
      | Ok(cfg) => {
        info!(
          title = %cfg.title,
          refresh_policy = ?cfg.refresh_policy,
          compact_cards = cfg.compact_cards,
          "loaded board config"
        );
        cfg
      }
      | Err(error) => {
        error!(
          error = %format!("{error:#}"),
          "failed to load board config; \
           using defaults"
        );
        Self::default()
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_text_gives_defaults() {
    assert_eq!(
      BoardConfig::from_toml_str("")
        .unwrap(),
      BoardConfig::default()
    );
  }

  #[test]
  fn partial_text_overrides_fields() {
    let cfg = BoardConfig::from_toml_str(
      "refresh_policy = \
       \"latest_request\"\ncompact_cards \
       = true\n"
    )
    .unwrap();
    assert_eq!(
      cfg.refresh_policy,
      RefreshPolicy::LatestRequest
    );
    assert!(cfg.compact_cards);
    assert_eq!(cfg.title, "Tasks");
  }

  #[test]
  fn invalid_text_falls_back() {
    let cfg = BoardConfig::load_or_default(
      "refresh_policy = \"sometimes\""
    );
    assert_eq!(cfg, BoardConfig::default());
    assert!(
      BoardConfig::from_toml_str(
        "title = ["
      )
      .is_err()
    );
  }
}
