use anyhow::Context;
use serde::Deserialize;
use tracing::{
  info,
  warn
};

use crate::task::IdStyle;

pub const MINIMAL_TASKS_KEY: &str =
  "tasks";
pub const RICH_TASKS_KEY: &str =
  "my_todos_v1";
pub const RICH_THEME_KEY: &str =
  "my_todos_theme_v1";

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
  Minimal,
  #[default]
  Rich
}

/// How a row enters edit mode.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum EditStyle {
  /// The row swaps its label for a
  /// text field and commits on its own.
  Inline,
  /// The row moves the editing cursor
  /// and the top form switches to
  /// update mode.
  Form
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub struct Features {
  pub priorities: bool,
  pub timestamps: bool,
  pub theme:      bool,
  pub stats:      bool,
  pub id_style:   IdStyle,
  pub edit_style: EditStyle
}

impl Features {
  pub fn for_variant(
    variant: Variant
  ) -> Self {
    match variant {
      | Variant::Minimal => Self {
        priorities: false,
        timestamps: false,
        theme:      false,
        stats:      false,
        id_style:   IdStyle::Numeric,
        edit_style: EditStyle::Inline
      },
      | Variant::Rich => Self {
        priorities: true,
        timestamps: true,
        theme:      true,
        stats:      true,
        id_style:   IdStyle::Text,
        edit_style: EditStyle::Form
      }
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
  pub variant:   Variant,
  pub title:     String,
  pub tasks_key: String,
  pub theme_key: String
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
  variant: Variant,
  title:   Option<String>,
  storage: RawStorage
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawStorage {
  tasks_key: Option<String>,
  theme_key: Option<String>
}

impl AppConfig {
  pub fn for_variant(
    variant: Variant
  ) -> Self {
    let (title, tasks_key) =
      match variant {
        | Variant::Minimal => (
          "Advanced To-Do List",
          MINIMAL_TASKS_KEY
        ),
        | Variant::Rich => (
          "📝 Advanced To-Do",
          RICH_TASKS_KEY
        )
      };
    Self {
      variant,
      title: title.to_string(),
      tasks_key: tasks_key.to_string(),
      theme_key: RICH_THEME_KEY
        .to_string()
    }
  }

  #[tracing::instrument(skip(raw))]
  pub fn from_toml(
    raw: &str
  ) -> anyhow::Result<Self> {
    let parsed: RawConfig =
      toml::from_str(raw).context(
        "failed to parse tasklet \
         configuration"
      )?;

    let mut cfg =
      Self::for_variant(parsed.variant);
    if let Some(title) = non_blank(
      parsed.title
    ) {
      cfg.title = title;
    }
    if let Some(key) = non_blank(
      parsed.storage.tasks_key
    ) {
      cfg.tasks_key = key;
    }
    if let Some(key) = non_blank(
      parsed.storage.theme_key
    ) {
      cfg.theme_key = key;
    }

    info!(
      variant = ?cfg.variant,
      tasks_key = %cfg.tasks_key,
      "loaded tasklet configuration"
    );
    Ok(cfg)
  }

  /// Falls back to the rich defaults
  /// when `raw` does not parse.
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml(raw) {
      | Ok(cfg) => cfg,
      | Err(error) => {
        warn!(
          error = %format_args!(
            "{error:#}"
          ),
          "using default configuration"
        );
        Self::for_variant(
          Variant::default()
        )
      }
    }
  }

  pub fn features(&self) -> Features {
    Features::for_variant(self.variant)
  }
}

fn non_blank(
  value: Option<String>
) -> Option<String> {
  value
    .map(|v| v.trim().to_string())
    .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn minimal_variant_uses_plain_tasks_key(
  ) {
    let cfg = AppConfig::from_toml(
      "variant = \"minimal\"\n"
    )
    .unwrap();
    assert_eq!(
      cfg.variant,
      Variant::Minimal
    );
    assert_eq!(cfg.tasks_key, "tasks");
    assert!(!cfg.features().theme);
    assert_eq!(
      cfg.features().edit_style,
      EditStyle::Inline
    );
  }

  #[test]
  fn storage_keys_can_be_overridden() {
    let cfg = AppConfig::from_toml(
      r#"
variant = "rich"
title = "Chores"

[storage]
tasks_key = "chores"
theme_key = "  "
"#
    )
    .unwrap();
    assert_eq!(cfg.title, "Chores");
    assert_eq!(cfg.tasks_key, "chores");
    assert_eq!(
      cfg.theme_key,
      RICH_THEME_KEY
    );
  }

  #[test]
  fn malformed_config_falls_back_to_rich(
  ) {
    let cfg = AppConfig::load_or_default(
      "variant = \"gigantic\""
    );
    assert_eq!(cfg.variant, Variant::Rich);
    assert_eq!(
      cfg.tasks_key,
      RICH_TASKS_KEY
    );
  }

  #[test]
  fn empty_config_is_rich() {
    let cfg =
      AppConfig::from_toml("").unwrap();
    assert_eq!(
      cfg,
      AppConfig::for_variant(
        Variant::Rich
      )
    );
  }
}
