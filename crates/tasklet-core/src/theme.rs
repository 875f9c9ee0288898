#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub enum Theme {
  #[default]
  Light,
  Dark
}

impl Theme {
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Light => "app",
      | Self::Dark => "app dark"
    }
  }

  pub fn next(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn storage_value(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "light",
      | Self::Dark => "dark"
    }
  }

  /// Anything other than the literal
  /// `"dark"` reads back as light.
  pub fn from_storage_value(
    raw: &str
  ) -> Self {
    if raw == "dark" {
      Self::Dark
    } else {
      Self::Light
    }
  }

  pub fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "🌙 Dark",
      | Self::Dark => "🌞 Light"
    }
  }
}
