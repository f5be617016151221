use std::io::IsTerminal;

use clap::{
  ValueEnum,
  builder::styling::{Color as ClapColor, RgbColor, Style, Styles},
};
use comfy_table::Color as CellColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// What a piece of terminal output is, independent of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  Timestamp,
  Primary,
  Accent,
  Info,
  Success,
  Label,
  Value,
}

type Rgb = (u8, u8, u8);

impl Theme {
  /// Roasted tones on dark backgrounds, ink tones on light ones.
  const fn rgb(self, role: Role) -> Rgb {
    match (self, role) {
      (Theme::Dark, Role::Timestamp) => (128, 150, 160),
      (Theme::Dark, Role::Primary) => (214, 170, 120),
      (Theme::Dark, Role::Accent) => (222, 110, 80),
      (Theme::Dark, Role::Info) => (120, 180, 200),
      (Theme::Dark, Role::Success) => (130, 190, 120),
      (Theme::Dark, Role::Label) => (235, 190, 110),
      (Theme::Dark, Role::Value) => (245, 225, 170),
      (Theme::Light, Role::Timestamp) => (96, 96, 110),
      (Theme::Light, Role::Primary) => (84, 52, 30),
      (Theme::Light, Role::Accent) => (176, 64, 40),
      (Theme::Light, Role::Info) => (30, 100, 150),
      (Theme::Light, Role::Success) => (40, 120, 70),
      (Theme::Light, Role::Label) => (140, 86, 30),
      (Theme::Light, Role::Value) => (110, 70, 120),
    }
  }
}

/// Resolved output colors; `None` means plain text.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
  theme: Option<Theme>,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self {
      theme: if enabled { Some(theme) } else { None },
    }
  }

  const fn rgb(&self, role: Role) -> Option<Rgb> {
    match self.theme {
      Some(theme) => Some(theme.rgb(role)),
      None => None,
    }
  }

  /// Foreground for log lines.
  pub const fn fg(&self, role: Role) -> Color {
    match self.rgb(role) {
      Some((r, g, b)) => Color::Rgb { r, g, b },
      None => Color::Reset,
    }
  }

  /// Foreground for table cells.
  pub const fn cell(&self, role: Role) -> CellColor {
    match self.rgb(role) {
      Some((r, g, b)) => CellColor::Rgb { r, g, b },
      None => CellColor::Reset,
    }
  }

  /// Help output styles, always using the dark theme.
  pub const fn clap_styles() -> Styles {
    const fn style(role: Role) -> Style {
      let (r, g, b) = Theme::Dark.rgb(role);
      Style::new().fg_color(Some(ClapColor::Rgb(RgbColor(r, g, b))))
    }

    Styles::styled()
      .header(style(Role::Label).bold().underline())
      .usage(style(Role::Label).bold())
      .literal(style(Role::Success))
      .placeholder(style(Role::Info))
      .error(style(Role::Accent).bold())
      .valid(style(Role::Success))
      .invalid(style(Role::Accent).bold())
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => theme_from_env(
      std::env::var("COLORFGBG").ok().as_deref(),
      std::env::var("ITERM_PROFILE").ok().as_deref(),
    ),
  }
}

/// `COLORFGBG` is `fg;bg` (or `fg;default;bg`); a background of 7 or 15 is light.
/// Without it, an iTerm profile whose name mentions "light" is light.
fn theme_from_env(colorfgbg: Option<&str>, iterm_profile: Option<&str>) -> Theme {
  let background = colorfgbg
    .and_then(|value| value.rsplit(';').next())
    .and_then(|bg| bg.trim().parse::<u8>().ok());

  match background {
    Some(7 | 15) => Theme::Light,
    Some(_) => Theme::Dark,
    None if iterm_profile.is_some_and(|profile| profile.to_ascii_lowercase().contains("light")) => Theme::Light,
    None => Theme::Dark,
  }
}
