use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::stdout().is_terminal(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
        }
    }
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Plain output: no colors
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    /// Resolve color mode from the environment.
    ///
    /// `NO_COLOR` (no-color.org) and `CLICOLOR=0` disable color,
    /// `CLICOLOR_FORCE=1` forces it; `CLICOLOR_FORCE` wins.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if env::var("NO_COLOR").is_ok() {
            config.color = ColorMode::Never;
        }

        if let Ok(val) = env::var("CLICOLOR") {
            if val == "0" {
                config.color = ColorMode::Never;
            }
        }

        if let Ok(val) = env::var("CLICOLOR_FORCE") {
            if val == "1" {
                config.color = ColorMode::Always;
            }
        }

        config
    }

    /// Apply a config-file preference unless the environment already decided
    pub fn with_preference(mut self, use_color: Option<bool>) -> Self {
        if let (ColorMode::Auto, Some(enabled)) = (self.color, use_color) {
            self.color = if enabled {
                ColorMode::Always
            } else {
                ColorMode::Never
            };
        }
        self
    }

    pub fn use_color(&self) -> bool {
        self.color.should_use_color()
    }
}

/// Applies colors only when the configuration allows it
pub struct ColoredFormatter {
    use_color: bool,
}

impl ColoredFormatter {
    pub fn new(config: FormattingConfig) -> Self {
        let use_color = config.use_color();
        colored::control::set_override(use_color);
        Self { use_color }
    }

    fn paint(&self, text: &str, f: impl FnOnce(&str) -> ColoredString) -> String {
        if self.use_color {
            f(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, |t| t.red())
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, |t| t.yellow())
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(text, |t| t.cyan())
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_parse() {
        assert_eq!(ColorMode::parse("AUTO"), Some(ColorMode::Auto));
        assert_eq!(ColorMode::parse("always"), Some(ColorMode::Always));
        assert_eq!(ColorMode::parse("never"), Some(ColorMode::Never));
        assert_eq!(ColorMode::parse("sometimes"), None);
    }

    #[test]
    fn test_preference_only_applies_to_auto() {
        let auto = FormattingConfig::default().with_preference(Some(false));
        assert_eq!(auto.color, ColorMode::Never);

        let forced = FormattingConfig::new(ColorMode::Always).with_preference(Some(false));
        assert_eq!(forced.color, ColorMode::Always);

        let untouched = FormattingConfig::default().with_preference(None);
        assert_eq!(untouched.color, ColorMode::Auto);
    }

    #[test]
    fn test_plain_formatter_leaves_text_alone() {
        let formatter = ColoredFormatter::new(FormattingConfig::plain());
        assert_eq!(formatter.error("boom"), "boom");
        assert_eq!(formatter.header("title"), "title");
    }
}
