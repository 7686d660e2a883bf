//! Driver configuration, read from environment variables at startup.
//!
//! The driver takes no command-line arguments, so the environment is the only
//! knob. Nothing here can fail: unrecognised values are replaced by their
//! defaults and reported through `warnings`, which the driver logs once
//! tracing is up.

use std::env;
use std::io::IsTerminal;

/// When to colour headings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Some(Self::Auto),
            "always" | "on" | "1" | "true" => Some(Self::Always),
            "never" | "off" | "0" | "false" => Some(Self::Never),
            _ => None,
        }
    }
}

/// Diagnostic log layout on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
}

impl LogFormat {
    fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "compact" => Some(Self::Compact),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Example names from `GOF_PATTERNS`; empty means run everything.
    pub patterns: Vec<String>,
    /// `GOF_COLOR`
    pub color: ColorChoice,
    /// `NO_COLOR` is present
    pub no_color: bool,
    /// `GOF_LOG_FORMAT`
    pub log_format: LogFormat,
    pub warnings: Vec<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let patterns = lookup("GOF_PATTERNS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let mut warnings = Vec::new();

        let color = match lookup("GOF_COLOR") {
            None => ColorChoice::Auto,
            Some(raw) => ColorChoice::parse(&raw).unwrap_or_else(|| {
                warnings.push(format!("unrecognised GOF_COLOR '{raw}', using auto"));
                ColorChoice::Auto
            }),
        };

        let no_color = lookup("NO_COLOR").is_some_and(|v| !v.is_empty());

        let log_format = match lookup("GOF_LOG_FORMAT") {
            None => LogFormat::Compact,
            Some(raw) => LogFormat::parse(&raw).unwrap_or_else(|| {
                warnings.push(format!("unrecognised GOF_LOG_FORMAT '{raw}', using compact"));
                LogFormat::Compact
            }),
        };

        Config {
            patterns,
            color,
            no_color,
            log_format,
            warnings,
        }
    }

    /// Whether narration headings should carry ANSI colour.
    pub fn color_enabled(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => !self.no_color && std::io::stdout().is_terminal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert!(config.patterns.is_empty());
        assert_eq!(config.color, ColorChoice::Auto);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert!(!config.no_color);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_pattern_list() {
        let config = config_from(&[("GOF_PATTERNS", " Singleton, ,factory-method ,Visitor")]);
        assert_eq!(config.patterns, vec!["Singleton", "factory-method", "Visitor"]);
    }

    #[test]
    fn test_color_choice_parsing() {
        assert_eq!(ColorChoice::parse("ALWAYS"), Some(ColorChoice::Always));
        assert_eq!(ColorChoice::parse("never"), Some(ColorChoice::Never));
        assert_eq!(ColorChoice::parse(""), Some(ColorChoice::Auto));
        assert_eq!(ColorChoice::parse("rainbow"), None);
    }

    #[test]
    fn test_unknown_color_falls_back_to_auto() {
        let config = config_from(&[("GOF_COLOR", "rainbow")]);
        assert_eq!(config.color, ColorChoice::Auto);
        assert_eq!(config.warnings, vec!["unrecognised GOF_COLOR 'rainbow', using auto"]);
    }

    #[test]
    fn test_explicit_color_wins() {
        assert!(config_from(&[("GOF_COLOR", "always"), ("NO_COLOR", "1")]).color_enabled());
        assert!(!config_from(&[("GOF_COLOR", "never")]).color_enabled());
        assert!(!config_from(&[("NO_COLOR", "1")]).color_enabled());
    }

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::parse("pretty"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("PRETTY"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("compact"), Some(LogFormat::Compact));
        assert_eq!(LogFormat::parse("json"), None);
    }

    #[test]
    fn test_unknown_log_format_falls_back_to_compact() {
        let config = config_from(&[("GOF_LOG_FORMAT", "json")]);
        assert_eq!(config.log_format, LogFormat::Compact);
        assert_eq!(
            config.warnings,
            vec!["unrecognised GOF_LOG_FORMAT 'json', using compact"]
        );
        assert!(config_from(&[("GOF_LOG_FORMAT", "pretty")]).warnings.is_empty());
    }
}
