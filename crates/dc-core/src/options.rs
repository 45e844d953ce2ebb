//! Game options and configuration
//!
//! Options are read from an rc-style file:
//!
//! ```text
//! # comments start with '#'
//! OPTIONS=seed:42,start:hall
//! OPTIONS=!welcome,color,msghistory:200
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// User-configurable game options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOptions {
    /// RNG seed; a random seed is used when absent
    pub seed: Option<u64>,
    /// Start room override
    pub start: Option<String>,
    /// Show the welcome banner
    pub welcome: bool,
    /// Colored output in the terminal front-end
    pub color: bool,
    /// Number of narration lines the front-end keeps
    pub msghistory: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            seed: None,
            start: None,
            welcome: true,
            color: true,
            msghistory: 500,
        }
    }
}

/// Options parsing error
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("Invalid value '{1}' for option '{0}'")]
    InvalidValue(String, String),

    #[error("Missing value for option '{0}'")]
    MissingValue(String),
}

impl GameOptions {
    /// Load options from a config file
    pub fn load_from_file(path: &Path) -> Result<Self, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_config(&contents)
    }

    /// Parse options from a config string
    pub fn parse_config(contents: &str) -> Result<Self, OptionsError> {
        let mut options = Self::default();

        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some(opts) = line.strip_prefix("OPTIONS=") {
                for opt in opts.split(',').map(str::trim).filter(|o| !o.is_empty()) {
                    options.parse_option(opt)?;
                }
            }
        }

        Ok(options)
    }

    /// Parse a single option
    fn parse_option(&mut self, opt: &str) -> Result<(), OptionsError> {
        if let Some((key, value)) = opt.split_once(':').or_else(|| opt.split_once('=')) {
            return self.set_option(key.trim(), value.trim());
        }

        let (negated, name) = match opt.strip_prefix('!') {
            Some(name) => (true, name),
            None => (false, opt),
        };
        self.set_bool_option(name, !negated)
    }

    fn set_bool_option(&mut self, name: &str, value: bool) -> Result<(), OptionsError> {
        match name {
            "welcome" => self.welcome = value,
            "color" => self.color = value,
            "seed" | "start" | "msghistory" => {
                return Err(OptionsError::MissingValue(name.to_string()));
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), OptionsError> {
        let invalid = || OptionsError::InvalidValue(name.to_string(), value.to_string());
        if value.is_empty() {
            return Err(OptionsError::MissingValue(name.to_string()));
        }

        match name {
            "seed" => self.seed = Some(value.parse().map_err(|_| invalid())?),
            "start" => self.start = Some(value.to_string()),
            "msghistory" => self.msghistory = value.parse().map_err(|_| invalid())?,
            "welcome" | "color" => {
                let flag = match value {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => return Err(invalid()),
                };
                return self.set_bool_option(name, flag);
            }
            _ => return Err(OptionsError::UnknownOption(name.to_string())),
        }
        Ok(())
    }

    /// Save options to a file
    pub fn save_to_file(&self, path: &Path) -> Result<(), OptionsError> {
        std::fs::write(path, self.to_config_string())?;
        Ok(())
    }

    /// Serialize back to config file form
    pub fn to_config_string(&self) -> String {
        let mut opts = Vec::new();
        if let Some(seed) = self.seed {
            opts.push(format!("seed:{seed}"));
        }
        if let Some(start) = &self.start {
            opts.push(format!("start:{start}"));
        }
        opts.push(flag("welcome", self.welcome));
        opts.push(flag("color", self.color));
        opts.push(format!("msghistory:{}", self.msghistory));
        format!("OPTIONS={}\n", opts.join(","))
    }
}

fn flag(name: &str, on: bool) -> String {
    if on { name.to_string() } else { format!("!{name}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = GameOptions::default();
        assert!(opts.welcome);
        assert!(opts.color);
        assert!(opts.seed.is_none());
    }

    #[test]
    fn test_parse_bool_option() {
        let opts = GameOptions::parse_config("OPTIONS=!welcome,color").unwrap();
        assert!(!opts.welcome);
        assert!(opts.color);
    }

    #[test]
    fn test_parse_value_option() {
        let config = "# my dungeon\nOPTIONS=seed:42, start=hall\n\nOPTIONS=msghistory:20";
        let opts = GameOptions::parse_config(config).unwrap();
        assert_eq!(opts.seed, Some(42));
        assert_eq!(opts.start.as_deref(), Some("hall"));
        assert_eq!(opts.msghistory, 20);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            GameOptions::parse_config("OPTIONS=sparkles"),
            Err(OptionsError::UnknownOption(_))
        ));
        assert!(matches!(
            GameOptions::parse_config("OPTIONS=seed:abc"),
            Err(OptionsError::InvalidValue(..))
        ));
        assert!(matches!(
            GameOptions::parse_config("OPTIONS=seed"),
            Err(OptionsError::MissingValue(_))
        ));
    }

    #[test]
    fn test_roundtrip() {
        let opts = GameOptions {
            seed: Some(7),
            start: Some("trap".to_string()),
            welcome: false,
            color: false,
            msghistory: 64,
        };
        let parsed = GameOptions::parse_config(&opts.to_config_string()).unwrap();
        assert_eq!(parsed, opts);
    }
}
