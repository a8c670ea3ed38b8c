//! Config loading, validation, and template generation.

use super::model::{Config, DEFAULT_CONFIG_FILE, MAX_MAXLENGTH};
use crate::alias::AliasTable;
use crate::error::{PrwdError, Result};
use crate::path::FILLER_LEN;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PrwdError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        let content = std::fs::read_to_string(path).map_err(|e| {
            PrwdError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// `~/.prwd.yaml`, when the home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_CONFIG_FILE))
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PrwdError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `maxlength` must not exceed 255
    /// - `filler` must be shorter than 16 characters
    pub fn validate(&self) -> Result<()> {
        if self.maxlength > MAX_MAXLENGTH {
            return Err(PrwdError::UserError(format!(
                "config validation failed: maxlength must be between 0 and {} (found {})",
                MAX_MAXLENGTH, self.maxlength
            )));
        }

        if self.filler.chars().count() >= FILLER_LEN {
            return Err(PrwdError::UserError(format!(
                "config validation failed: filler must be shorter than {} characters",
                FILLER_LEN
            )));
        }

        Ok(())
    }

    /// The prompt template: the explicit one, or one built from the legacy
    /// settings.
    ///
    /// With every legacy flag set the generated template reads
    /// `${hostname}:${branch}${sep :}${path -n -l 24 -f "..."}${uid}`.
    pub fn template(&self) -> String {
        if let Some(template) = &self.template {
            return template.clone();
        }

        let mut template = String::new();

        if self.hostname {
            template.push_str("${hostname}:");
        }

        if self.git || self.mercurial {
            template.push_str("${branch}${sep :}");
        }

        template.push_str("${path");
        if self.cleancut {
            template.push_str(" -c");
        } else if self.newsgroup {
            template.push_str(" -n");
        }
        template.push_str(&format!(
            " -l {} -f \"{}\"}}",
            self.maxlength,
            escape_quoted(&self.filler)
        ));

        if self.uid_indicator {
            template.push_str("${uid}");
        }

        template
    }

    /// Build the alias table: `~` for `home` first, then the configured
    /// aliases in name order.
    pub fn alias_table(&self, home: Option<&Path>) -> Result<AliasTable> {
        let mut table = AliasTable::new();

        match home.map(|h| h.to_str()) {
            Some(Some(home)) => add_alias(&mut table, "~", home)?,
            Some(None) => warn!("home directory is not valid UTF-8, no ~ alias"),
            None => debug!("no home directory, no ~ alias"),
        }

        for (name, path) in &self.aliases {
            add_alias(&mut table, name, path)?;
        }

        Ok(table)
    }
}

fn add_alias(table: &mut AliasTable, name: &str, path: &str) -> Result<()> {
    table
        .add(name, path)
        .map_err(|e| PrwdError::UserError(format!("invalid alias '{}': {}", name, e)))
}

/// Escape text for use inside a double-quoted template argument.
fn escape_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
