//! Config struct definition and default implementation.

use crate::path::{FILLER_DEF, MAXPWD_LEN};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Name of the config file looked up in the home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".prwd.yaml";

/// Largest accepted `maxlength`.
pub const MAX_MAXLENGTH: usize = 255;

/// Configuration for the prompt.
///
/// This struct represents the contents of `~/.prwd.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Explicit prompt template. Overrides every legacy setting below.
    pub template: Option<String>,

    // =========================================================================
    // Legacy prompt settings
    // =========================================================================
    /// Maximum path length, 0 for unlimited.
    #[serde(default = "default_maxlength")]
    pub maxlength: usize,

    /// Text shown where the path was cut.
    #[serde(default = "default_filler")]
    pub filler: String,

    /// Only cut the path on `/` boundaries.
    pub cleancut: bool,

    /// Abbreviate every path component but the last.
    pub newsgroup: bool,

    /// Prefix the prompt with the short hostname.
    pub hostname: bool,

    /// Show the git branch.
    pub git: bool,

    /// Show the mercurial branch.
    pub mercurial: bool,

    /// End the prompt with `$` or `#`.
    pub uid_indicator: bool,

    // =========================================================================
    // Aliases
    // =========================================================================
    /// Alias name to directory, e.g. `$src: /home/me/src`.
    pub aliases: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: None,
            maxlength: default_maxlength(),
            filler: default_filler(),
            cleancut: false,
            newsgroup: false,
            hostname: false,
            git: false,
            mercurial: false,
            uid_indicator: false,
            aliases: BTreeMap::new(),
        }
    }
}

fn default_maxlength() -> usize {
    MAXPWD_LEN
}

fn default_filler() -> String {
    FILLER_DEF.to_string()
}
