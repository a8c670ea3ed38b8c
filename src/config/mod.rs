//! Configuration model for prwd.
//!
//! This module defines the Config struct that represents `~/.prwd.yaml`.
//! Unknown fields are ignored, every field has a default, and a missing
//! default file simply means "use the defaults".
//!
//! A config either names a `template` directly or describes the prompt with
//! the legacy flags (`hostname`, `git`, `newsgroup`, ...), from which a
//! template is generated.

mod model;
mod operations;


pub use model::{Config, DEFAULT_CONFIG_FILE, MAX_MAXLENGTH};
