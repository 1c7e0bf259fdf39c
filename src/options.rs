//! Shared options of the mapping process.
//!
//! The option store is read-only for this crate: constructors and the
//! stacking operator only consult it before emitting advisory messages.
//! The rendering stage owns the full option set; the fields kept here are
//! the ones this layer needs.

use std::{fmt, fs, io};
use std::path::Path;
use serde::{Deserialize, Serialize};


//------------ Options -------------------------------------------------------

/// The shared options consulted while composing a map.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Options {
    /// Should advisory warnings be emitted?
    #[serde(default = "default_true")]
    pub show_warnings: bool,

    /// Should informational messages be emitted?
    #[serde(default = "default_true")]
    pub show_messages: bool,
}

impl Options {
    /// Loads the options from a TOML file.
    ///
    /// Missing keys fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, io::Error> {
        let data = fs::read_to_string(path.as_ref())?;
        toml::from_str(&data).map_err(|err| {
            io::Error::new(io::ErrorKind::InvalidData, err)
        })
    }

    /// Emits an advisory warning if warnings are enabled.
    ///
    /// Advisories are never fatal. They go through the `log` facade; the
    /// host program decides where they end up.
    pub fn warn(&self, msg: impl fmt::Display) {
        if self.show_warnings {
            log::warn!("{}", msg)
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            show_warnings: true,
            show_messages: true,
        }
    }
}

fn default_true() -> bool {
    true
}


//============ Tests =========================================================
