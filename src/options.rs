//! Build options
//!
//! The only two switches the builder recognises. Both default to `true`.

use serde::Deserialize;

/// Options for [crate::compile] and [crate::IndentParser]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildOptions {
    /// Remove trailing spaces and tabs from non-blank text
    pub strip: bool,
    /// Emit a Block for every blank line instead of dropping them
    pub track_empty_lines: bool,
}

impl BuildOptions {
    pub fn with_strip(mut self, strip: bool) -> Self {
        self.strip = strip;
        self
    }

    pub fn with_track_empty_lines(mut self, track_empty_lines: bool) -> Self {
        self.track_empty_lines = track_empty_lines;
        self
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            strip: true,
            track_empty_lines: true,
        }
    }
}
