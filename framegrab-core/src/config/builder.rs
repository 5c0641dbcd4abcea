// ============================================================================
// framegrab-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Fluent construction of ExtractConfig
//
// Every field starts at its default from `config/mod.rs`; setters override
// individual values and `build()` hands back the finished configuration.

use std::path::PathBuf;
use std::time::Duration;

use super::ExtractConfig;
use crate::output_path::OutputNaming;

/// Builder for [`ExtractConfig`].
#[derive(Debug, Clone, Default)]
pub struct ExtractConfigBuilder {
    config: ExtractConfig,
}

impl ExtractConfigBuilder {
    /// Creates a builder seeded with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ffprobe_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.ffprobe_path = path.into();
        self
    }

    pub fn ffmpeg_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.ffmpeg_path = path.into();
        self
    }

    /// Sets the per-invocation timeout. `None` disables it.
    pub fn command_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.config.command_timeout = timeout;
        self
    }

    /// Convenience for CLI input where `0` means "no timeout".
    pub fn command_timeout_secs(self, secs: u64) -> Self {
        let timeout = (secs > 0).then(|| Duration::from_secs(secs));
        self.command_timeout(timeout)
    }

    pub fn output_naming(mut self, naming: OutputNaming) -> Self {
        self.config.output_naming = naming;
        self
    }

    pub fn build(self) -> ExtractConfig {
        self.config
    }
}
