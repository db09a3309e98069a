//! The plugin adapter: owns the live configuration and maps the host's
//! callbacks onto [`compose_motd`].

use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;
use chrono::Local;

use motd_text::Line;

use crate::config::{MotdConfig, CONFIG_FILE_PATH};
use crate::error::ConfigError;
use crate::host::{MessageSink, ServerHost};
use crate::motd::compose_motd;

/// Literal prefix the MOTD command is registered under
pub const COMMAND_PREFIX: &str = "!!joinMOTD";

/// Help line registered against [`COMMAND_PREFIX`]
pub const HELP_MESSAGE: &str = "显示欢迎消息";

/// The configuration sits behind an [`ArcSwap`] so a reload replaces it
/// wholesale; an invocation already composing keeps the snapshot it loaded
/// and never observes a partial update.
pub struct JoinMotdPlugin {
    config: ArcSwap<MotdConfig>,
}

impl JoinMotdPlugin {
    /// A plugin holding the default configuration. [`Self::on_load`]
    /// replaces it with the persisted one.
    pub fn new() -> Self {
        Self {
            config: ArcSwap::from_pointee(MotdConfig::default()),
        }
    }

    /// Current configuration snapshot
    pub fn config(&self) -> Arc<MotdConfig> {
        self.config.load_full()
    }

    /// Plugin activation: load (or initialize) the persisted configuration,
    /// then register the command surface with the host
    pub fn on_load(&self, host: &mut dyn ServerHost) -> Result<(), ConfigError> {
        self.reload_from(CONFIG_FILE_PATH)?;
        self.register_with(host);
        Ok(())
    }

    /// Announce the command prefix and its help line to the host
    fn register_with(&self, host: &mut dyn ServerHost) {
        host.register_command(COMMAND_PREFIX, HELP_MESSAGE);
    }

    /// Re-read the configuration from `path`, replacing the active one
    /// atomically
    pub fn reload_from(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let config = MotdConfig::load_or_init(path)?;
        tracing::debug!(
            "Loaded configuration with {} server entries",
            config.server_list.len()
        );
        self.config.store(Arc::new(config));
        Ok(())
    }

    /// Join event: send the MOTD privately to the joining player
    pub fn on_player_joined(&self, player: &str, host: &dyn ServerHost) {
        for line in self.compose_now() {
            host.tell(player, line);
        }
    }

    /// Command invocation: reply to whoever ran it
    pub fn on_command(&self, source: &dyn MessageSink) {
        for line in self.compose_now() {
            source.send(line);
        }
    }

    fn compose_now(&self) -> Vec<Line> {
        let config = self.config.load();
        compose_motd(&config, Local::now().naive_local())
    }
}

impl Default for JoinMotdPlugin {
    fn default() -> Self {
        Self::new()
    }
}
