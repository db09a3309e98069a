//! A "message of the day" plugin for a server-management host framework.
//!
//! On player join, or on the `!!joinMOTD` command, the plugin sends the
//! requesting recipient a welcome banner, a counter of days since the
//! configured opening date, and the configured sub-server list grouped by
//! category, each entry as a clickable link that switches the player to
//! that server.
//!
//! Layering: [`motd::compose_motd`] is a pure function of configuration and
//! clock; [`plugin::JoinMotdPlugin`] adapts the host's callbacks onto it;
//! all knowledge of the host framework lives in the two traits in [`host`].

pub mod config;
pub mod error;
pub mod host;
pub mod motd;
pub mod plugin;

pub use config::{MotdConfig, ServerEntry, CONFIG_FILE_PATH};
pub use error::ConfigError;
pub use host::{MessageSink, ServerHost};
pub use motd::{compose_motd, server_age};
pub use plugin::{JoinMotdPlugin, COMMAND_PREFIX, HELP_MESSAGE};
