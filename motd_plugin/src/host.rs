//! The host framework boundary.
//!
//! Everything the plugin knows about its hosting framework is one of the
//! two traits here; the host supplies the implementations when it wires the
//! plugin in. Keeping this surface minimal is what lets the composer stay a
//! plain function that tests drive directly.

use motd_text::Line;

/// Trait describing an object to which a composed chat line can be sent
pub trait MessageSink {
    /// Send one line to this sink
    fn send(&self, line: Line);
}

/// Operations the plugin needs from the hosting framework
pub trait ServerHost {
    /// Register a chat command by its literal prefix, together with the
    /// one-line description shown in the host's help index
    fn register_command(&mut self, prefix: &str, help: &str);

    /// Send a line privately to a named player
    fn tell(&self, player: &str, line: Line);
}
