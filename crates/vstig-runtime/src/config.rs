//! Stigmergy runtime configuration.

use vstig_core::RobotId;

/// Per-robot runtime settings.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// This robot's identity. Stamped as owner on every local write and
    /// as source on every outbound envelope.
    pub robot: RobotId,
    /// Whether reads announce themselves with query packets.
    ///
    /// Disabling this halves gossip traffic for read-heavy swarms at the
    /// cost of neighbours no longer seeing read activity.
    pub emit_read_notifications: bool,
}

impl RuntimeConfig {
    /// Default configuration for a robot: read notifications enabled.
    pub fn new(robot: RobotId) -> Self {
        Self {
            robot,
            emit_read_notifications: true,
        }
    }
}
