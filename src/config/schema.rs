//! Configuration schema definitions.
//!
//! Environment variable names, built-in defaults, and the URL service
//! parameter record.

use std::fmt;

/// Non-empty value enables URL service registration.
pub const ENV_URL_LABELS: &str = "WAYPOINT_URL_LABELS";

/// Port the wrapped application listens on.
pub const ENV_PORT: &str = "PORT";

pub const ENV_CONTROL_ADDR: &str = "WAYPOINT_CONTROL_ADDR";

/// Required whenever URL labels are set.
pub const ENV_TOKEN: &str = "WAYPOINT_TOKEN";

pub const ENV_DEPLOYMENT_ID: &str = "WAYPOINT_DEPLOYMENT_ID";
pub const ENV_SERVER_ADDR: &str = "WAYPOINT_SERVER_ADDR";

/// Non-empty value disables everything but executing the command.
pub const ENV_CEB_DISABLE: &str = "WAYPOINT_CEB_DISABLE";

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_CONTROL_ADDR: &str = "control.alpha.waypoint.run";

/// Fully resolved URL service activation parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct UrlServiceParams {
    /// Control plane address (host or host:port).
    pub control_addr: String,

    /// Authentication token for the control plane.
    pub token: String,

    /// Port traffic is routed to.
    pub port: u16,

    /// Opaque label string identifying the routing target.
    pub labels: String,
}

impl UrlServiceParams {
    pub fn new(
        control_addr: impl Into<String>,
        token: impl Into<String>,
        port: u16,
        labels: impl Into<String>,
    ) -> Self {
        Self {
            control_addr: control_addr.into(),
            token: token.into(),
            port,
            labels: labels.into(),
        }
    }
}

impl fmt::Debug for UrlServiceParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlServiceParams")
            .field("control_addr", &self.control_addr)
            .field("token", &"<redacted>")
            .field("port", &self.port)
            .field("labels", &self.labels)
            .finish()
    }
}
