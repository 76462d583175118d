//! GAP session state.
//!
//! Two flags plus the active connection handle - everything else
//! (advertising sets, link-layer state, bonding) lives inside the radio
//! stack. Plain fields, no atomicity: a single control context is
//! assumed.

use crate::config::CONN_HANDLE_INVALID;

/// Local view of the GAP session, owned by the controller.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SessionState {
    /// Set when we have commanded the stack to advertise.
    pub advertising: bool,
    /// Set when a central is connected.
    pub connected: bool,
    /// Handle of the active connection, `CONN_HANDLE_INVALID` when unset.
    pub conn_handle: u16,
}

impl SessionState {
    pub const fn new() -> Self {
        Self {
            advertising: false,
            connected: false,
            conn_handle: CONN_HANDLE_INVALID,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
