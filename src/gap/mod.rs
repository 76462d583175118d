//! Generic Access Profile control layer.
//!
//! This module is a thin validation-and-delegation layer over a vendor
//! radio stack:
//!
//! 1. **Types** - advertising parameters and payloads, device addresses,
//!    connection parameter records, disconnect reasons.
//! 2. **Stack** - the [`RadioStack`](stack::RadioStack) trait standing in
//!    for the fixed `sd_ble_gap_*` call surface, so the controller can be
//!    driven against a stub on the host.
//! 3. **Controller** - range checks per the GAP limits, pass-through
//!    delegation, and the two-flag session state.
//!
//! There is no protocol state machine here; connection and advertising
//! state live inside the radio stack.

pub mod controller;
pub mod session;
pub mod stack;
pub mod types;

pub use controller::GapController;
pub use session::SessionState;
pub use stack::{RadioStack, StackError};
pub use types::{
    AddressType, AdvParams, AdvPayload, AdvType, ConnectionParams, DeviceAddress, DisconnectReason,
};
