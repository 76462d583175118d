//! GAP control layer for SoftDevice-based BLE peripherals.
//!
//! The crate core is pure validation-and-delegation logic with no
//! hardware dependencies, so it builds and tests on the host:
//!
//! ```text
//! cargo test
//! ```
//!
//! The radio stack is injected through [`gap::RadioStack`]; on target the
//! `embedded` feature provides [`sd::SoftdeviceStack`], which maps the
//! trait onto the raw `sd_ble_gap_*` calls, plus the firmware binary in
//! `main.rs`.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod gap;

#[cfg(feature = "embedded")]
pub mod sd;

pub use error::GapError;
pub use gap::{
    AddressType, AdvParams, AdvPayload, AdvType, ConnectionParams, DeviceAddress,
    DisconnectReason, GapController, RadioStack, SessionState, StackError,
};
