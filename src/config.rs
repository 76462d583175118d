//! GAP-wide constants and compile-time configuration.
//!
//! All advertising limits, connection parameter defaults, and HCI
//! constants live here so they can be tuned in one place.

// Advertising

/// Maximum advertising (or scan response) payload size in bytes.
pub const ADV_MAX_PAYLOAD_LEN: usize = 31;

/// Minimum advertising interval for connectable and scannable types
/// (in 0.625 ms units). 0x0020 = 20 ms.
pub const ADV_INTERVAL_MIN: u16 = 0x0020;

/// Minimum advertising interval for non-connectable advertising
/// (in 0.625 ms units). The BLE spec mandates a longer minimum here.
/// 0x00A0 = 100 ms.
pub const ADV_INTERVAL_MIN_NONCON: u16 = 0x00A0;

/// Maximum advertising interval for all types (in 0.625 ms units).
/// 0x4000 = 10.24 s.
pub const ADV_INTERVAL_MAX: u16 = 0x4000;

/// Maximum advertising timeout (seconds). 0 means advertise forever.
pub const ADV_TIMEOUT_MAX: u16 = 0x3FFF;

// Connections

/// Connection handle value meaning "no connection".
pub const CONN_HANDLE_INVALID: u16 = 0xFFFF;

/// Default preferred connection interval range (in 1.25 ms units).
/// 24 = 30 ms, 40 = 50 ms.
pub const CONN_INTERVAL_MIN: u16 = 24;
pub const CONN_INTERVAL_MAX: u16 = 40;

/// Default slave latency (connection events the peripheral may skip).
pub const CONN_SLAVE_LATENCY: u16 = 0;

/// Default supervision timeout (in 10 ms units). 400 = 4 s.
pub const CONN_SUP_TIMEOUT: u16 = 400;

// HCI status codes (BT Core spec Vol 1 Part F)

/// Remote User Terminated Connection.
pub const HCI_REMOTE_USER_TERMINATED: u8 = 0x13;

/// Unacceptable Connection Parameters.
pub const HCI_CONN_INTERVAL_UNACCEPTABLE: u8 = 0x3B;

// Device identity

/// Maximum device name length accepted by the SoftDevice name storage.
pub const MAX_DEVICE_NAME_LEN: usize = 32;

/// Length of a BLE device address in bytes.
pub const ADDR_LEN: usize = 6;
