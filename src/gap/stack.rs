//! The radio-stack call surface the controller delegates to.
//!
//! The vendor firmware exposes a fixed set of C calls (`sd_ble_gap_*`);
//! here that surface is a trait so the controller can run against the
//! real SoftDevice on target and against a stub on the host. Method
//! names mirror the vendor calls they stand in for.

use crate::gap::types::{AdvParams, ConnectionParams, DeviceAddress};

/// A raw result code returned by the radio stack.
///
/// Carried for logging only; callers see every stack failure collapsed
/// to [`GapError::ParamOutOfRange`](crate::error::GapError).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StackError(pub u32);

/// The GAP capabilities of the underlying radio stack.
///
/// Implementations are synchronous and blocking; the controller issues
/// one call at a time from a single context. Every method returns the
/// stack's own verdict - no validation happens at this layer.
pub trait RadioStack {
    // Advertising control

    /// Replace the active advertising and scan response data.
    fn adv_data_set(&mut self, adv: &[u8], scan_rsp: &[u8]) -> Result<(), StackError>;

    /// Start advertising with the given parameters. Implementations must
    /// broadcast to any scanner: no peer address, no whitelist filtering.
    fn adv_start(&mut self, params: &AdvParams) -> Result<(), StackError>;

    /// Stop advertising. Fails if the stack is not currently advertising.
    fn adv_stop(&mut self) -> Result<(), StackError>;

    // Address control

    /// Set the device address, with address cycling disabled.
    fn addr_set(&mut self, addr: &DeviceAddress) -> Result<(), StackError>;

    /// Read back the current device address.
    fn addr_get(&self) -> Result<DeviceAddress, StackError>;

    // Device name

    /// Store the device name with open (no security) write access.
    fn device_name_set(&mut self, name: &[u8]) -> Result<(), StackError>;

    /// Copy the stored name into `buf`, returning the number of bytes
    /// written.
    fn device_name_get(&self, buf: &mut [u8]) -> Result<usize, StackError>;

    // Appearance

    fn appearance_set(&mut self, appearance: u16) -> Result<(), StackError>;
    fn appearance_get(&self) -> Result<u16, StackError>;

    // Connection parameters

    /// Write the persistent preferred (PPCP) connection parameters.
    fn ppcp_set(&mut self, params: &ConnectionParams) -> Result<(), StackError>;

    /// Read the persistent preferred (PPCP) connection parameters.
    fn ppcp_get(&self) -> Result<ConnectionParams, StackError>;

    /// Ask the stack to renegotiate parameters on an active connection.
    fn conn_param_update(
        &mut self,
        conn_handle: u16,
        params: &ConnectionParams,
    ) -> Result<(), StackError>;

    // Disconnect

    /// Terminate the connection identified by `conn_handle` with the
    /// given HCI status code.
    fn disconnect(&mut self, conn_handle: u16, hci_code: u8) -> Result<(), StackError>;
}
