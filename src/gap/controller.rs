//! The GAP controller: validation and delegation.
//!
//! Every operation checks its inputs against the limits in
//! [`crate::config`], forwards to the injected [`RadioStack`], and keeps
//! the two-flag session state in step. No protocol state machine lives
//! here - the radio stack owns connection and advertising state
//! internally.

use heapless::Vec;

use crate::config::{ADV_MAX_PAYLOAD_LEN, MAX_DEVICE_NAME_LEN};
use crate::error::GapError;
use crate::gap::session::SessionState;
use crate::gap::stack::RadioStack;
use crate::gap::types::{
    AdvParams, AdvPayload, AdvType, ConnectionParams, DeviceAddress, DisconnectReason,
};

/// GAP control surface over an injected radio stack.
pub struct GapController<S: RadioStack> {
    stack: S,
    session: SessionState,
}

impl<S: RadioStack> GapController<S> {
    pub fn new(stack: S) -> Self {
        Self {
            stack,
            session: SessionState::new(),
        }
    }

    /// Read-only view of the session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn is_advertising(&self) -> bool {
        self.session.advertising
    }

    pub fn is_connected(&self) -> bool {
        self.session.connected
    }

    // Advertising

    /// Replace the advertising payload and optional scan response, then
    /// sync the broadcast appearance with the one the payload declares.
    ///
    /// Fails with `BufferOverflow` if the primary payload exceeds 31
    /// bytes and with `ParamOutOfRange` if it is empty. The scan
    /// response is forwarded as-is; the stack rejects it if oversized.
    pub fn set_advertising_data(
        &mut self,
        adv: &AdvPayload<'_>,
        scan_rsp: Option<&AdvPayload<'_>>,
    ) -> Result<(), GapError> {
        if adv.len() > ADV_MAX_PAYLOAD_LEN {
            return Err(GapError::BufferOverflow);
        }
        if adv.is_empty() {
            return Err(GapError::ParamOutOfRange);
        }

        let scan_bytes = scan_rsp.map(|p| p.bytes()).unwrap_or(&[]);
        self.stack.adv_data_set(adv.bytes(), scan_bytes)?;

        // Keep the GAP appearance aligned with what the payload declares.
        self.stack.appearance_set(adv.appearance())?;

        Ok(())
    }

    /// Validate `params` and command the stack to start advertising.
    ///
    /// Directed advertising needs a peer address and a security
    /// handshake we do not implement, so it is rejected outright.
    pub fn start_advertising(&mut self, params: &AdvParams) -> Result<(), GapError> {
        if params.adv_type == AdvType::ConnectableDirected {
            return Err(GapError::NotImplemented);
        }

        params.validate()?;

        self.stack.adv_start(params)?;
        self.session.advertising = true;

        Ok(())
    }

    /// Stop advertising. The stack rejects the call if it was not
    /// advertising; the local flag is only cleared on success.
    pub fn stop_advertising(&mut self) -> Result<(), GapError> {
        self.stack.adv_stop()?;
        self.session.advertising = false;

        Ok(())
    }

    // Connections

    /// Terminate the active connection.
    ///
    /// The local advertising and connection flags are cleared before the
    /// stack call is issued, so the session reads as idle even when the
    /// stack rejects the disconnect.
    pub fn disconnect(&mut self, reason: DisconnectReason) -> Result<(), GapError> {
        self.session.advertising = false;
        self.session.connected = false;

        self.stack
            .disconnect(self.session.conn_handle, reason.hci_code())?;

        Ok(())
    }

    /// Read the stack's persistent preferred connection parameters.
    pub fn preferred_connection_params(&self) -> Result<ConnectionParams, GapError> {
        Ok(self.stack.ppcp_get()?)
    }

    /// Write the stack's persistent preferred connection parameters.
    pub fn set_preferred_connection_params(
        &mut self,
        params: &ConnectionParams,
    ) -> Result<(), GapError> {
        Ok(self.stack.ppcp_set(params)?)
    }

    /// Request renegotiation of the parameters on an active connection.
    /// No retry on failure.
    pub fn update_connection_params(
        &mut self,
        conn_handle: u16,
        params: &ConnectionParams,
    ) -> Result<(), GapError> {
        Ok(self.stack.conn_param_update(conn_handle, params)?)
    }

    /// Store the connection handle. Any 16-bit value is accepted.
    pub fn set_connection_handle(&mut self, conn_handle: u16) {
        self.session.conn_handle = conn_handle;
    }

    pub fn connection_handle(&self) -> u16 {
        self.session.conn_handle
    }

    /// Called when the stack reports an established connection.
    pub fn on_connection(&mut self, conn_handle: u16) {
        self.session.connected = true;
        self.session.conn_handle = conn_handle;
    }

    /// Called when the stack reports a closed connection.
    pub fn on_disconnection(&mut self) {
        self.session.connected = false;
    }

    // Device identity

    /// Set the device address, with address cycling disabled.
    pub fn set_address(&mut self, addr: &DeviceAddress) -> Result<(), GapError> {
        Ok(self.stack.addr_set(addr)?)
    }

    /// Read back the current device address (type and bytes).
    pub fn address(&self) -> Result<DeviceAddress, GapError> {
        Ok(self.stack.addr_get()?)
    }

    /// Store the device name with open (no security) write access.
    pub fn set_device_name(&mut self, name: &str) -> Result<(), GapError> {
        Ok(self.stack.device_name_set(name.as_bytes())?)
    }

    /// Read back the stored device name.
    pub fn device_name(&self) -> Result<Vec<u8, MAX_DEVICE_NAME_LEN>, GapError> {
        let mut buf = [0u8; MAX_DEVICE_NAME_LEN];
        let len = self.stack.device_name_get(&mut buf)?.min(MAX_DEVICE_NAME_LEN);

        let mut name = Vec::new();
        // Cannot fail: len is clamped to the Vec capacity.
        let _ = name.extend_from_slice(&buf[..len]);
        Ok(name)
    }

    /// Set the 16-bit GAP appearance code.
    pub fn set_appearance(&mut self, appearance: u16) -> Result<(), GapError> {
        Ok(self.stack.appearance_set(appearance)?)
    }

    /// Read the 16-bit GAP appearance code.
    pub fn appearance(&self) -> Result<u16, GapError> {
        Ok(self.stack.appearance_get()?)
    }
}
