//! GAP parameter and identity types.
//!
//! Everything here is a plain value type: the controller validates these
//! against the ranges in [`crate::config`] and forwards them to the radio
//! stack unchanged.

use crate::config::{
    ADDR_LEN, ADV_INTERVAL_MAX, ADV_INTERVAL_MIN, ADV_INTERVAL_MIN_NONCON, ADV_TIMEOUT_MAX,
    CONN_INTERVAL_MAX, CONN_INTERVAL_MIN, CONN_SLAVE_LATENCY, CONN_SUP_TIMEOUT,
    HCI_CONN_INTERVAL_UNACCEPTABLE, HCI_REMOTE_USER_TERMINATED,
};
use crate::error::GapError;

/// Advertising type, matching the SoftDevice GAP advertising types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AdvType {
    /// ADV_IND - connectable, scannable, undirected.
    ConnectableUndirected = 0x00,
    /// ADV_DIRECT_IND - connectable, directed at a known peer.
    ConnectableDirected = 0x01,
    /// ADV_SCAN_IND - scannable but not connectable.
    ScannableUndirected = 0x02,
    /// ADV_NONCONN_IND - neither scannable nor connectable.
    NonConnectableUndirected = 0x03,
}

/// Advertising parameters: type, interval and timeout.
///
/// The interval is in 0.625 ms units; the timeout is in seconds, with 0
/// meaning "advertise until stopped".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AdvParams {
    pub adv_type: AdvType,
    pub interval: u16,
    pub timeout: u16,
}

impl AdvParams {
    pub const fn new(adv_type: AdvType, interval: u16, timeout: u16) -> Self {
        Self {
            adv_type,
            interval,
            timeout,
        }
    }

    /// Check the interval and timeout against the type-dependent bounds.
    ///
    /// Non-connectable advertising has a higher minimum interval than the
    /// other types; the maximum is shared. Directed advertising must carry
    /// a zero timeout, every other type is capped at [`ADV_TIMEOUT_MAX`].
    pub fn validate(&self) -> Result<(), GapError> {
        let interval_min = match self.adv_type {
            AdvType::NonConnectableUndirected => ADV_INTERVAL_MIN_NONCON,
            _ => ADV_INTERVAL_MIN,
        };
        if self.interval < interval_min || self.interval > ADV_INTERVAL_MAX {
            return Err(GapError::ParamOutOfRange);
        }

        match self.adv_type {
            AdvType::ConnectableDirected => {
                if self.timeout != 0 {
                    return Err(GapError::ParamOutOfRange);
                }
            }
            _ => {
                if self.timeout > ADV_TIMEOUT_MAX {
                    return Err(GapError::ParamOutOfRange);
                }
            }
        }

        Ok(())
    }
}

impl Default for AdvParams {
    /// Connectable undirected at 250 ms, no timeout.
    fn default() -> Self {
        Self::new(AdvType::ConnectableUndirected, 400, 0)
    }
}

/// An advertising payload: raw AD-structure bytes plus the appearance
/// value the payload declares.
///
/// The buffer is borrowed from the caller for the duration of a single
/// call; the controller never retains it. Payload format (flags, local
/// name, appearance AD structures...) is owned by the caller.
#[derive(Debug, Clone, Copy)]
pub struct AdvPayload<'a> {
    bytes: &'a [u8],
    appearance: u16,
}

impl<'a> AdvPayload<'a> {
    pub const fn new(bytes: &'a [u8], appearance: u16) -> Self {
        Self { bytes, appearance }
    }

    /// An empty payload (valid as a scan response, not as primary data).
    pub const fn empty() -> Self {
        Self {
            bytes: &[],
            appearance: 0,
        }
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The appearance value declared alongside this payload.
    pub fn appearance(&self) -> u16 {
        self.appearance
    }
}

/// The type of a BLE device address (see BT Core spec Vol 6 Part B 1.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AddressType {
    Public = 0x00,
    RandomStatic = 0x01,
    RandomPrivateResolvable = 0x02,
    RandomPrivateNonResolvable = 0x03,
}

impl TryFrom<u8> for AddressType {
    type Error = GapError;

    /// Values past the highest defined type are rejected; this is the
    /// only place a raw address-type byte can enter the system.
    fn try_from(value: u8) -> Result<Self, GapError> {
        match value {
            0x00 => Ok(AddressType::Public),
            0x01 => Ok(AddressType::RandomStatic),
            0x02 => Ok(AddressType::RandomPrivateResolvable),
            0x03 => Ok(AddressType::RandomPrivateNonResolvable),
            _ => Err(GapError::ParamOutOfRange),
        }
    }
}

/// A BLE device address: 6 bytes (little-endian) plus its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceAddress {
    pub addr_type: AddressType,
    pub bytes: [u8; ADDR_LEN],
}

impl DeviceAddress {
    pub const fn new(addr_type: AddressType, bytes: [u8; ADDR_LEN]) -> Self {
        Self { addr_type, bytes }
    }
}

impl Default for DeviceAddress {
    fn default() -> Self {
        Self::new(AddressType::Public, [0; ADDR_LEN])
    }
}

/// Connection parameters as exchanged with the radio stack
/// (mirrors `ble_gap_conn_params_t`).
///
/// Intervals are in 1.25 ms units, the supervision timeout in 10 ms
/// units. The controller treats the record as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(C)]
pub struct ConnectionParams {
    pub min_conn_interval: u16,
    pub max_conn_interval: u16,
    pub slave_latency: u16,
    pub conn_sup_timeout: u16,
}

impl Default for ConnectionParams {
    fn default() -> Self {
        Self {
            min_conn_interval: CONN_INTERVAL_MIN,
            max_conn_interval: CONN_INTERVAL_MAX,
            slave_latency: CONN_SLAVE_LATENCY,
            conn_sup_timeout: CONN_SUP_TIMEOUT,
        }
    }
}

/// Reason passed to [`disconnect`](crate::gap::controller::GapController::disconnect),
/// mapped onto the HCI status code the stack expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisconnectReason {
    RemoteUserTerminated,
    ConnectionIntervalUnacceptable,
}

impl DisconnectReason {
    pub fn hci_code(self) -> u8 {
        match self {
            DisconnectReason::RemoteUserTerminated => HCI_REMOTE_USER_TERMINATED,
            DisconnectReason::ConnectionIntervalUnacceptable => HCI_CONN_INTERVAL_UNACCEPTABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_bounds_per_type() {
        // Connectable undirected accepts the global minimum...
        let p = AdvParams::new(AdvType::ConnectableUndirected, ADV_INTERVAL_MIN, 0);
        assert!(p.validate().is_ok());

        // ...but non-connectable needs the stricter minimum.
        let p = AdvParams::new(AdvType::NonConnectableUndirected, ADV_INTERVAL_MIN, 0);
        assert_eq!(p.validate(), Err(GapError::ParamOutOfRange));

        let p = AdvParams::new(AdvType::NonConnectableUndirected, ADV_INTERVAL_MIN_NONCON, 0);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn interval_maximum_is_shared() {
        for adv_type in [
            AdvType::ConnectableUndirected,
            AdvType::ScannableUndirected,
            AdvType::NonConnectableUndirected,
        ] {
            let p = AdvParams::new(adv_type, ADV_INTERVAL_MAX, 0);
            assert!(p.validate().is_ok());

            let p = AdvParams::new(adv_type, ADV_INTERVAL_MAX + 1, 0);
            assert_eq!(p.validate(), Err(GapError::ParamOutOfRange));
        }
    }

    #[test]
    fn timeout_capped_for_undirected_types() {
        let p = AdvParams::new(AdvType::ScannableUndirected, 0x0100, ADV_TIMEOUT_MAX);
        assert!(p.validate().is_ok());

        let p = AdvParams::new(AdvType::ScannableUndirected, 0x0100, ADV_TIMEOUT_MAX + 1);
        assert_eq!(p.validate(), Err(GapError::ParamOutOfRange));
    }

    #[test]
    fn directed_timeout_must_be_zero() {
        let p = AdvParams::new(AdvType::ConnectableDirected, 0x0100, 0);
        assert!(p.validate().is_ok());

        let p = AdvParams::new(AdvType::ConnectableDirected, 0x0100, 1);
        assert_eq!(p.validate(), Err(GapError::ParamOutOfRange));
    }

    #[test]
    fn address_type_from_raw() {
        assert_eq!(AddressType::try_from(0x00), Ok(AddressType::Public));
        assert_eq!(
            AddressType::try_from(0x03),
            Ok(AddressType::RandomPrivateNonResolvable)
        );
        // One past the highest defined type.
        assert_eq!(AddressType::try_from(0x04), Err(GapError::ParamOutOfRange));
        assert_eq!(AddressType::try_from(0xFF), Err(GapError::ParamOutOfRange));
    }

    #[test]
    fn disconnect_reason_hci_codes() {
        assert_eq!(DisconnectReason::RemoteUserTerminated.hci_code(), 0x13);
        assert_eq!(
            DisconnectReason::ConnectionIntervalUnacceptable.hci_code(),
            0x3B
        );
    }

    #[test]
    fn default_connection_params_are_sane() {
        let p = ConnectionParams::default();
        assert!(p.min_conn_interval <= p.max_conn_interval);
        assert_eq!(p.slave_latency, 0);
        assert_eq!(p.conn_sup_timeout, 400);
    }
}
