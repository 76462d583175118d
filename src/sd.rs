//! `RadioStack` over the raw SoftDevice S140 GAP calls.
//!
//! The SoftDevice requires advertising buffers to stay valid while the
//! advertising set is active, so the payloads are copied into buffers
//! resident in this struct rather than borrowed from the caller.

use core::ptr;

use defmt::debug;
use nrf_softdevice::{raw, Softdevice};

use crate::config::ADV_MAX_PAYLOAD_LEN;
use crate::gap::stack::{RadioStack, StackError};
use crate::gap::types::{AddressType, AdvParams, AdvType, ConnectionParams, DeviceAddress};

/// Connection configuration tag, matching the tag nrf-softdevice uses
/// when enabling the SoftDevice.
const APP_CONN_CFG_TAG: u8 = 1;

fn rc(ret: u32) -> Result<(), StackError> {
    if ret == raw::NRF_SUCCESS {
        Ok(())
    } else {
        Err(StackError(ret))
    }
}

fn raw_adv_type(adv_type: AdvType) -> u8 {
    match adv_type {
        AdvType::ConnectableUndirected => {
            raw::BLE_GAP_ADV_TYPE_CONNECTABLE_SCANNABLE_UNDIRECTED as u8
        }
        AdvType::ConnectableDirected => {
            raw::BLE_GAP_ADV_TYPE_CONNECTABLE_NONSCANNABLE_DIRECTED as u8
        }
        AdvType::ScannableUndirected => {
            raw::BLE_GAP_ADV_TYPE_NONCONNECTABLE_SCANNABLE_UNDIRECTED as u8
        }
        AdvType::NonConnectableUndirected => {
            raw::BLE_GAP_ADV_TYPE_NONCONNECTABLE_NONSCANNABLE_UNDIRECTED as u8
        }
    }
}

/// The production radio stack: thin unsafe shims over `sd_ble_gap_*`.
pub struct SoftdeviceStack {
    _sd: &'static Softdevice,
    adv_handle: u8,
    adv_data: [u8; ADV_MAX_PAYLOAD_LEN],
    adv_data_len: u16,
    scan_rsp: [u8; ADV_MAX_PAYLOAD_LEN],
    scan_rsp_len: u16,
}

impl SoftdeviceStack {
    pub fn new(sd: &'static Softdevice) -> Self {
        Self {
            _sd: sd,
            adv_handle: raw::BLE_GAP_ADV_SET_HANDLE_NOT_SET as u8,
            adv_data: [0; ADV_MAX_PAYLOAD_LEN],
            adv_data_len: 0,
            scan_rsp: [0; ADV_MAX_PAYLOAD_LEN],
            scan_rsp_len: 0,
        }
    }

    fn adv_data_raw(&mut self) -> raw::ble_gap_adv_data_t {
        let adv_ptr = if self.adv_data_len == 0 {
            ptr::null_mut()
        } else {
            self.adv_data.as_mut_ptr()
        };
        let scan_ptr = if self.scan_rsp_len == 0 {
            ptr::null_mut()
        } else {
            self.scan_rsp.as_mut_ptr()
        };

        raw::ble_gap_adv_data_t {
            adv_data: raw::ble_data_t {
                p_data: adv_ptr,
                len: self.adv_data_len,
            },
            scan_rsp_data: raw::ble_data_t {
                p_data: scan_ptr,
                len: self.scan_rsp_len,
            },
        }
    }
}

impl RadioStack for SoftdeviceStack {
    fn adv_data_set(&mut self, adv: &[u8], scan_rsp: &[u8]) -> Result<(), StackError> {
        if adv.len() > ADV_MAX_PAYLOAD_LEN || scan_rsp.len() > ADV_MAX_PAYLOAD_LEN {
            return Err(StackError(raw::NRF_ERROR_DATA_SIZE));
        }

        self.adv_data[..adv.len()].copy_from_slice(adv);
        self.adv_data_len = adv.len() as u16;
        self.scan_rsp[..scan_rsp.len()].copy_from_slice(scan_rsp);
        self.scan_rsp_len = scan_rsp.len() as u16;

        let data = self.adv_data_raw();
        let ret = unsafe {
            raw::sd_ble_gap_adv_set_configure(&mut self.adv_handle, &data, ptr::null())
        };
        rc(ret)
    }

    fn adv_start(&mut self, params: &AdvParams) -> Result<(), StackError> {
        let mut adv_params: raw::ble_gap_adv_params_t = unsafe { core::mem::zeroed() };
        adv_params.properties.type_ = raw_adv_type(params.adv_type);
        adv_params.p_peer_addr = ptr::null();
        adv_params.interval = params.interval as u32;
        // S140 takes the duration in 10 ms units; the API-level timeout
        // is in seconds. Saturate rather than wrap on the u16 field.
        adv_params.duration = params.timeout.saturating_mul(100);
        adv_params.filter_policy = raw::BLE_GAP_ADV_FP_ANY as u8;
        adv_params.primary_phy = raw::BLE_GAP_PHY_1MBPS as u8;

        let data = self.adv_data_raw();
        let ret = unsafe {
            raw::sd_ble_gap_adv_set_configure(&mut self.adv_handle, &data, &adv_params)
        };
        rc(ret)?;

        debug!("adv_start: handle={} interval={}", self.adv_handle, params.interval);
        rc(unsafe { raw::sd_ble_gap_adv_start(self.adv_handle, APP_CONN_CFG_TAG) })
    }

    fn adv_stop(&mut self) -> Result<(), StackError> {
        debug!("adv_stop: handle={}", self.adv_handle);
        rc(unsafe { raw::sd_ble_gap_adv_stop(self.adv_handle) })
    }

    fn addr_set(&mut self, addr: &DeviceAddress) -> Result<(), StackError> {
        let gap_addr = raw::ble_gap_addr_t {
            _bitfield_1: raw::ble_gap_addr_t::new_bitfield_1(0, addr.addr_type as u8),
            addr: addr.bytes,
        };
        rc(unsafe { raw::sd_ble_gap_addr_set(&gap_addr) })
    }

    fn addr_get(&self) -> Result<DeviceAddress, StackError> {
        let mut gap_addr: raw::ble_gap_addr_t = unsafe { core::mem::zeroed() };
        rc(unsafe { raw::sd_ble_gap_addr_get(&mut gap_addr) })?;

        let addr_type = AddressType::try_from(gap_addr.addr_type())
            .map_err(|_| StackError(raw::NRF_ERROR_INTERNAL))?;
        Ok(DeviceAddress::new(addr_type, gap_addr.addr))
    }

    fn device_name_set(&mut self, name: &[u8]) -> Result<(), StackError> {
        // Open write access, no security required.
        let sec_mode = raw::ble_gap_conn_sec_mode_t {
            _bitfield_1: raw::ble_gap_conn_sec_mode_t::new_bitfield_1(1, 1),
        };
        rc(unsafe {
            raw::sd_ble_gap_device_name_set(&sec_mode, name.as_ptr(), name.len() as u16)
        })
    }

    fn device_name_get(&self, buf: &mut [u8]) -> Result<usize, StackError> {
        let mut len = buf.len() as u16;
        rc(unsafe { raw::sd_ble_gap_device_name_get(buf.as_mut_ptr(), &mut len) })?;
        Ok(len as usize)
    }

    fn appearance_set(&mut self, appearance: u16) -> Result<(), StackError> {
        rc(unsafe { raw::sd_ble_gap_appearance_set(appearance) })
    }

    fn appearance_get(&self) -> Result<u16, StackError> {
        let mut appearance: u16 = 0;
        rc(unsafe { raw::sd_ble_gap_appearance_get(&mut appearance) })?;
        Ok(appearance)
    }

    fn ppcp_set(&mut self, params: &ConnectionParams) -> Result<(), StackError> {
        let conn_params = raw::ble_gap_conn_params_t {
            min_conn_interval: params.min_conn_interval,
            max_conn_interval: params.max_conn_interval,
            slave_latency: params.slave_latency,
            conn_sup_timeout: params.conn_sup_timeout,
        };
        rc(unsafe { raw::sd_ble_gap_ppcp_set(&conn_params) })
    }

    fn ppcp_get(&self) -> Result<ConnectionParams, StackError> {
        let mut conn_params: raw::ble_gap_conn_params_t = unsafe { core::mem::zeroed() };
        rc(unsafe { raw::sd_ble_gap_ppcp_get(&mut conn_params) })?;
        Ok(ConnectionParams {
            min_conn_interval: conn_params.min_conn_interval,
            max_conn_interval: conn_params.max_conn_interval,
            slave_latency: conn_params.slave_latency,
            conn_sup_timeout: conn_params.conn_sup_timeout,
        })
    }

    fn conn_param_update(
        &mut self,
        conn_handle: u16,
        params: &ConnectionParams,
    ) -> Result<(), StackError> {
        let conn_params = raw::ble_gap_conn_params_t {
            min_conn_interval: params.min_conn_interval,
            max_conn_interval: params.max_conn_interval,
            slave_latency: params.slave_latency,
            conn_sup_timeout: params.conn_sup_timeout,
        };
        rc(unsafe { raw::sd_ble_gap_conn_param_update(conn_handle, &conn_params) })
    }

    fn disconnect(&mut self, conn_handle: u16, hci_code: u8) -> Result<(), StackError> {
        debug!("disconnect: handle={} hci=0x{:02x}", conn_handle, hci_code);
        rc(unsafe { raw::sd_ble_gap_disconnect(conn_handle, hci_code) })
    }
}
