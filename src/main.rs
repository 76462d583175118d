//! Firmware entry point: bring up the SoftDevice and start advertising
//! through the GAP controller.

#![no_std]
#![no_main]

use defmt::{info, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_nrf::interrupt;
use embassy_time::{Duration, Timer};
use nrf_softdevice::{raw, Config as SdConfig, Softdevice};
use panic_probe as _;

use sd_gap::sd::SoftdeviceStack;
use sd_gap::{AdvParams, AdvPayload, GapController};

/// Advertising payload: flags (general discovery, LE only) + complete
/// local name "sd-gap".
static ADV_DATA: [u8; 11] = [
    0x02, 0x01, 0x06, // Flags
    0x07, 0x09, b's', b'd', b'-', b'g', b'a', b'p', // Complete Local Name
];

/// Generic appearance (0x0000 = unknown).
const APPEARANCE: u16 = 0x0000;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Starting sd-gap firmware");

    // Keep Embassy interrupts off the priority levels the SoftDevice
    // reserves (0, 1, 4).
    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.gpiote_interrupt_priority = interrupt::Priority::P2;
    nrf_config.time_interrupt_priority = interrupt::Priority::P2;
    let _peripherals = embassy_nrf::init(nrf_config);

    let sd_config = SdConfig {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_RC as u8,
            rc_ctiv: 16,
            rc_temp_ctiv: 2,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_500_PPM as u8,
        }),
        conn_gap: Some(raw::ble_gap_conn_cfg_t {
            conn_count: 1,
            event_length: 24,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 1,
            periph_role_count: 1,
            central_role_count: 0,
            central_sec_count: 0,
            _bitfield_1: Default::default(),
        }),
        ..Default::default()
    };

    let sd = Softdevice::enable(&sd_config);
    info!("SoftDevice enabled");

    unwrap!(spawner.spawn(softdevice_task(sd)));

    let mut gap = GapController::new(SoftdeviceStack::new(sd));

    if let Err(e) = gap.set_device_name("sd-gap") {
        warn!("set_device_name failed: {:?}", e);
    }

    let payload = AdvPayload::new(&ADV_DATA, APPEARANCE);
    if let Err(e) = gap.set_advertising_data(&payload, None) {
        warn!("set_advertising_data failed: {:?}", e);
    }

    match gap.start_advertising(&AdvParams::default()) {
        Ok(()) => info!("Advertising as \"sd-gap\""),
        Err(e) => warn!("start_advertising failed: {:?}", e),
    }

    loop {
        Timer::after(Duration::from_secs(10)).await;
        info!(
            "heartbeat: advertising={} connected={}",
            gap.is_advertising(),
            gap.is_connected()
        );
    }
}

#[embassy_executor::task]
async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}
