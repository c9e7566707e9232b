//! Detent demo firmware
//!
//! Decodes a KY-040 style encoder on an RP2040 and logs every gesture
//! over RTT. Wiring: CLK on GPIO2, DT on GPIO3, SW on GPIO4.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use detent_core::{EncoderConfig, Handlers, Rotary, RotaryEncoder};
use detent_hal_rp2040::{EmbassyClock, EncoderInput};

/// Poll period; must be shorter than the sample interval
const POLL_PERIOD_MS: u64 = 1;

/// Encoder timing
const ENCODER_CONFIG: EncoderConfig = EncoderConfig {
    sample_interval_ms: 2,
    short_press_ms: 40,
    long_press_ms: 800,
};

fn on_rotate(direction: Rotary) {
    info!("Rotate {}", direction);
}

fn on_press_rotate(direction: Rotary) {
    info!("Press + rotate {}", direction);
}

fn on_held_rotate(direction: Rotary) {
    info!("Held + rotate {}", direction);
}

fn on_press() {
    info!("Press");
}

fn on_press_release() {
    info!("Press released");
}

fn on_long_press() {
    info!("Long press");
}

fn on_long_press_release() {
    info!("Long press released");
}

fn on_press_rotate_release() {
    info!("Press + rotate released");
}

fn on_held_rotate_release() {
    info!("Held + rotate released");
}

fn handlers() -> Handlers {
    let mut handlers = Handlers::new();
    handlers.set_handle_rotate(on_rotate);
    handlers.set_handle_press_rotate(on_press_rotate);
    handlers.set_handle_held_rotate(on_held_rotate);
    handlers.set_handle_press(on_press);
    handlers.set_handle_press_release(on_press_release);
    handlers.set_handle_long_press(on_long_press);
    handlers.set_handle_long_press_release(on_long_press_release);
    handlers.set_handle_press_rotate_release(on_press_rotate_release);
    handlers.set_handle_held_rotate_release(on_held_rotate_release);
    handlers
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Detent firmware starting...");

    let p = embassy_rp::init(Default::default());

    let clk = EncoderInput::new(p.PIN_2);
    let dt = EncoderInput::new(p.PIN_3);
    let sw = EncoderInput::new(p.PIN_4);

    if let Err(e) = ENCODER_CONFIG.validate() {
        warn!("Encoder config: {:?}", e);
    }
    let mut encoder = RotaryEncoder::with_config(clk, dt, sw, ENCODER_CONFIG);
    encoder.set_handlers(handlers());

    let clock = EmbassyClock;
    let mut ticker = Ticker::every(Duration::from_millis(POLL_PERIOD_MS));
    info!("Encoder polling started");

    loop {
        if encoder.sample_clock(&clock) {
            trace!("Encoder state {}", encoder.state());
        }
        ticker.next().await;
    }
}
