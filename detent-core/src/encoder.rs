//! Rotary encoder with push-button
//!
//! Ties the sampler, both decoders and the gesture machine together. One
//! call runs at most one sampling pass:
//!
//! ```text
//!  sampler ──▶ rotary decoder ──┐
//!          └─▶ button decoder ──┴──▶ gesture state ──▶ handlers
//! ```
//!
//! The encoder never blocks and owns no task; the caller polls it faster
//! than the sample interval from its own loop. Handlers run synchronously
//! inside [`RotaryEncoder::sample`].

use detent_hal::{InputPin, MonotonicClock};

use crate::config::EncoderConfig;
use crate::decode::{Button, ButtonDecoder, Rotary, RotaryDecoder};
use crate::gesture::{GestureState, Handlers, PassEvents};
use crate::sampler::{RawSample, Sampler};

/// Rotary encoder with integrated push-button
pub struct RotaryEncoder<A, B, S> {
    sampler: Sampler<A, B, S>,
    config: EncoderConfig,
    rotary_decoder: RotaryDecoder,
    button_decoder: ButtonDecoder,
    rotary: Rotary,
    state: GestureState,
    last_raw: RawSample,
    handlers: Handlers,
}

impl<A: InputPin, B: InputPin, S: InputPin> RotaryEncoder<A, B, S> {
    /// Create an encoder on the CLK, DT and SW pins with default timing
    pub fn new(clk: A, dt: B, sw: S) -> Self {
        Self {
            sampler: Sampler::new(clk, dt, sw),
            config: EncoderConfig::default(),
            rotary_decoder: RotaryDecoder::new(),
            button_decoder: ButtonDecoder::new(),
            rotary: Rotary::Stopped,
            state: GestureState::Inactive,
            last_raw: RawSample::IDLE,
            handlers: Handlers::new(),
        }
    }

    /// Create an encoder with the given timing
    ///
    /// The timing is applied as given; see [`EncoderConfig::validate`].
    pub fn with_config(clk: A, dt: B, sw: S, config: EncoderConfig) -> Self {
        let mut encoder = Self::new(clk, dt, sw);
        encoder.config = config;
        encoder
    }

    // Configuration

    /// Current timing configuration
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Replace the whole timing configuration
    pub fn set_config(&mut self, config: EncoderConfig) {
        self.config = config;
        #[cfg(feature = "defmt")]
        defmt::debug!("Encoder config: {}", self.config);
    }

    /// Minimum time between sampling passes (ms)
    pub fn set_read_interval_duration(&mut self, duration_ms: u8) {
        self.config.sample_interval_ms = duration_ms;
    }

    /// Settle window for each debounce step (ms)
    pub fn set_short_press_duration(&mut self, duration_ms: u8) {
        self.config.short_press_ms = duration_ms;
    }

    /// Press duration before a long press is declared (ms)
    pub fn set_long_press_duration(&mut self, duration_ms: u16) {
        self.config.long_press_ms = duration_ms;
    }

    // Handlers

    /// Registered handlers
    pub fn handlers(&self) -> &Handlers {
        &self.handlers
    }

    /// Registered handlers, for registering more
    pub fn handlers_mut(&mut self) -> &mut Handlers {
        &mut self.handlers
    }

    /// Replace every registered handler
    pub fn set_handlers(&mut self, handlers: Handlers) {
        self.handlers = handlers;
    }

    // Accessors

    /// Rotation decoded during the last pass
    pub fn rotary(&self) -> Rotary {
        self.rotary
    }

    /// Reported button condition
    pub fn button(&self) -> Button {
        self.button_decoder.state()
    }

    /// Current gesture state
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Raw levels of the last pass, packed as `sw << 2 | clk << 1 | dt`
    ///
    /// All three bits are kept; the button level alone is `encoder_bits() >> 2`.
    pub fn encoder_bits(&self) -> u8 {
        self.last_raw.bits()
    }

    /// 3-bit debounce phase code of the button
    pub fn button_bits(&self) -> u8 {
        self.button_decoder.phase().bits()
    }

    /// Release the pins
    pub fn release(self) -> (A, B, S) {
        self.sampler.release()
    }

    // Sampling

    /// Run one sampling pass and return the events it fired
    ///
    /// Nothing is read or changed when called again within the sample
    /// interval; the result is then empty.
    pub fn poll(&mut self, now_ms: u32) -> PassEvents {
        let Some(raw) = self.sampler.sample(now_ms, self.config.sample_interval_ms) else {
            return PassEvents::new();
        };
        self.last_raw = raw;

        self.rotary = self.rotary_decoder.decode(raw.clk, raw.dt);
        let button = self.button_decoder.decode(raw.button, now_ms, &self.config);

        let (next, events) = self.state.transition(self.rotary, button);

        #[cfg(feature = "defmt")]
        {
            if next != self.state {
                defmt::trace!(
                    "Gesture {} -> {} (rotary={}, button={})",
                    self.state,
                    next,
                    self.rotary,
                    button
                );
            }
        }

        self.state = next;
        events
    }

    /// Run one sampling pass and dispatch its events to the handlers
    ///
    /// Returns true if any handler ran.
    pub fn sample(&mut self, now_ms: u32) -> bool {
        let events = self.poll(now_ms);

        let mut handled = false;
        for event in events.iter() {
            handled |= self.handlers.dispatch(event);
        }
        handled
    }

    /// Sample using the time from `clock`
    pub fn sample_clock<C: MonotonicClock + ?Sized>(&mut self, clock: &C) -> bool {
        self.sample(clock.now_ms())
    }
}
