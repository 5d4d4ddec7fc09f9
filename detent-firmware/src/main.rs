//! Detent - Rotary Encoder Knob Firmware
//!
//! Demo firmware for an RP2040 board with a KY-040 style rotary encoder:
//! the knob value is printed on UART0 after every detent and knob events
//! are logged over defmt.
//!
//! Wiring (fixed by this board; knob.toml sets the electrical options):
//! - GPIO2: encoder A (CLK)
//! - GPIO3: encoder B (DT)
//! - GPIO4: push button (SW)
//! - GPIO0: UART0 TX for value reports

#![no_std]
#![no_main]

extern crate alloc;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::uart::{Config as UartConfig, UartTx};
use embedded_alloc::LlffHeap as Heap;
use {defmt_rtt as _, panic_probe as _};

use detent_core::config::{parse_config, KnobConfig};
use detent_core::Pull as ButtonPull;
use detent_drivers::RotaryEncoder;
use detent_hal::serial::SerialLine;
use detent_hal::InputPin;

use crate::board::{knob_input, pull_for, EmbassyClock, KnobInput, UartSink};
use crate::channels::KNOB_VALUE;

mod board;
mod channels;
mod tasks;

// Heap allocator for the driver callbacks
#[global_allocator]
static HEAP: Heap = Heap::empty();

// Heap size: 4KB
const HEAP_SIZE: usize = 4 * 1024;

/// Embedded knob configuration (compiled into firmware)
/// Edit knob.toml and rebuild to customize
const EMBEDDED_CONFIG: &str = include_str!("../knob.toml");

/// GPIO numbers this board routes to the encoder lines
const BOARD_PINS: (u8, u8) = (2, 3);

/// GPIO number this board routes to the knob switch
const BOARD_BUTTON_PIN: u8 = 4;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Detent firmware starting...");

    init_heap();

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = load_config();

    let configured = (config.encoder.pin_a.pin, config.encoder.pin_b.pin);
    if configured != BOARD_PINS {
        warn!(
            "knob.toml encoder pins {} differ from board wiring {}, using board wiring",
            configured, BOARD_PINS
        );
    }

    let pin_a = knob_input(
        Input::new(p.PIN_2, pull_for(&config.encoder.pin_a)),
        &config.encoder.pin_a,
    );
    let pin_b = knob_input(
        Input::new(p.PIN_3, pull_for(&config.encoder.pin_b)),
        &config.encoder.pin_b,
    );

    // 115200 baud default
    let tx = UartTx::new_blocking(p.UART0, p.PIN_0, UartConfig::default());
    let sink = SerialLine::new(UartSink::new(tx));
    info!("UART initialized for value reports");

    spawner.spawn(tasks::report_task()).unwrap();
    spawner.spawn(tasks::value_task()).unwrap();

    match config.button {
        Some(button) => {
            if button.pin.pin != BOARD_BUTTON_PIN {
                warn!(
                    "knob.toml button pin {} differs from board wiring {}, using board wiring",
                    button.pin.pin, BOARD_BUTTON_PIN
                );
            }
            let pull = match button.pull {
                ButtonPull::Up => Pull::Up,
                ButtonPull::Down => Pull::Down,
            };
            let pin_sw = knob_input(Input::new(p.PIN_4, pull), &button.pin);

            let mut knob = RotaryEncoder::with_button(pin_a, pin_b, pin_sw, EmbassyClock);
            setup(&mut knob, &config, sink);

            // begin() leaves the button pulled up; apply the configured wiring after it
            if let Some(b) = knob.push_button_mut() {
                b.set_pull(button.pull);
                b.set_timing(button.timing);
                b.on_long_press_reached(|| info!("Release to reset value"));
            }

            spawner.spawn(tasks::knob_task(knob)).unwrap();
        }
        None => {
            info!("No [button] in knob.toml, switch input unused");
            let mut knob = RotaryEncoder::new(pin_a, pin_b, EmbassyClock);
            setup(&mut knob, &config, sink);
            spawner.spawn(tasks::rotation_task(knob)).unwrap();
        }
    }

    info!("All tasks spawned");
}

/// Apply the encoder settings shared by both knob variants and call `begin()`
fn setup<P: InputPin>(
    knob: &mut RotaryEncoder<KnobInput, KnobInput, EmbassyClock, P>,
    config: &KnobConfig,
    sink: SerialLine<UartSink>,
) {
    knob.set_step(config.encoder.step);
    knob.set_value_sink(sink);
    knob.set_after_change(|state| {
        if state.value != state.last_value {
            KNOB_VALUE.signal(state.value);
        }
    });
    knob.begin();
}

/// Initialize the heap allocator
fn init_heap() {
    use core::mem::MaybeUninit;
    static mut HEAP_MEM: [MaybeUninit<u8>; HEAP_SIZE] = [MaybeUninit::uninit(); HEAP_SIZE];
    #[allow(static_mut_refs)]
    unsafe {
        HEAP.init(HEAP_MEM.as_ptr() as usize, HEAP_SIZE)
    }
}

/// Parse the embedded configuration
///
/// Falls back to the defaults if it does not parse; build.rs has already
/// checked its syntax.
fn load_config() -> KnobConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => {
            info!(
                "Config loaded: step {}, button: {}",
                config.encoder.step,
                config.has_button()
            );
            config
        }
        Err(e) => {
            warn!("Invalid knob.toml ({}), using defaults", e);
            KnobConfig::default()
        }
    }
}
