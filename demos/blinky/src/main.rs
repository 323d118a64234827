#![no_main]
#![no_std]

use f4_rt::sys::dwt;
use f4_rt::sys::gpio::{self, Mode, Speed};
use f4_rt::sys::rcc;

f4_rt::main!({ main() });

// The four user LEDs on port D.
const LED_PINS: [u8; 4] = [12, 13, 14, 15];

const ON_CYCLES: u32 = 4_000_000;

fn main() {
    rcc::enable_gpiod();

    let leds = gpio::port_d();
    for &pin in &LED_PINS {
        leds.set_mode(pin, Mode::Output);
        leds.set_speed(pin, Speed::High);
    }

    for step in 0usize.. {
        let pin = LED_PINS[step % LED_PINS.len()];
        dwt::wait_cycles(ON_CYCLES);
        leds.set_high(pin);
        dwt::wait_cycles(ON_CYCLES);
        leds.set_low(pin);
    }
}
