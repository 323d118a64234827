#![no_main]
#![no_std]

use f4_rt::sys::dwt;

f4_rt::main!({ main() });

const CYCLES_TO_WAIT: u32 = 10_000;
const ITERATIONS: u32 = 1_000;

fn main() {
    for _ in 0..ITERATIONS {
        dwt::wait_cycles(CYCLES_TO_WAIT);
    }

    // Done waiting; the reset handler parks the core from here.
}
