#![no_std]

pub mod macros;
pub mod sys;
mod vectors;

pub use vectors::{STACK_START, VECTOR_TABLE, VectorTable};

use core::panic::PanicInfo;

#[panic_handler]
fn panic(_panic: &PanicInfo<'_>) -> ! {
    // TODO: report the panic message over the console UART
    loop {
        sys::wfi();
    }
}
