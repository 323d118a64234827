use core::arch::asm;

pub mod dwt;
pub mod gpio;
pub mod rcc;
pub mod usart;
mod volatile;

pub use volatile::VolatilePointer;

/// Enable interrupts
#[inline(always)]
pub fn cpsie() {
    unsafe { asm!("cpsie i") };
}

/// Disable interrupts
#[inline(always)]
pub fn cpsid() {
    unsafe { asm!("cpsid i") };
}

/// Park the core until the next interrupt or event.
#[inline(always)]
pub fn wfi() {
    unsafe { asm!("wfi") };
}
