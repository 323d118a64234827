use crate::sys;

/// Initial stack pointer. Grows down from the top of a 24 KiB region of
/// on-chip SRAM.
pub const STACK_START: usize = 0x2000_6000;

/// The table the processor reads from the boot address before executing a
/// single instruction: word 0 is loaded into the stack pointer, word 1 is
/// the reset vector it then jumps through.
#[repr(C)]
pub struct VectorTable {
    initial_stack: *const u32,
    reset: unsafe extern "C" fn() -> !,
}

// Immutable, and only the processor reads it.
unsafe impl Sync for VectorTable {}

// Two machine words, back to back, nothing in between.
const _: () = assert!(size_of::<VectorTable>() == 2 * size_of::<usize>());
const _: () = assert!(core::mem::offset_of!(VectorTable, initial_stack) == 0);
const _: () = assert!(core::mem::offset_of!(VectorTable, reset) == size_of::<usize>());

/// The linker script pins `.vector_table` to the flash origin and fails the
/// link if it lands anywhere else.
///
/// Only the reset vector is populated. Fault handlers, SysTick and
/// peripheral interrupt slots are a known gap; which of them a deployment
/// needs must be decided per target, and until then no interrupt source may
/// be enabled.
#[unsafe(link_section = ".vector_table")]
#[used]
pub static VECTOR_TABLE: VectorTable = VectorTable {
    initial_stack: STACK_START as *const u32,
    reset: _f4_rt_reset,
};

unsafe extern "Rust" {
    unsafe fn _f4_rt_main();
}

/// The first code to run after power-up. Hands control to the application
/// entry point and, should that return, parks the core forever. There is no
/// caller to return to.
#[unsafe(no_mangle)]
unsafe extern "C" fn _f4_rt_reset() -> ! {
    unsafe { _f4_rt_main() };
    loop {
        sys::wfi();
    }
}
