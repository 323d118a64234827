use bitfield_struct::bitfield;

use super::volatile::mmio;

/// Debug exception and monitor control register
#[bitfield(u32)]
pub struct Demcr {
    #[bits(24)]
    _reserved0: u32,
    /// Trace system enable; the DWT only counts while this is set.
    pub trcena: bool,
    #[bits(7)]
    _reserved1: u8,
}

/// DWT control register
#[bitfield(u32)]
pub struct DwtControl {
    /// Cycle counter enable
    pub cyccntena: bool,
    #[bits(31)]
    _reserved: u32,
}

mmio! {
    pub const DEMCR: Demcr = 0xE000_EDFC, size = 4;
    pub const DWT_CTRL: DwtControl = 0xE000_1000, size = 4;
    pub const DWT_CYCCNT: u32 = 0xE000_1004, size = 4;
}

fn enable_cycle_counter() {
    if !DEMCR.read().trcena() {
        DEMCR.write(DEMCR.read().with_trcena(true));
    }

    DWT_CYCCNT.write(0);

    if !DWT_CTRL.read().cyccntena() {
        DWT_CTRL.write(DWT_CTRL.read().with_cyccntena(true));
    }
}

fn disable_cycle_counter() {
    if DWT_CTRL.read().cyccntena() {
        DWT_CTRL.write(DWT_CTRL.read().with_cyccntena(false));
    }

    if DEMCR.read().trcena() {
        DEMCR.write(DEMCR.read().with_trcena(false));
    }
}

/// Busy-wait for roughly `cycles` core cycles. Counter setup and the
/// polling loop itself eat cycles too, so the count is approximate.
pub fn wait_cycles(cycles: u32) {
    enable_cycle_counter();
    while DWT_CYCCNT.read() < cycles {}
    disable_cycle_counter();
}
