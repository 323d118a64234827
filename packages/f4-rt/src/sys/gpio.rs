use super::VolatilePointer;
use super::volatile::{mmio, mmstruct};

/// Pin mode, two bits per pin in MODER.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Mode {
    Input = 0,
    Output = 1,
    Alternate = 2,
    Analog = 3,
}

/// Output slew rate, two bits per pin in OSPEEDR.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum Speed {
    Low = 0,
    Medium = 1,
    Fast = 2,
    High = 3,
}

mmstruct! {
    /// One GPIO port register block.
    #[repr(C)]
    #[derive(Clone, Copy)]
    pub struct GpioBlock {
        pub moder: u32,
        pub otyper: u32,
        pub ospeedr: u32,
        pub pupdr: u32,
        pub idr: u32,
        pub odr: u32,
        /// Bit set/reset register: low half sets pins, high half clears them.
        pub bsrr: u32,
        pub lckr: u32,
        pub afrl: u32,
        pub afrh: u32,
    }
}

mmio! {
    pub const GPIOA: GpioBlock = 0x4002_0000, size = 40;
    pub const GPIOD: GpioBlock = 0x4002_0C00, size = 40;
}

/// Handle over one GPIO port. The port clock must be gated on before any
/// of these registers respond.
#[derive(Clone, Copy)]
pub struct Port(VolatilePointer<GpioBlock>);

pub const fn port_a() -> Port {
    Port(GPIOA)
}

pub const fn port_d() -> Port {
    Port(GPIOD)
}

impl Port {
    pub fn set_mode(self, pin: u8, mode: Mode) {
        assert!(pin < 16);
        let shift = pin as u32 * 2;
        let moder = self.0.moder();
        moder.write(moder.read() & !(0b11 << shift) | ((mode as u32) << shift));
    }

    pub fn set_speed(self, pin: u8, speed: Speed) {
        assert!(pin < 16);
        let shift = pin as u32 * 2;
        let ospeedr = self.0.ospeedr();
        ospeedr.write(ospeedr.read() & !(0b11 << shift) | ((speed as u32) << shift));
    }

    /// Route alternate function `af` (0-15) to the pin. The pin must also
    /// be in [`Mode::Alternate`] for the routing to take effect.
    pub fn set_alternate_function(self, pin: u8, af: u8) {
        assert!(pin < 16 && af < 16);
        let reg = if pin < 8 { self.0.afrl() } else { self.0.afrh() };
        let shift = (pin as u32 % 8) * 4;
        reg.write(reg.read() & !(0xf << shift) | ((af as u32) << shift));
    }

    /// Drive the pin high. Single write, no read-modify-write window.
    pub fn set_high(self, pin: u8) {
        assert!(pin < 16);
        self.0.bsrr().write(1 << pin);
    }

    /// Drive the pin low.
    pub fn set_low(self, pin: u8) {
        assert!(pin < 16);
        self.0.bsrr().write(1 << (pin as u32 + 16));
    }
}
