use bitfield_struct::bitfield;

use super::volatile::mmio;

/// AHB1 peripheral clock enable register
#[bitfield(u32)]
pub struct Ahb1Enable {
    pub gpioa: bool,
    pub gpiob: bool,
    pub gpioc: bool,
    pub gpiod: bool,
    pub gpioe: bool,
    pub gpiof: bool,
    pub gpiog: bool,
    pub gpioh: bool,
    pub gpioi: bool,
    #[bits(12)]
    _reserved0: u16,
    pub dma1: bool,
    pub dma2: bool,
    #[bits(9)]
    _reserved1: u16,
}

/// APB1 peripheral clock enable register
#[bitfield(u32)]
pub struct Apb1Enable {
    /// Timers, window watchdog
    #[bits(14)]
    _reserved0: u16,
    pub spi2: bool,
    pub spi3: bool,
    _reserved1: bool,
    pub usart2: bool,
    pub usart3: bool,
    pub uart4: bool,
    pub uart5: bool,
    pub i2c1: bool,
    pub i2c2: bool,
    pub i2c3: bool,
    _reserved2: bool,
    pub can1: bool,
    pub can2: bool,
    _reserved3: bool,
    pub pwr: bool,
    pub dac: bool,
    #[bits(2)]
    _reserved4: u8,
}

mmio! {
    pub const AHB1ENR: Ahb1Enable = 0x4002_3830, size = 4;
    pub const APB1ENR: Apb1Enable = 0x4002_3840, size = 4;
}

/// Gate the GPIOA port clock on. Read-modify-write, other enables keep
/// their state.
pub fn enable_gpioa() {
    AHB1ENR.write(AHB1ENR.read().with_gpioa(true));
}

/// Gate the GPIOD port clock on.
pub fn enable_gpiod() {
    AHB1ENR.write(AHB1ENR.read().with_gpiod(true));
}

/// Gate the UART4 peripheral clock on.
pub fn enable_uart4() {
    APB1ENR.write(APB1ENR.read().with_uart4(true));
}
