use bitfield_struct::bitfield;
use f4_console::SerialRegisters;

use super::VolatilePointer;
use super::volatile::{mmio, mmstruct};

/// U(S)ART status register
#[bitfield(u32)]
pub struct Status {
    /// Parity error
    pub pe: bool,
    /// Framing error
    pub fe: bool,
    /// Noise detected
    pub nf: bool,
    /// Overrun error
    pub ore: bool,
    /// Idle line detected
    pub idle: bool,
    /// Read data register not empty
    pub rxne: bool,
    /// Transmission complete
    pub tc: bool,
    /// Transmit data register empty
    pub txe: bool,
    /// LIN break detected
    pub lbd: bool,
    /// CTS toggled (absent on UART4/UART5)
    pub cts: bool,
    #[bits(22)]
    _reserved: u32,
}

/// U(S)ART control register 1
#[bitfield(u32)]
pub struct Control1 {
    /// Send break
    pub sbk: bool,
    /// Receiver wakeup
    pub rwu: bool,
    /// Receiver enable
    pub re: bool,
    /// Transmitter enable
    pub te: bool,
    /// Idle line interrupt enable
    pub idleie: bool,
    /// RXNE interrupt enable
    pub rxneie: bool,
    /// Transmission complete interrupt enable
    pub tcie: bool,
    /// TXE interrupt enable
    pub txeie: bool,
    /// Parity error interrupt enable
    pub peie: bool,
    /// Parity selection (set = odd)
    pub ps: bool,
    /// Parity control enable
    pub pce: bool,
    /// Wakeup method
    pub wake: bool,
    /// Word length (set = 9 data bits)
    pub m: bool,
    /// USART enable
    pub ue: bool,
    _reserved0: bool,
    /// Oversampling by 8
    pub over8: bool,
    #[bits(16)]
    _reserved1: u16,
}

/// Baud rate divider, a 12.4 fixed-point fraction of the peripheral clock.
#[bitfield(u32)]
pub struct BaudRate {
    #[bits(4)]
    pub div_fraction: u8,
    #[bits(12)]
    pub div_mantissa: u16,
    #[bits(16)]
    _reserved: u16,
}

mmstruct! {
    /// One U(S)ART register block. UART4 and UART5 lack the synchronous and
    /// hardware flow control features but share this layout.
    #[repr(C)]
    #[derive(Clone, Copy)]
    pub struct UsartBlock {
        pub sr: Status,
        /// Coupled data register: writes feed the transmitter, reads drain
        /// the receiver.
        pub dr: u32,
        pub brr: BaudRate,
        pub cr1: Control1,
        pub cr2: u32,
        pub cr3: u32,
        pub gtpr: u32,
    }
}

mmio! {
    pub const UART4: UsartBlock = 0x4000_4C00, size = 28;
}

/// 115200 baud off the 16 MHz reset-default HSI clock: divider 8 + 11/16.
pub const BAUD_115200_AT_16MHZ: BaudRate =
    BaudRate::new().with_div_mantissa(8).with_div_fraction(11);

/// Handle over one U(S)ART register block.
///
/// This is the only way the serial peripheral is reached; whoever holds the
/// handle owns the peripheral for the duration of each blocking call.
#[derive(Clone, Copy)]
pub struct Uart(VolatilePointer<UsartBlock>);

pub const fn uart4() -> Uart {
    Uart(UART4)
}

impl Uart {
    /// Program the divider and enable the peripheral: 8 data bits, 1 stop
    /// bit, no parity, transmitter and receiver on. The peripheral clock
    /// must already be gated on.
    pub fn init(self, divisor: BaudRate) {
        self.0.brr().write(divisor);
        self.0.cr1().write(
            Control1::new()
                .with_ue(true)
                .with_te(true)
                .with_re(true),
        );
    }
}

impl SerialRegisters for Uart {
    fn transmit_ready(&mut self) -> bool {
        // TC rather than TXE: a byte is loaded only once the previous frame
        // has fully left the shift register.
        self.0.sr().read().tc()
    }

    fn receive_ready(&mut self) -> bool {
        self.0.sr().read().rxne()
    }

    fn write_data(&mut self, byte: u8) {
        self.0.dr().write(byte as u32);
    }

    fn read_data(&mut self) -> u8 {
        self.0.dr().read() as u8
    }
}
