/// Raw access to one serial peripheral's status and data registers.
///
/// Implementations hand the transport a single register block; nothing else
/// may touch those registers while the handle is alive. There is exactly one
/// thread of control on the target and no interrupt handler shares the
/// peripheral, so no locking is layered on top.
pub trait SerialRegisters {
    /// The peripheral can accept a byte to send.
    fn transmit_ready(&mut self) -> bool;
    /// The peripheral holds a received byte that has not been read yet.
    fn receive_ready(&mut self) -> bool;
    /// Write a byte to the data register, starting a transmission.
    fn write_data(&mut self, byte: u8);
    /// Read the data register, consuming the received byte.
    fn read_data(&mut self) -> u8;
}

/// Byte-oriented blocking serial I/O, as seen by the line service.
pub trait SerialPort {
    fn send_byte(&mut self, byte: u8);
    fn recv_byte(&mut self) -> u8;
}

/// Blocking transport over a raw register handle.
///
/// Both operations busy-wait on the corresponding status flag with no
/// timeout. A flag that never sets blocks the whole program; on a system
/// with no OS and no other work to do, that is the intended behavior, not
/// an error to recover from.
pub struct Serial<R> {
    regs: R,
}

impl<R: SerialRegisters> Serial<R> {
    pub const fn new(regs: R) -> Self {
        Self { regs }
    }

    pub fn into_inner(self) -> R {
        self.regs
    }
}

impl<R: SerialRegisters> SerialPort for Serial<R> {
    fn send_byte(&mut self, byte: u8) {
        while !self.regs.transmit_ready() {}
        self.regs.write_data(byte);
    }

    fn recv_byte(&mut self) -> u8 {
        while !self.regs.receive_ready() {}
        self.regs.read_data()
    }
}

impl<R: SerialRegisters> core::fmt::Write for Serial<R> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for b in s.as_bytes() {
            self.send_byte(*b);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::fmt::Write as _;

    /// Register double whose ready flags read as set only on the Nth poll,
    /// counting polls and refusing data access while a flag is clear.
    struct CountdownRegisters {
        tx_ready_on_poll: u32,
        rx_ready_on_poll: u32,
        tx_polls: u32,
        rx_polls: u32,
        written: arrayvec::ArrayVec<u8, 32>,
        read_value: u8,
    }

    impl CountdownRegisters {
        fn new(tx_ready_on_poll: u32, rx_ready_on_poll: u32) -> Self {
            Self {
                tx_ready_on_poll,
                rx_ready_on_poll,
                tx_polls: 0,
                rx_polls: 0,
                written: arrayvec::ArrayVec::new(),
                read_value: 0,
            }
        }
    }

    impl SerialRegisters for CountdownRegisters {
        fn transmit_ready(&mut self) -> bool {
            self.tx_polls += 1;
            self.tx_polls >= self.tx_ready_on_poll
        }
        fn receive_ready(&mut self) -> bool {
            self.rx_polls += 1;
            self.rx_polls >= self.rx_ready_on_poll
        }
        fn write_data(&mut self, byte: u8) {
            assert!(
                self.tx_polls >= self.tx_ready_on_poll,
                "data register written before ready flag was set"
            );
            self.written.push(byte);
        }
        fn read_data(&mut self) -> u8 {
            assert!(
                self.rx_polls >= self.rx_ready_on_poll,
                "data register read before ready flag was set"
            );
            self.read_value
        }
    }

    #[test]
    fn send_polls_until_ready_flag_sets() {
        let mut port = Serial::new(CountdownRegisters::new(7, 1));
        port.send_byte(b'x');
        let regs = port.into_inner();
        assert_eq!(regs.tx_polls, 7, "expected exactly 7 polls of the ready flag");
        assert_eq!(regs.written.as_slice(), b"x");
    }

    #[test]
    fn send_writes_on_first_poll_when_ready() {
        let mut port = Serial::new(CountdownRegisters::new(1, 1));
        port.send_byte(b'a');
        port.send_byte(b'b');
        let regs = port.into_inner();
        assert_eq!(regs.tx_polls, 2);
        assert_eq!(regs.written.as_slice(), b"ab");
    }

    #[test]
    fn recv_polls_until_ready_flag_sets() {
        let mut regs = CountdownRegisters::new(1, 12);
        regs.read_value = 0x55;
        let mut port = Serial::new(regs);
        assert_eq!(port.recv_byte(), 0x55);
        assert_eq!(port.into_inner().rx_polls, 12);
    }

    #[test]
    fn fmt_write_sends_every_byte() {
        let mut port = Serial::new(CountdownRegisters::new(1, 1));
        write!(port, "ok {}", 4).unwrap();
        assert_eq!(port.into_inner().written.as_slice(), b"ok 4");
    }
}
