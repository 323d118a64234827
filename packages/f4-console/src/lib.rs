#![no_std]

mod echo;
mod line;
mod port;

pub use echo::{EchoService, GREETING, LINE_CAPACITY, State, run_echo_service};
pub use line::{read_line, send_string};
pub use port::{Serial, SerialPort, SerialRegisters};

#[cfg(test)]
mod testing {
    use crate::port::SerialPort;

    /// Port double fed from a fixed byte script, recording everything sent.
    /// Panics if the service reads past the script, which in every test here
    /// means the code under test performed I/O it should not have.
    pub struct ScriptedPort {
        input: &'static [u8],
        cursor: usize,
        output: arrayvec::ArrayVec<u8, 512>,
    }

    impl ScriptedPort {
        pub fn new(input: &'static [u8]) -> Self {
            Self {
                input,
                cursor: 0,
                output: arrayvec::ArrayVec::new(),
            }
        }

        pub fn sent(&self) -> &[u8] {
            &self.output
        }

        pub fn remaining(&self) -> &[u8] {
            &self.input[self.cursor..]
        }

        pub fn exhausted(&self) -> bool {
            self.cursor == self.input.len()
        }
    }

    impl SerialPort for ScriptedPort {
        fn send_byte(&mut self, byte: u8) {
            self.output.push(byte);
        }

        fn recv_byte(&mut self) -> u8 {
            let byte = *self
                .input
                .get(self.cursor)
                .expect("receive past end of scripted input");
            self.cursor += 1;
            byte
        }
    }
}
