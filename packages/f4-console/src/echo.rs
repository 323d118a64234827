use crate::line::{read_line, send_string};
use crate::port::SerialPort;

/// Line buffer size. Input longer than this without a carriage return is
/// truncated by `read_line`.
pub const LINE_CAPACITY: usize = 128;

/// Sent once by the application before the service starts.
pub const GREETING: &[u8] = b"\r\nHello World!\r\n\
Type 'Quit' to exit programm\r\n\
Press Enter to see echo:\r\n";

const PROMPT: &[u8] = b"\r\n$ ";
const BANNER: &[u8] = b"\r\nYou've typed: \r\n";
const CRLF: &[u8] = b"\r\n";
const FAREWELL: &[u8] = b"Exiting...\r\n";

/// The termination keyword, NUL-terminated so the dispatch comparison can
/// mirror a bounded C-string compare.
const QUIT: &[u8] = b"Quit\0";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Prompting,
    ReadingLine,
    Echoing,
    Dispatching,
    Terminated,
}

/// The echo/command service.
///
/// Each session iteration prompts, reads one echoed line, repeats it back
/// and dispatches on it. A line matching the quit keyword ends the session;
/// anything else prompts again.
pub struct EchoService {
    line: [u8; LINE_CAPACITY],
    len: usize,
    state: State,
}

impl EchoService {
    pub const fn new() -> Self {
        Self {
            line: [0; LINE_CAPACITY],
            len: 0,
            state: State::Prompting,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == State::Terminated
    }

    /// Runs one state transition. Once terminated, further steps are no-ops.
    pub fn step<P: SerialPort>(&mut self, port: &mut P) {
        match self.state {
            State::Prompting => {
                send_string(port, PROMPT);
                self.state = State::ReadingLine;
            }
            State::ReadingLine => {
                self.len = read_line(port, &mut self.line);
                self.state = State::Echoing;
            }
            State::Echoing => {
                send_string(port, BANNER);
                send_string(port, &self.line);
                send_string(port, CRLF);
                self.state = State::Dispatching;
            }
            State::Dispatching => {
                if command_matches(&self.line, self.len, QUIT) {
                    send_string(port, FAREWELL);
                    self.state = State::Terminated;
                } else {
                    self.state = State::Prompting;
                }
            }
            State::Terminated => {}
        }
    }

    /// Drives the service until it terminates. Blocks on serial I/O the
    /// whole way; only a quit command brings it back.
    pub fn run<P: SerialPort>(&mut self, port: &mut P) {
        while !self.is_terminated() {
            self.step(port);
        }
    }
}

impl Default for EchoService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_echo_service<P: SerialPort>(port: &mut P) {
    EchoService::new().run(port);
}

/// Bounded, case-sensitive compare of the first `len` line bytes against a
/// NUL-terminated keyword, with C `strncmp` semantics: the keyword's NUL
/// participates in the comparison, so `"Quit\r"` (stored as `Quit` + NUL,
/// length 5) matches while `"Quitx"` and `"quit"` do not.
fn command_matches(line: &[u8], len: usize, keyword: &[u8]) -> bool {
    let n = len.min(keyword.len());
    line[..n] == keyword[..n]
}
