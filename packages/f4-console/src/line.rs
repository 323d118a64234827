use crate::port::SerialPort;

/// Reads one line from the port into `buf`, echoing every received byte
/// back as it arrives (the carriage return included).
///
/// The loop ends when a carriage return has been stored or `buf` is full.
/// The last stored byte is then overwritten with a NUL, leaving a
/// NUL-delimited string in place of the terminator. Returns the number of
/// bytes written, counting the overwritten position.
///
/// When `buf` fills up before any carriage return arrives, the NUL still
/// lands on the final position and the last received byte is lost. That
/// truncation is part of the contract; callers needing the full input must
/// size `buf` accordingly.
///
/// A zero-length `buf` performs no I/O and returns 0.
pub fn read_line<P: SerialPort>(port: &mut P, buf: &mut [u8]) -> usize {
    if buf.is_empty() {
        return 0;
    }

    let mut ch = 0u8;
    let mut i = 0;

    while ch != b'\r' && i < buf.len() {
        ch = port.recv_byte();
        port.send_byte(ch);
        buf[i] = ch;
        i += 1;
    }

    buf[i - 1] = 0;
    i
}

/// Sends `text` byte by byte, stopping at the first NUL. A slice without a
/// NUL is sent in full. CR/LF is never appended; callers embed their own.
pub fn send_string<P: SerialPort>(port: &mut P, text: &[u8]) {
    for &b in text {
        if b == 0 {
            break;
        }
        port.send_byte(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedPort;

    #[test]
    fn line_is_echoed_and_nul_delimited() {
        let mut port = ScriptedPort::new(b"Hi\r");
        let mut buf = [0xaau8; 8];

        let len = read_line(&mut port, &mut buf);

        assert_eq!(len, 3);
        assert_eq!(&buf[..3], b"Hi\0");
        assert_eq!(port.sent(), b"Hi\r", "every byte echoes, CR included");
        assert!(port.exhausted());
    }

    #[test]
    fn full_buffer_without_cr_drops_last_byte() {
        let mut port = ScriptedPort::new(b"abcd");
        let mut buf = [0u8; 3];

        let len = read_line(&mut port, &mut buf);

        // 'c' was received and echoed, then overwritten by the NUL.
        assert_eq!(len, 3);
        assert_eq!(&buf, b"ab\0");
        assert_eq!(port.sent(), b"abc");
        assert_eq!(port.remaining(), b"d", "the fourth byte is never read");
    }

    #[test]
    fn cr_on_final_slot_still_terminates() {
        let mut port = ScriptedPort::new(b"ab\r");
        let mut buf = [0u8; 3];

        let len = read_line(&mut port, &mut buf);

        assert_eq!(len, 3);
        assert_eq!(&buf, b"ab\0");
        assert!(port.exhausted());
    }

    #[test]
    fn lone_cr_yields_empty_line() {
        let mut port = ScriptedPort::new(b"\r");
        let mut buf = [0u8; 4];

        let len = read_line(&mut port, &mut buf);

        assert_eq!(len, 1);
        assert_eq!(buf[0], 0);
        assert_eq!(port.sent(), b"\r");
    }

    #[test]
    fn zero_capacity_performs_no_io() {
        let mut port = ScriptedPort::new(b"anything");
        let mut buf = [0u8; 0];

        let len = read_line(&mut port, &mut buf);

        assert_eq!(len, 0);
        assert_eq!(port.sent(), b"");
        assert_eq!(port.remaining(), b"anything");
    }

    #[test]
    fn send_string_stops_at_nul() {
        let mut port = ScriptedPort::new(b"");
        send_string(&mut port, b"abc\0def");
        assert_eq!(port.sent(), b"abc");
    }

    #[test]
    fn send_string_without_nul_sends_all() {
        let mut port = ScriptedPort::new(b"");
        send_string(&mut port, b"\r\n$ ");
        assert_eq!(port.sent(), b"\r\n$ ");
    }
}
