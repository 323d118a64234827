#![no_main]
#![no_std]

use f4_console::{GREETING, Serial, run_echo_service, send_string};
use f4_rt::sys::{gpio, rcc, usart};

f4_rt::main!({ main() });

// UART4 signals on port A: PA0 is TX, PA1 is RX, both alternate function 8.
const TX_PIN: u8 = 0;
const RX_PIN: u8 = 1;
const UART4_AF: u8 = 8;

fn main() {
    rcc::enable_uart4();
    rcc::enable_gpioa();

    let pins = gpio::port_a();
    for pin in [TX_PIN, RX_PIN] {
        pins.set_mode(pin, gpio::Mode::Alternate);
        pins.set_speed(pin, gpio::Speed::Fast);
        pins.set_alternate_function(pin, UART4_AF);
    }

    let uart = usart::uart4();
    uart.init(usart::BAUD_115200_AT_16MHZ);

    let mut port = Serial::new(uart);
    send_string(&mut port, GREETING);
    run_echo_service(&mut port);

    // A quit command landed; returning parks the core in the reset handler.
}
