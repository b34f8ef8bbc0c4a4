//! Typewriter Demo
//!
//! Reveals a line of markup in the terminal at a fixed frame rate:
//! - a `tokio` interval stands in for the host frame loop
//! - Ctrl-C interrupts the reveal through the shared token
//! - logs go to `typewriter.log`

use std::io::Write;
use std::time::Duration;

use typewriter_text::log::LevelFilter;
use typewriter_text::typewriter::log_init::init_logger;
use typewriter_text::{InterruptToken, ParsedMarkup, RevealOptions, Typewriter};

const LINE: &str = "<b>Hello</b>, <color=#ff8800>traveller</color>. <i>Mind the <u>gap</u>.</i>";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger("typewriter.log", LevelFilter::Debug)?;

    let token = InterruptToken::new();
    let mut typewriter = Typewriter::new(LINE, RevealOptions::new(20.0), token.clone())?;

    let interrupter = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() && interrupter.can_interrupt() {
            let _ = interrupter.interrupt();
        }
    });

    let mut stdout = std::io::stdout();
    write!(stdout, "{}", typewriter.initial_frame())?;
    stdout.flush()?;

    let frame_time = Duration::from_millis(16);
    let mut interval = tokio::time::interval(frame_time);
    let mut typed = 0;
    loop {
        interval.tick().await;
        let text = match typewriter.tick(frame_time, |_| typed += 1) {
            Some(frame) if frame.finished => {
                write!(stdout, "\r\x1b[2K{}", frame.text)?;
                break;
            }
            Some(frame) => frame.text,
            // Interrupted: show exactly what was revealed.
            None => {
                write!(stdout, "\r\x1b[2K{}", typewriter.visible_markup()?.raw())?;
                break;
            }
        };
        write!(stdout, "\r\x1b[2K{text}")?;
        stdout.flush()?;
    }
    writeln!(stdout)?;

    let parsed = ParsedMarkup::parse(LINE);
    writeln!(stdout, "typed {typed} of {} characters", parsed.len())?;
    writeln!(stdout, "escaped: {}", parsed.escape()?)?;
    Ok(())
}
