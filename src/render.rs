//! Terminal output helpers: 24-bit accent coloring and word-paced streaming.

use std::io::{self, Write};

use crate::constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Parse a 6-digit hex color like `"17B890"` into its RGB channels.
/// Falls back to white on malformed input rather than failing a render.
pub fn hex_to_rgb(hex: &str) -> Rgb {
    let value = u32::from_str_radix(hex, 16).unwrap_or(0xFFFFFF);
    Rgb {
        r: ((value >> 16) & 0xFF) as u8,
        g: ((value >> 8) & 0xFF) as u8,
        b: (value & 0xFF) as u8,
    }
}

/// Wrap text in a 24-bit ANSI foreground escape, reset afterwards.
pub fn paint(text: &str, rgb: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m{}\x1b[0m", rgb.r, rgb.g, rgb.b, text)
}

/// Print a line in the accent color.
pub fn echo(text: &str) {
    println!("{}", paint(text, hex_to_rgb(constants::ACCENT_HEX)));
}

/// Stream `text` word by word in the accent color, one word (plus a trailing
/// space) per `delay`. Strictly sequential: the whole rendering is awaited
/// before control returns, so no later output can interleave with it.
pub async fn stream_words(text: &str, delay: std::time::Duration) -> io::Result<()> {
    let accent = hex_to_rgb(constants::ACCENT_HEX);
    let mut stdout = io::stdout();
    for word in text.split_whitespace() {
        write!(stdout, "{} ", paint(word, accent))?;
        stdout.flush()?;
        tokio::time::sleep(delay).await;
    }
    Ok(())
}
