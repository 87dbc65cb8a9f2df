//! Record Formatting
//!
//! Pure, non-blocking rendering. No locks, no I/O.
//!
//! - `line`: bounded message rendering and the canonical record line
//! - `hex`: fixed-width hex/ASCII dump

pub mod hex;
pub mod line;

// Re-export formatting entry points
pub use hex::{hex_dump, BYTES_PER_LINE};
pub use line::{
    format_hex_header, format_line, render_message, render_message_bounded, BoundedBuffer,
    FormatError, MAX_MESSAGE_CHARS,
};
