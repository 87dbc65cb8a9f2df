//! Hex Dump
//!
//! Fixed-width dump, 16 bytes per line:
//!
//! ```text
//! 00000000: 48 65 6c 6c 6f 0a                                 | Hello.
//! ```
//!
//! Missing slots on the last line are padded with blanks so the ASCII
//! column always starts at the same offset.

use std::fmt::Write;

/// Bytes shown per dump line.
pub const BYTES_PER_LINE: usize = 16;

/// Width of one dump line, newline excluded.
///
/// `offset: ` + 16 × `xx ` + ` | ` + 16 ASCII slots.
pub const LINE_WIDTH: usize = 8 + 2 + BYTES_PER_LINE * 3 + 3 + BYTES_PER_LINE;

/// Printable ASCII rendition of a byte.
#[inline]
fn printable(byte: u8) -> char {
    if (0x20..=0x7e).contains(&byte) {
        byte as char
    } else {
        '.'
    }
}

/// Render `data` as a hex/ASCII dump, one `\n`-terminated line per 16 bytes.
///
/// Empty input produces an empty string.
pub fn hex_dump(data: &[u8]) -> String {
    let line_count = data.len().div_ceil(BYTES_PER_LINE);
    let mut out = String::with_capacity(line_count * (LINE_WIDTH + 1));

    for (index, chunk) in data.chunks(BYTES_PER_LINE).enumerate() {
        write_dump_line(&mut out, index * BYTES_PER_LINE, chunk);
    }

    out
}

fn write_dump_line(out: &mut String, offset: usize, chunk: &[u8]) {
    // Writing into a String cannot fail
    let _ = write!(out, "{:08x}: ", offset);

    for slot in 0..BYTES_PER_LINE {
        match chunk.get(slot) {
            Some(byte) => {
                let _ = write!(out, "{:02x} ", byte);
            }
            None => out.push_str("   "),
        }
    }

    out.push_str(" | ");
    for slot in 0..BYTES_PER_LINE {
        out.push(chunk.get(slot).copied().map(printable).unwrap_or(' '));
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_single_full_line() {
        let data: Vec<u8> = (0x01..=0x10).collect();
        let dump = hex_dump(&data);

        assert_eq!(
            dump,
            "00000000: 01 02 03 04 05 06 07 08 09 0a 0b 0c 0d 0e 0f 10  | ................\n"
        );
        assert_eq!(dump.lines().count(), 1);
    }

    #[test]
    fn test_partial_second_line_is_padded() {
        let data: Vec<u8> = (0u8..20).map(|i| b'A' + i).collect();
        let dump = hex_dump(&data);
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].len(), LINE_WIDTH);
        assert_eq!(lines[1].len(), LINE_WIDTH);

        // 4 bytes present, 12 blank slots
        let expected_hex = format!("00000010: 51 52 53 54 {}", " ".repeat(12 * 3));
        assert!(lines[1].starts_with(&expected_hex));
        assert_eq!(lines[1], format!("{} | QRST{}", expected_hex, " ".repeat(12)));
    }

    #[test]
    fn test_ascii_column() {
        let dump = hex_dump(b"Hi!\x00\x7f~ \xff");
        let ascii = dump.trim_end_matches('\n').split(" | ").nth(1).unwrap();
        assert_eq!(ascii, format!("Hi!..~ .{}", " ".repeat(8)));
    }

    #[test]
    fn test_offsets_are_hex() {
        let data = vec![0u8; BYTES_PER_LINE * 17];
        let dump = hex_dump(&data);
        let last = dump.lines().last().unwrap();
        assert!(last.starts_with("00000100: "));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(hex_dump(&[]), "");
    }

    proptest! {
        #[test]
        fn prop_dump_keeps_fixed_layout(data in proptest::collection::vec(any::<u8>(), 0..200)) {
            let dump = hex_dump(&data);
            let lines: Vec<&str> = dump.lines().collect();

            prop_assert_eq!(lines.len(), data.len().div_ceil(BYTES_PER_LINE));
            for (i, line) in lines.iter().enumerate() {
                prop_assert_eq!(line.len(), LINE_WIDTH);
                let offset = format!("{:08x}: ", i * BYTES_PER_LINE);
                prop_assert!(line.starts_with(&offset));
                prop_assert_eq!(&line[58..61], " | ");
            }
        }
    }
}
