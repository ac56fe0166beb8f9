//! Hex listing of program images.
//!
//! Renders a raw image as rows of four little-endian 32-bit words, each row
//! labelled with the byte address of its first word:
//!
//! ```text
//! ADDR    ADDR+00  ADDR+04  ADDR+08  ADDR+0C
//! ----------------------------------------------------------------------------
//! 0000    D1001443 0B000820 B9400C20 00000000
//! ```

use std::io::{self, Write};

/// Number of words printed per row.
const WORDS_PER_LINE: usize = 4;

/// Width of a word in bytes.
const WORD_BYTES: usize = 4;

/// Length of the rule under the caption.
const RULE_LEN: usize = 76;

/// Writes the hex listing of `image` to `out`.
///
/// A trailing partial word, and a partial final row, are padded with zeros.
///
/// # Errors
///
/// Returns any I/O error raised by `out`.
pub fn write_hex_listing<W: Write>(image: &[u8], out: &mut W) -> io::Result<()> {
    write!(out, "ADDR    ")?;
    for j in 0..WORDS_PER_LINE {
        write!(out, "ADDR+{:02X}  ", j * WORD_BYTES)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "-".repeat(RULE_LEN))?;

    for (row, chunk) in image.chunks(WORDS_PER_LINE * WORD_BYTES).enumerate() {
        write!(out, "{:04X}    ", row * WORDS_PER_LINE * WORD_BYTES)?;
        let mut line = [0u8; WORDS_PER_LINE * WORD_BYTES];
        line[..chunk.len()].copy_from_slice(chunk);
        for word in line.chunks_exact(WORD_BYTES) {
            let word = u32::from_le_bytes([word[0], word[1], word[2], word[3]]);
            write!(out, "{word:08X} ")?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Returns the listing file name for an image: `txt_<stem>.txt`.
pub fn listing_name(image_stem: &str) -> String {
    format!("txt_{image_stem}.txt")
}
