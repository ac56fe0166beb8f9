//! Hex Listing Tests.

use a64sim_core::sim::dump::{listing_name, write_hex_listing};
use pretty_assertions::assert_eq;

const HEADER: &str = "ADDR    ADDR+00  ADDR+04  ADDR+08  ADDR+0C  ";

fn listing(image: &[u8]) -> String {
    let mut out = Vec::new();
    write_hex_listing(image, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn header_and_rule() {
    let text = listing(&[]);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(HEADER));
    assert_eq!(lines.next(), Some("-".repeat(76).as_str()));
    assert_eq!(lines.next(), None);
}

#[test]
fn words_are_printed_little_endian() {
    let image = [
        0x43, 0x14, 0x00, 0xD1, // sub x3, x2, #5
        0x20, 0x08, 0x00, 0x0B, // add w0, w1, w0, lsl #2
        0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
    ];
    let text = listing(&image);
    assert_eq!(
        text.lines().nth(2),
        Some("0000    D1001443 0B000820 00000000 00000001 ")
    );
}

#[test]
fn rows_are_addressed_by_byte_offset() {
    let image: Vec<u8> = (0..40).collect();
    let text = listing(&image);
    let rows: Vec<&str> = text.lines().skip(2).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[1].starts_with("0010    "));
    assert!(rows[2].starts_with("0020    "));
}

#[test]
fn partial_final_row_is_zero_padded() {
    let text = listing(&[0xAA, 0xBB, 0xCC, 0xDD, 0x01]);
    assert_eq!(
        text.lines().nth(2),
        Some("0000    DDCCBBAA 00000001 00000000 00000000 ")
    );
}

#[test]
fn listing_file_name() {
    assert_eq!(listing_name("test1"), "txt_test1.txt");
}
