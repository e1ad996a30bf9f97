//! The 32x32 Raspberry Pi logo, 1 bit per pixel, MSB-first rows.

use embedded_graphics::{image::ImageRaw, pixelcolor::BinaryColor};

/// Logo width & height in pixels.
pub const SIDE: u32 = 32;

/// The logo as a drawable raw image.
pub const RASPBERRY: ImageRaw<'static, BinaryColor> = ImageRaw::new(&DATA, SIDE);

#[rustfmt::skip]
const DATA: [u8; 128] = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x7C, 0x3F, 0x00,
    0x01, 0x86, 0x40, 0x80,
    0x01, 0x01, 0x80, 0x80,
    0x01, 0x11, 0x88, 0x80,
    0x01, 0x05, 0xA0, 0x80,
    0x00, 0x83, 0xC1, 0x00,
    0x00, 0x43, 0xE3, 0x00,
    0x00, 0x7E, 0xFC, 0x00,
    0x00, 0x4C, 0x27, 0x00,
    0x00, 0x9C, 0x11, 0x00,
    0x00, 0xBF, 0xFD, 0x00,
    0x00, 0xE1, 0x87, 0x00,
    0x01, 0xC1, 0x83, 0x80,
    0x02, 0x41, 0x82, 0x40,
    0x02, 0x41, 0x82, 0x40,
    0x02, 0xC1, 0xC2, 0x40,
    0x02, 0xF6, 0x3E, 0xC0,
    0x01, 0xFC, 0x3D, 0x80,
    0x01, 0x18, 0x18, 0x80,
    0x01, 0x88, 0x10, 0x80,
    0x00, 0x8C, 0x21, 0x00,
    0x00, 0x87, 0xF1, 0x00,
    0x00, 0x7F, 0xF6, 0x00,
    0x00, 0x38, 0x1C, 0x00,
    0x00, 0x0C, 0x20, 0x00,
    0x00, 0x03, 0xC0, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];
