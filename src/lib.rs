//! Periodic on-die temperature sampling for the Raspberry Pi Pico, rendered
//! on a 128x32 SSD1306 OLED.
//!
//! The hardware-independent pieces live in this library so they can be unit
//! tested on the host; the RTIC application in `main.rs` wires them to the
//! RP2040 peripherals.

#![cfg_attr(not(test), no_std)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::cast_possible_truncation)]

pub mod fmt;
pub mod logo;
pub mod screen;
pub mod thermometer;
