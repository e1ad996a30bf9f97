//! Manual digit formatting for the display.
//!
//! `core::fmt` float formatting is a large amount of code for a readout that
//! only ever needs sign, integer digits and one decimal place, so the digits
//! are extracted by hand.

use core::fmt::Write;

use num_traits::AsPrimitive;

use crate::thermometer::Temperature;

/// Write a temperature as `<int>.<tenth>`, rounded half-up to one decimal.
pub fn write_temp<W: Write>(w: &mut W, temp: Temperature) -> core::fmt::Result {
    const FRAC_MASK: u32 = (1 << Temperature::FRAC_NBITS) - 1;
    const HALF: u32 = 1 << (Temperature::FRAC_NBITS - 1);

    let bits = temp.to_bits();
    if bits < 0 {
        w.write_char('-')?;
    }

    let mag = bits.unsigned_abs();
    let int_part = mag >> Temperature::FRAC_NBITS;
    let frac_part = mag & FRAC_MASK;
    // frac_part <= 15, so the rounded tenths digit never carries into the
    // integer part: (15 * 10 + 8) >> 4 == 9.
    let tenths = (frac_part * 10 + HALF) >> Temperature::FRAC_NBITS;

    write_uint(w, int_part)?;
    w.write_char('.')?;
    write_uint(w, tenths)
}

/// Write an unsigned integer in decimal.
pub fn write_uint<W: Write>(w: &mut W, mut num: u32) -> core::fmt::Result {
    const BUF_SIZE: usize = 10;

    let mut buf = [0u8; BUF_SIZE];
    let mut idx = 0;

    loop {
        let digit: u8 = (num % 10).as_();
        num /= 10;

        buf[BUF_SIZE - idx - 1] = b'0' + digit;
        idx += 1;

        if num == 0 {
            break;
        }
    }

    let buf = &buf[BUF_SIZE - idx..];
    // SAFETY: buf only contains ASCII digits
    w.write_str(unsafe { core::str::from_utf8_unchecked(buf) })
}

#[cfg(test)]
mod tests {
    use heapless::String;

    use super::*;

    fn render(temp: Temperature) -> String<16> {
        let mut s = String::new();
        write_temp(&mut s, temp).unwrap();
        s
    }

    #[test]
    fn integer_reading() {
        assert_eq!(render(Temperature::const_from_int(27)).as_str(), "27.0");
    }

    #[test]
    fn tenths_round_half_up() {
        // 27 + 5/16 = 27.3125
        assert_eq!(render(Temperature::from_bits(27 * 16 + 5)).as_str(), "27.3");
        // 0.5 exactly
        assert_eq!(render(Temperature::from_bits(8)).as_str(), "0.5");
        // 15/16 rounds to .9, never carrying into the integer part
        assert_eq!(render(Temperature::from_bits(15)).as_str(), "0.9");
    }

    #[test]
    fn negative_reading() {
        // -(12 + 5/16) = -12.3125
        assert_eq!(
            render(Temperature::from_bits(-(12 * 16 + 5))).as_str(),
            "-12.3"
        );
    }

    #[test]
    fn uint_all_digits() {
        let mut s: String<16> = String::new();
        write_uint(&mut s, u32::MAX).unwrap();
        assert_eq!(s.as_str(), "4294967295");
    }
}
