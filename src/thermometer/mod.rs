//! Temperature sensor interface

pub mod vbe;

use fixed::types::I28F4;

/// I28F4 is a fixed point number with 4 fractional bits and 28 integer bits.
/// This gives us a precision of 0.0625 degrees Celsius & a range of (-2^28, 2^28 - 0.0625).
pub type Temperature = I28F4;

/// One temperature sample, as taken from the ADC.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Sample {
    /// ADC result on the full 16-bit scale
    pub counts: u16,
    /// Sensor voltage derived from the counts
    pub microvolts: u32,
    /// Converted temperature in degrees Celsius
    pub temperature: Temperature,
}

static_assertions::assert_eq_size!(Sample, [u32; 3]);

pub trait Thermometer {
    type Error;

    /// Take a single temperature sample
    #[allow(async_fn_in_trait)]
    async fn read(&mut self) -> Result<Sample, Self::Error>;
}

/// Fake thermometer for testing
#[cfg(feature = "fake")]
pub mod fake {
    use core::convert::Infallible;

    use crate::thermometer::{vbe, Sample, Thermometer};

    /// A fake thermometer that always reports the same ADC counts
    pub struct FakeThermometer {
        counts: u16,
    }

    impl FakeThermometer {
        pub const fn new(counts: u16) -> Self {
            Self { counts }
        }

        /// Get the current counts
        pub const fn counts(&self) -> u16 {
            self.counts
        }
        /// Get a mutable reference to the current counts
        pub fn counts_mut(&mut self) -> &mut u16 {
            &mut self.counts
        }
    }

    impl Thermometer for FakeThermometer {
        type Error = Infallible;

        async fn read(&mut self) -> Result<Sample, Self::Error> {
            Ok(vbe::sample_from_counts(self.counts))
        }
    }
}
