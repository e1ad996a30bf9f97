//! On-die thermometer backed by the RP2040 ADC.

use core::convert::Infallible;

use embedded_hal::adc::OneShot;
use rp2040_hal::adc::{Adc, TempSense};

use rtic_temp_monitor::thermometer::{vbe, Sample, Thermometer};

/// The internal temperature diode on ADC channel 4.
pub struct OnboardThermometer {
    adc: Adc,
    sense: TempSense,
}

impl OnboardThermometer {
    pub const fn new(adc: Adc, sense: TempSense) -> Self {
        Self { adc, sense }
    }
}

impl Thermometer for OnboardThermometer {
    type Error = Infallible;

    async fn read(&mut self) -> Result<Sample, Self::Error> {
        // A one-shot conversion only ever reports busy through WouldBlock,
        // which block! spins away.
        let counts: u16 = match nb::block!(self.adc.read(&mut self.sense)) {
            Ok(counts) => counts,
            Err(_) => defmt::unreachable!("ADC one-shot read failed"),
        };

        // The conversion is 12-bit; widen it to the full 16-bit scale
        Ok(vbe::sample_from_counts(vbe::widen_adc12(counts)))
    }
}
