//! Frame composition and SSD1306 driver glue.

use core::fmt::Write as _;

use defmt::Format;
use display_interface::{DisplayError, WriteOnlyDataCommand};
use embedded_graphics::{
    image::Image,
    mono_font::{ascii::FONT_10X20, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use heapless::String;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, Ssd1306};

use crate::{fmt, logo, thermometer::Temperature};

/// Where the temperature text starts.
const TEXT_ORIGIN: Point = Point::new(5, 5);
/// The logo sits in the top-right corner of the 128x32 panel.
const LOGO_ORIGIN: Point = Point::new(96, 0);

#[derive(Debug, Format, Copy, Clone, Eq, PartialEq)]
pub enum Error {
    /// I2C write to the display controller failed
    Bus,
    /// Drawing outside the frame buffer
    OutOfBounds,
    /// Anything else the display interface reports
    Interface,
}

impl From<DisplayError> for Error {
    fn from(value: DisplayError) -> Self {
        match value {
            DisplayError::BusWriteError => Self::Bus,
            DisplayError::OutOfBoundsError => Self::OutOfBounds,
            _ => Self::Interface,
        }
    }
}

/// Compose one frame: the reading in a large font plus the logo.
pub fn draw_frame<D>(target: &mut D, temp: Temperature) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    // Sign, 10 digits, point, tenths digit and " C" is at most 15 bytes.
    let mut label: String<16> = String::new();
    let _ = fmt::write_temp(&mut label, temp);
    let _ = label.write_str(" C");

    target.clear(BinaryColor::Off)?;

    let style = MonoTextStyle::new(&FONT_10X20, BinaryColor::On);
    Text::with_baseline(&label, TEXT_ORIGIN, style, Baseline::Top).draw(target)?;

    Image::new(&logo::RASPBERRY, LOGO_ORIGIN).draw(target)?;

    Ok(())
}

/// A 128x32 SSD1306 in buffered graphics mode.
pub struct Screen<DI> {
    display: Ssd1306<DI, DisplaySize128x32, BufferedGraphicsMode<DisplaySize128x32>>,
}

impl<DI: WriteOnlyDataCommand> Screen<DI> {
    pub fn new(interface: DI) -> Self {
        let display = Ssd1306::new(interface, DisplaySize128x32, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        Self { display }
    }

    /// Initialise the controller and blank the panel.
    pub fn init(&mut self) -> Result<(), Error> {
        self.display.init()?;
        self.display.clear(BinaryColor::Off)?;
        self.display.flush()?;
        Ok(())
    }

    /// Render the latest reading.
    pub fn show(&mut self, temp: Temperature) -> Result<(), Error> {
        draw_frame(&mut self.display, temp)?;
        self.display.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;

    #[test]
    fn frame_composes_cleanly() {
        // The mock target is 64x64; the frame is 128x32, so out-of-bounds
        // drawing must be tolerated. Overdraw is expected: text and logo are
        // painted over the cleared background.
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);

        draw_frame(&mut display, Temperature::const_from_int(27)).unwrap();

        // The readout starts inside the mock's visible area.
        assert!(!display.affected_area().is_zero_sized());
    }
}
