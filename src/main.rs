#![no_std]
#![no_main]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(dead_code, clippy::module_name_repetitions, clippy::wildcard_imports)]

mod sampler;
mod sensor;

use defmt_rtt as _;
use panic_probe as _;

/// Second-stage bootloader, checksummed into the first flash page by the ROM.
#[link_section = ".boot2"]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

/// Pico crystal frequency
const XOSC_CRYSTAL_FREQ: u32 = 12_000_000;

/// How long the activity LED stays lit after each sample
const LED_PULSE_MS: u64 = 50;

#[rtic::app(device = rp2040_hal::pac, dispatchers = [SW0_IRQ, SW1_IRQ])]
mod app {
    use defmt::{panic, unreachable, *};
    use embedded_hal::digital::v2::OutputPin;
    use embedded_hal::watchdog::{Watchdog as _, WatchdogEnable as _};
    use fugit::{ExtU32, ExtU64, RateExtU32};
    use rp2040_hal::{
        adc::Adc,
        clocks::init_clocks_and_plls,
        gpio::{
            bank0::{Gpio25, Gpio4, Gpio5},
            FunctionI2C, FunctionSioOutput, Pin, PullDown, PullUp, Pins,
        },
        pac,
        rtc::{DateTime, DayOfWeek, RealTimeClock},
        watchdog::Watchdog,
        Clock, Sio, I2C,
    };
    use rtic_monotonics::{
        rp2040::{Timer as Mono, *},
        Monotonic,
    };
    use rtic_sync::{
        channel::{ReceiveError, Receiver, Sender},
        make_channel,
    };
    use ssd1306::{prelude::I2CInterface, I2CDisplayInterface};

    use rtic_temp_monitor::{screen::Screen, thermometer::Sample};

    use crate::sensor::OnboardThermometer;

    /// The RTC starts from a fixed date; log stamps are time-since-boot on
    /// top of this origin until something sets the clock.
    const BOOT_DATE: DateTime = DateTime {
        year: 2024,
        month: 1,
        day: 1,
        day_of_week: DayOfWeek::Monday,
        hour: 0,
        minute: 0,
        second: 0,
    };

    type LedPin = Pin<Gpio25, FunctionSioOutput, PullDown>;
    type OledI2c = I2C<
        pac::I2C0,
        (
            Pin<Gpio4, FunctionI2C, PullUp>,
            Pin<Gpio5, FunctionI2C, PullUp>,
        ),
    >;
    type OledScreen = Screen<I2CInterface<OledI2c>>;

    #[shared]
    struct Shared {}

    #[local]
    struct Local {
        thermometer: OnboardThermometer,
        rtc: RealTimeClock,
        tx: Sender<'static, Sample, 1>,
        led: LedPin,
        screen: OledScreen,
    }

    #[init]
    fn init(mut cx: init::Context) -> (Shared, Local) {
        let mut watchdog = Watchdog::new(cx.device.WATCHDOG);

        // Clocks from the 12 MHz crystal; this also starts the 1 MHz tick
        // that feeds the TIMER block.
        let Ok(clocks) = init_clocks_and_plls(
            crate::XOSC_CRYSTAL_FREQ,
            cx.device.XOSC,
            cx.device.CLOCKS,
            cx.device.PLL_SYS,
            cx.device.PLL_USB,
            &mut cx.device.RESETS,
            &mut watchdog,
        ) else {
            panic!("clock init failed");
        };

        trace!("sysclk: {}", clocks.system_clock.freq().to_Hz());

        // Enable the TIMER monotonic
        let token = rtic_monotonics::create_rp2040_monotonic_token!();
        Mono::start(cx.device.TIMER, &mut cx.device.RESETS, token);

        // Setup GPIO
        let sio = Sio::new(cx.device.SIO);
        let pins = Pins::new(
            cx.device.IO_BANK0,
            cx.device.PADS_BANK0,
            sio.gpio_bank0,
            &mut cx.device.RESETS,
        );

        let mut led = pins.gpio25.into_push_pull_output();
        unwrap!(led.set_low());

        // OLED on I2C0: GP4 = SDA, GP5 = SCL, 400 kHz
        let sda: Pin<_, FunctionI2C, PullUp> = pins.gpio4.reconfigure();
        let scl: Pin<_, FunctionI2C, PullUp> = pins.gpio5.reconfigure();
        let i2c = I2C::i2c0(
            cx.device.I2C0,
            sda,
            scl,
            400.kHz(),
            &mut cx.device.RESETS,
            &clocks.system_clock,
        );

        let mut screen = Screen::new(I2CDisplayInterface::new(i2c));
        unwrap!(screen.init());

        // The on-die temperature diode sits on the fifth ADC channel
        let mut adc = Adc::new(cx.device.ADC, &mut cx.device.RESETS);
        let temp_sense = unwrap!(adc.take_temp_sensor());
        let thermometer = OnboardThermometer::new(adc, temp_sense);

        // Wall clock for log stamps
        let rtc = match RealTimeClock::new(
            cx.device.RTC,
            clocks.rtc_clock,
            &mut cx.device.RESETS,
            BOOT_DATE,
        ) {
            Ok(rtc) => rtc,
            Err(_) => panic!("rtc init failed"),
        };

        // Samples flow from the sampler to the display task
        let (tx, rx) = make_channel!(Sample, 1);

        let _ = display::spawn(rx);
        let _ = watchdog::spawn(watchdog);
        let _ = sampler::spawn();

        (
            Shared {},
            Local {
                thermometer,
                rtc,
                tx,
                led,
                screen,
            },
        )
    }

    #[idle]
    fn idle(_: idle::Context) -> ! {
        loop {
            cortex_m::asm::wfi();
        }
    }

    #[task(priority = 2, local = [thermometer, rtc, tx])]
    async fn sampler(cx: sampler::Context) {
        crate::sampler::sampler(cx).await;
    }

    #[task(priority = 1, local = [screen])]
    async fn display(cx: display::Context, mut rx: Receiver<'static, Sample, 1>) {
        loop {
            let sample = match rx.recv().await {
                Ok(sample) => sample,
                Err(ReceiveError::Empty) => continue,
                Err(ReceiveError::NoSender) => unreachable!("Sender dropped"),
            };

            if let Err(e) = cx.local.screen.show(sample.temperature) {
                error!("display update failed: {}", e);
            }
        }
    }

    /// One LED pulse per sample
    #[task(priority = 1, local = [led])]
    async fn led_pulse(cx: led_pulse::Context) {
        unwrap!(cx.local.led.set_high());
        Mono::delay(crate::LED_PULSE_MS.millis()).await;
        unwrap!(cx.local.led.set_low());
    }

    #[task(priority = 1)]
    async fn watchdog(_: watchdog::Context, mut wdg: Watchdog) {
        wdg.start(2_000_000u32.micros());

        loop {
            wdg.feed();
            Mono::delay(500u64.millis()).await;
        }
    }

    timestamp!("{=u64:us}", {
        Mono::now().duration_since_epoch().to_micros()
    });
}
