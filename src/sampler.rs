//! Periodic sampling task

use defmt::*;
use fugit::ExtU64;
use rtic_monotonics::{
    rp2040::{Timer as Mono, *},
    Monotonic,
};

use rtic_temp_monitor::thermometer::Thermometer;

/// Sample cadence: 0.5 Hz
const SAMPLE_PERIOD_MS: u64 = 2_000;

#[cfg_attr(feature = "sizing", inline(never))]
pub async fn sampler(mut cx: crate::app::sampler::Context<'_>) {
    let mut now = Mono::now();

    loop {
        trace!("sampler");

        sample_once(&mut cx).await;

        now += SAMPLE_PERIOD_MS.millis();
        Mono::delay_until(now).await;
    }
}

async fn sample_once(cx: &mut crate::app::sampler::Context<'_>) {
    // Pulse the activity LED for this sample
    let _ = crate::app::led_pulse::spawn();

    let sample = unwrap!(cx.local.thermometer.read().await);

    // Mirror the reading to the log with a wall-clock stamp
    match cx.local.rtc.now() {
        Ok(t) => info!(
            "{=u8:02}:{=u8:02}:{=u8:02}, {=u8:02}/{=u8:02}/{=u16:04}: {=f32} C, {=u32} uV, adc {=u16}",
            t.hour,
            t.minute,
            t.second,
            t.month,
            t.day,
            t.year,
            sample.temperature.to_num::<f32>(),
            sample.microvolts,
            sample.counts,
        ),
        Err(_) => error!("RTC read failed"),
    }

    // Hand the sample to the display task; if a redraw is still in flight
    // the stale sample is dropped in favour of the next one.
    if cx.local.tx.try_send(sample).is_err() {
        warn!("display busy, sample dropped");
    }
}
