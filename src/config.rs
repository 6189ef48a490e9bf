use std::ops::RangeInclusive;
use std::time::Duration;

pub const CYCLE_SIZE: usize = 16;

#[cfg(feature = "field-interval")]
pub const SAMPLE_INTERVAL_MS: u32 = 15 * 60 * 1000;
#[cfg(not(feature = "field-interval"))]
pub const SAMPLE_INTERVAL_MS: u32 = 2_000;

pub const POLL_PERIOD: Duration = Duration::from_millis(100);

pub const TEMPERATURE_RANGE: RangeInclusive<f32> = 15.0..=35.0;
pub const HUMIDITY_RANGE: RangeInclusive<f32> = 30.0..=90.0;
pub const SALINITY_RANGE: RangeInclusive<f32> = 0.5..=4.0;

pub const LOW_HUMIDITY_THRESHOLD: f32 = 45.0;
pub const HIGH_HUMIDITY_THRESHOLD: f32 = 80.0;
pub const HIGH_SALINITY_THRESHOLD: f32 = 3.0;
