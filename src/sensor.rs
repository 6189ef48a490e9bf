use chrono::{DateTime, Local};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    config::{HUMIDITY_RANGE, SALINITY_RANGE, TEMPERATURE_RANGE},
    sample::Sample,
};

/// Simulated soil probe. Every reading is drawn independently from the
/// configured ranges.
#[derive(Debug)]
pub struct SoilSensor<R> {
    rng: R,
}

impl SoilSensor<StdRng> {
    pub fn new() -> SoilSensor<StdRng> {
        SoilSensor::with_rng(StdRng::from_entropy())
    }
}

impl<R: Rng> SoilSensor<R> {
    pub fn with_rng(rng: R) -> SoilSensor<R> {
        SoilSensor { rng }
    }

    pub fn measure(&mut self, taken_at: DateTime<Local>) -> Sample {
        let temperature = self.rng.gen_range(TEMPERATURE_RANGE);
        let humidity = self.rng.gen_range(HUMIDITY_RANGE);
        let salinity = self.rng.gen_range(SALINITY_RANGE);

        Sample::new(taken_at, temperature, humidity, salinity)
    }
}
