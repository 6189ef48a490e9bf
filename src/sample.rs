use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    taken_at: DateTime<Local>,
    temperature: f32,
    humidity: f32,
    salinity: f32,
}

impl Sample {
    pub fn new(taken_at: DateTime<Local>, temperature: f32, humidity: f32, salinity: f32) -> Self {
        Self {
            taken_at,
            temperature,
            humidity,
            salinity,
        }
    }

    pub fn taken_at(&self) -> DateTime<Local> {
        self.taken_at
    }

    /// Degrees Celsius.
    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Relative humidity in percent.
    pub fn humidity(&self) -> f32 {
        self.humidity
    }

    /// Electrical conductivity in dS/m.
    pub fn salinity(&self) -> f32 {
        self.salinity
    }
}

#[cfg(test)]
impl Sample {
    pub fn at_epoch(temperature: f32, humidity: f32, salinity: f32) -> Self {
        Self::new(DateTime::default(), temperature, humidity, salinity)
    }
}
