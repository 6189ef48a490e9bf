use std::fmt;

use crate::config::{HIGH_HUMIDITY_THRESHOLD, HIGH_SALINITY_THRESHOLD, LOW_HUMIDITY_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrrigationDecision {
    HighSalinityRisk,
    LowHumidity,
    HighHumidity,
    IdealLevel,
}

impl IrrigationDecision {
    pub fn label(self) -> &'static str {
        match self {
            IrrigationDecision::HighSalinityRisk => "do not irrigate: high salinity risk",
            IrrigationDecision::LowHumidity => "irrigate: low humidity",
            IrrigationDecision::HighHumidity => "do not irrigate: high humidity",
            IrrigationDecision::IdealLevel => "do not irrigate: ideal level",
        }
    }

    pub fn should_irrigate(self) -> bool {
        self == IrrigationDecision::LowHumidity
    }
}

impl fmt::Display for IrrigationDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Temperature does not affect the outcome.
pub fn decide(_temperature: f32, humidity: f32, salinity: f32) -> IrrigationDecision {
    if humidity < LOW_HUMIDITY_THRESHOLD {
        if salinity > HIGH_SALINITY_THRESHOLD {
            IrrigationDecision::HighSalinityRisk
        } else {
            IrrigationDecision::LowHumidity
        }
    } else if humidity > HIGH_HUMIDITY_THRESHOLD {
        IrrigationDecision::HighHumidity
    } else {
        IrrigationDecision::IdealLevel
    }
}
