use std::io::Write;

use chrono::{DateTime, Local, TimeDelta};
use rand::Rng;
use thiserror::Error;

use crate::{
    average::{self, AverageError},
    buffer::SampleBuffer,
    clock, decision,
    report::{self, CycleReport},
    sample::Sample,
    sensor::SoilSensor,
};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MonitorError {
    #[error("sample buffer is full, the previous cycle was not reset")]
    BufferFull,
    #[error(transparent)]
    Average(#[from] AverageError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    Idle,
    Sampled { count: usize },
    Reported(CycleReport),
}

#[derive(Debug)]
pub struct Monitor<R> {
    sensor: SoilSensor<R>,
    samples: SampleBuffer,
    started_at: DateTime<Local>,
    last_sample_ms: u32,
    interval_ms: u32,
}

impl<R: Rng> Monitor<R> {
    pub fn new(
        sensor: SoilSensor<R>,
        interval_ms: u32,
        started_at: DateTime<Local>,
    ) -> Monitor<R> {
        Monitor {
            sensor,
            samples: SampleBuffer::new(),
            started_at,
            last_sample_ms: 0,
            interval_ms,
        }
    }

    pub fn count(&self) -> usize {
        self.samples.len()
    }

    pub fn collect_sample(&mut self, now_ms: u32) -> Result<Sample, MonitorError> {
        let taken_at = self.started_at + TimeDelta::milliseconds(i64::from(now_ms));
        let sample = self.sensor.measure(taken_at);
        self.samples
            .push(sample)
            .map_err(|_| MonitorError::BufferFull)?;

        log::debug!("Collected sample {}", self.samples.len());
        Ok(sample)
    }

    /// `None` unless the cycle is complete. Never touches the samples.
    pub fn process_cycle(&self) -> Result<Option<CycleReport>, MonitorError> {
        let Some(average) = average::trimmed_average(&self.samples)? else {
            return Ok(None);
        };

        let decision = decision::decide(average.temperature, average.humidity, average.salinity);
        Ok(Some(CycleReport { average, decision }))
    }

    pub fn reset(&mut self) {
        self.samples.clear();
        log::debug!("Sample buffer reset");
    }

    pub fn tick<W: Write>(
        &mut self,
        now_ms: u32,
        out: &mut W,
    ) -> Result<TickOutcome, anyhow::Error> {
        if clock::elapsed_ms(now_ms, self.last_sample_ms) < self.interval_ms {
            return Ok(TickOutcome::Idle);
        }
        self.last_sample_ms = now_ms;

        let sample = self.collect_sample(now_ms)?;
        let count = self.count();
        let line = report::write_sample_line(out, count, &sample);

        let Some(cycle) = self.process_cycle()? else {
            line?;
            return Ok(TickOutcome::Sampled { count });
        };

        // A failed write still ends the cycle.
        let written = line.and_then(|()| report::write_report(out, &cycle));
        self.reset();
        written?;

        Ok(TickOutcome::Reported(cycle))
    }
}
