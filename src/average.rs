use thiserror::Error;

use crate::{buffer::SampleBuffer, sample::Sample};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AverageError {
    #[error("no samples left after dropping the temperature extremes")]
    NoSamplesRemaining,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrimmedAverage {
    pub temperature: f32,
    pub humidity: f32,
    pub salinity: f32,
    pub remaining: usize,
}

/// `Ok(None)` until the buffer holds a full cycle.
pub fn trimmed_average(buffer: &SampleBuffer) -> Result<Option<TrimmedAverage>, AverageError> {
    if !buffer.is_full() {
        return Ok(None);
    }

    average_excluding_extremes(buffer.iter()).map(Some)
}

/// Drops the coldest and the hottest sample by position and averages the
/// rest. Ties go to the first sample yielded.
pub fn average_excluding_extremes<'a, I>(samples: I) -> Result<TrimmedAverage, AverageError>
where
    I: Iterator<Item = &'a Sample> + Clone,
{
    let mut coldest: Option<(usize, f32)> = None;
    let mut hottest: Option<(usize, f32)> = None;

    for (index, sample) in samples.clone().enumerate() {
        let temperature = sample.temperature();
        if coldest.is_none_or(|(_, t)| temperature < t) {
            coldest = Some((index, temperature));
        }
        if hottest.is_none_or(|(_, t)| temperature > t) {
            hottest = Some((index, temperature));
        }
    }

    let coldest = coldest.map(|(index, _)| index);
    let hottest = hottest.map(|(index, _)| index);

    let mut temperature = 0.0;
    let mut humidity = 0.0;
    let mut salinity = 0.0;
    let mut remaining = 0;

    for (index, sample) in samples.enumerate() {
        if Some(index) == coldest || Some(index) == hottest {
            continue;
        }
        temperature += sample.temperature();
        humidity += sample.humidity();
        salinity += sample.salinity();
        remaining += 1;
    }

    if remaining == 0 {
        return Err(AverageError::NoSamplesRemaining);
    }

    let n = remaining as f32;
    Ok(TrimmedAverage {
        temperature: temperature / n,
        humidity: humidity / n,
        salinity: salinity / n,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CYCLE_SIZE;

    const EPSILON: f32 = 1e-4;

    fn buffer_of(samples: impl IntoIterator<Item = Sample>) -> SampleBuffer {
        let mut buffer = SampleBuffer::new();
        for sample in samples {
            buffer.push(sample).unwrap();
        }
        buffer
    }

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_drops_unique_min_and_max() {
        let mut samples = vec![
            Sample::at_epoch(10.0, 0.0, 0.0),
            Sample::at_epoch(40.0, 0.0, 0.0),
        ];
        samples.extend((0..14).map(|i| Sample::at_epoch(20.0 + i as f32 * 0.5, 50.0, 2.0)));
        let buffer = buffer_of(samples);

        let average = trimmed_average(&buffer).unwrap().unwrap();

        assert_eq!(average.remaining, 14);
        assert_close(average.temperature, 23.25);
        assert_close(average.humidity, 50.0);
        assert_close(average.salinity, 2.0);
    }

    #[test]
    fn test_equal_temperatures_drop_one_sample() {
        let mut samples: Vec<Sample> = (0..15)
            .map(|_| Sample::at_epoch(25.0, 60.0, 1.5))
            .collect();
        // Pushed last, so it is the first one visited and wins both ties.
        samples.push(Sample::at_epoch(25.0, 0.0, 0.0));
        let buffer = buffer_of(samples);

        let average = trimmed_average(&buffer).unwrap().unwrap();

        assert_eq!(average.remaining, 15);
        assert_close(average.temperature, 25.0);
        assert_close(average.humidity, 60.0);
        assert_close(average.salinity, 1.5);
    }

    #[test]
    fn test_tied_minimum_drops_newest() {
        let mut samples = vec![Sample::at_epoch(10.0, 40.0, 1.0)];
        samples.extend((0..13).map(|_| Sample::at_epoch(20.0, 40.0, 1.0)));
        samples.push(Sample::at_epoch(30.0, 40.0, 1.0));
        samples.push(Sample::at_epoch(10.0, 0.0, 1.0));
        let buffer = buffer_of(samples);

        let average = trimmed_average(&buffer).unwrap().unwrap();

        // The older 10.0 reading survives, the newer one does not.
        assert_eq!(average.remaining, 14);
        assert_close(average.humidity, 40.0);
        assert_close(average.temperature, (10.0 + 13.0 * 20.0) / 14.0);
    }

    #[test]
    fn test_partial_cycle_is_skipped() {
        let buffer = buffer_of((0..CYCLE_SIZE - 1).map(|_| Sample::at_epoch(20.0, 50.0, 1.0)));

        assert_eq!(trimmed_average(&buffer), Ok(None));
        assert_eq!(trimmed_average(&SampleBuffer::new()), Ok(None));
    }

    #[test]
    fn test_nothing_left_is_an_error() {
        let single = [Sample::at_epoch(20.0, 50.0, 1.0)];
        assert_eq!(
            average_excluding_extremes(single.iter()),
            Err(AverageError::NoSamplesRemaining)
        );

        let pair = [
            Sample::at_epoch(20.0, 50.0, 1.0),
            Sample::at_epoch(21.0, 50.0, 1.0),
        ];
        assert_eq!(
            average_excluding_extremes(pair.iter()),
            Err(AverageError::NoSamplesRemaining)
        );

        let empty: [Sample; 0] = [];
        assert_eq!(
            average_excluding_extremes(empty.iter()),
            Err(AverageError::NoSamplesRemaining)
        );
    }
}
