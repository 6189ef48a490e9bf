use heapless::Vec;

use crate::{config::CYCLE_SIZE, sample::Sample};

/// Samples of the current cycle. Iteration runs newest first.
#[derive(Debug, Default)]
pub struct SampleBuffer {
    samples: Vec<Sample, CYCLE_SIZE>,
}

impl SampleBuffer {
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Hands the sample back when the cycle is already full.
    pub fn push(&mut self, sample: Sample) -> Result<(), Sample> {
        self.samples.push(sample)
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_full(&self) -> bool {
        self.samples.len() == CYCLE_SIZE
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Sample> + Clone + '_ {
        self.samples.iter().rev()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }
}
