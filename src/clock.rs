use std::time::Instant;

/// Milliseconds since start, wrapping at `u32::MAX` like a microcontroller
/// `millis()` counter.
#[derive(Debug, Clone, Copy)]
pub struct Uptime {
    started: Instant,
}

impl Uptime {
    pub fn start() -> Uptime {
        Uptime {
            started: Instant::now(),
        }
    }

    pub fn millis(&self) -> u32 {
        // Truncation is the wraparound.
        self.started.elapsed().as_millis() as u32
    }
}

/// Time since `since`, correct across one wraparound of the counter.
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_without_wrap() {
        assert_eq!(elapsed_ms(5_000, 3_000), 2_000);
        assert_eq!(elapsed_ms(3_000, 3_000), 0);
    }

    #[test]
    fn test_elapsed_across_wrap() {
        assert_eq!(elapsed_ms(499, u32::MAX - 500), 1_000);
    }

    #[test]
    fn test_uptime_starts_near_zero() {
        let uptime = Uptime::start();
        assert!(uptime.millis() < 1_000);
    }
}
