//! Latency Window Module
//!
//! Fixed-capacity FIFO of recent response times.

use std::collections::VecDeque;

/// Number of samples kept for the rolling average.
pub const LATENCY_WINDOW_SIZE: usize = 100;

// == Latency Window ==
/// Keeps the most recent samples, discarding the oldest once full.
#[derive(Debug, Clone)]
pub struct LatencyWindow {
    samples: VecDeque<u64>,
    capacity: usize,
    /// Running sum of `samples`, wide enough for a full window of `u64::MAX`
    sum: u128,
}

impl LatencyWindow {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            sum: 0,
        }
    }

    // == Push ==
    /// Appends a sample, dropping the oldest when over capacity.
    pub fn push(&mut self, sample_ms: u64) {
        self.samples.push_back(sample_ms);
        self.sum += u128::from(sample_ms);
        if self.samples.len() > self.capacity {
            if let Some(oldest) = self.samples.pop_front() {
                self.sum -= u128::from(oldest);
            }
        }
    }

    // == Average ==
    /// Rounded mean of the retained samples, 0 when empty.
    pub fn average(&self) -> u64 {
        if self.samples.is_empty() {
            return 0;
        }
        (self.sum as f64 / self.samples.len() as f64).round() as u64
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.sum = 0;
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl Default for LatencyWindow {
    fn default() -> Self {
        Self::new(LATENCY_WINDOW_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_average_is_zero() {
        let window = LatencyWindow::default();
        assert!(window.is_empty());
        assert_eq!(window.average(), 0);
    }

    #[test]
    fn test_average_rounds() {
        let mut window = LatencyWindow::default();
        window.push(1);
        window.push(2);
        // 1.5 rounds half away from zero
        assert_eq!(window.average(), 2);

        window.push(2);
        // 5 / 3 = 1.67
        assert_eq!(window.average(), 2);
    }

    #[test]
    fn test_oldest_sample_dropped() {
        let mut window = LatencyWindow::new(3);
        window.push(1_000);
        window.push(10);
        window.push(20);
        window.push(30);

        assert_eq!(window.len(), 3);
        assert_eq!(window.average(), 20);
    }

    #[test]
    fn test_extreme_samples_do_not_overflow() {
        let mut window = LatencyWindow::new(3);
        window.push(u64::MAX);
        window.push(u64::MAX);
        assert_eq!(window.average(), u64::MAX);

        window.push(0);
        window.push(0);
        window.push(0);
        assert_eq!(window.average(), 0);
    }

    #[test]
    fn test_clear() {
        let mut window = LatencyWindow::new(3);
        window.push(5);
        window.clear();
        assert_eq!(window.len(), 0);
        assert_eq!(window.average(), 0);
    }
}
