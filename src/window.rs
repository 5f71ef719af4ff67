//! Fixed-capacity history of compensated samples.
//!
//! A [`SampleWindow`] keeps the last `N` samples pushed into it, dropping the oldest one when
//! a new sample arrives and the window is full. With samples pushed at a steady rate the
//! window covers a moving time interval of fixed length.
//!
//! High, low and average for both channels are computed in one pass when first asked for and
//! cached until the next mutation.
//!
//! ```rust
//! use bmp280_rs::sample::CompensatedSample;
//! use bmp280_rs::window::SampleWindow;
//! use embassy_time::Instant;
//!
//! let mut window: SampleWindow<3> = SampleWindow::new();
//! for (i, (t, p)) in [(1800, 99000), (1900, 99500), (2000, 100000), (2100, 100500)].into_iter().enumerate() {
//!     window.push(CompensatedSample::new(Instant::from_ticks(i as u64), t, p));
//! }
//!
//! let summary = window.temperature_summary().unwrap();
//! assert_eq!(3, summary.sample_count);
//! assert_eq!(2100, summary.high);
//! assert_eq!(1900, summary.low);
//! assert_eq!(2000.0, summary.average);
//! ```

use crate::error::WindowError;
use crate::sample::CompensatedSample;
use embassy_time::Instant;
use heapless::Deque;

/// Summary of one channel over the samples currently in a window.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Summary<T> {
    /// Timestamp of the oldest sample
    pub time_start: Instant,
    /// Timestamp of the newest sample
    pub time_stop: Instant,
    pub sample_count: usize,
    pub high: T,
    pub low: T,
    pub average: f64,
}

/// Cached statistics for both channels.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowStats {
    pub temperature_high: i32,
    pub temperature_low: i32,
    pub temperature_average: f64,
    pub pressure_high: u32,
    pub pressure_low: u32,
    pub pressure_average: f64,
}

/// FIFO of at most `N` samples, oldest at the front.
///
/// `N` must be at least 1; a zero capacity is rejected at compile time.
pub struct SampleWindow<const N: usize> {
    samples: Deque<CompensatedSample, N>,
    // None while stale
    stats: Option<WindowStats>,
}

impl<const N: usize> Default for SampleWindow<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> SampleWindow<N> {
    const NON_ZERO_CAPACITY: () = assert!(N >= 1, "a SampleWindow needs room for at least one sample");

    pub fn new() -> Self {
        let () = Self::NON_ZERO_CAPACITY;

        Self {
            samples: Deque::new(),
            stats: None,
        }
    }

    /// Appends a sample at the back, evicting the oldest sample if the window is full.
    ///
    /// Returns the number of samples in the window afterwards.
    pub fn push(&mut self, sample: CompensatedSample) -> usize {
        if self.samples.is_full() {
            self.samples.pop_front();
        }
        // a slot is free at this point
        let _ = self.samples.push_back(sample);
        self.stats = None;

        self.samples.len()
    }

    /// Removes and returns the oldest sample.
    pub fn pop(&mut self) -> Result<CompensatedSample, WindowError> {
        let sample = self.samples.pop_front().ok_or(WindowError::EmptyCollection)?;
        self.stats = None;

        Ok(sample)
    }

    /// The oldest sample.
    pub fn front(&self) -> Result<&CompensatedSample, WindowError> {
        self.samples.front().ok_or(WindowError::EmptyCollection)
    }

    /// The newest sample.
    pub fn back(&self) -> Result<&CompensatedSample, WindowError> {
        self.samples.back().ok_or(WindowError::EmptyCollection)
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.stats = None;
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.samples.is_full()
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Iterates from the oldest to the newest sample.
    pub fn iter(&self) -> impl Iterator<Item = &CompensatedSample> {
        self.samples.iter()
    }

    pub fn time_start(&self) -> Result<Instant, WindowError> {
        Ok(self.front()?.timestamp)
    }

    pub fn time_stop(&self) -> Result<Instant, WindowError> {
        Ok(self.back()?.timestamp)
    }

    /// Recomputes high, low and average of both channels in one pass and caches the result.
    pub fn summarize(&mut self) -> Result<WindowStats, WindowError> {
        let first = self.front()?;

        let mut stats = WindowStats {
            temperature_high: first.temperature,
            temperature_low: first.temperature,
            temperature_average: 0.0,
            pressure_high: first.pressure,
            pressure_low: first.pressure,
            pressure_average: 0.0,
        };
        let mut temperature_sum: i64 = 0;
        let mut pressure_sum: u64 = 0;

        for sample in self.samples.iter() {
            stats.temperature_high = stats.temperature_high.max(sample.temperature);
            stats.temperature_low = stats.temperature_low.min(sample.temperature);
            temperature_sum += sample.temperature as i64;

            stats.pressure_high = stats.pressure_high.max(sample.pressure);
            stats.pressure_low = stats.pressure_low.min(sample.pressure);
            pressure_sum += sample.pressure as u64;
        }

        let count = self.samples.len() as f64;
        stats.temperature_average = temperature_sum as f64 / count;
        stats.pressure_average = pressure_sum as f64 / count;

        self.stats = Some(stats);
        trace!("window summarized over {} samples", self.samples.len());

        Ok(stats)
    }

    /// Cached statistics, recomputed first if the window changed since the last call.
    pub fn stats(&mut self) -> Result<WindowStats, WindowError> {
        match self.stats {
            Some(stats) => Ok(stats),
            None => self.summarize(),
        }
    }

    pub fn temperature_summary(&mut self) -> Result<Summary<i32>, WindowError> {
        let stats = self.stats()?;

        Ok(Summary {
            time_start: self.time_start()?,
            time_stop: self.time_stop()?,
            sample_count: self.samples.len(),
            high: stats.temperature_high,
            low: stats.temperature_low,
            average: stats.temperature_average,
        })
    }

    pub fn pressure_summary(&mut self) -> Result<Summary<u32>, WindowError> {
        let stats = self.stats()?;

        Ok(Summary {
            time_start: self.time_start()?,
            time_stop: self.time_stop()?,
            sample_count: self.samples.len(),
            high: stats.pressure_high,
            low: stats.pressure_low,
            average: stats.pressure_average,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(tick: u64, temperature: i32, pressure: u32) -> CompensatedSample {
        CompensatedSample::new(Instant::from_ticks(tick), temperature, pressure)
    }

    #[test]
    fn push_beyond_capacity_keeps_last_n_in_order() {
        let mut window: SampleWindow<4> = SampleWindow::new();

        for i in 0..10u64 {
            let size = window.push(sample(i, i as i32, i as u32));
            assert_eq!(core::cmp::min(i as usize + 1, 4), size);
        }

        assert_eq!(4, window.len());
        assert!(window.is_full());
        let ticks: Vec<u64> = window.iter().map(|s| s.timestamp.as_ticks()).collect();
        assert_eq!(vec![6, 7, 8, 9], ticks);
    }

    #[test]
    fn capacity_one_holds_only_newest() {
        let mut window: SampleWindow<1> = SampleWindow::new();
        assert_eq!(1, window.capacity());

        window.push(sample(1, 100, 1000));
        window.push(sample(2, 200, 2000));

        assert_eq!(1, window.len());
        assert_eq!(200, window.front().unwrap().temperature);
        assert_eq!(window.front(), window.back());
    }

    #[test]
    fn pop_returns_oldest_first() {
        let mut window: SampleWindow<3> = SampleWindow::new();
        window.push(sample(1, 10, 100));
        window.push(sample(2, 20, 200));

        assert_eq!(10, window.pop().unwrap().temperature);
        assert_eq!(20, window.pop().unwrap().temperature);
        assert_eq!(Err(WindowError::EmptyCollection), window.pop());
    }

    #[test]
    fn empty_window_access_fails() {
        let mut window: SampleWindow<3> = SampleWindow::default();

        assert!(window.is_empty());
        assert_eq!(Err(WindowError::EmptyCollection), window.front());
        assert_eq!(Err(WindowError::EmptyCollection), window.back());
        assert_eq!(Err(WindowError::EmptyCollection), window.pop());
        assert_eq!(Err(WindowError::EmptyCollection), window.time_start());
        assert_eq!(Err(WindowError::EmptyCollection), window.time_stop());
        assert_eq!(Err(WindowError::EmptyCollection), window.summarize());
        assert_eq!(Err(WindowError::EmptyCollection), window.temperature_summary());
        assert_eq!(Err(WindowError::EmptyCollection), window.pressure_summary());
    }

    #[test]
    fn clear_empties_window() {
        let mut window: SampleWindow<3> = SampleWindow::new();
        window.push(sample(1, 10, 100));
        window.temperature_summary().unwrap();

        window.clear();

        assert!(window.is_empty());
        assert!(window.stats.is_none());
        assert_eq!(Err(WindowError::EmptyCollection), window.temperature_summary());
    }

    #[test]
    fn summary_matches_max_min_mean() {
        let data = [(-250, 98000), (1234, 101325), (2999, 99999), (-1, 100001), (700, 97500)];
        let mut window: SampleWindow<8> = SampleWindow::new();
        for (i, (t, p)) in data.iter().enumerate() {
            window.push(sample(i as u64 * 10, *t, *p));
        }

        let temperature = window.temperature_summary().unwrap();
        assert_eq!(2999, temperature.high);
        assert_eq!(-250, temperature.low);
        assert_eq!((-250 + 1234 + 2999 - 1 + 700) as f64 / 5.0, temperature.average);
        assert_eq!(5, temperature.sample_count);
        assert_eq!(Instant::from_ticks(0), temperature.time_start);
        assert_eq!(Instant::from_ticks(40), temperature.time_stop);

        let pressure = window.pressure_summary().unwrap();
        assert_eq!(101325, pressure.high);
        assert_eq!(97500, pressure.low);
        assert_eq!((98000 + 101325 + 99999 + 100001 + 97500) as f64 / 5.0, pressure.average);
    }

    #[test]
    fn pressure_sum_does_not_overflow() {
        let mut window: SampleWindow<4> = SampleWindow::new();
        for i in 0..4 {
            window.push(sample(i, 0, u32::MAX));
        }

        assert_eq!(u32::MAX as f64, window.pressure_summary().unwrap().average);
    }

    #[test]
    fn mutations_invalidate_cache() {
        let mut window: SampleWindow<3> = SampleWindow::new();
        window.push(sample(1, 100, 1000));
        assert_eq!(100, window.temperature_summary().unwrap().high);
        assert!(window.stats.is_some());

        window.push(sample(2, 300, 3000));
        assert!(window.stats.is_none());
        assert_eq!(300, window.temperature_summary().unwrap().high);
        assert_eq!(200.0, window.temperature_summary().unwrap().average);

        window.pop().unwrap();
        assert!(window.stats.is_none());
        assert_eq!(300, window.temperature_summary().unwrap().low);

        window.clear();
        assert!(window.stats.is_none());
    }

    #[test]
    fn consecutive_reads_are_identical() {
        let mut window: SampleWindow<5> = SampleWindow::new();
        window.push(sample(1, 2501, 100001));
        window.push(sample(2, 2502, 100003));
        window.push(sample(3, 2504, 100004));

        let first = window.stats().unwrap();
        let second = window.stats().unwrap();
        assert_eq!(first.temperature_average.to_bits(), second.temperature_average.to_bits());
        assert_eq!(first.pressure_average.to_bits(), second.pressure_average.to_bits());
        assert_eq!(first, second);
        assert_eq!(window.pressure_summary().unwrap(), window.pressure_summary().unwrap());
    }

    #[test]
    fn four_pushes_into_three_slots() {
        let mut window: SampleWindow<3> = SampleWindow::new();
        let readings = [(1800, 99000), (1900, 99500), (2000, 100000), (2100, 100500)];
        for (i, (t, p)) in readings.into_iter().enumerate() {
            window.push(sample(i as u64, t, p));
        }

        assert_eq!(3, window.len());
        let held: Vec<(i32, u32)> = window.iter().map(|s| (s.temperature, s.pressure)).collect();
        assert_eq!(vec![(1900, 99500), (2000, 100000), (2100, 100500)], held);

        let temperature = window.temperature_summary().unwrap();
        assert_eq!((2100, 1900, 2000.0), (temperature.high, temperature.low, temperature.average));

        let pressure = window.pressure_summary().unwrap();
        assert_eq!((100500, 99500, 100000.0), (pressure.high, pressure.low, pressure.average));
        assert_eq!(Instant::from_ticks(1), pressure.time_start);
        assert_eq!(Instant::from_ticks(3), pressure.time_stop);
    }
}
