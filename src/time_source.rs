//! Time source abstraction for real, fixed and simulated clocks.
//!
//! Every time-dependent command receives a [`TimeSource`] explicitly, so the
//! same code path serves the live clock, a demo instant given on the command
//! line, and fast-forwarded simulations in tests. There is no global clock.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration as ChronoDuration, FixedOffset, Local, NaiveDateTime, TimeZone, Utc};
use std::sync::Mutex;
use std::time::Duration as StdDuration;

/// Format accepted by [`parse_datetime`].
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Trait for abstracting time operations
pub trait TimeSource: Send + Sync {
    /// Get the current time on this source's clock
    fn now(&self) -> DateTime<FixedOffset>;

    /// Sleep for the specified duration (or simulate it)
    fn sleep(&self, duration: StdDuration);

    /// Check if this is a simulated time source
    fn is_simulated(&self) -> bool;

    /// Check if simulation has ended (always false for real time)
    fn is_ended(&self) -> bool {
        false
    }
}

/// System clock, on the local offset or a configured fixed one.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource {
    offset: Option<FixedOffset>,
}

impl RealTimeSource {
    /// Use the system's local offset at each call (follows DST changes).
    pub fn local() -> Self {
        Self { offset: None }
    }

    /// Always report time on `offset`.
    pub fn with_offset(offset: FixedOffset) -> Self {
        Self {
            offset: Some(offset),
        }
    }
}

impl TimeSource for RealTimeSource {
    fn now(&self) -> DateTime<FixedOffset> {
        match self.offset {
            Some(offset) => Utc::now().with_timezone(&offset),
            None => Local::now().fixed_offset(),
        }
    }

    fn sleep(&self, duration: StdDuration) {
        std::thread::sleep(duration);
    }

    fn is_simulated(&self) -> bool {
        false
    }
}

/// A clock stopped at one instant, used for demo evaluations.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimeSource {
    instant: DateTime<FixedOffset>,
}

impl FixedTimeSource {
    pub fn new(instant: DateTime<FixedOffset>) -> Self {
        Self { instant }
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> DateTime<FixedOffset> {
        self.instant
    }

    fn sleep(&self, _duration: StdDuration) {}

    fn is_simulated(&self) -> bool {
        true
    }
}

/// Fast-forward simulated clock.
///
/// `sleep` advances simulated time by exactly the requested duration without
/// blocking, capped at the end instant. Once the end is reached the source
/// reports [`TimeSource::is_ended`].
pub struct SimulatedTimeSource {
    end_time: DateTime<FixedOffset>,
    current: Mutex<DateTime<FixedOffset>>,
}

impl SimulatedTimeSource {
    /// Create a simulation running from `start_time` to `end_time`.
    pub fn new(start_time: DateTime<FixedOffset>, end_time: DateTime<FixedOffset>) -> Result<Self> {
        if end_time <= start_time {
            anyhow::bail!(
                "Simulation end ({}) must be after start ({})",
                end_time.format(DATETIME_FORMAT),
                start_time.format(DATETIME_FORMAT)
            );
        }
        Ok(Self {
            end_time,
            current: Mutex::new(start_time),
        })
    }

    pub fn end_time(&self) -> DateTime<FixedOffset> {
        self.end_time
    }

    fn current_time(&self) -> DateTime<FixedOffset> {
        *self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TimeSource for SimulatedTimeSource {
    fn now(&self) -> DateTime<FixedOffset> {
        self.current_time()
    }

    fn sleep(&self, duration: StdDuration) {
        let step = ChronoDuration::from_std(duration).unwrap_or(ChronoDuration::MAX);
        let mut current = self
            .current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let next = current
            .checked_add_signed(step)
            .unwrap_or(self.end_time);
        *current = next.min(self.end_time);
    }

    fn is_simulated(&self) -> bool {
        true
    }

    fn is_ended(&self) -> bool {
        self.current_time() >= self.end_time
    }
}

/// Parse a datetime string in the format "YYYY-MM-DD HH:MM:SS" on `offset`.
pub fn parse_datetime(s: &str, offset: FixedOffset) -> Result<DateTime<FixedOffset>> {
    let naive = NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT)
        .with_context(|| format!("Invalid datetime '{s}'. Use YYYY-MM-DD HH:MM:SS"))?;
    offset
        .from_local_datetime(&naive)
        .single()
        .with_context(|| format!("Invalid local time '{s}'"))
}

/// Parse "YYYY-MM-DD HH:MM:SS" on `offset`, or on the system's local offset
/// in effect at that moment when `offset` is `None`.
pub fn parse_datetime_in(s: &str, offset: Option<FixedOffset>) -> Result<DateTime<FixedOffset>> {
    match offset {
        Some(offset) => parse_datetime(s, offset),
        None => {
            let naive = NaiveDateTime::parse_from_str(s.trim(), DATETIME_FORMAT)
                .with_context(|| format!("Invalid datetime '{s}'. Use YYYY-MM-DD HH:MM:SS"))?;
            Local
                .from_local_datetime(&naive)
                .earliest()
                .map(|local| local.fixed_offset())
                .with_context(|| format!("'{s}' does not exist in the local timezone"))
        }
    }
}
