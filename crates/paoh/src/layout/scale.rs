//! Axis scales used by the projector and the renderer.

use chrono::{Datelike, Months, TimeDelta};

use paoh_core::event::Timestamp;

use crate::layout::LayoutError;

/// Linear map from a time domain onto `[0, width]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    start: Timestamp,
    end: Timestamp,
    width: f32,
}

impl TimeScale {
    /// Creates a scale over `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DegenerateDomain`] unless `end` is after
    /// `start` and `width` is finite and positive.
    pub fn new(start: Timestamp, end: Timestamp, width: f32) -> Result<Self, LayoutError> {
        if end <= start {
            return Err(LayoutError::DegenerateDomain(format!(
                "time domain end {end} does not exceed its start {start}"
            )));
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(LayoutError::DegenerateDomain(format!(
                "time axis width {width} is not positive"
            )));
        }
        Ok(Self { start, end, width })
    }

    /// Creates a scale over `[first, last]` widened by `months` calendar
    /// months on each side.
    ///
    /// Month arithmetic clamps the day to the end of shorter months, so
    /// March 31 minus one month is February 28 or 29.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::DegenerateDomain`] if the padded domain is
    /// empty or not representable.
    pub fn padded(
        first: Timestamp,
        last: Timestamp,
        months: u32,
        width: f32,
    ) -> Result<Self, LayoutError> {
        let padding = Months::new(months);
        let out_of_range =
            || LayoutError::DegenerateDomain("padded time domain is out of range".to_string());

        let start = first.checked_sub_months(padding).ok_or_else(out_of_range)?;
        let end = last.checked_add_months(padding).ok_or_else(out_of_range)?;
        Self::new(start, end, width)
    }

    pub fn start(&self) -> Timestamp {
        self.start
    }

    pub fn end(&self) -> Timestamp {
        self.end
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    fn span(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Maps a date to its horizontal coordinate.
    ///
    /// Dates outside the domain map outside `[0, width]`.
    pub fn apply(&self, date: Timestamp) -> f32 {
        let offset = (date - self.start).num_milliseconds() as f64;
        let span = self.span().num_milliseconds() as f64;
        (offset / span * f64::from(self.width)) as f32
    }

    /// Returns the month starts inside the domain whose zero-based month
    /// index is a multiple of `every_months`.
    ///
    /// With `every_months = 3` these are the starts of January, April,
    /// July and October.
    pub fn ticks(&self, every_months: u32) -> Vec<Timestamp> {
        let mut ticks = Vec::new();
        if every_months == 0 {
            return ticks;
        }

        let Some(mut month) = self
            .start
            .date_naive()
            .with_day(1)
            .and_then(|day| day.and_hms_opt(0, 0, 0))
            .map(|day| day.and_utc())
        else {
            return ticks;
        };

        while month <= self.end {
            if month >= self.start && month.month0() % every_months == 0 {
                ticks.push(month);
            }
            match month.checked_add_months(Months::new(1)) {
                Some(next) => month = next,
                None => break,
            }
        }

        ticks
    }
}

/// Evenly spaced slots over `[0, extent]` with outer padding.
///
/// With padding `p`, `count` slots are placed `step` apart where
/// `step = extent / (count - 1 + 2p)`, and the first slot sits `p * step`
/// from the start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointScale {
    count: usize,
    extent: f32,
}

impl PointScale {
    /// Outer padding, in steps.
    const PADDING: f32 = 0.5;

    /// Creates a point scale with outer padding of half a step.
    pub fn new(count: usize, extent: f32) -> Self {
        Self { count, extent }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Distance between adjacent slots.
    pub fn step(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        let slots = (self.count as f32 - 1.0 + 2.0 * Self::PADDING).max(1.0);
        self.extent / slots
    }

    /// Coordinate of slot `index`.
    pub fn apply(&self, index: usize) -> f32 {
        let step = self.step();
        let used = step * self.count.saturating_sub(1) as f32;
        (self.extent - used) / 2.0 + step * index as f32
    }
}
