use crate::error::{self, Result};
use chrono::{Months, NaiveDate};
use serde::Serialize;

/// Inclusive date range attendance is aggregated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    start: NaiveDate,
    end: NaiveDate,
}

impl Window {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(error::INVALID_DATE_RANGE);
        }

        Ok(Self { start, end })
    }

    /// First to last day of `month`.
    pub fn month(year: i32, month: u32) -> Result<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1).ok_or(error::INVALID_DATE)?;
        let end = start
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .ok_or(error::INVALID_DATE)?;

        Ok(Self { start, end })
    }

    #[inline]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }
}

/// Minimum attendance percentage, always within `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Threshold(f64);

impl Threshold {
    pub const DEFAULT: Threshold = Threshold(70.0);

    pub fn new(value: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&value) {
            return Err(error::INVALID_THRESHOLD);
        }

        Ok(Self(value))
    }

    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_rejects_reversed_range() {
        assert_eq!(
            Window::new(date(2024, 2, 1), date(2024, 1, 31)),
            Err(error::INVALID_DATE_RANGE)
        );
    }

    #[test]
    fn single_day_window() {
        let window = Window::new(date(2024, 1, 1), date(2024, 1, 1)).unwrap();
        assert_eq!(window.start(), window.end());
    }

    #[test]
    fn month_window_covers_whole_month() {
        let window = Window::month(2024, 2).unwrap();
        assert_eq!(window.start(), date(2024, 2, 1));
        assert_eq!(window.end(), date(2024, 2, 29));

        let window = Window::month(2023, 2).unwrap();
        assert_eq!(window.end(), date(2023, 2, 28));

        let window = Window::month(2024, 12).unwrap();
        assert_eq!(window.end(), date(2024, 12, 31));
    }

    #[test]
    fn month_window_rejects_invalid_month() {
        assert_eq!(Window::month(2024, 0), Err(error::INVALID_DATE));
        assert_eq!(Window::month(2024, 13), Err(error::INVALID_DATE));
    }

    #[test]
    fn threshold_range() {
        assert_eq!(Threshold::new(0.0).map(Threshold::value), Ok(0.0));
        assert_eq!(Threshold::new(100.0).map(Threshold::value), Ok(100.0));
        assert_eq!(Threshold::new(-0.5), Err(error::INVALID_THRESHOLD));
        assert_eq!(Threshold::new(100.5), Err(error::INVALID_THRESHOLD));
        assert_eq!(Threshold::new(f64::NAN), Err(error::INVALID_THRESHOLD));
        assert_eq!(Threshold::default().value(), 70.0);
    }
}
