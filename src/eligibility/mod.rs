//! Attendance aggregation and exam eligibility.
//!
//! [`summarize`] is the only place the percentage and the verdict are computed. Everything else
//! in the crate (route handlers, batch recalculation, commands) goes through it, either directly
//! or via [`EligibilityCalculator`].

pub mod batch;
mod calculator;
mod window;

pub use calculator::*;
pub use window::*;

use entity::attendance::Status;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub total_classes: i64,
    pub attended_classes: i64,
    pub attendance_percentage: f64,
    pub is_eligible: bool,
}

impl AttendanceSummary {
    #[inline]
    pub fn absent_classes(&self) -> i64 {
        self.total_classes - self.attended_classes
    }
}

/// Counts `statuses` and compares the attendance percentage against `threshold`.
///
/// No classes means 0%, which is only eligible against a threshold of 0. A percentage exactly at
/// the threshold is eligible.
pub fn summarize<I>(statuses: I, threshold: Threshold) -> AttendanceSummary
where
    I: IntoIterator<Item = Status>,
{
    let (total_classes, attended_classes) =
        statuses
            .into_iter()
            .fold((0i64, 0i64), |(total, attended), status| match status {
                Status::Present => (total + 1, attended + 1),
                Status::Absent => (total + 1, attended),
            });

    let attendance_percentage = if total_classes > 0 {
        attended_classes as f64 / total_classes as f64 * 100.0
    } else {
        0.0
    };

    AttendanceSummary {
        total_classes,
        attended_classes,
        attendance_percentage,
        is_eligible: attendance_percentage >= threshold.value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Status::{Absent, Present};

    fn threshold(value: f64) -> Threshold {
        Threshold::new(value).unwrap()
    }

    #[test]
    fn three_out_of_four() {
        let records = [Present, Present, Absent, Present];

        let summary = summarize(records, threshold(70.0));
        assert_eq!(summary.total_classes, 4);
        assert_eq!(summary.attended_classes, 3);
        assert_eq!(summary.absent_classes(), 1);
        assert_eq!(summary.attendance_percentage, 75.0);
        assert!(summary.is_eligible);

        let summary = summarize(records, threshold(80.0));
        assert_eq!(summary.attendance_percentage, 75.0);
        assert!(!summary.is_eligible);
    }

    #[test]
    fn no_records() {
        let summary = summarize([], threshold(70.0));
        assert_eq!(
            summary,
            AttendanceSummary {
                total_classes: 0,
                attended_classes: 0,
                attendance_percentage: 0.0,
                is_eligible: false,
            }
        );

        assert!(summarize([], threshold(0.0)).is_eligible);
    }

    #[test]
    fn exactly_at_threshold_is_eligible() {
        let summary = summarize([Present, Absent], threshold(50.0));
        assert_eq!(summary.attendance_percentage, 50.0);
        assert!(summary.is_eligible);

        assert!(summarize([Present, Present], threshold(100.0)).is_eligible);
    }

    #[test]
    fn percentage_stays_in_range() {
        assert_eq!(summarize([Absent; 7], threshold(0.0)).attendance_percentage, 0.0);
        assert_eq!(
            summarize([Present; 7], threshold(0.0)).attendance_percentage,
            100.0
        );

        let summary = summarize([Present, Absent, Absent], threshold(0.0));
        assert!((0.0..=100.0).contains(&summary.attendance_percentage));
        assert!((summary.attendance_percentage - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = summarize([Present], threshold(70.0));
        let json = serde_json::to_value(summary).unwrap();

        assert_eq!(json["totalClasses"], 1);
        assert_eq!(json["attendedClasses"], 1);
        assert_eq!(json["attendancePercentage"], 100.0);
        assert_eq!(json["isEligible"], true);
    }
}
