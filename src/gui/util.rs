//! Small pure helper functions used by the GUI.
//! - no UI widgets or state mutation

use super::state::TimeMode;

/// "m:ss" for the modern surface labels.
pub(crate) fn fmt_seconds(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Sign + minutes + seconds for the skinned time display. The minus sign is
/// only shown in remaining mode with a known duration.
pub(crate) fn time_parts(position: f64, duration: f64, mode: TimeMode) -> (bool, u64, u64) {
    let shown = match mode {
        TimeMode::Elapsed => position.max(0.0),
        TimeMode::Remaining => (duration - position).max(0.0),
    };

    let total = shown as u64;
    let negative = mode == TimeMode::Remaining && duration > 0.0;
    (negative, total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_seconds_pads_the_seconds_field() {
        assert_eq!(fmt_seconds(0.0), "0:00");
        assert_eq!(fmt_seconds(125.7), "2:05");
        assert_eq!(fmt_seconds(-3.0), "0:00");
    }

    #[test]
    fn time_parts_elapsed_shows_the_position() {
        assert_eq!(time_parts(95.0, 200.0, TimeMode::Elapsed), (false, 1, 35));
    }

    #[test]
    fn time_parts_remaining_counts_down_with_a_minus_sign() {
        assert_eq!(time_parts(95.0, 200.0, TimeMode::Remaining), (true, 1, 45));
    }

    #[test]
    fn remaining_without_a_duration_has_no_minus_sign() {
        assert_eq!(time_parts(0.0, 0.0, TimeMode::Remaining), (false, 0, 0));
    }
}
