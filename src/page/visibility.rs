// Intersection math for reveal animations
//
// The reveal lifecycle needs to know how much of a section sits inside the
// viewport. Keeping this as a pure function keeps the reveal policy testable
// without a terminal.

/// Fraction of a section's row span that lies inside the viewport.
///
/// The viewport covers `[scroll_y, scroll_y + viewport_height)` and the
/// section covers `[top, top + height)`. Returns a value in `0.0..=1.0`;
/// a zero-height section reports 0.0 rather than dividing by zero.
pub fn visibility_ratio(top: usize, height: usize, scroll_y: usize, viewport_height: usize) -> f64 {
    if height == 0 || viewport_height == 0 {
        return 0.0;
    }

    let section_end = top + height;
    let view_end = scroll_y + viewport_height;

    let overlap_start = top.max(scroll_y);
    let overlap_end = section_end.min(view_end);

    if overlap_end <= overlap_start {
        return 0.0;
    }

    (overlap_end - overlap_start) as f64 / height as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_inside_viewport() {
        // Section [10, 20) inside viewport [0, 40)
        assert_eq!(visibility_ratio(10, 10, 0, 40), 1.0);
    }

    #[test]
    fn fully_outside_viewport() {
        // Section below the viewport
        assert_eq!(visibility_ratio(100, 20, 0, 40), 0.0);
        // Section above the viewport
        assert_eq!(visibility_ratio(0, 20, 50, 40), 0.0);
    }

    #[test]
    fn partial_overlap_from_below() {
        // Section [30, 50), viewport [0, 40): 10 of 20 rows visible
        assert_eq!(visibility_ratio(30, 20, 0, 40), 0.5);
    }

    #[test]
    fn partial_overlap_from_above() {
        // Section [0, 20), viewport [15, 55): 5 of 20 rows visible
        assert_eq!(visibility_ratio(0, 20, 15, 40), 0.25);
    }

    #[test]
    fn adjacent_sections_do_not_overlap() {
        // Section ends exactly where the viewport starts
        assert_eq!(visibility_ratio(0, 40, 40, 40), 0.0);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(visibility_ratio(0, 0, 0, 40), 0.0);
        assert_eq!(visibility_ratio(0, 40, 0, 0), 0.0);
    }

    #[test]
    fn crosses_reveal_threshold_at_thirty_percent() {
        // 12 of 40 rows visible = 0.3 exactly
        let ratio = visibility_ratio(28, 40, 0, 40);
        assert!((ratio - 0.3).abs() < 1e-9);
    }
}
