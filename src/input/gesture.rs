use crate::app::SwipeDirection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap { column: u16, row: u16 },
    Swipe(SwipeDirection),
}

/// Turns a left-button press/release pair into a tap or a horizontal swipe.
#[derive(Debug, Clone)]
pub struct DragTracker {
    origin: Option<(u16, u16)>,
    threshold: u16,
}

impl DragTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            origin: None,
            threshold: threshold.max(1),
        }
    }

    pub fn press(&mut self, column: u16, row: u16) {
        self.origin = Some((column, row));
    }

    pub fn release(&mut self, column: u16) -> Option<Gesture> {
        let (start_column, start_row) = self.origin.take()?;
        Some(classify(start_column, start_row, column, self.threshold))
    }

    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }
}

/// Only the sign of the horizontal displacement matters once it reaches
/// `threshold` columns.
pub fn classify(start_column: u16, start_row: u16, end_column: u16, threshold: u16) -> Gesture {
    let dx = i32::from(end_column) - i32::from(start_column);

    if dx != 0 && dx.unsigned_abs() >= u32::from(threshold) {
        if dx < 0 {
            Gesture::Swipe(SwipeDirection::Left)
        } else {
            Gesture::Swipe(SwipeDirection::Right)
        }
    } else {
        Gesture::Tap {
            column: start_column,
            row: start_row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_drag_is_a_tap_at_press_position() {
        let mut tracker = DragTracker::new(3);
        tracker.press(10, 4);

        assert_eq!(tracker.release(11), Some(Gesture::Tap { column: 10, row: 4 }));
    }

    #[test]
    fn drag_left_past_threshold_is_left_swipe() {
        let mut tracker = DragTracker::new(3);
        tracker.press(20, 4);

        assert_eq!(tracker.release(12), Some(Gesture::Swipe(SwipeDirection::Left)));
    }

    #[test]
    fn drag_right_past_threshold_is_right_swipe() {
        let mut tracker = DragTracker::new(3);
        tracker.press(5, 4);

        assert_eq!(tracker.release(8), Some(Gesture::Swipe(SwipeDirection::Right)));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut tracker = DragTracker::new(3);
        assert_eq!(tracker.release(8), None);
    }

    #[test]
    fn release_ends_the_drag() {
        let mut tracker = DragTracker::new(2);
        tracker.press(5, 4);
        assert!(tracker.is_dragging());

        tracker.release(5);
        assert!(!tracker.is_dragging());
        assert_eq!(tracker.release(20), None);
    }

    #[test]
    fn zero_threshold_still_lets_taps_through() {
        assert_eq!(classify(7, 2, 7, 0), Gesture::Tap { column: 7, row: 2 });
    }
}
