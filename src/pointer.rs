/*
 * Pointer Module
 *
 * This module tracks the last-known pointer position in surface
 * coordinates. The position is absent until the first move event and
 * is cleared again when the pointer leaves the window.
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    position: Option<Point2>,
}

impl PointerTracker {
    pub fn set(&mut self, position: Point2) {
        self.position = Some(position);
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Point2> {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_absent() {
        let pointer = PointerTracker::default();
        assert!(pointer.position().is_none());
    }

    #[test]
    fn set_then_clear() {
        let mut pointer = PointerTracker::default();
        pointer.set(pt2(10.0, 20.0));
        assert_eq!(pointer.position(), Some(pt2(10.0, 20.0)));
        pointer.clear();
        assert!(pointer.position().is_none());
    }

    #[test]
    fn origin_is_a_valid_position() {
        // (0, 0) must read back as present, not be conflated with "absent"
        let mut pointer = PointerTracker::default();
        pointer.set(pt2(0.0, 0.0));
        assert_eq!(pointer.position(), Some(pt2(0.0, 0.0)));
    }
}
