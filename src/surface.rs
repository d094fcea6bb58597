/*
 * Surface Module
 *
 * This module defines the drawable surface bounds and the coordinate
 * transforms between surface space and screen space.
 *
 * The simulation runs in surface coordinates: origin at the top-left
 * corner, x growing right, y growing down, matching the coordinates
 * delivered by pointer events. nannou draws with a centered origin and
 * y growing up, so positions are converted at the render boundary.
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    // Convert a surface-space position to nannou screen space
    pub fn to_screen(&self, p: Point2) -> Point2 {
        pt2(p.x - self.width / 2.0, self.height / 2.0 - p.y)
    }

    // Convert a nannou screen-space position to surface space
    pub fn from_screen(&self, p: Point2) -> Point2 {
        pt2(p.x + self.width / 2.0, self.height / 2.0 - p.y)
    }

    pub fn contains(&self, p: Point2) -> bool {
        p.x >= 0.0 && p.x <= self.width && p.y >= 0.0 && p.y <= self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transforms_round_trip() {
        let surface = Surface::new(800.0, 600.0);
        let p = pt2(123.0, 456.0);
        let back = surface.from_screen(surface.to_screen(p));
        assert!((back.x - p.x).abs() < f32::EPSILON);
        assert!((back.y - p.y).abs() < f32::EPSILON);
    }

    #[test]
    fn surface_origin_maps_to_top_left() {
        let surface = Surface::new(800.0, 600.0);
        let screen = surface.to_screen(pt2(0.0, 0.0));
        assert_eq!(screen, pt2(-400.0, 300.0));
    }

    #[test]
    fn contains_is_inclusive_of_edges() {
        let surface = Surface::new(800.0, 600.0);
        assert!(surface.contains(pt2(0.0, 0.0)));
        assert!(surface.contains(pt2(800.0, 600.0)));
        assert!(!surface.contains(pt2(-0.1, 10.0)));
        assert!(!surface.contains(pt2(10.0, 600.1)));
    }
}
