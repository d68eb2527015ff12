/// Collision helpers shared by the simulation.

use crate::entities::Rect;

/// Axis-aligned overlap test. Rectangles that only touch along an edge do
/// not collide; all four comparisons use the same exclusive-edge rule.
pub fn rect_rect_collision(a: &Rect, b: &Rect) -> bool {
    a.left() < b.right() && b.left() < a.right() && a.top() < b.bottom() && b.top() < a.bottom()
}

/// True when the squared centre distance is strictly below the squared sum
/// of radii. Tangent circles do not collide.
pub fn circle_circle_collision(x1: f32, y1: f32, r1: f32, x2: f32, y2: f32, r2: f32) -> bool {
    let dx = x1 - x2;
    let dy = y1 - y2;
    let radius_sum = r1 + r2;
    dx * dx + dy * dy < radius_sum * radius_sum
}

/// Something that can answer per-pixel opacity queries.
pub trait PixelMask {
    fn size(&self) -> (i32, i32);
    fn is_opaque(&self, x: i32, y: i32) -> bool;
}

/// A plain rectangle is opaque everywhere inside its bounds.
impl PixelMask for Rect {
    fn size(&self) -> (i32, i32) {
        (self.w, self.h)
    }

    fn is_opaque(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.w && y < self.h
    }
}

/// Per-pixel collision is not implemented: this always reports no
/// collision. `offset_x`/`offset_y` are the position of `b` relative to `a`.
pub fn pixel_perfect_collision<A: PixelMask, B: PixelMask>(
    _a: &A,
    _b: &B,
    _offset_x: i32,
    _offset_y: i32,
) -> bool {
    false
}
