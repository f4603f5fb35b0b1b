use glam::Vec2;

/// Axis-aligned rectangle in pixel units.
///
/// Width and height are expected to be positive. Overlap is inclusive:
/// two rects whose edges merely touch count as overlapping. Collision
/// resolution in [`crate::core::physics::PhysicsBody`] relies on this
/// boundary, and the tests below pin it numerically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Move the rect so its left edge sits at `x`.
    pub fn set_left(&mut self, x: f32) {
        self.x = x;
    }

    /// Move the rect so its right edge sits at `x`.
    pub fn set_right(&mut self, x: f32) {
        self.x = x - self.w;
    }

    /// Move the rect so its top edge sits at `y`.
    pub fn set_top(&mut self, y: f32) {
        self.y = y;
    }

    /// Move the rect so its bottom edge sits at `y`.
    pub fn set_bottom(&mut self, y: f32) {
        self.y = y - self.h;
    }

    /// Inclusive point containment (edges count).
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Inclusive overlap test: touching edges overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }
}

/// Per-side margin shrinking a visual box down to its collision box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Inset {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Inset {
    pub const ZERO: Inset = Inset {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Uniform margin on all four sides.
    pub fn splat(margin: f32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Total horizontal shrink applied to a visual width.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical shrink applied to a visual height.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_setters_translate() {
        let mut r = Rect::new(0.0, 0.0, 10.0, 10.0);
        r.set_right(10.0);
        assert_eq!(r.x, 0.0);
        r.set_left(5.0);
        assert_eq!(r.right(), 15.0);
        r.set_bottom(10.0);
        assert_eq!(r.y, 0.0);
        r.set_top(3.0);
        assert_eq!(r.bottom(), 13.0);
    }

    #[test]
    fn touching_edges_overlap() {
        // The inclusive boundary, pinned: right edge at 10 touches left edge at 10.
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn separated_rects_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.1, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = Rect::new(0.0, 20.0, 10.0, 10.0);
        assert!(!a.intersects(&c));
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(5.0, 5.0, 10.0, 10.0)),
            (Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(10.0, 10.0, 4.0, 4.0)),
            (Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(30.0, 0.0, 4.0, 4.0)),
            (Rect::new(-5.0, -5.0, 3.0, 3.0), Rect::new(-4.0, -4.0, 1.0, 1.0)),
        ];
        for (a, b) in cases {
            assert_eq!(a.intersects(&b), b.intersects(&a), "{a:?} vs {b:?}");
        }
    }

    #[test]
    fn contains_is_inclusive() {
        let r = Rect::new(2.0, 2.0, 4.0, 4.0);
        assert!(r.contains(Vec2::new(2.0, 2.0)));
        assert!(r.contains(Vec2::new(6.0, 6.0)));
        assert!(!r.contains(Vec2::new(6.1, 6.0)));
    }

    #[test]
    fn inset_totals() {
        let i = Inset::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(i.horizontal(), 4.0);
        assert_eq!(i.vertical(), 6.0);
        assert_eq!(Inset::splat(2.0).horizontal(), 4.0);
    }
}
