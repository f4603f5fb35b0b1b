//! Per-axis swept AABB movement and collision resolution.

use glam::Vec2;

use crate::core::rect::{Inset, Rect};
use crate::error::EngineError;
use crate::renderer::pixmap::{Pixmap, Rgba};

/// Which sides of a body collided during one `move_and_collide` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionSides {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl CollisionSides {
    pub fn any(&self) -> bool {
        self.left || self.right || self.top || self.bottom
    }
}

/// A movable collision box, inset from an entity's visual box.
///
/// The collision box starts at the entity's position and is shrunk by the
/// inset: width − (left + right), height − (top + bottom). Both shrunk
/// dimensions must stay positive.
#[derive(Debug, Clone)]
pub struct PhysicsBody {
    rect: Rect,
    inset: Inset,
}

impl PhysicsBody {
    /// Build a body from the visual box at (`x`, `y`) with `width`×`height`,
    /// shrunk by `inset`.
    pub fn new(x: f32, y: f32, width: f32, height: f32, inset: Inset) -> Result<Self, EngineError> {
        let w = width - inset.horizontal();
        let h = height - inset.vertical();
        if w <= 0.0 || h <= 0.0 {
            return Err(EngineError::InsetTooLarge {
                width: w,
                height: h,
            });
        }
        Ok(Self {
            rect: Rect::new(x, y, w, h),
            inset,
        })
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn inset(&self) -> Inset {
        self.inset
    }

    pub fn pos(&self) -> Vec2 {
        self.rect.pos()
    }

    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.rect.x = x;
        self.rect.y = y;
    }

    /// Indices of `candidates` currently overlapping the collision box.
    /// Overlap is inclusive: touching edges count.
    pub fn hits(&self, candidates: &[Rect]) -> Vec<usize> {
        candidates
            .iter()
            .enumerate()
            .filter(|(_, r)| self.rect.intersects(r))
            .map(|(i, _)| i)
            .collect()
    }

    /// Apply `movement` in two passes (full horizontal delta, then full
    /// vertical delta), resolving against `candidates` after each pass.
    ///
    /// The overlap set is computed once per pass against the moved box, then
    /// every overlapping candidate is processed in slice order and each
    /// overwrites the previous clamp: the last colliding candidate in list
    /// order wins for that axis. Callers depend on that ordering; do not
    /// replace it with nearest-obstacle resolution.
    ///
    /// A zero delta on an axis performs no resolution on that axis, even if
    /// the box already overlaps something (rest contact is not re-pushed).
    pub fn move_and_collide(&mut self, candidates: &[Rect], movement: Vec2) -> CollisionSides {
        let mut sides = CollisionSides::default();

        self.rect.x += movement.x;
        if movement.x != 0.0 {
            for idx in self.hits(candidates) {
                let other = &candidates[idx];
                if movement.x > 0.0 {
                    self.rect.set_right(other.left());
                    sides.right = true;
                } else {
                    self.rect.set_left(other.right());
                    sides.left = true;
                }
            }
        }

        self.rect.y += movement.y;
        if movement.y != 0.0 {
            for idx in self.hits(candidates) {
                let other = &candidates[idx];
                if movement.y > 0.0 {
                    self.rect.set_bottom(other.top());
                    sides.bottom = true;
                } else {
                    self.rect.set_top(other.bottom());
                    sides.top = true;
                }
            }
        }

        sides
    }

    /// Draw the collision outline. Diagnostic only; the registry calls this
    /// for entities with the debug flag set.
    pub fn debug_render(&self, screen: &mut Pixmap) {
        screen.outline_rect(self.rect, Rgba::RED);
    }
}
