//! Polymorphic game entities.
//!
//! An entity is a trait object over [`Entity`], carrying an [`EntityCore`]
//! with the shared plumbing: tag, physics body, intended velocity, visual
//! rect, optional texture. Concrete entities override the hooks they need;
//! the defaults give tag-excluded collision movement and a flat-color or
//! textured draw.

use glam::Vec2;

use crate::api::game::EngineContext;
use crate::core::physics::{CollisionSides, PhysicsBody};
use crate::core::rect::{Inset, Rect};
use crate::error::EngineError;
use crate::input::queue::InputEvent;
use crate::renderer::pixmap::{Pixmap, Rgba};

/// Shared per-entity state.
#[derive(Debug, Clone)]
pub struct EntityCore {
    /// Role/type key used for collision-group exclusion and lookup.
    /// Conventionally unique per role; the registry does not enforce it.
    pub tag: String,
    pub physics: PhysicsBody,
    /// Intended movement for this frame, set by concrete-entity logic
    /// before the generic move step runs. Applied as-is; concrete entities
    /// dt-scale it themselves.
    pub vel: Vec2,
    pub speed: f32,
    /// Draw the collision outline on top of the normal render.
    pub debug: bool,
    pub texture: Option<Pixmap>,
    /// Visual rect: the physics box pushed back out by the left/top inset,
    /// at full visual dimensions. Recomputed every frame after movement.
    pub rect: Rect,
    /// dt of the most recent frame, stored by `default_update`.
    pub last_dt: f32,
    width: f32,
    height: f32,
}

impl EntityCore {
    pub fn new(
        tag: impl Into<String>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        inset: Inset,
    ) -> Result<Self, EngineError> {
        let physics = PhysicsBody::new(x, y, width, height, inset)?;
        Ok(Self {
            tag: tag.into(),
            rect: Rect::new(x - inset.left, y - inset.top, width, height),
            physics,
            vel: Vec2::ZERO,
            speed: 2.0,
            debug: false,
            texture: None,
            last_dt: 0.0,
            width,
            height,
        })
    }

    // -- Builder pattern --

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_texture(mut self, texture: Pixmap) -> Self {
        self.texture = Some(texture);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Teleport the collision box; the visual rect catches up on the next
    /// `default_update`.
    pub fn set_pos(&mut self, x: f32, y: f32) {
        self.physics.set_pos(x, y);
    }

    /// Re-derive the visual rect from the resolved physics box and store
    /// the frame's dt. Runs for every entity every frame, after the
    /// entity's own update, regardless of what that update did.
    pub fn default_update(&mut self, dt: f32) {
        let inset = self.physics.inset();
        let pos = self.physics.pos();
        self.rect = Rect::new(pos.x - inset.left, pos.y - inset.top, self.width, self.height);
        self.last_dt = dt;
    }
}

/// The entity capability set. `core`/`core_mut` are the only required
/// methods; everything else has a default.
pub trait Entity {
    fn core(&self) -> &EntityCore;
    fn core_mut(&mut self) -> &mut EntityCore;

    /// React to one input event. Default: ignore.
    fn check_events(&mut self, _event: &InputEvent, _ctx: &mut EngineContext) {}

    /// Per-frame behavior. `solids` is every other entity's collision rect
    /// (tag-excluded, registry order). The default resolves the current
    /// velocity through the physics body.
    fn update(&mut self, _dt: f32, solids: &[Rect]) -> CollisionSides {
        let vel = self.core().vel;
        self.core_mut().physics.move_and_collide(solids, vel)
    }

    /// Draw the entity. Default: texture at the visual rect, or a flat
    /// placeholder fill when no texture is set.
    fn render(&mut self, screen: &mut Pixmap) {
        let core = self.core();
        match &core.texture {
            Some(texture) => screen.blit(texture, core.rect.x as i32, core.rect.y as i32),
            None => screen.fill_rect(core.rect, Rgba::GREEN),
        }
    }
}
