//! Ordered storage and per-frame dispatch for entities.

use crate::api::game::EngineContext;
use crate::core::entity::Entity;
use crate::core::rect::Rect;
use crate::input::queue::InputEvent;
use crate::renderer::pixmap::Pixmap;

/// The set of live entities.
///
/// Insertion order is iteration order is render order (back to front).
/// Uniqueness of tags is caller discipline; duplicates are legal and mean
/// "same collision group".
#[derive(Default)]
pub struct EntityRegistry {
    entities: Vec<Box<dyn Entity>>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self {
            entities: Vec::new(),
        }
    }

    pub fn add(&mut self, entity: Box<dyn Entity>) {
        self.entities.push(entity);
    }

    /// Remove the first entity with `tag`, preserving the order of the rest.
    /// `None` if no entity carries the tag.
    pub fn remove_by_tag(&mut self, tag: &str) -> Option<Box<dyn Entity>> {
        let idx = self.entities.iter().position(|e| e.core().tag == tag)?;
        Some(self.entities.remove(idx))
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Box<dyn Entity>> {
        self.entities.iter()
    }

    /// First entity with `tag` in iteration order. `None` is the explicit
    /// not-found signal; callers must check.
    pub fn get_by_tag(&self, tag: &str) -> Option<&dyn Entity> {
        self.entities
            .iter()
            .find(|e| e.core().tag == tag)
            .map(|e| e.as_ref())
    }

    pub fn get_by_tag_mut(&mut self, tag: &str) -> Option<&mut Box<dyn Entity>> {
        self.entities.iter_mut().find(|e| e.core().tag == tag)
    }

    /// Collision rects of every entity whose tag differs from `tag`, in
    /// registry order.
    ///
    /// O(n) per call, and the update pass calls it once per entity: O(n²)
    /// candidate construction per frame. Fine at this engine's scale (tens
    /// of entities), and the resulting candidate ordering is part of the
    /// collision contract, so this is not replaced by a spatial index.
    pub fn rects_except(&self, tag: &str) -> Vec<Rect> {
        self.entities
            .iter()
            .filter(|e| e.core().tag != tag)
            .map(|e| e.core().physics.rect())
            .collect()
    }

    /// Forward one input event to every entity, in order.
    pub fn check_events(&mut self, event: &InputEvent, ctx: &mut EngineContext) {
        for entity in &mut self.entities {
            entity.check_events(event, ctx);
        }
    }

    /// Run every entity's update against its tag-excluded candidate set,
    /// then its unconditional `default_update`, in registry order.
    pub fn update(&mut self, dt: f32) {
        for i in 0..self.entities.len() {
            let tag = self.entities[i].core().tag.clone();
            let solids = self.rects_except(&tag);
            let entity = &mut self.entities[i];
            entity.update(dt, &solids);
            entity.core_mut().default_update(dt);
        }
    }

    /// Render every entity in registry order, plus the collision outline
    /// for entities with the debug flag set.
    pub fn render(&mut self, screen: &mut Pixmap) {
        for entity in &mut self.entities {
            entity.render(screen);
            let core = entity.core();
            if core.debug {
                core.physics.debug_render(screen);
            }
        }
    }
}
