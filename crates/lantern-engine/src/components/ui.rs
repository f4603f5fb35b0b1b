//! Clickable labeled buttons and their tag-keyed registry.

use std::collections::HashMap;

use glam::Vec2;

use crate::api::game::EngineContext;
use crate::core::rect::Rect;
use crate::input::queue::{InputEvent, MouseButton};
use crate::renderer::pixmap::{Pixmap, Rgba};
use crate::text::Font;

/// Hover overlay strength out of 255.
const HOVER_ALPHA: u16 = 75;

/// A rectangular button with an optional centered label.
///
/// The button owns its [`Font`] so each one can carry its own text color.
/// Hit testing runs against the scaled on-screen rect using the pointer
/// position the host loop tracks in logical coordinates.
pub struct UIButton {
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    color: Rgba,
    label: String,
    font: Font,
    scale: u32,
    hovering: bool,
    on_click: Box<dyn FnMut()>,
}

impl UIButton {
    pub fn new(x: f32, y: f32, width: f32, height: f32, font: Font) -> Self {
        Self {
            x,
            y,
            width,
            height,
            color: Rgba::opaque(100, 100, 100),
            label: String::new(),
            font,
            scale: 1,
            hovering: false,
            on_click: Box::new(|| log::debug!("button clicked")),
        }
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set the label and grow the button around its center if the text
    /// would not fit.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        let (text_w, text_h) = self.font.measure(&self.label);
        if text_w > self.width {
            self.x -= (text_w - self.width) / 2.0;
            self.width = text_w;
        }
        if text_h > self.height {
            self.y -= (text_h - self.height) / 2.0;
            self.height = text_h;
        }
        self
    }

    pub fn with_scale(mut self, scale: u32) -> Self {
        self.scale = scale.max(1);
        self
    }

    /// Treat (`x`, `y`) as the button's center instead of its top-left.
    pub fn centered(mut self) -> Self {
        self.x -= self.width / 2.0 * self.scale as f32;
        self.y -= self.height / 2.0 * self.scale as f32;
        self
    }

    pub fn on_click(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_click = Box::new(callback);
        self
    }

    pub fn hovering(&self) -> bool {
        self.hovering
    }

    /// On-screen footprint: position plus scaled dimensions.
    pub fn screen_rect(&self) -> Rect {
        Rect::new(
            self.x,
            self.y,
            self.width * self.scale as f32,
            self.height * self.scale as f32,
        )
    }

    /// Refresh the hover flag from the pointer position.
    pub fn update(&mut self, _dt: f32, pointer: Vec2) {
        self.hovering = self.screen_rect().contains(pointer);
    }

    /// Fire the click callback on a left pointer press while hovering.
    pub fn check_events(&mut self, event: &InputEvent, _ctx: &mut EngineContext) {
        if let InputEvent::PointerDown {
            button: MouseButton::Left,
        } = event
        {
            if self.hovering {
                (self.on_click)();
            }
        }
    }

    /// Compose the button face, brighten it while hovered, scale it up, and
    /// blit it at the button's position.
    pub fn render(&mut self, screen: &mut Pixmap) {
        let w = self.width.ceil() as u32;
        let h = self.height.ceil() as u32;
        if w == 0 || h == 0 {
            return;
        }

        let mut face = Pixmap::new(w, h);
        face.fill(self.color);
        if !self.label.is_empty() {
            let (text_w, text_h) = self.font.measure(&self.label);
            let text_x = (self.width / 2.0).ceil() - (text_w / 2.0).ceil() + 1.0;
            let text_y = (self.height / 2.0).ceil() - (text_h / 2.0).ceil() + 2.0;
            self.font
                .render(&mut face, &self.label, text_x as i32, text_y as i32);
        }

        if self.hovering {
            lighten(&mut face);
        }

        if self.scale > 1 {
            let scaled = face.scaled(self.scale);
            screen.blit(&scaled, self.x as i32, self.y as i32);
        } else {
            screen.blit(&face, self.x as i32, self.y as i32);
        }
    }
}

/// Blend every opaque pixel part way toward white.
fn lighten(face: &mut Pixmap) {
    for y in 0..face.height() {
        for x in 0..face.width() {
            let Some(c) = face.get(x, y) else { continue };
            if c.a == 0 {
                continue;
            }
            let mix = |v: u8| (v as u16 + (255 - v as u16) * HOVER_ALPHA / 255) as u8;
            face.set(x, y, Rgba::opaque(mix(c.r), mix(c.g), mix(c.b)));
        }
    }
}

/// Tag-keyed button collection dispatched as a unit.
#[derive(Default)]
pub struct UIButtonRegistry {
    buttons: HashMap<String, UIButton>,
}

impl UIButtonRegistry {
    pub fn new() -> Self {
        Self {
            buttons: HashMap::new(),
        }
    }

    /// Insert or replace the button under `tag`.
    pub fn set(&mut self, tag: impl Into<String>, button: UIButton) {
        self.buttons.insert(tag.into(), button);
    }

    pub fn get(&self, tag: &str) -> Option<&UIButton> {
        self.buttons.get(tag)
    }

    pub fn get_mut(&mut self, tag: &str) -> Option<&mut UIButton> {
        self.buttons.get_mut(tag)
    }

    pub fn check_events(&mut self, event: &InputEvent, ctx: &mut EngineContext) {
        for button in self.buttons.values_mut() {
            button.check_events(event, ctx);
        }
    }

    pub fn update(&mut self, dt: f32, pointer: Vec2) {
        for button in self.buttons.values_mut() {
            button.update(dt, pointer);
        }
    }

    pub fn render(&mut self, screen: &mut Pixmap) {
        for button in self.buttons.values_mut() {
            button.render(screen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::test_strip;
    use std::cell::Cell;
    use std::rc::Rc;

    fn test_font() -> Font {
        Font::from_strip(&test_strip::make(2), Rgba::WHITE).unwrap()
    }

    #[test]
    fn hover_tracks_pointer_against_scaled_rect() {
        let mut b = UIButton::new(10.0, 10.0, 20.0, 10.0, test_font()).with_scale(2);
        // Scaled footprint is 40x20 at (10, 10).
        b.update(0.016, Vec2::new(49.0, 29.0));
        assert!(b.hovering());
        // Inclusive boundary.
        b.update(0.016, Vec2::new(50.0, 30.0));
        assert!(b.hovering());
        b.update(0.016, Vec2::new(51.0, 30.0));
        assert!(!b.hovering());
    }

    #[test]
    fn click_fires_only_while_hovering() {
        let clicks = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&clicks);
        let mut b = UIButton::new(0.0, 0.0, 10.0, 10.0, test_font())
            .on_click(move || counter.set(counter.get() + 1));
        let mut ctx = EngineContext::new();
        let press = InputEvent::PointerDown {
            button: MouseButton::Left,
        };

        b.update(0.016, Vec2::new(100.0, 100.0));
        b.check_events(&press, &mut ctx);
        assert_eq!(clicks.get(), 0);

        b.update(0.016, Vec2::new(5.0, 5.0));
        b.check_events(&press, &mut ctx);
        assert_eq!(clicks.get(), 1);

        // Other buttons are ignored.
        b.check_events(
            &InputEvent::PointerDown {
                button: MouseButton::Right,
            },
            &mut ctx,
        );
        assert_eq!(clicks.get(), 1);
    }

    #[test]
    fn label_grows_the_button_around_its_center() {
        let font = test_font();
        let (text_w, _) = font.measure("hello");
        let b = UIButton::new(50.0, 0.0, 4.0, 10.0, font).with_label("hello");
        let rect = b.screen_rect();
        assert_eq!(rect.w, text_w);
        // Center preserved: originally 50 + 4/2 = 52.
        assert_eq!(rect.x + rect.w / 2.0, 52.0);
    }

    #[test]
    fn centered_offsets_by_half_the_scaled_size() {
        let b = UIButton::new(100.0, 50.0, 20.0, 10.0, test_font())
            .with_scale(2)
            .centered();
        let rect = b.screen_rect();
        assert_eq!(rect.x, 80.0);
        assert_eq!(rect.y, 40.0);
        assert_eq!(rect.w, 40.0);
    }

    #[test]
    fn hover_brightens_the_face() {
        let mut b = UIButton::new(0.0, 0.0, 4.0, 4.0, test_font())
            .with_color(Rgba::opaque(100, 100, 100));
        let mut plain = Pixmap::new(4, 4);
        b.update(0.016, Vec2::new(-1.0, -1.0));
        b.render(&mut plain);

        let mut hovered = Pixmap::new(4, 4);
        b.update(0.016, Vec2::new(2.0, 2.0));
        b.render(&mut hovered);

        let before = plain.get(1, 1).unwrap();
        let after = hovered.get(1, 1).unwrap();
        assert!(after.r > before.r);
        assert_eq!(before.r, 100);
    }

    #[test]
    fn registry_dispatches_to_every_button() {
        let clicks = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&clicks);
        let mut reg = UIButtonRegistry::new();
        reg.set(
            "play",
            UIButton::new(0.0, 0.0, 10.0, 10.0, test_font())
                .on_click(move || counter.set(counter.get() + 1)),
        );
        assert!(reg.get("play").is_some());
        assert!(reg.get("missing").is_none());

        let mut ctx = EngineContext::new();
        reg.update(0.016, Vec2::new(5.0, 5.0));
        reg.check_events(
            &InputEvent::PointerDown {
                button: MouseButton::Left,
            },
            &mut ctx,
        );
        assert_eq!(clicks.get(), 1);
    }
}
