//! Full-loop runs against the software backend: a real game with scenes,
//! entities, and buttons, driven by scripted input on a manual clock.

use std::cell::Cell;
use std::rc::Rc;

use glam::Vec2;
use lantern_engine::{
    EngineContext, Entity, EntityCore, EntityRegistry, Font, Game, GameConfig, GameContainer,
    InputEvent, Inset, MouseButton, Pixmap, Rgba, SceneState, SceneStateMachine, UIButton,
    UIButtonRegistry,
};
use lantern_soft::{ManualClock, ScriptedEvents, SoftPresent};

struct Block {
    core: EntityCore,
}

impl Block {
    fn boxed(tag: &str, x: f32, vel_x: f32) -> Box<dyn Entity> {
        let mut core = EntityCore::new(tag, x, 0.0, 10.0, 10.0, Inset::ZERO).unwrap();
        core.vel = Vec2::new(vel_x, 0.0);
        Box::new(Self { core })
    }
}

impl Entity for Block {
    fn core(&self) -> &EntityCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }
}

/// Level with a player driving right into a wall. Publishes the player's x
/// position after every update.
struct Level {
    entities: EntityRegistry,
    player_x: Rc<Cell<f32>>,
    updates: Rc<Cell<u32>>,
}

impl Level {
    fn new(player_x: Rc<Cell<f32>>, updates: Rc<Cell<u32>>) -> Self {
        let mut level = Self {
            entities: EntityRegistry::new(),
            player_x,
            updates,
        };
        level.reset();
        level
    }
}

impl SceneState for Level {
    fn check_events(&mut self, event: &InputEvent, ctx: &mut EngineContext) {
        self.entities.check_events(event, ctx);
    }

    fn update(&mut self, dt: f32, _ctx: &mut EngineContext) {
        self.entities.update(dt);
        self.updates.set(self.updates.get() + 1);
        if let Some(player) = self.entities.get_by_tag("player") {
            self.player_x.set(player.core().physics.rect().x);
        }
    }

    fn render(&mut self, screen: &mut Pixmap) {
        self.entities.render(screen);
    }

    fn reset(&mut self) {
        self.entities.clear();
        self.entities.add(Block::boxed("player", 0.0, 5.0));
        self.entities.add(Block::boxed("wall", 10.0, 0.0));
    }
}

/// Menu with one button whose click requests the level scene.
struct Menu {
    buttons: UIButtonRegistry,
    start_clicked: Rc<Cell<bool>>,
}

impl Menu {
    fn new(font: Font) -> Self {
        let start_clicked = Rc::new(Cell::new(false));
        let flag = Rc::clone(&start_clicked);
        let mut buttons = UIButtonRegistry::new();
        buttons.set(
            "start",
            UIButton::new(4.0, 4.0, 12.0, 8.0, font).on_click(move || flag.set(true)),
        );
        Self {
            buttons,
            start_clicked,
        }
    }
}

impl SceneState for Menu {
    fn check_events(&mut self, event: &InputEvent, ctx: &mut EngineContext) {
        self.buttons.check_events(event, ctx);
        if self.start_clicked.get() {
            ctx.request_scene("level");
        }
    }

    fn update(&mut self, dt: f32, ctx: &mut EngineContext) {
        self.buttons.update(dt, ctx.pointer());
    }

    fn render(&mut self, screen: &mut Pixmap) {
        self.buttons.render(screen);
    }

    fn reset(&mut self) {
        self.start_clicked.set(false);
    }
}

struct SceneGame {
    scenes: SceneStateMachine,
}

impl Game for SceneGame {
    fn check_events(&mut self, event: &InputEvent, ctx: &mut EngineContext) {
        self.scenes.check_events(event, ctx);
    }

    fn update(&mut self, dt: f32, ctx: &mut EngineContext) {
        self.scenes.update(dt, ctx);
    }

    fn render(&mut self, screen: &mut Pixmap) {
        self.scenes.render(screen);
    }
}

fn config() -> GameConfig {
    GameConfig {
        width: 32,
        height: 24,
        scale: 2,
        title: "integration".to_string(),
        target_fps: 60,
    }
}

fn container(
    events: ScriptedEvents,
) -> GameContainer<SoftPresent, ManualClock, ScriptedEvents> {
    GameContainer::new(config(), SoftPresent::new(), ManualClock::new(16.0), events)
}

fn test_font() -> Font {
    // Minimal valid glyph strip built in memory.
    let order = lantern_engine::text::CHARACTER_ORDER;
    let mut strip = Pixmap::new(order.len() as u32 * 2, 3);
    strip.fill(Rgba::BLACK);
    for i in 0..order.len() as u32 {
        for y in 0..3 {
            strip.set(i * 2, y, lantern_engine::text::GLYPH_MARKER);
            strip.set(i * 2 + 1, y, lantern_engine::text::SEPARATOR);
        }
    }
    Font::from_strip(&strip, Rgba::WHITE).unwrap()
}

#[test]
fn running_without_a_game_presents_nothing() {
    let mut c = container(ScriptedEvents::silent());
    assert!(c.run().is_err());
    assert_eq!(c.present_target().frames_presented(), 0);
}

#[test]
fn scripted_quit_runs_exactly_that_many_frames() {
    let player_x = Rc::new(Cell::new(-1.0));
    let updates = Rc::new(Cell::new(0));
    let mut scenes = SceneStateMachine::new();
    scenes.register(
        "level",
        Box::new(Level::new(Rc::clone(&player_x), Rc::clone(&updates))),
    );
    scenes.set_current("level").unwrap();

    let mut c = container(ScriptedEvents::quit_after(3));
    c.set_game(Box::new(SceneGame { scenes }));
    c.run().unwrap();

    let (present, _, _) = c.into_platform();
    assert_eq!(present.frames_presented(), 3);
    assert_eq!(present.caption(), "integration");
    assert_eq!(updates.get(), 3);
}

#[test]
fn player_stays_clamped_against_the_wall_every_frame() {
    let player_x = Rc::new(Cell::new(-1.0));
    let updates = Rc::new(Cell::new(0));
    let mut scenes = SceneStateMachine::new();
    scenes.register(
        "level",
        Box::new(Level::new(Rc::clone(&player_x), Rc::clone(&updates))),
    );
    scenes.set_current("level").unwrap();

    let mut c = container(ScriptedEvents::quit_after(4));
    c.set_game(Box::new(SceneGame { scenes }));
    c.run().unwrap();

    // The player tries to move 5px right each frame; the wall at x=10
    // pushes it back to x=0 every time.
    assert_eq!(player_x.get(), 0.0);

    // The untextured player fills its rect green; scale 2 doubles it in
    // the presented output.
    let (present, _, _) = c.into_platform();
    let frame = present.last_frame().unwrap();
    assert_eq!((frame.width(), frame.height()), (64, 48));
    assert_eq!(frame.get(0, 0), Some(Rgba::GREEN));
    assert_eq!(frame.get(19, 19), Some(Rgba::GREEN));
    // Past both boxes: the cleared background.
    assert_eq!(frame.get(62, 40), Some(Rgba::BLACK));
}

#[test]
fn clicking_start_switches_from_menu_to_level() {
    let player_x = Rc::new(Cell::new(-1.0));
    let updates = Rc::new(Cell::new(0));
    let mut scenes = SceneStateMachine::new();
    scenes.register("menu", Box::new(Menu::new(test_font())));
    scenes.register(
        "level",
        Box::new(Level::new(Rc::clone(&player_x), Rc::clone(&updates))),
    );
    scenes.set_current("menu").unwrap();

    // Window coordinates are descaled by 2: (16, 16) lands at logical
    // (8, 8), inside the button. Hover is computed on the frame after the
    // move, so the press comes one frame later.
    let mut c = container(ScriptedEvents::new(vec![
        vec![InputEvent::PointerMoved { x: 16.0, y: 16.0 }],
        vec![InputEvent::PointerDown {
            button: MouseButton::Left,
        }],
        vec![],
        vec![InputEvent::Quit],
    ]));
    c.set_game(Box::new(SceneGame { scenes }));
    c.run().unwrap();

    // The level scene ran after the click.
    assert!(updates.get() >= 1);
    assert_eq!(player_x.get(), 0.0);
}
