//! A box bouncing between two walls, run headless against the software
//! backend for a few seconds. `RUST_LOG=debug` shows per-bounce logging.

use glam::Vec2;
use lantern_engine::{
    CollisionSides, EngineContext, EngineError, Entity, EntityCore, EntityRegistry, Game,
    GameConfig, GameContainer, InputEvent, Inset, Pixmap, Rect, Rgba, SceneState,
    SceneStateMachine,
};
use lantern_soft::{ScriptedEvents, SoftPresent, SystemClock};

const FRAMES: u32 = 240;

struct Wall {
    core: EntityCore,
}

impl Wall {
    fn new(x: f32, height: f32) -> Result<Self, EngineError> {
        Ok(Self {
            core: EntityCore::new("wall", x, 0.0, 8.0, height, Inset::ZERO)?,
        })
    }
}

impl Entity for Wall {
    fn core(&self) -> &EntityCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn render(&mut self, screen: &mut Pixmap) {
        screen.fill_rect(self.core.rect, Rgba::opaque(80, 80, 90));
    }
}

struct Bouncer {
    core: EntityCore,
    bounces: u32,
}

impl Bouncer {
    fn new(x: f32, y: f32) -> Result<Self, EngineError> {
        let mut core = EntityCore::new("box", x, y, 12.0, 12.0, Inset::ZERO)?;
        core.vel = Vec2::new(3.0, 0.0);
        Ok(Self { core, bounces: 0 })
    }
}

impl Entity for Bouncer {
    fn core(&self) -> &EntityCore {
        &self.core
    }
    fn core_mut(&mut self) -> &mut EntityCore {
        &mut self.core
    }

    fn update(&mut self, _dt: f32, solids: &[Rect]) -> CollisionSides {
        let vel = self.core.vel;
        let sides = self.core.physics.move_and_collide(solids, vel);
        if sides.left || sides.right {
            self.core.vel.x = -self.core.vel.x;
            self.bounces += 1;
            log::debug!(
                "bounce {} at x={}",
                self.bounces,
                self.core.physics.rect().x
            );
        }
        sides
    }

    fn render(&mut self, screen: &mut Pixmap) {
        screen.fill_rect(self.core.rect, Rgba::opaque(230, 180, 60));
    }
}

struct Arena {
    entities: EntityRegistry,
    frames: u32,
}

impl Arena {
    fn new() -> Result<Self, EngineError> {
        let mut arena = Self {
            entities: EntityRegistry::new(),
            frames: 0,
        };
        arena.populate()?;
        Ok(arena)
    }

    fn populate(&mut self) -> Result<(), EngineError> {
        self.entities.clear();
        self.entities.add(Box::new(Wall::new(0.0, 120.0)?));
        self.entities.add(Box::new(Wall::new(152.0, 120.0)?));
        self.entities.add(Box::new(Bouncer::new(20.0, 54.0)?));
        Ok(())
    }
}

impl SceneState for Arena {
    fn check_events(&mut self, event: &InputEvent, ctx: &mut EngineContext) {
        self.entities.check_events(event, ctx);
    }

    fn update(&mut self, dt: f32, ctx: &mut EngineContext) {
        self.entities.update(dt);
        self.frames += 1;
        if self.frames % 60 == 0 {
            log::info!("{} frames, {:.1} fps", self.frames, ctx.fps());
        }
    }

    fn render(&mut self, screen: &mut Pixmap) {
        self.entities.render(screen);
    }

    fn reset(&mut self) {
        self.frames = 0;
        if let Err(err) = self.populate() {
            log::error!("arena setup failed: {err}");
        }
    }
}

struct DemoGame {
    scenes: SceneStateMachine,
}

impl Game for DemoGame {
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

fn run() -> Result<(), EngineError> {
    let config = GameConfig {
        width: 160,
        height: 120,
        scale: 4,
        title: "box demo".to_string(),
        target_fps: 60,
    };

    let mut scenes = SceneStateMachine::new();
    scenes.register("arena", Box::new(Arena::new()?));
    scenes.set_current("arena")?;

    let mut container = GameContainer::new(
        config,
        SoftPresent::new(),
        SystemClock::new(),
        ScriptedEvents::quit_after(FRAMES),
    );
    container.set_game(Box::new(DemoGame { scenes }));
    container.run()?;

    let (present, _, _) = container.into_platform();
    log::info!("presented {} frames", present.frames_presented());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
