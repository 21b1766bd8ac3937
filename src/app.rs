//! Session controller
//!
//! Owns all mutable game state and routes input to the handler for the
//! current mode. There are no globals: the story counters and browser
//! position live in `Session`, the active level lives in `Mode::Level`.

use crate::browser::CourseBrowser;
use crate::catalog::Category;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::error::ParameterError;
use crate::input::{HeldKeys, InputEvent, Key};
use crate::settings::Settings;
use crate::sim::{World, tick};
use crate::story::{StoryEvent, StoryId, StoryProgress};

/// Which prototype is in front
#[derive(Debug)]
pub enum Mode {
    Story,
    Browser,
    Level(Box<World>),
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Story => "story",
            Mode::Browser => "browser",
            Mode::Level(_) => "level",
        }
    }
}

/// In-memory session state shared across modes
#[derive(Debug, Clone)]
pub struct Session {
    pub story_id: StoryId,
    pub story: StoryProgress,
    pub browser: CourseBrowser,
}

impl Session {
    pub fn new(story_id: StoryId, visible_rows: usize) -> Self {
        Self {
            story_id,
            story: StoryProgress::new(),
            browser: CourseBrowser::new(visible_rows),
        }
    }
}

/// What a handled event changed
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    Story(Vec<StoryEvent>),
    SelectionMoved { index: usize },
    CategoryChanged(Category),
    EnteredLevel { name: String },
    /// Level entry aborted; browser stays active
    EnterFailed(ParameterError),
    ExitedLevel,
    Reloaded,
    FullscreenChanged(bool),
    Quit,
}

pub struct App {
    pub settings: Settings,
    pub session: Session,
    mode: Mode,
    held: HeldKeys,
    accumulator: f32,
    running: bool,
}

impl App {
    /// Start in the course browser
    pub fn new(settings: Settings) -> Self {
        let session = Session::new(StoryId::PowerStars, settings.visible_rows);
        Self {
            settings,
            session,
            mode: Mode::Browser,
            held: HeldKeys::default(),
            accumulator: 0.0,
            running: true,
        }
    }

    /// Start in the story slideshow
    pub fn with_story(settings: Settings, story_id: StoryId) -> Self {
        let mut app = Self::new(settings);
        app.session.story_id = story_id;
        app.mode = Mode::Story;
        app
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn world(&self) -> Option<&World> {
        match &self.mode {
            Mode::Level(world) => Some(world.as_ref()),
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Route an input event to the handler for the current mode
    pub fn handle_event(&mut self, event: InputEvent) -> Option<AppEvent> {
        if !self.running {
            return None;
        }
        match self.mode {
            Mode::Story => self.handle_story(event),
            Mode::Browser => self.handle_browser(event),
            Mode::Level(_) => self.handle_level(event),
        }
    }

    fn handle_story(&mut self, event: InputEvent) -> Option<AppEvent> {
        match event {
            InputEvent::KeyDown(Key::Space) => {
                let story = self.session.story_id.story();
                let events = self.session.story.advance(story);
                (!events.is_empty()).then_some(AppEvent::Story(events))
            }
            InputEvent::KeyDown(Key::Escape) => Some(self.quit()),
            _ => None,
        }
    }

    fn handle_browser(&mut self, event: InputEvent) -> Option<AppEvent> {
        let InputEvent::KeyDown(key) = event else {
            return None;
        };
        let browser = &mut self.session.browser;
        match key {
            Key::Up | Key::Down => {
                browser.scroll(if key == Key::Up { -1 } else { 1 });
                Some(AppEvent::SelectionMoved {
                    index: browser.selected_index(),
                })
            }
            Key::Tab => {
                browser.cycle_category();
                log::info!("Category: {}", browser.category().as_str());
                Some(AppEvent::CategoryChanged(browser.category()))
            }
            Key::Enter => {
                let name = browser.selected_course()?.name;
                Some(self.enter_level(name))
            }
            Key::Escape => Some(self.quit()),
            _ => None,
        }
    }

    fn handle_level(&mut self, event: InputEvent) -> Option<AppEvent> {
        match event {
            InputEvent::KeyDown(Key::Q) => self.exit_level(),
            InputEvent::KeyDown(Key::R) => self.reload_level(),
            InputEvent::KeyDown(Key::F11) => Some(self.toggle_fullscreen()),
            InputEvent::KeyDown(Key::Escape) => Some(self.quit()),
            InputEvent::KeyDown(key) => {
                self.held.set(key, true);
                None
            }
            InputEvent::KeyUp(key) => {
                self.held.set(key, false);
                None
            }
            InputEvent::MouseMotion(delta) => {
                self.held.add_mouse_motion(delta);
                None
            }
        }
    }

    /// Generate and enter a level; on invalid parameters stay in the browser
    pub fn enter_level(&mut self, name: &str) -> AppEvent {
        let world = World::enter(
            name,
            &self.settings.level,
            self.settings.player,
            self.settings.camera,
        );
        match world {
            Ok(world) => {
                // Replaces any previous level's geometry
                self.mode = Mode::Level(Box::new(world));
                self.held.release_all();
                self.accumulator = 0.0;
                AppEvent::EnteredLevel {
                    name: name.to_string(),
                }
            }
            Err(err) => {
                log::warn!("Could not enter '{}': {}", name, err);
                self.mode = Mode::Browser;
                AppEvent::EnterFailed(err)
            }
        }
    }

    /// Drop the current level and return to the browser
    pub fn exit_level(&mut self) -> Option<AppEvent> {
        let Mode::Level(world) = &self.mode else {
            return None;
        };
        log::info!("Leaving '{}'", world.course_name);
        self.mode = Mode::Browser;
        self.held.release_all();
        Some(AppEvent::ExitedLevel)
    }

    pub fn reload_level(&mut self) -> Option<AppEvent> {
        let Mode::Level(world) = &mut self.mode else {
            return None;
        };
        world.reset();
        self.accumulator = 0.0;
        Some(AppEvent::Reloaded)
    }

    pub fn toggle_fullscreen(&mut self) -> AppEvent {
        let on = self.settings.toggle_fullscreen();
        log::debug!("Fullscreen: {}", on);
        AppEvent::FullscreenChanged(on)
    }

    pub fn quit(&mut self) -> AppEvent {
        log::info!("Quit requested from {} mode", self.mode.name());
        self.running = false;
        AppEvent::Quit
    }

    /// Run simulation ticks for a frame of `frame_dt` seconds.
    /// Returns the number of ticks run. Non-finite frame times are dropped.
    pub fn update(&mut self, frame_dt: f32) -> u32 {
        let Mode::Level(world) = &mut self.mode else {
            return 0;
        };
        if !frame_dt.is_finite() {
            log::warn!("Dropping non-finite frame time {}", frame_dt);
            return 0;
        }
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.held.take_tick_input();
            tick(world, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }
}
