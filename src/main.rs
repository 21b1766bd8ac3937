//! Star Road entry point
//!
//! Stands in for the host engine: reads key events from stdin, drives the
//! session controller and prints a text view of the current mode.
//!
//! Usage:
//!   star-road [--config settings.json] [--story power-stars|star-road]
//!   star-road [--config settings.json] --dump-level "Bob-omb Islands"
//!
//! Input lines: `<key>` press, `+<key>` hold, `-<key>` release,
//! `mouse <dx> <dy>`, `tick [n]`.

use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;

use star_road::app::{App, AppEvent, Mode};
use star_road::catalog;
use star_road::consts::SIM_DT;
use star_road::input::{InputEvent, Key};
use star_road::level::generate;
use star_road::story::StoryId;
use star_road::Settings;

#[derive(Parser, Debug)]
#[command(name = "star-road")]
#[command(about = "Super Mario Star Road fan-game prototypes")]
struct Cli {
    /// Settings file (JSON); defaults are used when absent
    #[arg(long)]
    config: Option<PathBuf>,
    /// Start in a story slideshow instead of the course browser
    #[arg(long, value_enum)]
    story: Option<StoryId>,
    /// Print the layout of a catalog course as JSON and exit
    #[arg(long, value_name = "COURSE")]
    dump_level: Option<String>,
}

fn main() {
    env_logger::init();
    log::info!("Star Road (native) starting...");

    if let Err(err) = run(Cli::parse()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let settings = Settings::load(cli.config.as_deref())?;

    if let Some(name) = cli.dump_level {
        println!("{}", dump_level(&name, &settings)?);
        return Ok(());
    }

    let mut app = match cli.story {
        Some(story) => App::with_story(settings, story),
        None => App::new(settings),
    };

    print_view(&app)?;
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        for event in handle_line(&mut app, line) {
            print_event(&event);
        }
        print_view(&app)?;
        if !app.is_running() {
            break;
        }
    }
    Ok(())
}

/// Layout and scene objects of a catalog course, as pretty JSON
fn dump_level(name: &str, settings: &Settings) -> Result<String, Box<dyn Error>> {
    let course = catalog::require_course(name)?;
    let layout = generate(course.name, &settings.level)?;
    let dump = serde_json::json!({
        "course": course,
        "layout": layout,
        "objects": layout.scene_objects(),
    });
    Ok(serde_json::to_string_pretty(&dump)?)
}

/// Apply one input line, returning controller events
fn handle_line(app: &mut App, line: &str) -> Vec<AppEvent> {
    let mut parts = line.split_whitespace();
    let head = parts.next().unwrap_or_default();
    let mut events = Vec::new();

    match head {
        "tick" => {
            let n: u32 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(1);
            for _ in 0..n {
                app.update(SIM_DT);
            }
        }
        "mouse" => {
            let mut next = || parts.next().and_then(|s| s.parse::<f32>().ok()).unwrap_or(0.0);
            let delta = Vec2::new(next(), next());
            events.extend(app.handle_event(InputEvent::MouseMotion(delta)));
        }
        _ => {
            let (hold, release, name) = match line.as_bytes()[0] {
                b'+' => (true, false, &line[1..]),
                b'-' => (false, true, &line[1..]),
                _ => (true, true, line),
            };
            let Some(key) = Key::from_name(name) else {
                log::warn!("Unknown key '{}'", name);
                return events;
            };
            if hold {
                events.extend(app.handle_event(InputEvent::KeyDown(key)));
            }
            if release {
                events.extend(app.handle_event(InputEvent::KeyUp(key)));
            }
        }
    }
    events
}

fn print_event(event: &AppEvent) {
    match event {
        AppEvent::EnterFailed(err) => println!("! could not enter level: {err}"),
        AppEvent::FullscreenChanged(on) => println!("* fullscreen {}", if *on { "on" } else { "off" }),
        _ => log::debug!("{:?}", event),
    }
}

fn print_view(app: &App) -> io::Result<()> {
    let mut out = io::stdout().lock();
    match app.mode() {
        Mode::Story => {
            let session = &app.session;
            let story = session.story_id.story();
            writeln!(out, "★: {}", session.story.stars)?;
            writeln!(out, "{}", session.story.current_line(story))?;
            if session.story.prompt_visible() {
                writeln!(out, "(Press SPACE to continue)")?;
            }
        }
        Mode::Browser => {
            let browser = &app.session.browser;
            writeln!(out, "== {} ==", browser.category().as_str())?;
            for row in browser.visible() {
                let marker = if row.selected { '>' } else { ' ' };
                writeln!(out, "{} {}", marker, row.course.to_row())?;
            }
            writeln!(out, "UP/DOWN: Scroll   TAB: Change Category   ENTER: Enter   ESC: Quit")?;
        }
        Mode::Level(world) => {
            let p = world.player.position;
            writeln!(
                out,
                "{}  |  Q: Back  R: Reload  F11: Fullscreen  ESC: Quit",
                world.course_name
            )?;
            writeln!(
                out,
                "pos ({:.2}, {:.2}, {:.2})  grounded: {}  yaw {:.1} pitch {:.1}",
                p.x, p.y, p.z, world.player.grounded, world.camera.yaw, world.camera.pitch
            )?;
            if app.settings.show_fps {
                writeln!(out, "tick {}  ({} Hz)", world.time_ticks, (1.0 / SIM_DT).round())?;
            }
        }
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "star-road",
            "--story",
            "star-road",
            "--dump-level",
            "Star Road",
        ])
        .unwrap();
        assert_eq!(cli.story, Some(StoryId::StarRoad));
        assert_eq!(cli.dump_level.as_deref(), Some("Star Road"));
        assert!(cli.config.is_none());

        let cli = Cli::try_parse_from(["star-road", "--config", "tuning.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("tuning.json")));
        assert!(cli.story.is_none());
    }

    #[test]
    fn test_cli_rejects_bad_input() {
        assert!(Cli::try_parse_from(["star-road", "--story", "bowser"]).is_err());
        assert!(Cli::try_parse_from(["star-road", "--dump-level"]).is_err());
        assert!(Cli::try_parse_from(["star-road", "--warp"]).is_err());
    }

    #[test]
    fn test_dump_level_uses_catalog() {
        let settings = Settings::default();
        let err = dump_level("Whomp's Fortress", &settings).unwrap_err();
        assert!(err.to_string().contains("Whomp's Fortress"));

        let json = dump_level("Bob-omb Islands", &settings).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["layout"]["name"], "Bob-omb Islands");
        assert_eq!(value["layout"]["cells"].as_array().map(Vec::len), Some(400));
    }

    #[test]
    fn test_handle_line_keys() {
        let mut app = App::new(Settings::default());
        assert!(handle_line(&mut app, "nonsense").is_empty());
        let events = handle_line(&mut app, "enter");
        assert!(matches!(events.as_slice(), [AppEvent::EnteredLevel { .. }]));
        handle_line(&mut app, "+d");
        handle_line(&mut app, "tick 30");
        assert!(app.world().is_some_and(|w| w.player.position.x > 0.0));
    }
}
