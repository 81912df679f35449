//! Scripted keypad session against an in-memory document.
//!
//! `cargo run -p keypad_session [config.json]`, with `RUST_LOG=debug` to see
//! the runner's decisions.

use anyhow::Context;
use kaipad_core::*;
use kaipad_navigation::{History, Route, Router, routes};
use kaipad_platform::*;
use kaipad_ui::{ElementSpec, ElementTree};

enum Step {
    Tap(Key),
    Hold(Key, u64),
    Click(SoftButton),
    Swipe(Vec2, Vec2),
}

struct LoggingHooks;

impl ExtensionHooks for LoggingHooks {
    fn refresh(&mut self) {
        log::info!("hooks: refresh");
    }

    fn switch_category(&mut self, dir: HorizontalDir) {
        log::info!("hooks: switch category {dir:?}");
    }
}

struct Session {
    clock: TestClock,
    dom: ElementTree,
    list: NodeId,
    history: History,
    map: MapViewport,
    window: CloseLatch,
    hooks: LoggingHooks,
    state: AppState,
    runner: KeypadRunner,
}

impl Session {
    fn new(config: KeypadConfig) -> anyhow::Result<Self> {
        let clock = TestClock::default();
        let mut dom = ElementTree::new(Size::new(240.0, 320.0), clock.now());
        let root = dom.root();
        dom.append(root, ElementSpec::container("header", Rect::new(0.0, 0.0, 240.0, 30.0)))?;
        let list = dom.append(
            root,
            ElementSpec::container("results", Rect::new(0.0, 30.0, 240.0, 260.0)).scrollable(),
        )?;

        let mut state = AppState::default();
        for i in 0..12 {
            let name = format!("article{i}");
            let frame = Rect::new(0.0, i as f32 * 56.0, 240.0, 56.0);
            dom.append(list, ElementSpec::item(name.clone(), frame))?;
            let at = GeoPoint::new(47.26 + i as f64 * 0.01, 11.39);
            state.articles.push(ArticleRef::located(name, at));
        }

        Ok(Self {
            clock,
            dom,
            list,
            history: History::new(Route::new(routes::START)),
            map: MapViewport::default(),
            window: CloseLatch::default(),
            hooks: LoggingHooks,
            state,
            runner: KeypadRunner::new(config),
        })
    }

    fn with_host<R>(&mut self, f: impl FnOnce(&mut KeypadRunner, &mut Host<'_>, Instant) -> R) -> R {
        let now = self.clock.now();
        let mut host = Host {
            state: &self.state,
            dom: &mut self.dom,
            routes: &mut self.history,
            map: &mut self.map,
            window: &mut self.window,
            hooks: &mut self.hooks,
        };
        f(&mut self.runner, &mut host, now)
    }

    /// Advance time in 16ms frames, firing long presses and smooth scrolls.
    fn run_for(&mut self, ms: u64) {
        let mut elapsed = 0;
        while elapsed < ms {
            let step = 16.min(ms - elapsed);
            elapsed += step;
            self.clock.advance_ms(step);
            self.with_host(|runner, host, now| runner.tick(host, now));
            self.dom.tick(self.clock.now());
        }
    }

    fn play(&mut self, step: &Step) {
        match step {
            Step::Tap(key) | Step::Hold(key, _) => {
                let held = match step {
                    Step::Hold(_, ms) => *ms,
                    _ => 80,
                };
                let ev = KeyEvent::physical(key.clone());
                self.with_host(|runner, host, now| runner.key_down(host, &ev, now));
                self.run_for(held);
                self.with_host(|runner, host, now| runner.key_up(host, &ev, now));
            }
            Step::Click(button) => {
                self.with_host(|runner, host, now| runner.click(host, *button, now));
            }
            Step::Swipe(from, to) => {
                let started = TouchEvent {
                    phase: TouchPhase::Started,
                    position: *from,
                };
                self.with_host(|runner, host, now| runner.touch(host, &started, now));
                self.run_for(120);
                let ended = TouchEvent {
                    phase: TouchPhase::Ended,
                    position: *to,
                };
                self.with_host(|runner, host, now| runner.touch(host, &ended, now));
            }
        }
        // Settle animations and open the debounce windows again.
        self.run_for(400);
    }

    fn report(&self, label: &str) {
        let scroll = self
            .dom
            .scroll_top(ScrollTarget::Element(self.list))
            .unwrap_or(0.0);
        println!(
            "{label:<22} route={:<32} focus={:<10} scroll={scroll:>6.1} zoom={}",
            self.history.current_route().to_string(),
            self.dom.active_label().unwrap_or("-"),
            self.map.zoom,
        );
    }
}

fn load_config() -> anyhow::Result<KeypadConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(KeypadConfig::default());
    };
    let json = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    KeypadConfig::from_json_str(&json).with_context(|| format!("parsing {path}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = load_config()?;
    log::info!("keypad config: {config:?}");

    let mut session = Session::new(config)?;
    let script = [
        ("down", Step::Tap(Key::ArrowDown)),
        ("down", Step::Tap(Key::ArrowDown)),
        ("down", Step::Tap(Key::ArrowDown)),
        ("up", Step::Tap(Key::ArrowUp)),
        ("up", Step::Tap(Key::ArrowUp)),
        ("up (wraps)", Step::Tap(Key::ArrowUp)),
        ("up", Step::Tap(Key::ArrowUp)),
        ("swipe left", Step::Swipe(Vec2::new(200.0, 150.0), Vec2::new(40.0, 150.0))),
        ("soft left", Step::Tap(Key::SoftLeft)),
    ];
    for (label, step) in &script {
        session.play(step);
        session.report(label);
    }

    // The map opened on the first result; the viewport follows the route.
    if let Some(p) = session.state.first_result_position() {
        session.map = MapViewport::centered(p);
    }
    let script = [
        ("zoom in", Step::Tap(Key::SoftRight)),
        ("zoom in (button)", Step::Click(SoftButton::Right)),
        ("zoom out", Step::Tap(Key::SoftLeft)),
        ("back", Step::Click(SoftButton::TopRight)),
        ("options", Step::Tap(Key::SoftRight)),
        ("back", Step::Tap(Key::Backspace)),
    ];
    for (label, step) in &script {
        session.play(step);
        session.report(label);
    }

    let saved = session.history.to_json();
    println!("history: {saved}");

    session.play(&Step::Hold(Key::Backspace, 2200));
    session.report("hold back");
    anyhow::ensure!(session.window.is_closed(), "long back press did not close the window");
    println!("window closed after {} request(s)", session.window.requests);
    Ok(())
}
