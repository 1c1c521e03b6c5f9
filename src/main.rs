mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::Path;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use log::{info, warn};
use rand::thread_rng;

use space_shooter::assets::Sprites;
use space_shooter::compute::{GameWorld, TickOutcome};
use space_shooter::config::GameConfig;
use space_shooter::input::{Direction, HeldKeys, InputEvent, FIRST_REPEAT_WINDOW, REPEAT_WINDOW};
use space_shooter::timer::Periodic;

const DEFAULT_CONFIG: &str = "space_shooter.toml";

/// Most ticks run in one frame when the loop falls behind; the rest of the
/// backlog is dropped rather than replayed.
const MAX_CATCH_UP: u32 = 5;

// ── Key mapping ───────────────────────────────────────────────────────────────

fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::Right),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::Down),
        _ => None,
    }
}

fn is_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum LoopExit {
    Quit,
    GameOver,
}

/// Run ticks until the player quits or is hit.
///
/// Both periodic sources live on this thread: the measured frame time feeds
/// the spawner through `GameWorld::elapse`, and the tick timer decides how
/// many fixed steps to run.  Input arrives from the reader thread over `rx`.
fn game_loop<W: Write>(
    out: &mut W,
    world: &mut GameWorld,
    sprites: &Sprites,
    rx: &mpsc::Receiver<Event>,
    releases_reported: bool,
) -> std::io::Result<LoopExit> {
    let mut rng = thread_rng();
    let mut tick_timer = Periodic::new(world.config().tick_period());
    let mut held = HeldKeys::default();
    let mut last = Instant::now();

    display::render(out, world, sprites)?;

    loop {
        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = ev else {
                continue;
            };
            if kind != KeyEventKind::Release && is_quit(code, modifiers) {
                return Ok(LoopExit::Quit);
            }
            match (kind, direction_for(code)) {
                (KeyEventKind::Press | KeyEventKind::Repeat, Some(dir)) => {
                    if held.press(dir, Instant::now()) {
                        world.handle_input(InputEvent::Press(dir));
                    }
                }
                (KeyEventKind::Release, Some(dir)) => {
                    if held.release(dir) {
                        world.handle_input(InputEvent::Release(dir));
                    }
                }
                (KeyEventKind::Press | KeyEventKind::Repeat, None) if code == KeyCode::Char(' ') => {
                    world.handle_input(InputEvent::Fire);
                }
                _ => {}
            }
        }

        // ── Synthesize releases on terminals that never send them ─────────────
        if !releases_reported {
            for dir in held.expire(Instant::now()) {
                world.handle_input(InputEvent::Release(dir));
            }
        }

        // ── Time: spawner first, then fixed ticks ─────────────────────────────
        let now = Instant::now();
        let dt = now.duration_since(last);
        last = now;

        world.elapse(dt, &mut rng);

        let steps = tick_timer.advance(dt);
        if steps > MAX_CATCH_UP {
            tick_timer.reset();
        }
        for _ in 0..steps.min(MAX_CATCH_UP) {
            if world.tick() == TickOutcome::GameOver {
                display::render(out, world, sprites)?;
                return Ok(LoopExit::GameOver);
            }
        }
        if steps > 0 {
            display::render(out, world, sprites)?;
        }

        thread::sleep(tick_timer.remaining());
    }
}

// ── Play-again prompt ─────────────────────────────────────────────────────────

/// Blocks until the player answers.  A closed input channel counts as "no".
fn ask_play_again(rx: &mpsc::Receiver<Event>) -> bool {
    // Anything typed before the overlay appeared is not an answer.
    while rx.try_recv().is_ok() {}

    while let Ok(ev) = rx.recv() {
        if let Event::Key(KeyEvent { code, kind: KeyEventKind::Press, modifiers, .. }) = ev {
            match code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => return true,
                KeyCode::Char('n') | KeyCode::Char('N') => return false,
                _ if is_quit(code, modifiers) => return false,
                _ => {}
            }
        }
    }
    false
}

fn run<W: Write>(
    out: &mut W,
    cfg: &GameConfig,
    rx: &mpsc::Receiver<Event>,
    releases_reported: bool,
) -> std::io::Result<()> {
    let sprites = Sprites::load(&cfg.assets_dir);
    let mut world = GameWorld::new(cfg);

    loop {
        match game_loop(out, &mut world, &sprites, rx, releases_reported)? {
            LoopExit::Quit => break,
            LoopExit::GameOver => {
                if !ask_play_again(rx) {
                    info!("player declined a rematch, final score {}", world.score());
                    break;
                }
                world.reset();
            }
        }
    }
    Ok(())
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn load_config() -> anyhow::Result<GameConfig> {
    match std::env::args().nth(1) {
        Some(path) => GameConfig::load(Path::new(&path))
            .with_context(|| format!("failed to load config from {path}")),
        None if Path::new(DEFAULT_CONFIG).exists() => GameConfig::load(Path::new(DEFAULT_CONFIG))
            .with_context(|| format!("failed to load {DEFAULT_CONFIG}")),
        None => Ok(GameConfig::default()),
    }
}

/// Log to a file; the terminal belongs to the game.  Without a writable
/// log file logging stays off.
fn init_logging(path: &Path) {
    if let Ok(file) = File::create(path) {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();
    }
}

// ── Terminal guard ────────────────────────────────────────────────────────────

/// Raw mode, alternate screen and hidden cursor for as long as it lives.
/// Dropping it restores the terminal, on error paths too.
struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    fn enter<W: Write>(out: &mut W) -> std::io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut guard = TerminalGuard { keyboard_enhanced: false };
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;

        // Key-release events make held directions exact; without them
        // releases are synthesized by `HeldKeys`.
        guard.keyboard_enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false)
            && out
                .execute(PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))
                .is_ok();
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = stdout();
        if self.keyboard_enhanced {
            let _ = out.execute(PopKeyboardEnhancementFlags);
        }
        let _ = out.execute(cursor::Show);
        let _ = out.execute(terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cfg = load_config()?;
    init_logging(&cfg.log_file);
    info!("starting with {cfg:?}");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    let guard = TerminalGuard::enter(&mut out).context("failed to set up the terminal")?;
    let releases_reported = guard.keyboard_enhanced;
    if !releases_reported {
        warn!(
            "terminal does not report key releases; holding keys for {FIRST_REPEAT_WINDOW:?} \
             before the first repeat, {REPEAT_WINDOW:?} after"
        );
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(err) => {
                warn!("input reader stopped: {err}");
                break;
            }
        }
    });

    let result = run(&mut out, &cfg, &rx, releases_reported);

    let _ = out.flush();
    drop(guard);

    result.context("terminal I/O failed")
}
