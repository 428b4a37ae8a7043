//! The interactive terminal loop.
//!
//! Sets the terminal up (raw mode, alternate screen, hidden cursor), then
//! polls for input until the next frame deadline. The simulation is pumped
//! only when that deadline has passed, so input never speeds the pendulum
//! up; every pass redraws the screen. The terminal is restored on every exit
//! path, errors included.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use pendulum::Timestamp;
use tracing::{debug, info};

use crate::app::{Action, App, STATUS_LINES};
use crate::config::Settings;
use crate::error::{Error, Result};

/// Grid size used when the terminal size cannot be read.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Milliseconds from `origin` to `now`, as a simulation timestamp.
fn timestamp_at(origin: Instant, now: Instant) -> Timestamp {
    Timestamp::from_millis(now.saturating_duration_since(origin).as_secs_f64() * 1000.0)
}

/// Fixed-rate frame deadlines for the event loop.
#[derive(Debug, Clone, Copy)]
struct FramePacer {
    interval: Duration,
    next_frame_at: Instant,
}

impl FramePacer {
    /// First deadline is one interval after `now`.
    fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            next_frame_at: now + interval,
        }
    }

    /// How long input polling may block before the next frame is due.
    fn timeout(&self, now: Instant) -> Duration {
        self.next_frame_at.saturating_duration_since(now)
    }

    /// Consumes the current deadline if it has passed.
    ///
    /// A loop that fell more than a frame behind resumes from `now` instead
    /// of replaying the missed frames.
    fn take_due(&mut self, now: Instant) -> bool {
        if now < self.next_frame_at {
            return false;
        }
        self.next_frame_at += self.interval;
        if self.next_frame_at <= now {
            self.next_frame_at = now + self.interval;
        }
        true
    }
}

/// One pass of the loop: applies the event that woke it, then pumps the
/// simulation if a frame deadline has passed.
fn handle_pass(
    app: &mut App,
    pacer: &mut FramePacer,
    event: Option<Event>,
    origin: Instant,
    now: Instant,
) -> Action {
    let timestamp = timestamp_at(origin, now);
    match event {
        Some(Event::Key(key)) => {
            if app.handle_key(key, timestamp) == Action::Quit {
                return Action::Quit;
            }
        }
        Some(Event::Resize(cols, rows)) => app.resize(cols, rows),
        _ => {}
    }
    if pacer.take_due(now) {
        app.pump(timestamp);
    }
    Action::Continue
}

/// Runs the interactive demo on stdout until the user quits.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn run(settings: &Settings) -> Result<()> {
    let (cols, rows) = terminal::size().unwrap_or(FALLBACK_SIZE);
    let mut app = App::new(
        settings,
        usize::from(cols),
        usize::from(rows).saturating_sub(STATUS_LINES),
    )?;
    let frame_duration = Duration::from_secs_f64(settings.frame_millis() / 1000.0);

    let mut stdout = io::stdout();
    enable_raw_mode().map_err(|source| Error::RawMode {
        action: "enable",
        source,
    })?;
    if let Err(source) = execute!(stdout, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(Error::AltScreen {
            action: "enter",
            source,
        });
    }
    info!(cols, rows, fps = settings.fps, "terminal session started");

    let result = event_loop(&mut app, &mut stdout, frame_duration);

    let _ = execute!(stdout, ResetColor, Show, LeaveAlternateScreen);
    let _ = disable_raw_mode();
    info!(ticks = app.simulation().state().ticks, "terminal session ended");
    result
}

fn event_loop<W: Write>(app: &mut App, writer: &mut W, frame_duration: Duration) -> Result<()> {
    let origin = Instant::now();
    let mut pacer = FramePacer::new(frame_duration, origin);
    draw(app, writer)?;

    loop {
        let event = if event::poll(pacer.timeout(Instant::now())).map_err(Error::EventPoll)? {
            Some(event::read().map_err(Error::EventPoll)?)
        } else {
            None
        };

        if handle_pass(app, &mut pacer, event, origin, Instant::now()) == Action::Quit {
            debug!("quit requested");
            return Ok(());
        }
        draw(app, writer)?;
    }
}

/// Writes the current view over the whole screen.
///
/// # Errors
///
/// Returns [`Error::Render`] if writing fails.
pub fn draw<W: Write>(app: &App, writer: &mut W) -> Result<()> {
    let trail = app.simulation().config().trail_color;
    let color = Color::Rgb {
        r: trail.r,
        g: trail.g,
        b: trail.b,
    };
    let view = app.view();
    let grid_rows = view.len().saturating_sub(STATUS_LINES);

    let mut write_all = || -> io::Result<()> {
        queue!(writer, MoveTo(0, 0), Clear(ClearType::All))?;
        for (i, line) in view.iter().enumerate() {
            #[allow(clippy::cast_possible_truncation)]
            let row = i as u16;
            queue!(writer, MoveTo(0, row))?;
            if i < grid_rows {
                queue!(writer, SetForegroundColor(color), Print(line), ResetColor)?;
            } else {
                queue!(writer, Print(line))?;
            }
        }
        writer.flush()
    };
    write_all().map_err(Error::Render)
}
