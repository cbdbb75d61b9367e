use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use orbit_ship::state::ViewConfig;
use orbit_ship::widget::{Control, OrbitWidget};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Steer a spaceship around a ring with the mouse
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Frames painted per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Angle step per pointer move, in radians
    #[arg(long, default_value_t = orbit_ship::orbit::ROTATION_SPEED)]
    rotation_speed: f64,

    /// Length of the ease-out played on release, in milliseconds
    #[arg(long, default_value_t = 500)]
    ease_out_ms: u64,

    /// Start with the debug overlay visible
    #[arg(short, long)]
    debug: bool,

    /// Write logs to this file
    #[arg(long)]
    log: Option<PathBuf>,

    /// Log filter directive
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn view_config(&self) -> Result<ViewConfig> {
        if self.fps == 0 {
            bail!("--fps must be greater than 0");
        }
        if !self.rotation_speed.is_finite() {
            bail!("--rotation-speed must be a finite number");
        }
        Ok(ViewConfig {
            rotation_speed: self.rotation_speed,
            ease_out: Duration::from_millis(self.ease_out_ms),
            fps: self.fps,
            debug: self.debug,
        })
    }
}

/// Logs go to a file only, the terminal belongs to the view
fn init_logging(args: &Args) -> Result<()> {
    let Some(path) = &args.log else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&args.log_level)
        .with_context(|| format!("invalid log filter {:?}", args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Puts the terminal into game mode and restores it when dropped
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        // Built before the rest so a failure below still restores raw mode
        let guard = TerminalGuard;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            cursor::Hide,
            Clear(ClearType::All)
        )
        .context("failed to prepare terminal")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = execute!(
            io::stdout(),
            cursor::Show,
            DisableMouseCapture,
            LeaveAlternateScreen
        ) {
            warn!(%err, "failed to leave alternate screen");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            warn!(%err, "failed to disable raw mode");
        }
    }
}

/// Terminal size in cells
fn terminal_size() -> Result<(u16, u16)> {
    match termsize::get() {
        Some(size) => Ok((size.cols, size.rows)),
        None => terminal::size().context("failed to query terminal size"),
    }
}

/// Applies pending events in arrival order until none are left or the next
/// frame is due. Events not applied stay queued for the next pass.
fn drain_events<F>(widget: &mut OrbitWidget, due: Instant, mut next: F) -> Result<Control>
where
    F: FnMut() -> Result<Option<Event>>,
{
    while let Some(event) = next()? {
        if widget.event(&event) == Control::Quit {
            return Ok(Control::Quit);
        }
        if Instant::now() >= due {
            break;
        }
    }
    Ok(Control::Continue)
}

fn run(config: &ViewConfig) -> Result<()> {
    let (columns, rows) = terminal_size()?;
    info!(columns, rows, fps = config.fps, "starting");

    let _guard = TerminalGuard::enter()?;
    let mut widget = OrbitWidget::new(config, columns, rows);
    let mut stdout = io::stdout().lock();
    let frame = config.frame_interval();
    let mut last_frame = Instant::now();

    loop {
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            let pending = || -> Result<Option<Event>> {
                if event::poll(Duration::ZERO)? {
                    Ok(Some(event::read()?))
                } else {
                    Ok(None)
                }
            };
            if drain_events(&mut widget, last_frame + frame, pending)? == Control::Quit {
                info!(angle = widget.controller().angle(), "quitting");
                return Ok(());
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            widget.tick(elapsed);
            widget.paint(&mut stdout).context("failed to draw frame")?;
        }
    }
}

/// Main function
fn main() -> Result<()> {
    let args = Args::parse();
    let config = args.view_config()?;
    init_logging(&args)?;
    run(&config)
}
