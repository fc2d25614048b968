mod input;
mod ui;

use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};
use sweep::app::{App, AppCommand};
use sweep::config::Cli;
use sweep::constants::{FRAME_INTERVAL_MS, MAX_FRAME_DELTA_SECONDS};
use sweep::logging;

type Tui = Terminal<CrosstermBackend<io::Stdout>>;

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let settings = cli.settings()?;

    if let Some(path) = &cli.log_file {
        logging::init(path, cli.log_level)?;
    }
    log::info!(
        "Starting sweep {} ({})",
        sweep::build_info::BUILD_DATE,
        sweep::build_info::BUILD_COMMIT
    );

    let mut app = App::new(settings, cli.seed);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Cleanup terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Terminal loop failed: {}", err);
    }
    log::info!("Exiting");
    result.map_err(Into::into)
}

/// Frame loop: draw, drain input, then advance one tick.
fn run(terminal: &mut Tui, app: &mut App) -> io::Result<()> {
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| ui::draw_ui(frame, app))?;

        // Wait out the rest of the frame, handling input as it arrives
        let timeout = frame_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            let area = terminal.size()?;
            if input::handle_event(app, event::read()?, area) == AppCommand::Quit {
                return Ok(());
            }
        }

        if last_tick.elapsed() >= frame_interval {
            let dt = last_tick
                .elapsed()
                .as_secs_f64()
                .min(MAX_FRAME_DELTA_SECONDS);
            last_tick = Instant::now();
            if app.tick(dt) == AppCommand::Quit {
                return Ok(());
            }
        }
    }
}
