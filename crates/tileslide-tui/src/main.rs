mod animations;
mod app;
mod game;
mod render;
mod scores;
mod theme;

use app::App;
use clap::{Parser, ValueEnum};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use theme::Theme;
use tileslide_core::MoveMode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeOption {
    /// Tiles may only slide into an adjacent empty cell
    Slide,
    /// Any tile may be swapped straight into the empty cell
    Swap,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeOption {
    Dark,
    Light,
    HighContrast,
}

/// Sliding-picture puzzle for the terminal.
#[derive(Parser)]
#[command(name = "tileslide", version, about)]
struct Options {
    /// Board size (an N x N grid)
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(3..=6))]
    size: u8,

    /// Move rule
    #[arg(long, value_enum, default_value = "swap")]
    mode: ModeOption,

    /// Color theme
    #[arg(long, value_enum, default_value = "dark")]
    theme: ThemeOption,
}

fn main() -> io::Result<()> {
    let options = Options::parse();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Run the app
    let result = run_app(&mut stdout, &options);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen, DisableMouseCapture)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, options: &Options) -> io::Result<()> {
    let mode = match options.mode {
        ModeOption::Slide => MoveMode::Slide,
        ModeOption::Swap => MoveMode::Swap,
    };
    let theme = match options.theme {
        ThemeOption::Dark => Theme::dark(),
        ThemeOption::Light => Theme::light(),
        ThemeOption::HighContrast => Theme::high_contrast(),
    };

    let mut app = App::new(options.size as usize, mode, theme);
    let mut last_tick = Instant::now();

    loop {
        let tick_rate = app.get_tick_rate();

        render::render(stdout, &mut app)?;
        stdout.flush()?;

        // Handle input with a timeout so animations keep ticking
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout.min(Duration::from_millis(33)))? {
            if let Event::Key(key) = event::read()? {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key) {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    Ok(())
}
