use crate::animations::particles::hue_to_rgb;
use crate::app::{App, MenuState, ScreenState, BOARD_SIZES};
use crate::scores::format_time;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use tileslide_core::{Grid, Position};

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide)?;

    match app.screen_state {
        // The win screen repaints every cell itself; clearing would flicker.
        ScreenState::Win => render_win_screen(stdout, app, term_width, term_height)?,
        ScreenState::Scores => {
            execute!(stdout, Clear(ClearType::All))?;
            render_scores_screen(stdout, app, term_width)?;
        }
        ScreenState::Playing => {
            execute!(stdout, Clear(ClearType::All))?;
            render_game_screen(stdout, app, term_width, term_height)?;
        }
    }

    execute!(stdout, Show)?;
    Ok(())
}

/// Width of one tile cell in characters, excluding its left border.
const CELL_WIDTH: u16 = 5;

fn board_width(cols: usize) -> u16 {
    cols as u16 * CELL_WIDTH + 1
}

fn board_height(rows: usize) -> u16 {
    rows as u16 * 2 + 1
}

fn render_game_screen(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let grid_width = board_width(app.game.cols());
    let grid_height = board_height(app.game.rows());

    // Center the board, leaving room for the info panel on the right.
    let total_width = grid_width + 26;
    let start_x = if term_width > total_width {
        (term_width - total_width) / 2
    } else {
        1
    };
    let start_y = if term_height > grid_height + 6 { 2 } else { 1 };

    render_board(stdout, app, start_x, start_y)?;

    let info_x = start_x + grid_width + 3;
    render_info_panel(stdout, app, info_x, start_y)?;

    let controls_y = start_y + grid_height + 1;
    render_controls(stdout, app, start_x, controls_y)?;

    if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, term_width, term_height)?;
    }

    if app.menu != MenuState::None {
        render_menu(stdout, app, term_width, term_height)?;
    }

    Ok(())
}

fn render_board(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let grid = app.game.grid();
    let (rows, cols) = (grid.rows(), grid.cols());

    // Peeking shows the solved layout instead of the scrambled one, the
    // terminal equivalent of holding the original's peek button.
    let solved = Grid::new(rows, cols);
    let shown = if app.peeking { &solved } else { grid };

    execute!(stdout, SetBackgroundColor(theme.bg))?;

    let separator = format!("+{}", "----+".repeat(cols));
    for row in 0..rows {
        execute!(
            stdout,
            MoveTo(x, y + row as u16 * 2),
            SetForegroundColor(theme.border),
            Print(&separator)
        )?;

        let cell_y = y + row as u16 * 2 + 1;
        execute!(stdout, MoveTo(x, cell_y))?;
        for col in 0..cols {
            execute!(
                stdout,
                SetBackgroundColor(theme.bg),
                SetForegroundColor(theme.border),
                Print("|")
            )?;
            render_cell(stdout, app, shown, Position::new(row, col))?;
        }
        execute!(
            stdout,
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.border),
            Print("|")
        )?;
    }
    execute!(
        stdout,
        MoveTo(x, y + rows as u16 * 2),
        SetForegroundColor(theme.border),
        Print(&separator)
    )?;

    Ok(())
}

fn render_cell(stdout: &mut io::Stdout, app: &App, shown: &Grid, pos: Position) -> io::Result<()> {
    let theme = &app.theme;
    let tile = shown.tile(pos);
    let is_cursor = !app.peeking && pos == app.cursor;

    let bg = if is_cursor {
        theme.selected_bg
    } else if tile.is_some() {
        theme.tile_bg
    } else {
        theme.empty_bg
    };

    // A tile sitting in its solved cell gets the "placed" color, the
    // closest a numbered board comes to the picture assembling itself.
    let in_place = tile == Some((pos.row * shown.cols() + pos.col) as u16);
    let fg = if app.peeking {
        theme.info
    } else if in_place {
        theme.placed
    } else {
        theme.tile_fg
    };

    execute!(stdout, SetBackgroundColor(bg), SetForegroundColor(fg))?;
    match tile {
        Some(tile) => execute!(stdout, Print(format!(" {:>2} ", tile + 1)))?,
        None => execute!(stdout, Print("    "))?,
    }
    Ok(())
}

fn render_info_panel(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let game = &app.game;

    let best = app.scores.best(game.mode(), game.rows(), game.cols());
    let best_line = match best {
        Some(score) => format!("{} moves", score.move_count),
        None => "-".to_string(),
    };

    let lines = [
        format!("{} x {}", game.rows(), game.cols()),
        format!("Mode:  {}", game.mode()),
        format!("Moves: {}", game.move_count()),
        format!("Best:  {}", best_line),
        format!("Time:  {}", game.elapsed_string()),
    ];

    execute!(stdout, SetBackgroundColor(theme.bg))?;
    for (i, line) in lines.iter().enumerate() {
        let color = if i == 0 { theme.fg } else { theme.info };
        execute!(
            stdout,
            MoveTo(x, y + i as u16),
            SetForegroundColor(color),
            Print(line)
        )?;
    }

    if app.peeking {
        execute!(
            stdout,
            MoveTo(x, y + lines.len() as u16 + 1),
            SetForegroundColor(theme.key),
            Print("peeking...")
        )?;
    }

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let lines = [
        "arrows move   enter/space push tile",
        "m mode  p peek  r reshuffle  n new",
        "t theme  b best  S save  L load  q quit",
    ];
    execute!(stdout, SetBackgroundColor(theme.bg), SetForegroundColor(theme.info))?;
    for (i, line) in lines.iter().enumerate() {
        execute!(stdout, MoveTo(x, y + i as u16), Print(line))?;
    }
    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let x = term_width.saturating_sub(msg.len() as u16) / 2;
    execute!(
        stdout,
        MoveTo(x, term_height.saturating_sub(2)),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.key),
        Print(msg)
    )?;
    Ok(())
}

fn render_menu(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;

    let (title, options): (&str, Vec<String>) = match app.menu {
        MenuState::NewGame => (
            "New game",
            BOARD_SIZES.iter().map(|&(_, label)| label.to_string()).collect(),
        ),
        MenuState::Theme => (
            "Theme",
            vec!["Dark".to_string(), "Light".to_string(), "High Contrast".to_string()],
        ),
        MenuState::None => return Ok(()),
    };

    let box_width: u16 = 28;
    let box_height = options.len() as u16 + 5;
    let x = term_width.saturating_sub(box_width) / 2;
    let y = term_height.saturating_sub(box_height) / 2;

    let bg = theme.empty_bg;
    for row in 0..box_height {
        execute!(
            stdout,
            MoveTo(x, y + row),
            SetBackgroundColor(bg),
            Print(" ".repeat(box_width as usize))
        )?;
    }

    execute!(
        stdout,
        MoveTo(x + 2, y + 1),
        SetForegroundColor(theme.fg),
        SetBackgroundColor(bg),
        Print(title)
    )?;

    for (i, option) in options.iter().enumerate() {
        let selected = i == app.menu_selection;
        let (fg, item_bg) = if selected {
            (theme.bg, theme.key)
        } else {
            (theme.fg, bg)
        };
        execute!(
            stdout,
            MoveTo(x + 2, y + 3 + i as u16),
            SetForegroundColor(fg),
            SetBackgroundColor(item_bg),
            Print(format!(" {:^22} ", option))
        )?;
    }

    Ok(())
}

fn render_win_screen(
    stdout: &mut io::Stdout,
    app: &mut App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    app.win_screen.resize(term_width, term_height);

    let bg = crossterm::style::Color::Rgb { r: 8, g: 12, b: 20 };

    // Repaint the whole screen dark, then confetti on top.
    for y in 0..term_height {
        execute!(
            stdout,
            MoveTo(0, y),
            SetBackgroundColor(bg),
            Print(" ".repeat(term_width as usize))
        )?;
    }

    for particle in app.win_screen.particles() {
        if particle.is_visible(term_width, term_height) {
            execute!(
                stdout,
                MoveTo(particle.x as u16, particle.y as u16),
                SetBackgroundColor(bg),
                SetForegroundColor(particle.color),
                Print(particle.char)
            )?;
        }
    }

    // Rainbow banner message.
    let message = app.win_screen.current_message().to_string();
    let msg_x = term_width.saturating_sub(message.len() as u16) / 2;
    let msg_y = term_height / 5;
    for (i, ch) in message.chars().enumerate() {
        let hue = (app.win_screen.rainbow_offset() + i as f32 * 0.08) % 1.0;
        execute!(
            stdout,
            MoveTo(msg_x + i as u16, msg_y),
            SetBackgroundColor(bg),
            SetForegroundColor(hue_to_rgb(hue)),
            Print(ch)
        )?;
    }

    // Once the burst has decayed, show the stats overlay.
    if app.win_screen.is_decayed() {
        render_win_stats(stdout, app, term_width, term_height)?;
    }

    Ok(())
}

fn render_win_stats(
    stdout: &mut io::Stdout,
    app: &App,
    term_width: u16,
    term_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let game = &app.game;

    let mut lines: Vec<String> = vec![
        format!("Moves made: {}", game.move_count()),
        format!("Time: {}", game.elapsed_string()),
    ];
    if let Some(record) = app.last_win {
        match record.previous_best {
            Some(previous) => lines.push(format!("Previous best: {}", previous)),
            None => lines.push(format!("First win on {} x {}", game.rows(), game.cols())),
        }
        if record.is_new_best {
            lines.push("NEW BEST!".to_string());
        }
    }
    lines.push(String::new());
    lines.push("[enter] try again  [n] new game".to_string());
    lines.push("[esc] view board   [q] quit".to_string());

    let box_width: u16 = 36;
    let box_height = lines.len() as u16 + 2;
    let x = term_width.saturating_sub(box_width) / 2;
    let y = term_height.saturating_sub(box_height) / 2;

    let bg = theme.empty_bg;
    for row in 0..box_height {
        execute!(
            stdout,
            MoveTo(x, y + row),
            SetBackgroundColor(bg),
            Print(" ".repeat(box_width as usize))
        )?;
    }

    for (i, line) in lines.iter().enumerate() {
        let color = if line == "NEW BEST!" {
            theme.success
        } else if line.starts_with('[') {
            theme.key
        } else {
            theme.fg
        };
        execute!(
            stdout,
            MoveTo(x + 2, y + 1 + i as u16),
            SetBackgroundColor(bg),
            SetForegroundColor(color),
            Print(line)
        )?;
    }

    Ok(())
}

fn render_scores_screen(stdout: &mut io::Stdout, app: &App, term_width: u16) -> io::Result<()> {
    let theme = &app.theme;
    let entries = app.scores.entries();

    let title = "Best scores";
    let x = term_width.saturating_sub(40) / 2;

    execute!(
        stdout,
        MoveTo(x, 2),
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.fg),
        Print(title)
    )?;
    execute!(
        stdout,
        MoveTo(x, 3),
        SetForegroundColor(theme.info),
        Print(format!("{} games won", app.scores.games_won))
    )?;

    if entries.is_empty() {
        execute!(
            stdout,
            MoveTo(x, 5),
            SetForegroundColor(theme.info),
            Print("No wins recorded yet.")
        )?;
    }

    for (i, (key, score)) in entries.iter().enumerate() {
        execute!(
            stdout,
            MoveTo(x, 5 + i as u16),
            SetForegroundColor(theme.fg),
            Print(format!(
                "{:<12} {:>4} moves  {}",
                key,
                score.move_count,
                format_time(score.time_secs)
            ))
        )?;
    }

    execute!(
        stdout,
        MoveTo(x, 7 + entries.len() as u16),
        SetForegroundColor(theme.key),
        Print("[q/esc] back")
    )?;

    Ok(())
}
