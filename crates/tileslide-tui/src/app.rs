use crate::animations::WinScreen;
use crate::game::Game;
use crate::scores::{ScoreBoard, WinRecord};
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tileslide_core::{MoveMode, Position};

/// Board sizes offered in the new-game menu, mirroring the original's
/// difficulty row.
pub const BOARD_SIZES: [(usize, &str); 4] = [
    (3, "3 x 3  easy"),
    (4, "4 x 4  classic"),
    (5, "5 x 5  tricky"),
    (6, "6 x 6  panic"),
];

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Normal gameplay
    Playing,
    /// Win celebration screen
    Win,
    /// Best scores screen
    Scores,
}

/// Menu state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    None,
    NewGame,
    Theme,
}

/// The main application state
pub struct App {
    /// Current game
    pub game: Game,
    /// Currently selected cell position
    pub cursor: Position,
    /// Color theme
    pub theme: Theme,
    /// Current menu state
    pub menu: MenuState,
    /// Selected menu item
    pub menu_selection: usize,
    /// Current screen state
    pub screen_state: ScreenState,
    /// Win screen animation
    pub win_screen: WinScreen,
    /// Best score persistence
    pub scores: ScoreBoard,
    /// Whether the player is peeking at the solved layout
    pub peeking: bool,
    /// Outcome of the last recorded win, for the stats overlay
    pub last_win: Option<WinRecord>,
    /// Message to display
    pub message: Option<String>,
    /// Message timer
    message_timer: u32,
    /// Whether the current game has been recorded (avoids double counting)
    game_recorded: bool,
}

impl App {
    pub fn new(size: usize, mode: MoveMode, theme: Theme) -> Self {
        let game = Game::new(size, size, mode);
        let cursor = Position::new(size / 2, size / 2);
        Self {
            game,
            cursor,
            theme,
            menu: MenuState::None,
            menu_selection: 0,
            screen_state: ScreenState::Playing,
            win_screen: WinScreen::new(),
            scores: ScoreBoard::load(),
            peeking: false,
            last_win: None,
            message: None,
            message_timer: 0,
            game_recorded: false,
        }
    }

    /// Get the tick rate based on current screen
    pub fn get_tick_rate(&self) -> Duration {
        match self.screen_state {
            // 30 FPS while confetti is falling
            ScreenState::Win => Duration::from_millis(33),
            ScreenState::Playing | ScreenState::Scores => Duration::from_millis(100),
        }
    }

    /// Update animations and timers (called every tick)
    pub fn tick(&mut self) {
        if self.message_timer > 0 {
            self.message_timer -= 1;
            if self.message_timer == 0 {
                self.message = None;
            }
        }

        match self.screen_state {
            ScreenState::Win => {
                self.win_screen.update();
            }
            ScreenState::Playing => {
                if self.game.is_completed() && !self.game_recorded {
                    self.record_win();
                    self.screen_state = ScreenState::Win;
                    self.win_screen.reset();
                }
            }
            ScreenState::Scores => {}
        }
    }

    fn record_win(&mut self) {
        self.game_recorded = true;
        let record = self.scores.record_win(
            self.game.mode(),
            self.game.rows(),
            self.game.cols(),
            self.game.move_count(),
            self.game.elapsed().as_secs(),
        );
        self.scores.save();
        self.last_win = Some(record);
    }

    /// Show a temporary message
    pub fn show_message(&mut self, msg: &str) {
        self.message = Some(msg.to_string());
        self.message_timer = 30; // ~3 seconds at 100ms poll
    }

    /// Start a fresh game, keeping the current move rule.
    fn new_game(&mut self, size: usize) {
        self.game = Game::new(size, size, self.game.mode());
        self.cursor = Position::new(size / 2, size / 2);
        self.peeking = false;
        self.game_recorded = false;
        self.last_win = None;
        self.screen_state = ScreenState::Playing;
        self.menu = MenuState::None;
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        match self.screen_state {
            ScreenState::Win => self.handle_win_key(key),
            ScreenState::Scores => self.handle_scores_key(key),
            ScreenState::Playing => match self.menu {
                MenuState::None => self.handle_game_key(key),
                MenuState::NewGame | MenuState::Theme => self.handle_menu_key(key),
            },
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            // Move the tile under the cursor into the empty cell
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.game.move_tile(self.cursor);
            }

            // Move rule toggle
            KeyCode::Char('m') => {
                let mode = match self.game.mode() {
                    MoveMode::Slide => MoveMode::Swap,
                    MoveMode::Swap => MoveMode::Slide,
                };
                self.game.set_mode(mode);
                self.show_message(&format!("Mode: {}", mode));
            }

            // Peek at the solved layout
            KeyCode::Char('p') => {
                self.peeking = !self.peeking;
            }

            // Reshuffle with the same settings
            KeyCode::Char('r') => {
                let size = self.game.rows();
                self.new_game(size);
                self.show_message("Reshuffled");
            }

            // New game menu
            KeyCode::Char('n') => {
                self.menu = MenuState::NewGame;
                self.menu_selection = BOARD_SIZES
                    .iter()
                    .position(|&(size, _)| size == self.game.rows())
                    .unwrap_or(1);
            }

            // Theme menu
            KeyCode::Char('t') => {
                self.menu = MenuState::Theme;
                self.menu_selection = 0;
            }

            // Best scores screen
            KeyCode::Char('b') => {
                self.screen_state = ScreenState::Scores;
            }

            // Save
            KeyCode::Char('S') if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.save_game();
            }

            // Load
            KeyCode::Char('L') if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.load_game();
            }

            _ => {}
        }

        AppAction::Continue
    }

    fn handle_menu_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                self.menu = MenuState::None;
            }

            KeyCode::Up | KeyCode::Char('k') => {
                if self.menu_selection > 0 {
                    self.menu_selection -= 1;
                }
            }

            KeyCode::Down | KeyCode::Char('j') => {
                let max = match self.menu {
                    MenuState::NewGame => BOARD_SIZES.len() - 1,
                    MenuState::Theme => 2,
                    MenuState::None => 0,
                };
                if self.menu_selection < max {
                    self.menu_selection += 1;
                }
            }

            KeyCode::Enter | KeyCode::Char(' ') => match self.menu {
                MenuState::NewGame => {
                    let (size, _) = BOARD_SIZES[self.menu_selection];
                    self.new_game(size);
                    self.show_message(&format!("New {size} x {size} game"));
                }
                MenuState::Theme => {
                    self.theme = match self.menu_selection {
                        0 => Theme::dark(),
                        1 => Theme::light(),
                        _ => Theme::high_contrast(),
                    };
                    self.menu = MenuState::None;
                }
                MenuState::None => {}
            },

            _ => {}
        }

        AppAction::Continue
    }

    fn handle_win_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') => return AppAction::Quit,
            KeyCode::Enter | KeyCode::Char(' ') => {
                // Quick restart with the same settings
                let size = self.game.rows();
                self.new_game(size);
                self.show_message("Try again!");
            }
            KeyCode::Char('n') => {
                self.screen_state = ScreenState::Playing;
                self.menu = MenuState::NewGame;
                self.menu_selection = 0;
            }
            KeyCode::Char('b') => {
                self.screen_state = ScreenState::Scores;
            }
            KeyCode::Esc => {
                // Look at the finished board
                self.screen_state = ScreenState::Playing;
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_scores_key(&mut self, key: KeyEvent) -> AppAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.screen_state = ScreenState::Playing;
            }
            _ => {}
        }
        AppAction::Continue
    }

    fn move_cursor(&mut self, row_delta: i32, col_delta: i32) {
        let max_row = (self.game.rows() - 1) as i32;
        let max_col = (self.game.cols() - 1) as i32;
        let new_row = (self.cursor.row as i32 + row_delta).clamp(0, max_row) as usize;
        let new_col = (self.cursor.col as i32 + col_delta).clamp(0, max_col) as usize;
        self.cursor = Position::new(new_row, new_col);
    }

    /// Get the save file path
    fn save_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tileslide_save.json")
    }

    /// Save the current game
    fn save_game(&mut self) {
        let json = self.game.serialize();
        match fs::write(Self::save_path(), json) {
            Ok(_) => self.show_message("Game saved"),
            Err(_) => self.show_message("Failed to save"),
        }
    }

    /// Load a saved game
    fn load_game(&mut self) {
        match fs::read_to_string(Self::save_path()) {
            Ok(json) => {
                if let Some(game) = Game::deserialize(&json) {
                    self.cursor = Position::new(game.rows() / 2, game.cols() / 2);
                    self.game_recorded = game.is_completed();
                    self.last_win = None;
                    self.peeking = false;
                    self.screen_state = ScreenState::Playing;
                    self.game = game;
                    self.show_message("Game loaded");
                } else {
                    self.show_message("Invalid save file");
                }
            }
            Err(_) => self.show_message("No save file found"),
        }
    }
}
