//! Application shell: menu, options and the playing screen around a session.
//!
//! Inputs are UI-agnostic enums so the screen logic can be driven from tests
//! without a terminal.

use crate::backdrop::Backdrop;
use crate::config::GameSettings;
use crate::constants::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::session::SessionController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Options,
    Playing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Play,
    Options,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Play, MenuItem::Options, MenuItem::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Options => "Options",
            Self::Quit => "Quit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsRow {
    Difficulty,
    BoardSize,
    Back,
}

impl OptionsRow {
    pub const ALL: [OptionsRow; 3] = [
        OptionsRow::Difficulty,
        OptionsRow::BoardSize,
        OptionsRow::Back,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Difficulty => "Difficulty",
            Self::BoardSize => "Board size",
            Self::Back => "Back",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Select,
    Cancel,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsInput {
    Up,
    Down,
    Left,
    Right,
    Select,
    Cancel,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayInput {
    Up,
    Down,
    Left,
    Right,
    /// Primary action at the cursor.
    Reveal,
    /// Secondary action at the cursor.
    Flag,
    /// Primary action at a pointer-selected cell.
    RevealAt(usize, usize),
    /// Secondary action at a pointer-selected cell.
    FlagAt(usize, usize),
    ToggleFlagMode,
    Reset,
    Back,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppCommand {
    Continue,
    Quit,
}

pub struct App {
    screen: Screen,
    menu_index: usize,
    options_index: usize,
    settings: GameSettings,
    session: SessionController,
    backdrop: Backdrop,
    /// 1-indexed (row, col) keyboard cursor on the board.
    cursor: (usize, usize),
    quit_requested: bool,
}

impl App {
    /// Build the app; a seed makes mine placement and effects reproducible.
    pub fn new(settings: GameSettings, seed: Option<u64>) -> Self {
        let (session, backdrop) = match seed {
            Some(seed) => (
                SessionController::with_seed(settings, seed),
                Backdrop::with_seed(seed),
            ),
            None => (SessionController::new(settings), Backdrop::new()),
        };

        Self {
            screen: Screen::Menu,
            menu_index: 0,
            options_index: 0,
            settings,
            session,
            backdrop,
            cursor: (1, 1),
            quit_requested: false,
        }
    }

    pub fn process_menu_input(&mut self, input: MenuInput) -> AppCommand {
        let count = MenuItem::ALL.len();
        match input {
            MenuInput::Up => self.menu_index = (self.menu_index + count - 1) % count,
            MenuInput::Down => self.menu_index = (self.menu_index + 1) % count,
            MenuInput::Select => match self.selected_menu_item() {
                MenuItem::Play => self.start_playing(),
                MenuItem::Options => {
                    self.options_index = 0;
                    self.set_screen(Screen::Options);
                }
                MenuItem::Quit => self.quit_requested = true,
            },
            MenuInput::Cancel => self.quit_requested = true,
            MenuInput::Other => {}
        }
        self.command()
    }

    pub fn process_options_input(&mut self, input: OptionsInput) -> AppCommand {
        let count = OptionsRow::ALL.len();
        match input {
            OptionsInput::Up => self.options_index = (self.options_index + count - 1) % count,
            OptionsInput::Down => self.options_index = (self.options_index + 1) % count,
            OptionsInput::Left => self.adjust_option(false),
            OptionsInput::Right => self.adjust_option(true),
            OptionsInput::Select => {
                if self.selected_options_row() == OptionsRow::Back {
                    self.set_screen(Screen::Menu);
                }
            }
            OptionsInput::Cancel => self.set_screen(Screen::Menu),
            OptionsInput::Other => {}
        }
        self.command()
    }

    pub fn process_play_input(&mut self, input: PlayInput) -> AppCommand {
        let size = self.session.board().size();
        let (row, col) = self.cursor;
        match input {
            PlayInput::Up => self.cursor.0 = row.saturating_sub(1).max(1),
            PlayInput::Down => self.cursor.0 = (row + 1).min(size),
            PlayInput::Left => self.cursor.1 = col.saturating_sub(1).max(1),
            PlayInput::Right => self.cursor.1 = (col + 1).min(size),
            PlayInput::Reveal => {
                self.session.handle_primary_action(row, col);
            }
            PlayInput::Flag => {
                self.session.handle_secondary_action(row, col);
            }
            PlayInput::RevealAt(row, col) => {
                self.cursor = (row, col);
                self.session.handle_primary_action(row, col);
            }
            PlayInput::FlagAt(row, col) => {
                self.cursor = (row, col);
                self.session.handle_secondary_action(row, col);
            }
            PlayInput::ToggleFlagMode => {
                self.session.toggle_flag_mode();
            }
            PlayInput::Reset => {
                self.session.reset_game();
                self.center_cursor();
            }
            PlayInput::Back => self.set_screen(Screen::Menu),
            PlayInput::Other => {}
        }
        self.command()
    }

    /// Advance one frame. The session only runs while its screen is shown.
    pub fn tick(&mut self, dt: f64) -> AppCommand {
        self.backdrop.tick(dt);
        if self.screen == Screen::Playing {
            self.session.tick(dt);
        }
        self.command()
    }

    fn command(&self) -> AppCommand {
        if self.quit_requested {
            AppCommand::Quit
        } else {
            AppCommand::Continue
        }
    }

    fn start_playing(&mut self) {
        self.session
            .start_new_game(self.settings.difficulty, self.settings.board_size);
        self.center_cursor();
        self.set_screen(Screen::Playing);
    }

    fn center_cursor(&mut self) {
        let middle = self.session.board().size() / 2 + 1;
        self.cursor = (middle, middle);
    }

    fn adjust_option(&mut self, forward: bool) {
        let updated = match self.selected_options_row() {
            OptionsRow::Difficulty => {
                let difficulty = if forward {
                    self.settings.difficulty.next()
                } else {
                    self.settings.difficulty.prev()
                };
                self.settings.with_difficulty(difficulty)
            }
            OptionsRow::BoardSize => {
                let size = if forward {
                    (self.settings.board_size + 1).min(MAX_BOARD_SIZE)
                } else {
                    self.settings.board_size.saturating_sub(1).max(MIN_BOARD_SIZE)
                };
                self.settings.with_board_size(size)
            }
            OptionsRow::Back => return,
        };

        match updated {
            Ok(settings) => self.settings = settings,
            Err(err) => log::warn!("Rejected settings change: {}", err),
        }
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            log::info!("Screen {:?} -> {:?}", self.screen, screen);
            self.screen = screen;
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn menu_index(&self) -> usize {
        self.menu_index
    }

    pub fn selected_menu_item(&self) -> MenuItem {
        MenuItem::ALL[self.menu_index]
    }

    pub fn options_index(&self) -> usize {
        self.options_index
    }

    pub fn selected_options_row(&self) -> OptionsRow {
        OptionsRow::ALL[self.options_index]
    }

    pub fn settings(&self) -> GameSettings {
        self.settings
    }

    pub fn session(&self) -> &SessionController {
        &self.session
    }

    pub fn backdrop(&self) -> &Backdrop {
        &self.backdrop
    }

    pub fn cursor(&self) -> (usize, usize) {
        self.cursor
    }
}
