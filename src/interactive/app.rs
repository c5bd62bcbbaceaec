//! TUI application state and logic

use crate::config::Tier;
use crate::core::Word;
use crate::game::{GameSession, GameStatus, MoveOutcome};
use crate::output::formatters::format_path;
use crate::search::SearchStrategy;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Messages kept on screen
const MAX_MESSAGES: usize = 6;

/// Application state
pub struct App {
    pub session: GameSession,
    pub strategy: SearchStrategy,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub messages: Vec<Message>,
    pub hint: Option<Word>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the next word of the ladder
    Move,
    /// Typing "start goal" for a custom round
    CustomPair,
    /// Round finished, waiting for a new game
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    pub best_score: Option<i32>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds_played == 0 {
            0.0
        } else {
            self.rounds_won as f64 / self.rounds_played as f64 * 100.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(session: GameSession, strategy: SearchStrategy, rng: StdRng) -> Self {
        let mut app = Self {
            session,
            strategy,
            input_buffer: String::new(),
            input_mode: InputMode::Move,
            messages: Vec::new(),
            hint: None,
            stats: Statistics::default(),
            should_quit: false,
            rng,
        };
        app.add_message(
            "Change one letter at a time to reach the target.",
            MessageStyle::Info,
        );
        app.announce_round();
        app
    }

    /// Dispatch one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc if self.input_mode == InputMode::CustomPair => {
                self.input_mode = InputMode::Move;
                self.input_buffer.clear();
                self.add_message("Cancelled custom pair", MessageStyle::Info);
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Char('s') if ctrl => self.cycle_strategy(),
            KeyCode::Char('t') if ctrl => self.toggle_two_player(),
            KeyCode::Char('p') if ctrl => {
                self.input_mode = InputMode::CustomPair;
                self.input_buffer.clear();
                self.add_message("Type a start and goal word, then Enter", MessageStyle::Info);
            }
            KeyCode::F(n @ 1..=3) => self.change_tier(Tier::ALL[usize::from(n - 1)]),
            KeyCode::Tab => self.show_hint(),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) if !ctrl => match self.input_mode {
                InputMode::Move if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < self.session.config().word_length {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                InputMode::CustomPair if c.is_ascii_alphabetic() || c == ' ' => {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
                InputMode::RoundOver if c == 'n' => self.new_game(),
                _ => {}
            },
            _ => {}
        }
    }

    fn submit(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);
        match self.input_mode {
            InputMode::Move => self.play_move(&input),
            InputMode::CustomPair => self.custom_pair(&input),
            InputMode::RoundOver => {}
        }
    }

    pub fn play_move(&mut self, input: &str) {
        self.hint = None;

        match self.session.make_move(input) {
            Ok(MoveOutcome::Continue { moves_left }) => {
                self.add_message(
                    &format!("{} ({moves_left} moves left)", format_path(self.session.moves())),
                    MessageStyle::Info,
                );
            }
            Ok(MoveOutcome::Won { score, player }) => {
                self.stats.rounds_played += 1;
                self.stats.rounds_won += 1;
                self.stats.best_score = Some(self.stats.best_score.map_or(score, |best| best.max(score)));
                self.input_mode = InputMode::RoundOver;

                let winner = player.map(|p| format!("{p} wins! ")).unwrap_or_default();
                self.add_message(
                    &format!("🎉 {winner}Solved in {} moves, score {score}", self.session.moves().len()),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new game or Esc to quit.", MessageStyle::Info);
            }
            Ok(MoveOutcome::OutOfMoves) => {
                self.stats.rounds_played += 1;
                self.input_mode = InputMode::RoundOver;
                self.add_message(
                    &format!("Out of moves! The target was {}", self.session.target()),
                    MessageStyle::Error,
                );
                self.reveal_solution();
                self.add_message("Press 'n' for a new game or Esc to quit.", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn show_hint(&mut self) {
        if self.session.status() != GameStatus::InProgress {
            return;
        }

        match self.session.hint(self.strategy) {
            Ok(Some(word)) => {
                self.add_message(
                    &format!("Hint ({}): try {}", self.strategy, word.text().to_uppercase()),
                    MessageStyle::Info,
                );
                self.hint = Some(word);
            }
            Ok(None) => self.add_message("No path from here", MessageStyle::Error),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn reveal_solution(&mut self) {
        if let Ok(Some(result)) = self.session.solve(self.strategy) {
            self.add_message(
                &format!("Shortest from here: {}", format_path(&result.path)),
                MessageStyle::Info,
            );
        }
    }

    pub fn new_game(&mut self) {
        if self.session.status() == GameStatus::InProgress && !self.session.moves().is_empty() {
            self.stats.rounds_played += 1;
        }

        match self.session.new_game(&mut self.rng) {
            Ok(()) => self.start_fresh(),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn change_tier(&mut self, tier: Tier) {
        match self.session.change_tier(tier, &mut self.rng) {
            Ok(()) => self.start_fresh(),
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn custom_pair(&mut self, input: &str) {
        let mut words = input.split_whitespace();
        let (Some(start), Some(goal), None) = (words.next(), words.next(), words.next()) else {
            self.input_buffer = input.to_string();
            self.add_message("Enter exactly two words", MessageStyle::Error);
            return;
        };

        match self.session.set_custom_pair(start, goal) {
            Ok(()) => self.start_fresh(),
            Err(err) => {
                self.input_buffer = input.to_string();
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn cycle_strategy(&mut self) {
        self.strategy = self.strategy.next();
        self.hint = None;
        self.add_message(&format!("Hint strategy: {}", self.strategy), MessageStyle::Info);
    }

    pub fn toggle_two_player(&mut self) {
        let enabled = self.session.scoreboard().is_none();
        self.session.set_two_player(enabled);
        self.add_message(
            if enabled { "Two-player mode on" } else { "Two-player mode off" },
            MessageStyle::Info,
        );
    }

    fn start_fresh(&mut self) {
        self.input_mode = InputMode::Move;
        self.input_buffer.clear();
        self.hint = None;
        self.announce_round();
    }

    fn announce_round(&mut self) {
        let text = format!(
            "{} round: {} → {}",
            self.session.tier(),
            self.session.current().text().to_uppercase(),
            self.session.target().text().to_uppercase()
        );
        self.add_message(&text, MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore the terminal even when the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only key presses; Windows also reports releases
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::parse_sections;
    use rand::SeedableRng;

    fn app() -> App {
        let dictionaries = parse_sections("# 3-letter\ncat bat hat hot dot cot cog dog\n").unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let session = GameSession::new(dictionaries, Tier::Beginner, &mut rng).unwrap();
        App::new(session, SearchStrategy::Bfs, rng)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_and_winning() {
        let mut app = app();
        app.session.set_custom_pair("cat", "hot").unwrap();

        type_text(&mut app, "hat");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "HOT");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.rounds_won, 1);
        assert_eq!(app.stats.best_score, Some(90));
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn input_is_capped_at_word_length() {
        let mut app = app();
        type_text(&mut app, "cats");
        assert_eq!(app.input_buffer, "cat");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "ca");
    }

    #[test]
    fn rejected_move_shows_error() {
        let mut app = app();
        app.session.set_custom_pair("cat", "dog").unwrap();

        type_text(&mut app, "dog");
        press(&mut app, KeyCode::Enter);

        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(app.session.moves().is_empty());
    }

    #[test]
    fn tab_gives_hint() {
        let mut app = app();
        app.session.set_custom_pair("cat", "dog").unwrap();

        press(&mut app, KeyCode::Tab);

        assert_eq!(app.hint.as_ref().map(Word::text), Some("cot"));
    }

    #[test]
    fn strategy_cycles() {
        let mut app = app();
        ctrl(&mut app, 's');
        assert_eq!(app.strategy, SearchStrategy::Ucs);
        ctrl(&mut app, 's');
        ctrl(&mut app, 's');
        assert_eq!(app.strategy, SearchStrategy::Bfs);
    }

    #[test]
    fn function_keys_change_tier() {
        let mut app = app();
        press(&mut app, KeyCode::F(3));

        assert_eq!(app.session.tier(), Tier::Challenge);
        assert_eq!(app.session.current().len(), 4);
        assert_eq!(app.input_mode, InputMode::Move);
    }

    #[test]
    fn custom_pair_mode() {
        let mut app = app();
        ctrl(&mut app, 'p');
        assert_eq!(app.input_mode, InputMode::CustomPair);

        type_text(&mut app, "cat dog");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::Move);
        assert_eq!(app.session.current().text(), "cat");
        assert_eq!(app.session.target().text(), "dog");
    }

    #[test]
    fn bad_custom_pair_keeps_input() {
        let mut app = app();
        ctrl(&mut app, 'p');
        type_text(&mut app, "cat zzz");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.input_mode, InputMode::CustomPair);
        assert_eq!(app.input_buffer, "cat zzz");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Move);
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_keys() {
        let mut first = app();
        ctrl(&mut first, 'c');
        assert!(first.should_quit);

        let mut second = app();
        press(&mut second, KeyCode::Esc);
        assert!(second.should_quit);
    }

    #[test]
    fn messages_are_bounded() {
        let mut app = app();
        for i in 0..20 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "19");
    }
}
