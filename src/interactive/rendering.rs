//! TUI rendering with ratatui
//!
//! Layout for the word ladder game.

use super::app::{App, InputMode, MessageStyle};
use crate::config::STARTING_SCORE;
use crate::game::GameStatus;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_ladder(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("🪜 WORD LADDER | {} tier", app.session.tier());
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Start word, every move so far, then the target
fn render_ladder(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let word_style = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = Vec::with_capacity(session.moves().len() + 4);
    lines.push(Line::from(Span::styled(
        session.start().text().to_uppercase(),
        word_style.fg(Color::White),
    )));

    for (i, word) in session.moves().iter().enumerate() {
        let color = if word == session.target() {
            Color::Green
        } else {
            Color::Yellow
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::styled(word.text().to_uppercase(), word_style.fg(color)),
        ]));
    }

    if session.status() == GameStatus::InProgress {
        lines.push(Line::from("  ⋮"));
        if let Some(hint) = &app.hint {
            lines.push(Line::from(Span::styled(
                format!("  {} ?", hint.text().to_uppercase()),
                Style::default().fg(Color::Magenta),
            )));
        }
        lines.push(Line::from(Span::styled(
            session.target().text().to_uppercase(),
            word_style.fg(Color::Green),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Ladder ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Moves gauge
            Constraint::Length(3), // Score gauge
            Constraint::Length(6), // Round details
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_moves(f, app, chunks[0]);
    render_score(f, app, chunks[1]);
    render_round(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
}

fn render_moves(f: &mut Frame, app: &App, area: Rect) {
    let max_moves = app.session.config().max_moves;
    let used = app.session.moves().len();
    let ratio = if max_moves == 0 {
        0.0
    } else {
        (used as f64 / max_moves as f64).min(1.0)
    };

    let gauge = Gauge::default()
        .block(Block::default().title(" Moves ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(if ratio > 0.75 { Color::Red } else { Color::Cyan }))
        .ratio(ratio)
        .label(format!("{used}/{max_moves}"));
    f.render_widget(gauge, area);
}

fn render_score(f: &mut Frame, app: &App, area: Rect) {
    let score = app.session.score();
    let ratio = (f64::from(score) / f64::from(STARTING_SCORE)).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(Block::default().title(" Score ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(ratio)
        .label(score.to_string());
    f.render_widget(gauge, area);
}

fn render_round(f: &mut Frame, app: &App, area: Rect) {
    let session = &app.session;
    let policy = session.policy();

    let mut lines = vec![Line::from(format!(
        "{} → {}",
        session.current().text().to_uppercase(),
        session.target().text().to_uppercase()
    ))];

    if !policy.is_empty() {
        let words: Vec<&str> = policy.banned_words().map(|w| w.text()).collect();
        let letters: String = policy.banned_letters().collect();
        lines.push(Line::from(Span::styled(
            format!("Banned: {}", words.join(" ")),
            Style::default().fg(Color::Red),
        )));
        lines.push(Line::from(Span::styled(
            format!("Letters: {}", letters.to_uppercase()),
            Style::default().fg(Color::Red),
        )));
    }

    if let Some(board) = session.scoreboard() {
        lines.push(Line::from(format!(
            "P1 {} | P2 {} | {} to play",
            board.score(crate::game::Player::One),
            board.score(crate::game::Player::Two),
            board.current()
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Round ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Move => (" Next word | Enter submit | Tab hint ", Color::Yellow),
        InputMode::CustomPair => (" Start and goal words | Esc to cancel ", Color::Cyan),
        InputMode::RoundOver => (" Round over | n new game | Esc quit ", Color::Green),
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(25),
            Constraint::Percentage(55),
        ])
        .split(area);

    let strategy = Paragraph::new(format!("Hints: {}", app.strategy)).alignment(Alignment::Center);
    f.render_widget(strategy, chunks[0]);

    let stats = Paragraph::new(format!(
        "Rounds: {} | Won: {:.0}%",
        app.stats.rounds_played,
        app.stats.win_rate()
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("F1-F3 tier  ^S strategy  ^N new  ^P pair  ^T 2P")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Tier;
    use crate::game::GameSession;
    use crate::search::SearchStrategy;
    use crate::wordlists::loader::parse_sections;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        let dictionaries = parse_sections("# 3-letter\ncat bat hat hot dot cot cog dog\n").unwrap();
        let mut rng = StdRng::seed_from_u64(8);
        let session = GameSession::new(dictionaries, Tier::Beginner, &mut rng).unwrap();
        App::new(session, SearchStrategy::AStar, rng)
    }

    #[test]
    fn renders_round() {
        let mut app = app();
        app.session.set_custom_pair("cat", "dog").unwrap();
        app.play_move("cot");

        let screen = screen(&app);
        assert!(screen.contains("WORD LADDER"));
        assert!(screen.contains("COT"));
        assert!(screen.contains("DOG"));
        assert!(screen.contains("1/10"));
        assert!(screen.contains("Hints: A*"));
    }

    #[test]
    fn renders_hint_and_round_over() {
        let mut app = app();
        app.session.set_custom_pair("cat", "hat").unwrap();
        app.show_hint();
        assert!(screen(&app).contains("HAT ?"));

        app.play_move("hat");
        assert!(screen(&app).contains("Round over"));
    }
}
