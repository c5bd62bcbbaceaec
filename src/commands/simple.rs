//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Reads moves and commands from any
//! `BufRead` so sessions can be scripted.

use crate::commands::compare_strategies;
use crate::config::Tier;
use crate::game::{GameSession, MoveOutcome};
use crate::output::formatters::{format_path, score_bar};
use crate::search::SearchStrategy;
use clap::ValueEnum;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Type a word to move, or one of:
  hint [bfs|ucs|astar]   suggest the next word
  solve                  show a shortest path from here
  compare                run every strategy from here
  new                    start a new round
  tier <name>            switch to beginner, advanced or challenge
  custom <start> <goal>  play your own pair
  two                    toggle two-player mode
  help                   show this text
  quit                   leave";

/// Run the line-based game loop until `quit` or end of input
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, I, O>(
    session: &mut GameSession,
    rng: &mut R,
    mut strategy: SearchStrategy,
    input: I,
    mut out: O,
) -> io::Result<()>
where
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{}", "  W O R D   L A D D E R".bright_green().bold())?;
    writeln!(out, "{}\n", "═".repeat(60).bright_cyan())?;
    writeln!(out, "{HELP}\n")?;
    print_round(session, &mut out)?;

    for line in input.lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        };

        match command.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                writeln!(out, "\nThanks for playing!")?;
                return Ok(());
            }
            "help" | "?" => writeln!(out, "{HELP}")?,
            "new" | "n" => match session.new_game(rng) {
                Ok(()) => print_round(session, &mut out)?,
                Err(err) => writeln!(out, "{}", err.to_string().red())?,
            },
            "hint" | "h" => {
                if let Some(name) = parts.next() {
                    match SearchStrategy::from_name(name) {
                        Some(parsed) => strategy = parsed,
                        None => {
                            writeln!(out, "{}", format!("Unknown strategy '{name}'").red())?;
                            continue;
                        }
                    }
                }
                match session.hint(strategy) {
                    Ok(Some(word)) => writeln!(out, "Hint ({strategy}): try {}", word.text().bright_yellow())?,
                    Ok(None) => writeln!(out, "No hint available")?,
                    Err(err) => writeln!(out, "{}", err.to_string().red())?,
                }
            }
            "solve" => match session.solve(strategy) {
                Ok(Some(result)) => writeln!(
                    out,
                    "Shortest path ({} moves): {}",
                    result.cost,
                    format_path(&result.path)
                )?,
                Ok(None) => writeln!(out, "No path from here")?,
                Err(err) => writeln!(out, "{}", err.to_string().red())?,
            },
            "compare" => {
                let comparison = compare_strategies(
                    session.graph(),
                    session.current().text(),
                    session.target().text(),
                );
                match comparison {
                    Ok(comparison) => {
                        for run in &comparison.runs {
                            let cost = run.cost().map_or_else(|| "-".to_string(), |c| c.to_string());
                            writeln!(
                                out,
                                "  {:<4} cost {cost:>2}  expanded {:>5}  {:?}",
                                run.strategy.name(),
                                run.stats.expanded,
                                run.duration
                            )?;
                        }
                    }
                    Err(err) => writeln!(out, "{}", err.to_string().red())?,
                }
            }
            "tier" => match parts.next().map(|name| Tier::from_str(name, true)) {
                Some(Ok(tier)) => match session.change_tier(tier, rng) {
                    Ok(()) => print_round(session, &mut out)?,
                    Err(err) => writeln!(out, "{}", err.to_string().red())?,
                },
                _ => writeln!(out, "Usage: tier <beginner|advanced|challenge>")?,
            },
            "custom" => match (parts.next(), parts.next()) {
                (Some(start), Some(goal)) => match session.set_custom_pair(start, goal) {
                    Ok(()) => print_round(session, &mut out)?,
                    Err(err) => writeln!(out, "{}", err.to_string().red())?,
                },
                _ => writeln!(out, "Usage: custom <start> <goal>")?,
            },
            "two" => {
                let enabled = session.scoreboard().is_none();
                session.set_two_player(enabled);
                writeln!(
                    out,
                    "Two-player mode {}",
                    if enabled { "on" } else { "off" }
                )?;
            }
            _ => play_move(session, line.trim(), &mut out)?,
        }

        write!(out, "> ")?;
        out.flush()?;
    }

    Ok(())
}

fn play_move<O: Write>(session: &mut GameSession, word: &str, out: &mut O) -> io::Result<()> {
    match session.make_move(word) {
        Ok(MoveOutcome::Continue { moves_left }) => {
            writeln!(
                out,
                "{} → {}  ({moves_left} moves left, score {})",
                format_path(session.moves()),
                session.target().text().bright_yellow(),
                session.score()
            )?;
        }
        Ok(MoveOutcome::Won { score, player }) => {
            writeln!(out, "\n{}", "Solved!".bright_green().bold())?;
            writeln!(out, "  Path:  {}", format_path(session.moves()))?;
            writeln!(out, "  Score: {score}")?;
            if let (Some(player), Some(board)) = (player, session.scoreboard()) {
                writeln!(out, "  {player} wins the round; {} is up next", board.current())?;
            }
            writeln!(out, "Type 'new' to play again.")?;
        }
        Ok(MoveOutcome::OutOfMoves) => {
            writeln!(out, "\n{}", "Out of moves!".red().bold())?;
            writeln!(out, "  The target was {}", session.target().text().bright_yellow())?;
            writeln!(out, "Type 'new' to play again.")?;
        }
        Err(err) => writeln!(out, "{}", err.to_string().red())?,
    }
    Ok(())
}

fn print_round<O: Write>(session: &GameSession, out: &mut O) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "{} tier: {} → {}  ({} moves)",
        session.tier(),
        session.current().text().bright_white().bold(),
        session.target().text().bright_yellow().bold(),
        session.config().max_moves
    )?;

    let policy = session.policy();
    if !policy.is_empty() {
        let words: Vec<&str> = policy.banned_words().map(|w| w.text()).collect();
        let letters: String = policy.banned_letters().collect();
        writeln!(out, "  Banned words:   {}", words.join(", ").red())?;
        writeln!(out, "  Banned letters: {}", letters.red())?;
    }

    if let Some(board) = session.scoreboard() {
        writeln!(out, "  {} to play", board.current())?;
    }

    writeln!(out, "  Score: {}", score_bar(session.score(), 20))?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    write!(out, "> ")?;
    out.flush()
}
