//! Word Ladder - CLI
//!
//! Word ladder game and solver with TUI and CLI modes.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use word_ladder::{
    commands::{compare_strategies, describe_graph, run_benchmark, run_simple, solve_pair},
    config::Tier,
    core::{ExclusionPolicy, Word},
    game::{GameSession, sample_policy},
    graph::WordGraph,
    logging::init_tracing,
    output::{print_benchmark_result, print_comparison, print_graph_report, print_solve_report},
    search::{PathFinder, SearchStrategy},
    wordlists::{Dictionaries, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder game with BFS, UCS and A* solvers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty tier (defaults to beginner, or the tier matching the words)
    #[arg(short, long, global = true, value_enum)]
    tier: Option<Tier>,

    /// Search strategy for solving and hints
    #[arg(short, long, global = true, value_enum, default_value_t = SearchStrategy::Bfs)]
    strategy: SearchStrategy,

    /// Sectioned dictionary file ('# 3-letter words' headers); embedded lists otherwise
    #[arg(short, long, global = true, env = "WORD_LADDER_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Seed for reproducible word pairs and obstacles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Debug-level logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log filter, e.g. 'trace' or 'word_ladder::search=debug'
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game without the TUI
    Simple,

    /// Find a shortest ladder between two words
    Solve {
        start: String,
        goal: String,

        /// Draw random banned words and letters before searching
        #[arg(long)]
        obstacles: bool,
    },

    /// Run every strategy on the same pair
    Compare {
        start: String,
        goal: String,

        /// Draw random banned words and letters before searching
        #[arg(long)]
        obstacles: bool,
    },

    /// Show word graph statistics
    Graph {
        /// Print every adjacency list
        #[arg(short, long)]
        list: bool,

        /// Draw random banned words and letters first
        #[arg(long)]
        obstacles: bool,
    },

    /// Benchmark the strategies on random solvable pairs
    Benchmark {
        /// Number of word pairs to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.log_level.as_deref())
        .map_err(|e| anyhow!(e))
        .context("Failed to initialize logging")?;

    let dictionaries = load_dictionaries(cli.dictionary.as_deref())?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let tier = cli.tier.unwrap_or_default();
            run_play_command(dictionaries, tier, cli.strategy, rng)
        }
        Commands::Simple => {
            let tier = cli.tier.unwrap_or_default();
            let mut session = GameSession::new(dictionaries, tier, &mut rng)?;
            run_simple(
                &mut session,
                &mut rng,
                cli.strategy,
                io::stdin().lock(),
                io::stdout().lock(),
            )
            .context("Simple mode failed")
        }
        Commands::Solve {
            start,
            goal,
            obstacles,
        } => {
            let tier = cli.tier.unwrap_or_else(|| tier_for(&start));
            let graph = build_graph(&dictionaries, tier, obstacles, &mut rng);
            let report = solve_pair(&graph, &start, &goal, cli.strategy)?;
            print_solve_report(&report, cli.verbose);
            Ok(())
        }
        Commands::Compare {
            start,
            goal,
            obstacles,
        } => {
            let tier = cli.tier.unwrap_or_else(|| tier_for(&start));
            let graph = build_graph(&dictionaries, tier, obstacles, &mut rng);
            let comparison = compare_strategies(&graph, &start, &goal)?;
            print_comparison(&comparison);
            Ok(())
        }
        Commands::Graph { list, obstacles } => {
            let tier = cli.tier.unwrap_or_default();
            let policy = draw_obstacles(&dictionaries, tier, obstacles, &mut rng);
            let graph = WordGraph::build(dictionaries.get(tier), Some(&policy));
            print_graph_report(&describe_graph(&graph, tier, &policy, list));
            Ok(())
        }
        Commands::Benchmark { count } => {
            let tier = cli.tier.unwrap_or_default();
            let dictionary = dictionaries.get(tier);
            let graph = WordGraph::build(dictionary, None);

            println!("Running benchmark on {count} random {tier} pairs...");
            let result = run_benchmark(
                &PathFinder::new(&graph),
                &dictionary.sorted(),
                count,
                &mut rng,
                true,
            )?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn load_dictionaries(path: Option<&Path>) -> Result<Dictionaries> {
    match path {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to load dictionary {}", path.display())),
        None => Dictionaries::embedded().context("Embedded word lists are malformed"),
    }
}

/// Tier whose word length matches `word`, falling back to the default
fn tier_for(word: &str) -> Tier {
    Word::new(word)
        .ok()
        .and_then(|w| Tier::for_word_length(w.len()))
        .unwrap_or_default()
}

fn draw_obstacles(dictionaries: &Dictionaries, tier: Tier, obstacles: bool, rng: &mut StdRng) -> ExclusionPolicy {
    if obstacles {
        let policy = sample_policy(dictionaries.get(tier), rng);
        debug!(?policy, "obstacles drawn");
        policy
    } else {
        ExclusionPolicy::default()
    }
}

fn build_graph(dictionaries: &Dictionaries, tier: Tier, obstacles: bool, rng: &mut StdRng) -> WordGraph {
    let policy = draw_obstacles(dictionaries, tier, obstacles, rng);
    if !policy.is_empty() {
        let words: Vec<&str> = policy.banned_words().map(Word::text).collect();
        let letters: String = policy.banned_letters().collect();
        println!("Banned words: {}  Banned letters: {letters}", words.join(", "));
    }
    WordGraph::build(dictionaries.get(tier), Some(&policy))
}

fn run_play_command(
    dictionaries: Dictionaries,
    tier: Tier,
    strategy: SearchStrategy,
    mut rng: StdRng,
) -> Result<()> {
    use word_ladder::interactive::{App, run_tui};

    let session = GameSession::new(dictionaries, tier, &mut rng)?;
    run_tui(App::new(session, strategy, rng))
}
