//! Display functions for command results

use super::formatters::{create_progress_bar, format_path};
use crate::commands::{BenchmarkResult, Comparison, GraphReport, SolveReport};
use colored::Colorize;

/// Print the result of solving a pair
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "{} → {} ({})",
        report.start.text().bright_white().bold(),
        report.goal.text().bright_yellow().bold(),
        report.strategy
    );
    println!("{}", "─".repeat(60).cyan());

    match &report.result {
        Some(result) => {
            println!("\n  {}", format_path(&result.path));
            println!(
                "\n{}",
                format!("✅ {} moves", result.cost).green().bold()
            );
        }
        None => println!(
            "\n{}",
            format!(
                "❌ No ladder connects '{}' and '{}'",
                report.start, report.goal
            )
            .red()
            .bold()
        ),
    }

    if verbose {
        println!("  Expanded:       {}", report.stats.expanded);
        println!("  Generated:      {}", report.stats.generated);
        println!("  Frontier peak:  {}", report.stats.frontier_peak);
        println!("  Time:           {:?}", report.duration);
    }
}

/// Print a side-by-side strategy comparison
pub fn print_comparison(comparison: &Comparison) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} → {}",
        "STRATEGY COMPARISON:".bright_cyan().bold(),
        comparison.start.text().bright_white().bold(),
        comparison.goal.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let most_expanded = comparison
        .runs
        .iter()
        .map(|run| run.stats.expanded)
        .max()
        .unwrap_or(0);

    println!(
        "\n   {:<5} {:>5} {:>9} {:>10}",
        "", "cost", "expanded", "time"
    );
    for run in &comparison.runs {
        let cost = run.cost().map_or_else(|| "-".to_string(), |c| c.to_string());
        let bar = create_progress_bar(run.stats.expanded as f64, most_expanded as f64, 20);
        println!(
            "   {:<5} {cost:>5} {:>9} {:>10} {}",
            run.strategy.name().bright_white(),
            run.stats.expanded,
            format!("{:.2?}", run.duration),
            bar.green()
        );
    }

    if let Some(path) = comparison.runs.iter().find_map(|run| run.result.as_ref()) {
        println!("\n   Path: {}", format_path(&path.path));
    }

    println!();
    if comparison.costs_agree() {
        println!("{}", "✅ All strategies agree on the cost".green().bold());
    } else {
        println!("{}", "⚠ Strategies disagree on the cost".red().bold());
    }
}

/// Print graph statistics and, if listed, every adjacency list
pub fn print_graph_report(report: &GraphReport) {
    let summary = &report.summary;

    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} {}", "WORD GRAPH:".bright_cyan().bold(), report.tier);
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Structure:".bright_cyan().bold());
    println!("   Words:              {}", summary.words);
    println!("   Edges:              {}", summary.edges);
    println!("   Average degree:     {:.2}", summary.average_degree);
    println!("   Components:         {}", summary.components);
    println!("   Largest component:  {}", summary.largest_component);
    println!("   Isolated words:     {}", summary.isolated_words);

    if !report.banned_words.is_empty() || !report.banned_letters.is_empty() {
        println!("\n🚫 {}", "Obstacles:".bright_cyan().bold());
        println!("   Banned words:   {}", report.banned_words.join(", ").red());
        println!("   Banned letters: {}", report.banned_letters.red());
    }

    if !report.adjacency.is_empty() {
        println!("\n🔗 {}", "Adjacency:".bright_cyan().bold());
        for (word, neighbors) in &report.adjacency {
            let neighbors: Vec<&str> = neighbors.iter().map(|w| w.text()).collect();
            println!("   {}: {}", word.text().bright_white(), neighbors.join(", "));
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Pairs tested:  {}", result.pairs);
    println!("   Time taken:    {:.2}s", result.duration.as_secs_f64());

    println!(
        "\n   {:<5} {:>9} {:>10} {:>10} {:>10}",
        "", "avg cost", "expanded", "generated", "time"
    );
    for totals in &result.totals {
        println!(
            "   {:<5} {:>9} {:>10} {:>10} {:>10}",
            totals.strategy.name().bright_white(),
            format!("{:.2}", totals.average_cost(result.pairs)).bright_yellow(),
            totals.expanded,
            totals.generated,
            format!("{:.2?}", totals.duration)
        );
    }

    println!();
    if result.mismatches.is_empty() {
        println!("{}", "✅ No cost mismatches".green().bold());
    } else {
        println!(
            "{}",
            format!("⚠ {} cost mismatches:", result.mismatches.len())
                .red()
                .bold()
        );
        for (start, goal) in &result.mismatches {
            println!("   {start} → {goal}");
        }
    }
}
