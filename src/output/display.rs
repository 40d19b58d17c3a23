//! Display functions for games and batch results

use super::formatters::{create_progress_bar, format_contenders, percentage};
use crate::commands::{BatchStatistics, GameOutcome, GameRecord, Turn};
use crate::core::{GraysDisplay, GreensDisplay, YellowsDisplay};
use crate::game::GameEngine;
use colored::Colorize;

/// Print the header for a new game
pub fn print_game_banner(game_number: usize, engine: &GameEngine<'_>) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Game {}: answer is {}",
        game_number,
        engine
            .answer()
            .map_or_else(|| "?".to_string(), |a| a.text().to_uppercase())
            .bright_yellow()
            .bold()
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print the diagnostics for one evaluated guess
pub fn print_turn(turn: &Turn<'_, '_>) {
    let suggestion = turn.suggestion;
    let engine = turn.engine;

    println!(
        "\nTurn {}: {} {}",
        turn.number,
        suggestion.word.text().to_uppercase().bold(),
        format!("(score {})", suggestion.score).bright_black()
    );
    println!(
        "  Candidates:  {} | top: {}",
        suggestion.remaining,
        format_contenders(&suggestion.contenders)
    );
    println!("  Guesses:     {}", engine.guesses().len());
    println!(
        "  {}  {}",
        "Greens: ".green().bold(),
        GreensDisplay(engine.greens())
    );
    println!(
        "  {}  {}",
        "Yellows:".yellow().bold(),
        YellowsDisplay(engine.yellows())
    );
    println!(
        "  {}  {}",
        "Grays:  ".bright_black().bold(),
        GraysDisplay(engine.grays())
    );
}

/// Print how a single game ended
pub fn print_game_result(record: &GameRecord) {
    println!();
    match &record.outcome {
        GameOutcome::Won => println!(
            "{}",
            format!(
                "✅ Solved {} in {} guesses",
                record.answer.to_uppercase(),
                record.num_guesses()
            )
            .green()
            .bold()
        ),
        GameOutcome::Lost => println!(
            "{}",
            format!(
                "❌ Failed to solve {} in {} guesses",
                record.answer.to_uppercase(),
                record.num_guesses()
            )
            .red()
            .bold()
        ),
        GameOutcome::Anomaly(e) => println!(
            "{}",
            format!("⚠️  Game for {} aborted: {e}", record.answer.to_uppercase())
                .yellow()
                .bold()
        ),
    }
}

/// Print batch statistics with the win percentage summary
pub fn print_batch_statistics(stats: &BatchStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Simulation Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Games played:        {}", stats.total_games);
    println!(
        "  Won:                 {} {}",
        stats.wins,
        format!("({:.1}%)", percentage(stats.wins, stats.total_games)).green()
    );
    if stats.losses > 0 {
        println!(
            "  Lost:                {} {}",
            stats.losses,
            format!("({:.1}%)", percentage(stats.losses, stats.total_games)).red()
        );
    }
    if stats.anomalies > 0 {
        println!(
            "  Aborted:             {} {}",
            stats.anomalies,
            format!("({:.1}%)", percentage(stats.anomalies, stats.total_games)).yellow()
        );
    }
    let average = format!("{:.3}", stats.average_guesses);
    println!("  Average guesses:     {}", average.bright_yellow().bold());
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let distribution = &stats.guess_distribution;
    let max_count = distribution.values().copied().max().unwrap_or(0);
    for guesses in 1..=6 {
        let count = distribution.get(&guesses).copied().unwrap_or(0);
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {guesses} guesses: {} {count:4} ({:5.1}%)",
            bar.green(),
            percentage(count, stats.wins)
        );
    }

    if !stats.hardest_words.is_empty() {
        println!("\n😰 {}", "Hardest Words".yellow().bold());
        for (word, guesses) in stats.hardest_words.iter().take(5) {
            match guesses {
                Some(n) => println!("  {} ({n} guesses)", word.to_uppercase().yellow()),
                None => println!("  {} (not solved)", word.to_uppercase().red()),
            }
        }
    }

    let win_rate = format!("{:.2} %", stats.win_percentage());
    println!("\nYour win % was: {}", win_rate.bright_green().bold());
}
