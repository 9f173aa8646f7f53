//! Shannon Wordle CLI
//!
//! Command-line front end for the entropy solver.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shannon_wordle::{
    draw_secrets, judge_guess, play, play_all, FeedbackPattern, GameConfig, GameOutcome, Solver,
    SolverConfig, Stats, Turn, Vocabulary, Word, DEFAULT_MAX_ATTEMPTS,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Word list to play with, one word per line.
    #[arg(long, global = true, default_value = "data/vocabulary.txt")]
    vocabulary: PathBuf,

    /// Opening guess. Must be in the vocabulary. Defaults to SOARE.
    #[arg(long, global = true, conflicts_with = "compute_opening")]
    opening: Option<Word>,

    /// Compute the opening guess from the vocabulary instead of using a fixed one.
    #[arg(long, global = true)]
    compute_opening: bool,

    /// Guesses allowed per game.
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Number of trailing attempts that may only guess words that can still be the secret.
    #[arg(long, global = true, default_value_t = 1)]
    candidate_only_attempts: usize,

    /// Log solver decisions to stderr. RUST_LOG overrides this.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play one game against a known secret.
    Solve { secret: Word },

    /// Play games against random secrets, typing the guesses yourself.
    Play {
        /// Number of games to play.
        #[arg(short = 'n', long = "games", default_value_t = 1)]
        games: usize,

        /// Seed for drawing secrets. Defaults to a random one.
        #[arg(long)]
        seed: Option<u64>,

        /// Play this secret in every game instead of a random one.
        #[arg(long)]
        secret: Option<Word>,

        /// Let the solver type the guesses.
        #[arg(long)]
        auto: bool,

        /// List the secrets that were not found.
        #[arg(long)]
        show_fails: bool,
    },

    /// Play a game for every secret and report statistics.
    Bench {
        /// Secrets to play. Defaults to the whole vocabulary.
        #[arg(long)]
        secrets: Option<PathBuf>,

        /// Only play the first N secrets.
        #[arg(short, long)]
        limit: Option<usize>,

        /// List the secrets that were not found.
        #[arg(long)]
        show_fails: bool,
    },

    /// Rank the next guesses for a history such as `soare=bybyb raily=gbbbg`.
    Suggest {
        /// How many guesses to list.
        #[arg(short, long, default_value_t = 5)]
        top: usize,

        /// Treat the next guess as the last one: only propose possible secrets.
        #[arg(long = "final")]
        final_attempt: bool,

        history: Vec<String>,
    },

    /// Compute the most informative opening word for the vocabulary.
    Opening,

    /// Let the solver guess a word you are playing elsewhere.
    Interactive,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn parse_turn(raw: &str) -> Result<Turn> {
    let (word, pattern) = raw
        .split_once('=')
        .ok_or_else(|| anyhow!("expected WORD=PATTERN, got \"{raw}\""))?;
    let word = Word::new(word).with_context(|| format!("bad word in \"{raw}\""))?;
    let pattern = FeedbackPattern::parse(pattern).with_context(|| format!("bad pattern in \"{raw}\""))?;
    Ok((word, pattern))
}

fn print_turns(turns: &[Turn]) {
    for (i, (guess, pattern)) in turns.iter().enumerate() {
        println!("Guess {}: {} → {}", i + 1, guess, pattern);
    }
}

fn run_solve(solver: &Solver<'_>, config: &GameConfig, secret: &Word) -> Result<()> {
    println!("Solving for: {secret}");
    println!();

    let outcome = play(solver, secret, config)?;
    print_turns(&outcome.turns);

    println!();
    match outcome.attempts() {
        Some(attempts) => println!("Solved in {attempts} guesses."),
        None => println!("Failed to solve within {} guesses.", config.max_attempts),
    }
    Ok(())
}

fn run_bench(
    solver: &Solver<'_>,
    config: &GameConfig,
    secrets: Option<PathBuf>,
    limit: Option<usize>,
    show_fails: bool,
) -> Result<()> {
    let mut secrets = match secrets {
        Some(path) => Vocabulary::load(&path)
            .context("could not load the secrets")?
            .words()
            .to_vec(),
        None => solver.vocabulary().words().to_vec(),
    };
    if let Some(limit) = limit {
        secrets.truncate(limit);
    }

    info!(games = secrets.len(), "starting batch");
    let start = Instant::now();
    let benchmark = play_all(solver, &secrets, config)?;
    let elapsed = start.elapsed();
    let stats = &benchmark.stats;

    print_stats(stats);
    println!("Time elapsed: {elapsed:.2?}");

    print_failures(&benchmark.failures, config, show_fails);
    Ok(())
}

fn print_failures(failures: &[Word], config: &GameConfig, show_fails: bool) {
    if failures.is_empty() {
        println!("All secrets solved within {} guesses.", config.max_attempts);
        return;
    }

    println!("Secrets not solved: {}", failures.len());
    if show_fails {
        println!();
        println!("FAILED WORDS");
        println!("{}", "=".repeat(12));
        let mut failures = failures.to_vec();
        failures.sort();
        for word in failures {
            println!("{word}");
        }
    }
}

fn secret_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Read guesses from stdin until the secret is found or the attempts run out.
/// Returns `None` on end of input.
fn play_human(
    vocabulary: &Vocabulary,
    secret: &Word,
    config: &GameConfig,
) -> Result<Option<GameOutcome>> {
    let stdin = io::stdin();
    let mut turns: Vec<Turn> = Vec::with_capacity(config.max_attempts);

    while turns.len() < config.max_attempts {
        print!("Guess {}: ", turns.len() + 1);
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let (guess, pattern) = match judge_guess(vocabulary, secret, &line) {
            Ok(turn) => turn,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        println!("         {pattern}");
        turns.push((guess, pattern));
        if pattern.is_win() {
            break;
        }
    }

    Ok(Some(GameOutcome {
        secret: secret.clone(),
        turns,
    }))
}

fn run_play(
    solver: &Solver<'_>,
    config: &GameConfig,
    games: usize,
    seed: Option<u64>,
    secret: Option<Word>,
    auto: bool,
    show_fails: bool,
) -> Result<()> {
    let vocabulary = solver.vocabulary();
    let secrets = match secret {
        Some(secret) => {
            if !vocabulary.contains(&secret) {
                return Err(anyhow!("secret {secret} is not in the vocabulary"));
            }
            vec![secret; games]
        }
        None => draw_secrets(vocabulary.words(), games, &mut secret_rng(seed)),
    };

    let mut stats = Stats::new(config.max_attempts);
    let mut failures = Vec::new();
    for (i, secret) in secrets.iter().enumerate() {
        println!("Game {} of {}", i + 1, secrets.len());

        let outcome = if auto {
            let outcome = play(solver, secret, config)?;
            print_turns(&outcome.turns);
            outcome
        } else {
            match play_human(vocabulary, secret, config)? {
                Some(outcome) => outcome,
                None => break,
            }
        };

        match outcome.attempts() {
            Some(attempts) => println!("Solved in {attempts} guesses."),
            None => {
                println!("The secret was {secret}.");
                failures.push(secret.clone());
            }
        }
        println!();
        stats.record(&outcome);
    }

    print_stats(&stats);
    print_failures(&failures, config, show_fails);
    Ok(())
}

fn print_stats(stats: &Stats) {
    println!("Results:");
    println!("{}", "=".repeat(40));
    println!();
    println!("Guess distribution:");
    for (i, &count) in stats.distribution.iter().enumerate() {
        let pct = count as f64 / stats.played.max(1) as f64 * 100.0;
        let bar = "█".repeat(count * 40 / stats.played.max(1));
        println!("  {} guesses: {:>5} ({:>5.1}%) {}", i + 1, count, pct, bar);
    }
    println!();
    println!("Played: {}", stats.played);
    println!("Win percentage: {:.3}", stats.win_percentage());
    println!("Max streak: {}", stats.max_streak);
    if let Some(mean) = stats.mean_guesses() {
        println!("Average guesses: {mean:.3}");
    }
}

fn run_suggest(solver: &Solver<'_>, top: usize, final_attempt: bool, history: &[String]) -> Result<()> {
    let history = history
        .iter()
        .map(|raw| parse_turn(raw))
        .collect::<Result<Vec<_>>>()?;

    let candidates = solver.candidates(&history)?;
    println!("Remaining possibilities: {}", candidates.len());
    if candidates.len() <= 20 {
        let words: Vec<&str> = candidates.iter().map(|w| w.as_str()).collect();
        println!("  {}", words.join(" "));
    }
    println!();

    if history.is_empty() {
        println!("Opening guess: {}", solver.opening());
        println!();
    }

    let ranked = solver.rank_guesses(&history, final_attempt, top)?;
    println!(
        "{:>4} {:>8} {:>8} {:>12} Possible?",
        "#", "Word", "Entropy", "Exp. Remain"
    );
    println!("{}", "-".repeat(50));
    for (i, analysis) in ranked.iter().enumerate() {
        println!(
            "{:>4} {:>8} {:>8.3} {:>12.1} {}",
            i + 1,
            analysis.word,
            analysis.entropy,
            analysis.expected_remaining,
            if analysis.is_candidate { "✓" } else { "" }
        );
    }
    Ok(())
}

fn run_opening(solver: &Solver<'_>) -> Result<()> {
    let analysis = solver.best_opening()?;
    println!("Best opening guess: {}", analysis.word);
    println!("Entropy: {:.3} bits", analysis.entropy);
    println!("Expected remaining: {:.1} words", analysis.expected_remaining);
    Ok(())
}

fn read_pattern(word_len: usize) -> Result<Option<FeedbackPattern>> {
    let stdin = io::stdin();
    loop {
        print!("Feedback (g/y/b): ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        match FeedbackPattern::parse(&line) {
            Ok(pattern) if pattern.len() == word_len => return Ok(Some(pattern)),
            Ok(_) => println!("Expected {word_len} tiles."),
            Err(err) => println!("{err}"),
        }
    }
}

fn run_interactive(solver: &Solver<'_>, config: &GameConfig) -> Result<()> {
    let word_len = solver.vocabulary().word_len();
    let mut history: Vec<Turn> = Vec::with_capacity(config.max_attempts);

    for attempt in 1..=config.max_attempts {
        let guess = solver.choose_guess(&history, config.is_final_attempt(attempt))?;
        println!("Guess {attempt}: {guess}");

        let Some(pattern) = read_pattern(word_len)? else {
            return Ok(());
        };
        println!("          {pattern}");
        if pattern.is_win() {
            println!("Solved in {attempt} guesses.");
            return Ok(());
        }
        history.push((guess.clone(), pattern));
    }

    println!("Game over, only {} guesses are allowed.", config.max_attempts);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let vocabulary = Vocabulary::load(&cli.vocabulary).context("could not load the vocabulary")?;

    let solver_config = if cli.compute_opening {
        SolverConfig::computed_opening()
    } else {
        cli.opening
            .map(SolverConfig::with_opening)
            .unwrap_or_default()
    };
    let solver = Solver::new(&vocabulary, solver_config)?;
    let game_config = GameConfig {
        max_attempts: cli.max_attempts,
        candidate_only_attempts: cli.candidate_only_attempts,
    };

    match cli.command {
        Command::Solve { secret } => run_solve(&solver, &game_config, &secret),
        Command::Play {
            games,
            seed,
            secret,
            auto,
            show_fails,
        } => run_play(&solver, &game_config, games, seed, secret, auto, show_fails),
        Command::Bench {
            secrets,
            limit,
            show_fails,
        } => run_bench(&solver, &game_config, secrets, limit, show_fails),
        Command::Suggest {
            top,
            final_attempt,
            history,
        } => run_suggest(&solver, top, final_attempt, &history),
        Command::Opening => run_opening(&solver),
        Command::Interactive => run_interactive(&solver, &game_config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn seeded_rng_repeats_secrets() {
        let vocabulary = Vocabulary::parse("abide\nabyss\nearly\nfight\nflame").unwrap();
        let first = draw_secrets(vocabulary.words(), 8, &mut secret_rng(Some(11)));
        let second = draw_secrets(vocabulary.words(), 8, &mut secret_rng(Some(11)));
        assert_eq!(first, second);
    }

    #[test]
    fn parses_play_options() {
        let cli = Cli::try_parse_from(["shannon-wordle", "play", "-n", "3", "--seed", "42"]).unwrap();
        match cli.command {
            Command::Play {
                games, seed, auto, ..
            } => {
                assert_eq!(games, 3);
                assert_eq!(seed, Some(42));
                assert!(!auto);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_history_turns() {
        let (word, pattern) = parse_turn("soare=gybbb").unwrap();
        assert_eq!(word, "SOARE");
        assert_eq!(pattern.to_digits(), "21000");
        assert!(parse_turn("soare").is_err());
        assert!(parse_turn("soare=gyzbb").is_err());
    }
}
