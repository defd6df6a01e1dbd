use clap::{Parser, ValueEnum};
use deuce_seven::cards::{parse_compact, Card, CardParseError};
use deuce_seven::deck::Deck;
use deuce_seven::evaluator::{describe, evaluate, evaluate_slow, EvalError, Score, Variant};
use deuce_seven::hand::{ensure_distinct, HandError};
use log::{debug, LevelFilter};
use std::cmp::Ordering;
use std::process::ExitCode;

// Table build lines are `info`; RUST_LOG raises this.
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Debug, Parser)]
#[clap(version, about = "Score and compare 5- or 7-card poker hands")]
struct Cli {
    /// Hands to compare, e.g. AcKhQdJsTs9h8d or "D2 H3 C4 S5 H7".
    hands: Vec<String>,
    /// Ranking rules.
    #[clap(long, short, value_enum, default_value_t = VariantArg::High)]
    variant: VariantArg,
    /// Score without the lookup table.
    #[clap(long)]
    slow: bool,
    /// Deal this many random hands from one shuffled deck.
    #[clap(long, short, default_value_t = 0)]
    deal: usize,
    /// Cards per dealt hand.
    #[clap(long, default_value_t = 7, value_parser = parse_size)]
    size: usize,
    /// Shuffle seed for dealt hands.
    #[clap(long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VariantArg {
    High,
    #[value(alias = "lowball", alias = "2-7")]
    DeuceSeven,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::High => Variant::High,
            VariantArg::DeuceSeven => Variant::DeuceToSeven,
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("error parsing hand {0:?}: {1}")]
    Card(String, CardParseError),
    #[error("invalid hand {0:?}: {1}")]
    Hand(String, HandError),
    #[error("hand {0:?} has {1} cards, expected 5 or 7")]
    Size(String, usize),
    #[error("cannot deal {hands} hands of {size} cards from one deck")]
    Deal { hands: usize, size: usize },
    #[error("must specify one or more hands, or --deal N")]
    NoHands,
    #[error(transparent)]
    Eval(#[from] EvalError),
}

fn parse_size(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(n @ (5 | 7)) => Ok(n),
        _ => Err(format!("hand size must be 5 or 7, got {s:?}")),
    }
}

fn parse_hand(input: &str) -> Result<Vec<Card>, CliError> {
    let cards = parse_compact(input).map_err(|e| CliError::Card(input.to_string(), e))?;
    if !matches!(cards.len(), 5 | 7) {
        return Err(CliError::Size(input.to_string(), cards.len()));
    }
    ensure_distinct(&cards).map_err(|e| CliError::Hand(input.to_string(), e))?;
    Ok(cards)
}

fn deal_hands(count: usize, size: usize, seed: u64) -> Result<Vec<(String, Vec<Card>)>, CliError> {
    let mut deck = Deck::standard();
    count
        .checked_mul(size)
        .filter(|&n| n <= deck.len())
        .ok_or(CliError::Deal { hands: count, size })?;
    debug!("dealing {count} hands of {size} with seed {seed}");
    deck.shuffle_seeded(seed);

    Ok((0..count)
        .map(|_| {
            let cards = deck.draw_n(size);
            let label = cards.iter().map(Card::to_string).collect::<String>();
            (label, cards)
        })
        .collect())
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let variant = Variant::from(cli.variant);

    let mut hands = cli
        .hands
        .iter()
        .map(|s| parse_hand(s).map(|cards| (s.clone(), cards)))
        .collect::<Result<Vec<_>, _>>()?;
    if cli.deal > 0 {
        let seed = cli.seed.unwrap_or_else(rand::random);
        hands.extend(deal_hands(cli.deal, cli.size, seed)?);
    }
    if hands.is_empty() {
        return Err(CliError::NoHands);
    }

    let mut scores: Vec<Score> = Vec::with_capacity(hands.len());
    println!("Hand Evaluations:");
    for (label, cards) in &hands {
        let score = if cli.slow { evaluate_slow(cards, variant)? } else { evaluate(cards, variant)? };
        println!("{label}: {} (score: {score})", describe(cards, variant)?);
        scores.push(score);
    }

    let mut best = scores[0];
    let mut winners = vec![0];
    for (i, &score) in scores.iter().enumerate().skip(1) {
        match variant.compare(score, best) {
            Ordering::Greater => {
                best = score;
                winners = vec![i];
            }
            Ordering::Equal => winners.push(i),
            Ordering::Less => {}
        }
    }

    let labels: Vec<&str> = winners.iter().map(|&i| hands[i].0.as_str()).collect();
    if labels.len() > 1 {
        println!("\nTie between hands: {}", labels.join(", "));
    } else {
        println!("\nWinning hand: {}", labels.join(""));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(DEFAULT_LOG_LEVEL)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
