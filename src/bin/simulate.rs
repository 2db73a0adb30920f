use chess_sandbox::{ClickOutcome, GameSession};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Fire random clicks at a session and check the board invariants hold
/// after every one.
#[derive(Parser, Debug, Clone)]
#[command(version)]
struct SimConfig {
    /// Independent sessions to run
    #[arg(long, default_value_t = 10)]
    games: usize,

    /// Clicks per session
    #[arg(long, default_value_t = 500)]
    clicks: usize,

    /// RNG seed; the same seed replays the same clicks
    #[arg(long, default_value_t = 1)]
    seed: u64,

    /// One click in this many lands off the board
    #[arg(long, default_value_t = 20)]
    off_board_every: u32,
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    ignored: u32,
    selected: u32,
    deselected: u32,
    moves: u32,
    captures: u32,
    rejected: u32,
}

fn run_game(config: &SimConfig, rng: &mut StdRng) -> Result<Tally, String> {
    let mut session = GameSession::new();
    let mut tally = Tally::default();

    for click in 0..config.clicks {
        let off_board = config.off_board_every > 0 && rng.gen_ratio(1, config.off_board_every);
        let (row, col) = if off_board {
            (rng.gen_range(8..16), rng.gen_range(0..16))
        } else {
            (rng.gen_range(0..8), rng.gen_range(0..8))
        };

        let board_before = session.board().clone();
        let selection_before = session.selection();
        let count_before = board_before.piece_count();

        match session.on_square_clicked(row, col) {
            Err(_) => {
                tally.rejected += 1;
                if session.board() != &board_before || session.selection() != selection_before {
                    return Err(format!("click {click}: rejected input changed state"));
                }
            }
            Ok(ClickOutcome::Ignored) => tally.ignored += 1,
            Ok(ClickOutcome::Selected(s)) => {
                tally.selected += 1;
                if session.board().get(s).is_empty() {
                    return Err(format!("click {click}: selected empty square {s}"));
                }
            }
            Ok(ClickOutcome::Deselected(_)) => tally.deselected += 1,
            Ok(ClickOutcome::Moved(m)) => {
                tally.moves += 1;
                let expected = count_before - usize::from(m.captured.is_some());
                if m.captured.is_some() {
                    tally.captures += 1;
                }
                if session.board().piece_count() != expected {
                    return Err(format!(
                        "click {click}: piece count {count_before} -> {} on {}",
                        session.board().piece_count(),
                        session.board().to_codes().join("/")
                    ));
                }
                if !session.board().get(m.from).is_empty() {
                    return Err(format!("click {click}: {} not vacated", m.from));
                }
            }
        }

        let highlighted = session.snapshot().squares.iter().filter(|v| v.selected).count();
        if highlighted != usize::from(session.selection().square().is_some()) {
            return Err(format!(
                "click {click}: {highlighted} squares highlighted while {:?} on {}",
                session.selection(),
                session.board().to_codes().join("/")
            ));
        }
    }

    Ok(tally)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = SimConfig::parse();
    println!("=== Click simulation ===");
    println!("Games: {}, clicks per game: {}, seed: {}\n", config.games, config.clicks, config.seed);

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut failures = 0;
    for game in 0..config.games {
        match run_game(&config, &mut rng) {
            Ok(t) => info!(
                game,
                moves = t.moves,
                captures = t.captures,
                selected = t.selected,
                deselected = t.deselected,
                ignored = t.ignored,
                rejected = t.rejected,
                "game finished"
            ),
            Err(msg) => {
                warn!(game, "{msg}");
                failures += 1;
            }
        }
    }

    println!("\n{} of {} games held every invariant", config.games - failures, config.games);
    if failures > 0 {
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u64) -> SimConfig {
        SimConfig {
            games: 1,
            clicks: 2000,
            seed,
            off_board_every: 10,
        }
    }

    #[test]
    fn random_clicks_hold_every_invariant() {
        for seed in [1, 7, 42] {
            let mut rng = StdRng::seed_from_u64(seed);
            let tally = run_game(&config(seed), &mut rng).unwrap();
            assert!(tally.moves > 0);
            assert!(tally.rejected > 0);
            assert!(tally.ignored > 0);
        }
    }

    #[test]
    fn same_seed_replays_the_same_clicks() {
        let a = run_game(&config(9), &mut StdRng::seed_from_u64(9)).unwrap();
        let b = run_game(&config(9), &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }
}
