//! `tap-match autoplay`: play sessions headlessly and print one JSON report per game.

use std::io::Write;

use anyhow::{anyhow, Result};
use log::info;

use crate::core::{GameSession, ManualClock, Settings};
use crate::engine::autoplay;
use crate::types::Difficulty;

/// Upper bound on picks per game; a pile never needs more than its tile count.
pub const MAX_SELECTIONS: u32 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoplayConfig {
    pub difficulty: Option<Difficulty>,
    pub seed: Option<u32>,
    pub games: u32,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            difficulty: None,
            seed: None,
            games: 1,
        }
    }
}

/// Parse `autoplay [--seed N] [--difficulty easy|medium|hard] [--games N]`.
///
/// Returns `Ok(None)` when the first argument is not `autoplay`.
pub fn parse_autoplay_args(args: &[String]) -> Result<Option<AutoplayConfig>> {
    if args.first().map(String::as_str) != Some("autoplay") {
        return Ok(None);
    }

    let mut config = AutoplayConfig::default();
    let mut rest = args[1..].iter();
    while let Some(arg) = rest.next() {
        let mut value = |flag: &str| {
            rest.next()
                .ok_or_else(|| anyhow!("autoplay: missing value for {}", flag))
        };
        match arg.as_str() {
            "--seed" => {
                let v = value("--seed")?;
                config.seed = Some(
                    v.parse()
                        .map_err(|_| anyhow!("autoplay: invalid --seed value: {}", v))?,
                );
            }
            "--difficulty" => {
                let v = value("--difficulty")?;
                config.difficulty = Some(
                    Difficulty::from_str(v)
                        .ok_or_else(|| anyhow!("autoplay: invalid --difficulty value: {}", v))?,
                );
            }
            "--games" => {
                let v = value("--games")?;
                config.games = v
                    .parse::<u32>()
                    .ok()
                    .filter(|&n| n > 0)
                    .ok_or_else(|| anyhow!("autoplay: invalid --games value: {}", v))?;
            }
            other => {
                return Err(anyhow!("autoplay: unknown argument: {}", other));
            }
        }
    }

    Ok(Some(config))
}

/// Play `config.games` sessions on top of `base` settings and write one JSON
/// line per game to `out`. Game `i` uses seed `seed + i`.
pub fn run_autoplay(config: &AutoplayConfig, base: Settings, out: &mut impl Write) -> Result<()> {
    let mut settings = base;
    if let Some(difficulty) = config.difficulty {
        settings.difficulty = difficulty;
    }
    // The countdown never advances without a tick source.
    settings.time_limit = false;

    let first_seed = config
        .seed
        .or(settings.seed)
        .unwrap_or_else(crate::core::rng::time_seed);

    for game in 0..config.games {
        let seed = first_seed.wrapping_add(game);
        let mut session = GameSession::new(settings.with_seed(seed), ManualClock::new(0));
        session.start();
        let report = autoplay(&mut session, MAX_SELECTIONS)?;
        info!(
            "autoplay game {} (seed {}): {:?}, score {}",
            game + 1,
            seed,
            report.outcome,
            report.score
        );
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    }
    out.flush()?;
    Ok(())
}
