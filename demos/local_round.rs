//! Plays hit-once rounds against the in-process deck and logs each summary.
//!
//! Run with `RUST_LOG=info cargo run --example local_round [-- SEED ROUNDS]`.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{LocalDeck, PlayerId, RoundEngine, RoundError, RoundOptions, Winner};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), RoundError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let rounds: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5);

    let mut engine = RoundEngine::new(LocalDeck::new(seed), RoundOptions::default());
    let mut wins = [0_u32; 3];

    for _ in 0..rounds {
        let start = engine.start_round().await;
        if engine.deck_id().is_none() {
            log::error!("could not get a deck (status {})", start.new_deck.status());
            break;
        }

        engine.deal_initial().await?;

        let naturals = engine.has_natural_blackjack();
        if !naturals.p1 && !naturals.p2 {
            engine.hit(PlayerId::P1).await?;
            engine.hit(PlayerId::P2).await?;
        }

        match engine.summarize_and_log().winner {
            Some(Winner::Player(PlayerId::P1)) => wins[0] += 1,
            Some(Winner::Player(PlayerId::P2)) => wins[1] += 1,
            Some(Winner::Tie) | None => wins[2] += 1,
        }
    }

    println!(
        "seed {seed}: P1 {} | P2 {} | ties {}",
        wins[0], wins[1], wins[2]
    );
    Ok(())
}
