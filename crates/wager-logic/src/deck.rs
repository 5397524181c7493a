//! Question deck for a game

use std::collections::BTreeSet;

use tracing::debug;

use crate::questions::Question;
use crate::random::SeededRng;

/// Pick `count` question ids for a game.
///
/// Questions outside `avoid` come first, in shuffled order. Once those run
/// out the whole bank is reshuffled and used again, never repeating an id
/// already in the deck. The deck is shorter than `count` only when the bank
/// itself is.
pub fn build_question_deck(
    bank: &[Question],
    count: usize,
    avoid: &BTreeSet<&str>,
    seed: &[u8; 32],
    stream: u32,
) -> Vec<&'static str> {
    let mut rng = SeededRng::new(seed, stream);

    let mut fresh: Vec<&'static str> = bank
        .iter()
        .map(|q| q.id)
        .filter(|id| !avoid.contains(*id))
        .collect();
    rng.shuffle(&mut fresh);

    let mut deck: Vec<&'static str> = fresh.into_iter().take(count).collect();

    if deck.len() < count {
        debug!(fresh = deck.len(), count, "fresh questions exhausted, refilling from full bank");
        let mut refill: Vec<&'static str> = bank.iter().map(|q| q.id).collect();
        rng.shuffle(&mut refill);
        for id in refill {
            if deck.len() >= count {
                break;
            }
            if !deck.contains(&id) {
                deck.push(id);
            }
        }
    }

    deck
}
