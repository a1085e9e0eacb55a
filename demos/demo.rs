//! End-to-end walkthrough of the Liar's Dice odds engines.
//!
//! Run with: `cargo run --example demo`
//!
//! This example shows how `liars_dice_odds` works end to end:
//!
//! 1. **Engine comparison** — any-face vs specific-face probabilities for
//!    every bid over a 10-die table, with percentage strings, tiers, and
//!    the break-even bid of each engine.
//!
//! 2. **A full session** — the state holder a watch/phone UI would drive:
//!    set the table, enter your own dice one at a time, and read how the
//!    conditional estimate moves away from the blind baseline.
//!
//! 3. **Snapshot export** — the session's readings serialized as JSON, the
//!    form a display layer or companion app would consume.

use liars_dice_odds::{AnyFaceEngine, BidSession, SpecificFaceEngine};

fn print_engine_table(any: &AnyFaceEngine, specific: &SpecificFaceEngine, total_dice: usize) {
    println!("=== {total_dice} dice in play ===");
    println!("{:>4} {:>18} {:>18}", "bid", "any face", "specific face");
    for bid in 0..=total_dice {
        println!(
            "{:>4} {:>6} {:<11} {:>6} {:<11}",
            bid,
            any.percentage(bid, total_dice),
            format!("({})", any.tier(bid, total_dice)),
            specific.percentage(bid, total_dice),
            format!("({})", specific.tier(bid, total_dice)),
        );
    }
    println!(
        "break-even: any face {}, specific face {}\n",
        any.break_even_bid(total_dice),
        specific.break_even_bid(total_dice),
    );
}

fn main() {
    // 1. Raw engines, side by side.
    let any = AnyFaceEngine::new();
    let specific = SpecificFaceEngine::new();
    print_engine_table(&any, &specific, 10);

    // 2. A session: 15 dice on the table, someone claims "four fives".
    let mut session = BidSession::default();
    session.set_total_dice(15);
    session.set_bid(4);
    session.set_bid_face(5);

    println!("=== claim: four fives among 15 dice ===");
    println!(
        "any face: {} ({}), specific face: {} ({})",
        session.bid_odds().percentage,
        session.bid_odds().tier,
        session.specific_odds().percentage,
        session.specific_odds().tier,
    );
    println!(
        "break-even bid {} — claim is {} it",
        session.break_even_bid(),
        if session.is_above_break_even() { "within" } else { "past" },
    );

    // Now enter your own three dice: two fives and a two.
    session.set_my_dice_count(3);
    session.initialize_hand();
    session.set_hand_die(0, Some(5));
    session.set_hand_die(1, Some(5));
    session.set_hand_die(2, Some(2));

    let hand = session.hand().expect("hand was initialized");
    println!("\nyour hand: {}", hand.hand_summary());
    println!(
        "conditional: {} ({}), vs blind baseline: {}",
        session.conditional_odds().percentage,
        session.conditional_odds().tier,
        session.improvement_string(),
    );

    // 3. What a display layer would consume.
    let snapshot = serde_json::json!({
        "total_dice": session.total_dice(),
        "bid": session.current_bid(),
        "bid_face": session.bid_face(),
        "hand": hand,
        "any_face": session.bid_odds(),
        "specific_face": session.specific_odds(),
        "conditional": session.conditional_odds(),
        "break_even_bid": session.break_even_bid(),
    });
    println!("\n=== snapshot ===");
    println!("{}", serde_json::to_string_pretty(&snapshot).expect("serializable"));
}
