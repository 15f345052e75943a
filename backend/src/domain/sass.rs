//! Flavor text attached to personal budget moves.
//!
//! The line is picked from the move kind and its size, so the same move always
//! gets the same remark.

use shared::MoveKind;

pub fn sass_for(kind: MoveKind, amount: f64) -> &'static str {
    match kind {
        MoveKind::Earn if amount >= 50.0 => "Look at you, making it rain!",
        MoveKind::Earn => "Cha-ching! Every dollar counts.",
        MoveKind::Spend if amount >= 50.0 => "Whoa, big spender. Hope it was worth it.",
        MoveKind::Spend if amount >= 20.0 => "Treat yourself... but not every day.",
        MoveKind::Spend => "Small splurge. The piggy bank barely noticed.",
        MoveKind::Save if amount >= 20.0 => "Future you says thank you!",
        MoveKind::Save => "Slow and steady fills the jar.",
        MoveKind::Withdraw => "Raiding the piggy bank? Bold move.",
    }
}
