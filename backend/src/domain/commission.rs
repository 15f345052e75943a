//! Commission and penalty arithmetic.
//!
//! These are the only money rules in the bank: the accountant keeps a cut of
//! every deposit, and late clients pay a flat fee per day.

pub const DEFAULT_COMMISSION_RATE: f64 = 0.15;
pub const DEFAULT_PENALTY_PER_DAY: f64 = 5.00;

/// A pop-quiz answer within a cent of the real figure counts as correct
const QUIZ_TOLERANCE: f64 = 0.01;

/// How a deposit is divided between the accountant and the client
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommissionSplit {
    pub commission: f64,
    pub net: f64,
}

/// Round to two decimals using the exact binary value, ties to even.
///
/// `0.5 * 0.15` is stored as `0.07499999...`, so it rounds to `0.07`, not `0.08`.
pub fn round_to_cents(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// `requested > available`, compared at cent precision
pub fn exceeds_cents(requested: f64, available: f64) -> bool {
    round_to_cents(requested) > round_to_cents(available)
}

/// `commission = round(amount * rate, 2)`, `net = amount - commission`
pub fn split_deposit(amount: f64, rate: f64) -> CommissionSplit {
    let commission = round_to_cents(amount * rate);
    CommissionSplit {
        commission,
        net: amount - commission,
    }
}

pub fn calculate_penalty(days_late: u32, per_day: f64) -> f64 {
    round_to_cents(days_late as f64 * per_day)
}

pub fn guess_matches(guess: f64, actual: f64) -> bool {
    (guess - actual).abs() < QUIZ_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hundred_dollar_deposit() {
        let split = split_deposit(100.0, DEFAULT_COMMISSION_RATE);
        assert_eq!(split.commission, 15.0);
        assert_eq!(split.net, 85.0);
    }

    #[test]
    fn test_commission_rounds_to_cents() {
        let split = split_deposit(12.34, DEFAULT_COMMISSION_RATE);
        assert_eq!(split.commission, 1.85);
        assert!((split.net - 10.49).abs() < 1e-9);
    }

    #[test]
    fn test_split_always_adds_back_up() {
        for cents in (0..5_000).step_by(37) {
            let amount = cents as f64 / 100.0;
            let split = split_deposit(amount, DEFAULT_COMMISSION_RATE);
            assert!((split.commission + split.net - amount).abs() < 1e-9);
            assert_eq!(split.commission, round_to_cents(split.commission));
        }
    }

    #[test]
    fn test_rounding_follows_stored_value() {
        assert_eq!(split_deposit(0.50, DEFAULT_COMMISSION_RATE).commission, 0.07);
        assert_eq!(round_to_cents(2.675), 2.67);
        assert_eq!(round_to_cents(-1.006), -1.01);
    }

    #[test]
    fn test_exceeds_cents_ignores_drift() {
        let available = 0.3 - 0.1;
        assert!(0.2 > available);
        assert!(!exceeds_cents(0.2, available));
        assert!(exceeds_cents(0.21, available));
    }

    #[test]
    fn test_penalty_per_day() {
        assert_eq!(calculate_penalty(1, DEFAULT_PENALTY_PER_DAY), 5.0);
        assert_eq!(calculate_penalty(7, DEFAULT_PENALTY_PER_DAY), 35.0);
    }

    #[test]
    fn test_guess_tolerance() {
        assert!(guess_matches(15.0, 15.0));
        assert!(guess_matches(15.005, 15.0));
        assert!(!guess_matches(15.02, 15.0));
        assert!(!guess_matches(1.5, 15.0));
    }
}
