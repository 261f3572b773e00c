//! Round scoring
//!
//! `score = max(MIN_SCORE, BASE_SCORE + time_bonus - penalty)` where the time bonus
//! rewards every second under `TIME_LIMIT_SECS` and the penalty charges every failed
//! validation.

use serde::Serialize;

pub const BASE_SCORE: u64 = 1000;
pub const TIME_LIMIT_SECS: u64 = 300;
pub const TIME_BONUS_PER_SEC: u64 = 10;
pub const ATTEMPT_PENALTY: u64 = 50;
pub const MIN_SCORE: u64 = 100;

/// Score for one finished round plus the running total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub score: u64,
    pub total_score: u64,
    pub base: u64,
    pub time_bonus: u64,
    pub penalty: u64,
    pub elapsed_secs: u64,
    pub attempts: u64,
}

/// Score a round; `total_score` is left at zero for the caller to fill in
///
/// # Examples
/// ```
/// use crucigrama::session::score_round;
///
/// let breakdown = score_round(250, 0);
/// assert_eq!(breakdown.score, 1500);
/// assert_eq!(score_round(0, 100).score, 100);
/// ```
#[must_use]
pub fn score_round(elapsed_secs: u64, attempts: u64) -> ScoreBreakdown {
    let time_bonus = TIME_LIMIT_SECS.saturating_sub(elapsed_secs) * TIME_BONUS_PER_SEC;
    let penalty = attempts.saturating_mul(ATTEMPT_PENALTY);
    let score = (BASE_SCORE + time_bonus)
        .saturating_sub(penalty)
        .max(MIN_SCORE);

    ScoreBreakdown {
        score,
        total_score: 0,
        base: BASE_SCORE,
        time_bonus,
        penalty,
        elapsed_secs,
        attempts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fast_clean_round() {
        let b = score_round(250, 0);
        assert_eq!(b.time_bonus, 500);
        assert_eq!(b.penalty, 0);
        assert_eq!(b.score, 1500);
    }

    #[test]
    fn slow_round_bonus_clamps_to_zero() {
        let b = score_round(400, 3);
        assert_eq!(b.time_bonus, 0);
        assert_eq!(b.penalty, 150);
        assert_eq!(b.score, 850);
    }

    #[test]
    fn instant_round_with_many_attempts() {
        let b = score_round(0, 50);
        assert_eq!(b.time_bonus, 3000);
        assert_eq!(b.penalty, 2500);
        assert_eq!(b.score, 1500);
    }

    #[test]
    fn heavy_penalty_clamps_to_floor() {
        let b = score_round(0, 100);
        assert_eq!(b.penalty, 5000);
        assert_eq!(b.score, MIN_SCORE);
    }

    #[test]
    fn exactly_at_time_limit() {
        let b = score_round(TIME_LIMIT_SECS, 0);
        assert_eq!(b.time_bonus, 0);
        assert_eq!(b.score, BASE_SCORE);
    }

    #[test]
    fn breakdown_records_inputs() {
        let b = score_round(42, 2);
        assert_eq!(b.elapsed_secs, 42);
        assert_eq!(b.attempts, 2);
        assert_eq!(b.base, BASE_SCORE);
    }
}
