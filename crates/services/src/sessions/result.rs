use serde::Serialize;

//
// ─── ENCOURAGEMENT ─────────────────────────────────────────────────────────────
//

/// Message band chosen from the final percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Encouragement {
    Outstanding,
    Excellent,
    Great,
    Good,
    KeepTrying,
}

impl Encouragement {
    /// Bands start at 90, 80, 70 and 60 percent.
    #[must_use]
    pub fn for_percentage(percentage: u32) -> Self {
        match percentage {
            90.. => Self::Outstanding,
            80..=89 => Self::Excellent,
            70..=79 => Self::Great,
            60..=69 => Self::Good,
            _ => Self::KeepTrying,
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Outstanding => "Outstanding! You're a math superstar! ⭐",
            Self::Excellent => "Excellent work! Keep it up! 🌟",
            Self::Great => "Great job! You're getting better! 👍",
            Self::Good => "Good effort! Practice makes perfect! 💪",
            Self::KeepTrying => "Keep trying! Every practice session makes you stronger! 🚀",
        }
    }
}

//
// ─── RESULT ────────────────────────────────────────────────────────────────────
//

pub const MAX_STARS: u32 = 5;

/// Final scoring of a completed session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizResult {
    pub score: u32,
    pub total: u32,
    pub percentage: u32,
    pub stars: u32,
    pub encouragement: Encouragement,
    pub elapsed_secs: u64,
}

impl QuizResult {
    #[must_use]
    pub fn from_score(score: u32, total: u32, elapsed_secs: u64) -> Self {
        let percentage = percentage(score, total);
        Self {
            score,
            total,
            percentage,
            stars: percentage.div_ceil(20).clamp(1, MAX_STARS),
            encouragement: Encouragement::for_percentage(percentage),
            elapsed_secs,
        }
    }

    #[must_use]
    pub fn message(&self) -> &'static str {
        self.encouragement.message()
    }
}

/// `round(100 * score / total)`, or 0 for an empty session.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percentage(score: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * f64::from(score) / f64::from(total)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_score_gets_five_stars() {
        let result = QuizResult::from_score(25, 25, 90);
        assert_eq!(result.percentage, 100);
        assert_eq!(result.stars, 5);
        assert_eq!(result.encouragement, Encouragement::Outstanding);
    }

    #[test]
    fn sixty_percent_gets_three_stars() {
        let result = QuizResult::from_score(15, 25, 0);
        assert_eq!(result.percentage, 60);
        assert_eq!(result.stars, 3);
        assert_eq!(result.encouragement, Encouragement::Good);
    }

    #[test]
    fn zero_score_still_gets_one_star() {
        let result = QuizResult::from_score(0, 25, 0);
        assert_eq!(result.percentage, 0);
        assert_eq!(result.stars, 1);
        assert_eq!(result.encouragement, Encouragement::KeepTrying);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(QuizResult::from_score(1, 3, 0).percentage, 33);
        assert_eq!(QuizResult::from_score(2, 3, 0).percentage, 67);
        assert_eq!(QuizResult::from_score(1, 8, 0).percentage, 13);
        // 41% rounds the star count up
        assert_eq!(QuizResult::from_score(41, 100, 0).stars, 3);
    }

    #[test]
    fn bands_have_inclusive_lower_edges() {
        assert_eq!(Encouragement::for_percentage(90), Encouragement::Outstanding);
        assert_eq!(Encouragement::for_percentage(89), Encouragement::Excellent);
        assert_eq!(Encouragement::for_percentage(70), Encouragement::Great);
        assert_eq!(Encouragement::for_percentage(59), Encouragement::KeepTrying);
    }
}
