use std::time::{Duration, Instant};

use crate::game::StepResult;

/// Statistics for one run of the program; nothing is persisted
pub struct SessionStats {
    pub game_started: Instant,
    pub game_time: Duration,
    pub games_played: u32,
    pub best_score: u32,
    pub foods_eaten: u32,
    pub reversals: u32,
    /// Freezes the clock once the current game ends
    finished: bool,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            game_started: Instant::now(),
            game_time: Duration::ZERO,
            games_played: 0,
            best_score: 0,
            foods_eaten: 0,
            reversals: 0,
            finished: false,
        }
    }

    /// Refresh the game clock
    pub fn update(&mut self) {
        if !self.finished {
            self.game_time = self.game_started.elapsed();
        }
    }

    pub fn on_game_start(&mut self) {
        self.game_started = Instant::now();
        self.game_time = Duration::ZERO;
        self.finished = false;
    }

    pub fn record_step(&mut self, result: &StepResult, score: u32) {
        if result.info.ate_food {
            self.foods_eaten += 1;
        }
        if result.info.reversed {
            self.reversals += 1;
        }
        if result.info.end_reason.is_some() {
            self.on_game_over(score);
        }
    }

    fn on_game_over(&mut self, final_score: u32) {
        self.update();
        self.finished = true;
        self.games_played += 1;
        self.best_score = self.best_score.max(final_score);
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.game_time.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{EndReason, StepInfo};

    fn result(ate_food: bool, reversed: bool, end_reason: Option<EndReason>) -> StepResult {
        StepResult {
            terminated: end_reason.is_some(),
            tick_interval_ms: 250,
            info: StepInfo {
                ate_food,
                reversed,
                end_reason,
            },
        }
    }

    #[test]
    fn test_time_formatting() {
        let mut stats = SessionStats::new();
        stats.game_time = Duration::from_secs(125);
        assert_eq!(stats.format_time(), "02:05");

        stats.game_time = Duration::from_secs(3661);
        assert_eq!(stats.format_time(), "61:01");
    }

    #[test]
    fn test_counts_food_and_reversals() {
        let mut stats = SessionStats::new();
        stats.record_step(&result(true, false, None), 1);
        stats.record_step(&result(false, false, None), 1);
        stats.record_step(&result(true, true, None), 2);

        assert_eq!(stats.foods_eaten, 2);
        assert_eq!(stats.reversals, 1);
        assert_eq!(stats.games_played, 0);
    }

    #[test]
    fn test_best_score_never_decreases() {
        let mut stats = SessionStats::new();

        stats.record_step(&result(false, false, Some(EndReason::HitWall)), 10);
        assert_eq!(stats.best_score, 10);

        stats.on_game_start();
        stats.record_step(&result(false, false, Some(EndReason::AteTail)), 4);
        assert_eq!(stats.best_score, 10);
        assert_eq!(stats.games_played, 2);
    }

    #[test]
    fn test_clock_stops_at_game_over() {
        let mut stats = SessionStats::new();
        stats.record_step(&result(false, false, Some(EndReason::HitWall)), 0);
        let frozen = stats.game_time;

        std::thread::sleep(Duration::from_millis(20));
        stats.update();
        assert_eq!(stats.game_time, frozen);

        stats.on_game_start();
        assert_eq!(stats.game_time, Duration::ZERO);
    }
}
