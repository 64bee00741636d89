use std::time::{Duration, Instant};

/// Play statistics for the current session.
///
/// Everything here lives in memory only; nothing survives the process.
pub struct SessionStats {
    pub round_started: Instant,
    pub elapsed: Duration,
    pub best_score: u32,
    pub games_played: u32,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            round_started: Instant::now(),
            elapsed: Duration::ZERO,
            best_score: 0,
            games_played: 0,
        }
    }

    /// Advance the play clock; called once per rendered frame.
    pub fn refresh(&mut self) {
        self.elapsed = self.round_started.elapsed();
    }

    /// A new round begins: restart the clock.
    pub fn on_restart(&mut self) {
        self.round_started = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    /// A round ended with the given final score.
    pub fn on_game_over(&mut self, final_score: u32) {
        self.games_played += 1;
        if final_score > self.best_score {
            self.best_score = final_score;
        }
    }

    /// Round clock as `MM:SS`.
    pub fn clock(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
