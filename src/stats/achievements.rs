//! Achievement catalogue and unlock tracking.

use crate::stats::GameStats;
use log::info;

/// Which lifetime statistic an achievement measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementKind {
    Score,
    Length,
    Level,
    Foods,
    SpecialFoods,
    GamesPlayed,
    /// Measured in minutes.
    TimePlayed,
    Combo,
}

impl AchievementKind {
    fn measure(self, stats: &GameStats) -> u64 {
        match self {
            AchievementKind::Score => stats.high_score,
            AchievementKind::Length => u64::from(stats.max_length),
            AchievementKind::Level => u64::from(stats.max_level),
            AchievementKind::Foods => u64::from(stats.total_foods_eaten),
            AchievementKind::SpecialFoods => u64::from(stats.special_foods_eaten),
            AchievementKind::GamesPlayed => u64::from(stats.games_played),
            AchievementKind::TimePlayed => stats.minutes_played(),
            AchievementKind::Combo => u64::from(stats.max_combo),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: AchievementKind,
    pub target: u64,
    pub unlocked: bool,
    pub progress: u64,
}

impl Achievement {
    const fn new(
        name: &'static str,
        description: &'static str,
        kind: AchievementKind,
        target: u64,
    ) -> Self {
        Self {
            name,
            description,
            kind,
            target,
            unlocked: false,
            progress: 0,
        }
    }

    /// Refresh progress from `stats`. Returns true only on the call that unlocks it.
    pub fn check_progress(&mut self, stats: &GameStats) -> bool {
        self.progress = self.kind.measure(stats);
        if !self.unlocked && self.progress >= self.target {
            self.unlocked = true;
            return true;
        }
        false
    }

    pub fn progress_percent(&self) -> f32 {
        if self.unlocked {
            return 100.0;
        }
        (self.progress as f32 / self.target as f32 * 100.0).min(100.0)
    }
}

fn catalogue() -> Vec<Achievement> {
    use AchievementKind::*;

    vec![
        Achievement::new("First Steps", "Score your first 100 points", Score, 100),
        Achievement::new("Getting Good", "Reach 1,000 points", Score, 1_000),
        Achievement::new("Snake Master", "Reach 5,000 points", Score, 5_000),
        Achievement::new("Legend", "Reach 10,000 points", Score, 10_000),
        Achievement::new("Godlike", "Reach 25,000 points", Score, 25_000),
        Achievement::new("Growing Up", "Reach length of 10", Length, 10),
        Achievement::new("Big Snake", "Reach length of 25", Length, 25),
        Achievement::new("Huge Snake", "Reach length of 50", Length, 50),
        Achievement::new("Colossal", "Reach length of 100", Length, 100),
        Achievement::new("Leveling Up", "Reach level 5", Level, 5),
        Achievement::new("Experienced", "Reach level 10", Level, 10),
        Achievement::new("Expert", "Reach level 20", Level, 20),
        Achievement::new("Unstoppable", "Reach level 50", Level, 50),
        Achievement::new("Hungry", "Eat 50 foods", Foods, 50),
        Achievement::new("Voracious", "Eat 200 foods", Foods, 200),
        Achievement::new("Omnivore", "Eat 500 foods", Foods, 500),
        Achievement::new("Foodie", "Eat 1000 foods", Foods, 1_000),
        Achievement::new("Magic Taste", "Eat 10 special foods", SpecialFoods, 10),
        Achievement::new("Power Hunter", "Eat 50 special foods", SpecialFoods, 50),
        Achievement::new("Gourmet", "Eat 100 special foods", SpecialFoods, 100),
        Achievement::new("Casual Player", "Play for 30 minutes", TimePlayed, 30),
        Achievement::new("Dedicated", "Play for 2 hours", TimePlayed, 120),
        Achievement::new("Addicted", "Play for 10 hours", TimePlayed, 600),
        Achievement::new("Combo Starter", "Achieve 5x combo", Combo, 5),
        Achievement::new("Combo Master", "Achieve 10x combo", Combo, 10),
        Achievement::new("Combo God", "Achieve 15x combo", Combo, 15),
        Achievement::new("Persistent", "Play 10 games", GamesPlayed, 10),
        Achievement::new("Determined", "Play 50 games", GamesPlayed, 50),
        Achievement::new("Never Give Up", "Play 100 games", GamesPlayed, 100),
    ]
}

/// Tracks every achievement and reports fresh unlocks.
#[derive(Debug, Clone)]
pub struct AchievementSystem {
    achievements: Vec<Achievement>,
}

impl AchievementSystem {
    pub fn new() -> Self {
        Self {
            achievements: catalogue(),
        }
    }

    /// Restore unlock flags by name; unknown names are ignored.
    pub fn restore_unlocked<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            if let Some(achievement) = self.achievements.iter_mut().find(|a| a.name == name) {
                achievement.unlocked = true;
            }
        }
    }

    /// Re-evaluate everything against `stats`, returning names unlocked by this call.
    pub fn update(&mut self, stats: &GameStats) -> Vec<&'static str> {
        let mut unlocked = Vec::new();
        for achievement in &mut self.achievements {
            if achievement.check_progress(stats) {
                info!(
                    "Achievement unlocked: {} ({})",
                    achievement.name, achievement.description
                );
                unlocked.push(achievement.name);
            }
        }
        unlocked
    }

    /// The locked achievement closest to unlocking; ties go to catalogue order.
    pub fn closest_locked(&self) -> Option<&Achievement> {
        self.achievements
            .iter()
            .filter(|a| !a.unlocked)
            .rev()
            .max_by(|a, b| a.progress_percent().total_cmp(&b.progress_percent()))
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn unlocked_names(&self) -> Vec<String> {
        self.achievements
            .iter()
            .filter(|a| a.unlocked)
            .map(|a| a.name.to_string())
            .collect()
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.iter().filter(|a| a.unlocked).count()
    }

    pub fn total_count(&self) -> usize {
        self.achievements.len()
    }
}

impl Default for AchievementSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_complete() {
        let system = AchievementSystem::new();
        assert_eq!(system.total_count(), 29);
        assert_eq!(system.unlocked_count(), 0);
    }

    #[test]
    fn unlocks_are_reported_once() {
        let mut system = AchievementSystem::new();
        let stats = GameStats {
            high_score: 150,
            max_length: 10,
            ..GameStats::default()
        };

        let first = system.update(&stats);
        assert_eq!(first, vec!["First Steps", "Growing Up"]);
        assert!(system.update(&stats).is_empty());
        assert_eq!(system.unlocked_count(), 2);
    }

    #[test]
    fn time_played_counts_minutes() {
        let mut system = AchievementSystem::new();
        let stats = GameStats {
            total_seconds_played: 30 * 60,
            ..GameStats::default()
        };
        assert_eq!(system.update(&stats), vec!["Casual Player"]);
    }

    #[test]
    fn progress_percent_caps_and_sticks() {
        let mut system = AchievementSystem::new();
        system.update(&GameStats {
            high_score: 500,
            ..GameStats::default()
        });
        let getting_good = system
            .achievements()
            .iter()
            .find(|a| a.name == "Getting Good")
            .unwrap();
        assert_eq!(getting_good.progress_percent(), 50.0);

        system.restore_unlocked(["Legend", "No Such Badge"]);
        let legend = system
            .achievements()
            .iter()
            .find(|a| a.name == "Legend")
            .unwrap();
        assert_eq!(legend.progress_percent(), 100.0);
        assert_eq!(system.unlocked_names(), vec!["First Steps", "Legend"]);
    }

    #[test]
    fn closest_locked_prefers_most_progress() {
        let mut system = AchievementSystem::new();
        assert_eq!(system.closest_locked().unwrap().name, "First Steps");

        system.update(&GameStats {
            high_score: 500,
            max_length: 9,
            ..GameStats::default()
        });
        let next = system.closest_locked().unwrap();
        assert_eq!(next.name, "Growing Up");
        assert_eq!(next.progress_percent(), 90.0);
    }
}
