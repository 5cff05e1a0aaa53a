//! Unit tests for the scoring weight tables

use super::*;
use crate::cli::types::{FixtureId, PlayerId};

#[cfg(test)]
mod points_for_tests {
    use super::*;

    fn rules() -> ScoringRules {
        ScoringRules::default()
    }

    #[test]
    fn test_appearance_points() {
        let rules = rules();
        assert_eq!(rules.points_for(Position::Forward, StatEvent::Minutes, 0), 0);
        assert_eq!(rules.points_for(Position::Forward, StatEvent::Minutes, 1), 1);
        assert_eq!(rules.points_for(Position::Forward, StatEvent::Minutes, 59), 1);
        assert_eq!(rules.points_for(Position::Forward, StatEvent::Minutes, 60), 2);
        assert_eq!(rules.points_for(Position::Forward, StatEvent::Minutes, 120), 2);
    }

    #[test]
    fn test_goal_points_by_position() {
        let rules = rules();
        assert_eq!(rules.points_for(Position::Goalkeeper, StatEvent::GoalScored, 1), 6);
        assert_eq!(rules.points_for(Position::Defender, StatEvent::GoalScored, 1), 6);
        assert_eq!(rules.points_for(Position::Midfielder, StatEvent::GoalScored, 1), 5);
        assert_eq!(rules.points_for(Position::Forward, StatEvent::GoalScored, 2), 8);
    }

    #[test]
    fn test_assist_points_flat() {
        let rules = rules();
        for position in Position::ALL {
            assert_eq!(rules.points_for(position, StatEvent::Assist, 2), 6);
        }
    }

    #[test]
    fn test_clean_sheet_points_by_position() {
        let rules = rules();
        assert_eq!(rules.points_for(Position::Goalkeeper, StatEvent::CleanSheet, 1), 4);
        assert_eq!(rules.points_for(Position::Defender, StatEvent::CleanSheet, 1), 4);
        assert_eq!(rules.points_for(Position::Midfielder, StatEvent::CleanSheet, 1), 1);
        assert_eq!(rules.points_for(Position::Forward, StatEvent::CleanSheet, 1), 0);
        assert_eq!(rules.points_for(Position::Defender, StatEvent::CleanSheet, 0), 0);
    }

    #[test]
    fn test_goals_conceded_floor_division() {
        let rules = rules();
        assert_eq!(rules.points_for(Position::Defender, StatEvent::GoalsConceded, 0), 0);
        assert_eq!(rules.points_for(Position::Defender, StatEvent::GoalsConceded, 1), 0);
        assert_eq!(rules.points_for(Position::Defender, StatEvent::GoalsConceded, 2), -1);
        assert_eq!(rules.points_for(Position::Goalkeeper, StatEvent::GoalsConceded, 3), -1);
        assert_eq!(rules.points_for(Position::Goalkeeper, StatEvent::GoalsConceded, 5), -2);
        assert_eq!(rules.points_for(Position::Midfielder, StatEvent::GoalsConceded, 6), 0);
        assert_eq!(rules.points_for(Position::Forward, StatEvent::GoalsConceded, 6), 0);
    }

    #[test]
    fn test_saves_goalkeeper_only() {
        let rules = rules();
        assert_eq!(rules.points_for(Position::Goalkeeper, StatEvent::Saves, 2), 0);
        assert_eq!(rules.points_for(Position::Goalkeeper, StatEvent::Saves, 3), 1);
        assert_eq!(rules.points_for(Position::Goalkeeper, StatEvent::Saves, 8), 2);
        assert_eq!(rules.points_for(Position::Defender, StatEvent::Saves, 9), 0);
    }

    #[test]
    fn test_penalty_points() {
        let rules = rules();
        assert_eq!(rules.points_for(Position::Goalkeeper, StatEvent::PenaltySaved, 1), 5);
        assert_eq!(rules.points_for(Position::Defender, StatEvent::PenaltySaved, 1), 0);
        assert_eq!(rules.points_for(Position::Forward, StatEvent::PenaltyMissed, 1), -2);
    }

    #[test]
    fn test_disciplinary_and_own_goal_points() {
        let rules = rules();
        assert_eq!(rules.points_for(Position::Midfielder, StatEvent::YellowCard, 1), -1);
        assert_eq!(rules.points_for(Position::Midfielder, StatEvent::RedCard, 1), -3);
        assert_eq!(rules.points_for(Position::Defender, StatEvent::OwnGoal, 2), -4);
    }

    #[test]
    fn test_defensive_contribution_threshold() {
        let rules = rules();
        assert_eq!(rules.points_for(Position::Defender, StatEvent::DefensiveContribution, 9), 0);
        assert_eq!(rules.points_for(Position::Defender, StatEvent::DefensiveContribution, 10), 2);
        assert_eq!(rules.points_for(Position::Defender, StatEvent::DefensiveContribution, 30), 2);
        assert_eq!(rules.points_for(Position::Midfielder, StatEvent::DefensiveContribution, 11), 0);
        assert_eq!(rules.points_for(Position::Midfielder, StatEvent::DefensiveContribution, 12), 2);
        assert_eq!(rules.points_for(Position::Forward, StatEvent::DefensiveContribution, 12), 2);
        assert_eq!(
            rules.points_for(Position::Goalkeeper, StatEvent::DefensiveContribution, 50),
            0
        );
    }

    #[test]
    fn test_defensive_contribution_absent_before_2025() {
        let rules = ScoringRules::for_season(Season::new(2024)).unwrap();
        assert_eq!(rules.points_for(Position::Defender, StatEvent::DefensiveContribution, 20), 0);
    }

    #[test]
    fn test_bonus_passes_through() {
        let rules = rules();
        assert_eq!(rules.points_for(Position::Forward, StatEvent::Bonus, 3), 3);
        assert_eq!(rules.points_for(Position::Forward, StatEvent::Bonus, 0), 0);
    }

    #[test]
    fn test_points_for_name_unknown_event_scores_zero() {
        let rules = rules();
        assert_eq!(rules.points_for_name(Position::Forward, "goals_scored", 1), 4);
        assert_eq!(rules.points_for_name(Position::Forward, "shots_on_target", 5), 0);
        assert_eq!(rules.points_for_name(Position::Forward, "", 5), 0);
    }
}

#[cfg(test)]
mod weights_tests {
    use super::*;

    #[test]
    fn test_stat_event_names_roundtrip() {
        for event in StatEvent::ALL {
            assert_eq!(event.name().parse::<StatEvent>(), Ok(event));
        }
    }

    #[test]
    fn test_defensive_actions_per_position() {
        let record = PlayerStatRecord {
            clearances: 3,
            blocks: 2,
            interceptions: 1,
            tackles: 4,
            recoveries: 2,
            ..PlayerStatRecord::new(PlayerId::new(1), FixtureId::new(1), Position::Defender)
        };
        assert_eq!(defensive_actions(Position::Goalkeeper, &record), 0);
        assert_eq!(defensive_actions(Position::Defender, &record), 10);
        assert_eq!(defensive_actions(Position::Midfielder, &record), 12);
        assert_eq!(defensive_actions(Position::Forward, &record), 12);
        assert_eq!(
            StatEvent::DefensiveContribution.count_in(Position::Defender, &record),
            10
        );
    }

    #[test]
    fn test_builtin_seasons() {
        assert_eq!(
            ScoringWeights::builtin(Season::new(2025)).unwrap(),
            ScoringWeights::season_2025_26()
        );
        assert!(ScoringWeights::builtin(Season::new(2024))
            .unwrap()
            .defensive_contribution
            .is_none());

        match ScoringWeights::builtin(Season::new(2019)) {
            Err(ScoringError::UnknownSeason { season }) => assert_eq!(season, "2019/20"),
            other => panic!("Expected UnknownSeason, got {:?}", other),
        }
    }

    #[test]
    fn test_weights_json_roundtrip_preserves_table() {
        let weights = ScoringWeights::season_2025_26();
        let json = serde_json::to_string_pretty(&weights).unwrap();
        assert!(json.contains("\"season\": \"2025/26\""));
        assert_eq!(ScoringWeights::from_json(&json).unwrap(), weights);
    }

    #[test]
    fn test_custom_weights_change_scoring() {
        let mut weights = ScoringWeights::season_2025_26();
        weights.goal_scored.forward = 5;
        let rules = ScoringRules::new(weights);
        assert_eq!(rules.points_for(Position::Forward, StatEvent::GoalScored, 1), 5);
    }

    #[test]
    fn test_from_json_defaults_optional_sections() {
        let mut value = serde_json::to_value(ScoringWeights::season_2024_25()).unwrap();
        let object = value.as_object_mut().unwrap();
        object.remove("bps");
        object.remove("defensive_contribution");

        let weights = ScoringWeights::from_json(&value.to_string()).unwrap();
        assert_eq!(weights.bps, BpsWeights::default());
        assert_eq!(weights.defensive_contribution, None);
    }

    #[test]
    fn test_zero_block_size_scores_nothing() {
        let mut weights = ScoringWeights::season_2025_26();
        weights.saves_per = 0;
        let rules = ScoringRules::new(weights);
        assert_eq!(rules.points_for(Position::Goalkeeper, StatEvent::Saves, 9), 0);
    }

    #[test]
    fn test_large_counts_saturate() {
        let rules = ScoringRules::default();
        let goals = rules.points_for(Position::Forward, StatEvent::GoalScored, 1_000_000_000);
        assert_eq!(goals, i32::MAX);
        assert_eq!(rules.points_for(Position::Forward, StatEvent::RedCard, u32::MAX), i32::MIN);
        assert_eq!(rules.points_for(Position::Forward, StatEvent::Bonus, u32::MAX), i32::MAX);
        let conceded = rules.points_for(Position::Defender, StatEvent::GoalsConceded, u32::MAX);
        assert_eq!(conceded, -i32::MAX);
    }

    #[test]
    fn test_rules_clone_shares_weights() {
        let rules = ScoringRules::default();
        let clone = rules.clone();
        assert_eq!(rules.season(), clone.season());
        assert!(std::ptr::eq(rules.weights(), clone.weights()));
    }
}
