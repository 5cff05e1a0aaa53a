//! Unit tests for bonus point ranking

use super::*;
use crate::cli::types::{FixtureId, Position};

/// A midfielder whose BPS is exactly `bps` (recoveries weigh 1).
fn player(id: u32, bps: u32) -> PlayerStatRecord {
    PlayerStatRecord {
        minutes: 90,
        recoveries: bps,
        ..PlayerStatRecord::new(PlayerId::new(id), FixtureId::new(1), Position::Midfielder)
    }
}

fn bonuses(table: &BonusTable, ids: &[u32]) -> Vec<u32> {
    ids.iter()
        .map(|&id| table.bonus_for(PlayerId::new(id)))
        .collect()
}

#[test]
fn test_three_distinct_values() {
    let records = vec![player(1, 50), player(2, 40), player(3, 30), player(4, 20)];
    let table = calculate_bonus(&ScoringRules::default(), &records);

    assert_eq!(bonuses(&table, &[1, 2, 3, 4]), vec![3, 2, 1, 0]);
    assert_eq!(table.total_awarded(), 6);
    assert_eq!(table.len(), 4);
}

#[test]
fn test_tie_at_top_shares_three_and_next_value_gets_two() {
    let records = vec![player(1, 40), player(2, 40), player(3, 30)];
    let table = calculate_bonus(&ScoringRules::default(), &records);

    assert_eq!(bonuses(&table, &[1, 2, 3]), vec![3, 3, 2]);
}

#[test]
fn test_tie_at_third_value_shares_one() {
    let records = vec![
        player(1, 50),
        player(2, 40),
        player(3, 30),
        player(4, 30),
        player(5, 29),
    ];
    let table = calculate_bonus(&ScoringRules::default(), &records);

    assert_eq!(bonuses(&table, &[1, 2, 3, 4, 5]), vec![3, 2, 1, 1, 0]);
}

#[test]
fn test_fewer_than_three_players() {
    let records = vec![player(1, 20), player(2, 10)];
    let table = calculate_bonus(&ScoringRules::default(), &records);
    assert_eq!(bonuses(&table, &[1, 2]), vec![3, 2]);

    let single = vec![player(7, 5)];
    let table = calculate_bonus(&ScoringRules::default(), &single);
    assert_eq!(table.bonus_for(PlayerId::new(7)), 3);
}

#[test]
fn test_zero_bps_never_awarded() {
    let records = vec![player(1, 10), player(2, 0), player(3, 0)];
    let table = calculate_bonus(&ScoringRules::default(), &records);
    assert_eq!(bonuses(&table, &[1, 2, 3]), vec![3, 0, 0]);

    let all_zero = vec![player(1, 0), player(2, 0)];
    let table = calculate_bonus(&ScoringRules::default(), &all_zero);
    assert_eq!(table.total_awarded(), 0);
}

#[test]
fn test_players_without_minutes_are_not_ranked() {
    let mut benched = player(9, 80);
    benched.minutes = 0;
    let records = vec![player(1, 30), benched];

    let table = calculate_bonus(&ScoringRules::default(), &records);
    assert_eq!(table.len(), 1);
    assert_eq!(table.bonus_for(PlayerId::new(9)), 0);
    assert_eq!(table.bps_for(PlayerId::new(9)), None);
    assert_eq!(table.bonus_for(PlayerId::new(1)), 3);
}

#[test]
fn test_empty_input() {
    let table = calculate_bonus(&ScoringRules::default(), &Vec::new());
    assert!(table.is_empty());
    assert_eq!(table.total_awarded(), 0);
}

#[test]
fn test_ranking_order_is_bps_desc_then_id_asc() {
    let records = vec![player(5, 30), player(2, 40), player(3, 30), player(1, 10)];
    let table = calculate_bonus(&ScoringRules::default(), &records);

    let order: Vec<u32> = table.awards().iter().map(|a| a.player_id.as_u32()).collect();
    assert_eq!(order, vec![2, 3, 5, 1]);
    assert_eq!(table.bps_for(PlayerId::new(5)), Some(30));
}

#[test]
fn test_result_independent_of_input_order() {
    let records = vec![
        player(4, 12),
        player(1, 40),
        player(3, 12),
        player(2, 40),
        player(6, 3),
    ];
    let mut reversed = records.clone();
    reversed.reverse();

    let rules = ScoringRules::default();
    let a = calculate_bonus(&rules, &records);
    let b = calculate_bonus(&rules, &reversed);
    assert_eq!(a, b);

    // Running again on unchanged input yields the same awards.
    assert_eq!(a, calculate_bonus(&rules, &records));
}

#[test]
fn test_awards_bounded_and_ties_share() {
    let inputs: Vec<Vec<u32>> = vec![
        vec![1, 1, 1, 1],
        vec![9, 8, 8, 7, 7, 7, 6],
        vec![0, 5, 5, 0, 2],
        vec![100, 99, 98, 97, 96],
    ];
    let rules = ScoringRules::default();

    for values in inputs {
        let records: Vec<PlayerStatRecord> = values
            .iter()
            .enumerate()
            .map(|(i, &bps)| player(i as u32 + 1, bps))
            .collect();
        let table = calculate_bonus(&rules, &records);

        for a in table.awards() {
            assert!(a.bonus <= 3);
            for b in table.awards() {
                if a.bps == b.bps {
                    assert_eq!(a.bonus, b.bonus, "tied BPS must share bonus: {:?}", values);
                }
                if a.bps > b.bps {
                    assert!(a.bonus >= b.bonus);
                }
            }
        }
    }
}

#[test]
fn test_bps_uses_each_players_position() {
    let defender = PlayerStatRecord {
        minutes: 90,
        clean_sheets: 1,
        ..PlayerStatRecord::new(PlayerId::new(1), FixtureId::new(1), Position::Defender)
    };
    let midfielder = PlayerStatRecord {
        minutes: 90,
        clean_sheets: 1,
        ..PlayerStatRecord::new(PlayerId::new(2), FixtureId::new(1), Position::Midfielder)
    };

    let table = calculate_bonus(&ScoringRules::default(), [&defender, &midfielder]);
    assert_eq!(table.bps_for(PlayerId::new(1)), Some(12));
    assert_eq!(table.bps_for(PlayerId::new(2)), Some(6));
    assert_eq!(table.bonus_for(PlayerId::new(1)), 3);
    assert_eq!(table.bonus_for(PlayerId::new(2)), 2);
}
