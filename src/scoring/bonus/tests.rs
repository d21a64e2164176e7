//! Unit tests for provisional bonus ranking

use super::*;
use crate::{
    live::{Appearance, Fixture, LivePlayer, PlayerStatSnapshot},
    types::{ids::TeamId, position::Position},
};

#[cfg(test)]
mod bonus_tests {
    use super::*;

    fn entry(id: u32, minutes: u16, bps: i32) -> PlayerLiveEntry {
        PlayerLiveEntry {
            player: PlayerId::new(id),
            minutes,
            bps,
        }
    }

    fn awarded(map: &BTreeMap<PlayerId, u8>, id: u32) -> u8 {
        map.get(&PlayerId::new(id)).copied().unwrap_or(0)
    }

    #[test]
    fn test_clear_top_three() {
        let roster = vec![
            entry(1, 90, 20),
            entry(2, 90, 35),
            entry(3, 90, 28),
            entry(4, 90, 10),
        ];

        let bonus = compute_bonus(&roster, FixtureStatus::Started);
        assert_eq!(awarded(&bonus, 2), 3);
        assert_eq!(awarded(&bonus, 3), 2);
        assert_eq!(awarded(&bonus, 1), 1);
        assert_eq!(awarded(&bonus, 4), 0);
        assert_eq!(bonus.len(), 3);
    }

    #[test]
    fn test_tie_for_first_skips_second_place() {
        let roster = vec![
            entry(1, 90, 30),
            entry(2, 90, 30),
            entry(3, 90, 25),
            entry(4, 90, 20),
        ];

        let bonus = compute_bonus(&roster, FixtureStatus::Started);
        assert_eq!(awarded(&bonus, 1), 3);
        assert_eq!(awarded(&bonus, 2), 3);
        assert_eq!(awarded(&bonus, 3), 1);
        assert_eq!(awarded(&bonus, 4), 0);
    }

    #[test]
    fn test_tie_for_second_leaves_no_third() {
        let roster = vec![
            entry(1, 90, 40),
            entry(2, 90, 30),
            entry(3, 90, 30),
            entry(4, 90, 20),
        ];

        let bonus = compute_bonus(&roster, FixtureStatus::Started);
        assert_eq!(awarded(&bonus, 1), 3);
        assert_eq!(awarded(&bonus, 2), 2);
        assert_eq!(awarded(&bonus, 3), 2);
        assert_eq!(awarded(&bonus, 4), 0);
    }

    #[test]
    fn test_tie_for_third_shares_one_point() {
        let roster = vec![
            entry(1, 90, 40),
            entry(2, 90, 35),
            entry(3, 90, 30),
            entry(4, 90, 30),
            entry(5, 90, 30),
            entry(6, 90, 12),
        ];

        let bonus = compute_bonus(&roster, FixtureStatus::Started);
        assert_eq!(awarded(&bonus, 3), 1);
        assert_eq!(awarded(&bonus, 4), 1);
        assert_eq!(awarded(&bonus, 5), 1);
        assert_eq!(awarded(&bonus, 6), 0);
    }

    #[test]
    fn test_three_way_tie_for_first() {
        let roster = vec![
            entry(1, 90, 30),
            entry(2, 90, 30),
            entry(3, 90, 30),
            entry(4, 90, 29),
        ];

        let bonus = compute_bonus(&roster, FixtureStatus::Started);
        assert_eq!(bonus.values().copied().collect::<Vec<_>>(), vec![3, 3, 3]);
        assert_eq!(awarded(&bonus, 4), 0);
    }

    #[test]
    fn test_players_without_minutes_are_ignored() {
        let roster = vec![
            entry(1, 0, 50),
            entry(2, 12, 5),
            entry(3, 90, 3),
        ];

        let bonus = compute_bonus(&roster, FixtureStatus::Started);
        assert_eq!(awarded(&bonus, 1), 0);
        assert_eq!(awarded(&bonus, 2), 3);
        assert_eq!(awarded(&bonus, 3), 2);
        assert_eq!(bonus.len(), 2);
    }

    #[test]
    fn test_negative_bps_still_ranks() {
        let roster = vec![entry(1, 90, -3), entry(2, 90, -1), entry(3, 90, -7), entry(4, 90, -9)];

        let bonus = compute_bonus(&roster, FixtureStatus::Started);
        assert_eq!(awarded(&bonus, 2), 3);
        assert_eq!(awarded(&bonus, 1), 2);
        assert_eq!(awarded(&bonus, 3), 1);
        assert_eq!(awarded(&bonus, 4), 0);
    }

    #[test]
    fn test_only_started_fixtures_award() {
        let roster = vec![entry(1, 90, 30), entry(2, 90, 20), entry(3, 90, 10)];

        assert!(compute_bonus(&roster, FixtureStatus::NotStarted).is_empty());
        assert!(compute_bonus(&roster, FixtureStatus::Finished).is_empty());
        assert_eq!(compute_bonus(&roster, FixtureStatus::Started).len(), 3);
    }

    #[test]
    fn test_empty_roster() {
        assert!(compute_bonus(&[], FixtureStatus::Started).is_empty());
    }

    #[test]
    fn test_exactly_top_three_ranked_receive_bonus() {
        // distinct BPS: exactly three non-zero awards regardless of roster size
        for size in 3..12u32 {
            let roster: Vec<_> = (1..=size).map(|i| entry(i, 90, (i * 7 % 13) as i32 * 10 + i as i32)).collect();
            let bonus = compute_bonus(&roster, FixtureStatus::Started);
            assert_eq!(bonus.len(), 3, "roster size {}", size);
            let mut values: Vec<u8> = bonus.values().copied().collect();
            values.sort_unstable();
            assert_eq!(values, vec![1, 2, 3]);
        }
    }

    fn live_player(id: u32, fixture: u32, minutes: u16, bps: i32) -> LivePlayer {
        LivePlayer {
            id: PlayerId::new(id),
            name: format!("P{}", id),
            position: Position::Midfielder,
            team: Some(TeamId::new(1)),
            appearances: vec![Appearance {
                fixture: FixtureId::new(fixture),
                stats: PlayerStatSnapshot {
                    minutes,
                    bps,
                    ..Default::default()
                },
            }],
        }
    }

    #[test]
    fn test_provisional_bonus_per_gameweek() {
        let fixture = |id, status| Fixture {
            id: FixtureId::new(id),
            team_h: TeamId::new(1),
            team_a: TeamId::new(2),
            status,
        };
        let live = GameweekLive::new(
            None,
            vec![
                fixture(1, FixtureStatus::Started),
                fixture(2, FixtureStatus::Finished),
                fixture(3, FixtureStatus::NotStarted),
            ],
            vec![
                live_player(10, 1, 90, 30),
                live_player(11, 1, 90, 20),
                live_player(12, 2, 90, 50),
                live_player(13, 3, 0, 0),
            ],
        );

        let bonus = provisional_bonus(&live);
        assert_eq!(bonus.get(FixtureId::new(1), PlayerId::new(10)), 3);
        assert_eq!(bonus.get(FixtureId::new(1), PlayerId::new(11)), 2);
        assert_eq!(bonus.get(FixtureId::new(2), PlayerId::new(12)), 0);
        assert!(bonus.fixture(FixtureId::new(2)).is_none());
        assert!(bonus.fixture(FixtureId::new(3)).is_none());
        assert_eq!(bonus.iter().count(), 1);
    }
}
