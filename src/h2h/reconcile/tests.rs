//! Unit tests for head-to-head reconciliation

use super::*;
use crate::{
    config::Config,
    engine::pipeline::{score_squad, tests_support::*, ManagerPicks},
    live::{Appearance, FixtureStatus, GameweekLive, LivePlayer, PlayerStatSnapshot},
    squad::{test_support::STANDARD_LAYOUT, SquadBuilder},
    types::{chip::ChipState, ids::TeamId},
};

/// Ids 1-30; id n plays the position of ordinal ((n - 1) % 15) + 1 in the
/// standard layout. Everyone plays 90 minutes unless overridden.
fn live(overrides: Vec<(u32, Vec<Appearance>)>) -> GameweekLive {
    let players: Vec<LivePlayer> = (1..=30u32)
        .map(|id| {
            let appearances = overrides
                .iter()
                .find(|(p, _)| *p == id)
                .map(|(_, apps)| apps.clone())
                .unwrap_or_else(|| vec![minutes(1, 90)]);
            LivePlayer {
                id: PlayerId::new(id),
                name: format!("Player {}", id),
                position: STANDARD_LAYOUT[((id - 1) % 15) as usize],
                team: Some(TeamId::new(1)),
                appearances,
            }
        })
        .collect();
    GameweekLive::new(None, vec![fixture(1, FixtureStatus::Finished)], players)
}

fn goals(n: u16) -> Vec<Appearance> {
    vec![appearance(
        1,
        PlayerStatSnapshot {
            minutes: 90,
            goals_scored: n,
            ..Default::default()
        },
    )]
}

fn picks(manager: u64, ids: [u32; 15], captain: u32, vice: u32) -> ManagerPicks {
    let squad = STANDARD_LAYOUT
        .iter()
        .zip(ids)
        .fold(SquadBuilder::new(), |b, (pos, id)| {
            b.player(PlayerId::new(id), format!("Player {}", id), *pos)
        })
        .captain(PlayerId::new(captain))
        .vice_captain(PlayerId::new(vice))
        .build()
        .unwrap();
    ManagerPicks {
        manager: ManagerId::new(manager),
        name: format!("Manager {}", manager),
        squad,
        chip: ChipState::None,
        transfer_cost: 0,
        captain_multiplier_override: None,
    }
}

const BASE: [u32; 15] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

fn with(mut ids: [u32; 15], replace: &[(usize, u32)]) -> [u32; 15] {
    for (ordinal, id) in replace {
        ids[ordinal - 1] = *id;
    }
    ids
}

fn scored(live: &GameweekLive, picks: &ManagerPicks) -> ScoredSquad {
    score_squad(live, picks, &Config::default()).unwrap()
}

fn kinds(side: &SideBreakdown) -> Vec<(Option<u32>, DifferentialKind, i32)> {
    side.differentials
        .iter()
        .map(|d| (d.player.map(|p| p.as_u32()), d.kind, d.points))
        .collect()
}

fn assert_balanced(m: &MatchBreakdown) {
    assert_eq!(
        m.margin,
        m.side_a.differential_total - m.side_b.differential_total
    );
    assert_eq!(m.margin, m.side_a.net_total - m.side_b.net_total);
}

#[cfg(test)]
mod reconcile_tests {
    use super::*;

    #[test]
    fn test_identical_squads_have_no_differentials() {
        let live = live(vec![]);
        let a = scored(&live, &picks(1, BASE, 10, 6));
        let b = scored(&live, &picks(2, BASE, 10, 6));
        let m = reconcile(&a, &b);

        assert!(m.side_a.differentials.is_empty());
        assert!(m.side_b.differentials.is_empty());
        assert_eq!(m.common.len(), 11);
        assert_eq!(m.margin, 0);
        assert_eq!(m.leader(), None);
        assert!(m.common.iter().all(|c| !c.placeholder));
        let captain = m.common.iter().find(|c| c.player == PlayerId::new(10)).unwrap();
        assert_eq!(captain.points_a, 4);
        assert_eq!(captain.points_b, 4);
        assert_eq!(captain.raw_points, 2);
    }

    #[test]
    fn test_pure_differentials() {
        let live = live(vec![(7, goals(1))]);
        let a = scored(&live, &picks(1, BASE, 10, 6));
        // 22 is a midfielder, like 7
        let b = scored(&live, &picks(2, with(BASE, &[(7, 22)]), 10, 6));
        let m = reconcile(&a, &b);

        assert_eq!(kinds(&m.side_a), vec![(Some(7), DifferentialKind::Pure, 7)]);
        assert_eq!(kinds(&m.side_b), vec![(Some(22), DifferentialKind::Pure, 2)]);
        assert_eq!(m.common.len(), 10);
        assert_eq!(m.margin, 5);
        assert_eq!(m.leader(), Some(ManagerId::new(1)));
        assert_balanced(&m);
    }

    #[test]
    fn test_position_differentials() {
        let live = live(vec![(14, goals(2))]);
        let a = scored(&live, &picks(1, BASE, 10, 6));
        // 7 and 14 swap between the XI and the bench
        let b = scored(&live, &picks(2, with(BASE, &[(7, 14), (14, 7)]), 10, 6));
        let m = reconcile(&a, &b);

        assert_eq!(kinds(&m.side_a), vec![(Some(7), DifferentialKind::Position, 2)]);
        assert_eq!(kinds(&m.side_b), vec![(Some(14), DifferentialKind::Position, 12)]);
        assert_eq!(m.margin, -10);
        assert_balanced(&m);
    }

    #[test]
    fn test_captain_differentials() {
        let live = live(vec![(11, goals(1))]);
        let a = scored(&live, &picks(1, BASE, 10, 6));
        let b = scored(&live, &picks(2, BASE, 11, 6));
        let m = reconcile(&a, &b);

        assert_eq!(kinds(&m.side_a), vec![(Some(10), DifferentialKind::Captain, 2)]);
        assert_eq!(kinds(&m.side_b), vec![(Some(11), DifferentialKind::Captain, 6)]);
        let entry = &m.side_b.differentials[0];
        assert!(entry.is_captain);
        assert_eq!(entry.raw_points, 6);
        assert_eq!(entry.multiplier, 2);

        // captains are still common players
        assert_eq!(m.common.len(), 11);
        let eleven = m.common.iter().find(|c| c.player == PlayerId::new(11)).unwrap();
        assert_eq!((eleven.points_a, eleven.points_b), (6, 12));
        assert!(eleven.captain_b && !eleven.captain_a);
        assert_balanced(&m);
    }

    #[test]
    fn test_triple_captain_against_same_captain() {
        let live = live(vec![(10, goals(1))]);
        let a = scored(
            &live,
            &ManagerPicks {
                chip: ChipState::TripleCaptain,
                ..picks(1, BASE, 10, 6)
            },
        );
        let b = scored(&live, &picks(2, BASE, 10, 6));
        let m = reconcile(&a, &b);

        assert_eq!(kinds(&m.side_a), vec![(Some(10), DifferentialKind::Captain, 6)]);
        assert!(m.side_b.differentials.is_empty());
        assert_balanced(&m);
    }

    #[test]
    fn test_transfer_hit() {
        let live = live(vec![]);
        let a = scored(
            &live,
            &ManagerPicks {
                transfer_cost: 8,
                ..picks(1, BASE, 10, 6)
            },
        );
        let b = scored(
            &live,
            &ManagerPicks {
                transfer_cost: 4,
                ..picks(2, BASE, 10, 6)
            },
        );
        let m = reconcile(&a, &b);

        assert_eq!(kinds(&m.side_a), vec![(None, DifferentialKind::TransferHit, -4)]);
        assert!(m.side_b.differentials.is_empty());
        assert_eq!(m.side_a.differentials[0].name, "Transfer hit");
        assert_eq!(m.margin, -4);
        assert_balanced(&m);
    }

    #[test]
    fn test_equal_transfer_costs_produce_no_hit() {
        let live = live(vec![]);
        let hit = |manager| ManagerPicks {
            transfer_cost: 4,
            ..picks(manager, BASE, 10, 6)
        };
        let m = reconcile(&scored(&live, &hit(1)), &scored(&live, &hit(2)));
        assert!(m.side_a.differentials.is_empty());
        assert!(m.side_b.differentials.is_empty());
    }

    #[test]
    fn test_ordering_by_points_then_squad_order() {
        let live = live(vec![(8, goals(1)), (20, vec![minutes(1, 30)])]);
        // 17, 18 and 20 are defenders, 23 a midfielder; 8 scores 7
        let a = scored(&live, &picks(1, BASE, 10, 6));
        let b = scored(&live, &picks(2, with(BASE, &[(2, 17), (3, 18), (5, 20), (8, 23)]), 10, 6));
        let m = reconcile(&a, &b);

        let order: Vec<u32> = m
            .side_a
            .differentials
            .iter()
            .filter_map(|d| d.player.map(|p| p.as_u32()))
            .collect();
        assert_eq!(order, vec![8, 2, 3, 5]);

        let theirs: Vec<(u32, i32)> = m
            .side_b
            .differentials
            .iter()
            .map(|d| (d.player.unwrap().as_u32(), d.points))
            .collect();
        assert_eq!(theirs, vec![(17, 2), (18, 2), (23, 2), (20, 1)]);
        assert_balanced(&m);
    }

    #[test]
    fn test_transfer_hit_sorts_after_players_on_equal_points() {
        let booked = PlayerStatSnapshot {
            minutes: 30,
            yellow_cards: 1,
            own_goals: 1,
            ..Default::default()
        };
        let live = live(vec![(22, vec![minutes(1, 0)]), (7, vec![appearance(1, booked)])]);
        // 7 scores 1 - 1 - 2 = -2, matching a 2 point hit
        let a = scored(
            &live,
            &ManagerPicks {
                transfer_cost: 2,
                ..picks(1, BASE, 10, 6)
            },
        );
        let b = scored(&live, &picks(2, with(BASE, &[(7, 22)]), 10, 6));
        let m = reconcile(&a, &b);

        let in_order: Vec<DifferentialKind> =
            m.side_a.differentials.iter().map(|d| d.kind).collect();
        assert_eq!(
            in_order,
            vec![DifferentialKind::Pure, DifferentialKind::TransferHit]
        );
        assert_eq!(m.side_a.differential_total, -4);
        assert_balanced(&m);
    }

    #[test]
    fn test_shared_substitute_collapses_into_common_row() {
        let live = live(vec![(7, vec![])]);
        let a = scored(&live, &picks(1, BASE, 10, 6));
        let b = scored(&live, &picks(2, BASE, 11, 6));
        let m = reconcile(&a, &b);

        assert!(m.common.iter().all(|c| c.player != PlayerId::new(7)));
        let sub = m.common.iter().find(|c| c.player == PlayerId::new(13)).unwrap();
        assert!(sub.subbed_in_a && sub.subbed_in_b);
        assert!(!sub.placeholder);
        assert_balanced(&m);
    }

    #[test]
    fn test_different_substitutes_leave_placeholder() {
        let live = live(vec![(7, vec![]), (28, goals(1))]);
        let a = scored(&live, &picks(1, BASE, 10, 6));
        // 28 is a defender on the bench in place of 13
        let b = scored(&live, &picks(2, with(BASE, &[(13, 28)]), 10, 6));
        let m = reconcile(&a, &b);

        let placeholder = m.common.iter().find(|c| c.player == PlayerId::new(7)).unwrap();
        assert!(placeholder.placeholder);
        assert_eq!((placeholder.points_a, placeholder.points_b), (0, 0));

        assert_eq!(kinds(&m.side_a), vec![(Some(13), DifferentialKind::Pure, 2)]);
        assert_eq!(kinds(&m.side_b), vec![(Some(28), DifferentialKind::Pure, 8)]);
        assert!(m.side_b.differentials[0].subbed_in);
        assert_balanced(&m);
    }

    #[test]
    fn test_differentials_are_symmetric() {
        let live = live(vec![(7, goals(1))]);
        let a = scored(&live, &picks(1, BASE, 10, 6));
        let b = scored(&live, &picks(2, with(BASE, &[(7, 22)]), 11, 6));

        let ab = reconcile(&a, &b);
        let ba = reconcile(&b, &a);
        assert_eq!(ab.side_a.differentials, ba.side_b.differentials);
        assert_eq!(ab.side_b.differentials, ba.side_a.differentials);
        assert_eq!(ab.margin, -ba.margin);
    }

    #[test]
    fn test_total_invariant_across_mixed_scenarios() {
        let live = live(vec![
            (3, goals(1)),
            (7, vec![]),
            (10, goals(2)),
            (19, goals(1)),
            (26, vec![minutes(1, 20)]),
        ]);
        let a = ManagerPicks {
            chip: ChipState::BenchBoost,
            transfer_cost: 4,
            ..picks(1, BASE, 10, 6)
        };
        let b = ManagerPicks {
            chip: ChipState::TripleCaptain,
            ..picks(2, with(BASE, &[(4, 19), (11, 26), (13, 3), (3, 28)]), 19, 6)
        };
        let (a, b) = (scored(&live, &a), scored(&live, &b));
        assert_balanced(&reconcile(&a, &b));
        assert_balanced(&reconcile(&b, &a));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DifferentialKind::Pure.to_string(), "pure");
        assert_eq!(DifferentialKind::TransferHit.to_string(), "transfer hit");
        assert_eq!(
            serde_json::to_value(DifferentialKind::TransferHit).unwrap(),
            serde_json::json!("transfer_hit")
        );
    }
}
