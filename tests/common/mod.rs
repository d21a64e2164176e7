//! Shared document builders for integration tests.
#![allow(dead_code)]

use fpl_live::{
    live::GameweekLive,
    models::{GameweekLiveDoc, ManagerPicksDoc},
    ManagerId, ManagerPicks,
};
use serde_json::{json, Value};

/// Element types by squad ordinal: 4-4-2, bench GK, DEF, MID, FWD.
pub const ELEMENT_TYPES: [u8; 15] = [1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 1, 2, 3, 4];

pub const BASE_IDS: [u32; 15] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];

/// Player `id` has the element type of ordinal ((id - 1) % 15) + 1.
pub fn element_type(id: u32) -> u8 {
    ELEMENT_TYPES[((id - 1) % 15) as usize]
}

/// Players 1-30 in fixture 1 with 90 minutes each, unless their stats are
/// overridden.
pub fn live(started: bool, finished: bool, overrides: &[(u32, Value)]) -> GameweekLive {
    let players: Vec<Value> = (1..=30u32)
        .map(|id| {
            let stats = overrides
                .iter()
                .find(|(p, _)| *p == id)
                .map(|(_, s)| s.clone())
                .unwrap_or_else(|| json!({"minutes": 90}));
            json!({
                "id": id,
                "name": format!("Player {}", id),
                "element_type": element_type(id),
                "team": 1,
                "appearances": [{"fixture": 1, "stats": stats}]
            })
        })
        .collect();
    let doc: GameweekLiveDoc = serde_json::from_value(json!({
        "gameweek": 1,
        "fixtures": [{"id": 1, "team_h": 1, "team_a": 2, "started": started, "finished": finished}],
        "players": players
    }))
    .unwrap();
    GameweekLive::try_from(doc).unwrap()
}

pub fn finished_live(overrides: &[(u32, Value)]) -> GameweekLive {
    live(true, true, overrides)
}

pub fn picks_doc(manager: u64, ids: [u32; 15], captain: u32, vice: u32, chip: Option<&str>) -> Value {
    let picks: Vec<Value> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| {
            json!({
                "element": id,
                "element_type": ELEMENT_TYPES[i],
                "position": i + 1,
                "is_captain": *id == captain,
                "is_vice_captain": *id == vice,
            })
        })
        .collect();
    json!({
        "manager_id": manager,
        "name": format!("Manager {}", manager),
        "active_chip": chip,
        "transfer_cost": 0,
        "picks": picks
    })
}

pub fn picks(
    live: &GameweekLive,
    manager: u64,
    ids: [u32; 15],
    captain: u32,
    vice: u32,
    chip: Option<&str>,
) -> ManagerPicks {
    let doc: ManagerPicksDoc =
        serde_json::from_value(picks_doc(manager, ids, captain, vice, chip)).unwrap();
    let picks = doc.into_picks(live).unwrap();
    assert_eq!(picks.manager, ManagerId::new(manager));
    picks
}
