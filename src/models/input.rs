//! Input documents.
//!
//! Field names follow the upstream fantasy feed so its payloads can be fed in
//! with minimal reshaping. Every document converts into a validated engine
//! type; nothing downstream reads the raw documents.

use serde::{Deserialize, Serialize};

use crate::{
    engine::pipeline::{transfer_cost_points, ManagerPicks},
    error::{FplError, Result},
    live::{Appearance, Fixture, FixtureStatus, GameweekLive, LivePlayer, PlayerStatSnapshot, RawPlayerStats},
    squad::{Squad, SquadSlot, STARTERS},
    types::{
        chip::ChipState,
        ids::{FixtureId, Gameweek, ManagerId, PlayerId, TeamId},
        position::Position,
    },
};


#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FixtureDoc {
    pub id: FixtureId,
    pub team_h: TeamId,
    pub team_a: TeamId,
    #[serde(default)]
    pub started: bool,
    #[serde(default)]
    pub finished: bool,
}

impl From<FixtureDoc> for Fixture {
    fn from(doc: FixtureDoc) -> Self {
        Fixture {
            id: doc.id,
            team_h: doc.team_h,
            team_a: doc.team_a,
            status: FixtureStatus::from_flags(doc.started, doc.finished),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppearanceDoc {
    pub fixture: FixtureId,
    #[serde(default)]
    pub stats: RawPlayerStats,
}

impl TryFrom<AppearanceDoc> for Appearance {
    type Error = FplError;

    fn try_from(doc: AppearanceDoc) -> Result<Self> {
        Ok(Appearance {
            fixture: doc.fixture,
            stats: PlayerStatSnapshot::try_from(doc.stats)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LivePlayerDoc {
    pub id: PlayerId,
    #[serde(default, alias = "web_name")]
    pub name: String,
    pub element_type: u8,
    #[serde(default)]
    pub team: Option<TeamId>,
    #[serde(default)]
    pub appearances: Vec<AppearanceDoc>,
}

impl TryFrom<LivePlayerDoc> for LivePlayer {
    type Error = FplError;

    fn try_from(doc: LivePlayerDoc) -> Result<Self> {
        let appearances = doc
            .appearances
            .into_iter()
            .map(Appearance::try_from)
            .collect::<Result<Vec<_>>>()?;
        let name = if doc.name.is_empty() {
            doc.id.to_string()
        } else {
            doc.name
        };
        Ok(LivePlayer {
            id: doc.id,
            name,
            position: Position::from_element_type(doc.element_type)?,
            team: doc.team,
            appearances,
        })
    }
}

/// Live stats and fixtures for one gameweek.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct GameweekLiveDoc {
    #[serde(default, alias = "event")]
    pub gameweek: Option<Gameweek>,
    #[serde(default)]
    pub fixtures: Vec<FixtureDoc>,
    #[serde(default, alias = "elements")]
    pub players: Vec<LivePlayerDoc>,
}

impl TryFrom<GameweekLiveDoc> for GameweekLive {
    type Error = FplError;

    fn try_from(doc: GameweekLiveDoc) -> Result<Self> {
        let players = doc
            .players
            .into_iter()
            .map(LivePlayer::try_from)
            .collect::<Result<Vec<_>>>()?;
        Ok(GameweekLive::new(
            doc.gameweek,
            doc.fixtures.into_iter().map(Fixture::from),
            players,
        ))
    }
}

impl GameweekLiveDoc {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One of the fifteen picks. `position` is the squad ordinal (1-15), as in
/// the upstream picks payload.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PickDoc {
    pub element: PlayerId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub element_type: Option<u8>,
    pub position: u8,
    #[serde(default)]
    pub multiplier: Option<u8>,
    #[serde(default)]
    pub is_captain: bool,
    #[serde(default)]
    pub is_vice_captain: bool,
}

impl PickDoc {
    /// Name and position come from the pick when present, else from live data.
    fn into_slot(self, live: &GameweekLive) -> Result<SquadSlot> {
        let known = live.player(self.element);
        let position = match (self.element_type, known) {
            (Some(element_type), _) => Position::from_element_type(element_type)?,
            (None, Some(player)) => player.position,
            (None, None) => {
                return Err(FplError::invalid_squad(format!(
                    "no position known for player {}",
                    self.element
                )))
            }
        };
        let name = self
            .name
            .or_else(|| known.map(|p| p.name.clone()))
            .unwrap_or_else(|| self.element.to_string());
        let multiplier = self.multiplier.unwrap_or(match (self.position, self.is_captain) {
            (p, _) if p > STARTERS => 0,
            (_, true) => 2,
            _ => 1,
        });

        Ok(SquadSlot {
            player: self.element,
            name,
            position,
            ordinal: self.position,
            multiplier,
            is_captain: self.is_captain,
            is_vice_captain: self.is_vice_captain,
        })
    }
}

/// A manager's picks for the gameweek.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ManagerPicksDoc {
    #[serde(alias = "entry")]
    pub manager_id: ManagerId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub active_chip: Option<String>,
    #[serde(default, alias = "event_transfers_cost")]
    pub transfer_cost: u32,
    #[serde(default)]
    pub captain_multiplier: Option<u8>,
    pub picks: Vec<PickDoc>,
}

impl ManagerPicksDoc {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the picks against the gameweek's live data.
    pub fn into_picks(self, live: &GameweekLive) -> Result<ManagerPicks> {
        let chip = ChipState::from_api(self.active_chip.as_deref())?;
        transfer_cost_points(self.transfer_cost)?;
        let slots = self
            .picks
            .into_iter()
            .map(|p| p.into_slot(live))
            .collect::<Result<Vec<_>>>()?;
        let name = if self.name.is_empty() {
            format!("Manager {}", self.manager_id)
        } else {
            self.name
        };

        Ok(ManagerPicks {
            manager: self.manager_id,
            name,
            squad: Squad::new(slots)?,
            chip,
            transfer_cost: self.transfer_cost,
            captain_multiplier_override: self.captain_multiplier,
        })
    }
}
