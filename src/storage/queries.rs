//! Stat record, fixture and squad queries

use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use super::{schema::ScoringDatabase, StatStore};
use crate::cli::types::{FixtureId, Gameweek, PlayerId, Position, SquadId};
use crate::engine::squad::GameweekPerformance;
use crate::error::{Result, ScoringError};
use crate::models::{Fixture, FixtureSummary, Player, PlayerStatRecord, Squad};

/// Count columns of `player_stats`, in the order [`counts`] returns them.
const COUNT_COLUMNS: [&str; 26] = [
    "minutes",
    "goals_scored",
    "assists",
    "clean_sheets",
    "goals_conceded",
    "own_goals",
    "penalties_saved",
    "penalties_missed",
    "yellow_cards",
    "red_cards",
    "saves",
    "bonus",
    "bps",
    "tackles",
    "interceptions",
    "clearances",
    "blocks",
    "recoveries",
    "key_passes",
    "successful_dribbles",
    "penalties_won",
    "big_chances_created",
    "key_blocks",
    "errors_leading_to_goal",
    "errors_leading_to_attempt",
    "fouls",
];

fn counts(r: &PlayerStatRecord) -> [u32; 26] {
    [
        r.minutes,
        r.goals_scored,
        r.assists,
        r.clean_sheets,
        r.goals_conceded,
        r.own_goals,
        r.penalties_saved,
        r.penalties_missed,
        r.yellow_cards,
        r.red_cards,
        r.saves,
        r.bonus,
        r.bps,
        r.tackles,
        r.interceptions,
        r.clearances,
        r.blocks,
        r.recoveries,
        r.key_passes,
        r.successful_dribbles,
        r.penalties_won,
        r.big_chances_created,
        r.key_blocks,
        r.errors_leading_to_goal,
        r.errors_leading_to_attempt,
        r.fouls,
    ]
}

fn select_stats_sql(filter: &str) -> String {
    format!(
        "SELECT player_id, fixture_id, gameweek, position, {}
         FROM player_stats
         WHERE {}
         ORDER BY player_id",
        COUNT_COLUMNS.join(", "),
        filter
    )
}

fn now_secs() -> Result<u64> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs())
}

fn position_from_sql(idx: usize, text: String) -> rusqlite::Result<Position> {
    text.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

impl ScoringDatabase {
    /// Insert or update a player's basic information
    pub fn upsert_player(&mut self, player: &Player) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO players (player_id, name, position)
             VALUES (?, ?, ?)",
            params![
                player.player_id.as_u32(),
                player.name,
                player.position.to_string()
            ],
        )?;
        Ok(())
    }

    /// Known positions, from the players table first and stat records second
    pub fn player_positions(&self) -> Result<HashMap<PlayerId, Position>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, position FROM players
             UNION ALL
             SELECT player_id, MIN(position) FROM player_stats
             WHERE player_id NOT IN (SELECT player_id FROM players)
             GROUP BY player_id",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                PlayerId::new(row.get(0)?),
                position_from_sql(1, row.get(1)?)?,
            ))
        })?;

        let mut positions = HashMap::new();
        for row in rows {
            let (id, position) = row?;
            positions.insert(id, position);
        }
        Ok(positions)
    }

    /// Insert or update a fixture.
    ///
    /// Stat rows already stored for the fixture follow it into its new
    /// gameweek.
    pub fn upsert_fixture(&mut self, fixture: &Fixture) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO fixtures (fixture_id, gameweek, home_team, away_team, finished)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(fixture_id) DO UPDATE SET
                gameweek = excluded.gameweek,
                home_team = excluded.home_team,
                away_team = excluded.away_team,
                finished = excluded.finished",
            params![
                fixture.fixture_id.as_u32(),
                fixture.gameweek.as_u16(),
                fixture.home_team,
                fixture.away_team,
                fixture.finished
            ],
        )?;
        tx.execute(
            "UPDATE player_stats SET gameweek = ? WHERE fixture_id = ?",
            params![fixture.gameweek.as_u16(), fixture.fixture_id.as_u32()],
        )?;
        tx.commit()?;
        Ok(())
    }

    /// Insert or replace a player's raw stats for a fixture.
    ///
    /// The gameweek is taken from the fixture row when one exists. Any
    /// previously computed total is cleared until the fixture is reprocessed.
    pub fn upsert_stat_record(&mut self, record: &PlayerStatRecord) -> Result<()> {
        let placeholders: Vec<String> = (0..COUNT_COLUMNS.len())
            .map(|i| format!("?{}", i + 5))
            .collect();
        let sql = format!(
            "INSERT OR REPLACE INTO player_stats
             (player_id, fixture_id, gameweek, position, {}, total_points, updated_at)
             VALUES (?1, ?2,
                     COALESCE((SELECT gameweek FROM fixtures WHERE fixture_id = ?2), ?3),
                     ?4, {}, NULL, ?{})",
            COUNT_COLUMNS.join(", "),
            placeholders.join(", "),
            COUNT_COLUMNS.len() + 5
        );

        let mut values: Vec<Value> = vec![
            Value::Integer(record.player_id.as_u32() as i64),
            Value::Integer(record.fixture_id.as_u32() as i64),
            Value::Integer(record.gameweek.as_u16() as i64),
            Value::Text(record.position.to_string()),
        ];
        values.extend(counts(record).iter().map(|&c| Value::Integer(c as i64)));
        values.push(Value::Integer(now_secs()? as i64));

        self.conn.execute(&sql, params_from_iter(values))?;
        Ok(())
    }

    /// Get one player's stat record for a fixture
    pub fn get_stat_record(
        &self,
        player_id: PlayerId,
        fixture_id: FixtureId,
    ) -> Result<Option<PlayerStatRecord>> {
        let sql = select_stats_sql("player_id = ? AND fixture_id = ?");
        let record = self
            .conn
            .query_row(
                &sql,
                params![player_id.as_u32(), fixture_id.as_u32()],
                |row| self.row_to_stat_record(row),
            )
            .optional()?;
        Ok(record)
    }

    /// Stored total for a player's fixture; None until processed
    pub fn stored_total_points(
        &self,
        player_id: PlayerId,
        fixture_id: FixtureId,
    ) -> Result<Option<i32>> {
        let total = self
            .conn
            .query_row(
                "SELECT total_points FROM player_stats
                 WHERE player_id = ? AND fixture_id = ?",
                params![player_id.as_u32(), fixture_id.as_u32()],
                |row| row.get::<_, Option<i32>>(0),
            )
            .optional()?;
        Ok(total.flatten())
    }

    /// Minutes and points per player summed over a gameweek's fixtures.
    ///
    /// Unprocessed fixtures contribute 0 points.
    pub fn gameweek_performances(
        &self,
        gameweek: Gameweek,
    ) -> Result<HashMap<PlayerId, GameweekPerformance>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, MIN(position), SUM(minutes), SUM(COALESCE(total_points, 0))
             FROM player_stats
             WHERE gameweek = ?
             GROUP BY player_id",
        )?;

        let rows = stmt.query_map(params![gameweek.as_u16()], |row| {
            let performance = GameweekPerformance {
                position: position_from_sql(1, row.get(1)?)?,
                minutes: row.get::<_, i64>(2)?.clamp(0, u32::MAX.into()) as u32,
                points: row.get::<_, i64>(3)?.clamp(i32::MIN.into(), i32::MAX.into()) as i32,
            };
            Ok((PlayerId::new(row.get(0)?), performance))
        })?;

        let mut performances = HashMap::new();
        for row in rows {
            let (id, performance) = row?;
            performances.insert(id, performance);
        }
        Ok(performances)
    }

    /// Store a squad, replacing any squad with the same id
    pub fn save_squad(&mut self, squad: &Squad) -> Result<()> {
        squad.validate()?;

        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM squad_players WHERE squad_id = ?",
            params![squad.squad_id.as_u32()],
        )?;
        tx.execute(
            "INSERT OR REPLACE INTO squads (squad_id, name, formation, captain, vice_captain)
             VALUES (?, ?, ?, ?, ?)",
            params![
                squad.squad_id.as_u32(),
                squad.name,
                squad.formation.to_string(),
                squad.captain.as_u32(),
                squad.vice_captain.as_u32()
            ],
        )?;
        for (slot, player_id) in squad.players.iter().enumerate() {
            tx.execute(
                "INSERT INTO squad_players (squad_id, slot, player_id) VALUES (?, ?, ?)",
                params![squad.squad_id.as_u32(), slot as u32, player_id.as_u32()],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Load a squad with its players in slot order
    pub fn load_squad(&self, squad_id: SquadId) -> Result<Squad> {
        let header = self
            .conn
            .query_row(
                "SELECT name, formation, captain, vice_captain FROM squads WHERE squad_id = ?",
                params![squad_id.as_u32()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        PlayerId::new(row.get(2)?),
                        PlayerId::new(row.get(3)?),
                    ))
                },
            )
            .optional()?;
        let Some((name, formation, captain, vice_captain)) = header else {
            return Err(ScoringError::SquadNotFound { squad_id });
        };

        let mut stmt = self
            .conn
            .prepare("SELECT player_id FROM squad_players WHERE squad_id = ? ORDER BY slot")?;
        let players = stmt
            .query_map(params![squad_id.as_u32()], |row| {
                Ok(PlayerId::new(row.get(0)?))
            })?
            .collect::<rusqlite::Result<Vec<PlayerId>>>()?;

        let squad = Squad::new(squad_id, players, formation.parse()?, captain, vice_captain)?;
        Ok(squad.with_name(name))
    }

    /// Helper function to convert a database row to PlayerStatRecord
    fn row_to_stat_record(&self, row: &Row) -> rusqlite::Result<PlayerStatRecord> {
        let c = |i: usize| row.get::<_, u32>(4 + i);
        Ok(PlayerStatRecord {
            player_id: PlayerId::new(row.get(0)?),
            fixture_id: FixtureId::new(row.get(1)?),
            gameweek: Gameweek::new(row.get(2)?),
            position: position_from_sql(3, row.get(3)?)?,
            minutes: c(0)?,
            goals_scored: c(1)?,
            assists: c(2)?,
            clean_sheets: c(3)?,
            goals_conceded: c(4)?,
            own_goals: c(5)?,
            penalties_saved: c(6)?,
            penalties_missed: c(7)?,
            yellow_cards: c(8)?,
            red_cards: c(9)?,
            saves: c(10)?,
            bonus: c(11)?,
            bps: c(12)?,
            tackles: c(13)?,
            interceptions: c(14)?,
            clearances: c(15)?,
            blocks: c(16)?,
            recoveries: c(17)?,
            key_passes: c(18)?,
            successful_dribbles: c(19)?,
            penalties_won: c(20)?,
            big_chances_created: c(21)?,
            key_blocks: c(22)?,
            errors_leading_to_goal: c(23)?,
            errors_leading_to_attempt: c(24)?,
            fouls: c(25)?,
        })
    }

    fn row_to_fixture(row: &Row) -> rusqlite::Result<Fixture> {
        Ok(Fixture {
            fixture_id: FixtureId::new(row.get(0)?),
            gameweek: Gameweek::new(row.get(1)?),
            home_team: row.get(2)?,
            away_team: row.get(3)?,
            finished: row.get(4)?,
        })
    }
}

impl StatStore for ScoringDatabase {
    fn fixture(&self, fixture_id: FixtureId) -> Result<Option<Fixture>> {
        let fixture = self
            .conn
            .query_row(
                "SELECT fixture_id, gameweek, home_team, away_team, finished
                 FROM fixtures WHERE fixture_id = ?",
                params![fixture_id.as_u32()],
                Self::row_to_fixture,
            )
            .optional()?;
        Ok(fixture)
    }

    fn fixtures_for_gameweek(&self, gameweek: Gameweek) -> Result<Vec<Fixture>> {
        let mut stmt = self.conn.prepare(
            "SELECT fixture_id, gameweek, home_team, away_team, finished
             FROM fixtures WHERE gameweek = ?
             ORDER BY fixture_id",
        )?;
        let fixtures = stmt
            .query_map(params![gameweek.as_u16()], Self::row_to_fixture)?
            .collect::<rusqlite::Result<Vec<Fixture>>>()?;
        Ok(fixtures)
    }

    fn fixture_stats(&self, fixture_id: FixtureId) -> Result<Vec<PlayerStatRecord>> {
        let sql = select_stats_sql("fixture_id = ?");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![fixture_id.as_u32()], |row| {
            self.row_to_stat_record(row)
        })?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    fn write_fixture_scores(&mut self, summary: &FixtureSummary) -> Result<()> {
        let now = now_secs()?;
        let tx = self.conn.transaction()?;
        for score in &summary.scores {
            tx.execute(
                "UPDATE player_stats
                 SET bonus = ?, bps = ?, total_points = ?, updated_at = ?
                 WHERE player_id = ? AND fixture_id = ?",
                params![
                    score.bonus,
                    score.bps,
                    score.total_points,
                    now as i64,
                    score.player_id.as_u32(),
                    summary.fixture_id.as_u32()
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}
