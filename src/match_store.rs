use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, params};

use crate::csv_load::Dataset;
use crate::match_outcome::{self, MatchFacts, MatchResult, ScoredMatch};
use crate::tables::MatchRow;

const CACHE_DIR: &str = "euro_explorer";

#[derive(Debug, Clone)]
pub struct LeagueIngestSummary {
    pub league_id: i64,
    pub matches_upserted: usize,
    pub latest_date: Option<String>,
}

#[derive(Debug, Clone)]
pub struct IngestSummary {
    pub db_path: PathBuf,
    pub matches_upserted: usize,
    pub rows_rejected: usize,
    pub per_league: HashMap<i64, LeagueIngestSummary>,
    pub errors: Vec<String>,
}

pub fn app_cache_dir() -> Option<PathBuf> {
    // Prefer XDG cache, fall back to ~/.cache.
    if let Ok(base) = std::env::var("XDG_CACHE_HOME")
        && !base.trim().is_empty()
    {
        return Some(PathBuf::from(base).join(CACHE_DIR));
    }
    let home = std::env::var("HOME").ok()?;
    if home.trim().is_empty() {
        return None;
    }
    Some(PathBuf::from(home).join(".cache").join(CACHE_DIR))
}

pub fn default_db_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("EURO_DB_PATH")
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path.trim()));
    }
    app_cache_dir().map(|dir| dir.join("scored_matches.sqlite"))
}

pub fn open_db(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    let conn =
        Connection::open(path).with_context(|| format!("open sqlite db {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        PRAGMA journal_mode = WAL;
        CREATE TABLE IF NOT EXISTS matches (
            match_api_id INTEGER PRIMARY KEY,
            source_id INTEGER NOT NULL,
            country_id INTEGER NOT NULL,
            league_id INTEGER NOT NULL,
            season TEXT NOT NULL,
            stage INTEGER NOT NULL,
            date TEXT NOT NULL,
            home_team_api_id INTEGER NOT NULL,
            away_team_api_id INTEGER NOT NULL,
            home_goals INTEGER NOT NULL,
            away_goals INTEGER NOT NULL,
            home_goal_diff INTEGER NOT NULL,
            away_goal_diff INTEGER NOT NULL,
            is_draw INTEGER NOT NULL,
            home_result TEXT NOT NULL,
            away_result TEXT NOT NULL,
            home_points INTEGER NOT NULL,
            away_points INTEGER NOT NULL,
            home_win_flag INTEGER NOT NULL,
            away_win_flag INTEGER NOT NULL,
            updated_at TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_matches_league ON matches(league_id);
        CREATE INDEX IF NOT EXISTS idx_matches_season ON matches(season);
        CREATE INDEX IF NOT EXISTS idx_matches_date ON matches(date);

        CREATE TABLE IF NOT EXISTS ingest_runs (
            run_id INTEGER PRIMARY KEY AUTOINCREMENT,
            started_at TEXT NOT NULL,
            finished_at TEXT NULL,
            matches_upserted INTEGER NOT NULL,
            rows_rejected INTEGER NOT NULL,
            errors_json TEXT NOT NULL
        );
        "#,
    )
    .context("create sqlite schema")?;
    Ok(())
}

/// Derive outcomes for every match in the dataset and upsert them. Rows the
/// deriver rejects are skipped and reported, not repaired.
pub fn ingest_dataset(
    conn: &mut Connection,
    db_path: PathBuf,
    dataset: &Dataset,
) -> Result<IngestSummary> {
    let started_at = Utc::now().to_rfc3339();
    conn.execute(
        "INSERT INTO ingest_runs(started_at, finished_at, matches_upserted, rows_rejected, errors_json)
         VALUES (?1, NULL, 0, 0, '[]')",
        params![started_at],
    )
    .context("insert ingest run")?;
    let run_id = conn.last_insert_rowid();

    let mut matches_upserted = 0usize;
    let mut errors: Vec<String> = Vec::new();

    let tx = conn.transaction().context("begin ingest transaction")?;
    for row in &dataset.matches {
        match match_outcome::derive_match(row) {
            Ok(scored) => {
                upsert_match(&tx, &scored)?;
                matches_upserted += 1;
            }
            Err(err) => errors.push(err.to_string()),
        }
    }
    tx.commit().context("commit ingest transaction")?;

    let finished_at = Utc::now().to_rfc3339();
    let errors_json = serde_json::to_string(&errors).unwrap_or_else(|_| "[]".to_string());
    conn.execute(
        "UPDATE ingest_runs
         SET finished_at = ?1, matches_upserted = ?2, rows_rejected = ?3, errors_json = ?4
         WHERE run_id = ?5",
        params![
            finished_at,
            matches_upserted as i64,
            errors.len() as i64,
            errors_json,
            run_id
        ],
    )
    .context("update ingest run")?;

    let mut per_league = HashMap::new();
    let mut stmt = conn
        .prepare("SELECT league_id, COUNT(*), MAX(date) FROM matches GROUP BY league_id")
        .context("prepare per-league summary")?;
    let league_rows = stmt
        .query_map([], |row| {
            Ok(LeagueIngestSummary {
                league_id: row.get(0)?,
                matches_upserted: row.get::<_, i64>(1)? as usize,
                latest_date: row.get(2)?,
            })
        })
        .context("query per-league summary")?;
    for row in league_rows {
        let row = row.context("decode per-league summary")?;
        per_league.insert(row.league_id, row);
    }

    Ok(IngestSummary {
        db_path,
        matches_upserted,
        rows_rejected: errors.len(),
        per_league,
        errors,
    })
}

pub fn load_scored_matches(conn: &Connection) -> Result<Vec<ScoredMatch>> {
    let mut stmt = conn
        .prepare(
            r#"
            SELECT
                match_api_id, source_id, country_id, league_id, season, stage, date,
                home_team_api_id, away_team_api_id,
                home_goals, away_goals,
                home_goal_diff, away_goal_diff, is_draw,
                home_result, away_result,
                home_points, away_points, home_win_flag, away_win_flag
            FROM matches
            ORDER BY date ASC, match_api_id ASC
            "#,
        )
        .context("prepare load matches query")?;

    let rows = stmt
        .query_map([], |row| {
            let home_result: String = row.get(14)?;
            let away_result: String = row.get(15)?;
            Ok(RawStoredRow {
                row: MatchRow {
                    match_api_id: row.get(0)?,
                    id: row.get(1)?,
                    country_id: row.get(2)?,
                    league_id: row.get(3)?,
                    season: row.get(4)?,
                    stage: row.get(5)?,
                    date: row.get(6)?,
                    home_team_api_id: row.get(7)?,
                    away_team_api_id: row.get(8)?,
                    home_team_goal: Some(row.get(9)?),
                    away_team_goal: Some(row.get(10)?),
                },
                home_goals: row.get(9)?,
                away_goals: row.get(10)?,
                home_goal_diff: row.get(11)?,
                away_goal_diff: row.get(12)?,
                is_draw: row.get::<_, i64>(13)? != 0,
                home_result,
                away_result,
                home_points: row.get::<_, i64>(16)? as u8,
                away_points: row.get::<_, i64>(17)? as u8,
                home_win_flag: row.get::<_, i64>(18)? as u8,
                away_win_flag: row.get::<_, i64>(19)? as u8,
            })
        })
        .context("query load matches")?;

    let mut out = Vec::new();
    for row in rows {
        let raw = row.context("decode match row")?;
        out.push(raw.into_scored()?);
    }
    Ok(out)
}

struct RawStoredRow {
    row: MatchRow,
    home_goals: i64,
    away_goals: i64,
    home_goal_diff: i64,
    away_goal_diff: i64,
    is_draw: bool,
    home_result: String,
    away_result: String,
    home_points: u8,
    away_points: u8,
    home_win_flag: u8,
    away_win_flag: u8,
}

impl RawStoredRow {
    fn into_scored(self) -> Result<ScoredMatch> {
        let home_result = decode_result(&self.home_result)?;
        let away_result = decode_result(&self.away_result)?;
        Ok(ScoredMatch {
            row: self.row,
            facts: MatchFacts {
                home_goals: self.home_goals,
                away_goals: self.away_goals,
                home_goal_diff: self.home_goal_diff,
                away_goal_diff: self.away_goal_diff,
                is_draw: self.is_draw,
                home_result,
                away_result,
                home_points: self.home_points,
                away_points: self.away_points,
                home_win_flag: self.home_win_flag,
                away_win_flag: self.away_win_flag,
            },
        })
    }
}

fn decode_result(code: &str) -> Result<MatchResult> {
    code.chars()
        .next()
        .and_then(MatchResult::from_code)
        .with_context(|| format!("unknown result code {code:?} in store"))
}

fn upsert_match(tx: &rusqlite::Transaction<'_>, m: &ScoredMatch) -> Result<()> {
    tx.execute(
        r#"
        INSERT INTO matches (
            match_api_id, source_id, country_id, league_id, season, stage, date,
            home_team_api_id, away_team_api_id,
            home_goals, away_goals,
            home_goal_diff, away_goal_diff, is_draw,
            home_result, away_result,
            home_points, away_points, home_win_flag, away_win_flag,
            updated_at
        ) VALUES (
            ?1, ?2, ?3, ?4, ?5, ?6, ?7,
            ?8, ?9,
            ?10, ?11,
            ?12, ?13, ?14,
            ?15, ?16,
            ?17, ?18, ?19, ?20,
            ?21
        )
        ON CONFLICT(match_api_id) DO UPDATE SET
            source_id = excluded.source_id,
            country_id = excluded.country_id,
            league_id = excluded.league_id,
            season = excluded.season,
            stage = excluded.stage,
            date = excluded.date,
            home_team_api_id = excluded.home_team_api_id,
            away_team_api_id = excluded.away_team_api_id,
            home_goals = excluded.home_goals,
            away_goals = excluded.away_goals,
            home_goal_diff = excluded.home_goal_diff,
            away_goal_diff = excluded.away_goal_diff,
            is_draw = excluded.is_draw,
            home_result = excluded.home_result,
            away_result = excluded.away_result,
            home_points = excluded.home_points,
            away_points = excluded.away_points,
            home_win_flag = excluded.home_win_flag,
            away_win_flag = excluded.away_win_flag,
            updated_at = excluded.updated_at
        "#,
        params![
            m.row.match_api_id,
            m.row.id,
            m.row.country_id,
            m.row.league_id,
            m.row.season,
            m.row.stage,
            m.row.date,
            m.row.home_team_api_id,
            m.row.away_team_api_id,
            m.facts.home_goals,
            m.facts.away_goals,
            m.facts.home_goal_diff,
            m.facts.away_goal_diff,
            bool_to_i64(m.facts.is_draw),
            m.facts.home_result.code().to_string(),
            m.facts.away_result.code().to_string(),
            m.facts.home_points as i64,
            m.facts.away_points as i64,
            m.facts.home_win_flag as i64,
            m.facts.away_win_flag as i64,
            Utc::now().to_rfc3339(),
        ],
    )
    .context("upsert match")?;
    Ok(())
}

fn bool_to_i64(v: bool) -> i64 {
    if v { 1 } else { 0 }
}
