use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tables::MatchRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchResult {
    Win,
    Draw,
    Loss,
}

impl MatchResult {
    /// Classify one side's goal differential.
    pub fn from_goal_diff(diff: i64) -> Self {
        if diff > 0 {
            MatchResult::Win
        } else if diff == 0 {
            MatchResult::Draw
        } else {
            MatchResult::Loss
        }
    }

    /// League points awarded for this result.
    pub fn points(self) -> u8 {
        match self {
            MatchResult::Win => 3,
            MatchResult::Draw => 1,
            MatchResult::Loss => 0,
        }
    }

    pub fn win_flag(self) -> u8 {
        match self {
            MatchResult::Win => 1,
            MatchResult::Draw | MatchResult::Loss => 0,
        }
    }

    pub fn code(self) -> char {
        match self {
            MatchResult::Win => 'W',
            MatchResult::Draw => 'D',
            MatchResult::Loss => 'L',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'W' => Some(MatchResult::Win),
            'D' => Some(MatchResult::Draw),
            'L' => Some(MatchResult::Loss),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchResult::Win => "Win",
            MatchResult::Draw => "Draw",
            MatchResult::Loss => "Loss",
        }
    }

    pub const ALL: [MatchResult; 3] = [MatchResult::Win, MatchResult::Draw, MatchResult::Loss];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

/// The deriver is only defined over present, non-negative goal counts;
/// anything else is rejected rather than repaired.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error(
    "invalid {} goal count {} for match {}",
    .side.label(),
    .goals.map_or_else(|| "(missing)".to_string(), |g| g.to_string()),
    .match_api_id
)]
pub struct InvalidGoalCount {
    pub match_api_id: i64,
    pub side: Side,
    pub goals: Option<i64>,
}

/// Derived attributes for one match record, both perspectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchFacts {
    pub home_goals: i64,
    pub away_goals: i64,
    pub home_goal_diff: i64,
    pub away_goal_diff: i64,
    pub is_draw: bool,
    pub home_result: MatchResult,
    pub away_result: MatchResult,
    pub home_points: u8,
    pub away_points: u8,
    pub home_win_flag: u8,
    pub away_win_flag: u8,
}

impl MatchFacts {
    pub fn from_goals(home_goals: i64, away_goals: i64) -> Self {
        let home_goal_diff = home_goals - away_goals;
        let away_goal_diff = -home_goal_diff;
        let home_result = MatchResult::from_goal_diff(home_goal_diff);
        let away_result = MatchResult::from_goal_diff(away_goal_diff);
        Self {
            home_goals,
            away_goals,
            home_goal_diff,
            away_goal_diff,
            is_draw: home_goals == away_goals,
            home_result,
            away_result,
            home_points: home_result.points(),
            away_points: away_result.points(),
            home_win_flag: home_result.win_flag(),
            away_win_flag: away_result.win_flag(),
        }
    }
}

/// A raw match row with its derived attributes attached. The raw columns
/// pass through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    pub row: MatchRow,
    pub facts: MatchFacts,
}

fn validated_goals(row: &MatchRow, side: Side) -> Result<i64, InvalidGoalCount> {
    let goals = match side {
        Side::Home => row.home_team_goal,
        Side::Away => row.away_team_goal,
    };
    match goals {
        Some(g) if g >= 0 => Ok(g),
        other => Err(InvalidGoalCount {
            match_api_id: row.match_api_id,
            side,
            goals: other,
        }),
    }
}

pub fn derive_match(row: &MatchRow) -> Result<ScoredMatch, InvalidGoalCount> {
    let home_goals = validated_goals(row, Side::Home)?;
    let away_goals = validated_goals(row, Side::Away)?;
    Ok(ScoredMatch {
        row: row.clone(),
        facts: MatchFacts::from_goals(home_goals, away_goals),
    })
}

/// Bulk pass over the match table. Records are independent, so the work is
/// spread across the rayon pool; the output preserves input order.
pub fn derive_outcomes(rows: &[MatchRow]) -> Result<Vec<ScoredMatch>, InvalidGoalCount> {
    rows.par_iter().map(derive_match).collect()
}

#[cfg(test)]
mod tests {
    use super::{MatchFacts, MatchResult};

    #[test]
    fn diff_classification_is_total() {
        assert_eq!(MatchResult::from_goal_diff(3), MatchResult::Win);
        assert_eq!(MatchResult::from_goal_diff(0), MatchResult::Draw);
        assert_eq!(MatchResult::from_goal_diff(-2), MatchResult::Loss);
    }

    #[test]
    fn points_map_is_total() {
        assert_eq!(MatchResult::Win.points(), 3);
        assert_eq!(MatchResult::Draw.points(), 1);
        assert_eq!(MatchResult::Loss.points(), 0);
    }

    #[test]
    fn code_round_trips() {
        for result in MatchResult::ALL {
            assert_eq!(MatchResult::from_code(result.code()), Some(result));
        }
        assert_eq!(MatchResult::from_code('x'), None);
    }

    #[test]
    fn facts_cover_both_perspectives() {
        let facts = MatchFacts::from_goals(2, 1);
        assert_eq!(facts.home_goal_diff, 1);
        assert_eq!(facts.away_goal_diff, -1);
        assert!(!facts.is_draw);
        assert_eq!(facts.home_result, MatchResult::Win);
        assert_eq!(facts.away_result, MatchResult::Loss);
        assert_eq!((facts.home_points, facts.away_points), (3, 0));
        assert_eq!((facts.home_win_flag, facts.away_win_flag), (1, 0));
    }
}
