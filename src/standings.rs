use std::collections::HashMap;

use crate::match_outcome::{MatchResult, ScoredMatch};
use crate::tables::TeamRow;

#[derive(Debug, Clone, Default)]
pub struct StandingsRow {
    pub team_api_id: i64,
    pub team_name: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_diff: i64,
    pub points: u32,
}

impl StandingsRow {
    fn record(&mut self, result: MatchResult, scored: i64, conceded: i64) {
        self.played += 1;
        match result {
            MatchResult::Win => self.wins += 1,
            MatchResult::Draw => self.draws += 1,
            MatchResult::Loss => self.losses += 1,
        }
        self.goals_for += scored;
        self.goals_against += conceded;
        self.goal_diff = self.goals_for - self.goals_against;
        self.points += u32::from(result.points());
    }
}

/// League table for one league and season, folded from the derived match
/// facts. Ordered by points, then goal difference, then goals for.
pub fn compute_standings(
    scored: &[ScoredMatch],
    teams: &[TeamRow],
    league_id: i64,
    season: &str,
) -> Vec<StandingsRow> {
    let names: HashMap<i64, &str> = teams
        .iter()
        .map(|t| (t.team_api_id, t.team_long_name.as_str()))
        .collect();

    let mut rows: HashMap<i64, StandingsRow> = HashMap::new();
    for m in scored {
        if m.row.league_id != league_id || m.row.season != season {
            continue;
        }
        entry_for(&mut rows, &names, m.row.home_team_api_id).record(
            m.facts.home_result,
            m.facts.home_goals,
            m.facts.away_goals,
        );
        entry_for(&mut rows, &names, m.row.away_team_api_id).record(
            m.facts.away_result,
            m.facts.away_goals,
            m.facts.home_goals,
        );
    }

    let mut out: Vec<StandingsRow> = rows.into_values().collect();
    out.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_diff.cmp(&a.goal_diff))
            .then(b.goals_for.cmp(&a.goals_for))
            .then(a.team_name.cmp(&b.team_name))
    });
    out
}

fn entry_for<'a>(
    rows: &'a mut HashMap<i64, StandingsRow>,
    names: &HashMap<i64, &str>,
    team_id: i64,
) -> &'a mut StandingsRow {
    rows.entry(team_id).or_insert_with(|| StandingsRow {
        team_api_id: team_id,
        team_name: names
            .get(&team_id)
            .map_or_else(|| format!("Team {team_id}"), |n| n.to_string()),
        ..StandingsRow::default()
    })
}

/// Seasons present for a league, ascending. Season strings like
/// `2008/2009` sort correctly as text.
pub fn seasons_for_league(scored: &[ScoredMatch], league_id: i64) -> Vec<String> {
    let mut seasons: Vec<String> = scored
        .iter()
        .filter(|m| m.row.league_id == league_id)
        .map(|m| m.row.season.clone())
        .collect();
    seasons.sort();
    seasons.dedup();
    seasons
}

#[cfg(test)]
mod tests {
    use super::{compute_standings, seasons_for_league};
    use crate::match_outcome::derive_outcomes;
    use crate::tables::{MatchRow, TeamRow};

    fn team(team_api_id: i64, name: &str) -> TeamRow {
        TeamRow {
            id: team_api_id,
            team_api_id,
            team_fifa_api_id: None,
            team_long_name: name.to_string(),
            team_short_name: name[..3.min(name.len())].to_uppercase(),
        }
    }

    fn match_row(id: i64, season: &str, home: i64, away: i64, hg: i64, ag: i64) -> MatchRow {
        MatchRow {
            id,
            country_id: 1,
            league_id: 1,
            season: season.to_string(),
            stage: 1,
            date: "2015-08-08 00:00:00".to_string(),
            match_api_id: id,
            home_team_api_id: home,
            away_team_api_id: away,
            home_team_goal: Some(hg),
            away_team_goal: Some(ag),
        }
    }

    #[test]
    fn standings_fold_points_and_order_by_points_then_gd() {
        let teams = vec![team(1, "Alpha"), team(2, "Beta"), team(3, "Gamma")];
        let scored = derive_outcomes(&[
            match_row(1, "2015/2016", 1, 2, 2, 0),
            match_row(2, "2015/2016", 2, 3, 1, 1),
            match_row(3, "2015/2016", 3, 1, 0, 4),
            // Different season, must not count.
            match_row(4, "2014/2015", 1, 2, 0, 9),
        ])
        .unwrap();

        let table = compute_standings(&scored, &teams, 1, "2015/2016");
        assert_eq!(table.len(), 3);

        // Alpha: two wins, 6 pts, GF 6 GA 0. Beta: draw + loss, 1 pt.
        // Gamma: draw + loss, 1 pt but worse goal difference than Beta.
        assert_eq!(table[0].team_name, "Alpha");
        assert_eq!(table[0].points, 6);
        assert_eq!(table[0].goal_diff, 6);
        assert_eq!(table[1].team_name, "Beta");
        assert_eq!(table[2].team_name, "Gamma");
        assert!(table[1].goal_diff > table[2].goal_diff);

        let total_points: u32 = table.iter().map(|r| r.points).sum();
        // 3 matches: one decisive (3) + one draw (2) + one decisive (3).
        assert_eq!(total_points, 8);
    }

    #[test]
    fn seasons_are_sorted_and_deduped() {
        let scored = derive_outcomes(&[
            match_row(1, "2010/2011", 1, 2, 0, 0),
            match_row(2, "2008/2009", 1, 2, 1, 0),
            match_row(3, "2010/2011", 2, 1, 2, 2),
        ])
        .unwrap();
        assert_eq!(
            seasons_for_league(&scored, 1),
            vec!["2008/2009".to_string(), "2010/2011".to_string()]
        );
        assert!(seasons_for_league(&scored, 9).is_empty());
    }
}
