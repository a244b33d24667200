use std::collections::HashMap;

use crate::match_outcome::{MatchResult, ScoredMatch, Side};
use crate::team_analysis::{ClassAttr, TeamProfile};

/// Percent crosstab of one classed attribute against the derived result for
/// one side of the pitch. Cells are normalized over the whole table and
/// scaled to percent, so they sum to ~100.
#[derive(Debug, Clone)]
pub struct CrossTab {
    pub attr: ClassAttr,
    pub side: Side,
    pub class_values: Vec<String>,
    pub results: [MatchResult; 3],
    /// `cells[row][col]` follows `class_values` x `results`.
    pub cells: Vec<[f64; 3]>,
    pub pair_count: usize,
}

impl CrossTab {
    pub fn is_empty(&self) -> bool {
        self.class_values.is_empty()
    }

    pub fn max_cell(&self) -> f64 {
        self.cells
            .iter()
            .flat_map(|row| row.iter().copied())
            .fold(0.0, f64::max)
    }
}

fn result_index(result: MatchResult) -> usize {
    match result {
        MatchResult::Win => 0,
        MatchResult::Draw => 1,
        MatchResult::Loss => 2,
    }
}

/// Join team attribute snapshots with scored matches on the chosen side's
/// team id, then tabulate class value vs. result. Mirrors the source app's
/// teams-with-matches merge: every snapshot of a team pairs with every match
/// that team played on that side.
pub fn crosstab_class_vs_result(
    profiles: &[TeamProfile],
    scored: &[ScoredMatch],
    attr: ClassAttr,
    side: Side,
) -> CrossTab {
    let mut profiles_by_team: HashMap<i64, Vec<&TeamProfile>> = HashMap::new();
    for profile in profiles {
        profiles_by_team
            .entry(profile.team_api_id)
            .or_default()
            .push(profile);
    }

    let mut counts: HashMap<String, [usize; 3]> = HashMap::new();
    let mut pair_count = 0usize;

    for m in scored {
        let (team_id, result) = match side {
            Side::Home => (m.row.home_team_api_id, m.facts.home_result),
            Side::Away => (m.row.away_team_api_id, m.facts.away_result),
        };
        let Some(team_profiles) = profiles_by_team.get(&team_id) else {
            continue;
        };
        for profile in team_profiles {
            let value = profile.class(attr);
            if value.is_empty() {
                continue;
            }
            counts.entry(value.to_string()).or_insert([0; 3])[result_index(result)] += 1;
            pair_count += 1;
        }
    }

    let mut class_values: Vec<String> = counts.keys().cloned().collect();
    class_values.sort();

    let cells = class_values
        .iter()
        .map(|value| {
            let row = counts.get(value).copied().unwrap_or([0; 3]);
            let mut out = [0.0f64; 3];
            if pair_count > 0 {
                for (slot, count) in out.iter_mut().zip(row) {
                    *slot = count as f64 * 100.0 / pair_count as f64;
                }
            }
            out
        })
        .collect();

    CrossTab {
        attr,
        side,
        class_values,
        results: MatchResult::ALL,
        cells,
        pair_count,
    }
}
