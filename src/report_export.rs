use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rust_xlsxwriter::{Workbook, Worksheet};

use crate::csv_load::Dataset;
use crate::match_outcome::ScoredMatch;
use crate::standings;
use crate::team_analysis::{self, NumericAttr, TeamProfile};

pub struct ExportReport {
    pub sheets: usize,
    pub rows: usize,
}

pub fn default_report_path() -> PathBuf {
    match std::env::var("EURO_REPORT_PATH") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path.trim()),
        _ => PathBuf::from("euro_explorer_report.xlsx"),
    }
}

/// Write the workbook report: attribute statistics, top teams per
/// attribute, the latest standings per league, and the scored match table.
pub fn export_report(
    path: &Path,
    dataset: &Dataset,
    profiles: &[TeamProfile],
    scored: &[ScoredMatch],
) -> Result<ExportReport> {
    let mut workbook = Workbook::new();
    let mut rows_written = 0usize;

    let mut team_rows = vec![vec![
        "Attribute".to_string(),
        "Count".to_string(),
        "Mean".to_string(),
        "Std".to_string(),
        "Min".to_string(),
        "25%".to_string(),
        "50%".to_string(),
        "75%".to_string(),
        "Max".to_string(),
    ]];
    for row in team_analysis::describe_all_numeric(profiles) {
        team_rows.push(vec![
            row.column,
            row.count.to_string(),
            format!("{:.3}", row.mean),
            format!("{:.3}", row.std),
            format!("{:.1}", row.min),
            format!("{:.2}", row.q1),
            format!("{:.2}", row.median),
            format!("{:.2}", row.q3),
            format!("{:.1}", row.max),
        ]);
    }
    rows_written += write_sheet(&mut workbook, "Team Stats", &team_rows)?;

    let mut top_rows = vec![vec![
        "Attribute".to_string(),
        "Rank".to_string(),
        "Team".to_string(),
        "Mean".to_string(),
    ]];
    for attr in NumericAttr::ALL {
        for (rank, (team, mean)) in team_analysis::top_teams_by_attribute(profiles, attr, 10)
            .into_iter()
            .enumerate()
        {
            top_rows.push(vec![
                attr.label().to_string(),
                (rank + 1).to_string(),
                team,
                format!("{mean:.2}"),
            ]);
        }
    }
    rows_written += write_sheet(&mut workbook, "Top Teams", &top_rows)?;

    let mut standings_rows = vec![vec![
        "League".to_string(),
        "Season".to_string(),
        "Pos".to_string(),
        "Team".to_string(),
        "P".to_string(),
        "W".to_string(),
        "D".to_string(),
        "L".to_string(),
        "GF".to_string(),
        "GA".to_string(),
        "GD".to_string(),
        "Pts".to_string(),
    ]];
    for league in &dataset.leagues {
        let Some(season) = standings::seasons_for_league(scored, league.id).pop() else {
            continue;
        };
        let table = standings::compute_standings(scored, &dataset.teams, league.id, &season);
        for (pos, row) in table.iter().enumerate() {
            standings_rows.push(vec![
                league.name.clone(),
                season.clone(),
                (pos + 1).to_string(),
                row.team_name.clone(),
                row.played.to_string(),
                row.wins.to_string(),
                row.draws.to_string(),
                row.losses.to_string(),
                row.goals_for.to_string(),
                row.goals_against.to_string(),
                row.goal_diff.to_string(),
                row.points.to_string(),
            ]);
        }
    }
    rows_written += write_sheet(&mut workbook, "Standings", &standings_rows)?;

    let mut match_rows = vec![vec![
        "Match API ID".to_string(),
        "League".to_string(),
        "Season".to_string(),
        "Stage".to_string(),
        "Date".to_string(),
        "Home Team ID".to_string(),
        "Away Team ID".to_string(),
        "Home Goals".to_string(),
        "Away Goals".to_string(),
        "Home GD".to_string(),
        "Away GD".to_string(),
        "Draw".to_string(),
        "Home Result".to_string(),
        "Away Result".to_string(),
        "Home Points".to_string(),
        "Away Points".to_string(),
        "Home Win".to_string(),
        "Away Win".to_string(),
    ]];
    for m in scored {
        match_rows.push(vec![
            m.row.match_api_id.to_string(),
            dataset
                .league_name(m.row.league_id)
                .unwrap_or("unknown")
                .to_string(),
            m.row.season.clone(),
            m.row.stage.to_string(),
            m.row.date.clone(),
            m.row.home_team_api_id.to_string(),
            m.row.away_team_api_id.to_string(),
            m.facts.home_goals.to_string(),
            m.facts.away_goals.to_string(),
            m.facts.home_goal_diff.to_string(),
            m.facts.away_goal_diff.to_string(),
            if m.facts.is_draw { "1" } else { "0" }.to_string(),
            m.facts.home_result.label().to_string(),
            m.facts.away_result.label().to_string(),
            m.facts.home_points.to_string(),
            m.facts.away_points.to_string(),
            m.facts.home_win_flag.to_string(),
            m.facts.away_win_flag.to_string(),
        ]);
    }
    rows_written += write_sheet(&mut workbook, "Scored Matches", &match_rows)?;

    workbook
        .save(path)
        .with_context(|| format!("save report workbook {}", path.display()))?;

    Ok(ExportReport {
        sheets: 4,
        rows: rows_written,
    })
}

fn write_sheet(workbook: &mut Workbook, name: &str, rows: &[Vec<String>]) -> Result<usize> {
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(name)
        .with_context(|| format!("name worksheet {name}"))?;
    write_rows(worksheet, rows).with_context(|| format!("write worksheet {name}"))?;
    Ok(rows.len().saturating_sub(1))
}

fn write_rows(worksheet: &mut Worksheet, rows: &[Vec<String>]) -> Result<()> {
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            worksheet.write_string(r as u32, c as u16, value)?;
        }
    }
    Ok(())
}
