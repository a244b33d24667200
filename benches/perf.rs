use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use euro_explorer::match_analysis::crosstab_class_vs_result;
use euro_explorer::match_outcome::{Side, derive_outcomes};
use euro_explorer::standings::compute_standings;
use euro_explorer::summary_stats::correlation_matrix;
use euro_explorer::tables::{MatchRow, TeamAttributesRow, TeamRow};
use euro_explorer::team_analysis::{ClassAttr, TeamProfile};

const TEAMS: i64 = 40;
const SEASON: &str = "2015/2016";

/// Deterministic pseudo-season roughly the size of one league decade:
/// every ordered team pair plays once.
fn sample_matches() -> Vec<MatchRow> {
    let mut rows = Vec::new();
    let mut id = 0i64;
    for home in 0..TEAMS {
        for away in 0..TEAMS {
            if home == away {
                continue;
            }
            id += 1;
            rows.push(MatchRow {
                id,
                country_id: 1,
                league_id: 1,
                season: SEASON.to_string(),
                stage: (id % 38) + 1,
                date: format!("2015-{:02}-{:02} 00:00:00", (id % 12) + 1, (id % 28) + 1),
                match_api_id: 10_000 + id,
                home_team_api_id: 100 + home,
                away_team_api_id: 100 + away,
                home_team_goal: Some((home + away) % 5),
                away_team_goal: Some((home * 3 + away) % 4),
            });
        }
    }
    rows
}

fn sample_teams() -> Vec<TeamRow> {
    (0..TEAMS)
        .map(|idx| TeamRow {
            id: idx,
            team_api_id: 100 + idx,
            team_fifa_api_id: Some(900 + idx),
            team_long_name: format!("Team {idx}"),
            team_short_name: format!("T{idx:02}"),
        })
        .collect()
}

fn sample_profiles() -> Vec<TeamProfile> {
    let classes = ["Slow", "Balanced", "Fast"];
    (0..TEAMS * 4)
        .map(|idx| {
            let team = idx % TEAMS;
            let base = 30.0 + (idx % 50) as f64;
            TeamProfile {
                team_api_id: 100 + team,
                team_long_name: format!("Team {team}"),
                team_short_name: format!("T{team:02}"),
                date: None,
                attributes: TeamAttributesRow {
                    id: idx,
                    team_fifa_api_id: Some(900 + team),
                    team_api_id: 100 + team,
                    date: "2014-09-19 00:00:00".to_string(),
                    build_up_play_speed: Some(base),
                    build_up_play_speed_class: classes[(idx % 3) as usize].to_string(),
                    build_up_play_dribbling: None,
                    build_up_play_dribbling_class: "Little".to_string(),
                    build_up_play_passing: Some(base + 5.0),
                    build_up_play_passing_class: "Mixed".to_string(),
                    build_up_play_positioning_class: "Organised".to_string(),
                    chance_creation_passing: Some(base + 2.0),
                    chance_creation_passing_class: "Normal".to_string(),
                    chance_creation_crossing: Some(base - 3.0),
                    chance_creation_crossing_class: "Normal".to_string(),
                    chance_creation_shooting: Some(base + 1.0),
                    chance_creation_shooting_class: "Normal".to_string(),
                    chance_creation_positioning_class: "Organised".to_string(),
                    defence_pressure: Some(base - 5.0),
                    defence_pressure_class: "Medium".to_string(),
                    defence_aggression: Some(base - 1.0),
                    defence_aggression_class: "Press".to_string(),
                    defence_team_width: Some(base),
                    defence_team_width_class: "Normal".to_string(),
                    defence_defender_line_class: "Cover".to_string(),
                },
            }
        })
        .collect()
}

fn bench_derive_outcomes(c: &mut Criterion) {
    let rows = sample_matches();
    c.bench_function("derive_outcomes", |b| {
        b.iter(|| {
            let scored = derive_outcomes(black_box(&rows)).unwrap();
            black_box(scored.len());
        })
    });
}

fn bench_correlation_matrix(c: &mut Criterion) {
    let profiles = sample_profiles();
    let series: Vec<(String, Vec<Option<f64>>)> = [
        "buildUpPlaySpeed",
        "buildUpPlayPassing",
        "chanceCreationPassing",
        "defencePressure",
    ]
    .iter()
    .enumerate()
    .map(|(offset, name)| {
        (
            name.to_string(),
            profiles
                .iter()
                .map(|p| p.attributes.build_up_play_speed.map(|v| v + offset as f64))
                .collect(),
        )
    })
    .collect();

    c.bench_function("correlation_matrix", |b| {
        b.iter(|| {
            let matrix = correlation_matrix(black_box(&series));
            black_box(matrix.cells.len());
        })
    });
}

fn bench_crosstab(c: &mut Criterion) {
    let profiles = sample_profiles();
    let scored = derive_outcomes(&sample_matches()).unwrap();
    c.bench_function("crosstab_class_vs_result", |b| {
        b.iter(|| {
            let tab = crosstab_class_vs_result(
                black_box(&profiles),
                black_box(&scored),
                ClassAttr::BuildUpPlaySpeedClass,
                Side::Home,
            );
            black_box(tab.pair_count);
        })
    });
}

fn bench_standings(c: &mut Criterion) {
    let teams = sample_teams();
    let scored = derive_outcomes(&sample_matches()).unwrap();
    c.bench_function("compute_standings", |b| {
        b.iter(|| {
            let table = compute_standings(black_box(&scored), black_box(&teams), 1, SEASON);
            black_box(table.len());
        })
    });
}

criterion_group!(
    perf,
    bench_derive_outcomes,
    bench_correlation_matrix,
    bench_crosstab,
    bench_standings
);
criterion_main!(perf);
