use std::path::PathBuf;

use euro_explorer::csv_load::{Dataset, load_dataset};
use euro_explorer::match_analysis::crosstab_class_vs_result;
use euro_explorer::match_outcome::{MatchResult, Side, derive_outcomes};
use euro_explorer::match_store;
use euro_explorer::standings::compute_standings;
use euro_explorer::team_analysis::{
    ClassAttr, NumericAttr, join_team_profiles, top_teams_by_attribute,
};

fn fixture_dataset() -> Dataset {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push("dataset");
    load_dataset(&path).expect("fixture dataset should load")
}

#[test]
fn loads_all_seven_tables() {
    let dataset = fixture_dataset();
    assert_eq!(dataset.countries.len(), 2);
    assert_eq!(dataset.leagues.len(), 2);
    assert_eq!(dataset.players.len(), 2);
    assert_eq!(dataset.teams.len(), 3);
    assert_eq!(dataset.team_attributes.len(), 4);
    assert_eq!(dataset.player_attributes.len(), 2);
    assert_eq!(dataset.matches.len(), 6);

    assert_eq!(dataset.league_name(1), Some("England Premier League"));
    assert_eq!(dataset.country_name(2), Some("Spain"));

    // Blank numeric cells decode as missing, not as errors.
    assert_eq!(dataset.team_attributes[0].build_up_play_dribbling, None);
    assert_eq!(dataset.team_attributes[1].build_up_play_dribbling, Some(48.0));
}

#[test]
fn profiles_join_teams_and_parse_dates() {
    let dataset = fixture_dataset();
    let profiles = join_team_profiles(&dataset);
    assert_eq!(profiles.len(), 4);

    let alpha = profiles
        .iter()
        .find(|p| p.team_api_id == 101)
        .expect("alpha profile");
    assert_eq!(alpha.team_long_name, "Alpha United");
    assert_eq!(alpha.date.map(|d| d.to_string()), Some("2014-09-19".to_string()));
    assert_eq!(alpha.numeric(NumericAttr::BuildUpPlaySpeed), Some(72.0));
    assert_eq!(alpha.class(ClassAttr::BuildUpPlaySpeedClass), "Fast");
}

#[test]
fn derives_outcomes_for_the_whole_match_table() {
    let dataset = fixture_dataset();
    let scored = derive_outcomes(&dataset.matches).unwrap();
    assert_eq!(scored.len(), 6);

    let opener = scored.iter().find(|m| m.row.match_api_id == 9001).unwrap();
    assert_eq!(opener.facts.home_result, MatchResult::Win);
    assert_eq!(opener.facts.away_result, MatchResult::Loss);
    assert_eq!((opener.facts.home_points, opener.facts.away_points), (3, 0));

    let derby = scored.iter().find(|m| m.row.match_api_id == 9006).unwrap();
    assert!(derby.facts.is_draw);
    assert_eq!((derby.facts.home_points, derby.facts.away_points), (1, 1));
}

#[test]
fn home_crosstab_counts_snapshot_match_pairs() {
    let dataset = fixture_dataset();
    let profiles = join_team_profiles(&dataset);
    let scored = derive_outcomes(&dataset.matches).unwrap();

    let tab = crosstab_class_vs_result(
        &profiles,
        &scored,
        ClassAttr::BuildUpPlaySpeedClass,
        Side::Home,
    );

    // Home pairs: 9001 Alpha(Fast) W, 9002 Beta(Balanced) D,
    // 9003 Gamma(Slow, two snapshots) L x2, 9004 Alpha(Fast) L.
    // League-2 teams have no attribute snapshots and drop out.
    assert_eq!(tab.pair_count, 5);
    assert_eq!(
        tab.class_values,
        vec![
            "Balanced".to_string(),
            "Fast".to_string(),
            "Slow".to_string()
        ]
    );

    let total: f64 = tab.cells.iter().flat_map(|r| r.iter()).sum();
    assert!((total - 100.0).abs() < 1e-9);

    let fast = &tab.cells[1];
    let slow = &tab.cells[2];
    assert!((fast[0] - 20.0).abs() < 1e-9); // Fast wins
    assert!((fast[2] - 20.0).abs() < 1e-9); // Fast losses
    assert!((slow[2] - 40.0).abs() < 1e-9); // Slow losses, both snapshots
}

#[test]
fn standings_fold_the_premier_league_season() {
    let dataset = fixture_dataset();
    let scored = derive_outcomes(&dataset.matches).unwrap();
    let table = compute_standings(&scored, &dataset.teams, 1, "2015/2016");

    assert_eq!(table.len(), 3);
    assert_eq!(table[0].team_name, "Alpha United");
    assert_eq!(table[0].points, 6);
    assert_eq!(table[0].goals_for, 5);
    assert_eq!(table[0].goals_against, 2);

    // Beta and Gamma both hold one point; Beta is ahead on goal difference.
    assert_eq!(table[1].team_name, "Beta City");
    assert_eq!(table[1].points, 1);
    assert_eq!(table[2].team_name, "Gamma Rovers");
    assert_eq!(table[2].points, 1);
    assert!(table[1].goal_diff > table[2].goal_diff);
}

#[test]
fn unknown_teams_get_placeholder_names_in_standings() {
    let dataset = fixture_dataset();
    let scored = derive_outcomes(&dataset.matches).unwrap();
    let table = compute_standings(&scored, &dataset.teams, 2, "2015/2016");

    assert_eq!(table.len(), 2);
    assert_eq!(table[0].team_name, "Team 104");
    assert_eq!(table[0].points, 4); // one win, one draw
}

#[test]
fn top_teams_rank_by_mean_attribute() {
    let dataset = fixture_dataset();
    let profiles = join_team_profiles(&dataset);
    let top = top_teams_by_attribute(&profiles, NumericAttr::BuildUpPlaySpeed, 10);

    assert_eq!(top.len(), 3);
    assert_eq!(top[0].0, "Alpha United");
    assert_eq!(top[1].0, "Beta City");
    // Gamma has two snapshots, 31 and 35, so its mean is 33.
    assert_eq!(top[2].0, "Gamma Rovers");
    assert!((top[2].1 - 33.0).abs() < 1e-9);
}

#[test]
fn store_round_trips_the_scored_sequence() {
    let dataset = fixture_dataset();
    let derived = derive_outcomes(&dataset.matches).unwrap();

    let mut conn = rusqlite::Connection::open_in_memory().unwrap();
    match_store::init_schema(&conn).unwrap();
    let summary =
        match_store::ingest_dataset(&mut conn, PathBuf::from(":memory:"), &dataset).unwrap();
    assert_eq!(summary.matches_upserted, 6);
    assert_eq!(summary.rows_rejected, 0);
    assert_eq!(summary.per_league.len(), 2);
    assert_eq!(summary.per_league.get(&1).unwrap().matches_upserted, 4);

    let stored = match_store::load_scored_matches(&conn).unwrap();
    assert_eq!(stored.len(), derived.len());

    // The loader orders by date; compare by match id.
    for m in &derived {
        let found = stored
            .iter()
            .find(|s| s.row.match_api_id == m.row.match_api_id)
            .expect("stored row present");
        assert_eq!(found.facts, m.facts);
        assert_eq!(found.row.season, m.row.season);
        assert_eq!(found.row.league_id, m.row.league_id);
    }

    // Dates ascend in the loaded sequence.
    for pair in stored.windows(2) {
        assert!(pair[0].row.date <= pair[1].row.date);
    }

    // Re-ingesting is an upsert, not a duplicate insert.
    let again = match_store::ingest_dataset(&mut conn, PathBuf::from(":memory:"), &dataset).unwrap();
    assert_eq!(again.matches_upserted, 6);
    assert_eq!(match_store::load_scored_matches(&conn).unwrap().len(), 6);
}

#[test]
fn ingest_skips_rows_the_deriver_rejects() {
    let mut dataset = fixture_dataset();
    dataset.matches[0].home_team_goal = None;
    dataset.matches[1].away_team_goal = Some(-2);

    let mut conn = rusqlite::Connection::open_in_memory().unwrap();
    match_store::init_schema(&conn).unwrap();
    let summary =
        match_store::ingest_dataset(&mut conn, PathBuf::from(":memory:"), &dataset).unwrap();

    assert_eq!(summary.matches_upserted, 4);
    assert_eq!(summary.rows_rejected, 2);
    assert_eq!(summary.errors.len(), 2);
    assert!(summary.errors[0].contains("missing"));
    assert!(summary.errors[1].contains("-2"));
}
