use euro_explorer::match_outcome::{
    MatchFacts, MatchResult, Side, derive_match, derive_outcomes,
};
use euro_explorer::tables::MatchRow;

fn match_row(match_api_id: i64, home_goals: Option<i64>, away_goals: Option<i64>) -> MatchRow {
    MatchRow {
        id: match_api_id,
        country_id: 1,
        league_id: 1,
        season: "2015/2016".to_string(),
        stage: 1,
        date: "2015-08-08 00:00:00".to_string(),
        match_api_id,
        home_team_api_id: 101,
        away_team_api_id: 102,
        home_team_goal: home_goals,
        away_team_goal: away_goals,
    }
}

#[test]
fn derived_facts_hold_invariants_across_goal_grid() {
    for home in 0..=5i64 {
        for away in 0..=5i64 {
            let facts = MatchFacts::from_goals(home, away);

            assert_eq!(facts.home_goal_diff, -facts.away_goal_diff);
            assert_eq!(facts.is_draw, home == away);
            assert_eq!(facts.is_draw, facts.home_result == MatchResult::Draw);
            assert_eq!(facts.is_draw, facts.away_result == MatchResult::Draw);

            let points_sum = facts.home_points + facts.away_points;
            if facts.is_draw {
                assert_eq!((facts.home_points, facts.away_points), (1, 1));
                assert_eq!(points_sum, 2);
            } else {
                assert_eq!(points_sum, 3);
                assert!(facts.home_points == 3 || facts.away_points == 3);
            }

            assert_eq!(facts.home_win_flag == 1, facts.home_result == MatchResult::Win);
            assert_eq!(facts.away_win_flag == 1, facts.away_result == MatchResult::Win);
        }
    }
}

#[test]
fn worked_examples_from_reference_data() {
    let win = MatchFacts::from_goals(2, 1);
    assert_eq!(win.home_goal_diff, 1);
    assert_eq!(win.away_goal_diff, -1);
    assert_eq!(win.home_result, MatchResult::Win);
    assert_eq!(win.away_result, MatchResult::Loss);
    assert_eq!((win.home_points, win.away_points), (3, 0));
    assert_eq!((win.home_win_flag, win.away_win_flag), (1, 0));

    let draw = MatchFacts::from_goals(0, 0);
    assert!(draw.is_draw);
    assert_eq!(draw.home_result, MatchResult::Draw);
    assert_eq!(draw.away_result, MatchResult::Draw);
    assert_eq!((draw.home_points, draw.away_points), (1, 1));
    assert_eq!((draw.home_win_flag, draw.away_win_flag), (0, 0));

    let loss = MatchFacts::from_goals(1, 3);
    assert_eq!(loss.home_result, MatchResult::Loss);
    assert_eq!(loss.away_result, MatchResult::Win);
    assert_eq!((loss.home_points, loss.away_points), (0, 3));
}

#[test]
fn bulk_derive_preserves_order_and_passthrough_columns() {
    let rows: Vec<MatchRow> = (0..100)
        .map(|idx| match_row(9000 + idx, Some(idx % 4), Some((idx + 1) % 3)))
        .collect();

    let scored = derive_outcomes(&rows).expect("all rows are well formed");
    assert_eq!(scored.len(), rows.len());
    for (raw, scored) in rows.iter().zip(&scored) {
        assert_eq!(scored.row.match_api_id, raw.match_api_id);
        assert_eq!(scored.row.season, raw.season);
        assert_eq!(scored.row.date, raw.date);
        assert_eq!(Some(scored.facts.home_goals), raw.home_team_goal);
        assert_eq!(Some(scored.facts.away_goals), raw.away_team_goal);
    }
}

#[test]
fn rederiving_from_raw_columns_is_idempotent() {
    let rows: Vec<MatchRow> = (0..50)
        .map(|idx| match_row(9000 + idx, Some(idx % 5), Some(idx % 3)))
        .collect();

    let first = derive_outcomes(&rows).unwrap();
    let raw_again: Vec<MatchRow> = first.iter().map(|m| m.row.clone()).collect();
    let second = derive_outcomes(&raw_again).unwrap();

    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.facts, b.facts);
    }
}

#[test]
fn negative_goal_count_is_rejected() {
    let err = derive_match(&match_row(9001, Some(-1), Some(0))).unwrap_err();
    assert_eq!(err.match_api_id, 9001);
    assert_eq!(err.side, Side::Home);
    assert_eq!(err.goals, Some(-1));
    assert!(err.to_string().contains("home"));
    assert!(err.to_string().contains("9001"));
}

#[test]
fn missing_goal_count_is_rejected() {
    let err = derive_match(&match_row(9002, Some(2), None)).unwrap_err();
    assert_eq!(err.side, Side::Away);
    assert_eq!(err.goals, None);
    assert!(err.to_string().contains("missing"));

    let batch = derive_outcomes(&[match_row(1, Some(1), Some(1)), match_row(2, None, Some(0))]);
    assert!(batch.is_err());
}
