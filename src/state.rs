use std::collections::VecDeque;

use crate::csv_load::Dataset;
use crate::match_analysis::{self, CrossTab};
use crate::match_outcome::{ScoredMatch, Side};
use crate::standings::{self, StandingsRow};
use crate::summary_stats::{self, CorrelationMatrix, DescribeRow};
use crate::team_analysis::{self, ClassAttr, NumericAttr, TeamProfile};

const LOG_CAP: usize = 100;
pub const TOP_TEAMS_LIMIT: usize = 10;
pub const HISTOGRAM_BINS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Teams,
    Matches,
    Standings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamsView {
    Overview,
    Describe,
    Histogram,
    ClassBars,
    Heatmap,
    TopTeams,
}

impl TeamsView {
    pub fn next(self) -> Self {
        match self {
            TeamsView::Overview => TeamsView::Describe,
            TeamsView::Describe => TeamsView::Histogram,
            TeamsView::Histogram => TeamsView::ClassBars,
            TeamsView::ClassBars => TeamsView::Heatmap,
            TeamsView::Heatmap => TeamsView::TopTeams,
            TeamsView::TopTeams => TeamsView::Overview,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TeamsView::Overview => "OVERVIEW",
            TeamsView::Describe => "DESCRIBE",
            TeamsView::Histogram => "HISTOGRAM",
            TeamsView::ClassBars => "CLASS BARS",
            TeamsView::Heatmap => "HEATMAP",
            TeamsView::TopTeams => "TOP TEAMS",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchesView {
    Overview,
    HomeCrosstab,
    AwayCrosstab,
}

impl MatchesView {
    pub fn next(self) -> Self {
        match self {
            MatchesView::Overview => MatchesView::HomeCrosstab,
            MatchesView::HomeCrosstab => MatchesView::AwayCrosstab,
            MatchesView::AwayCrosstab => MatchesView::Overview,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchesView::Overview => "OVERVIEW",
            MatchesView::HomeCrosstab => "HOME CROSSTAB",
            MatchesView::AwayCrosstab => "AWAY CROSSTAB",
        }
    }
}

pub struct AppState {
    pub dataset: Dataset,
    pub profiles: Vec<TeamProfile>,
    pub scored: Vec<ScoredMatch>,
    /// (league_id, display name) pairs, name-sorted.
    pub leagues: Vec<(i64, String)>,

    pub screen: Screen,
    pub teams_view: TeamsView,
    pub matches_view: MatchesView,

    pub selected_numeric: usize,
    pub selected_class: usize,
    /// None means all leagues.
    pub league_filter: Option<usize>,
    pub season_index: usize,
    pub preview_scroll: usize,
    pub help_overlay: bool,

    pub logs: VecDeque<String>,

    describe_cache: Option<Vec<DescribeRow>>,
    correlation_cache: Option<CorrelationMatrix>,
    crosstab_cache: Option<CrossTab>,
    standings_cache: Option<Vec<StandingsRow>>,
}

impl AppState {
    pub fn new(dataset: Dataset, scored: Vec<ScoredMatch>) -> Self {
        let profiles = team_analysis::join_team_profiles(&dataset);
        let mut leagues: Vec<(i64, String)> = dataset
            .leagues
            .iter()
            .map(|l| (l.id, l.name.clone()))
            .collect();
        leagues.sort_by(|a, b| a.1.cmp(&b.1));

        Self {
            dataset,
            profiles,
            scored,
            leagues,
            screen: Screen::Teams,
            teams_view: TeamsView::Overview,
            matches_view: MatchesView::Overview,
            selected_numeric: 0,
            selected_class: 0,
            league_filter: None,
            season_index: 0,
            preview_scroll: 0,
            help_overlay: false,
            logs: VecDeque::new(),
            describe_cache: None,
            correlation_cache: None,
            crosstab_cache: None,
            standings_cache: None,
        }
    }

    pub fn push_log(&mut self, line: impl Into<String>) {
        if self.logs.len() >= LOG_CAP {
            self.logs.pop_front();
        }
        self.logs.push_back(line.into());
    }

    pub fn numeric_attr(&self) -> NumericAttr {
        NumericAttr::ALL[self.selected_numeric % NumericAttr::ALL.len()]
    }

    pub fn class_attr(&self) -> ClassAttr {
        ClassAttr::ALL[self.selected_class % ClassAttr::ALL.len()]
    }

    pub fn league_label(&self) -> String {
        match self.league_filter.and_then(|idx| self.leagues.get(idx)) {
            Some((_, name)) => name.clone(),
            None => "All leagues".to_string(),
        }
    }

    pub fn selected_league_id(&self) -> Option<i64> {
        self.league_filter
            .and_then(|idx| self.leagues.get(idx))
            .map(|(id, _)| *id)
    }

    /// Matches restricted to the league filter.
    pub fn filtered_matches(&self) -> Vec<&ScoredMatch> {
        match self.selected_league_id() {
            Some(league_id) => self
                .scored
                .iter()
                .filter(|m| m.row.league_id == league_id)
                .collect(),
            None => self.scored.iter().collect(),
        }
    }

    /// The league the standings screen shows: the filtered one, or the
    /// first league of the dataset.
    pub fn standings_league(&self) -> Option<(i64, String)> {
        self.league_filter
            .and_then(|idx| self.leagues.get(idx))
            .or_else(|| self.leagues.first())
            .cloned()
    }

    pub fn standings_seasons(&self) -> Vec<String> {
        match self.standings_league() {
            Some((league_id, _)) => standings::seasons_for_league(&self.scored, league_id),
            None => Vec::new(),
        }
    }

    pub fn standings_season(&self) -> Option<String> {
        let seasons = self.standings_seasons();
        if seasons.is_empty() {
            return None;
        }
        Some(seasons[self.season_index % seasons.len()].clone())
    }

    // --- key-driven transitions ------------------------------------------

    pub fn cycle_view(&mut self) {
        match self.screen {
            Screen::Teams => self.teams_view = self.teams_view.next(),
            Screen::Matches => self.matches_view = self.matches_view.next(),
            Screen::Standings => {}
        }
        self.preview_scroll = 0;
    }

    pub fn select_next_attr(&mut self) {
        match (self.screen, self.teams_view, self.matches_view) {
            (Screen::Teams, TeamsView::Histogram | TeamsView::TopTeams, _) => {
                self.selected_numeric = (self.selected_numeric + 1) % NumericAttr::ALL.len();
            }
            (Screen::Teams, TeamsView::ClassBars, _)
            | (Screen::Matches, _, MatchesView::HomeCrosstab | MatchesView::AwayCrosstab) => {
                self.selected_class = (self.selected_class + 1) % ClassAttr::ALL.len();
                self.crosstab_cache = None;
            }
            _ => self.preview_scroll = self.preview_scroll.saturating_add(1),
        }
    }

    pub fn select_prev_attr(&mut self) {
        let numeric_len = NumericAttr::ALL.len();
        let class_len = ClassAttr::ALL.len();
        match (self.screen, self.teams_view, self.matches_view) {
            (Screen::Teams, TeamsView::Histogram | TeamsView::TopTeams, _) => {
                self.selected_numeric = (self.selected_numeric + numeric_len - 1) % numeric_len;
            }
            (Screen::Teams, TeamsView::ClassBars, _)
            | (Screen::Matches, _, MatchesView::HomeCrosstab | MatchesView::AwayCrosstab) => {
                self.selected_class = (self.selected_class + class_len - 1) % class_len;
                self.crosstab_cache = None;
            }
            _ => self.preview_scroll = self.preview_scroll.saturating_sub(1),
        }
    }

    pub fn cycle_league(&mut self) {
        self.league_filter = match self.league_filter {
            None if self.leagues.is_empty() => None,
            None => Some(0),
            Some(idx) if idx + 1 < self.leagues.len() => Some(idx + 1),
            Some(_) => None,
        };
        self.season_index = 0;
        self.crosstab_cache = None;
        self.standings_cache = None;
    }

    pub fn cycle_season(&mut self) {
        let seasons = self.standings_seasons();
        if seasons.is_empty() {
            return;
        }
        self.season_index = (self.season_index + 1) % seasons.len();
        self.standings_cache = None;
    }

    // --- cached derivations ----------------------------------------------

    /// Recompute whatever the current selections invalidated. Called once
    /// per tick before drawing, so renderers only read.
    pub fn ensure_derived(&mut self) {
        if self.describe_cache.is_none() {
            self.describe_cache = Some(team_analysis::describe_all_numeric(&self.profiles));
        }
        if self.correlation_cache.is_none() {
            self.correlation_cache = Some(team_analysis::numeric_correlations(&self.profiles));
        }

        let crosstab_needed = self.screen == Screen::Matches
            && matches!(
                self.matches_view,
                MatchesView::HomeCrosstab | MatchesView::AwayCrosstab
            );
        if crosstab_needed {
            let side = match self.matches_view {
                MatchesView::AwayCrosstab => Side::Away,
                _ => Side::Home,
            };
            let stale = match &self.crosstab_cache {
                Some(tab) => tab.attr != self.class_attr() || tab.side != side,
                None => true,
            };
            if stale {
                let filtered: Vec<ScoredMatch> =
                    self.filtered_matches().into_iter().cloned().collect();
                self.crosstab_cache = Some(match_analysis::crosstab_class_vs_result(
                    &self.profiles,
                    &filtered,
                    self.class_attr(),
                    side,
                ));
            }
        }

        if self.screen == Screen::Standings && self.standings_cache.is_none() {
            self.standings_cache = self.standings_league().and_then(|(league_id, _)| {
                let season = self.standings_season()?;
                Some(standings::compute_standings(
                    &self.scored,
                    &self.dataset.teams,
                    league_id,
                    &season,
                ))
            });
        }
    }

    pub fn describe_rows(&self) -> &[DescribeRow] {
        self.describe_cache.as_deref().unwrap_or(&[])
    }

    pub fn correlations(&self) -> Option<&CorrelationMatrix> {
        self.correlation_cache.as_ref()
    }

    pub fn crosstab(&self) -> Option<&CrossTab> {
        self.crosstab_cache.as_ref()
    }

    pub fn standings_rows(&self) -> &[StandingsRow] {
        self.standings_cache.as_deref().unwrap_or(&[])
    }

    // --- summary accessors -----------------------------------------------

    pub fn distinct_team_count(&self) -> usize {
        team_analysis::distinct_team_count(&self.profiles)
    }

    pub fn distinct_match_count(&self) -> usize {
        let mut ids: Vec<i64> = self.scored.iter().map(|m| m.row.match_api_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    pub fn histogram_bins(&self) -> Vec<summary_stats::HistogramBin> {
        let values = team_analysis::numeric_values(&self.profiles, self.numeric_attr());
        summary_stats::histogram(&values, HISTOGRAM_BINS)
    }

    pub fn class_shares(&self) -> Vec<(String, f64)> {
        team_analysis::class_value_shares(&self.profiles, self.class_attr())
    }

    pub fn top_teams(&self) -> Vec<(String, f64)> {
        team_analysis::top_teams_by_attribute(&self.profiles, self.numeric_attr(), TOP_TEAMS_LIMIT)
    }

    /// Describe rows over the derived match columns, league-filtered,
    /// shown on the matches overview.
    pub fn match_describe_rows(&self) -> Vec<DescribeRow> {
        let filtered = self.filtered_matches();
        let columns: [(&str, fn(&ScoredMatch) -> f64); 5] = [
            ("home_team_goal", |m| m.facts.home_goals as f64),
            ("away_team_goal", |m| m.facts.away_goals as f64),
            ("home_goal_diff", |m| m.facts.home_goal_diff as f64),
            ("home_points", |m| f64::from(m.facts.home_points)),
            ("away_points", |m| f64::from(m.facts.away_points)),
        ];

        columns
            .iter()
            .filter_map(|(name, extract)| {
                let values: Vec<f64> = filtered.iter().map(|m| extract(m)).collect();
                summary_stats::describe(name, &values)
            })
            .collect()
    }
}
