use std::collections::HashMap;

use chrono::NaiveDate;

use crate::csv_load::Dataset;
use crate::summary_stats::{self, CorrelationMatrix, DescribeRow};
use crate::tables::{TeamAttributesRow, TeamRow};

/// The numeric playing-style attributes the explorer charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericAttr {
    BuildUpPlaySpeed,
    BuildUpPlayPassing,
    ChanceCreationPassing,
    ChanceCreationCrossing,
    ChanceCreationShooting,
    DefencePressure,
    DefenceAggression,
    DefenceTeamWidth,
}

impl NumericAttr {
    pub const ALL: [NumericAttr; 8] = [
        NumericAttr::DefenceAggression,
        NumericAttr::DefenceTeamWidth,
        NumericAttr::DefencePressure,
        NumericAttr::BuildUpPlayPassing,
        NumericAttr::ChanceCreationCrossing,
        NumericAttr::ChanceCreationShooting,
        NumericAttr::ChanceCreationPassing,
        NumericAttr::BuildUpPlaySpeed,
    ];

    pub fn label(self) -> &'static str {
        match self {
            NumericAttr::BuildUpPlaySpeed => "buildUpPlaySpeed",
            NumericAttr::BuildUpPlayPassing => "buildUpPlayPassing",
            NumericAttr::ChanceCreationPassing => "chanceCreationPassing",
            NumericAttr::ChanceCreationCrossing => "chanceCreationCrossing",
            NumericAttr::ChanceCreationShooting => "chanceCreationShooting",
            NumericAttr::DefencePressure => "defencePressure",
            NumericAttr::DefenceAggression => "defenceAggression",
            NumericAttr::DefenceTeamWidth => "defenceTeamWidth",
        }
    }
}

/// The categorical (classed) playing-style attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassAttr {
    BuildUpPlaySpeedClass,
    BuildUpPlayDribblingClass,
    BuildUpPlayPassingClass,
    BuildUpPlayPositioningClass,
    ChanceCreationPassingClass,
    ChanceCreationCrossingClass,
    ChanceCreationShootingClass,
    ChanceCreationPositioningClass,
    DefencePressureClass,
    DefenceAggressionClass,
    DefenceTeamWidthClass,
    DefenceDefenderLineClass,
}

impl ClassAttr {
    pub const ALL: [ClassAttr; 12] = [
        ClassAttr::BuildUpPlaySpeedClass,
        ClassAttr::BuildUpPlayDribblingClass,
        ClassAttr::BuildUpPlayPassingClass,
        ClassAttr::BuildUpPlayPositioningClass,
        ClassAttr::ChanceCreationPassingClass,
        ClassAttr::ChanceCreationCrossingClass,
        ClassAttr::ChanceCreationShootingClass,
        ClassAttr::ChanceCreationPositioningClass,
        ClassAttr::DefencePressureClass,
        ClassAttr::DefenceAggressionClass,
        ClassAttr::DefenceTeamWidthClass,
        ClassAttr::DefenceDefenderLineClass,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ClassAttr::BuildUpPlaySpeedClass => "buildUpPlaySpeedClass",
            ClassAttr::BuildUpPlayDribblingClass => "buildUpPlayDribblingClass",
            ClassAttr::BuildUpPlayPassingClass => "buildUpPlayPassingClass",
            ClassAttr::BuildUpPlayPositioningClass => "buildUpPlayPositioningClass",
            ClassAttr::ChanceCreationPassingClass => "chanceCreationPassingClass",
            ClassAttr::ChanceCreationCrossingClass => "chanceCreationCrossingClass",
            ClassAttr::ChanceCreationShootingClass => "chanceCreationShootingClass",
            ClassAttr::ChanceCreationPositioningClass => "chanceCreationPositioningClass",
            ClassAttr::DefencePressureClass => "defencePressureClass",
            ClassAttr::DefenceAggressionClass => "defenceAggressionClass",
            ClassAttr::DefenceTeamWidthClass => "defenceTeamWidthClass",
            ClassAttr::DefenceDefenderLineClass => "defenceDefenderLineClass",
        }
    }
}

/// One attribute snapshot joined with its team's identity.
#[derive(Debug, Clone)]
pub struct TeamProfile {
    pub team_api_id: i64,
    pub team_long_name: String,
    pub team_short_name: String,
    pub date: Option<NaiveDate>,
    pub attributes: TeamAttributesRow,
}

impl TeamProfile {
    pub fn numeric(&self, attr: NumericAttr) -> Option<f64> {
        let a = &self.attributes;
        match attr {
            NumericAttr::BuildUpPlaySpeed => a.build_up_play_speed,
            NumericAttr::BuildUpPlayPassing => a.build_up_play_passing,
            NumericAttr::ChanceCreationPassing => a.chance_creation_passing,
            NumericAttr::ChanceCreationCrossing => a.chance_creation_crossing,
            NumericAttr::ChanceCreationShooting => a.chance_creation_shooting,
            NumericAttr::DefencePressure => a.defence_pressure,
            NumericAttr::DefenceAggression => a.defence_aggression,
            NumericAttr::DefenceTeamWidth => a.defence_team_width,
        }
    }

    pub fn class(&self, attr: ClassAttr) -> &str {
        let a = &self.attributes;
        match attr {
            ClassAttr::BuildUpPlaySpeedClass => &a.build_up_play_speed_class,
            ClassAttr::BuildUpPlayDribblingClass => &a.build_up_play_dribbling_class,
            ClassAttr::BuildUpPlayPassingClass => &a.build_up_play_passing_class,
            ClassAttr::BuildUpPlayPositioningClass => &a.build_up_play_positioning_class,
            ClassAttr::ChanceCreationPassingClass => &a.chance_creation_passing_class,
            ClassAttr::ChanceCreationCrossingClass => &a.chance_creation_crossing_class,
            ClassAttr::ChanceCreationShootingClass => &a.chance_creation_shooting_class,
            ClassAttr::ChanceCreationPositioningClass => &a.chance_creation_positioning_class,
            ClassAttr::DefencePressureClass => &a.defence_pressure_class,
            ClassAttr::DefenceAggressionClass => &a.defence_aggression_class,
            ClassAttr::DefenceTeamWidthClass => &a.defence_team_width_class,
            ClassAttr::DefenceDefenderLineClass => &a.defence_defender_line_class,
        }
    }
}

/// Inner join Team_Attributes with Team on team_api_id. Snapshots whose
/// team is missing from the Team table are dropped, like the source app's
/// inner merge.
pub fn join_team_profiles(dataset: &Dataset) -> Vec<TeamProfile> {
    let teams_by_id: HashMap<i64, &TeamRow> = dataset
        .teams
        .iter()
        .map(|t| (t.team_api_id, t))
        .collect();

    dataset
        .team_attributes
        .iter()
        .filter_map(|attrs| {
            let team = teams_by_id.get(&attrs.team_api_id)?;
            Some(TeamProfile {
                team_api_id: attrs.team_api_id,
                team_long_name: team.team_long_name.clone(),
                team_short_name: team.team_short_name.clone(),
                date: crate::tables::parse_table_date(&attrs.date),
                attributes: attrs.clone(),
            })
        })
        .collect()
}

pub fn distinct_team_count(profiles: &[TeamProfile]) -> usize {
    let mut ids: Vec<i64> = profiles.iter().map(|p| p.team_api_id).collect();
    ids.sort_unstable();
    ids.dedup();
    ids.len()
}

pub fn numeric_values(profiles: &[TeamProfile], attr: NumericAttr) -> Vec<f64> {
    profiles.iter().filter_map(|p| p.numeric(attr)).collect()
}

pub fn describe_numeric(profiles: &[TeamProfile], attr: NumericAttr) -> Option<DescribeRow> {
    summary_stats::describe(attr.label(), &numeric_values(profiles, attr))
}

pub fn describe_all_numeric(profiles: &[TeamProfile]) -> Vec<DescribeRow> {
    NumericAttr::ALL
        .iter()
        .filter_map(|attr| describe_numeric(profiles, *attr))
        .collect()
}

pub fn numeric_correlations(profiles: &[TeamProfile]) -> CorrelationMatrix {
    let series: Vec<(String, Vec<Option<f64>>)> = NumericAttr::ALL
        .iter()
        .map(|attr| {
            (
                attr.label().to_string(),
                profiles.iter().map(|p| p.numeric(*attr)).collect(),
            )
        })
        .collect();
    summary_stats::correlation_matrix(&series)
}

/// Percent share of each class value, descending, matching the normalized
/// value counts behind the source app's bar chart.
pub fn class_value_shares(profiles: &[TeamProfile], attr: ClassAttr) -> Vec<(String, f64)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut total = 0usize;
    for profile in profiles {
        let value = profile.class(attr);
        if value.is_empty() {
            continue;
        }
        *counts.entry(value).or_insert(0) += 1;
        total += 1;
    }
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<(String, f64)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count as f64 * 100.0 / total as f64))
        .collect();
    shares.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    shares
}

/// Teams ranked by the mean of one attribute across their snapshots.
pub fn top_teams_by_attribute(
    profiles: &[TeamProfile],
    attr: NumericAttr,
    limit: usize,
) -> Vec<(String, f64)> {
    let mut sums: HashMap<&str, (f64, usize)> = HashMap::new();
    for profile in profiles {
        let Some(value) = profile.numeric(attr) else {
            continue;
        };
        let entry = sums.entry(profile.team_long_name.as_str()).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    let mut means: Vec<(String, f64)> = sums
        .into_iter()
        .map(|(name, (sum, n))| (name.to_string(), sum / n as f64))
        .collect();
    means.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(&b.0))
    });
    means.truncate(limit);
    means
}
