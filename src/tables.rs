use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRow {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueRow {
    pub id: i64,
    pub country_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRow {
    pub id: i64,
    pub team_api_id: i64,
    pub team_fifa_api_id: Option<i64>,
    pub team_long_name: String,
    pub team_short_name: String,
}

/// One attribute snapshot per team per survey date. Numeric columns can be
/// blank in the source export, so they decode as options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamAttributesRow {
    pub id: i64,
    pub team_fifa_api_id: Option<i64>,
    pub team_api_id: i64,
    pub date: String,
    #[serde(rename = "buildUpPlaySpeed")]
    pub build_up_play_speed: Option<f64>,
    #[serde(rename = "buildUpPlaySpeedClass")]
    pub build_up_play_speed_class: String,
    #[serde(rename = "buildUpPlayDribbling")]
    pub build_up_play_dribbling: Option<f64>,
    #[serde(rename = "buildUpPlayDribblingClass")]
    pub build_up_play_dribbling_class: String,
    #[serde(rename = "buildUpPlayPassing")]
    pub build_up_play_passing: Option<f64>,
    #[serde(rename = "buildUpPlayPassingClass")]
    pub build_up_play_passing_class: String,
    #[serde(rename = "buildUpPlayPositioningClass")]
    pub build_up_play_positioning_class: String,
    #[serde(rename = "chanceCreationPassing")]
    pub chance_creation_passing: Option<f64>,
    #[serde(rename = "chanceCreationPassingClass")]
    pub chance_creation_passing_class: String,
    #[serde(rename = "chanceCreationCrossing")]
    pub chance_creation_crossing: Option<f64>,
    #[serde(rename = "chanceCreationCrossingClass")]
    pub chance_creation_crossing_class: String,
    #[serde(rename = "chanceCreationShooting")]
    pub chance_creation_shooting: Option<f64>,
    #[serde(rename = "chanceCreationShootingClass")]
    pub chance_creation_shooting_class: String,
    #[serde(rename = "chanceCreationPositioningClass")]
    pub chance_creation_positioning_class: String,
    #[serde(rename = "defencePressure")]
    pub defence_pressure: Option<f64>,
    #[serde(rename = "defencePressureClass")]
    pub defence_pressure_class: String,
    #[serde(rename = "defenceAggression")]
    pub defence_aggression: Option<f64>,
    #[serde(rename = "defenceAggressionClass")]
    pub defence_aggression_class: String,
    #[serde(rename = "defenceTeamWidth")]
    pub defence_team_width: Option<f64>,
    #[serde(rename = "defenceTeamWidthClass")]
    pub defence_team_width_class: String,
    #[serde(rename = "defenceDefenderLineClass")]
    pub defence_defender_line_class: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerRow {
    pub id: i64,
    pub player_api_id: i64,
    pub player_name: String,
    pub player_fifa_api_id: Option<i64>,
    pub birthday: String,
    pub height: Option<f64>,
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerAttributesRow {
    pub id: i64,
    pub player_fifa_api_id: Option<i64>,
    pub player_api_id: i64,
    pub date: String,
    pub overall_rating: Option<f64>,
    pub potential: Option<f64>,
    pub preferred_foot: Option<String>,
}

/// The match columns the explorer works with. The source export carries many
/// more (betting odds, formations); serde skips unknown headers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRow {
    pub id: i64,
    pub country_id: i64,
    pub league_id: i64,
    pub season: String,
    pub stage: i64,
    pub date: String,
    pub match_api_id: i64,
    pub home_team_api_id: i64,
    pub away_team_api_id: i64,
    pub home_team_goal: Option<i64>,
    pub away_team_goal: Option<i64>,
}

/// Survey and match dates come as `2010-02-22 00:00:00`; be tolerant about
/// the time part since some exports strip it.
pub fn parse_table_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = raw.trim();
    if cleaned.is_empty() {
        return None;
    }

    const FORMATS: [&str; 3] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in FORMATS {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(cleaned, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(cleaned, "%Y-%m-%d").ok()
}
