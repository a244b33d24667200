use std::path::PathBuf;

use anyhow::{Context, Result};

use euro_explorer::csv_load;
use euro_explorer::match_outcome;
use euro_explorer::match_store;
use euro_explorer::report_export;
use euro_explorer::team_analysis;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let data_dir = parse_path_arg("--data-dir").unwrap_or_else(csv_load::default_data_dir);
    let out_path = parse_path_arg("--out").unwrap_or_else(report_export::default_report_path);

    let dataset = csv_load::load_dataset(&data_dir)
        .with_context(|| format!("load dataset from {}", data_dir.display()))?;
    let profiles = team_analysis::join_team_profiles(&dataset);

    // Reuse the derived store when one exists; otherwise derive in place.
    let scored = match match_store::default_db_path() {
        Some(db_path) if db_path.is_file() => {
            let conn = match_store::open_db(&db_path)?;
            let stored = match_store::load_scored_matches(&conn)?;
            if stored.is_empty() {
                match_outcome::derive_outcomes(&dataset.matches)?
            } else {
                stored
            }
        }
        _ => match_outcome::derive_outcomes(&dataset.matches)?,
    };

    let report = report_export::export_report(&out_path, &dataset, &profiles, &scored)?;

    println!("Report written to {}", out_path.display());
    println!("Sheets: {}", report.sheets);
    println!("Rows: {}", report.rows);
    Ok(())
}

fn parse_path_arg(flag: &str) -> Option<PathBuf> {
    let prefix = format!("{flag}=");
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    for (idx, arg) in args.iter().enumerate() {
        if let Some(path) = arg.strip_prefix(&prefix) {
            let trimmed = path.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
        if arg == flag
            && let Some(next) = args.get(idx + 1)
            && !next.trim().is_empty()
        {
            return Some(PathBuf::from(next.trim()));
        }
    }
    None
}
