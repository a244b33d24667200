use std::path::PathBuf;

use anyhow::{Context, Result};

use euro_explorer::csv_load;
use euro_explorer::match_store;

fn main() -> Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");

    let data_dir = parse_path_arg("--data-dir").unwrap_or_else(csv_load::default_data_dir);
    let db_path = parse_path_arg("--db")
        .or_else(match_store::default_db_path)
        .context("unable to resolve sqlite path")?;

    let dataset = csv_load::load_dataset(&data_dir)
        .with_context(|| format!("load dataset from {}", data_dir.display()))?;

    let mut conn = match_store::open_db(&db_path)?;
    let summary = match_store::ingest_dataset(&mut conn, db_path.clone(), &dataset)?;

    println!("Dataset ingest complete");
    println!("Data dir: {}", data_dir.display());
    println!("DB: {}", summary.db_path.display());
    for (name, count) in dataset.table_counts() {
        println!("  {name}: {count} rows");
    }
    println!("Matches upserted: {}", summary.matches_upserted);
    println!("Rows rejected: {}", summary.rows_rejected);

    let mut league_ids = summary.per_league.keys().copied().collect::<Vec<_>>();
    league_ids.sort_unstable();
    for league_id in league_ids {
        let Some(item) = summary.per_league.get(&league_id) else {
            continue;
        };
        let name = dataset.league_name(league_id).unwrap_or("unknown league");
        println!(
            "league {league_id} ({name}): matches={} latest={}",
            item.matches_upserted,
            item.latest_date.as_deref().unwrap_or("n/a")
        );
    }

    if !summary.errors.is_empty() {
        println!("errors: {}", summary.errors.len());
        for err in summary.errors.iter().take(6) {
            println!(" - {err}");
        }
    }

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
