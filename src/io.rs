use crate::model::{Group, Participant};
use crate::overlap::Window;
use anyhow::{bail, Context};
use chrono::NaiveDate;
use csv::ReaderBuilder;
use std::fs;
use std::path::Path;

/// Durée proposée à un participant importé qui a au moins un jour libre.
const IMPORT_DEFAULT_DURATION: u32 = 3;

/// Charge un groupe (période + participants) depuis un fichier JSON.
pub fn load_group_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Group> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let group: Group = serde_json::from_slice(&data)
        .with_context(|| format!("parsing group {}", path.display()))?;
    if group.end_date < group.start_date {
        bail!(
            "group {}: end date {} is before start date {}",
            group.id,
            group.end_date,
            group.start_date
        );
    }
    Ok(group)
}

/// Export JSON du groupe (jolie mise en forme)
pub fn export_group_json<P: AsRef<Path>>(path: P, group: &Group) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(group)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export JSON des fenêtres classées
pub fn export_windows_json<P: AsRef<Path>>(path: P, windows: &[Window]) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(windows)?;
    fs::write(path, s)?;
    Ok(())
}

/// Import d'un sondage CSV: header `Name,Email,<Jour> <j> <Mois> <AAAA>,...`
///
/// Une cellule `yes` ou `if need be` marque le jour comme libre. Les colonnes
/// dont l'en-tête n'est pas une date sont ignorées.
pub fn import_poll_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Participant>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let headers = rdr.headers()?.clone();
    let mut day_columns: Vec<(usize, NaiveDate)> = Vec::new();
    for (idx, header) in headers.iter().enumerate().skip(2) {
        let Some(day) = parse_poll_header(header) else {
            continue;
        };
        // même date en double : la dernière colonne l'emporte
        match day_columns.iter().position(|(_, d)| *d == day) {
            Some(pos) => day_columns[pos].0 = idx,
            None => day_columns.push((idx, day)),
        }
    }

    let mut out = Vec::new();
    let mut rows = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        rows += 1;
        let name = rec.get(0).unwrap_or("").trim();
        if name.is_empty() {
            eprintln!("Warning: skipping poll row with empty name");
            continue;
        }
        let email = rec.get(1).map(str::trim).filter(|e| !e.is_empty());

        let days: Vec<NaiveDate> = day_columns
            .iter()
            .filter(|(idx, _)| rec.get(*idx).is_some_and(is_available))
            .map(|(_, day)| *day)
            .collect();

        let mut person = Participant::new(name).with_days(days);
        person.email = email.map(str::to_string);
        person.duration = Some(if person.available_days.is_empty() {
            1
        } else {
            IMPORT_DEFAULT_DURATION
        });
        out.push(person);
    }
    if rows == 0 {
        bail!("poll CSV is empty or has no data rows");
    }

    #[cfg(feature = "logging")]
    tracing::debug!(
        day_columns = day_columns.len(),
        imported = out.len(),
        "poll imported"
    );

    Ok(out)
}

/// `Mon 1 Jun 2026` → 2026-06-01 ; le jour de semaine n'est pas vérifié.
fn parse_poll_header(header: &str) -> Option<NaiveDate> {
    let parts: Vec<&str> = header.split_whitespace().collect();
    let [_, day, month, year] = parts.as_slice() else {
        return None;
    };
    NaiveDate::parse_from_str(&format!("{day} {month} {year}"), "%d %b %Y").ok()
}

fn is_available(cell: &str) -> bool {
    matches!(
        cell.trim().to_ascii_lowercase().as_str(),
        "yes" | "if need be"
    )
}
