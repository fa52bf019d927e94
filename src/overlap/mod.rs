mod block;
mod heatmap;
mod naive;
mod ranking;
mod sliding;
mod types;

pub use ranking::best_overlap_periods;
pub use types::{BlockDetails, DayAvailability, OverlapError, OverlapOptions, Window, DEFAULT_LIMIT};

use crate::dates::{parse_day, DateRange};
use crate::model::AvailabilityRecord;
use chrono::NaiveDate;

/// Classe chaque bloc de `duration_days` jours consécutifs de `[start, end]`
/// selon la part des participants libres sur tout le bloc (meilleur d'abord).
///
/// Aucun participant, ou une durée plus longue que la période : liste vide.
/// Sinon exactement `jours - duration_days + 1` fenêtres, une par jour de
/// départ possible.
pub fn calculate_overlap<P: AvailabilityRecord>(
    participants: &[P],
    start: NaiveDate,
    end: NaiveDate,
    duration_days: u32,
) -> Vec<Window> {
    let windows = sliding::calculate(participants, DateRange::new(start, end), duration_days);
    #[cfg(feature = "logging")]
    tracing::debug!(
        participants = participants.len(),
        duration_days,
        windows = windows.len(),
        "overlap computed"
    );
    windows
}

/// Liste de participants absente : équivalent d'une liste vide.
pub fn calculate_overlap_opt<P: AvailabilityRecord>(
    participants: Option<&[P]>,
    start: NaiveDate,
    end: NaiveDate,
    duration_days: u32,
) -> Vec<Window> {
    calculate_overlap(participants.unwrap_or(&[]), start, end, duration_days)
}

/// Bornes en chaînes `YYYY-MM-DD`.
pub fn calculate_overlap_str<P: AvailabilityRecord>(
    participants: &[P],
    start: &str,
    end: &str,
    duration_days: u32,
) -> Result<Vec<Window>, OverlapError> {
    let start = parse_day(start)?;
    let end = parse_day(end)?;
    Ok(calculate_overlap(participants, start, end, duration_days))
}

/// Même contrat que [`calculate_overlap`], par re-scan complet de chaque bloc.
pub fn calculate_overlap_naive<P: AvailabilityRecord>(
    participants: &[P],
    start: NaiveDate,
    end: NaiveDate,
    duration_days: u32,
) -> Vec<Window> {
    naive::calculate(participants, DateRange::new(start, end), duration_days)
}

/// Nombre de participants libres, jour par jour.
pub fn daily_availability<P: AvailabilityRecord>(
    participants: &[P],
    range: DateRange,
) -> Vec<DayAvailability> {
    heatmap::daily_availability(participants, range)
}

/// Qui est libre (ou non) sur le bloc commençant à `start`.
///
/// `None` si `start` est hors période ou si le bloc déborde de la fin.
pub fn block_details<P: AvailabilityRecord>(
    participants: &[P],
    range: DateRange,
    start: NaiveDate,
    duration_days: u32,
) -> Option<BlockDetails<'_, P>> {
    block::block_details(participants, range, start, duration_days)
}
