use super::{ranking, Window};
use crate::dates::DateRange;
use crate::model::AvailabilityRecord;
use chrono::NaiveDate;

/// Re-scan complet de chaque fenêtre. Plus lent que la fenêtre glissante
/// mais trivial à relire : sert de référence croisée.
pub(super) fn calculate<P: AvailabilityRecord>(
    participants: &[P],
    range: DateRange,
    duration_days: u32,
) -> Vec<Window> {
    let total = participants.len();
    let width = duration_days as usize;
    if total == 0 || width == 0 || range.len() < width {
        return Vec::new();
    }

    let days: Vec<NaiveDate> = range.days().collect();
    let mut out: Vec<Window> = days
        .windows(width)
        .map(|block| {
            let available_count = participants
                .iter()
                .filter(|p| {
                    let free = p.available_days();
                    block.iter().all(|d| free.contains(d))
                })
                .count();
            Window {
                start_date: block[0],
                end_date: block[width - 1],
                available_count,
                total_participants: total,
                availability_percent: ranking::percent(available_count, total),
                day_count: duration_days,
            }
        })
        .collect();

    ranking::rank(&mut out);
    out
}
