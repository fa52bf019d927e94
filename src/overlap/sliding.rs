use super::{ranking, Window};
use crate::dates::DateRange;
use crate::model::AvailabilityRecord;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Fenêtre glissante : un compteur par participant (jours libres dans la
/// fenêtre courante), mis à jour d'un jour sortant et d'un jour entrant à
/// chaque pas. O(jours × participants).
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
    let sets: Vec<HashSet<NaiveDate>> = participants
        .iter()
        .map(|p| p.available_days().iter().copied().collect())
        .collect();

    let mut counters = vec![0usize; total];
    for day in &days[..width] {
        bump(&sets, &mut counters, day, Step::Enter);
    }

    let mut out = Vec::with_capacity(days.len() - width + 1);
    out.push(window(&days, 0, width, &counters, total));

    for offset in 1..=days.len() - width {
        bump(&sets, &mut counters, &days[offset - 1], Step::Leave);
        bump(&sets, &mut counters, &days[offset + width - 1], Step::Enter);
        out.push(window(&days, offset, width, &counters, total));
    }

    ranking::rank(&mut out);
    out
}

#[derive(Clone, Copy)]
enum Step {
    Enter,
    Leave,
}

fn bump(sets: &[HashSet<NaiveDate>], counters: &mut [usize], day: &NaiveDate, step: Step) {
    for (set, counter) in sets.iter().zip(counters.iter_mut()) {
        if set.contains(day) {
            match step {
                Step::Enter => *counter += 1,
                Step::Leave => *counter -= 1,
            }
        }
    }
}

fn window(
    days: &[NaiveDate],
    offset: usize,
    width: usize,
    counters: &[usize],
    total: usize,
) -> Window {
    let available_count = counters.iter().filter(|c| **c == width).count();
    Window {
        start_date: days[offset],
        end_date: days[offset + width - 1],
        available_count,
        total_participants: total,
        availability_percent: ranking::percent(available_count, total),
        day_count: width as u32,
    }
}
