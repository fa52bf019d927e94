use super::{ranking, DayAvailability};
use crate::dates::DateRange;
use crate::model::AvailabilityRecord;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};

pub(super) fn daily_availability<P: AvailabilityRecord>(
    participants: &[P],
    range: DateRange,
) -> Vec<DayAvailability> {
    let total = participants.len();
    let mut counts: HashMap<NaiveDate, usize> = range.days().map(|d| (d, 0)).collect();

    for p in participants {
        // un participant compte une fois par jour, même si la date est dupliquée
        let free: HashSet<NaiveDate> = p.available_days().iter().copied().collect();
        for day in free {
            if let Some(count) = counts.get_mut(&day) {
                *count += 1;
            }
        }
    }

    range
        .days()
        .map(|date| {
            let available_count = counts.get(&date).copied().unwrap_or(0);
            DayAvailability {
                date,
                available_count,
                total_participants: total,
                availability_percent: ranking::percent(available_count, total),
            }
        })
        .collect()
}
