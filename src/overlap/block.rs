use super::BlockDetails;
use crate::dates::DateRange;
use crate::model::AvailabilityRecord;
use chrono::{Duration, NaiveDate};

pub(super) fn block_details<P: AvailabilityRecord>(
    participants: &[P],
    range: DateRange,
    start: NaiveDate,
    duration_days: u32,
) -> Option<BlockDetails<'_, P>> {
    if duration_days == 0 || !range.contains(start) {
        return None;
    }
    let end = start.checked_add_signed(Duration::days(i64::from(duration_days) - 1))?;
    // un bloc qui déborde de la période n'est jamais tronqué
    if !range.contains(end) {
        return None;
    }

    let block = DateRange::new(start, end);
    let mut available = Vec::new();
    let mut unavailable = Vec::new();
    for p in participants {
        let free = p.available_days();
        let missing = block.days().filter(|d| !free.contains(d)).count();
        if missing == 0 {
            available.push(p);
        } else {
            unavailable.push((p, missing));
        }
    }

    Some(BlockDetails {
        start,
        end,
        available,
        unavailable,
    })
}
