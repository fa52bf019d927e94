#![forbid(unsafe_code)]
use chrono::NaiveDate;
use vacances::{
    best_overlap_periods, block_details, calculate_overlap, calculate_overlap_naive,
    calculate_overlap_opt, calculate_overlap_str, daily_availability, dates_between, DateRange,
    Group, OverlapOptions, Participant, Window, DEFAULT_LIMIT,
};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn june(days: &[u32]) -> Vec<NaiveDate> {
    days.iter().map(|day| d(2024, 6, *day)).collect()
}

fn person(name: &str, days: &[u32]) -> Participant {
    Participant::new(name).with_days(june(days))
}

#[test]
fn everyone_free_whole_range() {
    let people = vec![person("alice", &[1, 2, 3]), person("bob", &[1, 2, 3])];
    let result = calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 3), 3);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].availability_percent, 100);
    assert_eq!(result[0].available_count, 2);
    assert_eq!(result[0].total_participants, 2);
    assert_eq!(result[0].start_date, d(2024, 6, 1));
    assert_eq!(result[0].end_date, d(2024, 6, 3));
}

#[test]
fn duration_longer_than_range_gives_nothing() {
    let people = vec![person("alice", &[1, 2])];
    let result = calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 2), 5);
    assert!(result.is_empty());
}

#[test]
fn no_participants_gives_nothing() {
    let people: Vec<Participant> = Vec::new();
    assert!(calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 10), 3).is_empty());

    let absent: Option<&[Participant]> = None;
    assert!(calculate_overlap_opt(absent, d(2024, 6, 1), d(2024, 6, 10), 3).is_empty());
}

#[test]
fn empty_availability_still_emits_windows() {
    let people = vec![person("empty", &[])];
    let result = calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 3), 1);

    assert_eq!(result.len(), 3);
    assert!(result.iter().all(|w| w.availability_percent == 0));
    assert!(result.iter().all(|w| w.available_count == 0));
}

#[test]
fn partial_overlap_never_counts() {
    let people = vec![person("alice", &[1, 2, 3]), person("bob", &[2, 3, 4])];
    let result = calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 4), 2);

    assert_eq!(result.len(), 3);
    // 2-3 : les deux ; 1-2 : alice ; 3-4 : bob
    assert_eq!(result[0].start_date, d(2024, 6, 2));
    assert_eq!(result[0].availability_percent, 100);
    assert_eq!(result[1].start_date, d(2024, 6, 1));
    assert_eq!(result[1].available_count, 1);
    assert_eq!(result[1].availability_percent, 50);
    assert_eq!(result[2].start_date, d(2024, 6, 3));
    assert_eq!(result[2].available_count, 1);
}

#[test]
fn ties_keep_chronological_order() {
    let people = vec![person("alice", &[1, 2]), person("bob", &[3, 4])];
    let result = calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 4), 1);

    let starts: Vec<NaiveDate> = result.iter().map(|w| w.start_date).collect();
    assert_eq!(starts, june(&[1, 2, 3, 4]));
    assert!(result.iter().all(|w| w.availability_percent == 50));
}

#[test]
fn sorted_best_first() {
    let people = vec![
        person("alice", &[1, 2, 3, 4, 5, 6]),
        person("bob", &[4, 5, 6, 7]),
        person("carol", &[5, 6, 7, 8]),
    ];
    let result = calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 10), 2);

    assert_eq!(result.len(), 9);
    for pair in result.windows(2) {
        assert!(pair[0].availability_percent >= pair[1].availability_percent);
    }
    assert_eq!(result[0].start_date, d(2024, 6, 5));
    assert_eq!(result[0].available_count, 3);
}

#[test]
fn percent_rounds_like_the_web_app() {
    let people = vec![
        person("a", &[1]),
        person("b", &[1]),
        person("c", &[]),
    ];
    let result = calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 1), 1);
    assert_eq!(result[0].availability_percent, 67);
    assert_eq!(result[0].total_participants, 3);
}

#[test]
fn half_percent_rounds_up() {
    let mut people = vec![person("free", &[1])];
    people.extend((0..7).map(|i| person(&format!("busy{i}"), &[])));
    let result = calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 1), 1);
    assert_eq!(result[0].available_count, 1);
    assert_eq!(result[0].total_participants, 8);
    assert_eq!(result[0].availability_percent, 13);
}

#[test]
fn availability_outside_range_is_ignored() {
    let mut alice = person("alice", &[1, 2]);
    alice.available_days.push(d(2023, 1, 1));
    alice.available_days.push(d(2024, 6, 2));
    let result = calculate_overlap(&[alice], d(2024, 6, 1), d(2024, 6, 2), 2);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].available_count, 1);
}

#[test]
fn windows_cross_month_and_year() {
    let days = dates_between(d(2024, 12, 30), d(2025, 1, 2));
    let people = vec![Participant::new("alice").with_days(days)];
    let result = calculate_overlap(&people, d(2024, 12, 30), d(2025, 1, 2), 3);

    assert_eq!(result.len(), 2);
    assert_eq!(result[0].start_date, d(2024, 12, 30));
    assert_eq!(result[0].end_date, d(2025, 1, 1));
    assert_eq!(result[1].end_date, d(2025, 1, 2));
}

#[test]
fn zero_duration_gives_nothing() {
    let people = vec![person("alice", &[1, 2])];
    assert!(calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 2), 0).is_empty());
}

#[test]
fn plain_date_lists_are_records() {
    let people = vec![june(&[1, 2, 3]), june(&[2, 3])];
    let result = calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 3), 2);
    assert_eq!(result[0].start_date, d(2024, 6, 2));
    assert_eq!(result[0].available_count, 2);
}

#[test]
fn string_boundary() {
    let people = vec![person("alice", &[1, 2, 3])];
    let result = calculate_overlap_str(&people, "2024-06-01", "2024-06-03", 3).unwrap();
    assert_eq!(result[0].availability_percent, 100);

    assert!(calculate_overlap_str(&people, "2024-13-01", "2024-06-03", 3).is_err());
    assert!(calculate_overlap_str(&people, "June 1st", "2024-06-03", 3).is_err());
}

#[test]
fn thirty_day_range_matches_rescan() {
    let days = dates_between(d(2024, 6, 1), d(2024, 6, 30));
    let people = vec![
        Participant::new("alice").with_days(days.clone()),
        Participant::new("bob").with_days(days[5..20].to_vec()),
    ];
    let fast = calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 30), 5);
    let slow = calculate_overlap_naive(&people, d(2024, 6, 1), d(2024, 6, 30), 5);

    assert_eq!(fast.len(), 26);
    assert_eq!(fast, slow);
    assert!(fast.iter().all(|w| w.day_count == 5));
}

#[test]
fn identical_calls_identical_output() {
    let people = vec![person("alice", &[1, 3, 4]), person("bob", &[2, 3, 4, 5])];
    let a = calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 6), 2);
    let b = calculate_overlap(&people, d(2024, 6, 1), d(2024, 6, 6), 2);
    assert_eq!(a, b);
}

fn fake_window(offset: u32, percent: u8) -> Window {
    Window {
        start_date: d(2024, 6, 1 + offset),
        end_date: d(2024, 6, 3 + offset),
        available_count: usize::from(percent / 10),
        total_participants: 10,
        availability_percent: percent,
        day_count: 3,
    }
}

#[test]
fn best_periods_is_a_prefix() {
    let windows: Vec<Window> = (0..10u8)
        .map(|i| fake_window(u32::from(i), (10 - i) * 10))
        .collect();

    let top = best_overlap_periods(&windows, 3);
    assert_eq!(top, &windows[..3]);

    assert_eq!(best_overlap_periods(&windows, DEFAULT_LIMIT).len(), 5);
    assert_eq!(best_overlap_periods(&windows[..2], 5).len(), 2);
    assert!(best_overlap_periods(&[], 5).is_empty());
}

#[test]
fn heatmap_counts_single_days() {
    let mut alice = person("alice", &[1, 2]);
    alice.available_days.push(d(2024, 6, 2));
    let people = vec![alice, person("bob", &[2, 3]), person("carol", &[9])];
    let range = DateRange::new(d(2024, 6, 1), d(2024, 6, 3));
    let heat = daily_availability(&people, range);

    let counts: Vec<usize> = heat.iter().map(|h| h.available_count).collect();
    assert_eq!(counts, vec![1, 2, 1]);
    assert_eq!(heat[1].date, d(2024, 6, 2));
    assert_eq!(heat[1].availability_percent, 67);
    assert!(heat.iter().all(|h| h.total_participants == 3));
}

#[test]
fn heatmap_without_participants() {
    let people: Vec<Participant> = Vec::new();
    let heat = daily_availability(&people, DateRange::new(d(2024, 6, 1), d(2024, 6, 2)));
    assert_eq!(heat.len(), 2);
    assert!(heat.iter().all(|h| h.availability_percent == 0));
}

#[test]
fn block_splits_participants() {
    let people = vec![
        person("alice", &[1, 2, 3]),
        person("bob", &[2, 3]),
        person("carol", &[1, 3]),
    ];
    let range = DateRange::new(d(2024, 6, 1), d(2024, 6, 5));
    let details = block_details(&people, range, d(2024, 6, 2), 2).unwrap();

    assert_eq!(details.start, d(2024, 6, 2));
    assert_eq!(details.end, d(2024, 6, 3));
    let free: Vec<&str> = details.available.iter().map(|p| p.name.as_str()).collect();
    let busy: Vec<(&str, usize)> = details
        .unavailable
        .iter()
        .map(|(p, missing)| (p.name.as_str(), *missing))
        .collect();
    assert_eq!(free, vec!["alice", "bob"]);
    assert_eq!(busy, vec![("carol", 1)]);

    let wide = block_details(&people, range, d(2024, 6, 1), 5).unwrap();
    let missing: Vec<usize> = wide.unavailable.iter().map(|(_, m)| *m).collect();
    assert!(wide.available.is_empty());
    assert_eq!(missing, vec![2, 3, 3]);
}

#[test]
fn block_never_truncates() {
    let people = vec![person("alice", &[1, 2, 3, 4, 5])];
    let range = DateRange::new(d(2024, 6, 1), d(2024, 6, 5));

    assert!(block_details(&people, range, d(2024, 6, 4), 3).is_none());
    assert!(block_details(&people, range, d(2024, 5, 31), 1).is_none());
    assert!(block_details(&people, range, d(2024, 6, 3), 3).is_some());
    assert!(block_details(&people, range, d(2024, 6, 1), 0).is_none());
}

#[test]
fn group_uses_its_own_range() {
    let mut group = Group::new("Été", d(2024, 6, 1), d(2024, 6, 4)).unwrap();
    group.participants = vec![person("alice", &[2, 3, 4]), person("bob", &[1, 2, 3])];

    let windows = group.overlap(OverlapOptions::default().duration_days);
    assert_eq!(windows.len(), 2);
    assert_eq!(windows[0].availability_percent, 50);
    assert_eq!(windows[0].start_date, d(2024, 6, 1));

    assert!(Group::new("Inversé", d(2024, 6, 4), d(2024, 6, 1)).is_err());
}

#[test]
fn group_rejects_duplicate_names() {
    let mut group = Group::new("Été", d(2024, 6, 1), d(2024, 6, 4)).unwrap();
    group.add_participant(person("Alice", &[1])).unwrap();
    group.add_participant(person("Bob", &[2])).unwrap();

    assert!(group.add_participant(person("  alice ", &[3])).is_err());
    assert_eq!(group.participants.len(), 2);

    let found = group.find_participant_by_name(" BOB").unwrap();
    assert_eq!(found.available_days, june(&[2]));
    assert!(group.find_participant_by_name("carol").is_none());
}
