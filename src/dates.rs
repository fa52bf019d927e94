use crate::overlap::OverlapError;
use chrono::{Datelike, NaiveDate};

/// Format des dates échangées aux frontières (`YYYY-MM-DD`).
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Période inclusive de jours calendaires (sans fuseau).
///
/// `start > end` donne une période vide, jamais une erreur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Nombre de jours, bornes incluses.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let days = self.end.signed_duration_since(self.start).num_days();
        usize::try_from(days).map_or(0, |d| d + 1)
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Jours de la période, croissants, sans trou ni doublon.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        let first = (!self.is_empty()).then_some(self.start);
        std::iter::successors(first, move |d| d.succ_opt().filter(|next| *next <= end))
    }
}

/// Énumère chaque jour de `start` à `end` inclus.
pub fn dates_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    DateRange::new(start, end).days().collect()
}

/// Variante chaînes ISO de [`dates_between`], pour les vues calendrier.
pub fn dates_between_str(start: &str, end: &str) -> Result<Vec<String>, OverlapError> {
    let start = parse_day(start)?;
    let end = parse_day(end)?;
    Ok(dates_between(start, end)
        .into_iter()
        .map(|d| d.format(DAY_FORMAT).to_string())
        .collect())
}

pub fn parse_day(raw: &str) -> Result<NaiveDate, OverlapError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, DAY_FORMAT).map_err(|_| OverlapError::InvalidDate(raw.to_string()))
}

/// Libellé court d'une période : `Jun 1 - 15` dans un même mois,
/// `Jun 25 - Jul 5` sinon. L'année n'apparaît jamais.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    let head = start.format("%b %-d");
    if start.month() == end.month() && start.year() == end.year() {
        format!("{head} - {}", end.day())
    } else {
        format!("{head} - {}", end.format("%b %-d"))
    }
}
