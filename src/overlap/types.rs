use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Nombre de périodes retenues par défaut.
pub const DEFAULT_LIMIT: usize = 5;

/// Options de classement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlapOptions {
    pub duration_days: u32,
    pub limit: usize,
}

impl Default for OverlapOptions {
    fn default() -> Self {
        Self {
            duration_days: 3,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Bloc candidat de `day_count` jours consécutifs
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Window {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Participants libres sur *tous* les jours du bloc.
    pub available_count: usize,
    pub total_participants: usize,
    pub availability_percent: u8,
    pub day_count: u32,
}

/// Disponibilité d'un seul jour (carte de chaleur)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub available_count: usize,
    pub total_participants: usize,
    pub availability_percent: u8,
}

/// Répartition des participants pour un bloc donné
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDetails<'a, P> {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub available: Vec<&'a P>,
    /// Participants non libres et nombre de jours du bloc qui leur manquent.
    pub unavailable: Vec<(&'a P, usize)>,
}

#[derive(Error, Debug)]
pub enum OverlapError {
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("invalid date range: {start} is after {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("a participant named {0:?} already exists")]
    DuplicateName(String),
}
