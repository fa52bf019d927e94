#![forbid(unsafe_code)]
//! Vacances — recherche du meilleur bloc de jours communs pour un voyage de groupe.
//!
//! - Chaque participant donne ses jours libres.
//! - Pour chaque bloc de N jours consécutifs de la période, part des
//!   participants libres sur *tout* le bloc (fenêtre glissante).
//! - Classement décroissant, carte de chaleur par jour, détail d'un bloc.
//! - Jours calendaires purs (`NaiveDate`), aucun fuseau ; stockage JSON/CSV hors de la lib.

pub mod dates;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod overlap;

pub use dates::{dates_between, dates_between_str, format_date_range, parse_day, DateRange};
pub use model::{AvailabilityRecord, Group, Participant, ParticipantId};
pub use overlap::{
    best_overlap_periods, block_details, calculate_overlap, calculate_overlap_naive,
    calculate_overlap_opt, calculate_overlap_str, daily_availability, BlockDetails,
    DayAvailability, OverlapError, OverlapOptions, Window, DEFAULT_LIMIT,
};
