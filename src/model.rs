use crate::dates::DateRange;
use crate::overlap::{self, OverlapError, Window};
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Source de disponibilités consommée par le moteur.
///
/// Le moteur ne touche jamais à l'identité du participant : il ne lit que ses
/// jours libres. Les dates hors de la période demandée ne matchent simplement
/// aucune fenêtre.
pub trait AvailabilityRecord {
    fn available_days(&self) -> &[NaiveDate];
}

impl AvailabilityRecord for Vec<NaiveDate> {
    fn available_days(&self) -> &[NaiveDate] {
        self
    }
}

impl AvailabilityRecord for [NaiveDate] {
    fn available_days(&self) -> &[NaiveDate] {
        self
    }
}

impl<T: AvailabilityRecord + ?Sized> AvailabilityRecord for &T {
    fn available_days(&self) -> &[NaiveDate] {
        (**self).available_days()
    }
}

/// Identifiant fort pour Participant
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParticipantId(String);

impl ParticipantId {
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Participant d'un groupe et ses jours libres
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub email: Option<String>,
    /// Durée de séjour souhaitée (jours), purement indicative.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub duration: Option<u32>,
    #[cfg_attr(feature = "serde", serde(default, alias = "availableDays"))]
    pub available_days: Vec<NaiveDate>,
}

impl Participant {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            id: ParticipantId::random(),
            name: name.into(),
            email: None,
            duration: None,
            available_days: Vec::new(),
        }
    }

    pub fn with_days<I: IntoIterator<Item = NaiveDate>>(mut self, days: I) -> Self {
        self.available_days.extend(days);
        self
    }

    /// Même nom, espaces de bord et casse ignorés.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.trim().to_lowercase() == name.trim().to_lowercase()
    }
}

impl AvailabilityRecord for Participant {
    fn available_days(&self) -> &[NaiveDate] {
        &self.available_days
    }
}

/// Groupe de voyage : une période et ses participants
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    pub id: String,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(alias = "startDate"))]
    pub start_date: NaiveDate,
    #[cfg_attr(feature = "serde", serde(alias = "endDate"))]
    pub end_date: NaiveDate,
    #[cfg_attr(feature = "serde", serde(default))]
    pub participants: Vec<Participant>,
}

impl Group {
    /// Crée un groupe en validant que `start_date <= end_date`.
    pub fn new<N: Into<String>>(
        name: N,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, OverlapError> {
        if end_date < start_date {
            return Err(OverlapError::InvalidRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            start_date,
            end_date,
            participants: Vec::new(),
        })
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date)
    }

    pub fn find_participant_by_name<'a>(&'a self, name: &str) -> Option<&'a Participant> {
        self.participants.iter().find(|p| p.has_name(name))
    }

    /// Ajoute un participant ; refuse un nom déjà pris (casse ignorée).
    pub fn add_participant(&mut self, participant: Participant) -> Result<(), OverlapError> {
        if self.find_participant_by_name(&participant.name).is_some() {
            return Err(OverlapError::DuplicateName(participant.name));
        }
        self.participants.push(participant);
        Ok(())
    }

    /// Classement complet des fenêtres pour la durée demandée.
    pub fn overlap(&self, duration_days: u32) -> Vec<Window> {
        overlap::calculate_overlap(
            &self.participants,
            self.start_date,
            self.end_date,
            duration_days,
        )
    }
}
