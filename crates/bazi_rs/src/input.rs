//! Birth input as supplied by a caller, before validation.

use serde::{Deserialize, Serialize};

use bazi_base::Gender;
use bazi_time::CivilTime;

use crate::error::BaziError;

/// Birth moment in China Standard Time, with gender and optional place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BirthInput {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    #[serde(default)]
    pub minute: u32,
    pub gender: Gender,
    #[serde(default)]
    pub birth_place: Option<String>,
}

impl BirthInput {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, gender: Gender) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            gender,
            birth_place: None,
        }
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.birth_place = Some(place.into());
        self
    }

    /// From a parsed civil timestamp (seconds are dropped).
    pub fn from_civil(time: &CivilTime, gender: Gender) -> Self {
        Self::new(time.year, time.month, time.day, time.hour, time.minute, gender)
    }

    /// Range-check every component and build the civil timestamp.
    pub fn validate(&self) -> Result<CivilTime, BaziError> {
        Ok(CivilTime::try_new(
            self.year, self.month, self.day, self.hour, self.minute, 0,
        )?)
    }

    /// Trimmed place, `None` when absent or blank.
    pub fn place(&self) -> Option<&str> {
        self.birth_place
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}
