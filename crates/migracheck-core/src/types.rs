//! Core types for migraine logging

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroU32;

use crate::error::EntryError;

/// Highest loggable intensity
pub const MAX_INTENSITY: u8 = 10;

/// Episode severity on a 0-10 scale (0 = no pain)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Intensity(u8);

impl Intensity {
    pub fn new(value: u8) -> Result<Self, EntryError> {
        if value > MAX_INTENSITY {
            return Err(EntryError::IntensityOutOfRange(value));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn severity(self) -> Severity {
        Severity::from_intensity(self.0)
    }
}

impl TryFrom<u8> for Intensity {
    type Error = EntryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.0
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity band used when rendering an intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// 0
    None,
    /// 1-2
    Mild,
    /// 3-5
    Moderate,
    /// 6-7
    Severe,
    /// 8-10
    Extreme,
}

impl Severity {
    pub fn from_intensity(value: u8) -> Self {
        match value {
            0 => Severity::None,
            1..=2 => Severity::Mild,
            3..=5 => Severity::Moderate,
            6..=7 => Severity::Severe,
            _ => Severity::Extreme,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Extreme => "extreme",
        }
    }

    /// Single-character marker for text grids
    pub fn marker(self) -> char {
        match self {
            Severity::None => '.',
            Severity::Mild => '-',
            Severity::Moderate => '+',
            Severity::Severe => '*',
            Severity::Extreme => '#',
        }
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// Contextual indicators recorded alongside an episode.
///
/// Unset flags are omitted from the serialized form and read back as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicators {
    #[serde(default, skip_serializing_if = "is_false")]
    pub tooth_pain: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub good_sleep: bool,
    /// Menstruation
    #[serde(default, skip_serializing_if = "is_false")]
    pub period: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hydration: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub caffeine: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub exercise: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub stress: bool,
    /// Weather or pressure change
    #[serde(default, skip_serializing_if = "is_false")]
    pub weather: bool,
}

impl Indicators {
    /// Display labels of every set flag, in a fixed order
    pub fn labels(&self) -> Vec<&'static str> {
        [
            (self.tooth_pain, "tooth pain"),
            (self.good_sleep, "good sleep"),
            (self.period, "period"),
            (self.hydration, "hydration"),
            (self.caffeine, "caffeine"),
            (self.exercise, "exercise"),
            (self.stress, "stress"),
            (self.weather, "weather change"),
        ]
        .into_iter()
        .filter_map(|(set, label)| set.then_some(label))
        .collect()
    }

    pub fn any(&self) -> bool {
        !self.labels().is_empty()
    }
}

/// Reads a stored medication count, treating 0 as absent
fn zero_as_none<'de, D>(deserializer: D) -> Result<Option<NonZeroU32>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = Option::<u32>::deserialize(deserializer)?;
    Ok(count.and_then(NonZeroU32::new))
}

/// One logged migraine record, keyed by its date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    pub date: NaiveDate,
    pub intensity: Intensity,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(
        default,
        deserialize_with = "zero_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub medication_count: Option<NonZeroU32>,
    #[serde(flatten)]
    pub indicators: Indicators,
}

impl Entry {
    pub fn new(id: impl Into<String>, date: NaiveDate, intensity: Intensity) -> Self {
        Self {
            id: id.into(),
            date,
            intensity,
            notes: None,
            medication_count: None,
            indicators: Indicators::default(),
        }
    }

    /// Medication doses taken, 0 when none were logged
    pub fn medication(&self) -> u32 {
        self.medication_count.map_or(0, NonZeroU32::get)
    }
}

/// All logged entries, keyed by date for O(1) access
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MigraineState {
    pub entries: HashMap<NaiveDate, Entry>,
}

impl MigraineState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, date: NaiveDate) -> Option<&Entry> {
        self.entries.get(&date)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
