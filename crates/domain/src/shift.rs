use std::fmt::{Display, Formatter};

use chrono::NaiveTime;
use guardpost_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// One operator-configured time window, wall-clock only, never persisted.
///
/// An end at or before the start is legal; the generation collaborator treats
/// it as wrapping past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Window start, serialized as `"HH:MM"`.
    #[serde(with = "hh_mm")]
    pub start: NaiveTime,
    /// Window end, serialized as `"HH:MM"`.
    #[serde(with = "hh_mm")]
    pub end: NaiveTime,
}

impl ShiftWindow {
    /// Creates a window from wall-clock bounds.
    #[must_use]
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Parses an `"HH:MM-HH:MM"` window description.
    pub fn parse(value: &str) -> AppResult<Self> {
        let (start, end) = value.split_once('-').ok_or_else(|| {
            AppError::Validation(format!("shift window '{value}' must look like HH:MM-HH:MM"))
        })?;
        Ok(Self {
            start: hh_mm::parse(start.trim())?,
            end: hh_mm::parse(end.trim())?,
        })
    }
}

impl Display for ShiftWindow {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

mod hh_mm {
    //! Serde helpers for the collaborator's `"HH:MM"` wall-clock format.

    use chrono::NaiveTime;
    use guardpost_core::{AppError, AppResult};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(super) fn parse(value: &str) -> AppResult<NaiveTime> {
        NaiveTime::parse_from_str(value, "%H:%M")
            .map_err(|error| AppError::Validation(format!("invalid time '{value}': {error}")))
    }

    pub(super) fn serialize<S: Serializer>(
        value: &NaiveTime,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.format("%H:%M").to_string())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }
}
