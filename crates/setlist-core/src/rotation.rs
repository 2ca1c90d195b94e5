//! Rotation KPIs: how often each title comes back, and which titles are
//! played too often or have dropped out of use.
//!
//! Only days on or before the reference day count as history. A title's uses
//! are its distinct use days, so a song repeated within one service counts
//! once, as in [`crate::ranking`].

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::event::Event;
use crate::ranking::use_days;

const fn default_overused_days() -> u32 {
    21
}

const fn default_underused_days() -> u32 {
    90
}

/// Cut-offs for the overused / underused flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RotationThresholds {
    /// A title whose average rotation is below this many days is overused.
    #[serde(default = "default_overused_days")]
    pub overused_days: u32,
    /// A title unused for more than this many days is underused.
    #[serde(default = "default_underused_days")]
    pub underused_days: u32,
}

impl Default for RotationThresholds {
    fn default() -> Self {
        Self {
            overused_days: default_overused_days(),
            underused_days: default_underused_days(),
        }
    }
}

impl RotationThresholds {
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] if `overused_days` is not below
    /// `underused_days`.
    pub fn new(overused_days: u32, underused_days: u32) -> Result<Self, CoreError> {
        if overused_days >= underused_days {
            return Err(CoreError::Validation(format!(
                "overused_days ({overused_days}) must be below underused_days ({underused_days})"
            )));
        }
        Ok(Self {
            overused_days,
            underused_days,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TitleRotation {
    pub title: String,
    pub uses: u32,
    pub first_used: NaiveDate,
    pub last_used: NaiveDate,
    /// Mean days between consecutive uses; `None` for a single use.
    pub avg_rotation_days: Option<f64>,
    pub days_since_last_used: i64,
    pub overused: bool,
    pub underused: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RotationReport {
    pub reference: NaiveDate,
    pub distinct_titles: u32,
    pub total_uses: u32,
    /// Mean of the per-title averages, over titles used at least twice.
    pub avg_rotation_days: Option<f64>,
    pub thresholds: RotationThresholds,
    /// Most used first, ties by case-insensitive title.
    pub titles: Vec<TitleRotation>,
}

impl RotationReport {
    /// Overused titles, tightest rotation first.
    #[must_use]
    pub fn overused(&self) -> Vec<&TitleRotation> {
        let mut titles: Vec<&TitleRotation> = self.titles.iter().filter(|t| t.overused).collect();
        titles.sort_by(|a, b| {
            a.avg_rotation_days
                .unwrap_or(f64::INFINITY)
                .total_cmp(&b.avg_rotation_days.unwrap_or(f64::INFINITY))
        });
        titles
    }

    /// Underused titles, longest idle first.
    #[must_use]
    pub fn underused(&self) -> Vec<&TitleRotation> {
        let mut titles: Vec<&TitleRotation> = self.titles.iter().filter(|t| t.underused).collect();
        titles.sort_by(|a, b| b.days_since_last_used.cmp(&a.days_since_last_used));
        titles
    }
}

/// Build the rotation report for all history up to `reference`.
#[must_use]
pub fn rotation_report(
    events: &[Event],
    reference: NaiveDate,
    thresholds: RotationThresholds,
) -> RotationReport {
    let history = events.iter().filter(|event| event.date <= reference);

    let mut keyed: Vec<(String, TitleRotation)> = use_days(history)
        .into_iter()
        .filter_map(|(key, uses)| {
            let first_used = *uses.days.first()?;
            let last_used = *uses.days.last()?;
            let count = u32::try_from(uses.days.len()).unwrap_or(u32::MAX);

            #[allow(clippy::cast_precision_loss)]
            let avg_rotation_days = (count > 1)
                .then(|| (last_used - first_used).num_days() as f64 / f64::from(count - 1));
            let days_since_last_used = (reference - last_used).num_days();

            let overused =
                avg_rotation_days.is_some_and(|avg| avg < f64::from(thresholds.overused_days));
            let underused = days_since_last_used > i64::from(thresholds.underused_days);

            Some((
                key,
                TitleRotation {
                    title: uses.title,
                    uses: count,
                    first_used,
                    last_used,
                    avg_rotation_days,
                    days_since_last_used,
                    overused,
                    underused,
                },
            ))
        })
        .collect();

    keyed.sort_by(|(a_key, a), (b_key, b)| b.uses.cmp(&a.uses).then_with(|| a_key.cmp(b_key)));
    let titles: Vec<TitleRotation> = keyed.into_iter().map(|(_, title)| title).collect();

    let rotations: Vec<f64> = titles.iter().filter_map(|t| t.avg_rotation_days).collect();
    #[allow(clippy::cast_precision_loss)]
    let avg_rotation_days =
        (!rotations.is_empty()).then(|| rotations.iter().sum::<f64>() / rotations.len() as f64);

    RotationReport {
        reference,
        distinct_titles: u32::try_from(titles.len()).unwrap_or(u32::MAX),
        total_uses: titles.iter().map(|t| t.uses).sum(),
        avg_rotation_days,
        thresholds,
        titles,
    }
}
