//! Reservation slot reconciliation
//!
//! The bookable slots of a day come from fixed business hours. Reservations
//! for the day are laid over them: a slot is either free or shows the booking
//! occupying it. Reservations outside the canonical slots are ignored.

use crate::models::{Reservation, ScheduleEntry, SlotZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Inclusive range of service hours, e.g. lunch 12..=15
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceWindow {
    pub first_hour: u32,
    pub last_hour: u32,
}

impl ServiceWindow {
    pub const fn new(first_hour: u32, last_hour: u32) -> Self {
        Self {
            first_hour,
            last_hour,
        }
    }
}

/// Opening hours that define the canonical slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub windows: Vec<ServiceWindow>,
    /// Minutes between consecutive slots
    pub granularity_minutes: u32,
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            windows: vec![ServiceWindow::new(12, 15), ServiceWindow::new(19, 21)],
            granularity_minutes: 60,
        }
    }
}

impl BusinessHours {
    /// Canonical `HH:MM` slots, ascending and unique
    pub fn slots(&self) -> Vec<String> {
        let step = self.granularity_minutes.max(1) as usize;
        let mut minutes: Vec<u32> = self
            .windows
            .iter()
            .flat_map(|w| {
                let last = w.last_hour.min(23) * 60;
                (w.first_hour * 60..=last).step_by(step)
            })
            .collect();
        minutes.sort_unstable();
        minutes.dedup();
        minutes
            .into_iter()
            .map(|m| format!("{:02}:{:02}", m / 60, m % 60))
            .collect()
    }
}

/// What to do when two reservations land on the same slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollisionPolicy {
    /// Later reservation replaces the earlier one silently
    #[default]
    LastWins,
    /// Later reservation wins, the collision is logged and reported
    Warn,
    /// Reconciliation fails
    Reject,
}

impl FromStr for CollisionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last-wins" | "last_wins" | "lastwins" => Ok(Self::LastWins),
            "warn" => Ok(Self::Warn),
            "reject" => Ok(Self::Reject),
            other => Err(format!("unknown collision policy: {}", other)),
        }
    }
}

impl fmt::Display for CollisionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LastWins => "last-wins",
            Self::Warn => "warn",
            Self::Reject => "reject",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("slot {time} is double-booked: '{existing}' and '{incoming}'")]
    SlotConflict {
        time: String,
        existing: String,
        incoming: String,
    },
}

/// Two reservations that mapped to the same slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotConflict {
    pub time: String,
    pub kept: String,
    pub dropped: String,
}

/// Reconciled day plus bookkeeping about what did not fit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// One entry per canonical slot, ascending by time
    pub entries: Vec<ScheduleEntry>,
    /// Collisions resolved under [`CollisionPolicy::Warn`]
    pub conflicts: Vec<SlotConflict>,
    /// Reservations whose time matches no canonical slot
    pub unmatched: usize,
    /// Reservations without a usable start time
    pub unresolved: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScheduleReconciler {
    policy: CollisionPolicy,
    zone: SlotZone,
}

impl ScheduleReconciler {
    pub fn new(policy: CollisionPolicy) -> Self {
        Self {
            policy,
            zone: SlotZone::default(),
        }
    }

    /// Read reservation start times on the wall clock of `zone`
    pub fn with_zone(mut self, zone: SlotZone) -> Self {
        self.zone = zone;
        self
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    pub fn zone(&self) -> SlotZone {
        self.zone
    }

    /// Lay `reservations` over `slots`.
    ///
    /// Pure: identical inputs always give identical reports.
    pub fn reconcile(
        &self,
        slots: &[String],
        reservations: &[Reservation],
    ) -> Result<ScheduleReport, ScheduleError> {
        let mut by_slot: BTreeMap<&str, ScheduleEntry> = slots
            .iter()
            .map(|slot| (slot.as_str(), ScheduleEntry::available(slot.as_str())))
            .collect();
        let mut report = ScheduleReport::default();

        for reservation in reservations {
            let Some(time) = reservation.slot_time_in(self.zone) else {
                tracing::debug!(summary = ?reservation.summary, "Reservation without start time");
                report.unresolved += 1;
                continue;
            };
            let Some(entry) = by_slot.get_mut(time.as_str()) else {
                tracing::debug!(slot = %time, "Reservation outside business hours, ignored");
                report.unmatched += 1;
                continue;
            };

            let booked = ScheduleEntry::booked(time.as_str(), reservation);
            if !entry.is_available {
                match self.policy {
                    CollisionPolicy::LastWins => {}
                    CollisionPolicy::Warn => {
                        tracing::warn!(
                            slot = %time,
                            kept = %booked.label,
                            dropped = %entry.label,
                            "Slot double-booked"
                        );
                        report.conflicts.push(SlotConflict {
                            time: time.clone(),
                            kept: booked.label.clone(),
                            dropped: entry.label.clone(),
                        });
                    }
                    CollisionPolicy::Reject => {
                        return Err(ScheduleError::SlotConflict {
                            time,
                            existing: entry.label.clone(),
                            incoming: booked.label,
                        });
                    }
                }
            }
            *entry = booked;
        }

        report.entries = by_slot.into_values().collect();
        Ok(report)
    }
}

/// Reconcile with last-write-wins collisions
pub fn reconcile_schedule(slots: &[String], reservations: &[Reservation]) -> Vec<ScheduleEntry> {
    ScheduleReconciler::default()
        .reconcile(slots, reservations)
        .map(|report| report.entries)
        .unwrap_or_default()
}
