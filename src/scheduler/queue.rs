use chrono::{DateTime, Local, TimeDelta, Timelike};

use crate::error::{JobcastError, Result};
use crate::store::{Job, JobStatus, JobStore, Posted};

/// Time-ordered queue of scheduled job postings.
///
/// Holds ids into the [`JobStore`]; the store remains the single owner of
/// the records, so status and `scheduled_time` mutations made here are
/// visible to every reader of the store. A job id appears at most once.
#[derive(Debug, Default)]
pub struct ScheduleQueue {
    entries: Vec<i64>,
}

/// Drop minutes, seconds and sub-seconds from a local wall-clock time.
fn truncate_to_hour(t: DateTime<Local>) -> DateTime<Local> {
    t.with_minute(0)
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(t)
}

impl ScheduleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the next free one-hour slot at or after the first full hour
    /// following `now`, scanning the queue for gaps in chronological order.
    pub fn next_available_slot(
        &mut self,
        store: &JobStore,
        now: DateTime<Local>,
    ) -> DateTime<Local> {
        let mut candidate = truncate_to_hour(now) + TimeDelta::hours(1);

        // Re-establish chronological order before scanning.
        self.sort_by_time(store);

        for entry in &self.entries {
            let Some(taken) = store.get(*entry).and_then(|j| j.scheduled_time) else {
                continue;
            };
            if taken >= candidate {
                // A gap of one full hour before this entry fits the slot.
                if taken - candidate >= TimeDelta::hours(1) {
                    return candidate;
                }
                candidate = taken + TimeDelta::hours(1);
            }
        }

        // Queue empty, entirely in the past, or fully packed: the slot
        // after the last occupied hour.
        candidate
    }

    /// Allocate a slot for the job, flip it to posted/archived and enqueue
    /// it. Scheduling an already-queued job moves it to a fresh slot rather
    /// than duplicating the entry.
    pub fn schedule(
        &mut self,
        store: &mut JobStore,
        id: i64,
        now: DateTime<Local>,
    ) -> Result<DateTime<Local>> {
        if store.get(id).is_none() {
            return Err(JobcastError::JobNotFound(id));
        }

        self.entries.retain(|e| *e != id);
        let slot = self.next_available_slot(store, now);

        store.mark_posted(id)?;
        if let Some(job) = store.get_mut(id) {
            job.scheduled_time = Some(slot);
        }

        self.entries.push(id);
        self.sort_by_time(store);
        Ok(slot)
    }

    /// Remove a job from the queue and return it to the active list:
    /// status active, posted No, no scheduled time.
    pub fn unschedule(&mut self, store: &mut JobStore, id: i64) -> Result<()> {
        let pos = self
            .entries
            .iter()
            .position(|e| *e == id)
            .ok_or(JobcastError::NotScheduled(id))?;
        self.entries.remove(pos);

        if let Some(job) = store.get_mut(id) {
            job.scheduled_time = None;
            job.status = JobStatus::Active;
            job.posted = Posted::No;
        }
        Ok(())
    }

    /// Queued jobs in scheduled order.
    pub fn scheduled_jobs<'a>(&self, store: &'a JobStore) -> Vec<&'a Job> {
        self.entries
            .iter()
            .filter_map(|id| store.get(*id))
            .collect()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.entries.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn sort_by_time(&mut self, store: &JobStore) {
        self.entries
            .sort_by_key(|id| store.get(*id).and_then(|j| j.scheduled_time));
    }
}
