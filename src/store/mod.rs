pub mod job;

pub use job::{Job, JobFilter, JobStatus, Posted, SortOrder};

use crate::error::{JobcastError, Result};

const DEFAULT_MOCK_JOBS: usize = 25;
const MOCK_ACTIVE_JOBS: usize = 15;

/// Owns the canonical job records for the process lifetime.
///
/// Records are seeded once at startup (simulating the Excel sheet /
/// Microsoft List backing the real board) and only mutated through the
/// operations below. The scheduled queue holds ids into this store.
#[derive(Debug)]
pub struct JobStore {
    jobs: Vec<Job>,
}

impl Default for JobStore {
    fn default() -> Self {
        Self::with_mock_data(DEFAULT_MOCK_JOBS)
    }
}

impl JobStore {
    pub fn new(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// Seed `count` mock jobs with stable ids 1..=count. The first 15 are
    /// active, the remainder archived, matching the sample sheet.
    pub fn with_mock_data(count: usize) -> Self {
        let jobs = (1..=count as i64)
            .map(|i| {
                let mut job = Job::new(
                    i,
                    format!("Job Title {i}"),
                    format!("عنوان الوظيفة {i}"),
                    format!("Company {i}"),
                    "Erbil",
                );
                if i > MOCK_ACTIVE_JOBS as i64 {
                    job.status = JobStatus::Archived;
                }
                job
            })
            .collect();
        Self { jobs }
    }

    pub fn get(&self, id: i64) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn get_mut(&mut self, id: i64) -> Option<&mut Job> {
        self.jobs.iter_mut().find(|j| j.id == id)
    }

    /// Filtered, ordered page of jobs. Out-of-range skip/limit is not an
    /// error and yields an empty slice.
    pub fn list(&self, filter: &JobFilter) -> Vec<&Job> {
        let mut matched: Vec<&Job> = self.jobs.iter().filter(|j| filter.matches(j)).collect();
        match filter.order {
            SortOrder::Asc => matched.sort_by_key(|j| j.id),
            SortOrder::Desc => matched.sort_by_key(|j| std::cmp::Reverse(j.id)),
        }
        matched
            .into_iter()
            .skip(filter.skip)
            .take(filter.limit)
            .collect()
    }

    /// Cardinality of the filter match, ignoring pagination.
    pub fn count(&self, filter: &JobFilter) -> usize {
        self.jobs.iter().filter(|j| filter.matches(j)).count()
    }

    /// Flip a job to posted/archived.
    pub fn mark_posted(&mut self, id: i64) -> Result<()> {
        let job = self.get_mut(id).ok_or(JobcastError::JobNotFound(id))?;
        job.posted = Posted::Yes;
        job.status = JobStatus::Archived;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
