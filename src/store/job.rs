use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Active,
    Archived,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Active => write!(f, "active"),
            JobStatus::Archived => write!(f, "archived"),
        }
    }
}

/// Whether a job has been posted to the channel. Kept as the source
/// spreadsheet's literal "Yes"/"No" values on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Posted {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    pub title: String,
    pub arabic_job_title: String,
    pub description: String,
    pub location: String,
    pub company: String,
    pub status: JobStatus,
    pub posted: Posted,
    pub scheduled_time: Option<DateTime<Local>>,
}

impl Job {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        arabic_job_title: impl Into<String>,
        company: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        let title = title.into();
        Self {
            description: format!("Description for {}.", title),
            id,
            title,
            arabic_job_title: arabic_job_title.into(),
            location: location.into(),
            company: company.into(),
            status: JobStatus::Active,
            posted: Posted::No,
            scheduled_time: None,
        }
    }

    /// True once the job occupies a slot in the scheduled queue.
    pub fn is_scheduled(&self) -> bool {
        self.scheduled_time.is_some()
    }
}

/// Listing filter. Defaults mirror the query-parameter defaults of the
/// HTTP surface: active jobs, first page of 10, ascending by id.
#[derive(Debug, Clone)]
pub struct JobFilter {
    pub status: JobStatus,
    pub skip: usize,
    pub limit: usize,
    pub order: SortOrder,
    pub search: Option<String>,
}

impl Default for JobFilter {
    fn default() -> Self {
        Self {
            status: JobStatus::Active,
            skip: 0,
            limit: 10,
            order: SortOrder::Asc,
            search: None,
        }
    }
}

impl JobFilter {
    pub fn with_status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, skip: usize, limit: usize) -> Self {
        self.skip = skip;
        self.limit = limit;
        self
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    /// Status/search predicate, without pagination or ordering applied.
    pub fn matches(&self, job: &Job) -> bool {
        if job.status != self.status {
            return false;
        }
        match &self.search {
            Some(needle) => job
                .company
                .to_lowercase()
                .contains(&needle.to_lowercase()),
            None => true,
        }
    }
}
