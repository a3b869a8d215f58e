pub mod queue;

pub use queue::ScheduleQueue;
