pub mod applications;
pub mod jobs;
pub mod saved_jobs;
pub mod users;
