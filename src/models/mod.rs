pub mod application;
pub mod job;
pub mod saved_job;
pub mod user;

pub use application::Application;
pub use job::Job;
pub use saved_job::{SavedJob, SavedJobRow, SavedJobWithJob};
pub use user::{ProfileExtras, User};
