//! Sample forms shared by tests and demos.

pub mod broken_branching;
pub mod customer_feedback;
pub mod event_registration;
pub mod job_screening;

pub use broken_branching::{cyclic, dangling};
pub use customer_feedback::customer_feedback;
pub use event_registration::{COMMENTS, SHIRT_SIZE, event_registration};
pub use job_screening::{JOB_SCREENING_JSON, job_screening};
