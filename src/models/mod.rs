pub mod shared;
pub mod submission;
