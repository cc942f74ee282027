pub mod matchups;
pub mod report;
