pub mod clock;
pub mod errors;
pub mod executor;
pub mod parse;
pub mod report;
pub mod stats;
pub mod types;
