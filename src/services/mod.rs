pub mod export;
pub mod ingestion;
pub mod processing;
pub mod report;
pub mod server;
