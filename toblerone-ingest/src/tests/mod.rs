//! Test modules for toblerone-ingest
//!
//! End-to-end coverage of the log-to-record pipeline: file ingestion,
//! directory aggregation and store round-trips.
