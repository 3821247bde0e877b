//! Server crate for the movie view aggregator.
//!
//! This crate contains the aggregator that fans out to the catalog and
//! merges the results into one `MovieView`.

pub mod aggregator;

pub use aggregator::MovieAggregator;
