//! Integration tests for the Life Clock report engine.
//!
//! These tests validate the complete pipeline with real catalog data (NO
//! MOCKS): scoring and banding boundaries, hidden-force selection, the
//! 47-revelation structure with cross-revelation uniqueness, end-to-end
//! determinism, and the serialized report shape consumed by the result
//! page, PDF and email surfaces.

mod helpers;

mod forces_tests;
mod pipeline_tests;
mod revelation_tests;
mod scoring_tests;
mod serialization_tests;
