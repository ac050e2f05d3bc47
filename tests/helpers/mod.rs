
pub use test_harness::{MockAudioService, TestHarness, sample_results};
