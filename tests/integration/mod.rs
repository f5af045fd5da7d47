mod engine_tests;
mod pipeline_tests;
