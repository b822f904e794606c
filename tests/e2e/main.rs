//! E2E test suite entry point.

mod fixture;
mod registry_workflow;
