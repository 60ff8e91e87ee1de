//! Per-area integration tests

mod ca_test;
mod certificates_test;
mod config_test;
mod factory_test;
