//! End-to-end tests for the Dice similarity engine.

mod oracle_agreement;
mod properties;
mod samples;
