//! Cleaning of raw training-attendance exports into the JMIS upload template

pub mod cleaning;
pub mod config;
