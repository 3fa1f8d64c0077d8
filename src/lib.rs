//! Scores build-a-pizza selections against a survey of American pizza preferences.
//!
//! [`scoring::calculate_match`] is the entry point: a pure function over a
//! [`types::selections::Selections`] record and the embedded
//! [`reference::ReferenceDataset`].

pub mod config;
pub mod error;
pub mod logging;
pub mod reference;
pub mod report;
pub mod scoring;
pub mod types;
