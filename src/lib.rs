//! Match Reporter: data-to-text generation of Czech football match reports.
//!
//! A match-data feed document is correlated into typed incidents, planned
//! into one message per incident plus a result headline, lexicalized from
//! weighted Czech sentence templates with morphology annotations, and
//! finally realized into an article by an external generator service.

pub mod core;
pub mod schema;
pub mod telemetry;
