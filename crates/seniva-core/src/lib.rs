//! seniva-core
//!
//! Pure domain types shared across the Seniva system: questionnaire response
//! values, severity grades, interpretations, and the screening history
//! record. No web or storage dependency; this is the shared vocabulary of
//! Seniva.

pub mod models;
