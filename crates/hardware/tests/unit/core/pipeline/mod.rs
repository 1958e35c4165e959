//! Pipeline tests.


/// Individual stages.
pub mod stages;
