

/// Interface property checker.
pub mod monitor;

/// Randomized request streams checked against the interface properties.
pub mod properties;
