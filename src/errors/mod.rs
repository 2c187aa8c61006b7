// Errors layer - Error type definitions
pub mod startup;
pub mod validation;

pub use startup::StartupError;
pub use validation::ItemValidationError;
