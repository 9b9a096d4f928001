// ============================================================================
// Engine Module
// Number recognition and N(m,k) rule evaluation
// ============================================================================

mod recognizer;
mod validator;

pub use recognizer::recognize;
pub use validator::NumberValidator;
