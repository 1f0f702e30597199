//! The Aizawa system: coefficients, vector field, RK4 integrator and the
//! evolving trajectory state.

pub mod coefficients;
pub mod integrator;
pub mod state;
pub mod vector_field;

pub use coefficients::AizawaCoefficients;
pub use integrator::{DEFAULT_TIME_STEP, rk4_step};
pub use state::AttractorState;
pub use vector_field::aizawa_field;
