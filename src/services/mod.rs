//! Service layer for the library CLI
//!
//! Business rules on top of the storage layer: lending limits, availability
//! checks, and login.

pub mod circulation;
pub mod session;

pub use circulation::{CirculationService, Loan};
pub use session::{Session, SessionState};
