pub mod session;

pub use session::{FormSession, SubmitHandler, SubmitOutcome};
