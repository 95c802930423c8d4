pub mod form;
pub mod theme;
pub mod validation;

#[cfg(test)]
pub mod test_helpers;

pub use form::*;
pub use theme::*;
pub use validation::*;
