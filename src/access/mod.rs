//! Access control for the models API - the gate every operation passes first

pub mod credential;
pub mod gate;

pub use credential::*;
pub use gate::*;
