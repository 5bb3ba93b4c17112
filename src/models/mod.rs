//! Domain models
//!
//! Plain data snapshots handed over by the backend and the view data
//! derived from them.

pub mod competition;
pub mod member;
pub mod result;

pub use competition::*;
pub use member::*;
pub use result::*;
