//! League derivations over already-fetched records.
//!
//! Nothing in here touches the database: handlers load rows, convert them to
//! the input types below and hand them over. Results are recomputed on every
//! request and never cached.

mod dominance;
mod draft;
mod error;
mod payroll;
mod playoffs;
mod points;
mod rivalry;
mod standings;

pub use dominance::*;
pub use draft::*;
pub use error::DerivationError;
pub use payroll::*;
pub use playoffs::*;
pub use points::*;
pub use rivalry::*;
pub use standings::*;
