use serde::{Deserialize, Deserializer};

mod content;
mod draft;
mod governor;
mod playoff;
mod rivalry;
mod salary;
mod season;
mod standing;
mod team;

pub use content::*;
pub use draft::*;
pub use governor::*;
pub use playoff::*;
pub use rivalry::*;
pub use salary::*;
pub use season::*;
pub use standing::*;
pub use team::*;

/// Patch helper for nullable columns: a missing field stays `None`, an
/// explicit `null` becomes `Some(None)` and clears the column.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
