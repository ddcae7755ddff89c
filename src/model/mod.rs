pub mod edge;
pub mod node;

pub use edge::*;
pub use node::*;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Metadata of the persisted workflow entity (`id`, `merchant_id`, `name`, ...).
///
/// The component never interprets these fields; they are carried into the upsert
/// payload untouched.
pub type WorkflowMetadata = Map<String, Value>;

/// Deserializes `null` as the type's default. Hosts bind `null` while a data
/// source is still loading.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
