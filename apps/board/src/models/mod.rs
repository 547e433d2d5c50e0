pub mod application;
pub mod guild;
pub mod player;

use serde::{Deserialize, Deserializer};

/// Reads `null` the same as a missing field. Pair with `#[serde(default)]`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response of the remote delete endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Deleted {
    #[serde(default)]
    pub deleted: bool,
}

/// Response of the remote health endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamHealth {
    #[serde(default)]
    pub ok: bool,
}
