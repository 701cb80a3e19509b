use serde::{Deserialize, Deserializer};

/// GBFS v1.x encodes status flags as 0/1 integers where v2.x uses booleans.
/// Both decode to `bool`.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(value) => Ok(value),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(other) => Err(serde::de::Error::custom(format!(
            "invalid flag value `{other}`, expected 0 or 1"
        ))),
    }
}
