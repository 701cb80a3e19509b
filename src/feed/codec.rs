use serde::de::DeserializeOwned;
use std::{collections::HashMap, fmt, hash::Hash};

use super::Error;

/// Folds a wire sequence of delegate records into a fresh mapping.
///
/// `split` projects a delegate into its `(key, value)` entry and may reject
/// it. A rejected feed name surfaces as [`Error::UnknownFeedType`] unchanged;
/// any other rejection, and any element that does not decode as a delegate at
/// all, is reported as [`Error::MalformedRecord`] carrying the element's
/// position. A key appearing twice fails the whole decode with
/// [`Error::DuplicateKey`].
pub fn decode_entries<D, K, V>(
    records: Vec<serde_json::Value>,
    mut split: impl FnMut(D) -> Result<(K, V), Error>,
) -> Result<HashMap<K, V>, Error>
where
    D: DeserializeOwned,
    K: Eq + Hash + fmt::Display,
{
    let mut entries = HashMap::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let delegate: D =
            serde_json::from_value(record).map_err(|err| Error::MalformedRecord {
                index,
                source: Box::new(err),
            })?;
        let (key, value) = split(delegate).map_err(|err| match err {
            err @ Error::UnknownFeedType(_) => err,
            other => Error::MalformedRecord {
                index,
                source: Box::new(other),
            },
        })?;
        if entries.contains_key(&key) {
            return Err(Error::DuplicateKey(key.to_string()));
        }
        entries.insert(key, value);
    }
    Ok(entries)
}

/// Expands a mapping into its wire sequence, one delegate per entry, in the
/// mapping's own iteration order. Wire order carries no meaning.
pub fn encode_entries<D, K, V>(
    entries: &HashMap<K, V>,
    mut join: impl FnMut(&K, &V) -> D,
) -> Vec<D> {
    entries.iter().map(|(key, value)| join(key, value)).collect()
}
