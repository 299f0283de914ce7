use thiserror::Error;

pub mod json_file_store;
pub mod memory_store;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;

/// String-to-string storage that outlives the values' makers. Nothing here synchronizes
/// concurrent writers: if two owners race on the same key, the last `set` wins.
pub trait KeyValueStore {
    type Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
    fn remove(&mut self, key: &str) -> Result<(), Self::Error>;

    /// Returns the stored value, or makes, stores and returns a new one if the key is missing or
    /// holds an empty string. Stored values are returned as they are.
    ///
    /// # Errors
    /// Whatever `get` or `set` of the store return. `value_maker` isn't called if `get` fails.
    fn get_or_set<ValueMaker>(
        &mut self,
        key: &str,
        value_maker: ValueMaker,
    ) -> Result<String, Self::Error>
    where
        ValueMaker: FnOnce() -> String,
    {
        match self.get(key)? {
            Some(value) if !value.is_empty() => Ok(value),
            _ => {
                let value = value_maker();
                self.set(key, &value)?;
                Ok(value)
            }
        }
    }
}

impl<Store: KeyValueStore + ?Sized> KeyValueStore for &mut Store {
    type Error = Store::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), Self::Error> {
        (**self).remove(key)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("the store file couldn't be accessed: {0}")]
    Io(#[from] std::io::Error),
    #[error("the store file isn't a JSON object of strings: {0}")]
    Json(#[from] serde_json::Error),
}
