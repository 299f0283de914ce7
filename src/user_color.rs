use log::{debug, info};
use rand::Rng;

use crate::{
    color::generate_random_color_with,
    constants::USER_COLOR_KEY,
    key_value_stores::KeyValueStore,
};

/// Hands out the color of the user who owns `Store`, making one up on the first request.
///
/// A stored value is returned without checking that it is a well-formed color; only a missing or
/// empty value gets replaced. Two providers over the same backing storage aren't synchronized, so
/// if both find it empty, both generate a color and the later write wins.
pub struct UserColorProvider<Store> {
    store: Store,
    key: String,
}

impl<Store: KeyValueStore> UserColorProvider<Store> {
    pub fn new(store: Store) -> Self {
        Self::with_key(store, USER_COLOR_KEY)
    }

    pub fn with_key(store: Store, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// # Errors
    /// Store errors are passed through untouched. There is no fallback color.
    pub fn get_user_color(&mut self) -> Result<String, Store::Error> {
        self.get_user_color_with(&mut rand::thread_rng())
    }

    /// Same as `get_user_color`, but generates with `rng` when a color has to be made.
    ///
    /// # Errors
    /// Store errors are passed through untouched.
    pub fn get_user_color_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<String, Store::Error> {
        let mut generated = false;
        let color = self.store.get_or_set(&self.key, || {
            generated = true;
            generate_random_color_with(rng).into_string()
        })?;
        if generated {
            info!("No color was stored under {:?}, saved {}", self.key, color);
        } else {
            debug!("Found {:?} under {:?}", color, self.key);
        }
        Ok(color)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    pub fn into_store(self) -> Store {
        self.store
    }
}

/// Reads or initializes the color under the default key of `store`
///
/// # Errors
/// Whatever the store returns.
pub fn get_user_color<Store: KeyValueStore>(store: &mut Store) -> Result<String, Store::Error> {
    UserColorProvider::new(store).get_user_color()
}
