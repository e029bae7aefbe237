//! Primitiva de almacenamiento clave-valor (durable o de sesión).

mod memory;

pub use memory::InMemoryKeyValueStore;

use crate::errors::StoreError;

/// Almacén clave-valor de strings. Cada `set` reemplaza el valor completo.
pub trait KeyValueStore {
    /// Lee el valor de `key`. `Ok(None)` si la clave no existe.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    /// Escribe (o sobrescribe) el valor completo de `key`.
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError>;
    /// Elimina la clave. Eliminar una clave inexistente no es error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> { (**self).get(key) }
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> { (**self).set(key, value) }
    fn remove(&mut self, key: &str) -> Result<(), StoreError> { (**self).remove(key) }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> { (**self).get(key) }
    fn set(&mut self, key: &str, value: String) -> Result<(), StoreError> { (**self).set(key, value) }
    fn remove(&mut self, key: &str) -> Result<(), StoreError> { (**self).remove(key) }
}
