//! Almacén clave-valor de progreso.
//!
//! El contrato es mínimo a propósito: el motor no conoce el backend, sólo
//! get/set. La implementación en memoria sirve para tests y para la demo.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum StoreError {
    #[error("backend unavailable: {0}")] Unavailable(String),
    #[error("corrupt value for key {0}")] Corrupt(String),
}

/// Almacén clave-valor asíncrono de progreso y compras.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: String) -> Result<(), StoreError>;
}

#[derive(Default)]
pub struct InMemoryProgressStore {
    inner: Mutex<HashMap<String, String>>,
}

impl InMemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressStore for InMemoryProgressStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.inner.lock().expect("store mutex poisoned").get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), StoreError> {
        self.inner.lock().expect("store mutex poisoned").insert(key.to_string(), value);
        Ok(())
    }
}
