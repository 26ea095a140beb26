use std::any::{type_name, Any};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::WiringFault;

/// Exclusive owner of the raw client behind a proxy.
///
/// The holder is never empty. Replacement swaps a fully constructed `Arc`
/// under a write lock, so a concurrent caller sees either the old client or
/// the new one. Callers take a snapshot with [`get`](Self::get) and release
/// the lock before talking to the network.
pub struct ClientHolder<C: ?Sized> {
    current: RwLock<Arc<C>>,
}

impl<C: ?Sized + 'static> ClientHolder<C> {
    /// Creates a holder around `client`.
    pub fn new(client: Arc<C>) -> Self {
        Self {
            current: RwLock::new(client),
        }
    }

    /// Returns the client held right now.
    pub fn get(&self) -> Arc<C> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Swaps in `client` and returns the one it replaced.
    pub fn replace(&self, client: Arc<C>) -> Arc<C> {
        let mut current = self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *current, client)
    }

    /// Swaps in a type-erased candidate, which must be an `Arc<C>`.
    ///
    /// # Errors
    ///
    /// Returns `WiringFault` if the candidate holds anything else. The held
    /// client is left untouched in that case.
    pub fn replace_any(&self, candidate: Box<dyn Any + Send>) -> Result<Arc<C>, WiringFault> {
        match candidate.downcast::<Arc<C>>() {
            Ok(client) => Ok(self.replace(*client)),
            Err(_) => Err(WiringFault::new(type_name::<Arc<C>>())),
        }
    }
}

impl<C: ?Sized> fmt::Debug for ClientHolder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientHolder")
            .field("client", &type_name::<C>())
            .finish()
    }
}
