use std::{cell::RefCell, rc::Rc};

use crate::{registry::shared_registry::SharedRegistry, SharedObject, SharedObjectRef};

/// Cloneable handle to a node's registry.
///
/// Handed out to collaborators so they can register and unregister at any
/// time, including from inside their own `commit` or `apply`. The frame
/// passes only borrow the registry to snapshot and to sweep.
#[derive(Clone)]
pub struct RegistryHandle {
    inner: Rc<RefCell<SharedRegistry>>,
}

impl RegistryHandle {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SharedRegistry::new())),
        }
    }

    pub fn register<T: SharedObject + 'static>(&self, id: &str, object: &Rc<RefCell<T>>) {
        self.inner.borrow_mut().register(id, object);
    }

    pub fn register_ref(&self, id: &str, object: &SharedObjectRef) {
        self.inner.borrow_mut().register_ref(id, object);
    }

    pub fn unregister(&self, id: &str) {
        self.inner.borrow_mut().unregister(id);
    }

    pub fn lookup(&self, id: &str) -> Option<SharedObjectRef> {
        self.inner.borrow().lookup(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.borrow().contains(id)
    }

    pub fn is_pending_removal(&self, id: &str) -> bool {
        self.inner.borrow().is_pending_removal(id)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }

    pub fn ids(&self) -> Vec<String> {
        self.inner.borrow().ids().map(str::to_string).collect()
    }

    pub(crate) fn snapshot(&self) -> Vec<(String, SharedObjectRef)> {
        self.inner.borrow_mut().snapshot()
    }

    pub(crate) fn sweep_pending_removals(&self) -> usize {
        self.inner.borrow_mut().sweep_pending_removals()
    }

    pub(crate) fn clear(&self) {
        self.inner.borrow_mut().clear();
    }
}

impl Default for RegistryHandle {
    fn default() -> Self {
        Self::new()
    }
}
