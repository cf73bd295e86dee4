use std::{
    cell::RefCell,
    collections::{BTreeMap, BTreeSet},
    rc::{Rc, Weak},
};

use log::{debug, warn};

use crate::{SharedObject, SharedObjectRef};

/// Identifier to object bookkeeping for one node.
///
/// The registry never owns the objects it tracks. Removal is deferred until the
/// end of the frame pass in which it was requested.
pub struct SharedRegistry {
    objects: BTreeMap<String, Weak<RefCell<dyn SharedObject>>>,
    pending_removal: BTreeSet<String>,
}

impl SharedRegistry {
    pub fn new() -> Self {
        Self {
            objects: BTreeMap::new(),
            pending_removal: BTreeSet::new(),
        }
    }

    /// Inserts or replaces the object stored under `id`. Last write wins.
    pub fn register<T: SharedObject + 'static>(&mut self, id: &str, object: &Rc<RefCell<T>>) {
        let object: SharedObjectRef = object.clone();
        self.register_ref(id, &object);
    }

    pub fn register_ref(&mut self, id: &str, object: &SharedObjectRef) {
        if self.objects.insert(id.to_string(), Rc::downgrade(object)).is_some() {
            debug!("SharedRegistry: replacing object registered as {}", id);
        } else {
            debug!("SharedRegistry: registering {}", id);
        }
        // a fresh registration outlives any earlier removal request
        self.pending_removal.remove(id);
    }

    /// Marks `id` for removal at the end of the current pass.
    ///
    /// Unknown and already-pending ids are ignored.
    pub fn unregister(&mut self, id: &str) {
        if !self.objects.contains_key(id) {
            return;
        }
        if self.pending_removal.insert(id.to_string()) {
            debug!("SharedRegistry: unregistering {}", id);
        }
    }

    pub fn lookup(&self, id: &str) -> Option<SharedObjectRef> {
        let weak = self.objects.get(id)?;
        let object = weak.upgrade();
        if object.is_none() {
            warn!("SharedRegistry: object {} was dropped while still registered", id);
        }
        object
    }

    pub fn contains(&self, id: &str) -> bool {
        self.objects.contains_key(id)
    }

    pub fn is_pending_removal(&self, id: &str) -> bool {
        self.pending_removal.contains(id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Upgrades every live entry in ascending id order.
    ///
    /// Entries whose object has been dropped are purged here so the snapshot
    /// length always equals the number of objects that will be written.
    pub fn snapshot(&mut self) -> Vec<(String, SharedObjectRef)> {
        let mut output = Vec::with_capacity(self.objects.len());
        let mut dropped = Vec::new();

        for (id, weak) in self.objects.iter() {
            match weak.upgrade() {
                Some(object) => output.push((id.clone(), object)),
                None => dropped.push(id.clone()),
            }
        }

        for id in dropped {
            warn!("SharedRegistry: purging {}, object dropped without unregistering", id);
            self.objects.remove(&id);
            self.pending_removal.remove(&id);
        }

        output
    }

    /// Erases every pending id. Returns how many entries were removed.
    pub fn sweep_pending_removals(&mut self) -> usize {
        let mut swept = 0;
        for id in std::mem::take(&mut self.pending_removal) {
            if self.objects.remove(&id).is_some() {
                swept += 1;
            }
        }
        swept
    }

    pub fn clear(&mut self) {
        self.objects.clear();
        self.pending_removal.clear();
    }
}

impl Default for SharedRegistry {
    fn default() -> Self {
        Self::new()
    }
}
