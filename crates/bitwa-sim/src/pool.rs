//! Homogeneous, insertion-ordered entity storage.
//!
//! Removal is the only destructor: there are no dead flags. Indices handed out
//! by iteration stay valid until the next `remove_indices` or `expire` call.

use std::collections::BTreeSet;

use bitwa_core::components::Timed;

/// A vector of live entities of one kind.
#[derive(Debug, Clone)]
pub struct EntityPool<T> {
    items: Vec<T>,
    /// True while every push has had a spawn time no earlier than the
    /// previous one. Expiry relies on it to stop at the first live entity.
    spawn_ordered: bool,
}

impl<T> Default for EntityPool<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            spawn_ordered: true,
        }
    }
}

impl<T: Timed> EntityPool<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append to the back.
    pub fn push(&mut self, entity: T) {
        if let Some(last) = self.items.last() {
            if entity.spawn_time() < last.spawn_time() {
                self.spawn_ordered = false;
            }
        }
        self.items.push(entity);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Whether spawn times are non-decreasing front to back.
    pub fn is_spawn_ordered(&self) -> bool {
        self.spawn_ordered
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.spawn_ordered = true;
    }

    /// Remove every index in `doomed`, highest first, so that indices still
    /// pending removal never shift. Indices past the end are ignored.
    /// Survivors keep their relative order. Returns the number removed.
    pub fn remove_indices(&mut self, doomed: &BTreeSet<usize>) -> usize {
        let mut removed = 0;
        for &index in doomed.iter().rev() {
            if index < self.items.len() {
                self.items.remove(index);
                removed += 1;
            }
        }
        if self.items.len() <= 1 {
            self.spawn_ordered = true;
        }
        removed
    }

    /// Remove every entity with `now - spawn_time > ttl`. Returns the number removed.
    ///
    /// When the pool is spawn-ordered, expired entities form a prefix and the
    /// scan stops at the first live one. Otherwise every entity is checked.
    pub fn expire(&mut self, now: f64, ttl: f64) -> usize {
        if self.spawn_ordered {
            let cut = self
                .items
                .iter()
                .position(|e| e.age(now) <= ttl)
                .unwrap_or(self.items.len());
            self.items.drain(..cut);
            return cut;
        }

        let doomed: BTreeSet<usize> = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, e)| e.age(now) > ttl)
            .map(|(i, _)| i)
            .collect();
        self.remove_indices(&doomed)
    }
}

impl<'a, T> IntoIterator for &'a EntityPool<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
