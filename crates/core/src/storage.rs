//! Identity-keyed entity collections.
//!
//! The host persistence layer hands entities to the domain in unordered
//! collections with attach/detach/contains semantics. `EntityStorage` is
//! that collaborator: membership is decided by entity id, never by value,
//! so two entities with equal attributes and distinct ids are distinct
//! members. Iteration order is unspecified.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// An unordered collection of entities keyed by identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityStorage<T: Entity> {
    items: Vec<T>,
}

impl<T: Entity> EntityStorage<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Attach an entity. No-op when a member with the same id is already
    /// present; the existing member is kept.
    pub fn attach(&mut self, item: T) {
        if !self.contains(item.id()) {
            self.items.push(item);
        }
    }

    /// Detach the member with the given id, returning it. No-op returning
    /// `None` when absent.
    pub fn detach(&mut self, id: &T::Id) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.swap_remove(index))
    }

    pub fn contains(&self, id: &T::Id) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Entity> Default for EntityStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> FromIterator<T> for EntityStorage<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut storage = Self::new();
        storage.extend(iter);
        storage
    }
}

impl<T: Entity> Extend<T> for EntityStorage<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.attach(item);
        }
    }
}

impl<'a, T: Entity> IntoIterator for &'a EntityStorage<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::RecordId;

    #[derive(Debug, Clone, PartialEq)]
    struct Tag {
        id: RecordId,
        label: &'static str,
    }

    impl Tag {
        fn new(label: &'static str) -> Self {
            Self {
                id: RecordId::new(),
                label,
            }
        }
    }

    impl Entity for Tag {
        type Id = RecordId;

        fn id(&self) -> &RecordId {
            &self.id
        }
    }

    #[test]
    fn storage_is_initially_empty() {
        let storage: EntityStorage<Tag> = EntityStorage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.len(), 0);
    }

    #[test]
    fn attach_then_detach_round_trips_to_empty() {
        let tag = Tag::new("red");
        let id = *tag.id();

        let mut storage = EntityStorage::new();
        storage.attach(tag.clone());
        assert!(storage.contains(&id));

        let detached = storage.detach(&id);
        assert_eq!(detached, Some(tag));
        assert!(storage.is_empty());
    }

    #[test]
    fn attach_is_idempotent_per_id() {
        let tag = Tag::new("red");
        let mut storage = EntityStorage::new();
        storage.attach(tag.clone());
        storage.attach(tag);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn equal_values_with_distinct_ids_are_distinct_members() {
        let mut storage = EntityStorage::new();
        storage.attach(Tag::new("red"));
        storage.attach(Tag::new("red"));
        assert_eq!(storage.len(), 2);
    }

    #[test]
    fn detach_of_absent_id_is_a_no_op() {
        let mut storage = EntityStorage::new();
        storage.attach(Tag::new("red"));

        assert_eq!(storage.detach(&RecordId::new()), None);
        assert_eq!(storage.len(), 1);
    }

    #[test]
    fn get_returns_the_member_with_the_given_id() {
        let tag = Tag::new("blue");
        let id = *tag.id();

        let mut storage = EntityStorage::new();
        storage.attach(Tag::new("red"));
        storage.attach(tag.clone());

        assert_eq!(storage.get(&id), Some(&tag));
        assert_eq!(storage.get(&RecordId::new()), None);
    }

    #[test]
    fn from_iterator_deduplicates_by_id() {
        let tag = Tag::new("red");
        let storage: EntityStorage<Tag> =
            [tag.clone(), tag, Tag::new("blue")].into_iter().collect();
        assert_eq!(storage.len(), 2);
    }
}
