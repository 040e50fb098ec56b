//! Ordered, identifier-keyed collections.
//!
//! Quizzes and groups share the same shape: a user-chosen identifier, an
//! insertion order that is preserved for display and persistence, and
//! lookup by identifier. Lookups go through a hash index and report absence
//! as `None` rather than a sentinel position.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::{Serialize, Serializer};

use crate::error::{Collection, DeskError, Result};

/// An entity addressed by a user-chosen identifier.
pub trait Identified {
    /// Which collection this entity lives in, for error reporting.
    const COLLECTION: Collection;

    fn identifier(&self) -> &str;
}

/// Ordered collection of uniquely identified entities.
#[derive(Debug, Clone)]
pub struct Registry<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Identified> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from items in order, rejecting duplicate identifiers.
    pub fn from_items(items: Vec<T>) -> Result<Self> {
        let mut registry = Self::new();
        for item in items {
            registry.insert(item)?;
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Zero-based position of the entity with `id`.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.index_of(id).map(|i| &self.items[i])
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.index_of(id).map(move |i| &mut self.items[i])
    }

    /// Like [`Registry::get`], but reports absence as [`DeskError::NotFound`].
    pub fn require(&self, id: &str) -> Result<&T> {
        self.get(id).ok_or_else(|| not_found::<T>(id))
    }

    pub fn require_mut(&mut self, id: &str) -> Result<&mut T> {
        match self.index_of(id) {
            Some(i) => Ok(&mut self.items[i]),
            None => Err(not_found::<T>(id)),
        }
    }

    /// Entity at zero-based `position`.
    pub fn at(&self, position: usize) -> Option<&T> {
        self.items.get(position)
    }

    /// Append an entity. Identifiers must be unique.
    pub fn insert(&mut self, item: T) -> Result<&T> {
        let id = item.identifier().to_string();
        if self.index.contains_key(&id) {
            return Err(DeskError::DuplicateIdentifier {
                collection: T::COLLECTION,
                id,
            });
        }
        let position = self.items.len();
        self.items.push(item);
        self.index.insert(id, position);
        Ok(&self.items[position])
    }

    /// Remove the entity with `id`, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let position = self.index.remove(id)?;
        let item = self.items.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(item)
    }
}

fn not_found<T: Identified>(id: &str) -> DeskError {
    DeskError::NotFound {
        collection: T::COLLECTION,
        id: id.to_string(),
    }
}

impl<T: Serialize> Serialize for Registry<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

impl<'de, T> Deserialize<'de> for Registry<T>
where
    T: Identified + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RegistryVisitor<T>(PhantomData<T>);

        impl<'de, T> Visitor<'de> for RegistryVisitor<T>
        where
            T: Identified + Deserialize<'de>,
        {
            type Value = Registry<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a sequence of {} entries", T::COLLECTION)
            }

            fn visit_seq<A: SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut registry = Registry::new();
                while let Some(item) = seq.next_element::<T>()? {
                    registry.insert(item).map_err(de::Error::custom)?;
                }
                Ok(registry)
            }
        }

        deserializer.deserialize_seq(RegistryVisitor(PhantomData))
    }
}
