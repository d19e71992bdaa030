//! Explicit implementation registry.
//!
//! Types announce themselves with a [`Registration`] at startup: a name, the
//! names of their direct supertypes, whether they are abstract or concrete,
//! and for concrete types a factory. The [`Registry`] then answers
//! "which implementations of `base` exist" without any runtime reflection.
//!
//! Parents must be registered before their children. This keeps the type
//! graph acyclic, and together with name-sorted results it makes every query
//! independent of registration order.
//!
//! # Examples
//!
//! ```rust
//! use ftoolz::registry::{Registration, Registry};
//!
//! trait Codec {
//!     fn name(&self) -> &'static str;
//! }
//!
//! struct Gzip;
//! impl Codec for Gzip {
//!     fn name(&self) -> &'static str {
//!         "gzip"
//!     }
//! }
//!
//! fn gzip() -> Box<dyn Codec> {
//!     Box::new(Gzip)
//! }
//!
//! let mut registry: Registry<dyn Codec> = Registry::new();
//! registry.register(Registration::abstract_type("Codec")).unwrap();
//! registry.register(Registration::concrete("Gzip", gzip).extends("Codec")).unwrap();
//!
//! let found: Vec<&str> = registry
//!     .find_implementations("Codec")
//!     .unwrap()
//!     .iter()
//!     .map(|registration| registration.name())
//!     .collect();
//! assert_eq!(found, vec!["Gzip"]);
//!
//! let codec = registry.instantiate("Gzip").unwrap();
//! assert_eq!(codec.name(), "gzip");
//! ```

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use crate::hash::{Map, new_map};

// =============================================================================
// Errors
// =============================================================================

/// Errors reported by [`Registry`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A type with the same name is already registered.
    #[error("type `{name}` is already registered")]
    Duplicate {
        /// The rejected name.
        name: String,
    },

    /// A declared parent has not been registered yet.
    #[error("type `{name}` extends unregistered type `{parent}`")]
    UnknownParent {
        /// The type being registered.
        name: String,
        /// The missing parent.
        parent: String,
    },

    /// The queried type is not registered.
    #[error("type `{name}` is not registered")]
    UnknownType {
        /// The queried name.
        name: String,
    },

    /// The type is abstract and has no factory.
    #[error("type `{name}` is abstract and cannot be instantiated")]
    NotInstantiable {
        /// The queried name.
        name: String,
    },
}

static_assertions::assert_impl_all!(RegistryError: Send, Sync, std::error::Error);

// =============================================================================
// Registration
// =============================================================================

/// Whether a registered type can be instantiated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Declares behavior only; never returned by
    /// [`Registry::find_implementations`].
    Abstract,
    /// Has a factory producing instances.
    Concrete,
}

/// One type's entry in a [`Registry`].
pub struct Registration<T: ?Sized> {
    name: String,
    parents: Vec<String>,
    kind: Kind,
    discoverable: bool,
    factory: Option<fn() -> Box<T>>,
}

impl<T: ?Sized> Registration<T> {
    /// Creates an abstract entry.
    pub fn abstract_type(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parents: Vec::new(),
            kind: Kind::Abstract,
            discoverable: true,
            factory: None,
        }
    }

    /// Creates a concrete entry built by `factory`.
    pub fn concrete(name: impl Into<String>, factory: fn() -> Box<T>) -> Self {
        Self {
            name: name.into(),
            parents: Vec::new(),
            kind: Kind::Concrete,
            discoverable: true,
            factory: Some(factory),
        }
    }

    /// Adds `parent` to the direct supertypes.
    #[must_use]
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.parents.push(parent.into());
        self
    }

    /// Excludes this entry from [`Registry::find_implementations`].
    ///
    /// The entry can still be instantiated by name and still appears in
    /// [`Registry::subtypes`].
    #[must_use]
    pub const fn hidden(mut self) -> Self {
        self.discoverable = false;
        self
    }

    /// The registered name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the direct supertypes.
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// Abstract or concrete.
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// `false` for entries marked [`hidden`](Self::hidden).
    pub const fn is_discoverable(&self) -> bool {
        self.discoverable
    }

    /// Runs the factory. `None` for abstract entries.
    pub fn instantiate(&self) -> Option<Box<T>> {
        self.factory.map(|factory| factory())
    }
}

impl<T: ?Sized> Clone for Registration<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            parents: self.parents.clone(),
            kind: self.kind,
            discoverable: self.discoverable,
            factory: self.factory,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Registration<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Registration")
            .field("name", &self.name)
            .field("parents", &self.parents)
            .field("kind", &self.kind)
            .field("discoverable", &self.discoverable)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Name-keyed collection of [`Registration`]s producing `Box<T>`.
///
/// `T` is usually a trait object such as `dyn Codec`.
pub struct Registry<T: ?Sized> {
    entries: Map<String, Registration<T>>,
    children: Map<String, Vec<String>>,
}

impl<T: ?Sized> Registry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: new_map(),
            children: new_map(),
        }
    }

    /// Adds `registration`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::Duplicate`] if the name is already registered.
    /// - [`RegistryError::UnknownParent`] if a parent is not registered yet.
    pub fn register(&mut self, registration: Registration<T>) -> Result<(), RegistryError> {
        if self.entries.contains_key(&registration.name) {
            return Err(RegistryError::Duplicate {
                name: registration.name,
            });
        }
        if let Some(parent) = registration
            .parents
            .iter()
            .find(|parent| !self.entries.contains_key(parent.as_str()))
        {
            return Err(RegistryError::UnknownParent {
                parent: parent.clone(),
                name: registration.name,
            });
        }

        for parent in &registration.parents {
            self.children
                .entry(parent.clone())
                .or_default()
                .push(registration.name.clone());
        }
        tracing::debug!(
            name = %registration.name,
            parents = ?registration.parents,
            kind = ?registration.kind,
            discoverable = registration.discoverable,
            "registered type"
        );
        self.entries.insert(registration.name.clone(), registration);
        Ok(())
    }

    /// Looks up a registration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Registration<T>> {
        self.entries.get(name)
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every direct or indirect subtype of `base`, excluding `base`, sorted
    /// by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownType`] if `base` is not registered.
    pub fn subtypes(&self, base: &str) -> Result<Vec<&Registration<T>>, RegistryError> {
        if !self.contains(base) {
            return Err(RegistryError::UnknownType {
                name: base.to_owned(),
            });
        }

        let mut visited: BTreeSet<&str> = BTreeSet::new();
        let mut pending: Vec<&str> = vec![base];
        while let Some(current) = pending.pop() {
            for child in self.children.get(current).into_iter().flatten() {
                if visited.insert(child.as_str()) {
                    pending.push(child.as_str());
                }
            }
        }

        let found: Vec<&Registration<T>> = visited
            .into_iter()
            .filter_map(|name| self.entries.get(name))
            .collect();
        tracing::debug!(base, count = found.len(), "resolved subtypes");
        Ok(found)
    }

    /// Concrete, discoverable subtypes of `base`, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownType`] if `base` is not registered.
    pub fn find_implementations(&self, base: &str) -> Result<Vec<&Registration<T>>, RegistryError> {
        let mut found = self.subtypes(base)?;
        found.retain(|registration| {
            registration.kind == Kind::Concrete && registration.discoverable
        });
        tracing::debug!(base, count = found.len(), "resolved implementations");
        Ok(found)
    }

    /// Builds an instance of the type registered as `name`.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::UnknownType`] if `name` is not registered.
    /// - [`RegistryError::NotInstantiable`] if it is abstract.
    pub fn instantiate(&self, name: &str) -> Result<Box<T>, RegistryError> {
        let registration = self.get(name).ok_or_else(|| RegistryError::UnknownType {
            name: name.to_owned(),
        })?;
        registration
            .instantiate()
            .ok_or_else(|| RegistryError::NotInstantiable {
                name: name.to_owned(),
            })
    }

    /// Iterates over all registrations in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Registration<T>> {
        self.entries.values()
    }
}

impl<T: ?Sized> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Registry<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        formatter.debug_struct("Registry").field("types", &names).finish()
    }
}
