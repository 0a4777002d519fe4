//! Actor identity using string interning for cheap copies and comparisons
//!
//! This module provides the [`ActorId`] type. Actors arrive as free-text names
//! (one per spreadsheet row) and are compared many times while building the
//! co-occurrence graph, so each name is interned once and carried around as a
//! `Copy` symbol afterwards.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for actor names.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner. The
/// interner is append-only; symbols stay valid for the life of the process.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn with_interner<R>(f: impl FnOnce(&mut DefaultStringInterner) -> R) -> R {
    let mut interner = INTERNER
        .get_or_init(|| Mutex::new(DefaultStringInterner::new()))
        .lock()
        .expect("Failed to acquire interner lock");
    f(&mut interner)
}

/// Opaque actor identity with equality by value.
///
/// Two `ActorId`s created from the same string are equal, no matter where
/// they were created.
///
/// # Examples
///
/// ```
/// use paoh_core::identifier::ActorId;
///
/// let a = ActorId::new("Dr. Ada Lovelace");
/// let b: ActorId = "Dr. Ada Lovelace".into();
/// assert_eq!(a, b);
/// assert_eq!(a, "Dr. Ada Lovelace");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(DefaultSymbol);

impl ActorId {
    /// Creates an `ActorId` from the actor's name.
    ///
    /// # Arguments
    ///
    /// * `name` - The actor's display name, used verbatim as identity
    pub fn new(name: &str) -> Self {
        Self(with_interner(|interner| interner.get_or_intern(name)))
    }

    /// Returns the actor's name as an owned string.
    pub fn name(&self) -> String {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .expect("Symbol should exist in interner")
                .to_string()
        })
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for ActorId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for ActorId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for ActorId {
    /// Allows direct comparison with string slices: `id == "string"`
    fn eq(&self, other: &str) -> bool {
        with_interner(|interner| {
            interner
                .resolve(self.0)
                .is_some_and(|name| name == other)
        })
    }
}

impl PartialEq<&str> for ActorId {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
