//! Working memory backed by a persistent vector.
//!
//! This is a thin wrapper around `im::Vector`. Cloning is O(1), so the
//! inference driver can hand a snapshot to the trace after every firing
//! without copying facts.

use std::fmt;
use std::iter::FromIterator;

use crate::fact::Fact;

/// The append-only collection of facts known during one run.
///
/// Facts are never removed or deduplicated; appending a fact equal to one
/// already present is allowed.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkingMemory(im::Vector<Fact>);

impl WorkingMemory {
    /// Creates an empty working memory.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Returns the number of facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no facts are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Appends a fact.
    pub fn push(&mut self, fact: Fact) {
        self.0.push_back(fact);
    }

    /// Gets a fact by insertion index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Fact> {
        self.0.get(index)
    }

    /// Returns the first fact with the given name, in insertion order.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Fact> {
        self.0.iter().find(|f| f.name == name)
    }

    /// Returns every fact with the given name, in insertion order.
    pub fn named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Fact> + 'a {
        self.0.iter().filter(move |f| f.name == name)
    }

    /// Returns an iterator over the facts in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Fact> {
        self.0.iter()
    }

    /// Returns an O(1) copy sharing structure with this memory.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}

impl fmt::Debug for WorkingMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Prints facts as `[name=value][name=value]...`.
impl fmt::Display for WorkingMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for fact in self.iter() {
            write!(f, "[{fact}]")?;
        }
        Ok(())
    }
}

impl FromIterator<Fact> for WorkingMemory {
    fn from_iter<I: IntoIterator<Item = Fact>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl Extend<Fact> for WorkingMemory {
    fn extend<I: IntoIterator<Item = Fact>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a WorkingMemory {
    type Item = &'a Fact;
    type IntoIter = im::vector::Iter<'a, Fact>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
