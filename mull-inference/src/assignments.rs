use std::fmt;
use std::slice;

use thiserror::Error;

use crate::variable::Variable;

/// A terminal accessor was called on an empty collection. Callers that
/// expect possible emptiness use [`Assignments::last_or_none`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("variable collection is empty")]
pub struct EmptyCollectionError;

/// Positional access past the end of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no variable at index {index} (collection holds {len})")]
pub struct IndexOutOfRangeError {
    pub index: usize,
    pub len: usize,
}

/// Offset-ordered ledger of binding snapshots.
///
/// Entries are kept sorted non-decreasing by offset; entries sharing an
/// offset keep their insertion order. Query methods build freshly allocated
/// collections and leave the receiver untouched; only [`add`], [`merge`],
/// and [`replace`] mutate.
///
/// [`add`]: Assignments::add
/// [`merge`]: Assignments::merge
/// [`replace`]: Assignments::replace
#[derive(Debug, Clone)]
pub struct Assignments<T> {
    variables: Vec<Variable<T>>,
}

impl<T> Assignments<T> {
    pub fn new(variables: Vec<Variable<T>>) -> Self {
        let mut assignments = Self { variables };
        assignments.sort();
        assignments
    }

    pub fn add(&mut self, variable: Variable<T>) {
        self.variables.push(variable);
        self.sort();
    }

    /// Earliest-offset entry.
    pub fn first(&self) -> Result<&Variable<T>, EmptyCollectionError> {
        self.variables.first().ok_or(EmptyCollectionError)
    }

    /// Latest-offset entry.
    pub fn last(&self) -> Result<&Variable<T>, EmptyCollectionError> {
        self.variables.last().ok_or(EmptyCollectionError)
    }

    /// Latest-offset entry, or `None` on an empty collection.
    pub fn last_or_none(&self) -> Option<&Variable<T>> {
        self.variables.last()
    }

    /// Entry at positional `index` in sorted order.
    pub fn at_index(&self, index: usize) -> Result<&Variable<T>, IndexOutOfRangeError> {
        self.variables.get(index).ok_or(IndexOutOfRangeError {
            index,
            len: self.variables.len(),
        })
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterates entries in sorted order; a fresh call restarts from the
    /// current sorted sequence.
    pub fn iter(&self) -> slice::Iter<'_, Variable<T>> {
        self.variables.iter()
    }

    /// Combines `other` into the receiver **by position**: the incoming
    /// entry at index k of `other`'s sorted sequence overwrites the
    /// receiver's entry at index k when one exists, and is appended
    /// otherwise; the receiver is then re-sorted. Positions are indices,
    /// not offsets, so merging collections of different sizes or orders
    /// can displace unrelated entries that merely share a position.
    pub fn merge(&mut self, other: Assignments<T>) {
        for (index, variable) in other.variables.into_iter().enumerate() {
            if index < self.variables.len() {
                self.variables[index] = variable;
            } else {
                self.variables.push(variable);
            }
        }
        self.sort();
    }

    // Stable, so entries sharing an offset keep their insertion order.
    fn sort(&mut self) {
        self.variables.sort_by_key(|variable| variable.offset());
    }
}

impl<T: Clone> Assignments<T> {
    /// Entries whose name equals `name`, after stripping any leading `$`
    /// sigils from the query.
    pub fn by_name(&self, name: &str) -> Assignments<T> {
        let name = name.trim_start_matches('$');
        self.filter(|variable| variable.name() == name)
    }

    pub fn less_than(&self, offset: usize) -> Assignments<T> {
        self.filter(|variable| variable.offset() < offset)
    }

    pub fn less_than_or_equal_to(&self, offset: usize) -> Assignments<T> {
        self.filter(|variable| variable.offset() <= offset)
    }

    pub fn greater_than(&self, offset: usize) -> Assignments<T> {
        self.filter(|variable| variable.offset() > offset)
    }

    pub fn greater_than_or_equal_to(&self, offset: usize) -> Assignments<T> {
        self.filter(|variable| variable.offset() >= offset)
    }

    pub fn equal_to(&self, offset: usize) -> Assignments<T> {
        self.filter(|variable| variable.offset() == offset)
    }

    /// Entries recording a genuine assignment, as opposed to bindings that
    /// merely declare a name (parameters).
    pub fn assignments_only(&self) -> Assignments<T> {
        self.filter(|variable| variable.was_assigned())
    }

    /// Swaps every slot holding `existing` for `replacement`, in place.
    /// Matching is by snapshot identity, not field equality; a no-op when
    /// `existing` is not present. Does not re-sort: a replacement is not
    /// assumed to change offset.
    pub fn replace(&mut self, existing: &Variable<T>, replacement: Variable<T>) {
        for slot in &mut self.variables {
            if slot.id() == existing.id() {
                *slot = replacement.clone();
            }
        }
    }

    // A filtered subsequence of a sorted sequence is sorted; no re-sort.
    fn filter(&self, keep: impl Fn(&Variable<T>) -> bool) -> Assignments<T> {
        Assignments {
            variables: self
                .variables
                .iter()
                .filter(|variable| keep(variable))
                .cloned()
                .collect(),
        }
    }
}

impl<T> Default for Assignments<T> {
    fn default() -> Self {
        Self {
            variables: Vec::new(),
        }
    }
}

impl<T> FromIterator<Variable<T>> for Assignments<T> {
    fn from_iter<I: IntoIterator<Item = Variable<T>>>(iter: I) -> Self {
        Assignments::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for Assignments<T> {
    type Item = Variable<T>;
    type IntoIter = std::vec::IntoIter<Variable<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Assignments<T> {
    type Item = &'a Variable<T>;
    type IntoIter = slice::Iter<'a, Variable<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.variables.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Assignments<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = self
            .variables
            .iter()
            .map(|variable| variable.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        f.write_str(&lines)
    }
}
