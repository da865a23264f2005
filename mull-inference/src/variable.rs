use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stable identity of a binding snapshot, minted when the snapshot is
/// constructed. Clones of a snapshot share its id; two snapshots built
/// separately never do, even with identical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindingId(u64);

static NEXT_BINDING_ID: AtomicU64 = AtomicU64::new(0);

impl BindingId {
    fn next() -> Self {
        Self(NEXT_BINDING_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One observed binding event: a name, the source offset it was seen at,
/// the type inferred for it, and whether the binding actually assigned a
/// value (a parameter is declared without being assigned).
///
/// The type value `T` is externally owned; the ledger stores it and hands
/// back references without inspecting it. A snapshot is immutable once
/// constructed; when a binding's type narrows, a fresh snapshot supersedes
/// the old one via [`Assignments::replace`](crate::Assignments::replace).
#[derive(Debug, Clone)]
pub struct Variable<T> {
    id: BindingId,
    name: String,
    offset: usize,
    ty: T,
    was_assigned: bool,
}

impl<T> Variable<T> {
    pub fn new<S: Into<String>>(name: S, offset: usize, ty: T, was_assigned: bool) -> Self {
        Self {
            id: BindingId::next(),
            name: name.into(),
            offset,
            ty,
            was_assigned,
        }
    }

    pub fn id(&self) -> BindingId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn ty(&self) -> &T {
        &self.ty
    }

    pub fn was_assigned(&self) -> bool {
        self.was_assigned
    }
}

impl<T: fmt::Display> fmt::Display for Variable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}: {}", self.name, self.offset, self.ty)
    }
}
