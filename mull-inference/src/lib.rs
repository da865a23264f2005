//! Offset-ordered ledger of variable bindings for the inference pass.
//!
//! The binding-discovery walk records a [`Variable`] snapshot each time it
//! observes a binding, and the query layer later asks the [`Assignments`]
//! ledger questions like "what was the last assignment to `x` at or before
//! offset 120?" to resolve the type a name has at a program point.

mod assignments;
mod variable;

pub use crate::assignments::{Assignments, EmptyCollectionError, IndexOutOfRangeError};
pub use crate::variable::{BindingId, Variable};
