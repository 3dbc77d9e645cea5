pub use adapter::MapAdapter;
pub use container::{Container, EmplaceOnAbsence, Occupied, ReplaceInPlace};
pub use error::{MapError, Result};
pub use iter::{Items, Iter, Keys, Projected, Projection, ProjectionKind, Traversal, Values};
pub use policy::{Assign, AssignKind, Policy, ReadOnly, Reinsert, Replace};
pub use shared::Shared;
pub use view::{ItemView, KeyView, ValueView, View};

mod adapter;
pub mod container;
mod error;
pub mod iter;
pub mod ops;
pub mod policy;
mod shared;
mod view;
