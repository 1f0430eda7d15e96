//! Query engine over one in-memory record set
//!
//! Two layers, both pure:
//! - [`aggregates`]: filter/group/sum primitives over a record slice
//! - [`views`]: the façade the HTTP and CLI adapters serialize, built
//!   strictly by composing the primitives
//!
//! Nothing here performs I/O or mutates its input; callers hand in a
//! freshly ingested record set and keep ownership of it.

pub mod aggregates;
pub mod views;

pub use aggregates::*;
pub use views::*;
