//! The type-model resolver: classification, example synthesis, and the
//! recursive field-tree algorithm.
//!
//! Resolution is synchronous and pure over immutable inputs. Every
//! invocation owns its own [`AncestorPath`], so concurrent resolutions never
//! interfere; termination on cyclic type graphs is guaranteed by cutting
//! expansion the second time a composite identity appears on the current
//! root-to-node path.

mod classify;
mod example;
mod method;
mod tree;
mod types;

pub use classify::{classify, literal_kind, LiteralKind};
pub use example::{enum_example, synthesize, COLLECTION_EXAMPLE_LEN};
pub use method::{category_name, MethodModelBuilder};
pub use tree::{AncestorPath, FieldTreeResolver};
pub use types::{BoundField, Category, EndpointModel, Field, ParamBinding};
