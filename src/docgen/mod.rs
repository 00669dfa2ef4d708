//! Markdown projection of resolved field trees.
//!
//! Two artifacts per endpoint: a parameter table (depth-first, pre-order,
//! indent marker per nesting level) and an example JSON blob produced by the
//! same walk. Documents are rendered fully in memory and written with a
//! single filesystem call.

mod json_example;
mod markdown;
mod writer;

pub use json_example::{example_object, example_value, pretty_example, pretty_example_object};
pub use markdown::{indent_marker, render_table, render_tree_table};
pub use writer::{doc_file_name, render_class_doc, render_method_doc, write_class_doc, write_method_doc};
