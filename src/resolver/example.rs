use serde_json::{json, Value};

use super::classify::LiteralKind;

/// Number of repeated element examples used for collections of scalars.
pub const COLLECTION_EXAMPLE_LEN: usize = 3;

/// Deterministic representative value for a scalar-like type.
///
/// The mapping is fixed, never random, so generated documentation and schema
/// uploads are reproducible byte-for-byte.
pub fn synthesize(kind: LiteralKind) -> Value {
    match kind {
        LiteralKind::Boolean => json!(true),
        LiteralKind::Integer => json!(0),
        LiteralKind::Float => json!(0.0),
        LiteralKind::String => json!("string"),
        LiteralKind::Date => json!("2024-01-01"),
        LiteralKind::DateTime => json!("2024-01-01 00:00:00"),
        LiteralKind::Binary => json!("bytes"),
    }
}

/// Example value for an enumerated type: the first declared constant's name.
pub fn enum_example(constants: &[String]) -> Value {
    match constants.first() {
        Some(first) => json!(first),
        None => json!(""),
    }
}
