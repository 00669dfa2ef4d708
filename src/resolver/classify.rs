use super::types::Category;
use crate::decl::{TypeProvider, TypeRef};

/// Scalar-like kinds that can carry a synthesized example value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Boolean,
    Integer,
    Float,
    String,
    Date,
    DateTime,
    Binary,
}

/// Categorize a type reference.
///
/// Priority order: map, collection, enum, literal allow-list, excluded
/// (void/raw generic placeholder), then `Object` as the default. There is no
/// failure mode: an unrecognized type is an opaque composite with whatever
/// members it exposes, possibly none.
pub fn classify(provider: &dyn TypeProvider, ty: &TypeRef) -> Category {
    if provider.is_map(ty) {
        Category::Map
    } else if provider.is_collection(ty) {
        Category::Collection
    } else if provider.is_enum(ty) {
        Category::Enum
    } else if literal_kind(&ty.label).is_some() {
        Category::Literal
    } else if is_excluded(&ty.label) {
        Category::Excluded
    } else {
        Category::Object
    }
}

/// Map a type label against the fixed allow-list of scalar-like types.
pub fn literal_kind(label: &str) -> Option<LiteralKind> {
    let kind = match label.to_ascii_lowercase().as_str() {
        "bool" | "boolean" => LiteralKind::Boolean,
        "i8" | "i16" | "i32" | "i64" | "u8" | "u16" | "u32" | "u64" | "isize" | "usize"
        | "byte" | "short" | "int" | "integer" | "long" | "biginteger" => LiteralKind::Integer,
        "f32" | "f64" | "float" | "double" | "decimal" | "bigdecimal" | "number" => {
            LiteralKind::Float
        }
        "char" | "str" | "string" | "text" => LiteralKind::String,
        "date" | "localdate" => LiteralKind::Date,
        "datetime" | "localdatetime" | "timestamp" | "instant" | "time" | "localtime" => {
            LiteralKind::DateTime
        }
        "binary" | "bytes" | "byte[]" => LiteralKind::Binary,
        _ => return None,
    };
    Some(kind)
}

/// Void/unit returns and raw generic placeholders (`T`, `E`) are excluded
/// from field trees entirely.
fn is_excluded(label: &str) -> bool {
    matches!(label, "void" | "Void" | "unit" | "()")
        || (label.len() == 1 && label.chars().all(|c| c.is_ascii_uppercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::TypeGraph;

    fn graph(yaml: &str) -> TypeGraph {
        TypeGraph::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_literal_allow_list() {
        assert_eq!(literal_kind("long"), Some(LiteralKind::Integer));
        assert_eq!(literal_kind("Boolean"), Some(LiteralKind::Boolean));
        assert_eq!(literal_kind("BigDecimal"), Some(LiteralKind::Float));
        assert_eq!(literal_kind("String"), Some(LiteralKind::String));
        assert_eq!(literal_kind("LocalDateTime"), Some(LiteralKind::DateTime));
        assert_eq!(literal_kind("Item"), None);
    }

    #[test]
    fn test_priority_map_over_collection() {
        let g = graph("types: {}");
        // A map is a map even though its label also names a container.
        assert_eq!(
            classify(&g, &crate::decl::TypeRef::named("Map<String, List<long>>")),
            Category::Map
        );
    }

    #[test]
    fn test_unknown_defaults_to_object() {
        let g = graph("types: {}");
        assert_eq!(
            classify(&g, &crate::decl::TypeRef::named("Mystery")),
            Category::Object
        );
    }

    #[test]
    fn test_void_and_placeholder_excluded() {
        let g = graph("types: {}");
        assert_eq!(classify(&g, &crate::decl::TypeRef::named("void")), Category::Excluded);
        assert_eq!(classify(&g, &crate::decl::TypeRef::named("T")), Category::Excluded);
    }

    #[test]
    fn test_enum_detection() {
        let g = graph("types:\n  Color:\n    constants: [RED, GREEN]\n");
        assert_eq!(
            classify(&g, &crate::decl::TypeRef::named("Color")),
            Category::Enum
        );
    }
}
