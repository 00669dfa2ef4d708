use super::types::{DocInfo, MemberDecl, TypeRef};

/// Read-only structural queries over declared types.
///
/// Implementations are the boundary to the host type system (a declaration
/// graph file, an AST, an IDE index). All queries must be side-effect-free
/// and safe for concurrent read access; the resolver holds no state between
/// calls.
pub trait TypeProvider {
    /// Whether the type is a mapping (key/value) type.
    fn is_map(&self, ty: &TypeRef) -> bool;

    /// Whether the type is a multi-element collection type.
    fn is_collection(&self, ty: &TypeRef) -> bool;

    /// Whether the type is an enumerated type.
    fn is_enum(&self, ty: &TypeRef) -> bool;

    /// Element type of a collection, or value type of a map.
    ///
    /// `None` for non-container types and for raw containers without a
    /// declared element.
    fn element_type(&self, ty: &TypeRef) -> Option<TypeRef>;

    /// Declared members of a composite type, in declaration order.
    ///
    /// Unknown or opaque types return an empty list; that is not an error.
    fn members(&self, ty: &TypeRef) -> Vec<MemberDecl>;

    /// Declared constants of an enumerated type, in declaration order.
    fn enum_constants(&self, ty: &TypeRef) -> Vec<String>;
}

/// Access to documentation-comment text and annotation data, keyed by the
/// originating member. The resolver never invents descriptions.
pub trait DocReader {
    /// Doc and annotation data for a member of `owner`.
    fn member_doc(&self, owner: &TypeRef, member: &str) -> DocInfo;
}
