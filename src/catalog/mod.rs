//! Upload of endpoint schemas to a YApi-compatible api-catalog service.
//!
//! The payload mirrors the catalog's flat interface schema: request
//! parameters split by binding into query, form, path and JSON-body groups,
//! with the required flag encoded as `"1"`/`"0"` on the wire. Every response
//! arrives in an `{errcode, errmsg, data}` envelope; a non-zero code is
//! surfaced as an error with the remote message.

mod builder;
mod client;
mod types;

pub use builder::{build_interface, describe, interface_payload};
pub use client::{CatalogClient, HttpCatalogClient};
pub use types::{
    required_flag, CatalogResponse, CategoryInfo, FormParam, Header, InterfacePayload, PathParam,
    ProjectInfo, QueryParam,
};
