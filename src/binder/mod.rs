//! Binding of comma-separated scalar lists from request paths and queries.
//!
//! The parsing lives in [`delimited`] and has no framework dependency. The
//! [`extract`] module plugs it into axum through serde, so a handler asks for
//! `ApiPath<(Uuid, Delimited<Uuid>)>` the same way it would ask for any other
//! path parameter.

pub mod delimited;
pub mod error;
pub mod extract;

pub use delimited::{parse_delimited, parse_delimited_with, parse_segment, DELIMITER};
pub use error::BindError;
pub use extract::{ApiPath, ApiQuery, Delimited};
