//! Presentation glue: renders Catalog query results, never touches the
//! index internals.

pub mod console;
