//! Diagnostics produced while parsing.
//!
//! Every syntax problem becomes an [`errors::Error`] carrying the source
//! position it was found at. Errors are recorded by the parser and handed
//! back next to the (possibly partial) tree, never raised.

pub mod errors;
