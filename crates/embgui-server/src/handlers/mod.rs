//! HTTP request handlers.

pub(crate) mod pages;
pub(crate) mod stylesheet;
