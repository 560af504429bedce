//! Helper functions for views

mod url;

pub use url::*;
