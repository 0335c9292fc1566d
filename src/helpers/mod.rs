pub(crate) mod json;
pub mod signature;

pub(crate) use json::*;
