pub(crate) mod builder;
pub(crate) mod color;
pub(crate) mod path;
pub(crate) mod svg;
