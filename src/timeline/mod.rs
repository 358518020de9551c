pub(crate) mod holder;
pub(crate) mod keys;
pub(crate) mod resolver;
