pub(crate) mod ease;
pub(crate) mod playback;
pub(crate) mod unit;
pub(crate) mod value;
