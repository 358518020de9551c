pub(crate) mod backend;
pub(crate) mod cpu;
pub(crate) mod fills;
pub(crate) mod hand;
pub(crate) mod recording;
pub(crate) mod strokes;
