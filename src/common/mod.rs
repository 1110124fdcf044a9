mod format;
mod fs;

pub(crate) use format::*;
pub(crate) use fs::*;
