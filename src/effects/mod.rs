pub(crate) mod background;
pub(crate) mod field;
pub(crate) mod geometric;
pub(crate) mod matrix;
pub(crate) mod mount;
pub(crate) mod neural;
pub(crate) mod particles;
pub(crate) mod palette;
pub(crate) mod waves;
