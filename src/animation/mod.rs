pub(crate) mod ease;
pub(crate) mod interpolate;
pub(crate) mod ops;
pub(crate) mod particles;
pub(crate) mod spring;
