pub(crate) mod interpolator;
