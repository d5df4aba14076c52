pub(crate) mod raster;
pub(crate) mod sink;
pub(crate) mod svg;
