pub(crate) mod bitstream;
