pub(crate) mod de;
pub(crate) mod float_ext;
