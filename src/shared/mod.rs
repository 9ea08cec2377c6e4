pub(crate) mod serde_util;
