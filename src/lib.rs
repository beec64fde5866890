//! Convert comma-separated value files to tab-separated value files,
//! flattening any newlines embedded inside fields.

pub mod convert;
