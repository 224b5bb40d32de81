#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub use jw_emit as emit;
pub use jw_reflect as reflect;
