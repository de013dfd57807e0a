#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use fs_reflect as reflect;
pub use fs_serializer as serializer;
pub use fs_utils as utils;

pub use fs_reflect::{Record, ToValue, Value};
pub use fs_serializer::{FieldMap, FieldSerializer, SerializeError, SerializeFields};
