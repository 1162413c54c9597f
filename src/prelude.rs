//! Common traits and types that are useful for working with `xdmf`
#![allow(unused_imports)]

pub use crate::builder::Builder;
pub use crate::config::{Options, Validation};
pub use crate::element::{AttributeCenter, DataFormat, ElementType};
pub use crate::fragment::Fragment;
pub use crate::grid::Grid;
pub use crate::shape::Shape;
pub use crate::store::{Dataset, MemoryStore};
pub use crate::time_series::TimeSeries;
pub use crate::traits::{ArrayStore, Composite, TimeValue};

pub(crate) use crate::Error;

pub(crate) use derive_more::{Constructor, Display};
