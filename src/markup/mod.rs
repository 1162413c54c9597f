//! # Fragment builders
//!
//! Each builder turns one dataset of an [`ArrayStore`](crate::ArrayStore) into a
//! [`Fragment`](crate::Fragment): the element describing the dataset's role, holding a
//! single `DataItem` that points back into the store. The shape of the dataset is
//! queried once per call and decides the attribute values written into the markup.
//!
//! ```text
//! <Geometry GeometryType="XY">
//!     <DataItem Dimensions="6 2" Format="HDF">file.h5:/coor</DataItem>
//! </Geometry>
//! ```
//!
//! [`structured`] and [`unstructured`] combine a geometry and a topology fragment into
//! the pair of siblings that make up a mesh.

mod attribute;
mod geometry;
mod mesh;
mod topology;

pub use attribute::attribute;
pub use geometry::geometry;
pub use mesh::{structured, unstructured};
pub use topology::topology;

use crate::fragment::Line;
use crate::prelude::*;

use quick_xml::escape::escape;

/// the one line every builder nests inside its element
pub(crate) fn data_item<S: ArrayStore + ?Sized>(dataset: &Dataset<'_, S>, shape: &Shape) -> Line {
    let reference = dataset.reference();
    Line::new(
        1,
        format!(
            "<DataItem Dimensions=\"{}\" Format=\"{}\">{}</DataItem>",
            shape,
            dataset.store().format(),
            escape(&reference)
        ),
    )
}

/// escape a caller supplied string for use inside a double quoted attribute value
pub(crate) fn attribute_value(value: &str) -> std::borrow::Cow<'_, str> {
    escape(value)
}
