//! detail types carried by each [`Error`](crate::Error) variant
//!
//! every message names the dataset it concerns, what was expected of it, and what
//! the store actually reported.

use crate::prelude::*;

#[derive(Display, Debug, Clone, PartialEq, Eq)]
/// what an element type requires of its connectivity dataset
pub enum Layout {
    #[display(fmt = "a rank 1 shape")]
    Rank1,
    #[display(fmt = "a rank 2 shape with {_0} columns")]
    Columns(usize),
}

#[derive(Display, Debug, Constructor, Clone, PartialEq, Eq)]
#[display(
    fmt = "shape mismatch for dataset `{path}`: {element_type} topology expects {expected}, got shape [{actual}]"
)]
pub struct ShapeMismatch {
    pub path: String,
    pub element_type: ElementType,
    pub expected: Layout,
    pub actual: Shape,
}

#[derive(Display, Debug, Constructor, Clone, PartialEq, Eq)]
#[display(
    fmt = "unsupported dimensionality for {element} dataset `{path}`: expected {expected}, got shape [{actual}]"
)]
pub struct UnsupportedDimensionality {
    pub path: String,
    pub element: &'static str,
    pub expected: &'static str,
    pub actual: Shape,
}

#[derive(Display, Debug, Constructor, Clone, PartialEq, Eq)]
#[display(
    fmt = "row count mismatch: geometry `{geometry_path}` has {geometry_rows} rows but topology `{topology_path}` has {topology_rows}"
)]
pub struct RowCountMismatch {
    pub geometry_path: String,
    pub geometry_rows: usize,
    pub topology_path: String,
    pub topology_rows: usize,
}

#[derive(Display, Debug, Constructor, Clone, PartialEq, Eq)]
#[display(fmt = "unknown {type_name} variant `{value}`")]
pub struct UnknownVariant {
    pub type_name: &'static str,
    pub value: String,
}

#[derive(Display, Debug, Constructor, Clone, PartialEq, Eq)]
#[display(fmt = "dataset `{path}` does not exist in store `{store}`")]
pub struct MissingDataset {
    pub store: String,
    pub path: String,
}

#[derive(Display, Debug, Constructor)]
#[display(fmt = "store query for `{path}` failed: {source}")]
pub struct StoreQuery {
    pub path: String,
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

#[derive(Display, Debug, Constructor, Clone, PartialEq, Eq)]
#[display(fmt = "malformed xdmf document: {reason}")]
pub struct MalformedDocument {
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_names_everything() {
        let err = ShapeMismatch::new(
            "/conn".into(),
            ElementType::Quadrilateral,
            Layout::Columns(4),
            Shape::from(vec![2, 3]),
        );

        assert_eq!(
            err.to_string(),
            "shape mismatch for dataset `/conn`: Quadrilateral topology expects a rank 2 shape with 4 columns, got shape [2 3]"
        );
    }

    #[test]
    fn row_count_message() {
        let err = RowCountMismatch::new("/coor".into(), 6, "/conn".into(), 5);
        assert!(err.to_string().contains("`/coor` has 6 rows"));
        assert!(err.to_string().contains("`/conn` has 5"));
    }
}
