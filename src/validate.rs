//! shape contracts checked before any markup is produced
use crate::error;
use crate::prelude::*;

/// Check `shape` against what `element_type` requires of its connectivity dataset.
///
/// `Polyvertex` needs a rank 1 shape (one point index per row). Every other element
/// type needs a rank 2 shape whose column count is the element's node count.
pub fn validate(path: &str, shape: &Shape, element_type: ElementType) -> Result<(), Error> {
    let valid = match element_type.node_count() {
        None => shape.rank() == 1,
        Some(columns) => shape.rank() == 2 && shape.columns() == Some(columns),
    };

    if valid {
        Ok(())
    } else {
        Err(error::ShapeMismatch::new(
            path.to_string(),
            element_type,
            element_type.layout(),
            shape.clone(),
        )
        .into())
    }
}

/// Check that a geometry and a topology dataset describe the same number of rows.
pub fn validate_rows(
    geometry_path: &str,
    geometry: &Shape,
    topology_path: &str,
    topology: &Shape,
) -> Result<(), Error> {
    if geometry.rows() == topology.rows() {
        Ok(())
    } else {
        Err(error::RowCountMismatch::new(
            geometry_path.to_string(),
            geometry.rows(),
            topology_path.to_string(),
            topology.rows(),
        )
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polyvertex_wants_rank_one() {
        assert!(validate("/conn", &Shape::from([6]), ElementType::Polyvertex).is_ok());
        assert!(validate("/conn", &Shape::from([6, 1]), ElementType::Polyvertex).is_err());
        assert!(validate("/conn", &Shape::default(), ElementType::Polyvertex).is_err());
    }

    #[test]
    fn cells_want_node_count_columns() {
        assert!(validate("/conn", &Shape::from([2, 3]), ElementType::Triangle).is_ok());
        assert!(validate("/conn", &Shape::from([2, 4]), ElementType::Quadrilateral).is_ok());
        assert!(validate("/conn", &Shape::from([2, 8]), ElementType::Hexahedron).is_ok());

        assert!(validate("/conn", &Shape::from([2, 4]), ElementType::Triangle).is_err());
        assert!(validate("/conn", &Shape::from([8]), ElementType::Hexahedron).is_err());
        assert!(validate("/conn", &Shape::from([2, 4, 1]), ElementType::Quadrilateral).is_err());
    }

    #[test]
    fn mismatch_carries_expected_and_actual() {
        let err = validate("/conn", &Shape::from([2, 3]), ElementType::Quadrilateral).unwrap_err();

        match err {
            Error::ShapeMismatch(inner) => {
                assert_eq!(inner.path, "/conn");
                assert_eq!(inner.expected, error::Layout::Columns(4));
                assert_eq!(inner.actual, Shape::from([2, 3]));
            }
            other => panic!("expected ShapeMismatch, got {:?}", other),
        }
    }

    #[test]
    fn rows_must_agree() {
        let coor = Shape::from([6, 2]);
        assert!(validate_rows("/coor", &coor, "/conn", &Shape::from([6])).is_ok());

        let err = validate_rows("/coor", &coor, "/conn", &Shape::from([5])).unwrap_err();
        assert!(matches!(err, Error::RowCountMismatch(_)));
    }
}
