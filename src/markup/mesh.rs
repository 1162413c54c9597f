use super::{geometry, topology};
use crate::prelude::*;
use crate::validate::validate_rows;

/// Geometry followed by a `Polyvertex` topology: a point cloud.
///
/// The topology dataset lists one point index per row, so with checked validation
/// both datasets must have the same number of rows (`RowCountMismatch` otherwise).
pub fn structured<S: ArrayStore + ?Sized>(
    geometry: Dataset<'_, S>,
    topology: Dataset<'_, S>,
    options: &Options,
) -> Result<Fragment, Error> {
    let geometry_shape = geometry.shape()?;
    let topology_shape = topology.shape()?;

    if options.validation.is_checked() {
        validate_rows(
            geometry.path(),
            &geometry_shape,
            topology.path(),
            &topology_shape,
        )?;
    }

    let points = geometry::build(&geometry, &geometry_shape, options)?;
    let cells = topology::build(
        &topology,
        &topology_shape,
        ElementType::Polyvertex,
        options,
    )?;

    Ok(points.concat(cells))
}

/// Geometry followed by a topology of cells of `element_type`.
///
/// Unlike [`structured`] the row counts of the two datasets are not compared: the
/// connectivity has one row per cell, not per node, and whether its indices stay in
/// range of the coordinates is left to the caller.
pub fn unstructured<S: ArrayStore + ?Sized>(
    geometry: Dataset<'_, S>,
    topology: Dataset<'_, S>,
    element_type: ElementType,
    options: &Options,
) -> Result<Fragment, Error> {
    let points = geometry::geometry(geometry, options)?;
    let cells = topology::topology(topology, element_type, options)?;

    Ok(points.concat(cells))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new("file.h5");
        store
            .insert_shape("/coor", [6, 2])
            .insert_shape("/points", [6])
            .insert_shape("/short", [5])
            .insert_shape("/conn", [2, 4]);
        store
    }

    #[test]
    fn structured_mesh() {
        let store = store();
        let fragment = structured(
            store.dataset("/coor"),
            store.dataset("/points"),
            &Options::default(),
        )
        .unwrap();

        assert_eq!(
            fragment.render(&Options::default()),
            vec![
                "<Geometry GeometryType=\"XY\">",
                "    <DataItem Dimensions=\"6 2\" Format=\"HDF\">file.h5:/coor</DataItem>",
                "</Geometry>",
                "<Topology NumberOfElements=\"6\" TopologyType=\"Polyvertex\">",
                "    <DataItem Dimensions=\"6\" Format=\"HDF\">file.h5:/points</DataItem>",
                "</Topology>",
            ]
        );
    }

    #[test]
    fn structured_rejects_row_mismatch() {
        let store = store();
        let err = structured(
            store.dataset("/coor"),
            store.dataset("/short"),
            &Options::default(),
        )
        .unwrap_err();

        match err {
            Error::RowCountMismatch(inner) => {
                assert_eq!(inner.geometry_rows, 6);
                assert_eq!(inner.topology_rows, 5);
            }
            other => panic!("expected RowCountMismatch, got {:?}", other),
        }
    }

    #[test]
    fn unstructured_mesh() {
        let store = store();
        let fragment = unstructured(
            store.dataset("/coor"),
            store.dataset("/conn"),
            ElementType::Quadrilateral,
            &Options::default(),
        )
        .unwrap();

        assert_eq!(fragment.len(), 6);
        assert_eq!(
            fragment.lines()[3].text(),
            "<Topology NumberOfElements=\"2\" TopologyType=\"Quadrilateral\">"
        );
    }

    #[test]
    fn unstructured_does_not_compare_row_counts() {
        // 6 nodes, 5 polyvertex rows: structured refuses this, unstructured builds it
        let store = store();
        let fragment = unstructured(
            store.dataset("/coor"),
            store.dataset("/short"),
            ElementType::Polyvertex,
            &Options::default(),
        )
        .unwrap();

        assert_eq!(
            fragment.lines()[3].text(),
            "<Topology NumberOfElements=\"5\" TopologyType=\"Polyvertex\">"
        );
    }
}
