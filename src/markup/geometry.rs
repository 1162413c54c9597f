use super::data_item;
use crate::error;
use crate::prelude::*;

/// `GeometryType` for a coordinate dataset with `columns` components per node
fn geometry_type(columns: usize) -> Option<&'static str> {
    match columns {
        1 => Some("X"),
        2 => Some("XY"),
        3 => Some("XYZ"),
        _ => None,
    }
}

/// Build the `<Geometry>` fragment for a rank 2 coordinate dataset.
///
/// The column count picks the geometry type: 1, 2 and 3 columns become `X`, `XY`
/// and `XYZ`. Any other column count is an `UnsupportedDimensionality` error, as is
/// a rank other than 2 when validation is checked.
pub fn geometry<S: ArrayStore + ?Sized>(
    dataset: Dataset<'_, S>,
    options: &Options,
) -> Result<Fragment, Error> {
    let shape = dataset.shape()?;
    build(&dataset, &shape, options)
}

pub(crate) fn build<S: ArrayStore + ?Sized>(
    dataset: &Dataset<'_, S>,
    shape: &Shape,
    options: &Options,
) -> Result<Fragment, Error> {
    let unsupported = || -> Error {
        error::UnsupportedDimensionality::new(
            dataset.path().to_string(),
            "Geometry",
            "a rank 2 shape with 1, 2 or 3 columns",
            shape.clone(),
        )
        .into()
    };

    if options.validation.is_checked() && shape.rank() != 2 {
        return Err(unsupported());
    }

    let geometry_type = shape
        .columns()
        .and_then(geometry_type)
        .ok_or_else(unsupported)?;

    log::trace!("building Geometry fragment for `{}`", dataset.path());

    Ok(Fragment::element(
        format!("<Geometry GeometryType=\"{}\">", geometry_type),
        [data_item(dataset, shape)],
        "</Geometry>",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(shape: &[usize]) -> MemoryStore {
        let mut store = MemoryStore::new("file.h5");
        store.insert_shape("/coor", shape);
        store
    }

    fn lines(fragment: &Fragment) -> Vec<String> {
        fragment.render(&Options::default())
    }

    #[test]
    fn two_dimensional_coordinates() {
        let store = store_with(&[6, 2]);
        let fragment = geometry(store.dataset("/coor"), &Options::default()).unwrap();

        assert_eq!(
            lines(&fragment),
            vec![
                "<Geometry GeometryType=\"XY\">",
                "    <DataItem Dimensions=\"6 2\" Format=\"HDF\">file.h5:/coor</DataItem>",
                "</Geometry>",
            ]
        );
    }

    #[test]
    fn column_count_picks_type() {
        for (columns, name) in [(1, "X"), (2, "XY"), (3, "XYZ")] {
            let store = store_with(&[4, columns]);
            let fragment = geometry(store.dataset("/coor"), &Options::default()).unwrap();
            assert_eq!(
                fragment.lines()[0].text(),
                format!("<Geometry GeometryType=\"{}\">", name)
            );
        }
    }

    #[test]
    fn four_columns_is_unsupported() {
        let store = store_with(&[4, 4]);
        let err = geometry(store.dataset("/coor"), &Options::default()).unwrap_err();
        assert!(matches!(err, Error::UnsupportedDimensionality(_)));
    }

    #[test]
    fn rank_one_fails_in_both_modes() {
        let store = store_with(&[4]);
        let trusted = Options::new().with_validation(Validation::Trusted);

        assert!(geometry(store.dataset("/coor"), &Options::default()).is_err());
        assert!(geometry(store.dataset("/coor"), &trusted).is_err());
    }

    #[test]
    fn rank_three_only_passes_when_trusted() {
        let store = store_with(&[4, 3, 2]);
        let checked = Options::new().with_validation(Validation::Checked);
        let trusted = Options::new().with_validation(Validation::Trusted);

        assert!(geometry(store.dataset("/coor"), &checked).is_err());

        let fragment = geometry(store.dataset("/coor"), &trusted).unwrap();
        assert!(fragment.lines()[1].text().contains("Dimensions=\"4 3 2\""));
    }

    #[test]
    fn closing_tag_has_no_trailing_characters() {
        let store = store_with(&[6, 3]);
        let fragment = geometry(store.dataset("/coor"), &Options::default()).unwrap();
        assert_eq!(fragment.lines()[2].text(), "</Geometry>");
    }
}
