use crate::markup::attribute_value;
use crate::prelude::*;

/// name used by [`Grid::new`]
pub const DEFAULT_GRID_NAME: &str = "Grid";

/// A named grid holding copies of its child fragments.
///
/// It is written as a temporal collection with a single member grid of the same
/// name, the children nested two levels below the outer element:
///
/// ```text
/// <Grid CollectionType="Temporal" GridType="Collection" Name="Grid">
///     <Grid Name="Grid">
///         <Geometry GeometryType="XY">
///         ...
///     </Grid>
/// </Grid>
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    name: String,
    children: Vec<Fragment>,
}

impl Grid {
    pub fn new<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Fragment>,
    {
        Self::named(DEFAULT_GRID_NAME, children)
    }

    pub fn named<T, I>(name: T, children: I) -> Self
    where
        T: Into<String>,
        I: IntoIterator<Item = Fragment>,
    {
        Self {
            name: name.into(),
            children: children.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn children(&self) -> &[Fragment] {
        &self.children
    }
}

impl Composite for Grid {
    fn fragment(&self) -> Fragment {
        let name = attribute_value(&self.name);

        let member = Fragment::wrap(
            format!("<Grid Name=\"{}\">", name),
            &self.children,
            1,
            "</Grid>",
        );

        Fragment::wrap(
            format!(
                "<Grid CollectionType=\"Temporal\" GridType=\"Collection\" Name=\"{}\">",
                name
            ),
            [&member],
            1,
            "</Grid>",
        )
    }
}

impl From<Grid> for Fragment {
    fn from(grid: Grid) -> Self {
        grid.fragment()
    }
}
