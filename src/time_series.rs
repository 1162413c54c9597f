//! # Time series
//!
//! A [`TimeSeries`] collects one grid per time step and is the only value in the
//! crate that changes across calls. Steps are appended in order and never removed.
//!
//! Every append advances an internal step counter by one. When a caller leaves out
//! the step name or time, the counter value *before* the append supplies them: the
//! third step pushed without either is named `Increment 2` at time `2`. Supplying a
//! name or time does not affect the counter, so default names always match the
//! position of the step in the series.
//!
//! A series has a single owner and is not meant to be appended to from several
//! threads; wrap it in a lock if that is needed.

use crate::fragment::Line;
use crate::markup::attribute_value;
use crate::prelude::*;

/// name used by [`TimeSeries::new`]
pub const DEFAULT_SERIES_NAME: &str = "TimeSeries";

#[derive(Debug, Clone, PartialEq, Eq)]
/// one appended time step
pub struct Step {
    name: String,
    time: String,
    children: Vec<Fragment>,
}

impl Step {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// the time as written into `<Time Value=..>`
    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn children(&self) -> &[Fragment] {
        &self.children
    }

    fn fragment(&self) -> Fragment {
        let time = Line::new(
            1,
            format!("<Time Value=\"{}\"/>", attribute_value(&self.time)),
        );
        let children = self
            .children
            .iter()
            .flat_map(|child| child.indented(1).lines().to_vec());

        Fragment::element(
            format!("<Grid Name=\"{}\">", attribute_value(&self.name)),
            std::iter::once(time).chain(children),
            "</Grid>",
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// An append-only, ordered collection of named and timed grids
///
/// ```
/// use xdmf::{Builder, ElementType, MemoryStore, TimeSeries};
///
/// let mut store = MemoryStore::new("run.h5");
/// store
///     .insert_shape("/coor", [6, 2])
///     .insert_shape("/conn", [2, 4])
///     .insert_shape("/disp/0", [6, 2])
///     .insert_shape("/disp/1", [6, 2]);
///
/// let xdmf = Builder::new(&store);
/// let mut series = TimeSeries::new();
///
/// for path in ["/disp/0", "/disp/1"] {
///     series.push_back([
///         xdmf.unstructured("/coor", "/conn", ElementType::Quadrilateral)?,
///         xdmf.attribute_named(path, xdmf::AttributeCenter::Node, "displacement")?,
///     ]);
/// }
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.steps()[1].name(), "Increment 1");
///
/// let document = xdmf.write(&series);
/// assert!(document.contains("<Time Value=\"1\"/>"));
/// # Ok::<(), xdmf::Error>(())
/// ```
pub struct TimeSeries {
    name: String,
    steps: Vec<Step>,
    n: usize,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::named(DEFAULT_SERIES_NAME)
    }

    pub fn named<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
            n: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// number of steps appended so far, which is also the next default step index
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// append a step with an explicit name and time
    pub fn push_back_named<N, T, I>(&mut self, name: N, time: T, children: I)
    where
        N: Into<String>,
        T: TimeValue,
        I: IntoIterator<Item = Fragment>,
    {
        let step = Step {
            name: name.into(),
            time: time.time_string(),
            children: children.into_iter().collect(),
        };

        log::trace!(
            "time series `{}`: step {} `{}` at t={}",
            self.name,
            self.n,
            step.name,
            step.time
        );

        self.steps.push(step);
        self.n += 1;
    }

    /// append a step at `time`, named `Increment {n}`
    pub fn push_back_at<T, I>(&mut self, time: T, children: I)
    where
        T: TimeValue,
        I: IntoIterator<Item = Fragment>,
    {
        let name = self.default_name();
        self.push_back_named(name, time, children)
    }

    /// append a step named `Increment {n}` at time `n`
    pub fn push_back<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = Fragment>,
    {
        let name = self.default_name();
        let time = self.n;
        self.push_back_named(name, time, children)
    }

    fn default_name(&self) -> String {
        format!("Increment {}", self.n)
    }

    /// every step so far, wrapped in one temporal collection
    pub fn get(&self) -> Fragment {
        let steps = self.steps.iter().map(Step::fragment).collect::<Vec<_>>();

        Fragment::wrap(
            format!(
                "<Grid CollectionType=\"Temporal\" GridType=\"Collection\" Name=\"{}\">",
                attribute_value(&self.name)
            ),
            &steps,
            1,
            "</Grid>",
        )
    }
}

impl Default for TimeSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl Composite for TimeSeries {
    fn fragment(&self) -> Fragment {
        self.get()
    }
}

impl From<TimeSeries> for Fragment {
    fn from(series: TimeSeries) -> Self {
        series.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh() -> Fragment {
        let mut store = MemoryStore::new("file.h5");
        store
            .insert_shape("/coor", [6, 2])
            .insert_shape("/conn", [2, 4]);

        Builder::new(&store)
            .unstructured("/coor", "/conn", ElementType::Quadrilateral)
            .unwrap()
    }

    #[test]
    fn default_names_and_times() {
        let mut series = TimeSeries::new();
        for _ in 0..3 {
            series.push_back([mesh()]);
        }

        for (i, step) in series.steps().iter().enumerate() {
            assert_eq!(step.name(), format!("Increment {}", i));
            assert_eq!(step.time(), i.to_string());
        }
    }

    #[test]
    fn explicit_values_do_not_move_the_counter() {
        let mut series = TimeSeries::named("run");
        series.push_back_named("start", 0.5, [mesh()]);
        series.push_back_at(1.25, [mesh()]);
        series.push_back([mesh()]);

        let steps = series.steps();
        assert_eq!(steps[0].name(), "start");
        assert_eq!(steps[0].time(), "0.5");
        assert_eq!(steps[1].name(), "Increment 1");
        assert_eq!(steps[1].time(), "1.25");
        assert_eq!(steps[2].name(), "Increment 2");
        assert_eq!(steps[2].time(), "2");
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn step_layout() {
        let child = mesh();
        let mut series = TimeSeries::named("run");
        series.push_back([child.clone()]);

        let rendered = series.get().render(&Options::default());

        assert_eq!(
            rendered[0],
            "<Grid CollectionType=\"Temporal\" GridType=\"Collection\" Name=\"run\">"
        );
        assert_eq!(rendered[1], "    <Grid Name=\"Increment 0\">");
        assert_eq!(rendered[2], "        <Time Value=\"0\"/>");
        assert_eq!(rendered[3], "        <Geometry GeometryType=\"XY\">");
        assert_eq!(rendered[rendered.len() - 2], "    </Grid>");
        assert_eq!(rendered[rendered.len() - 1], "</Grid>");

        // outer open + step open + time + child + step close + outer close
        assert_eq!(rendered.len(), child.len() + 5);
    }

    #[test]
    fn get_does_not_consume() {
        let mut series = TimeSeries::new();
        series.push_back([mesh()]);
        assert_eq!(series.get(), series.get());

        let snapshot = series.clone();
        series.push_back([mesh()]);
        assert_eq!(Fragment::from(snapshot).len() + mesh().len() + 3, series.get().len());
    }

    #[test]
    fn empty_series() {
        let series = TimeSeries::default();
        assert!(series.is_empty());
        assert_eq!(series.get().len(), 2);
        assert_eq!(series.name(), "TimeSeries");
    }
}
