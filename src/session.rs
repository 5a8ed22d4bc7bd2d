use crate::config::PlotterConfig;
use crate::error::Error;
use crate::expr::Expr;
use crate::plot::{Plot, Renderer};
use crate::range::{Bound, PlotRange};
use tracing::{debug, info};

/// User interactions a `Plotter` reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The minimum value of `x` was edited
    MinChanged(f64),
    /// The maximum value of `x` was edited
    MaxChanged(f64),
    /// The user asked to plot the current expression
    Submit,
}

/// A plotting session: the expression being edited, the range of `x`, and
/// the last successful plot.
///
/// Every plot attempt is atomic: the last plot is only replaced once the new
/// one is evaluated and rendered.
///
/// # Examples
///
/// ```
/// # use fnplot::{Error, Event, Plot, Plotter, PlotterConfig, Renderer};
/// struct Discard;
///
/// impl Renderer for Discard {
///     fn render(&mut self, _: &Plot) -> Result<(), Error> {
///         Ok(())
///     }
/// }
///
/// let mut plotter = Plotter::new(&PlotterConfig::default(), Discard).unwrap();
/// plotter.set_expression("x^2");
/// plotter.handle(Event::Submit).unwrap();
/// assert_eq!(plotter.current().unwrap().ys.len(), 50);
/// ```
pub struct Plotter<R> {
    expression: String,
    range: PlotRange,
    samples: usize,
    renderer: R,
    current: Option<Plot>,
}

impl<R: Renderer> Plotter<R> {
    /// Start a session with the settings of `config`, drawing with `renderer`
    pub fn new(config: &PlotterConfig, renderer: R) -> Result<Self, Error> {
        let range = config.validate()?;
        Ok(Self {
            expression: String::new(),
            range,
            samples: config.samples,
            renderer,
            current: None,
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Replace the expression text. Nothing is checked until it is submitted.
    pub fn set_expression(&mut self, expression: impl Into<String>) {
        self.expression = expression.into();
    }

    pub fn range(&self) -> PlotRange {
        self.range
    }

    /// The last successful plot, if any
    pub fn current(&self) -> Option<&Plot> {
        self.current.as_ref()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// React to a user interaction.
    ///
    /// # Errors
    ///
    /// Range edits that had to be corrected fail with a `Range` error and do
    /// not plot anything. Submitting fails when the expression can not be
    /// parsed, evaluated or rendered.
    pub fn handle(&mut self, event: Event) -> Result<(), Error> {
        debug!(?event, "handling event");
        match event {
            Event::MinChanged(value) => self.set_bound(Bound::Min, value),
            Event::MaxChanged(value) => self.set_bound(Bound::Max, value),
            Event::Submit => self.submit().map(|_| ()),
        }
    }

    /// Edit one bound of the range
    pub fn set_bound(&mut self, bound: Bound, value: f64) -> Result<(), Error> {
        self.range.set(bound, value).map_err(Error::from)
    }

    /// Sample the range, evaluate the expression on it and render the result.
    pub fn submit(&mut self) -> Result<&Plot, Error> {
        let xs = self.range.grid(self.samples)?;
        let ys = Expr::parse(&self.expression)?.eval_all(&xs)?;
        let plot = Plot {
            expression: self.expression.clone(),
            xs,
            ys,
        };
        self.renderer.render(&plot)?;
        info!(
            expression = %self.expression,
            min = self.range.min(),
            max = self.range.max(),
            "plotted expression"
        );
        Ok(&*self.current.insert(plot))
    }
}

#[cfg(test)]
mod tests {
    use super::{Event, Plotter};
    use crate::config::PlotterConfig;
    use crate::error::{Error, RangeError};
    use crate::plot::{Plot, Renderer};

    /// Keeps every rendered plot, and fails on demand
    #[derive(Default)]
    struct Recorder {
        rendered: Vec<Plot>,
        fail: bool,
    }

    impl Renderer for Recorder {
        fn render(&mut self, plot: &Plot) -> Result<(), Error> {
            if self.fail {
                return Err(Error::RenderError("backend unavailable".into()));
            }
            self.rendered.push(plot.clone());
            Ok(())
        }
    }

    fn plotter(samples: usize) -> Plotter<Recorder> {
        let config = PlotterConfig {
            samples,
            ..PlotterConfig::default()
        };
        Plotter::new(&config, Recorder::default()).unwrap()
    }

    #[test]
    fn submit_renders() {
        let mut plotter = plotter(5);
        plotter.set_expression("2*x");
        assert_eq!(plotter.handle(Event::Submit), Ok(()));

        let plot = plotter.current().unwrap();
        assert_eq!(plot.xs, [0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(plot.ys, [0.0, 5.0, 10.0, 15.0, 20.0]);
        assert_eq!(plotter.renderer().rendered.len(), 1);
    }

    #[test]
    fn constant_expression() {
        let mut plotter = plotter(5);
        plotter.set_expression("5");
        assert_eq!(plotter.submit().unwrap().ys, [5.0; 5]);
    }

    #[test]
    fn min_edit_is_corrected() {
        let mut plotter = plotter(5);
        plotter.set_expression("x");
        plotter.submit().unwrap();

        plotter.set_expression("x + 1");
        assert_eq!(
            plotter.handle(Event::MinChanged(12.0)),
            Err(Error::Range(RangeError::MinNotBelowMax))
        );
        assert_eq!(plotter.range().min(), 12.0);
        assert!(plotter.range().max() > 12.0);
        // nothing plotted, nothing lost
        assert_eq!(plotter.expression(), "x + 1");
        assert_eq!(plotter.current().unwrap().expression, "x");
        assert_eq!(plotter.renderer().rendered.len(), 1);
    }

    #[test]
    fn max_edit_is_corrected() {
        let mut plotter = plotter(5);
        plotter.handle(Event::MinChanged(3.0)).unwrap();
        let err = plotter.handle(Event::MaxChanged(-2.0)).unwrap_err();
        assert_eq!(err.to_string(), "'max x' should be greater than 'min x'.");
        assert_eq!((plotter.range().min(), plotter.range().max()), (3.0, 4.0));
        assert!(plotter.current().is_none());
        assert!(plotter.renderer().rendered.is_empty());
    }

    #[test]
    fn failures_keep_previous_plot() {
        let mut plotter = plotter(11);
        plotter.set_expression("sqrt(x)");
        plotter.submit().unwrap();
        let previous = plotter.current().cloned();

        plotter.handle(Event::MinChanged(-5.0)).unwrap();
        match plotter.handle(Event::Submit) {
            Err(Error::EvalError(message)) => assert!(message.contains("sqrt of negative value")),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(plotter.current().cloned(), previous);

        plotter.set_expression("y^2");
        assert_eq!(
            plotter.handle(Event::Submit),
            Err(Error::Forbidden("y".into()))
        );
        plotter.set_expression("(x");
        assert!(plotter.handle(Event::Submit).is_err());
        plotter.set_expression("");
        assert!(plotter.handle(Event::Submit).is_err());

        assert_eq!(plotter.current().cloned(), previous);
        assert_eq!(plotter.renderer().rendered.len(), 1);
    }

    #[test]
    fn render_failure_keeps_previous_plot() {
        let mut plotter = plotter(3);
        plotter.set_expression("x");
        plotter.submit().unwrap();

        plotter.renderer.fail = true;
        plotter.set_expression("x^2");
        assert_eq!(
            plotter.handle(Event::Submit),
            Err(Error::RenderError("backend unavailable".into()))
        );
        assert_eq!(plotter.current().unwrap().expression, "x");
    }
}
