//! fnplot command-line interface.
//!
//! Plots one expression to an image, or, without an expression, reads
//! commands from stdin and re-plots the image after each of them.

use anyhow::Context;
use clap::Parser;
use fnplot::{
    Bound, ChartRenderer, Error, Event, Plotter, PlotterConfig, RangeError, Renderer,
    DEFAULT_HEIGHT, DEFAULT_SAMPLES, DEFAULT_WIDTH, PLACEHOLDER,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// fnplot application
#[derive(Parser)]
#[command(name = "fnplot")]
#[command(about = "Plot a function of x over a range", long_about = None)]
#[command(version)]
struct Cli {
    /// Expression of x to plot, e.g. "5*x^3 + 2*x". Starts an interactive
    /// session when missing.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Minimum value of x
    #[arg(long, env = "FNPLOT_MIN", default_value_t = 0.0, allow_negative_numbers = true)]
    min: f64,

    /// Maximum value of x
    #[arg(long, env = "FNPLOT_MAX", default_value_t = 10.0, allow_negative_numbers = true)]
    max: f64,

    /// Number of sampled values of x
    #[arg(long, env = "FNPLOT_SAMPLES", default_value_t = DEFAULT_SAMPLES)]
    samples: usize,

    /// Output image
    #[arg(short, long, env = "FNPLOT_OUTPUT", default_value = "plot.png")]
    output: PathBuf,

    /// Image width, in pixels
    #[arg(long, env = "FNPLOT_WIDTH", default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Image height, in pixels
    #[arg(long, env = "FNPLOT_HEIGHT", default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// What the interactive session should do after a command
#[derive(Debug, Clone, Copy, PartialEq)]
enum Flow {
    Continue,
    /// The command drew a new plot
    Plotted,
    Quit,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(io::stderr))
        .init();

    let config = PlotterConfig {
        min: cli.min,
        max: cli.max,
        samples: cli.samples,
        width: cli.width,
        height: cli.height,
    };
    let renderer = ChartRenderer::new(&cli.output, config.width, config.height);
    let mut plotter = match Plotter::new(&config, renderer.clone()) {
        Err(Error::Range(RangeError::Inverted { .. })) => {
            // start from the default range, and edit the bounds like a user
            // would, so that they get corrected instead of rejected
            let defaults = PlotterConfig {
                min: PlotterConfig::default().min,
                max: PlotterConfig::default().max,
                ..config
            };
            let mut plotter = Plotter::new(&defaults, renderer).context("invalid settings")?;
            for event in [Event::MinChanged(cli.min), Event::MaxChanged(cli.max)] {
                if let Err(err) = plotter.handle(event) {
                    warn!("{}", err);
                }
            }
            plotter
        }
        other => other.context("invalid settings")?,
    };

    match cli.expression {
        Some(expression) => {
            plotter.set_expression(expression);
            plotter
                .handle(Event::Submit)
                .with_context(|| format!("can not plot '{}'", plotter.expression()))?;
            println!("{}", plotter.renderer().path().display());
            Ok(())
        }
        None => interactive(&mut plotter),
    }
}

fn interactive(plotter: &mut Plotter<ChartRenderer>) -> anyhow::Result<()> {
    println!("f(x) = ?  ({}; type 'help' for commands)", PLACEHOLDER);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };
        match run_command(plotter, line.trim()) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Plotted) => println!("{}", plotter.renderer().path().display()),
            Ok(Flow::Quit) => return Ok(()),
            Err(err) => eprintln!("Error!! {}", err),
        }
    }
}

fn run_command<R: Renderer>(plotter: &mut Plotter<R>, line: &str) -> Result<Flow, Error> {
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };
    debug!(command, argument, "command");

    match command {
        "" => {}
        "quit" | "exit" => return Ok(Flow::Quit),
        "help" => print_help(),
        "range" => {
            let range = plotter.range();
            println!("x in [{}, {}]", range.min(), range.max());
        }
        "min" | "max" => {
            let bound = if command == "min" { Bound::Min } else { Bound::Max };
            let value = argument.parse().map_err(|_| {
                Error::ParseError(format!("invalid value for {}: '{}'", command, argument))
            })?;
            plotter.set_bound(bound, value)?;
            // an expression that was never plotted is not plotted by a range edit
            if plotter.current().is_some() {
                plotter.handle(Event::Submit)?;
                return Ok(Flow::Plotted);
            }
        }
        "plot" => {
            if !argument.is_empty() {
                plotter.set_expression(argument);
            }
            plotter.handle(Event::Submit)?;
            return Ok(Flow::Plotted);
        }
        _ => {
            plotter.set_expression(line);
            plotter.handle(Event::Submit)?;
            return Ok(Flow::Plotted);
        }
    }
    Ok(Flow::Continue)
}

fn print_help() {
    println!("min <value>   set the minimum value of x");
    println!("max <value>   set the maximum value of x");
    println!("plot [expr]   plot expr, or the current expression again");
    println!("range         show the range of x");
    println!("quit          leave");
    println!("anything else is plotted as an expression of x");
}
