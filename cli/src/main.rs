mod error_formatter;
mod formatter;
mod interactive;
mod plot;
mod server;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use formatter::Formatter;
use inverso::graph::Graph;
use inverso::lotto::{generate_tickets, LottoDraw};
use inverso::quadratic::{self, Convexity, Parabola};
use inverso::{check_answer, check_formula, parse_coefficients, Problem, QuizConfig, UserAnswer};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "inverso")]
#[command(about = "Practice inverses of rational functions.")]
#[command(
    long_about = "Inverso generates functions f(x) = (ax + b)/(cx + d) and grades your inverse exactly.\nThe CLI runs an interactive quiz, checks single answers, exports graphs as SVG, or serves the quiz over HTTP."
)]
#[command(version)]
struct Cli {
    #[command(flatten)]
    settings: Settings,

    #[command(subcommand)]
    command: Commands,
}

/// Overrides for the quiz configuration, shared by all subcommands
#[derive(Args)]
struct Settings {
    /// JSON file with quiz settings (fields of QuizConfig)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Smallest coefficient the generator may draw
    #[arg(long, global = true, allow_hyphen_values = true)]
    min_coefficient: Option<i64>,
    /// Largest coefficient the generator may draw
    #[arg(long, global = true, allow_hyphen_values = true)]
    max_coefficient: Option<i64>,
    /// Points sampled on each side of a vertical asymptote
    #[arg(long, global = true)]
    samples: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive quiz
    ///
    /// Shows a function, lets you type the four coefficients of its inverse
    /// (or a formula), grades the answer and unlocks the graph once correct.
    Quiz {
        /// Seed for reproducible problems
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Generate a problem
    Generate {
        /// Seed for reproducible problems
        #[arg(long)]
        seed: Option<u64>,
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Grade one answer against a problem
    ///
    /// Examples:
    ///   inverso check --problem 2,1,3,-1 --answer 1,1,3,-2
    ///   inverso check --problem 2,1,3,-1 --formula "(x+1)/(3x-2)"
    Check {
        /// Problem coefficients a,b,c,d
        #[arg(long, value_name = "A,B,C,D", allow_hyphen_values = true)]
        problem: String,
        /// Claimed inverse coefficients A,B,C,D
        #[arg(
            long,
            value_name = "A,B,C,D",
            allow_hyphen_values = true,
            required_unless_present = "formula",
            conflicts_with = "formula"
        )]
        answer: Option<String>,
        /// Claimed inverse as a formula in x
        #[arg(long, allow_hyphen_values = true)]
        formula: Option<String>,
        /// Output JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export the graph of f and its inverse as SVG
    Plot {
        /// Problem coefficients a,b,c,d
        #[arg(long, value_name = "A,B,C,D", allow_hyphen_values = true)]
        problem: String,
        /// Output file
        #[arg(short, long, default_value = "inverso-graph.svg")]
        out: PathBuf,
    },
    /// Generate lottery tickets and rank them against the latest draw
    Lotto {
        /// Number of tickets (1 to 5)
        #[arg(short, long, default_value = "1")]
        tickets: usize,
        /// Seed for reproducible tickets
        #[arg(long)]
        seed: Option<u64>,
        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Explore y = ax² and answer the two quiz questions
    Parabola {
        /// Coefficient a in [-5, 5], step 0.1
        #[arg(long, allow_hyphen_values = true)]
        a: Decimal,
        /// Answer to "which way does the parabola open for a > 0?" (up, down, flat)
        #[arg(long)]
        convexity: Option<String>,
        /// Answer to "what happens to the width as |a| grows?"
        #[arg(long)]
        width: Option<String>,
        /// Write the parabola as SVG
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Start HTTP REST API server (default: localhost:3000)
    ///
    /// Sessions are stateless: clients post the serialized session together
    /// with an event and receive the next session.
    Server {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Commands::Server { .. } => "inverso=info,tower_http=info",
        _ => "warn",
    };
    init_logging(default_filter);

    let result = load_config(&cli.settings).and_then(|config| match &cli.command {
        Commands::Quiz { seed } => interactive::run_quiz(&mut make_rng(*seed), &config),
        Commands::Generate { seed, json } => generate_command(*seed, *json, &config),
        Commands::Check {
            problem,
            answer,
            formula,
            json,
        } => check_command(
            problem,
            answer.as_deref(),
            formula.as_deref(),
            *json,
            &config,
        ),
        Commands::Plot { problem, out } => plot_command(problem, out, &config),
        Commands::Lotto {
            tickets,
            seed,
            json,
        } => lotto_command(*tickets, *seed, *json, &config),
        Commands::Parabola {
            a,
            convexity,
            width,
            out,
        } => parabola_command(*a, convexity.as_deref(), width.as_deref(), out.as_deref()),
        Commands::Server { host, port } => server_command(config, host, *port),
    });

    if let Err(e) = result {
        // Check if it's an InversoError and format it nicely, otherwise use default
        if let Some(inverso_err) = e.downcast_ref::<inverso::InversoError>() {
            eprintln!("{}", error_formatter::format_error(inverso_err));
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

/// Log to stderr so that `--json` output stays machine readable
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_env("INVERSO_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(settings: &Settings) -> Result<QuizConfig> {
    let mut config = match &settings.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid config file {}", path.display()))?
        }
        None => QuizConfig::default(),
    };

    if let Some(min) = settings.min_coefficient {
        config.min_coefficient = min;
    }
    if let Some(max) = settings.max_coefficient {
        config.max_coefficient = max;
    }
    if let Some(samples) = settings.samples {
        config.samples_per_branch = samples;
    }

    config.validate()?;
    debug!(?config, "loaded configuration");
    Ok(config)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn parse_problem(text: &str) -> Result<Problem> {
    let [a, b, c, d] = parse_coefficients(text)?;
    Ok(Problem::new(a, b, c, d)?)
}

fn generate_command(seed: Option<u64>, json: bool, config: &QuizConfig) -> Result<()> {
    let problem = Problem::generate(&mut make_rng(seed), config)?;

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "problem": problem,
                "text": problem.to_string(),
                "latex": problem.to_latex(),
            }))?
        );
    } else {
        print!("{}", Formatter::default().format_problem(&problem));
    }
    Ok(())
}

fn check_command(
    problem: &str,
    answer: Option<&str>,
    formula: Option<&str>,
    json: bool,
    config: &QuizConfig,
) -> Result<()> {
    let problem = parse_problem(problem)?;

    let grade = match (answer, formula) {
        (Some(answer), _) => {
            let [a, b, c, d] = parse_coefficients(answer)?;
            check_answer(&problem, &UserAnswer::new(a, b, c, d))
        }
        (None, Some(formula)) => check_formula(&problem, formula, config),
        (None, None) => anyhow::bail!("Provide either --answer or --formula"),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&grade)?);
    } else {
        print!("{}", Formatter::default().format_grade(&grade));
    }
    Ok(())
}

fn plot_command(problem: &str, out: &Path, config: &QuizConfig) -> Result<()> {
    let problem = parse_problem(problem)?;
    let graph = Graph::for_problem(&problem, config);
    write_svg(out, &plot::graph_to_svg(&graph))?;
    println!("Wrote graph of {} to {}", problem, out.display());
    Ok(())
}

fn lotto_command(count: usize, seed: Option<u64>, json: bool, config: &QuizConfig) -> Result<()> {
    let draw = LottoDraw::latest();
    let tickets = generate_tickets(&mut make_rng(seed), count, config)?;
    let results: Vec<_> = tickets
        .into_iter()
        .map(|ticket| {
            let result = draw.check(&ticket);
            (ticket, result)
        })
        .collect();

    if json {
        let tickets: Vec<_> = results
            .iter()
            .map(|(ticket, result)| serde_json::json!({ "numbers": ticket, "result": result }))
            .collect();
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "draw": draw,
                "tickets": tickets,
            }))?
        );
    } else {
        print!("{}", Formatter::default().format_tickets(&draw, &results));
    }
    Ok(())
}

fn parabola_command(
    a: Decimal,
    convexity: Option<&str>,
    width: Option<&str>,
    out: Option<&Path>,
) -> Result<()> {
    if a.normalize().scale() > 1 {
        anyhow::bail!("Coefficient a moves in steps of 0.1, got {}", a);
    }
    let a = a
        .to_f64()
        .with_context(|| format!("Coefficient {} is not representable", a))?;
    let parabola = Parabola::new(a)?;

    let convexity = convexity
        .map(|choice| choice.parse::<Convexity>().map(quadratic::check_convexity))
        .transpose()?;
    let width = width.map(quadratic::check_width);

    print!(
        "{}",
        Formatter::default().format_parabola(&parabola, convexity, width)
    );

    if let Some(out) = out {
        write_svg(out, &plot::parabola_to_svg(&parabola, quadratic::DEFAULT_SAMPLES))?;
        println!("Wrote parabola to {}", out.display());
    }
    Ok(())
}

fn server_command(config: QuizConfig, host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(server::http::start_server(config, host, port))?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (config, host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}

fn write_svg(path: &Path, svg: &str) -> Result<()> {
    fs::write(path, svg).with_context(|| format!("Failed to write {}", path.display()))
}
