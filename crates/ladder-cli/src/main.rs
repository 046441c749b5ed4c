use ladder::graphlib::alg;
use ladder::{EdgePath, Graph, LayoutOptions, RankDir, SvgOptions, next_vertex_id};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Read;
use std::str::FromStr;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Graph(ladder::Error),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Graph(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ladder::Error> for CliError {
    fn from(value: ladder::Error) -> Self {
        Self::Graph(value)
    }
}

impl From<ladder::graphlib::Error> for CliError {
    fn from(value: ladder::graphlib::Error) -> Self {
        Self::Graph(value.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Paths,
    Render,
    Check,
}

struct RankDirArg(RankDir);

impl FromStr for RankDirArg {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tb" => Ok(Self(RankDir::TB)),
            "lr" => Ok(Self(RankDir::LR)),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    verbose: bool,
    rankdir: Option<RankDir>,
    options: Option<String>,
    out: Option<String>,
}

#[derive(Serialize)]
struct CheckOut {
    vertices: usize,
    edges: usize,
    next_vertex_id: u32,
    cycles: usize,
}

fn usage() -> &'static str {
    "ladder-cli\n\
\n\
USAGE:\n\
  ladder-cli [layout] [--pretty] [--rankdir tb|lr] [--options <json-file>] [<path>|-]\n\
  ladder-cli paths [--rankdir tb|lr] [--options <json-file>] [<path>|-]\n\
  ladder-cli render [--rankdir tb|lr] [--options <json-file>] [--out <path>] [<path>|-]\n\
  ladder-cli check [--pretty] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', the saved graph JSON is read from stdin.\n\
  - layout prints the layout JSON (positions, previous positions, six-point routes).\n\
  - paths prints one `u:v<TAB>svg-path` line per edge.\n\
  - render prints a standalone SVG to stdout by default; use --out to write a file.\n\
  - check validates the graph and prints its counts and next vertex id.\n\
  - -v/--verbose logs at debug level to stderr; otherwise RUST_LOG is honored.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "paths" => args.command = Command::Paths,
            "render" => args.command = Command::Render,
            "check" => args.command = Command::Check,
            "--pretty" => args.pretty = true,
            "--verbose" | "-v" => args.verbose = true,
            "--rankdir" => {
                let Some(dir) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                let RankDirArg(dir) = dir.parse().map_err(|_| CliError::Usage(usage()))?;
                args.rankdir = Some(dir);
            }
            "--options" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.options = Some(path.clone());
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn read_graph(input: Option<&str>) -> Result<Graph, CliError> {
    let text = read_input(input)?;
    if text.trim().is_empty() {
        return Ok(Graph::new());
    }
    Ok(Graph::from_json(&text)?)
}

fn layout_options(args: &Args) -> Result<LayoutOptions, CliError> {
    let mut options = match args.options.as_deref() {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => LayoutOptions::default(),
    };
    if let Some(rankdir) = args.rankdir {
        options.rankdir = rankdir;
    }
    Ok(options)
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn write_text(text: &str, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None => {
            print!("{text}");
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, text)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let graph = read_graph(args.input.as_deref())?;
    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );

    match args.command {
        Command::Check => {
            let out = CheckOut {
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
                next_vertex_id: next_vertex_id(&graph),
                cycles: alg::find_cycles(&graph).len(),
            };
            write_json(&out, args.pretty)
        }
        Command::Layout => {
            let options = layout_options(&args)?;
            let layout = ladder::layout::layout(&graph, &options, None);
            write_json(&layout, args.pretty)
        }
        Command::Paths => {
            let options = layout_options(&args)?;
            let layout = ladder::layout::layout(&graph, &options, None);
            let mut text = String::new();
            for edge in &layout.edges {
                let path = EdgePath::from_route(&edge.points);
                let _ = writeln!(text, "{}:{}\t{path}", edge.u, edge.v);
            }
            write_text(&text, args.out.as_deref())
        }
        Command::Render => {
            let options = layout_options(&args)?;
            let layout = ladder::layout::layout(&graph, &options, None);
            let svg = ladder::render_svg(&layout, &SvgOptions::default());
            write_text(&svg, args.out.as_deref())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
