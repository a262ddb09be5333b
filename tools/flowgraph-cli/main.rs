use clap::{Parser, Subcommand};
use flowgraph::prelude::*;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::fs;
use std::path::PathBuf;

/// Inspect, render and edit flowgraph documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Optional editor config JSON file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a summary of nodes, edges and dangling connections
    Inspect {
        /// Path to the flow JSON file
        file: PathBuf,
    },
    /// Print the SVG path data of every renderable edge
    Paths {
        file: PathBuf,
        /// Edge style (line, curved, cubicH, cubicV, quad, elbow, elbowVH, roundedElbowHV, arc)
        #[arg(short, long)]
        style: Option<PathStyle>,
    },
    /// Render the graph as an SVG document
    Svg {
        file: PathBuf,
        /// Output path; defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(short, long)]
        style: Option<PathStyle>,
    },
    /// Append a new node and write the file back
    AddNode {
        file: PathBuf,
        /// Node type tag, e.g. input, processing, output
        #[arg(short, long, default_value = "processing")]
        kind: String,
    },
    /// Rewrite a document with explicitly tagged port directions
    Migrate {
        file: PathBuf,
        /// Output path; defaults to overwriting the input
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        exit_with_error(&e.to_string());
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if let Err(e) = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Failed to initialize logger: {}", e);
    }
}

fn load_editor(config: Option<&PathBuf>, file: &PathBuf) -> Result<Editor> {
    let config = match config {
        Some(path) => EditorConfig::from_file(&path.display().to_string())?,
        None => EditorConfig::default(),
    };
    let mut editor = Editor::new(config);
    editor.load_file(file)?;
    Ok(editor)
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config.as_ref();
    match cli.command {
        Command::Inspect { file } => {
            let editor = load_editor(config, &file)?;
            print_summary(editor.graph());
        }
        Command::Paths { file, style } => {
            let mut editor = load_editor(config, &file)?;
            if let Some(style) = style {
                editor.viewport_mut().set_edge_style(style);
            }
            for edge in editor.frame().edges {
                println!("{}\t{}", edge.key, edge.d());
            }
        }
        Command::Svg {
            file,
            output,
            style,
        } => {
            let mut editor = load_editor(config, &file)?;
            if let Some(style) = style {
                editor.viewport_mut().set_edge_style(style);
            }
            let svg = editor.render_svg();
            match output {
                Some(path) => {
                    fs::write(&path, svg)?;
                    println!("Wrote SVG to '{}'", path.display());
                }
                None => print!("{}", svg),
            }
        }
        Command::AddNode { file, kind } => {
            let mut editor = load_editor(config, &file)?;
            let id = editor.add_node(&kind);
            let exported = editor.save()?;
            fs::write(&file, exported.contents)?;
            println!("Added node '{}' to '{}'", id, file.display());
        }
        Command::Migrate { file, output } => {
            let bytes = fs::read(&file)?;
            let document = GraphDocument::from_slice(&bytes)?;
            let target = output.unwrap_or_else(|| file.clone());
            fs::write(&target, document.to_json_pretty()?)?;
            println!("Wrote migrated document to '{}'", target.display());
        }
    }
    Ok(())
}

fn print_summary(graph: &GraphModel) {
    println!("--- Nodes ({}) ---", graph.nodes().len());
    for node in graph.nodes() {
        let pos = node.position();
        println!(
            "  {} [{}] '{}' at ({}, {}), {} in / {} out",
            node.id,
            node.kind,
            node.label,
            pos.x,
            pos.y,
            node.properties.inputs().count(),
            node.properties.outputs().count()
        );
    }

    println!("--- Edges ({}) ---", graph.edges().len());
    for edge in graph.edges() {
        println!(
            "  {}:{} -> {}:{}",
            edge.from_node, edge.from_port, edge.to_node, edge.to_port
        );
    }

    let dangling: Vec<_> = graph.dangling_edges().collect();
    if !dangling.is_empty() {
        println!("--- Dangling ({}) ---", dangling.len());
        for edge in dangling {
            println!("  {}", edge.key());
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
