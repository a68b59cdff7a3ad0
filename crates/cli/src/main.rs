use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use pedigree_chart::{assemble, ChartOptions};
use pedigree_graph::LineageGraph;
use pedigree_model::Dataset;
use pedigree_search::NameSearch;

#[derive(Parser)]
#[command(name = "pedigree")]
#[command(about = "Explore family-tree record files from the command line", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for JSON)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a record file and its lineage graph
    Stats(StatsArgs),

    /// Fuzzy-search individuals by name or id
    Search(SearchArgs),

    /// Show a single individual
    Show(ShowArgs),

    /// Walk the ancestor expansion from a root individual
    Ancestors(AncestorsArgs),

    /// Produce chart nodes and edges for a root's ancestry
    Chart(ChartArgs),
}

#[derive(Args)]
struct StatsArgs {
    /// Path to the record tree JSON file
    file: PathBuf,

    /// Also count the ancestors reachable from this individual
    #[arg(long)]
    root: Option<String>,

    /// Cap the reachability count
    #[arg(long, short = 'n')]
    limit: Option<usize>,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SearchArgs {
    /// Path to the record tree JSON file
    file: PathBuf,

    /// Search query
    query: String,

    /// Maximum number of results
    #[arg(long, short = 'n', default_value_t = 10)]
    limit: usize,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ShowArgs {
    /// Path to the record tree JSON file
    file: PathBuf,

    /// Individual id, e.g. @I1@
    id: String,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct AncestorsArgs {
    /// Path to the record tree JSON file
    file: PathBuf,

    /// Root individual id, e.g. @I1@
    #[arg(long, conflicts_with = "name")]
    root: Option<String>,

    /// Resolve the root by fuzzy name match instead of id
    #[arg(long)]
    name: Option<String>,

    /// Keep at most this many expansion entries
    #[arg(long, short = 'n')]
    limit: Option<usize>,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct ChartArgs {
    /// Path to the record tree JSON file
    file: PathBuf,

    /// Root individual id, e.g. @I1@
    #[arg(long, conflicts_with = "name")]
    root: Option<String>,

    /// Resolve the root by fuzzy name match instead of id
    #[arg(long)]
    name: Option<String>,

    /// Keep at most this many expansion entries
    #[arg(long, short = 'n')]
    limit: Option<usize>,

    /// Collapse runs of ancestors born in the same place
    #[arg(long)]
    simplify: bool,

    /// Output JSON format
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Auto-enable quiet mode when --json is used (to keep stdout clean for JSON parsing)
    let json_output = match &cli.command {
        Commands::Stats(args) => args.json,
        Commands::Search(args) => args.json,
        Commands::Show(args) => args.json,
        Commands::Ancestors(args) => args.json,
        Commands::Chart(args) => args.json,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Stats(args) => run_stats(args)?,
        Commands::Search(args) => run_search(args)?,
        Commands::Show(args) => run_show(args)?,
        Commands::Ancestors(args) => run_ancestors(args)?,
        Commands::Chart(args) => run_chart(args)?,
    }

    Ok(())
}

fn load_dataset(path: &Path) -> Result<Dataset> {
    Dataset::from_file(path)
        .with_context(|| format!("Failed to load records from {}", path.display()))
}

/// Resolve the root individual from `--root` or a `--name` fuzzy query
fn resolve_root(dataset: &Dataset, root: Option<String>, name: Option<String>) -> Result<String> {
    if let Some(id) = root {
        if dataset.individual(&id).is_none() {
            log::warn!("Root {id} is not in the dataset; the expansion will be empty");
        }
        return Ok(id);
    }

    let Some(query) = name else {
        anyhow::bail!("Either --root or --name is required");
    };

    let mut search = NameSearch::new();
    let Some(hit) = search.best(&query, dataset) else {
        anyhow::bail!("No individual matches '{query}'");
    };
    log::info!(
        "Resolved '{}' to {} ({})",
        query,
        hit.id,
        hit.name.as_deref().unwrap_or("unnamed")
    );
    Ok(hit.id)
}

#[derive(Serialize)]
struct StatsReport {
    individuals: usize,
    families: usize,
    vertices: usize,
    edges: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    reachable: Option<usize>,
}

/// Summarize a record file and its lineage graph
fn run_stats(args: StatsArgs) -> Result<()> {
    let dataset = load_dataset(&args.file)?;
    let graph = LineageGraph::from_dataset(&dataset);

    let reachable = args.root.as_deref().map(|root| {
        graph
            .reachable_ancestors(root, args.limit.unwrap_or(usize::MAX))
            .len()
    });

    let report = StatsReport {
        individuals: dataset.individual_count(),
        families: dataset.family_count(),
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        reachable,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Individuals: {}", report.individuals);
        println!("Families:    {}", report.families);
        println!("Vertices:    {}", report.vertices);
        println!("Edges:       {}", report.edges);
        if let Some(count) = report.reachable {
            println!("Reachable:   {count}");
        }
    }
    Ok(())
}

/// Fuzzy-search individuals by name or id
fn run_search(args: SearchArgs) -> Result<()> {
    let dataset = load_dataset(&args.file)?;
    let mut search = NameSearch::new();
    let matches = search.search(&args.query, &dataset, args.limit);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&matches)?);
    } else if matches.is_empty() {
        eprintln!("No matches for '{}'", args.query);
    } else {
        for (i, hit) in matches.iter().enumerate() {
            println!(
                "{}. {} {} (score: {:.3})",
                i + 1,
                hit.id,
                hit.name.as_deref().unwrap_or("(unnamed)"),
                hit.score
            );
        }
    }
    Ok(())
}

/// Show a single individual
fn run_show(args: ShowArgs) -> Result<()> {
    let dataset = load_dataset(&args.file)?;
    let Some(individual) = dataset.individual(&args.id) else {
        anyhow::bail!("No individual with id {}", args.id);
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(individual)?);
    } else {
        println!("Id:          {}", individual.id);
        println!(
            "Name:        {}",
            individual.name.as_deref().unwrap_or("(unnamed)")
        );
        println!(
            "Birth place: {}",
            individual.birth_place.as_deref().unwrap_or("(unknown)")
        );
        if let Some(family) = &individual.parents_family {
            println!("Child in:    {family}");
        }
        if let Some(family) = &individual.own_family {
            println!("Spouse in:   {family}");
        }
    }
    Ok(())
}

/// Walk the ancestor expansion from a root individual
fn run_ancestors(args: AncestorsArgs) -> Result<()> {
    let dataset = load_dataset(&args.file)?;
    let graph = LineageGraph::from_dataset(&dataset);
    let root = resolve_root(&dataset, args.root, args.name)?;

    let mut entries = graph.ancestors(&root);
    if let Some(limit) = args.limit {
        entries.truncate(limit);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for entry in &entries {
            let name = dataset
                .individual(&entry.id)
                .and_then(|i| i.name.as_deref())
                .unwrap_or("(unnamed)");
            println!("{} {}", entry.id, name);
            for link in &entry.discovered {
                println!("  {}: {}", link.role, link.id);
            }
        }
    }
    Ok(())
}

/// Produce chart nodes and edges for a root's ancestry
fn run_chart(args: ChartArgs) -> Result<()> {
    let dataset = load_dataset(&args.file)?;
    let graph = LineageGraph::from_dataset(&dataset);
    let root = resolve_root(&dataset, args.root, args.name)?;

    let mut options = ChartOptions::new().simplify(args.simplify);
    if let Some(limit) = args.limit {
        options = options.limit(limit);
    }
    options
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid chart options: {e}"))?;

    let entries = graph.ancestors(&root);
    let elements = assemble(&dataset, &entries, &options);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&elements)?);
    } else {
        eprintln!(
            "Chart: {} nodes, {} edges",
            elements.nodes.len(),
            elements.edges.len()
        );
        for node in &elements.nodes {
            let label = node.label.as_deref().unwrap_or("(unnamed)");
            match node.same_location_count {
                Some(count) => println!("{} {label} [collapsed: {count}]", node.id),
                None => println!("{} {label}", node.id),
            }
        }
        for edge in &elements.edges {
            println!("{} -> {} ({})", edge.source, edge.target, edge.role);
        }
    }
    Ok(())
}
