//! CLI binary for modgraph: inspect the dependency graph of a mod's resources.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::ExplorerConfig;
use modgraph_core::graph::{Entity, ModGraph};
use modgraph_core::{schema, storage};
use modgraph_nav::chain::{build_chain, format_chain};
use modgraph_nav::fetch::fetch;
use modgraph_nav::search::{TypeGroup, hit_count, search};
use modgraph_nav::stats::{global_stats, top_hubs};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "modgraph", about = "Mod resource dependency graph explorer")]
struct Cli {
    /// Project root directory (defaults to current directory)
    #[arg(short, long, global = true)]
    project: Option<PathBuf>,

    /// Graph document to load (overrides the configured path)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show graph-wide statistics
    Info,

    /// List entities grouped by primary type
    List {
        /// Only list entities with this primary type
        #[arg(short = 't', long = "type")]
        primary_type: Option<String>,
    },

    /// Find entities by name, type tag, or element
    Search {
        /// Case-insensitive substring
        query: String,
    },

    /// Show an entity's properties, neighbors, stats, and dependency chain
    Show {
        /// Entity name
        name: String,
    },

    /// Print the dependency chain from the roots down to an entity
    Chain {
        /// Entity name
        name: String,
    },

    /// Rank the most depended-on names
    Hubs {
        /// Number of hubs to print (defaults to the configured hub_limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print an entity as JSON-LD
    Raw {
        /// Entity name
        name: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let project_root = match &cli.project {
        Some(p) => p.clone(),
        None => std::env::current_dir().context("failed to get current directory")?,
    };
    let config = ExplorerConfig::load(&project_root)
        .with_context(|| format!("failed to load config from {}", project_root.display()))?;

    let data_path = cli
        .data
        .clone()
        .unwrap_or_else(|| config.data_path(&project_root));
    let graph = storage::load(&data_path)
        .with_context(|| format!("failed to load graph from {}", data_path.display()))?;

    match cli.command {
        Commands::Info => cmd_info(&graph, cli.json),
        Commands::List { primary_type } => cmd_list(&graph, &config, primary_type, cli.json),
        Commands::Search { query } => cmd_search(&graph, &config, &query, cli.json),
        Commands::Show { name } => cmd_show(&graph, &name, cli.json),
        Commands::Chain { name } => cmd_chain(&graph, &name, cli.json),
        Commands::Hubs { limit } => {
            cmd_hubs(&graph, limit.unwrap_or(config.display.hub_limit), cli.json)
        }
        Commands::Raw { name } => cmd_raw(&graph, &name),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn require_entity<'a>(graph: &'a ModGraph, name: &str) -> Result<&'a Entity> {
    graph
        .get_entity(name)
        .ok_or_else(|| anyhow::anyhow!("entity not found: {}", name))
}

fn cmd_info(graph: &ModGraph, json: bool) -> Result<()> {
    let stats = global_stats(graph);
    if json {
        return print_json(&stats);
    }

    println!("Total Entities:  {}", stats.total_entities);
    println!("Total Edges:     {}", stats.total_edges);
    println!("Entity Types:    {}", stats.type_count);
    println!("Root Nodes:      {}", stats.root_count);
    match &stats.top_hub {
        Some(hub) => println!("Top Hub:         {} ({})", hub.name, hub.dependents),
        None => println!("Top Hub:         -"),
    }
    println!("JSON-LD Terms:   {}", stats.context_term_count);
    if !stats.type_counts.is_empty() {
        println!();
        for (primary_type, count) in &stats.type_counts {
            println!("  {:<16} {}", primary_type, count);
        }
    }
    Ok(())
}

fn cmd_list(
    graph: &ModGraph,
    config: &ExplorerConfig,
    primary_type: Option<String>,
    json: bool,
) -> Result<()> {
    let mut groups = search(graph, "", &config.display.type_order);
    if let Some(wanted) = &primary_type {
        groups.retain(|g| &g.primary_type == wanted);
    }
    print_groups(&groups, config.display.search_result_limit, json)
}

fn cmd_search(graph: &ModGraph, config: &ExplorerConfig, query: &str, json: bool) -> Result<()> {
    let groups = search(graph, query, &config.display.type_order);
    tracing::debug!(query, hits = hit_count(&groups), "search finished");
    if !json && groups.is_empty() {
        println!("No entities match '{}'.", query);
        return Ok(());
    }
    print_groups(&groups, config.display.search_result_limit, json)
}

fn print_groups(groups: &[TypeGroup<'_>], per_group: usize, json: bool) -> Result<()> {
    if json {
        return print_json(&groups);
    }
    for group in groups {
        println!("{} ({})", group.primary_type, group.entities.len());
        for entity in group.entities.iter().take(per_group) {
            match &entity.element {
                Some(element) => println!("  {} [{}]", entity.name, element),
                None => println!("  {}", entity.name),
            }
        }
        if group.entities.len() > per_group {
            println!("  ... {} more", group.entities.len() - per_group);
        }
    }
    Ok(())
}

fn cmd_show(graph: &ModGraph, name: &str, json: bool) -> Result<()> {
    let detail = fetch(graph, name).ok_or_else(|| anyhow::anyhow!("entity not found: {}", name))?;
    if json {
        return print_json(&detail);
    }

    let entity = detail.entity;
    println!("{}", entity.name);
    if !entity.id.is_empty() {
        println!("  {}", entity.id);
    }
    let mut badges: Vec<&str> = entity.types.iter().map(String::as_str).collect();
    badges.extend(entity.element.as_deref());
    badges.extend(entity.scaling.as_deref());
    if !badges.is_empty() {
        println!("  [{}]", badges.join("] ["));
    }
    if let Some(description) = &entity.description {
        println!();
        println!("{}", description);
    }

    if !detail.properties.is_empty() {
        println!();
        println!("Properties");
        for prop in &detail.properties {
            println!("  {:<20} {}", prop.label, prop.value);
        }
    }
    if !detail.dependencies.is_empty() {
        println!();
        println!("Depends On ({})", detail.dependencies.len());
        for dep in detail.dependencies {
            println!("  {}", dep);
        }
    }
    if !detail.dependents.is_empty() {
        println!();
        println!("Depended On By ({})", detail.dependents.len());
        for dependent in detail.dependents {
            println!("  {}", dependent);
        }
    }

    let stats = &detail.stats;
    println!();
    println!("Primary Type:          {}", stats.primary_type.as_deref().unwrap_or("-"));
    println!("Element:               {}", stats.element.as_deref().unwrap_or("-"));
    println!("Direct Deps:           {}", stats.direct_deps);
    println!("Direct Dependents:     {}", stats.direct_dependents);
    println!("Transitive Reach:      {}", stats.transitive_reach);
    println!("Transitive Ancestors:  {}", stats.transitive_ancestors);

    println!();
    println!("Dependency Chain");
    print!("{}", format_chain(&detail.chain));
    Ok(())
}

fn cmd_chain(graph: &ModGraph, name: &str, json: bool) -> Result<()> {
    require_entity(graph, name)?;
    let chain = build_chain(graph, name);
    if json {
        return print_json(&chain);
    }
    print!("{}", format_chain(&chain));
    Ok(())
}

fn cmd_hubs(graph: &ModGraph, limit: usize, json: bool) -> Result<()> {
    let hubs = top_hubs(graph, limit);
    if json {
        return print_json(&hubs);
    }
    if hubs.is_empty() {
        println!("No dependencies declared.");
        return Ok(());
    }
    for (rank, hub) in hubs.iter().enumerate() {
        let marker = if graph.get_entity(&hub.name).is_some() {
            ""
        } else {
            " (missing)"
        };
        println!("{:>3}. {} ({}){}", rank + 1, hub.name, hub.dependents, marker);
    }
    Ok(())
}

fn cmd_raw(graph: &ModGraph, name: &str) -> Result<()> {
    let entity = require_entity(graph, name)?;
    println!("{}", schema::entity_to_json(entity)?);
    Ok(())
}
