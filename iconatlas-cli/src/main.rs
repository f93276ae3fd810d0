use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use iconatlas_core::order::{CollisionPolicy, IconTable};
use iconatlas_core::packer::CommandPacker;
use iconatlas_core::pipeline::{self, RunSummary};
use iconatlas_core::{Config, VERSION};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "iconatlas", version = VERSION, about = "Icon atlas lookup table generator")]
struct Cli {
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Args, Debug)]
struct ConfigArgs {
    /// YAML config file; built-in defaults when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Packer manifest to read
    #[arg(long)]
    manifest: Option<PathBuf>,
    /// Atlas side length in pixels
    #[arg(long)]
    atlas_size: Option<f32>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    cfg: ConfigArgs,
    /// Generated Rust file
    #[arg(long)]
    out: Option<PathBuf>,
    /// Keep the manifest after a successful run
    #[arg(long)]
    keep_manifest: bool,
    /// Fail when two icons derive the same name
    #[arg(long)]
    deny_collisions: bool,
    /// Name of the generated enum
    #[arg(long)]
    enum_name: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the lookup module from a packer manifest
    Generate(GenerateArgs),
    /// Run the configured packer, then generate
    Pack(GenerateArgs),
    /// Print the ordered icon table without writing anything
    Inspect {
        #[command(flatten)]
        cfg: ConfigArgs,
        /// Emit the table as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the identifier a raw sprite name maps to
    CheckName {
        #[arg(required = true)]
        raw: Vec<String>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl ConfigArgs {
    fn load(&self) -> Result<Config> {
        let mut cfg = match &self.config {
            Some(path) => Config::load_from_path(path)?,
            None => Config::default(),
        };
        if let Some(m) = &self.manifest {
            cfg.manifest = m.clone();
        }
        if let Some(s) = self.atlas_size {
            cfg.atlas_size = s;
        }
        Ok(cfg)
    }
}

impl GenerateArgs {
    fn load(&self) -> Result<Config> {
        let mut cfg = self.cfg.load()?;
        if let Some(out) = &self.out {
            cfg.output = out.clone();
        }
        if self.keep_manifest {
            cfg.keep_manifest = true;
        }
        if self.deny_collisions {
            cfg.collisions = CollisionPolicy::Deny;
        }
        if let Some(name) = &self.enum_name {
            cfg.emit.enum_name = name.clone();
        }
        Ok(cfg)
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = env_logger::Builder::new();
    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_env("RUST_LOG");
    } else {
        let level = match (quiet, verbose) {
            (true, _) => LevelFilter::Error,
            (false, 0) => LevelFilter::Info,
            (false, 1) => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        builder.filter(None, LevelFilter::Warn);
        builder.filter(Some("iconatlas_core"), level);
        builder.filter(Some("iconatlas"), level);
    }
    builder.format_timestamp(None).init();
}

fn print_summary(s: &RunSummary) {
    println!("Wrote {} icons ({} records) to {}", s.icons, s.records, s.output.display());
    for c in &s.collisions {
        println!(
            "  collision: {} <- #{} {} (dropped #{} {})",
            c.name, c.kept, c.kept_raw, c.dropped, c.dropped_raw
        );
    }
    if s.manifest_removed {
        println!("Removed manifest");
    }
}

fn print_table(table: &IconTable) {
    let width = table.iter().map(|e| e.name.len()).max().unwrap_or(0);
    for e in table.iter() {
        println!(
            "{:>5}  {:<width$}  ({:.6}, {:.6})  {}",
            e.index,
            e.name,
            e.coord.x,
            e.coord.y,
            e.raw_name,
            width = width
        );
    }
    println!("{} icons", table.len());
    for c in &table.collisions {
        println!(
            "collision: {} keeps #{} {}, drops #{} {}",
            c.name, c.kept, c.kept_raw, c.dropped, c.dropped_raw
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    match cli.cmd {
        Command::Generate(args) => {
            let cfg = args.load()?;
            let summary = pipeline::generate(&cfg)
                .with_context(|| format!("generating from {}", cfg.manifest.display()))?;
            print_summary(&summary);
        }
        Command::Pack(args) => {
            let cfg = args.load()?;
            let packer_cfg = cfg.packer.as_ref().context("config has no `packer` section")?;
            let packer = CommandPacker::from_config(packer_cfg, &cfg.manifest);
            let summary = pipeline::run_with_packer(&packer, &cfg)?;
            print_summary(&summary);
        }
        Command::Inspect { cfg, json } => {
            let cfg = cfg.load()?;
            let (_manifest, table) = pipeline::inspect(&cfg)
                .with_context(|| format!("inspecting {}", cfg.manifest.display()))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                print_table(&table);
            }
        }
        Command::CheckName { raw, config } => {
            let cfg = match config {
                Some(path) => Config::load_from_path(path)?,
                None => Config::default(),
            };
            cfg.naming.validate()?;
            let mut failed = 0;
            for name in &raw {
                match cfg.naming.canonical_name(name) {
                    Ok(id) => println!("{} -> {}", name, id),
                    Err(e) => {
                        println!("{} -> error: {}", name, e);
                        failed += 1;
                    }
                }
            }
            if failed > 0 {
                anyhow::bail!("{} of {} names do not follow the naming rule", failed, raw.len());
            }
        }
    }
    Ok(())
}
