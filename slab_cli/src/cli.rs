use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use slab_core::request::{DesignRequest, GradeValue};

#[derive(Parser, Debug)]
#[command(name = "slabcalc", version, about = "One-way RC slab design to BS 8110 or Eurocode 2")]
pub struct Cli {
    #[arg(long, global = true, help = "Settings file (TOML); defaults to ./slabcalc.toml if present")]
    pub config: Option<PathBuf>,
    #[arg(short, long, global = true, action = ArgAction::Count, help = "Log calculation steps to stderr")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Design a slab from flags or a JSON request
    Design(DesignArgs),
    /// List concrete grades, steel grades, and the bar catalog
    Grades,
}

#[derive(Args, Debug)]
pub struct DesignArgs {
    #[arg(long, help = "JSON request file; flags override its fields")]
    pub input: Option<PathBuf>,
    #[arg(long, help = "Span (m)")]
    pub span: Option<f64>,
    #[arg(long, help = "Slab thickness (mm)")]
    pub thickness: Option<f64>,
    #[arg(long, help = "Dead load G (kN/m²)")]
    pub dead_load: Option<f64>,
    #[arg(long, help = "Live load Q (kN/m²)")]
    pub live_load: Option<f64>,
    #[arg(long, help = "Concrete grade, e.g. C25")]
    pub concrete: Option<String>,
    #[arg(long, help = "Steel grade, 460 or 500")]
    pub steel: Option<String>,
    #[arg(long, help = "Cover (mm)")]
    pub cover: Option<f64>,
    #[arg(long, help = "Assumed bar diameter (mm)")]
    pub bar_diameter: Option<f64>,
    #[arg(long, help = "Design code, BS8110 or EC2")]
    pub code: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[arg(long, default_value_t = false, help = "Skip the practical input limits")]
    pub no_limits: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Markdown,
    Json,
}

impl DesignArgs {
    /// Merge flags over an optional base request from `--input`
    pub fn to_request(&self, base: Option<DesignRequest>) -> Result<DesignRequest> {
        fn required<T: Clone>(flag: Option<&T>, base: Option<&T>, name: &str) -> Result<T> {
            match flag.or(base) {
                Some(value) => Ok(value.clone()),
                None => bail!("missing required value --{} (or give it in --input)", name),
            }
        }

        let base = base.as_ref();
        let steel = match (&self.steel, base) {
            (Some(s), _) => GradeValue::Text(s.clone()),
            (None, Some(b)) => b.steel_grade.clone(),
            (None, None) => bail!("missing required value --steel (or give it in --input)"),
        };

        Ok(DesignRequest {
            span: required(self.span.as_ref(), base.map(|b| &b.span), "span")?,
            thickness: required(self.thickness.as_ref(), base.map(|b| &b.thickness), "thickness")?,
            dead_load: required(self.dead_load.as_ref(), base.map(|b| &b.dead_load), "dead-load")?,
            live_load: required(self.live_load.as_ref(), base.map(|b| &b.live_load), "live-load")?,
            concrete_grade: required(self.concrete.as_ref(), base.map(|b| &b.concrete_grade), "concrete")?,
            steel_grade: steel,
            cover: required(self.cover.as_ref(), base.map(|b| &b.cover), "cover")?,
            bar_diameter: self.bar_diameter.or(base.and_then(|b| b.bar_diameter)),
            code: self.code.clone().or(base.and_then(|b| b.code.clone())),
        })
    }
}
