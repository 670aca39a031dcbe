//! Synthetic portfolio generation.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use concentra_core::{Property, PropertyBuilder};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::output::print_success;
use crate::store;

/// Arguments for the generate command.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of properties to generate
    #[arg(short, long, default_value = "40")]
    pub count: usize,

    /// Generator spec file (attribute domains and value range); the
    /// built-in demo spec is used when omitted
    #[arg(short, long)]
    pub spec: Option<PathBuf>,

    /// RNG seed for reproducible portfolios
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output file for the generated portfolio
    #[arg(short, long, default_value = "portfolio.json")]
    pub output: PathBuf,
}

/// Attribute domains and value range for the generator.
///
/// ```json
/// {
///   "attributes": {"tenant": ["A", "B"], "geo": ["E", "W"]},
///   "value_range": [1000, 5000]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorSpec {
    /// Candidate values per attribute dimension.
    pub attributes: BTreeMap<String, Vec<String>>,

    /// Half-open `[min, max)` range for property values.
    pub value_range: (i64, i64),
}

impl Default for GeneratorSpec {
    fn default() -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            "tenant".to_string(),
            vec!["A", "B", "C", "D"].into_iter().map(String::from).collect(),
        );
        attributes.insert(
            "geo".to_string(),
            vec!["SW", "MW", "E", "W"].into_iter().map(String::from).collect(),
        );
        attributes.insert(
            "IG?".to_string(),
            vec!["Y", "N"].into_iter().map(String::from).collect(),
        );

        Self {
            attributes,
            value_range: (1000, 5000),
        }
    }
}

impl GeneratorSpec {
    fn validate(&self) -> Result<()> {
        if self.attributes.is_empty() {
            bail!("generator spec has no attribute dimensions");
        }
        for (dimension, values) in &self.attributes {
            if values.is_empty() {
                bail!("dimension '{}' has no candidate values", dimension);
            }
        }
        let (min, max) = self.value_range;
        if min < 0 || max <= min {
            bail!("invalid value range [{}, {})", min, max);
        }
        Ok(())
    }
}

/// Generates `count` properties from the spec.
///
/// Every property carries the identical dimension set; each attribute is
/// drawn uniformly from its domain and `value` uniformly from the range.
pub fn generate(spec: &GeneratorSpec, count: usize, rng: &mut StdRng) -> Result<Vec<Property>> {
    spec.validate()?;

    let (min, max) = spec.value_range;
    let mut properties = Vec::with_capacity(count);

    for _ in 0..count {
        let mut builder = PropertyBuilder::new().value(Decimal::from(rng.gen_range(min..max)));
        for (dimension, values) in &spec.attributes {
            let pick = &values[rng.gen_range(0..values.len())];
            builder = builder.attribute(dimension, pick);
        }
        properties.push(builder.build()?);
    }

    Ok(properties)
}

/// Executes the generate command.
pub fn execute(args: GenerateArgs, _format: OutputFormat, quiet: bool) -> Result<()> {
    let spec = match &args.spec {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("reading generator spec {}", path.display()))?;
            serde_json::from_str(&data)
                .with_context(|| format!("parsing generator spec {}", path.display()))?
        }
        None => GeneratorSpec::default(),
    };

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let properties = generate(&spec, args.count, &mut rng)?;
    store::save_properties(&args.output, &properties)?;

    if !quiet {
        print_success(&format!(
            "Generated {} properties to {}",
            properties.len(),
            args.output.display()
        ));
    }

    Ok(())
}
