use super::load_registry;
use crate::chains::ChainRegistry;
use crate::config::OutputFormat;
use crate::errors::{AppError, AppResult};
use crate::parser::{apply_outcome, PasteOutcome, PasteParser, TransactionForm};
use crate::types::{FieldName, NetworkStatus};
use clap::Args;
use std::io::Read;
use std::path::PathBuf;
use tracing::info;

/// Parse transaction details copied from the Safe UI
#[derive(Args)]
pub struct ParseCommand {
    /// Files with copied transaction details; reads stdin when omitted or "-"
    pub inputs: Vec<PathBuf>,

    /// Output format (overrides config.toml)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Also print the hash calculator form as it would be filled
    #[arg(long)]
    pub show_form: bool,

    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Upper bound on parser threads, whatever the number of inputs
const MAX_WORKERS: usize = 8;

/// One paste and where it came from
struct PasteInput {
    source: String,
    text: String,
}

impl ParseCommand {
    pub fn run(&self) -> AppResult<()> {
        let (config, registry) = load_registry(self.config.as_deref())?;
        let format = self.format.unwrap_or(config.output.format);

        let inputs = self.read_inputs()?;
        info!("Parsing {} paste(s)", inputs.len());

        let outcomes = evaluate_all(&inputs, &registry)?;

        let mut failures = 0;
        for (input, outcome) in inputs.iter().zip(&outcomes) {
            if !outcome.is_applicable() {
                failures += 1;
            }
            match format {
                OutputFormat::Json => print_json(&input.source, outcome, self.show_form)?,
                OutputFormat::Text => print_text(&input.source, outcome, &registry, self.show_form),
            }
        }

        if failures > 0 {
            return Err(AppError::InvalidData(format!(
                "{} of {} paste(s) could not be applied",
                failures,
                outcomes.len()
            )));
        }

        Ok(())
    }

    fn read_inputs(&self) -> AppResult<Vec<PasteInput>> {
        if self.inputs.is_empty() {
            return Ok(vec![read_stdin()?]);
        }

        self.inputs
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    return read_stdin();
                }
                let text =
                    std::fs::read_to_string(path).map_err(|e| AppError::InvalidInput {
                        path: path.display().to_string(),
                        reason: e.to_string(),
                    })?;
                Ok(PasteInput {
                    source: path.display().to_string(),
                    text,
                })
            })
            .collect()
    }
}

fn read_stdin() -> AppResult<PasteInput> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(PasteInput {
        source: "<stdin>".to_string(),
        text,
    })
}

/// Evaluate pastes on a bounded pool of scoped threads, preserving input order
///
/// The parser only borrows the immutable registry, so no locking is needed.
fn evaluate_all(inputs: &[PasteInput], registry: &ChainRegistry) -> AppResult<Vec<PasteOutcome>> {
    let parser = PasteParser::new(registry);
    let workers = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
        .min(MAX_WORKERS);
    let chunk_size = inputs.len().div_ceil(workers).max(1);

    crossbeam::thread::scope(|scope| {
        let handles: Vec<_> = inputs
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move |_| {
                    chunk
                        .iter()
                        .map(|input| parser.evaluate(&input.text))
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Result<Vec<_>, _>>()
    })
    .and_then(|joined| joined)
    .map(|chunks| chunks.into_iter().flatten().collect())
    .map_err(|_| AppError::InvalidData("parser thread panicked".to_string()))
}

fn filled_form(outcome: &PasteOutcome) -> Option<TransactionForm> {
    let mut form = TransactionForm::new("direct", "");
    apply_outcome(outcome, &mut form).then_some(form)
}

fn print_json(source: &str, outcome: &PasteOutcome, show_form: bool) -> AppResult<()> {
    let mut json = serde_json::json!({
        "source": source,
        "severity": outcome.severity(),
        "headline": outcome.headline(),
        "guidance": outcome.guidance(),
        "outcome": outcome,
    });
    if show_form {
        json["form"] = serde_json::to_value(filled_form(outcome))?;
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

fn print_text(source: &str, outcome: &PasteOutcome, registry: &ChainRegistry, show_form: bool) {
    println!("\n=== {} ===", source);
    println!("{:?}: {}", outcome.severity(), outcome.headline());
    println!("  {}", outcome.guidance());

    if matches!(outcome, PasteOutcome::TruncatedContent { .. }) {
        println!();
        println!("How to expand truncated fields:");
        println!("  1. In Safe UI, look for fields marked with \"...\" or \"show more\"");
        println!("  2. Click on \"show more\" to expand the complete content");
        println!("  3. Copy the transaction details again with fully expanded fields");
        println!("  4. Paste the complete content here");
    }

    let Some(fields) = outcome.fields() else {
        return;
    };

    println!();
    match fields.network_status() {
        NetworkStatus::Resolved { chain_id } => {
            let label = fields
                .network
                .as_deref()
                .and_then(|value| registry.networks.by_value(value))
                .map(|network| network.label.as_str())
                .unwrap_or("unsupported network");
            println!("Network: {} (Chain ID: {})", label, chain_id);
        }
        NetworkStatus::UnknownShortName(shortname) => {
            println!("Network: shortname '{}' not recognised", shortname);
        }
        NetworkStatus::NoShortName => println!("Network: not detected"),
    }
    if let Some(shortname) = &fields.detected_short_name {
        println!("  Detected shortname: {}", shortname);
    }
    if let Some(all) = &fields.all_network_short_names {
        let alternatives: Vec<&str> = all
            .iter()
            .map(String::as_str)
            .filter(|name| Some(*name) != fields.detected_short_name.as_deref())
            .collect();
        if !alternatives.is_empty() {
            println!("  Alternative shortnames: {}", alternatives.join(", "));
        }
    }

    println!();
    println!("Fields:");
    for (field, value) in fields.present_fields() {
        let marker = if fields.truncated_fields.contains(&field) {
            " (truncated)"
        } else {
            ""
        };
        println!("  {:<16} {}{}", field.as_str(), value, marker);
    }

    let optional: Vec<&str> = fields
        .missing_optional_fields()
        .iter()
        .map(FieldName::display_label)
        .collect();
    if !optional.is_empty() {
        println!("  Not in paste (left empty): {}", optional.join(", "));
    }

    if show_form {
        if let Some(form) = filled_form(outcome) {
            println!();
            println!("Form:");
            match serde_json::to_string_pretty(&form) {
                Ok(json) => println!("{}", json),
                Err(e) => println!("  <unavailable: {}>", e),
            }
        }
    }
}
