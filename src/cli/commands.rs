//! Command implementations for the Verdant CLI.

use log::info;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::spelling::*;

/// Execute a CLI command.
pub fn execute_command(args: VerdantArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Check(check_args) => check_message(check_args, config, &args),
        Command::Distance(compare_args) => compare(compare_args, "Edit distance", &args),
        Command::Similarity(compare_args) => compare(compare_args, "Similarity", &args),
        Command::Dictionary(dict_args) => show_dictionary(dict_args, &config, &args),
    }
}

/// Load the corrector configuration, falling back to defaults.
fn load_config(args: &VerdantArgs) -> Result<CorrectorConfig> {
    match &args.config {
        Some(path) => {
            info!("Loading configuration from {}", path.display());
            CorrectorConfig::from_json_file(path)
        }
        None => Ok(CorrectorConfig::default()),
    }
}

/// Check a message and print the correction result.
fn check_message(args: &CheckArgs, config: CorrectorConfig, cli_args: &VerdantArgs) -> Result<()> {
    let terms = collect_terms(args)?;
    info!("Checking message against {} known terms", terms.len());

    let corrector = Corrector::with_config(config);
    let result = corrector.check(&args.message, &terms);
    let notice = if args.notice {
        format_correction_notice(&result)
    } else {
        None
    };

    output_result("Checked message", &CheckOutput { result, notice }, cli_args)
}

/// Known terms from `--term` flags followed by the terms file, if any.
fn collect_terms(args: &CheckArgs) -> Result<Vec<String>> {
    let mut terms = args.terms.clone();

    if let Some(path) = &args.terms_file {
        info!("Loading known terms from {}", path.display());
        let dictionary = Dictionary::load_from_file(path)?;
        terms.extend(dictionary.terms().iter().cloned());
    }

    Ok(terms)
}

/// Compare two strings.
fn compare(args: &CompareArgs, label: &str, cli_args: &VerdantArgs) -> Result<()> {
    let output = ComparisonOutput {
        a: args.a.clone(),
        b: args.b.clone(),
        distance: levenshtein_distance(&args.a, &args.b),
        similarity: similarity(&args.a, &args.b),
    };

    output_result(label, &output, cli_args)
}

/// List or export the configured domain vocabulary.
fn show_dictionary(
    args: &DictionaryArgs,
    config: &CorrectorConfig,
    cli_args: &VerdantArgs,
) -> Result<()> {
    let dictionary = Dictionary::from_terms(&config.domain_terms);

    if let Some(path) = &args.export {
        dictionary.save_to_file(path)?;
        info!("Exported {} terms to {}", dictionary.len(), path.display());
        if cli_args.verbosity() > 0 {
            println!("Exported {} terms to {}", dictionary.len(), path.display());
        }
        return Ok(());
    }

    let output = DictionaryOutput {
        terms: dictionary.terms().to_vec(),
        total_terms: dictionary.len(),
    };
    output_result("Domain vocabulary", &output, cli_args)
}
