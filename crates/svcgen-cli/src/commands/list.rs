//! Implementation of the `svcgen list` command.

use svcgen_adapters::BuiltinBlueprint;
use svcgen_core::application::{BlueprintListing, describe_blueprint};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let listing = describe_blueprint(&BuiltinBlueprint::new())?;

    // `--output-format json` wins over the list format.
    let format = if output.is_json() {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => {
            output.header(&format!("Blueprint {}:", listing.blueprint))?;
            for row in table_rows(&listing) {
                output.print(&row)?;
            }
        }

        ListFormat::Json => output.json(&listing.templates)?,

        ListFormat::List => {
            for t in &listing.templates {
                println!("{}", t.path);
            }
        }
    }

    Ok(())
}

/// One line per template, paths padded to a common width.
fn table_rows(listing: &BlueprintListing) -> Vec<String> {
    let width = listing
        .templates
        .iter()
        .map(|t| t.path.len())
        .max()
        .unwrap_or(0);

    listing
        .templates
        .iter()
        .map(|t| format!("  {:<width$}  {}", t.path, t.purpose))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_rows_align_purposes() {
        let listing = describe_blueprint(&BuiltinBlueprint::new()).unwrap();
        let rows = table_rows(&listing);

        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.starts_with("  ")));

        let purpose_at: Vec<_> = listing
            .templates
            .iter()
            .zip(&rows)
            .map(|(t, row)| row.find(t.purpose.as_str()).unwrap())
            .collect();
        assert!(purpose_at.windows(2).all(|w| w[0] == w[1]));
    }
}
