use crate::prelude::{eprintln, println, *};
use casemorph_core::morph::{morph, Morphed};

#[derive(Debug, clap::Args, Clone)]
pub struct MorphOptions {
    /// Text to transform (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(options: MorphOptions, global: crate::Global) -> Result<()> {
    let input = crate::input::read_input(options.text).await?;
    let manager = crate::config::open_settings(&global)?;

    if global.verbose {
        eprintln!("Order: {}", manager.order());
        eprintln!("Default output: {}", manager.default_output());
    }

    let results = morph_data(&manager.ordered_enabled(), &input)?;

    if options.json {
        let json = serde_json::to_string_pretty(&results)
            .map_err(|e| eyre!("JSON serialization failed: {}", e))?;
        println!("{json}");
    } else {
        output_table(&results);
    }

    Ok(())
}

/// Public function for MCP reuse - apply the given transformations in order
pub fn morph_data<S: AsRef<str>>(names: &[S], input: &str) -> Result<Vec<Morphed>> {
    morph(names, input).map_err(|e| {
        eyre!(
            "{}. Run `casemorph list --all` to see the available transformations",
            e
        )
    })
}

fn output_table(results: &[Morphed]) {
    if results.is_empty() {
        println!("No transformations enabled. Use `casemorph settings enable <NAME>`.");
        return;
    }

    let mut table = crate::prelude::new_table();
    table.add_row(prettytable::row!["Transformation", "Result"]);

    for result in results {
        table.add_row(prettytable::row![result.name, result.output]);
    }

    table.printstd();
}
