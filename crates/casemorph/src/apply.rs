use crate::prelude::{eprintln, println, *};

#[derive(Debug, clap::Args, Clone)]
pub struct ApplyOptions {
    /// Transformation name, as shown by `casemorph list --all`
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Text to transform (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,
}

pub async fn run(options: ApplyOptions, global: crate::Global) -> Result<()> {
    let input = crate::input::read_input(options.text).await?;

    if global.verbose {
        eprintln!("Applying {} to {} chars", options.name, input.chars().count());
    }

    let output = apply_data(&options.name, &input)?;
    println!("{output}");

    Ok(())
}

/// Public function for MCP reuse - run one transformation by name
pub fn apply_data(name: &str, input: &str) -> Result<String> {
    casemorph_core::transform(name, input).map_err(|e| {
        eyre!(
            "{}. Run `casemorph list --all` to see the available transformations",
            e
        )
    })
}
