use std::path::PathBuf;

use clap::Args;
use eyre::{Context, Result};
use tsgen_blueprint::BlueprintFile;
use tsgen_typescript::{FileRules, Indent, Overwrite, WriteResult};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to the blueprint (defaults to ./tsgen.toml)
    #[arg(short, long, default_value = "tsgen.toml")]
    pub blueprint: PathBuf,

    /// Output directory (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Spaces per indentation level, overriding the blueprint
    #[arg(
        long,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new()
            .range(0..=Indent::MAX_WIDTH as u64)
    )]
    pub indent: Option<usize>,

    /// Print the rendered code instead of writing files
    #[arg(long)]
    pub dry_run: bool,

    /// Leave files that already exist untouched
    #[arg(long)]
    pub keep_existing: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = BlueprintFile::open(&self.blueprint).unwrap_or_exit();
        tracing::debug!(blueprint = %self.blueprint.display(), "loaded blueprint");

        // Renders once up front so failures are reported against the blueprint source.
        let code = file.render(self.indent).unwrap_or_exit();

        if self.dry_run {
            print!("{}", code);
            return Ok(());
        }

        let generator = file.to_generator(&self.output, self.indent);
        let rules = FileRules {
            overwrite: if self.keep_existing {
                Overwrite::IfMissing
            } else {
                Overwrite::Always
            },
        };
        let results = generator
            .generate_with_rules(rules)
            .wrap_err("Failed to generate code")?;

        println!("Generated into {}/", self.output.display());
        for (source, result) in generator.source_files().iter().zip(&results) {
            match result {
                WriteResult::Written => println!("  + {}", source.path()),
                WriteResult::Skipped => println!("  = {} (kept)", source.path()),
            }
        }

        Ok(())
    }
}
