use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use tsgen_blueprint::BlueprintFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to the blueprint (defaults to ./tsgen.toml)
    #[arg(short, long, default_value = "tsgen.toml")]
    pub blueprint: PathBuf,
}

impl CheckCommand {
    pub fn run(&self) -> Result<()> {
        let file = BlueprintFile::open(&self.blueprint).unwrap_or_exit();
        file.render(None).unwrap_or_exit();

        let files = &file.blueprint().files;
        let interfaces: usize = files.iter().map(|f| f.interfaces.len()).sum();
        let classes: usize = files.iter().map(|f| f.classes.len()).sum();

        println!(
            "{} is valid ({} files, {} interfaces, {} classes)",
            self.blueprint.display(),
            files.len(),
            interfaces,
            classes
        );

        Ok(())
    }
}
