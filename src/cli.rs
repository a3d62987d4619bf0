use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "section-filter")]
pub struct Args {
    /// Join the command words and hand them to the platform shell
    /// instead of exec-ing them as an argv vector.
    #[arg(long)]
    pub shell: bool,

    /// Config file path; defaults to ./.section-filter.toml when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
    pub command: Vec<String>,
}
