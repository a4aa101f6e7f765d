pub mod create;

use clap::Parser;

/// next-scaffold - create a Next.js app with a static or serverless build
#[derive(Parser, Debug)]
#[command(name = "next-scaffold", version, about, long_about = None)]
pub struct Cli {
    /// Name of the project to create (whitespace becomes '-', lower-cased)
    pub project_name: Option<String>,

    /// Backend project identifier written to .firebaserc and .env.example
    pub project_id: Option<String>,

    /// Export a static site instead of moving the build into functions/
    #[arg(long = "static")]
    pub static_export: bool,

    /// Parent directory (default: current directory)
    #[arg(long, default_value = ".")]
    pub path: String,

    /// Write the project files but do not install dependencies
    #[arg(long)]
    pub skip_install: bool,

    /// Package manager used to install dependencies
    #[arg(long, default_value = "npm")]
    pub package_manager: String,

    /// Simulate operations without writing any files or running commands
    #[arg(long)]
    pub dry_run: bool,
}
