use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "mdcontext",
    author,
    version,
    about = "Generate Markdown context documents from project sources.",
    long_about = "mdcontext reads a YAML configuration describing one or more documents and \nrenders each as Markdown: directory trees and fenced file contents gathered \nfrom the configured source paths.",
    help_template = "{about-section}\nUsage: {usage}\n\n{all-args}{after-help}",
    after_help = "EXAMPLES:\n  mdcontext init\n  mdcontext generate\n  mdcontext -c docs/context.yaml generate --stdout\n  mdcontext debug -v",
    arg_required_else_help = true,
    subcommand_required = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short,
        long,
        global = true,
        env = "MDCONTEXT_CONFIG",
        default_value = mdcontext_core::DEFAULT_CONFIG_FILENAME,
        value_name = "PATH",
        help = "Path to the YAML configuration file."
    )]
    pub config: String,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Directory that projectPath and output paths resolve against (default: current dir)."
    )]
    pub project_root: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true, help = "Increase message verbosity (-v, -vv, -vvv).")]
    pub verbose: u8,

    #[arg(
        short,
        long,
        global = true,
        help = "Silence informational messages and warnings."
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    #[command(about = "Write the default configuration file.")]
    Init,

    #[command(
        visible_alias = "g",
        visible_alias = "gen",
        about = "Render every configured document."
    )]
    Generate(GenerateArgs),

    #[command(
        visible_alias = "d",
        about = "Show effective configuration and the files each source would include."
    )]
    Debug,

    #[command(about = "Print a shell completion script.")]
    Completion(CompletionArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[arg(
        long,
        help = "Print the rendered Markdown to standard output instead of writing files.",
        help_heading = "Output Control"
    )]
    pub stdout: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionArgs {
    #[arg(
        long,
        value_name = "SHELL",
        help = "Shell to generate completions for (fish, bash, zsh) [default: fish]"
    )]
    pub shell: Option<String>,
}
