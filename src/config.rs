use clap::Args;

/// Output switches shared by the scoring subcommands, flattened into each
/// subcommand's argument struct.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputOptions {
    /// Emit game summaries as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Also print the per-frame base/bonus breakdown table.
    #[arg(long, default_value_t = false)]
    pub breakdown: bool,
}
