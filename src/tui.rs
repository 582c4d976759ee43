use anyhow::Result;

#[derive(Clone, Debug, Default)]
pub struct TuiRunOptions {
    /// Service root, already resolved from flags, environment and config.
    pub base_url: String,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run_with_options(opts)
}
