use clap::Parser;

mod cli;
mod commands;
mod domain;
mod remote;
mod services;
mod telemetry;

use cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing();

    let settings = services::settings::load_settings(cli.config.as_deref())?;
    let root = std::env::current_dir()?;

    commands::handle_runtime_commands(&cli, &settings, &root)
}
