// oni-mods: Oxygen Not Included mod project tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   New | Validate | Info | Bump | Install | Options | Configs | Version
//! ```

use std::process::ExitCode;

use oni_mods::cli::{self, Command};
use oni_mods::cmd::bump::run_bump_command;
use oni_mods::cmd::config::{build_config_loader, run_configs_command, run_options_command};
use oni_mods::cmd::info::run_info_command;
use oni_mods::cmd::install::run_install_command;
use oni_mods::cmd::new::run_new_command;
use oni_mods::cmd::validate::run_validate_command;
use oni_mods::config::types::GlobalConfig;
use oni_mods::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = cli::parse();

    let Some(command) = &cli.command else {
        println!("{}", cli::render_help());
        return ExitCode::SUCCESS;
    };

    let (config, config_files) = match build_config_loader(&cli.global).and_then(|loader| {
        let files = loader.format_loaded_files();
        loader.build().map(|config| (config, files))
    }) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Error: failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config.global)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    let result = match command {
        Command::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Options => {
            run_options_command(&config);
            Ok(())
        }
        Command::Configs => {
            run_configs_command(&config_files);
            Ok(())
        }
        Command::New(args) => run_new_command(args, &config).await,
        Command::Validate(args) => run_validate_command(args),
        Command::Info(args) => run_info_command(args),
        Command::Bump(args) => run_bump_command(args, config.global.dry),
        Command::Install(args) => run_install_command(args, &config).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn build_log_config(global: &GlobalConfig) -> LogConfig {
    LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(global.file_log_level)
        .maybe_with_log_file(global.log_file().map(std::path::Path::to_path_buf))
        .with_show_timestamps(false)
        .build()
}
