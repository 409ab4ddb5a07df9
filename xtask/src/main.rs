// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask
//!
//! Automation for the cinema tickets workspace.
//!
//! - `cargo xtask ci` checks formatting, runs clippy and rustdoc, then tests
//! - `cargo xtask test --package cinema-tickets` tests a single crate
//! - `cargo xtask serve -- --max-tickets-per-purchase 10` runs the server

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use cargo_metadata::{Metadata, MetadataCommand, Package};
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, bail},
};
use duct::Expression;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Binary crate that serves the ticket API.
const SERVER_PACKAGE: &str = "cinema-tickets-server";

/// Default log filter handed to the server when `RUST_LOG` is unset.
const SERVER_LOG_FILTER: &str = "info";

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    if let Err(err) = args.command.run() {
        tracing::error!("{err:?}");
        std::process::exit(1);
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Formatting check, lints and tests, in that order
    CI,

    /// Format the workspace, or only check it with `--check`
    Fmt {
        #[arg(long)]
        check: bool,
    },

    /// Run clippy and build the library docs with warnings denied
    #[command(visible_alias = "l")]
    Lint,

    /// Run the tests of every crate, or of one crate
    #[command(visible_alias = "t")]
    Test {
        /// Workspace crate to test
        #[arg(short, long)]
        package: Option<String>,
    },

    /// Write an lcov report to `target/lcov.info`
    #[command(visible_alias = "cov")]
    Coverage,

    /// Run the ticket server locally
    #[command(visible_alias = "s")]
    Serve {
        /// Arguments passed through to the server binary
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        server_args: Vec<String>,
    },
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => {
                fmt(true)?;
                lint()?;
                test(None)
            }
            Self::Fmt { check } => fmt(check),
            Self::Lint => lint(),
            Self::Test { package } => test(package.as_deref()),
            Self::Coverage => coverage(),
            Self::Serve { server_args } => serve(&server_args),
        }
    }
}

/// Formatting uses the nightly toolchain.
fn fmt(check: bool) -> Result<()> {
    let mut args: Vec<&str> = vec!["fmt", "--all"];
    if check {
        args.push("--check");
    }
    run(&nightly(&cargo(&args)))
}

fn lint() -> Result<()> {
    run(&cargo(&[
        "clippy",
        "--workspace",
        "--all-targets",
        "--",
        "-D",
        "warnings",
    ]))?;

    let metadata: Metadata = workspace_metadata()?;
    for package in metadata.workspace_packages() {
        if !has_library(package) {
            continue;
        }
        let doc: Expression = cargo(&["doc", "--no-deps", "--package", &package.name]);
        run(&nightly(&doc).env("RUSTDOCFLAGS", "--cfg docsrs -D warnings"))?;
    }
    Ok(())
}

fn test(package: Option<&str>) -> Result<()> {
    match package {
        Some(name) => {
            let metadata: Metadata = workspace_metadata()?;
            ensure_workspace_package(&metadata, name)?;
            run(&cargo(&["test", "--package", name]))
        }
        None => run(&cargo(&["test", "--workspace", "--all-targets"])),
    }
}

fn coverage() -> Result<()> {
    run(&cargo(&[
        "llvm-cov",
        "--workspace",
        "--lcov",
        "--output-path",
        "target/lcov.info",
    ]))
}

fn serve(server_args: &[String]) -> Result<()> {
    let mut args: Vec<&str> = vec!["run", "--package", SERVER_PACKAGE, "--"];
    args.extend(server_args.iter().map(String::as_str));

    let log_filter: String =
        std::env::var("RUST_LOG").unwrap_or_else(|_| SERVER_LOG_FILTER.to_string());
    run(&cargo(&args).env("RUST_LOG", log_filter))
        .wrap_err("ticket server exited with an error")
}

fn workspace_metadata() -> Result<Metadata> {
    MetadataCommand::new()
        .no_deps()
        .exec()
        .wrap_err("failed to read cargo metadata")
}

fn has_library(package: &Package) -> bool {
    package.targets.iter().any(cargo_metadata::Target::is_lib)
}

fn ensure_workspace_package(metadata: &Metadata, name: &str) -> Result<()> {
    let names: Vec<String> = metadata
        .workspace_packages()
        .into_iter()
        .map(|package| package.name.to_string())
        .collect();
    if names.iter().any(|known| known == name) {
        return Ok(());
    }
    bail!("unknown package `{name}`, expected one of: {}", names.join(", "))
}

fn cargo(args: &[&str]) -> Expression {
    duct::cmd("cargo", args.iter().copied())
}

/// Switches an expression to the nightly toolchain.
fn nightly(expression: &Expression) -> Expression {
    // CARGO points at the stable cargo that launched the xtask
    expression
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
}

/// Runs an expression, logging it first and again if it fails.
fn run(expression: &Expression) -> Result<()> {
    tracing::info!("running {expression:?}");
    expression
        .run()
        .map(drop)
        .wrap_err_with(|| format!("command failed: {expression:?}"))
}
