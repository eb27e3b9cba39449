//! BrainPlus - CLI

use anyhow::{Context, Result};
use brainplus::frontend::{CompileConfig, CompileError, Compiler, Program};
use brainplus::util::{config, diagnostic, logger};
use brainplus::{NAME, VERSION};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Front end for the BrainPlus language
#[derive(Parser, Debug)]
#[command(name = "brainplus")]
#[command(author = "BrainPlus Team")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Additional include search directory (repeatable)
    #[arg(short = 'I', value_name = "DIR", global = true)]
    include: Vec<PathBuf>,

    /// Configuration file to use instead of brainplus.toml
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a program and all of its includes
    Check {
        /// Entry source file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the syntax tree of a program
    Ast {
        /// Entry source file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the tokens of a single file
    Tokens {
        /// Source file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print version information
    Version,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let file = match &args.command {
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
            return Ok(ExitCode::SUCCESS);
        }
        Commands::Check { file } | Commands::Ast { file, .. } | Commands::Tokens { file } => {
            file.clone()
        }
    };

    let file_config = config::load_for_entry(&file, args.config.as_deref())
        .context("Failed to load configuration")?;
    let level = if args.verbose {
        logger::LogLevel::Debug
    } else {
        file_config.log.level.unwrap_or_default()
    };
    logger::init_with_level(level);

    let compile_config = with_cli_includes(file_config.compile, &args.include);
    let mut compiler = Compiler::new(compile_config);

    let outcome = match args.command {
        Commands::Check { file } => compiler.compile_file(&file).map(|program| {
            eprintln!(
                "{}: ok ({} file(s), {} define(s), {} function(s))",
                file.display(),
                program.files.len(),
                program.symbols.define_count(),
                program.symbols.function_count()
            );
        }),
        Commands::Ast { file, json } => match compiler.compile_file(&file) {
            Ok(program) => {
                print_program(&program, json)?;
                Ok(())
            }
            Err(err) => Err(err),
        },
        Commands::Tokens { file } => {
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read file: {}", file.display()))?;
            compiler.lex(&source).map(|tokens| {
                for token in tokens {
                    println!("{}\t{}", token.location, token.kind);
                }
            })
        }
        Commands::Version => Ok(()),
    };

    Ok(report(outcome, &file))
}

/// `-I` directories are searched before configured ones
fn with_cli_includes(
    mut config: CompileConfig,
    include: &[PathBuf],
) -> CompileConfig {
    let configured = std::mem::take(&mut config.include_paths);
    config.include_paths = include.iter().cloned().chain(configured).collect();
    config
}

fn print_program(
    program: &Program,
    json: bool,
) -> Result<()> {
    if json {
        let text = serde_json::to_string_pretty(program).context("Failed to serialize AST")?;
        println!("{}", text);
        return Ok(());
    }
    for entry in program.symbols.defines() {
        println!("{}", entry.item);
    }
    for entry in program.symbols.functions() {
        println!("{}", entry.item);
    }
    if let Some(main) = &program.main {
        println!("{}", main);
    }
    Ok(())
}

fn report(
    outcome: std::result::Result<(), CompileError>,
    file: &Path,
) -> ExitCode {
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let diagnostic = err.diagnostic().clone().in_file(file.display().to_string());
            diagnostic::emit([&diagnostic]);
            ExitCode::FAILURE
        }
    }
}
