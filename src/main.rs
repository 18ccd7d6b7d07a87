//! APEX Pipeline Simulator CLI.
//!
//! `--program` is mandatory and fails fast if omitted. `--data` and
//! `--cycles` fall back to interactive stdin prompts when left unset.

use clap::Parser;
use std::io::Write;
use std::process;

use apex_pipeline_sim::common::SimError;
use apex_pipeline_sim::config::Config;
use apex_pipeline_sim::core::cpu::Cpu;
use apex_pipeline_sim::sim::driver::{self, CycleBudget, SingleStep};
use apex_pipeline_sim::sim::loader;

/// Command-line arguments for the APEX pipeline simulator.
#[derive(Parser, Debug)]
#[command(author, version, about = "APEX Cycle-Accurate Pipeline Simulator")]
struct Args {
    /// Path to the program text file.
    #[arg(short, long)]
    program: Option<String>,

    /// Path to a comma-separated initial data-memory image.
    #[arg(short, long)]
    data: Option<String>,

    /// Number of cycles to simulate; 0 runs to completion.
    #[arg(long)]
    cycles: Option<u64>,

    /// Path to a TOML configuration file.
    #[arg(long)]
    config: Option<String>,

    /// Enables per-cycle trace output.
    #[arg(long)]
    trace: bool,

    /// Runs one cycle at a time, prompting between cycles.
    #[arg(long)]
    single_step: bool,
}

fn prompt(message: &str) -> String {
    print!("{message}");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().read_line(&mut line);
    line.trim().to_string()
}

fn prompt_yes_no(message: &str) -> bool {
    prompt(message).eq_ignore_ascii_case("y")
}

fn fatal(err: impl std::fmt::Display) -> ! {
    eprintln!("error: {err}");
    process::exit(1);
}

fn main() {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path).unwrap_or_else(|e| {
                fatal(SimError::Io {
                    path: path.clone(),
                    source: e,
                })
            });
            toml::from_str(&text).unwrap_or_else(|e| {
                fatal(SimError::Config {
                    message: e.to_string(),
                })
            })
        }
        None => Config::default(),
    };

    let program_path = args.program.clone().unwrap_or_else(|| {
        eprintln!("error: no program specified");
        process::exit(1);
    });

    let program = loader::load_program(&program_path).unwrap_or_else(|e| fatal(e));

    let mut cpu = Cpu::new(program, config.general.data_memory_size, args.trace);
    cpu.pc = config.general.start_pc_val();

    let data_path = args.data.clone().or_else(|| {
        if prompt_yes_no("load memory from a file? (y/n): ") {
            Some(prompt("enter the filename: "))
        } else {
            None
        }
    });
    if let Some(data_path) = &data_path {
        loader::load_data_memory(data_path, &mut cpu.data_memory).unwrap_or_else(|e| fatal(e));
    }

    let single_step = args.single_step;
    let run_result = if single_step {
        driver::run(&mut cpu, &mut SingleStep)
    } else {
        let simulate = args.cycles.is_some() || prompt_yes_no("simulate? (y/n): ");
        if !simulate {
            return;
        }
        let budget = args.cycles.unwrap_or_else(|| {
            prompt("enter the number of cycles to simulate (0 = run indefinitely): ")
                .parse()
                .unwrap_or(0)
        });
        driver::run(&mut cpu, &mut CycleBudget { budget })
    };

    if let Err(e) = run_result {
        fatal(e);
    }

    if prompt_yes_no("display CPU state? (y/n): ") {
        cpu.dump_state();
    }

    cpu.stats.print();
}
