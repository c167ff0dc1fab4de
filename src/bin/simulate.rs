//! Balance simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Options:
//!   -n, --runs N        sessions to simulate (default 100)
//!       --hours N       simulated hours per session (default 72)
//!       --mode M        cloud | intern | hell (default intern)
//!       --personality P angel | fussy (default angel)
//!       --age N         child age in months (default 1)
//!       --seed N        reproducible batch
//!       --json          print the JSON report instead of text

use cradle::modes::{Mode, Personality};
use cradle::simulator::{run_simulation, SimConfig};
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, as_json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(2);
        }
    };

    if !as_json {
        println!("cradle balance simulator v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "mode={} personality={} age={}mo{}",
            config.mode.name(),
            config.personality.name(),
            config.age_months,
            config
                .seed
                .map(|s| format!(" seed={}", s))
                .unwrap_or_default()
        );
        println!();
    }

    let report = run_simulation(&config);

    if as_json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> Result<(SimConfig, bool), String> {
    let mut config = SimConfig::default();
    let mut as_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                config.num_runs = parse_value(args, &mut i)?;
            }
            "--hours" => {
                config.hours = parse_value(args, &mut i)?;
            }
            "--age" => {
                config.age_months = parse_value(args, &mut i)?;
            }
            "--seed" => {
                config.seed = Some(parse_value(args, &mut i)?);
            }
            "--mode" => {
                let value: String = parse_value(args, &mut i)?;
                config.mode = match value.as_str() {
                    "cloud" => Mode::Cloud,
                    "intern" => Mode::Intern,
                    "hell" => Mode::HellWeek,
                    other => return Err(format!("unknown mode: {}", other)),
                };
            }
            "--personality" => {
                let value: String = parse_value(args, &mut i)?;
                config.personality = match value.as_str() {
                    "angel" => Personality::Angel,
                    "fussy" => Personality::Fussy,
                    other => return Err(format!("unknown personality: {}", other)),
                };
            }
            "--json" => as_json = true,
            "-h" | "--help" => {
                return Err(
                    "usage: simulate [-n RUNS] [--hours H] [--mode cloud|intern|hell] \
                     [--personality angel|fussy] [--age MONTHS] [--seed N] [--json]"
                        .to_string(),
                );
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok((config, as_json))
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize) -> Result<T, String> {
    let flag = args[*i].clone();
    *i += 1;
    args.get(*i)
        .ok_or_else(|| format!("{} expects a value", flag))?
        .parse()
        .map_err(|_| format!("{} got an unparsable value", flag))
}
