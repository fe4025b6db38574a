//! Read-address channel handshake simulator CLI.
//!
//! This binary builds a simulation from a JSON config (or defaults),
//! pre-fills the request queue, runs it for a fixed number of cycles, and
//! prints driver statistics.

use clap::{Parser, Subcommand};
use std::cell::RefCell;
use std::rc::Rc;
use std::{fs, process};

use axsim_core::bus::{
    BusRequest, FifoQueue, ReadRequest, ReadyMode, ReadyResponder, RequestQueue,
};
use axsim_core::config::Config;
use axsim_core::sim::ResetGen;
use axsim_core::{ArChannel, ReadAddressDriver, Sim};

#[derive(Parser, Debug)]
#[command(
    name = "axsim",
    author,
    version,
    about = "AXI read-address channel handshake simulator",
    long_about = "Drive a stream of read requests through a simulated \
VALID/READY handshake and report completions, idle cycles, and stalls.\n\n\
Examples:\n  axsim run --requests 16\n  axsim run --requests 8 --ready-delay 3\n  \
axsim run --config channel.json --cycles 500"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a request stream to completion.
    Run {
        /// JSON configuration file (defaults used when omitted).
        #[arg(short, long)]
        config: Option<String>,

        /// Number of read requests to enqueue.
        #[arg(short, long, default_value_t = 8)]
        requests: u64,

        /// Cycles the receiver holds ready low after seeing valid
        /// (always-ready when omitted).
        #[arg(long)]
        ready_delay: Option<u64>,

        /// Clock cycles to simulate.
        #[arg(long, default_value_t = 200)]
        cycles: u64,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            config,
            requests,
            ready_delay,
            cycles,
        } => cmd_run(config, requests, ready_delay, cycles),
    }
}

/// Builds the simulation, runs it, and prints statistics.
fn cmd_run(config_path: Option<String>, requests: u64, ready_delay: Option<u64>, cycles: u64) {
    let config = load_config(config_path);

    let mut sim = Sim::new();
    let chan = match ArChannel::new(&mut sim, &config.channel) {
        Ok(chan) => chan,
        Err(e) => {
            eprintln!("Error building channel: {e}");
            process::exit(1);
        }
    };

    let queue = FifoQueue::shared();
    for i in 0..requests {
        let mut request = ReadRequest::new(0x1000 + i * 0x40);
        request.id = i;
        request.len = 3;
        request.size = 2;
        request.burst = 1;
        queue.borrow_mut().push(BusRequest::Read(request));
    }

    let shared: Rc<RefCell<dyn RequestQueue>> = queue.clone();
    let driver = ReadAddressDriver::new(chan.clone(), shared, config.driver.rready_policy);
    let stats = driver.stats();

    let ready_mode = ready_delay.map_or(ReadyMode::Always, ReadyMode::Delay);
    sim.add_process(Box::new(ResetGen::new(
        chan.clk,
        chan.reset_n,
        config.sim.reset_cycles,
    )));
    sim.add_process(Box::new(ReadyResponder::new(&chan, ready_mode)));
    sim.add_process(Box::new(driver));

    println!(
        "[*] {} requests, ready mode {:?}, {} cycles budget",
        requests, ready_mode, cycles
    );

    if let Err(e) = sim.run_cycles(cycles) {
        eprintln!("\n[!] SIMULATION FAULT: {e}");
        stats.borrow().print();
        process::exit(1);
    }

    let stats = stats.borrow();
    println!("\n[*] Finished at cycle {}", sim.cycle());
    stats.print();
    if stats.requests_completed < requests {
        println!(
            "[!] {} request(s) still pending at end of run",
            requests - stats.requests_completed
        );
    }
}

/// Reads a JSON config file, or returns defaults when no path is given.
fn load_config(path: Option<String>) -> Config {
    let Some(path) = path else {
        return Config::default();
    };
    let text = fs::read_to_string(&path).unwrap_or_else(|e| {
        eprintln!("Error reading config {path}: {e}");
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Error parsing config {path}: {e}");
        process::exit(1);
    })
}
