mod character;
mod commands;
mod registry;
mod sim;
mod teleport;
mod world;

use std::env;
use std::io::BufRead;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};

use sim::{SimConfig, Simulation};

fn main() {
    let _ = tracing_subscriber::fmt().with_target(false).try_init();

    let mut seed: u64 = 0;
    let mut tps: u32 = 20;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => {
                let Some(value) = args.next() else {
                    eprintln!("--seed expects a numeric argument");
                    std::process::exit(2);
                };
                match value.parse::<u64>() {
                    Ok(parsed) => seed = parsed,
                    Err(err) => {
                        eprintln!("invalid seed '{value}': {err}");
                        std::process::exit(2);
                    }
                }
            }
            "--tps" => {
                let Some(value) = args.next() else {
                    eprintln!("--tps expects a numeric argument");
                    std::process::exit(2);
                };
                match value.parse::<u32>() {
                    Ok(parsed) if parsed > 0 => tps = parsed,
                    Ok(_) => {
                        eprintln!("--tps must be at least 1");
                        std::process::exit(2);
                    }
                    Err(err) => {
                        eprintln!("invalid tps '{value}': {err}");
                        std::process::exit(2);
                    }
                }
            }
            "--help" | "-h" => {
                println!("Usage: waygate_sim [--seed <u64>] [--tps <u32>]");
                return;
            }
            other => {
                eprintln!("unknown argument: {other}");
                std::process::exit(2);
            }
        }
    }

    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        eprintln!("\nShutdown signal received, stopping simulation...");
        r.store(false, Ordering::SeqCst);
    })
    .expect("failed to set Ctrl+C handler");

    let (command_tx, command_rx) = mpsc::channel();
    spawn_console_thread(command_tx);

    let config = SimConfig { seed, tps };
    Simulation::new(config, running, command_rx).run();
}

/// Reads console lines on a dedicated thread so the tick loop never blocks
/// on stdin. The thread exits when stdin closes or the receiver is dropped.
fn spawn_console_thread(command_tx: mpsc::Sender<commands::Command>) {
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else {
                break;
            };
            if command_tx.send(commands::parse_command(&line)).is_err() {
                break;
            }
        }
    });
}
