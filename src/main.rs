use numy::{Numy, from_code};
use std::{
    error::Error,
    io::{self, BufRead, Write},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const USAGE: &str = "usage: numy <EUS|CAT|GLG> [--tagged] [TEXT ...]";

fn init_logging() {
    let filter = EnvFilter::try_from_env("NUMY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .try_init();
}

fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    init_logging();

    let mut args = std::env::args().skip(1);
    let code = args.next().ok_or(USAGE)?;
    let lang = from_code(&code).ok_or_else(|| format!("unknown language `{code}`\n{USAGE}"))?;

    let mut tagged = false;
    let mut inputs = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--tagged" => tagged = true,
            _ => inputs.push(arg),
        }
    }

    let numy = Numy::builder().lang(lang).build()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut emit = |line: &str| -> Result<(), Box<dyn Error + Send + Sync>> {
        let normalized = numy.normalize(line)?;
        if tagged {
            writeln!(out, "{}", normalized.tagged())?;
        } else {
            writeln!(out, "{}", normalized.text())?;
        }
        Ok(())
    };

    if inputs.is_empty() {
        for line in io::stdin().lock().lines() {
            emit(&line?)?;
        }
    } else {
        emit(&inputs.join(" "))?;
    }
    Ok(())
}
