//! scoped-proxy CLI - Walks through copy/move ownership and proxy chain resolution.

use scoped_proxy::prelude::*;
use std::env;
use std::process;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Verbosity level
#[derive(Clone, Copy)]
enum Verbosity {
    Quiet,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    fn directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

fn init_logging(verbosity: Verbosity) {
    // RUST_LOG wins over command-line flags
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags
    let mut verbosity = Verbosity::Info;
    let mut filtered_args: Vec<&str> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => verbosity = Verbosity::Debug,
            "-vv" | "--trace" => verbosity = Verbosity::Trace,
            "-q" | "--quiet" => verbosity = Verbosity::Quiet,
            _ => filtered_args.push(arg),
        }
    }
    init_logging(verbosity);

    let outcome = match filtered_args.first().copied().unwrap_or("all") {
        "all" | "a" => cmd_all(),
        "box" | "b" => cmd_box(),
        "chain" | "c" => {
            let layers = match filtered_args.get(1).map(|s| s.parse::<usize>()) {
                None => 2,
                Some(Ok(n)) => n,
                Some(Err(e)) => {
                    eprintln!("Invalid layer count {:?}: {}", filtered_args[1], e);
                    process::exit(1);
                }
            };
            cmd_chain(layers)
        }
        "cycle" | "y" => cmd_cycle(),
        "help" | "h" | "-h" | "--help" => {
            print_usage(&args[0]);
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            print_usage(&args[0]);
            process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn print_usage(prog: &str) {
    println!("scoped-proxy - Ownership and indirection walkthroughs");
    println!();
    println!("Usage: {} [options] [command]", prog);
    println!();
    println!("Commands:");
    println!("  a, all          Run every walkthrough below (default)");
    println!("  b, box          Wrap, copy and move a boxed value");
    println!("  c, chain [N]    Write through N proxy layers (default 2)");
    println!("  y, cycle        Resolve a self-forwarding proxy");
    println!("  h, help         Show this help");
    println!();
    println!("Options:");
    println!("  -v, --verbose  Debug output");
    println!("  -vv, --trace   Trace output (every ownership change and step)");
    println!("  -q, --quiet    Errors only");
    println!();
    println!("Environment:");
    println!("  {}  Step bound for proxy chains (default {})",
        scoped_proxy::proxy::MAX_DEPTH_ENV, scoped_proxy::proxy::DEFAULT_MAX_DEPTH);
}

fn cmd_all() -> Result<()> {
    println!("== box");
    cmd_box()?;
    println!("== chain");
    cmd_chain(2)?;
    println!("== cycle");
    cmd_cycle()
}

fn cmd_box() -> Result<()> {
    let mut held = ScopedBox::new(10);
    info!("wrapped {:?}", held);

    let copied = held.copy();
    println!("copy:  {} ({:?}, distinct allocation: {})",
        copied.access()?, copied.origin(), copied.address() != held.address());

    let address = held.address();
    let moved = held.take();
    println!("move:  {} ({:?}, same allocation: {})",
        moved.access()?, moved.origin(), moved.address() == address);

    match held.access() {
        Ok(v) => println!("source: still holds {}", v),
        Err(e) => println!("source: {}", e),
    }

    let from_shared: ScopedBox<i32> = ScopedBox::acquire(&moved);
    println!("acquire from shared borrow: {:?}", from_shared.origin());
    Ok(())
}

/// Terminal object reached through the proxies.
struct Client {
    z: i32,
}

/// Proxy layer: either forwards to the next layer or points at the client.
enum Layer<'a> {
    Through(usize, &'a mut Client),
    Direct(&'a mut Client),
}

impl<'a> Node for Layer<'a> {
    type Address = &'a mut Client;

    fn step(self) -> Step<Self> {
        match self {
            Layer::Through(0, client) | Layer::Direct(client) => Step::Terminal(client),
            Layer::Through(n, client) => Step::Forward(Layer::Through(n - 1, client)),
        }
    }
}

fn cmd_chain(layers: usize) -> Result<()> {
    let chain = IndirectionChain::with_config(ChainConfig::from_env()?)?;
    let mut client = Client { z: 3 };
    debug!(layers, max_depth = chain.config().max_depth, "writing through proxy chain");

    let resolved = chain.resolve(Layer::Through(layers, &mut client))?;
    resolved.address.z = 42;
    let steps = resolved.steps;

    let direct = chain.access(Layer::Direct(&mut client), |c| c.z)?;
    println!("client.z = {} after {} steps (direct read: {})", client.z, steps, direct);
    Ok(())
}

/// Proxy that forwards to itself.
struct Loopback;

impl Node for Loopback {
    type Address = ();

    fn step(self) -> Step<Self> {
        Step::Forward(Loopback)
    }
}

fn cmd_cycle() -> Result<()> {
    let chain = IndirectionChain::with_config(ChainConfig::from_env()?)?;
    match chain.resolve(Loopback) {
        Ok(_) => println!("resolved (unexpected)"),
        Err(e) => println!("{}", e),
    }
    Ok(())
}
