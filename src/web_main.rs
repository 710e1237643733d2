//! Web server entry point

use byfood_app::env::{core, EnvVar};
use byfood_app::web::{WebConfig, WebServer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut config = WebConfig::from_env()?;

    // Simple command line parsing; flags override the environment
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    config.bind_addr = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --bind requires an address");
                    std::process::exit(1);
                }
            }
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    config.port = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("Error: Invalid port number");
                        std::process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("Error: --port requires a port number");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Error: Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    config.validate()?;

    if config.is_development() {
        tracing::debug!("running in development mode");
    }

    let server = WebServer::new(config);
    server.start().await?;

    Ok(())
}

fn init_logging() {
    let level = core::LogLevel::get_or_default("info".to_string());
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();
}

fn print_help() {
    println!("ByFood Web Server");
    println!();
    println!("USAGE:");
    println!("    byfood-web [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -b, --bind <ADDRESS>     Bind address [default: 127.0.0.1]");
    println!("    -p, --port <PORT>        Port number [default: 8080]");
    println!("    -h, --help               Print help information");
    println!();
    println!("ENVIRONMENT:");
    println!("    BYFOOD_WEB_BIND_ADDRESS, BYFOOD_WEB_PORT, BYFOOD_LOG_LEVEL");
    println!("    MONGODB_URL, MONGODB_DATABASE, MONGODB_COLLECTION");
    println!();
    println!("EXAMPLES:");
    println!("    byfood-web");
    println!("    byfood-web --bind 0.0.0.0 --port 3000");
}
