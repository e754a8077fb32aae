mod cli;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use simstore::{Metric, VectorStore};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIMENSION: usize = 128;
const DEFAULT_PORT: u16 = 7878;

struct Options {
    dimension: usize,
    metric: Metric,
    port: u16,
    serve: bool,
}

/// Usage:
///   simstore [--dim N] [--metric cosine|dot|l2]            interactive REPL
///   simstore serve [--dim N] [--metric M] [--port P]       HTTP server
fn parse_options(args: &[String]) -> Result<Options, String> {
    let mut options = Options {
        dimension: DEFAULT_DIMENSION,
        metric: Metric::Cosine,
        port: DEFAULT_PORT,
        serve: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "serve" => options.serve = true,
            "--dim" => {
                i += 1;
                let value = args.get(i).ok_or("--dim requires a value")?;
                options.dimension = value
                    .parse()
                    .map_err(|_| format!("Invalid --dim value: '{}'", value))?;
            }
            "--metric" => {
                i += 1;
                let value = args.get(i).ok_or("--metric requires a value")?;
                options.metric = value.parse()?;
            }
            "--port" => {
                i += 1;
                let value = args.get(i).ok_or("--port requires a value")?;
                options.port = value
                    .parse()
                    .map_err(|_| format!("Invalid --port value: '{}'", value))?;
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    if options.dimension == 0 {
        return Err("--dim must be at least 1".to_string());
    }

    Ok(options)
}

#[actix_web::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let options = match parse_options(&args) {
        Ok(options) => options,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    };

    if options.serve {
        let store = web::Data::new(VectorStore::new(options.dimension, options.metric));
        tracing::info!(
            dimension = options.dimension,
            metric = %options.metric,
            port = options.port,
            "starting simstore server"
        );

        HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .wrap(Cors::permissive())
                .app_data(store.clone())
                .configure(simstore::server::config)
        })
        .bind(("0.0.0.0", options.port))?
        .run()
        .await?;
    } else {
        let store = VectorStore::new(options.dimension, options.metric);
        cli::run_repl(&store);
    }

    Ok(())
}
