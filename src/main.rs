use clap::Parser;
use std::collections::HashMap;
use tripwise_gateway::utils::logger;
use tripwise_gateway::{ApiRequest, Gateway, GatewayConfig, ResponseBody};

#[derive(Debug, Parser)]
#[command(name = "tripwise-gateway")]
#[command(about = "Invoke a gateway route locally")]
struct Cli {
    /// Route path, e.g. api/weather
    path: String,

    /// Query parameter as key=value (repeatable)
    #[arg(long = "param", value_parser = parse_key_val)]
    params: Vec<(String, String)>,

    /// Write binary response bodies to this file instead of summarizing them
    #[arg(long)]
    output: Option<std::path::PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting tripwise-gateway CLI");

    let config = GatewayConfig::from_env()?;
    let gateway = Gateway::new(&config)?;

    let request = ApiRequest {
        method: "GET".to_string(),
        path: cli.path,
        params: cli.params.into_iter().collect::<HashMap<_, _>>(),
    };

    let response = gateway.handle(&request).await;
    tracing::info!("Response status: {}", response.status);

    let status = response.status;
    let content_type = response
        .header("Content-Type")
        .unwrap_or("application/octet-stream")
        .to_string();

    match response.body {
        ResponseBody::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        ResponseBody::Binary(bytes) => match &cli.output {
            Some(path) => {
                std::fs::write(path, &bytes)?;
                println!("Wrote {} bytes to {}", bytes.len(), path.display());
            }
            None => println!("<{} bytes of {}>", bytes.len(), content_type),
        },
        ResponseBody::Empty => {}
    }

    if status >= 400 {
        std::process::exit(1);
    }

    Ok(())
}
