//! MR-Kiosk: Metro Recharge kiosk
//!
//! Drives the recharge flow against a running balance API from the
//! terminal. Without `--url` the flow starts at the scanner; type
//! `scan <payload>` to simulate a decoded QR.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use mr_03_flow_controller::{
    FlowConfig, FlowController, FlowEvent, HttpBalanceClient, Locale, DEFAULT_API_BASE,
};
use mr_kiosk::{parse_line, Input, HELP};

/// MR-Kiosk: Metro Recharge kiosk
#[derive(Parser, Debug)]
#[command(name = "mr-kiosk")]
#[command(about = "Line-driven kiosk for recharging Metro tickets")]
struct Args {
    /// Balance API base URL
    #[arg(short, long, default_value = DEFAULT_API_BASE)]
    endpoint: String,

    /// Navigation URL; a `?id=` parameter skips the scanner
    #[arg(short, long)]
    url: Option<String>,

    /// Ask for a payment method before paying
    #[arg(long)]
    method_step: bool,

    /// UI language (es, en)
    #[arg(short, long, default_value = "es")]
    locale: Locale,
}

fn render<A: mr_03_flow_controller::BalanceClient>(controller: &FlowController<A>) {
    println!("{}", controller.view());
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so the screen stays readable
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let client = HttpBalanceClient::new(&args.endpoint)
        .with_context(|| format!("invalid endpoint {}", args.endpoint))?;
    let config = FlowConfig {
        payment_method_step: args.method_step,
        locale: args.locale,
        ..FlowConfig::default()
    };

    let mut controller = FlowController::new(config, client);
    controller.dispatch(FlowEvent::Started { url: args.url });
    render(&controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    break;
                };
                match parse_line(&line) {
                    Ok(None) => {}
                    Ok(Some(Input::Quit)) => break,
                    Ok(Some(Input::Help)) => println!("{}", HELP),
                    Ok(Some(Input::Show)) => render(&controller),
                    Ok(Some(Input::Event(event))) => {
                        controller.dispatch(event);
                        render(&controller);
                    }
                    Err(e) => eprintln!("{}", e),
                }
            }
            Some(event) = controller.next_event() => {
                controller.dispatch(event);
                render(&controller);
            }
        }
    }

    Ok(())
}
