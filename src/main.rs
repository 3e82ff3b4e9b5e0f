use std::path::PathBuf;
use std::str::FromStr;

use alloy_primitives::Address;
use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use yearn_plugin::config::{self, Config};
use yearn_plugin::decoder;
use yearn_plugin::domain::{Selector, SELECTOR_SIZE};
use yearn_plugin::plugin::{dispatch, InitContract, Message, Reply, Response, INTERFACE_VERSION};
use yearn_plugin::{DecodeContext, DisplayField, Status};

#[derive(Debug, Parser)]
#[command(
    name = "yearn-plugin",
    version,
    about = "Decode a Yearn vault transaction into review screens"
)]
struct Args {
    /// Contract the transaction is sent to
    #[arg(long)]
    to: String,

    /// Transaction calldata as hex (e.g. 0xb6b55f25...)
    #[arg(long)]
    data: String,

    /// Print the review as JSON
    #[arg(long)]
    json: bool,

    /// Config file (defaults to ~/.config/yearn-plugin/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log every decoding step to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum Outcome {
    /// Call decoded, screens ready
    Ok {
        plugin: &'static str,
        operation: &'static str,
        fields: Vec<DisplayField>,
    },
    /// Not a recognized call; the host shows raw data instead
    Unavailable { reason: String, data: String },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = config::load(args.config.as_deref());
    let destination = Address::from_str(args.to.trim())
        .with_context(|| format!("invalid --to address '{}'", args.to))?;
    let calldata = parse_calldata(&args.data)?;

    let outcome = review(&calldata, destination, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&outcome);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_calldata(input: &str) -> Result<Vec<u8>> {
    let input = input.trim();
    let payload = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    let calldata = hex::decode(payload).context("calldata is not valid hex")?;
    if calldata.len() < SELECTOR_SIZE {
        bail!("calldata too short (need at least 4 bytes for selector)");
    }
    Ok(calldata)
}

/// Drive the plugin through one review the way a signing host would
fn review(calldata: &[u8], destination: Address, config: &Config) -> Result<Outcome> {
    let (selector, arguments) = calldata.split_at(SELECTOR_SIZE);
    let selector: Selector = selector.try_into()?;

    let mut ctx = DecodeContext::new();
    let init = InitContract {
        interface_version: config.interface_version.unwrap_or(INTERFACE_VERSION),
        ..InitContract::new(selector, destination)
    };
    let response = dispatch(&mut ctx, Message::InitContract(init));
    if response.status == Status::Unavailable {
        let reason = response
            .error
            .map(|err| err.to_string())
            .unwrap_or_else(|| "unavailable".to_string());
        return Ok(Outcome::Unavailable {
            reason,
            data: format!("0x{}", hex::encode(calldata)),
        });
    }
    expect_ok(response, "init")?;

    for word in decoder::words(arguments) {
        expect_ok(dispatch(&mut ctx, Message::ProvideParameter(word)), "provide parameter")?;
    }

    let Reply::Finalized(finalized) = expect_ok(dispatch(&mut ctx, Message::Finalize), "finalize")?.reply
    else {
        bail!("finalize returned no field count");
    };

    if let Some(token) = finalized.token_lookup {
        let info = config.token_info(&token);
        if info.is_none() {
            tracing::info!(%token, "token not configured, amount shown unscaled");
        }
        expect_ok(dispatch(&mut ctx, Message::ProvideInfo(info)), "provide info")?;
    }

    let Reply::Identity(identity) =
        expect_ok(dispatch(&mut ctx, Message::QueryContractId), "query contract id")?.reply
    else {
        bail!("query contract id returned no identity");
    };

    let fields = (0..finalized.field_count)
        .map(|index| {
            match expect_ok(dispatch(&mut ctx, Message::QueryContractUi { index }), "query ui")?.reply {
                Reply::Field(field) => Ok(field),
                _ => Err(anyhow!("field {index} missing")),
            }
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Outcome::Ok {
        plugin: identity.name,
        operation: identity.operation,
        fields,
    })
}

fn expect_ok(response: Response, step: &str) -> Result<Response> {
    if response.is_ok() {
        return Ok(response);
    }
    match response.error {
        Some(err) => Err(anyhow::Error::new(err).context(format!("{step} failed"))),
        None => bail!("{step} failed with status {:?}", response.status),
    }
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Ok {
            plugin,
            operation,
            fields,
        } => {
            println!("{} - {}", plugin, operation);
            for field in fields {
                println!("  {}: {}", field.label, field.value);
            }
        }
        Outcome::Unavailable { reason, data } => {
            println!("Not decoded ({}); raw data:", reason);
            println!("  {}", data);
        }
    }
}
