//! nip13 CLI - offline command compiler
//!
//! All operations are JSON in, JSON out:
//!   nip13 compile <request.json>          → ordered inner transactions
//!   nip13 compile -                       → read the request from stdin
//!   nip13 commands                        → registered commands and their options
//!
//! Request:
//!   {
//!     "command": "CreateToken",
//!     "network": {"network_type": "testnet"},
//!     "actor": "<public key>",
//!     "target": "<public key>",
//!     "arguments": {"name": "company.token", "source": "company", ...},
//!     "ledger": {"multisig": {...}}      (optional ledger snapshot)
//!   }
//!
//! Options:
//!   --snapshot <file>   ledger snapshot, overrides the request's "ledger"
//!   --max-fee <n>       max fee copied into every transaction
//!   --pretty            pretty-print JSON (default for tty)

use anyhow::{anyhow, bail, Context as _, Result};
use nip13::logging::init_logging;
use nip13::{
    Context, Deadline, Executable, NetworkConfig, NetworkType, Nip13, PublicAccount, PublicKey, Snapshot, Standard,
    TransactionParameters,
};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use std::env;
use std::io::{self, IsTerminal, Read};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct Request {
    command: String,
    #[serde(default)]
    revision: Option<u32>,
    #[serde(default)]
    network: NetworkConfig,
    actor: PublicKey,
    target: PublicKey,
    #[serde(default)]
    arguments: Map<String, Value>,
    #[serde(default)]
    ledger: Option<Snapshot>,
    #[serde(default)]
    deadline_hours: Option<i64>,
}

#[tokio::main]
async fn main() {
    init_logging();

    let args: Vec<String> = env::args().collect();
    let opts = match ParsedArgs::parse(&args[1..]) {
        Ok(opts) => opts,
        Err(e) => fail(&e, io::stdout().is_terminal()),
    };

    if opts.help {
        print_usage();
        return;
    }

    if opts.version {
        println!("nip13 {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let result = match opts.command.as_deref() {
        Some("compile") => cmd_compile(&opts).await,
        Some("commands") => Ok(cmd_commands()),
        Some(cmd) => Err(anyhow!("Unknown command: {}", cmd)),
        None => {
            print_usage();
            return;
        }
    };

    let pretty = opts.pretty || io::stdout().is_terminal();
    match result {
        Ok(output) => println!("{}", render(&output, pretty)),
        Err(e) => fail(&e, pretty),
    }
}

fn fail(error: &anyhow::Error, pretty: bool) -> ! {
    eprintln!("{}", render(&json!({"error": format!("{:#}", error)}), pretty));
    std::process::exit(1);
}

fn render(value: &Value, pretty: bool) -> String {
    let rendered = if pretty { serde_json::to_string_pretty(value) } else { serde_json::to_string(value) };
    rendered.unwrap_or_else(|e| format!("{{\"error\":\"render: {}\"}}", e))
}

#[derive(Default)]
struct ParsedArgs {
    command: Option<String>,
    request: Option<String>,
    snapshot: Option<String>,
    max_fee: Option<u64>,
    pretty: bool,
    help: bool,
    version: bool,
}

impl ParsedArgs {
    fn parse(args: &[String]) -> Result<Self> {
        let mut opts = Self::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => opts.help = true,
                "-V" | "--version" => opts.version = true,
                "--pretty" => opts.pretty = true,
                "--snapshot" => {
                    let path = iter.next().ok_or_else(|| anyhow!("--snapshot needs a file"))?;
                    opts.snapshot = Some(path.clone());
                }
                "--max-fee" => {
                    let value = iter.next().ok_or_else(|| anyhow!("--max-fee needs a value"))?;
                    let max_fee = value.parse::<u64>().with_context(|| format!("--max-fee: '{}' is not a fee", value))?;
                    opts.max_fee = Some(max_fee);
                }
                flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
                other if opts.command.is_none() => opts.command = Some(other.to_string()),
                other if opts.request.is_none() => opts.request = Some(other.to_string()),
                other => debug!("ignoring argument {}", other),
            }
        }
        Ok(opts)
    }
}

fn read_request(source: &str) -> Result<Request> {
    let raw = if source == "-" {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf).context("read stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("read {}", source))?
    };
    serde_json::from_str(&raw).context("parse request")
}

async fn cmd_compile(opts: &ParsedArgs) -> Result<Value> {
    let Some(source) = opts.request.as_deref() else {
        bail!("compile needs a request file or '-'");
    };
    let request = read_request(source)?;

    let ledger = match opts.snapshot.as_deref() {
        Some(path) => Snapshot::load(Path::new(path))?,
        None => request.ledger.unwrap_or_default(),
    };

    let network_type = request.network.network_type;
    let mut parameters = TransactionParameters::default();
    if let Some(hours) = request.deadline_hours {
        parameters = parameters.with_deadline(Deadline::in_hours(hours));
    }
    if let Some(max_fee) = opts.max_fee {
        parameters = parameters.with_max_fee(max_fee);
    }

    let context = Context::new(
        request.revision.unwrap_or(Nip13::REVISION),
        request.network,
        PublicAccount::new(request.actor, network_type),
    )
    .with_parameters(parameters)
    .with_inputs(request.arguments)?;
    let target = PublicAccount::new(request.target, network_type);

    info!(command = %request.command, target = %target.address, "compiling");
    let command = Nip13.get_command(&request.command, context, target)?;
    let transactions = command.execute(&ledger).await?;

    Ok(json!({
        "standard": Nip13.name(),
        "command": command.name(),
        "count": transactions.len(),
        "transactions": transactions,
    }))
}

fn cmd_commands() -> Value {
    let placeholder = PublicAccount::new(PublicKey::from_bytes([0u8; 32]), NetworkType::default());
    let context = Context::new(Nip13::REVISION, NetworkConfig::default(), placeholder);
    let commands: Vec<Value> = Nip13
        .commands()
        .into_iter()
        .filter_map(|name| Nip13.get_command(name, context.clone(), placeholder).ok())
        .map(|command| json!({"name": command.name(), "options": command.options()}))
        .collect();
    json!({"standard": Nip13.name(), "revision": Nip13.revision(), "commands": commands})
}

fn print_usage() {
    println!(
        "nip13 - compile NIP13 token commands into aggregate transaction steps\n\n\
         USAGE:\n    \
             nip13 compile <request.json | -> [--snapshot <file>] [--max-fee <n>] [--pretty]\n    \
             nip13 commands\n\n\
         ENVIRONMENT:\n    \
             RUST_LOG          log filter (default: info)\n    \
             NIP13_LOG_FORMAT  compact | pretty | json (stderr)"
    );
}
