use clap::{Args, Parser, Subcommand};
use kl_reload::Result;
use kl_reload::buffer::SourceBuffer;
use kl_reload::notify::StderrNotifier;
use kl_reload::scan::scan_operators;
use kl_reload::settings::Settings;
use kl_reload::{reload, telemetry};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "kl-reload")]
#[command(about = "Reload KL operators in Maya through its command port", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send the reload script for a KL file to Maya.
    Send {
        #[command(flatten)]
        source: SourceArgs,

        /// JSON settings file (host, port, connect_timeout_ms, grace_ms).
        #[arg(long)]
        config: Option<PathBuf>,

        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,

        #[arg(long)]
        connect_timeout_ms: Option<u64>,

        /// Pause after writing before the connection is closed.
        #[arg(long)]
        grace_ms: Option<u64>,
    },
    /// Print the reload script instead of sending it.
    Render {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List the operators declared in a KL file.
    Scan {
        #[command(flatten)]
        source: SourceArgs,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// KL file; with --stdin it only names the path Maya loads from.
    file: PathBuf,

    /// Read the buffer text from stdin (unsaved editor buffers).
    #[arg(long)]
    stdin: bool,
}

impl SourceArgs {
    fn load(&self) -> Result<SourceBuffer> {
        if self.stdin {
            SourceBuffer::from_reader(&self.file, std::io::stdin().lock())
        } else {
            SourceBuffer::from_file(&self.file)
        }
    }
}

fn load_settings(
    config: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    connect_timeout_ms: Option<u64>,
    grace_ms: Option<u64>,
) -> Result<Settings> {
    let mut settings = match config {
        Some(path) => Settings::from_json_file(path)?,
        None => Settings::default(),
    };

    // Flags win over the file.
    if let Some(host) = host {
        settings.host = host;
    }
    if let Some(port) = port {
        settings.port = port;
    }
    if let Some(ms) = connect_timeout_ms {
        settings.connect_timeout_ms = ms;
    }
    if let Some(ms) = grace_ms {
        settings.grace_ms = ms;
    }
    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    match cli.cmd {
        Commands::Send {
            source,
            config,
            host,
            port,
            connect_timeout_ms,
            grace_ms,
        } => {
            let settings =
                load_settings(config.as_deref(), host, port, connect_timeout_ms, grace_ms)?;
            let buffer = source.load()?;

            let report = reload::run(&buffer, &settings, &mut StderrNotifier)?;
            println!(
                "Sent {} operator(s) from {} to {} ({} bytes)",
                report.operators.len(),
                buffer.path,
                settings.endpoint(),
                report.bytes_sent
            );
        }
        Commands::Render { source } => {
            let buffer = source.load()?;
            let (_, script) = reload::prepare(&buffer)?;
            print!("{}", script.as_str());
        }
        Commands::Scan { source } => {
            let buffer = source.load()?;
            for op in scan_operators(&buffer.text)? {
                println!("{}", op);
            }
        }
    }

    Ok(())
}
