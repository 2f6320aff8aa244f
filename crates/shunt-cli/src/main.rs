use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use serde::Serialize;

use shunt_core::app::SelectChannel;
use shunt_core::impls::{InMemoryRequest, InMemorySession};
use shunt_core::observability::{LoggingConfig, init_logging};
use shunt_core::ports::Request;
use shunt_core::{
    ActionDispatcher, ActionHandler, ActionMapping, DispatchError, DispatchSpec, HandlerRegistry,
    Outcome, ShuntConfig,
};

#[derive(Parser)]
#[command(name = "shunt", about = "Try out parameter-driven action dispatch")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the method a request would dispatch to.
    Resolve {
        #[command(flatten)]
        route: RouteArgs,
    },
    /// Resolve and run an echo handler registered for every target.
    Dispatch {
        #[command(flatten)]
        route: RouteArgs,
    },
    /// Run the channel selector against an in-memory request.
    SelectChannel {
        #[arg(long)]
        channel: Option<String>,
        /// Simulate a request without an existing session.
        #[arg(long)]
        no_session: bool,
    },
}

#[derive(clap::Args)]
struct RouteArgs {
    #[arg(long, short)]
    config: PathBuf,
    /// Route path as configured in the config file.
    #[arg(long)]
    path: String,
    /// Request parameter, `name` or `name=value`. Repeatable.
    #[arg(long = "param", short = 'p')]
    params: Vec<String>,
}

impl RouteArgs {
    fn load(&self) -> Result<(ActionMapping, InMemoryRequest), String> {
        let config = ShuntConfig::load(&self.config).map_err(|e| e.to_string())?;
        init_logging(&config.logging);

        let mapping = config
            .mapping(&self.path)
            .cloned()
            .ok_or_else(|| format!("no action configured for path '{}'", self.path))?;

        let mut request = InMemoryRequest::new();
        for param in &self.params {
            let (name, value) = param.split_once('=').unwrap_or((param.as_str(), ""));
            request.add_parameter(name, value);
        }
        Ok((mapping, request))
    }
}

/// Answers with the name it was registered under.
struct Echo(String);

#[async_trait]
impl ActionHandler for Echo {
    async fn handle(
        &self,
        mapping: &ActionMapping,
        _request: &mut dyn Request,
    ) -> Result<Outcome, DispatchError> {
        tracing::info!(path = %mapping.path(), method = %self.0, "echo handler invoked");
        Ok(Outcome::success().with_reason(format!("invoked {}", self.0)))
    }
}

fn echo_registry(mapping: &ActionMapping) -> Result<HandlerRegistry, DispatchError> {
    let mut registry = HandlerRegistry::new();
    let Some(spec) = mapping.parameter().and_then(DispatchSpec::parse) else {
        return Ok(registry);
    };
    for entry in spec.entries() {
        let target = entry.target.as_str();
        if target.is_empty() || registry.get(target).is_some() {
            continue;
        }
        registry.register(target, Arc::new(Echo(target.to_string())))?;
    }
    Ok(registry)
}

#[derive(Serialize)]
struct ChannelReport {
    outcome: Outcome,
    session: Option<InMemorySession>,
}

async fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Resolve { route } => {
            let (mapping, request) = route.load()?;
            let dispatcher = ActionDispatcher::new(Arc::new(HandlerRegistry::new()));
            let method = dispatcher
                .method_name(&mapping, &request)
                .map_err(|e| e.to_string())?;
            println!("{method}");
        }
        Command::Dispatch { route } => {
            let (mapping, mut request) = route.load()?;
            let registry = echo_registry(&mapping).map_err(|e| e.to_string())?;
            let dispatcher = ActionDispatcher::new(Arc::new(registry));
            let outcome = dispatcher
                .execute(&mapping, &mut request)
                .await
                .map_err(|e| e.to_string())?;
            let json = serde_json::to_string_pretty(&outcome).map_err(|e| e.to_string())?;
            println!("{json}");
        }
        Command::SelectChannel {
            channel,
            no_session,
        } => {
            init_logging(&LoggingConfig::default());

            let mut request = InMemoryRequest::new();
            if let Some(channel) = channel {
                request.add_parameter("channel", channel);
            }
            if !no_session {
                request = request.with_session(InMemorySession::new());
            }

            let outcome = SelectChannel::new().select(&mut request);
            let report = ChannelReport {
                outcome,
                session: request.into_session(),
            };
            let json = serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?;
            println!("{json}");
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
