mod render;
mod shell;
mod transport;

#[cfg(test)]
mod stub;


use std::convert::Infallible;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use session::config::{ConfigError, DEFAULT_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS, parse_timeout_secs};
use session::{AuthClient, AuthError, ClientConfig, CredentialForm, Outcome, Route};

use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client build failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("invalid session cookie: {0}")]
    InvalidCookie(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("a submission is already in progress")]
    Busy,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "auth-cli", about = "Session-authenticated API client")]
struct Cli {
    #[arg(long, env = "AUTH_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Per-request timeout; zero or unparsable values use the default.
    #[arg(
        long,
        env = "AUTH_REQUEST_TIMEOUT_SECS",
        default_value_t = DEFAULT_REQUEST_TIMEOUT_SECS,
        value_parser = timeout_secs_arg
    )]
    timeout_secs: u64,

    /// `name=value` cookie sent with every request, e.g. from a previous login.
    #[arg(long, env = "AUTH_SESSION_COOKIE")]
    session_cookie: Option<String>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Probe the current session and show the home view.
    Status {
        /// Print the session as JSON instead of the home view.
        #[arg(long)]
        json: bool,
    },
    /// Log in with existing credentials.
    Login(CredentialArgs),
    /// Create an account and log in.
    Signup(SignupArgs),
    /// End the session on the server and locally.
    Logout,
    /// Interactive session: state and cookies live until `quit`.
    Shell,
}

#[derive(Args, Debug)]
struct CredentialArgs {
    #[arg(long)]
    username: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, env = "AUTH_PASSWORD", hide_env_values = true)]
    password: String,
    /// Print the session cookie after a successful login.
    #[arg(long)]
    print_cookie: bool,
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[command(flatten)]
    credentials: CredentialArgs,
    #[arg(long)]
    password_confirmation: Option<String>,
}

impl CredentialArgs {
    fn form(&self) -> CredentialForm {
        CredentialForm::new(&self.username, &self.email, &self.password)
    }
}

fn timeout_secs_arg(raw: &str) -> Result<u64, Infallible> {
    Ok(parse_timeout_secs(raw))
}

impl Cli {
    fn client_config(&self) -> Result<ClientConfig, CliError> {
        Ok(ClientConfig::new(&self.base_url, Duration::from_secs(self.timeout_secs))?)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.client_config()?;
    let transport = ReqwestTransport::new(&config, cli.session_cookie.as_deref())?;
    let mut client = AuthClient::new(transport);
    client.start().await;

    match cli.command {
        Command::Status { json } => run_status(&client, json),
        Command::Login(args) => {
            let outcome = client.login(args.form()).await.ok_or(CliError::Busy)?;
            finish_submission(&client, outcome, args.print_cookie)
        }
        Command::Signup(args) => {
            let mut form = args.credentials.form();
            form.password_confirmation = args.password_confirmation;
            let outcome = client.signup(form).await.ok_or(CliError::Busy)?;
            finish_submission(&client, outcome, args.credentials.print_cookie)
        }
        Command::Logout => {
            let error = client.logout().await;
            println!("{}", render::render(&client, Route::Home.path()));
            error.map_or(Ok(()), |e| Err(e.into()))
        }
        Command::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            let mut stdout = std::io::stdout();
            shell::run_shell(&mut client, stdin, &mut stdout).await
        }
    }
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn run_status(client: &AuthClient<ReqwestTransport>, json: bool) -> Result<(), CliError> {
    if json {
        let rendered = serde_json::to_string_pretty(&client.store().session())?;
        println!("{rendered}");
    } else {
        println!("{}", render::render(client, Route::Home.path()));
    }
    Ok(())
}

fn finish_submission(
    client: &AuthClient<ReqwestTransport>,
    outcome: Outcome,
    print_cookie: bool,
) -> Result<(), CliError> {
    println!("{}", render::render(client, client.location().path()));
    match outcome.error() {
        Some(error) => Err(error.into()),
        None => {
            if print_cookie {
                if let Some(cookie) = client.transport().cookie_header() {
                    println!("{cookie}");
                }
            }
            Ok(())
        }
    }
}
