//! Interactive session shell.
//!
//! The shell is the CLI's equivalent of a browser tab: it probes once on
//! start, keeps one store and one cookie jar for its whole lifetime, and
//! re-renders the current view after every command.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::io::Write;

use session::{AuthClient, CredentialForm, Outcome, Route, Transport};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::CliError;
use crate::render::{render, status_line};

const HELP: &str = "\
commands:
  login <username> <email> <password>
  signup <username> <email> <password> [confirmation]
  logout
  view <path>        show /, /login or /signup
  status
  help
  quit";

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ShellCommand {
    Login(CredentialForm),
    Signup(CredentialForm),
    Logout,
    View(String),
    Status,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ParseError {
    #[error("unknown command `{0}`; try `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Parse one input line; blank lines are `Ok(None)`.
pub(crate) fn parse_command(line: &str) -> Result<Option<ShellCommand>, ParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = words.split_first() else {
        return Ok(None);
    };
    let command = match (name, args) {
        ("login", [username, email, password]) => ShellCommand::Login(CredentialForm::new(*username, *email, *password)),
        ("login", _) => return Err(ParseError::Usage("login <username> <email> <password>")),
        ("signup", [username, email, password]) => {
            ShellCommand::Signup(CredentialForm::new(*username, *email, *password))
        }
        ("signup", [username, email, password, confirmation]) => {
            ShellCommand::Signup(CredentialForm::new(*username, *email, *password).with_confirmation(*confirmation))
        }
        ("signup", _) => return Err(ParseError::Usage("signup <username> <email> <password> [confirmation]")),
        ("logout", []) => ShellCommand::Logout,
        ("view", [path]) => ShellCommand::View((*path).to_owned()),
        ("view", []) => ShellCommand::View(Route::Home.path().to_owned()),
        ("status", []) => ShellCommand::Status,
        ("help" | "?", _) => ShellCommand::Help,
        ("quit" | "exit", _) => ShellCommand::Quit,
        ("logout" | "view" | "status", _) => return Err(ParseError::Usage("see `help`")),
        (other, _) => return Err(ParseError::Unknown(other.to_owned())),
    };
    Ok(Some(command))
}

/// Read commands from `input` until `quit` or end of input.
pub(crate) async fn run_shell<T, R, W>(client: &mut AuthClient<T>, input: R, out: &mut W) -> Result<(), CliError>
where
    T: Transport,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    client.start().await;
    writeln!(out, "{}", render(client, client.location().path()))?;

    let mut lines = input.lines();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(error) => {
                writeln!(out, "{error}")?;
                continue;
            }
        };
        match command {
            ShellCommand::Login(form) => {
                let outcome = client.login(form).await;
                report_submission(out, outcome.as_ref())?;
            }
            ShellCommand::Signup(form) => {
                let outcome = client.signup(form).await;
                report_submission(out, outcome.as_ref())?;
            }
            ShellCommand::Logout => {
                if let Some(notice) = client.logout().await.and_then(|e| e.notice()) {
                    writeln!(out, "! {notice}")?;
                }
            }
            ShellCommand::View(path) => {
                if let Some(route) = Route::from_path(&path) {
                    client.navigate(route);
                }
                writeln!(out, "{}", render(client, &path))?;
                continue;
            }
            ShellCommand::Status => {
                writeln!(out, "{}", status_line(client.store()))?;
                continue;
            }
            ShellCommand::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            ShellCommand::Quit => break,
        }
        writeln!(out, "{}", render(client, client.location().path()))?;
    }
    Ok(())
}

fn report_submission<W: Write>(out: &mut W, outcome: Option<&Outcome>) -> std::io::Result<()> {
    match outcome {
        None => writeln!(out, "a submission is already in progress"),
        Some(Outcome::Authenticated(_)) => writeln!(out, "ok"),
        Some(Outcome::Rejected(_) | Outcome::TransportFailed(_)) => Ok(()),
    }
}
