//! Line-oriented terminal front end. Reads commands from stdin, prompts for
//! the active view's fields on `submit`, and re-renders the form after every
//! state change the user triggers.

use crate::portal::{
    AppConfig, AuthClient, AuthFlowController, AuthState, FlowView, Outcome,
    view::{self, PENDING_LABEL},
};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tracing::debug;

const HELP: &str = "\
Commands:
  signup   switch to the sign up form
  login    switch to the log in form
  forgot   switch to the forgot password form
  submit   fill in the current form and send it
  help     show this help
  quit     exit
";

#[derive(Debug)]
pub struct Args {
    pub config: AppConfig,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Select(FlowView),
    Submit,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Parses one command line. Only tab views can be selected directly.
#[must_use]
pub fn parse_input(line: &str) -> Input {
    let command = line.trim().to_lowercase();
    match command.as_str() {
        "" => Input::Empty,
        "submit" | "s" => Input::Submit,
        "help" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        other => match other.parse::<FlowView>() {
            Ok(view) if FlowView::TABS.contains(&view) => Input::Select(view),
            _ => Input::Unknown(other.to_string()),
        },
    }
}

/// Execute the interactive form on stdin/stdout.
/// # Errors
/// Returns an error if the client cannot be built or terminal I/O fails.
pub async fn execute(args: Args) -> Result<()> {
    let backend_url = args.config.backend_url.clone();
    let controller = AuthFlowController::new(AuthClient::new(args.config)?);

    run(
        &controller,
        &backend_url,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}

/// Drives the controller from `reader` until `quit` or end of input.
/// # Errors
/// Returns an error if reading or writing fails.
pub async fn run<R, W>(
    controller: &AuthFlowController,
    backend_url: &str,
    reader: R,
    mut out: W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    render(controller, backend_url, &mut out).await?;

    loop {
        out.write_all(b"\n> ").await?;
        out.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match parse_input(&line) {
            Input::Empty => {}
            Input::Quit => break,
            Input::Help => out.write_all(HELP.as_bytes()).await?,
            Input::Select(view) => {
                controller.select_view(view);
                render(controller, backend_url, &mut out).await?;
            }
            Input::Submit => {
                if !fill_fields(controller, &mut lines, &mut out).await? {
                    break;
                }
                let outcome = submit_with_progress(controller, &mut out).await?;
                debug!(?outcome, "interactive submit finished");
                render(controller, backend_url, &mut out).await?;
            }
            Input::Unknown(command) => {
                out.write_all(format!("unknown command: {command} (type `help`)\n").as_bytes())
                    .await?;
            }
        }
    }

    out.flush().await?;
    Ok(())
}

async fn render<W: AsyncWrite + Unpin>(
    controller: &AuthFlowController,
    backend_url: &str,
    out: &mut W,
) -> Result<()> {
    let screen = view::render(&controller.snapshot(), backend_url);
    out.write_all(format!("\n{screen}\n").as_bytes()).await?;
    out.flush().await?;
    Ok(())
}

/// Prompts for every field of the active view. An empty answer keeps the
/// current value. Returns `false` if input ended mid-form.
async fn fill_fields<R, W>(
    controller: &AuthFlowController,
    lines: &mut Lines<R>,
    out: &mut W,
) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let state = controller.snapshot();

    for &field in state.view.fields() {
        let current = view::display_value(field, state.draft.get(field));
        out.write_all(format!("{} [{current}]: ", field.label()).as_bytes())
            .await?;
        out.flush().await?;

        let Some(answer) = lines.next_line().await? else {
            return Ok(false);
        };
        let answer = answer.trim_end_matches('\r');
        if !answer.is_empty() {
            controller.update_field(field, answer);
        }
    }

    Ok(true)
}

/// Submits and prints the pending label once the request is in flight.
async fn submit_with_progress<W: AsyncWrite + Unpin>(
    controller: &AuthFlowController,
    out: &mut W,
) -> Result<Outcome> {
    let mut changes = controller.subscribe();
    let submission = controller.submit();
    tokio::pin!(submission);

    tokio::select! {
        outcome = &mut submission => return Ok(outcome),
        pending = async { changes.wait_for(AuthState::is_pending).await.is_ok() } => {
            if pending {
                out.write_all(format!("[ {PENDING_LABEL} ]\n").as_bytes()).await?;
                out.flush().await?;
            }
        }
    }

    Ok(submission.await)
}
