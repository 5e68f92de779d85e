// MindSpace - local record store CLI
// Entry point: opens the data directory and runs one command

use anyhow::{bail, Context};
use mindspace::commands;
use mindspace::database::{JournalForm, LoginForm, Mood, RegistrationForm};
use serde::Serialize;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
usage: mindspace <command> [args...]

  register <name> <email> <password> <confirm-password>
  login <email> <password>
  logout
  whoami
  journal-list
  journal-add <title> <content> [mood]
  journal-edit <id> <title> <content> [mood]
  journal-delete <id>
  journal-search <query>
  mood-log <great|good|okay|down|struggling> [note]
  mood-history
  stress-questions
  stress-submit <a1> ... <a8>      (answers 0-4)
  stress-history
  info";

fn to_json<T: Serialize>(value: T) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(value)?)
}

fn arg(args: &[String], index: usize, name: &str) -> anyhow::Result<String> {
    args.get(index)
        .cloned()
        .with_context(|| format!("missing argument <{}>\n\n{}", name, USAGE))
}

fn journal_form(args: &[String], offset: usize) -> anyhow::Result<JournalForm> {
    Ok(JournalForm {
        title: arg(args, offset, "title")?,
        content: arg(args, offset + 1, "content")?,
        mood: args.get(offset + 2).cloned(),
    })
}

async fn run(
    state: &mindspace::app::AppState,
    args: &[String],
    cancel: &CancellationToken,
) -> anyhow::Result<Value> {
    let Some(command) = args.first() else {
        bail!("{}", USAGE);
    };

    let value = match command.as_str() {
        "register" => {
            let form = RegistrationForm {
                name: arg(args, 1, "name")?,
                email: arg(args, 2, "email")?,
                password: arg(args, 3, "password")?,
                confirm_password: arg(args, 4, "confirm-password")?,
            };
            to_json(commands::register(state, form, cancel).await?)?
        }
        "login" => {
            let form = LoginForm {
                email: arg(args, 1, "email")?,
                password: arg(args, 2, "password")?,
            };
            to_json(commands::login(state, form, cancel).await?)?
        }
        "logout" => to_json(commands::logout(state)?)?,
        "whoami" => to_json(commands::current_user(state)?)?,
        "journal-list" => to_json(commands::list_journal_entries(state)?)?,
        "journal-add" => to_json(commands::create_journal_entry(
            state,
            journal_form(args, 1)?,
        )?)?,
        "journal-edit" => {
            let id = arg(args, 1, "id")?;
            to_json(commands::update_journal_entry(
                state,
                &id,
                journal_form(args, 2)?,
            )?)?
        }
        "journal-delete" => to_json(commands::delete_journal_entry(
            state,
            &arg(args, 1, "id")?,
        )?)?,
        "journal-search" => to_json(commands::search_journal_entries(
            state,
            &arg(args, 1, "query")?,
        )?)?,
        "mood-log" => {
            let mood: Mood = arg(args, 1, "mood")?
                .parse()
                .map_err(anyhow::Error::msg)?;
            to_json(commands::log_mood(
                state,
                mood,
                args.get(2).map(String::as_str),
            )?)?
        }
        "mood-history" => to_json(commands::list_mood_history(state)?)?,
        "stress-questions" => to_json(commands::get_stress_questionnaire())?,
        "stress-submit" => {
            let answers = args[1..]
                .iter()
                .map(|a| a.parse::<u8>())
                .collect::<Result<Vec<_>, _>>()
                .context("answers must be numbers between 0 and 4")?;
            to_json(commands::submit_stress_assessment(state, &answers)?)?
        }
        "stress-history" => to_json(commands::list_stress_history(state)?)?,
        "info" => to_json(commands::get_app_info())?,
        other => bail!("unknown command: {}\n\n{}", other, USAGE),
    };

    Ok(value)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mindspace=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting MindSpace");

    let data_dir = mindspace::config::data_dir();
    let state = mindspace::app::setup(&data_dir)?;

    // Ctrl-C abandons an in-flight sign-in without writing anything
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(&state, &args, &cancel).await {
        Ok(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
        Err(e) => {
            // Field errors are shown per field so the caller can map them back
            if let Some(mindspace::error::AppError::Validation(errors)) =
                e.downcast_ref::<mindspace::error::AppError>()
            {
                eprintln!("{}", serde_json::to_string_pretty(errors)?);
            }
            Err(e)
        }
    }
}
