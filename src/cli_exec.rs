use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, anyhow};
use serde::Serialize;

use qrdesk::config::{self, ClientConfig};
use qrdesk::controller::{UPDATE_DONE, UPLOAD_DONE, delete_prompt, describe_error};
use qrdesk::display::{PREVIEW_CHARS, fmt_ts_abs, preview};
use qrdesk::remote::{ApiError, QrApi, UploadFile};

use crate::cli_runtime::CliContext;
use crate::{Commands, ConfigCommands};

pub(super) fn handle_command(ctx: &CliContext, command: Commands) -> Result<()> {
    match command {
        Commands::Upload { file, json } => {
            let client = ctx.client()?;
            let resp = UploadFile::read(&file)
                .and_then(|upload| client.upload(&upload))
                .map_err(|err| api_error("generating QR code", err))?;
            if json {
                print_json(&resp)?;
            } else {
                println!("{}", resp.message.as_deref().unwrap_or(UPLOAD_DONE));
                println!("id: {}", resp.id);
                println!("file: {}", resp.filename);
                println!("image: {}", client.resolve_url(&resp.qrcode_url));
            }
        }

        Commands::List { json } => {
            let client = ctx.client()?;
            let records = client
                .list()
                .map_err(|err| api_error("loading QR code list", err))?;
            if json {
                print_json(&records)?;
            } else if records.is_empty() {
                println!("No QR codes generated yet (run `qrdesk upload <FILE>`).");
            } else {
                for r in &records {
                    println!(
                        "{}  {}  {}",
                        r.id,
                        fmt_ts_abs(&r.created_at),
                        preview(&r.data_encoded, PREVIEW_CHARS)
                    );
                }
            }
        }

        Commands::Show { id, json } => {
            let client = ctx.client()?;
            let data = client
                .fetch_for_edit(&id)
                .map_err(|err| api_error("loading data", err))?;
            if json {
                print_json(&data)?;
            } else {
                println!("{}", data.data_encoded);
            }
        }

        Commands::Update {
            id,
            data,
            data_file,
            json,
        } => {
            let new_data = match (data, data_file) {
                (Some(d), _) => d,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("read {}", path.display()))?,
                (None, None) => anyhow::bail!("one of --data or --data-file is required"),
            };
            let client = ctx.client()?;
            let resp = client
                .update(&id, &new_data)
                .map_err(|err| api_error("saving changes", err))?;
            if json {
                print_json(&resp)?;
            } else {
                println!("{}", resp.message.as_deref().unwrap_or(UPDATE_DONE));
                if let Some(new_id) = &resp.new_id {
                    println!("id: {} (was {})", new_id, id);
                }
                if let Some(url) = &resp.qrcode_url {
                    println!("image: {}", client.resolve_url(url));
                }
            }
        }

        Commands::Delete { id, yes } => {
            if !yes {
                let stdin = io::stdin();
                let mut stderr = io::stderr();
                if !confirm_delete(&id, &mut stdin.lock(), &mut stderr)? {
                    eprintln!("Aborted.");
                    return Ok(());
                }
            }
            let client = ctx.client()?;
            let resp = client
                .delete(&id)
                .map_err(|err| api_error("deleting QR code", err))?;
            println!(
                "{}",
                resp.message
                    .unwrap_or_else(|| format!("QR code {} deleted.", id))
            );
        }

        Commands::Data => {
            let client = ctx.client()?;
            let value = client
                .example_data()
                .map_err(|err| api_error("fetching server data", err))?;
            print_json(&value)?;
        }

        Commands::View { id } => {
            let client = ctx.client()?;
            let records = client
                .list()
                .map_err(|err| api_error("loading QR code list", err))?;
            let record = records
                .iter()
                .find(|r| r.id == id)
                .with_context(|| format!("QR code {} not found", id))?;
            let url = client.resolve_url(&record.qrcode_url);
            println!("Opening {}", url);
            open::that(&url).with_context(|| format!("open {}", url))?;
        }

        Commands::Config { command } => handle_config_command(ctx, command)?,
    }

    Ok(())
}

fn handle_config_command(ctx: &CliContext, command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show { json } => {
            let cfg = ctx.config()?;
            if json {
                print_json(&cfg)?;
            } else {
                println!("url: {}", cfg.base_url);
                println!("config: {}", ctx.config_path.display());
            }
        }
        ConfigCommands::Set { url } => {
            let cfg = ClientConfig {
                base_url: config::normalize_base_url(&url)?,
            };
            config::save(&ctx.config_path, &cfg)?;
            println!("Saved url {} to {}", cfg.base_url, ctx.config_path.display());
        }
    }
    Ok(())
}

/// Asks on `out`, reads one line from `input`. Only `y`/`yes` confirm.
pub(crate) fn confirm_delete(
    id: &str,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<bool> {
    write!(out, "{} [y/N] ", delete_prompt(id)).context("write prompt")?;
    out.flush().context("flush prompt")?;
    let mut line = String::new();
    input.read_line(&mut line).context("read answer")?;
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

fn api_error(action: &str, err: ApiError) -> anyhow::Error {
    anyhow!(describe_error(action, &err))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("serialize json")?
    );
    Ok(())
}

#[cfg(test)]
#[path = "tests/cli_exec_tests.rs"]
mod tests;
