//! Subcommand implementations and the I/O they share.

pub mod analyze;
pub mod config;
pub mod suggest;

use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;
use taskrank_core::gateway::{render, ErrorResponse};
use taskrank_core::{local_today, CoreError, GatewayError};

/// Request body from `path`, or stdin when no path is given.
fn read_body(path: Option<&Path>) -> Result<String, CoreError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut body = String::new();
            std::io::stdin().read_to_string(&mut body)?;
            Ok(body)
        }
    }
}

fn resolve_today(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(local_today)
}

/// Print a success body to stdout.
fn emit<T: Serialize>(body: &T, pretty: bool) -> Result<(), CoreError> {
    let text = render(body, pretty).map_err(|e| reject(e, pretty))?;
    println!("{text}");
    Ok(())
}

/// Print the error envelope to stdout and hand the error back for the exit code.
fn reject(err: GatewayError, pretty: bool) -> CoreError {
    match render(&ErrorResponse::from(&err), pretty) {
        Ok(text) => println!("{text}"),
        Err(e) => tracing::error!(error = %e, "failed to render error response"),
    }
    CoreError::Gateway(err)
}
