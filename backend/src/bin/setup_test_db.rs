//! Recreate the integration-test database and apply embedded migrations.
//!
//! Connects to an administrative database, drops and recreates the target
//! database, then runs every migration against it. The resulting connection
//! URL is printed on success so callers can export it as
//! `TRAILERS_DATABASE_URL`.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), forbid(clippy::expect_used))]

use clap::Parser;
use color_eyre::eyre::{Context, Result, eyre};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use trailers::outbound::persistence::run_pending_migrations;

const DEFAULT_ADMIN_URL: &str = "postgres://postgres@localhost:5432/postgres";
const DEFAULT_TEST_DATABASE: &str = "trailers_db_test";

#[derive(Debug, Parser)]
#[command(
    name = "setup-test-db",
    about = "Drop, recreate and migrate the trailers test database",
    version
)]
struct Cli {
    /// Connection URL for a database the admin role can always reach.
    #[arg(long = "admin-url", value_name = "URL", default_value = DEFAULT_ADMIN_URL)]
    admin_url: String,
    /// Name of the database to recreate.
    #[arg(long = "database", value_name = "NAME", default_value = DEFAULT_TEST_DATABASE)]
    database: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt().with_env_filter(EnvFilter::from_default_env()).try_init() {
        warn!(error = %e, "tracing init failed");
    }

    let cli = Cli::parse();
    let test_url = test_database_url(&cli.admin_url, &cli.database)?;

    let mut admin = PgConnection::establish(&cli.admin_url)
        .wrap_err("connect to administrative database")?;
    let quoted = quote_identifier(&cli.database);

    diesel::sql_query(format!("DROP DATABASE IF EXISTS {quoted}"))
        .execute(&mut admin)
        .wrap_err_with(|| format!("drop database {}", cli.database))?;
    info!(database = %cli.database, "dropped existing test database");

    diesel::sql_query(format!("CREATE DATABASE {quoted}"))
        .execute(&mut admin)
        .wrap_err_with(|| format!("create database {}", cli.database))?;
    info!(database = %cli.database, "created test database");
    drop(admin);

    let applied = run_pending_migrations(test_url.as_str())
        .wrap_err("apply migrations to test database")?;
    info!(applied, "test database is ready");

    println!("{test_url}");
    Ok(())
}

/// Swap the database path of `admin_url` for `database`.
fn test_database_url(admin_url: &str, database: &str) -> Result<Url> {
    if database.trim().is_empty() {
        return Err(eyre!("database name must not be empty"));
    }
    let mut url = Url::parse(admin_url).wrap_err("parse admin URL")?;
    if url.cannot_be_a_base() {
        return Err(eyre!("admin URL {admin_url} has no database path"));
    }
    url.set_path(database);
    Ok(url)
}

/// Quote a PostgreSQL identifier, doubling embedded quotes.
fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
