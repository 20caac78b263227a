//! Invoice Example
//!
//! This example prices a cart loaded from a fixture set and prints its invoice.
//!
//! Use `-f` to load a fixture set by name
//! Use `-b` to point at a different fixtures directory
//! Set `RUST_LOG=till=debug` to trace cart operations

use std::io;

use anyhow::Result;
use clap::Parser;
use till::{fixtures::Fixture, invoice::Invoice, utils::ExampleInvoiceArgs};
use tracing_subscriber::EnvFilter;

/// Invoice Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = ExampleInvoiceArgs::parse();

    let fixture = Fixture::from_set_in(&args.base_path, &args.fixture)?;
    let cart = fixture.cart()?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    Invoice::from_cart(&cart).write_to(&mut handle)?;

    println!("\nSaved: {:.2}", cart.total_discount());

    Ok(())
}
