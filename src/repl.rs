//! The interactive read-eval-print loop.
//!
//! Reads one command per line from stdin, dispatches it against the address
//! book, and prints the result. A best-effort save runs when the user exits
//! or stdin closes; a failed save is logged, never a panic.

use crate::commands::{dispatch, Command};
use crate::config::Config;
use crate::models::AddressBook;
use crate::storage::SnapshotStore;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

/// Run the loop until an exit command or end of input, then save.
pub fn run(book: &mut AddressBook, store: &SnapshotStore, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Welcome to the assistant bot!");

    loop {
        print!("Enter a command: ");
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // stdin closed: exit as if the user said so
            println!();
            info!("End of input, shutting down");
            break;
        }

        match Command::parse(&line) {
            Ok(command) => {
                println!("{}", dispatch(book, &command, config.birthday_window_days));
                if command == Command::Exit {
                    break;
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    match store.save(book) {
        Ok(()) => println!("Data saved."),
        Err(e) => error!("Failed to save the address book: {}", e),
    }

    Ok(())
}
