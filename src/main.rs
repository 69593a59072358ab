//! `ticketdesk` (tk) - Support ticket tracker
//!
//! Tickets live in a single local `SQLite` file. No daemon, no network.

use ticketdesk::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
