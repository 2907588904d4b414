//! Lapse - Main Entry Point
//!
//! Reads a due time and a creation time, classifies the task's runway
//! against the system clock, and prints the computed expiry timestamp.

use lapse_application::use_cases::{ComputeExpiry, ComputeExpiryInput};
use lapse_domain::{format_timestamp, parse_timestamp};
use lapse_infrastructure::SystemClock;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let (Some(due_arg), Some(created_arg)) = (args.next(), args.next()) else {
        eprintln!("usage: lapse <due-time> <created-at>");
        eprintln!("timestamps: 'YYYY-MM-DD HH:MM:SS' (UTC) or RFC 3339");
        std::process::exit(2);
    };

    let input = ComputeExpiryInput {
        due_time: parse_timestamp(&due_arg)?,
        created_at: parse_timestamp(&created_arg)?,
    };

    let use_case = ComputeExpiry::new(SystemClock::new());
    let output = use_case.execute(input)?;

    println!("{}", format_timestamp(output.schedule.expires_at));

    Ok(())
}
