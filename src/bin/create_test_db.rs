use std::error::Error;
use std::path::Path;
use std::process::exit;
use std::sync::{Arc, Mutex};

use clap::Parser;
use rusqlite::Connection;
use time::macros::datetime;

use expense_tracker::{ExpenseService, NewExpense, initialize_db};

/// A utility for creating a test database for the expense tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path
        .extension()
        .is_none_or(|extension| extension.is_empty())
    {
        eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test expenses...");

    let service = ExpenseService::new(Arc::new(Mutex::new(conn)));
    let expenses = [
        ("Groceries", 84.20, "Food", datetime!(2024-01-03 18:30 UTC)),
        ("Bus pass", 50.00, "Transport", datetime!(2024-01-05 08:00 UTC)),
        ("Burger", 12.50, "Fast Food", datetime!(2024-01-15 12:45 UTC)),
        ("Electricity", 132.75, "Utilities", datetime!(2024-01-20 09:00 UTC)),
        ("Cinema", 18.00, "Entertainment", datetime!(2024-01-27 20:15 UTC)),
        ("Groceries", 61.35, "Food", datetime!(2024-02-01 17:50 UTC)),
        ("Taxi", 23.40, "Transport", datetime!(2024-02-09 23:10 UTC)),
        ("Coffee", 4.50, "Drinks", datetime!(2024-02-12 07:45 UTC)),
    ];

    for (title, amount, category, date) in expenses {
        service.create_expense(NewExpense::new(title, amount, category).date(date))?;
    }

    println!("Success!");

    Ok(())
}
