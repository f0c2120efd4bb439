use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use expense_tracker::{
    NewTransaction, TransactionType, create_category, create_transaction, initialize_db,
};

/// A utility for creating a test database for the expense tracker server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const CATEGORIES: [(&str, TransactionType); 4] = [
    ("salary", TransactionType::Income),
    ("freelance", TransactionType::Income),
    ("rent", TransactionType::Expense),
    ("groceries", TransactionType::Expense),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test categories...");
    for (name, category_type) in CATEGORIES {
        create_category(name, category_type, &conn)?;
    }

    println!("Creating test transactions...");
    let transactions = [
        NewTransaction::new(TransactionType::Income, "salary", 5000, "2024-01-01")
            .description("January pay"),
        NewTransaction::new(TransactionType::Income, "freelance", 750, "2024-01-12"),
        NewTransaction::new(TransactionType::Expense, "rent", 1800, "2024-01-03")
            .description("January rent"),
        NewTransaction::new(TransactionType::Expense, "groceries", 143, "2024-01-07"),
        NewTransaction::new(TransactionType::Expense, "groceries", 98, "2024-01-14"),
    ];
    for transaction in &transactions {
        create_transaction(transaction, &conn)?;
    }

    println!("Success!");

    Ok(())
}
