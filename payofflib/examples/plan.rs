use payofflib::{
    build_report,
    formats::{csv::Csv, json::Json},
    traits::{ReadFormat, WriteFormat},
    Strategy,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: долги в CSV (stdin) -> план avalanche с бюджетом 500 в JSON (stdout)
    let debts = Csv::read(std::io::BufReader::new(std::io::stdin()))?;
    let report = build_report(&debts, 500.0, Strategy::Avalanche, None)?;
    Json::write(std::io::stdout(), &report)?;
    Ok(())
}
