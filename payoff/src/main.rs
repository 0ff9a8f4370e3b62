use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use payofflib::{
    build_report, check_budget, compare_strategies,
    error::{PayoffError, Result},
    formats::{csv::{self, Csv}, json::Json, xml::SimpleXml},
    traits::{ReadFormat, WriteFormat},
    Debt, Strategy,
};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Fmt {
    Csv,
    Json,
    Xml,
}

/// Идентификаторы стратегий как в библиотеке: avalanche, snowball,
/// highestPaymentFirst, lowestPaymentFirst.
fn parse_strategy(s: &str) -> std::result::Result<Strategy, String> {
    s.parse::<Strategy>().map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "payoff", version, about = "План погашения долгов")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Помесячный график для одной стратегии
    Schedule(ScheduleArgs),
    /// Сводка по всем стратегиям (CSV)
    Compare(InputArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Входной файл с долгами (по умолчанию stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Формат входа
    #[arg(long = "in-format", value_enum, default_value = "csv")]
    in_format: Fmt,

    /// Ежемесячный бюджет
    #[arg(short = 'b', long = "budget")]
    budget: f64,
}

#[derive(Args, Debug)]
struct ScheduleArgs {
    #[command(flatten)]
    input: InputArgs,

    /// avalanche | snowball | highestPaymentFirst | lowestPaymentFirst
    #[arg(short = 's', long = "strategy", value_parser = parse_strategy, default_value = "avalanche")]
    strategy: Strategy,

    /// Выходной файл (по умолчанию stdout)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Формат выхода
    #[arg(long = "out-format", value_enum, default_value = "csv")]
    out_format: Fmt,

    /// Первый месяц плана, YYYY-MM-DD
    #[arg(long = "start")]
    start: Option<NaiveDate>,

    /// Писать частичный график, если долги не гасятся за 50 лет
    #[arg(long = "allow-partial")]
    allow_partial: bool,
}

/// Логи в stderr, уровень из `PAYOFF_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("PAYOFF_LOG")
        .unwrap_or_else(|_| EnvFilter::new("payoff=info,payofflib=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn read_debts(args: &InputArgs) -> Result<Vec<Debt>> {
    let reader: Box<dyn io::Read> = match &args.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);
    read_with(args.in_format, br)
}

fn read_with<R: BufRead>(fmt: Fmt, r: R) -> Result<Vec<Debt>> {
    match fmt {
        Fmt::Csv => Csv::read(r),
        Fmt::Json => Json::read(r),
        Fmt::Xml => SimpleXml::read(r),
    }
}

fn run_schedule(args: ScheduleArgs) -> Result<()> {
    let debts = read_debts(&args.input)?;
    check_budget(&debts, args.input.budget)?;

    let strategy = args.strategy;
    let report = build_report(&debts, args.input.budget, strategy, args.start)?;
    if !report.summary.converged && !args.allow_partial {
        return Err(PayoffError::NonConvergent {
            months: report.summary.total_months,
        });
    }
    info!(
        %strategy,
        months = report.summary.total_months,
        converged = report.summary.converged,
        "plan ready"
    );

    let mut writer: Box<dyn Write> = match args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    match args.out_format {
        Fmt::Csv => Csv::write(&mut writer, &report),
        Fmt::Json => Json::write(&mut writer, &report),
        Fmt::Xml => SimpleXml::write(&mut writer, &report),
    }?;

    writer.flush().map_err(PayoffError::from)
}

fn run_compare(args: InputArgs) -> Result<()> {
    let debts = read_debts(&args)?;
    check_budget(&debts, args.budget)?;

    let summaries = compare_strategies(&debts, args.budget)?;
    let mut out = io::stdout().lock();
    csv::write_comparison(&mut out, &summaries)?;
    out.flush().map_err(PayoffError::from)
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let res = match cli.command {
        Command::Schedule(args) => run_schedule(args),
        Command::Compare(args) => run_compare(args),
    };

    if let Err(err) = res {
        eprintln!("payoff: {err}");
        std::process::exit(1);
    }
}
