//! Rawda console
//!
//! Prints the reconciled payment matrix for one period, straight from
//! the backend. Mainly a smoke-test surface for the board layer.
//!
//! Usage: `rawda <fees|salaries> <month> <year> [--status paid|unpaid] [--search NAME]`

use anyhow::{Context, bail};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rawda_app::{Board, FeeBackend, PaymentBackend, SalaryBackend};
use rawda_client::ApiClient;
use rawda_core::{MatrixSummary, RosterEntity, RowFilter, StatusFilter};
use rawda_shared::{AppConfig, Period};

struct Args {
    kind: String,
    period: Period,
    filter: RowFilter,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = std::env::args().skip(1);

    let kind = args.next().context("missing kind: fees or salaries")?;
    let month: u32 = args
        .next()
        .context("missing month")?
        .parse()
        .context("month must be a number")?;
    let year: i32 = args
        .next()
        .context("missing year")?
        .parse()
        .context("year must be a number")?;
    let period = Period::new(month, year)?;

    let mut filter = RowFilter::default();
    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--status" => {
                let value = args.next().context("--status needs paid or unpaid")?;
                filter.status = match value.as_str() {
                    "paid" => StatusFilter::Paid,
                    "unpaid" => StatusFilter::Unpaid,
                    other => bail!("unknown status filter: {other}"),
                };
            }
            "--search" => {
                filter.search = args.next().context("--search needs a value")?;
            }
            other => bail!("unknown flag: {other}"),
        }
    }

    Ok(Args {
        kind,
        period,
        filter,
    })
}

async fn print_matrix<B: PaymentBackend>(
    backend: B,
    period: Period,
    filter: &RowFilter,
) -> anyhow::Result<()> {
    let mut board = Board::new(backend);
    board.reload().await?;

    let rows = board.filtered(period, filter)?;
    for row in &rows {
        let status = if row.is_paid { "paid  " } else { "unpaid" };
        let flag = if row.has_duplicates { " [duplicates]" } else { "" };
        println!(
            "{:>6}  {status}  {:>12}  {}{flag}",
            row.entity.entity_id(),
            row.amount,
            row.entity.display_name(),
        );
    }

    let MatrixSummary {
        total,
        paid,
        unpaid,
        paid_amount,
        duplicates,
    } = board.summary(period)?;
    println!(
        "\n{period}: {total} rows, {paid} paid ({paid_amount}), {unpaid} unpaid, {duplicates} with duplicates"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rawda=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = parse_args()?;
    let config = AppConfig::load().context("Failed to load configuration")?;
    info!(base_url = %config.api.base_url, kind = %args.kind, period = %args.period, "loading matrix");
    let client = ApiClient::new(&config.api)?;

    match args.kind.as_str() {
        "fees" => print_matrix(FeeBackend::new(client), args.period, &args.filter).await,
        "salaries" => print_matrix(SalaryBackend::new(client), args.period, &args.filter).await,
        other => bail!("unknown kind: {other} (expected fees or salaries)"),
    }
}
