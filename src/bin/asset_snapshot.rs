//! Prints one page of the asset table to the terminal, using the same
//! fetch, sort and pagination as the dashboard.
use anyhow::Result;
use clap::{Parser, ValueEnum};
use energi_dashboard::config::DashboardConfig;
use energi_dashboard::data::{
    AssetCatalogSource, CoinGeckoClient, ConversionRateSource, EnergiSwapClient,
};
use energi_dashboard::models::{AssetColumn, AssetRow, AssetTable, SortDirection, SortState};
use energi_dashboard::utils::local_now_string;
use tabled::{Table, Tabled, settings::Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SortKey {
    Name,
    Symbol,
    Price,
    None,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Print a page of the EnergiSwap asset table")]
struct Args {
    #[arg(long, env = "ENERGISWAP_API_URL")]
    catalog_url: Option<String>,

    #[arg(long, env = "COINGECKO_API_URL")]
    conversion_url: Option<String>,

    /// Column to sort by
    #[arg(long, value_enum, default_value_t = SortKey::Price)]
    sort: SortKey,

    /// Sort ascending instead of the column's default direction
    #[arg(long, default_value_t = false)]
    asc: bool,

    /// 1-based page number
    #[arg(long, default_value_t = 1)]
    page: usize,
}

#[derive(Tabled)]
struct SnapshotRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Coin")]
    name: String,
    #[tabled(rename = "Symbol")]
    symbol: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Address")]
    address: String,
}

impl From<AssetRow> for SnapshotRow {
    fn from(row: AssetRow) -> Self {
        Self {
            position: row.position,
            name: row.name,
            symbol: row.symbol,
            price: row.price,
            address: row.address,
        }
    }
}

fn sorting_for(key: SortKey, asc: bool) -> Option<SortState> {
    let column = match key {
        SortKey::Name => AssetColumn::Name,
        SortKey::Symbol => AssetColumn::Symbol,
        SortKey::Price => AssetColumn::LastPrice,
        SortKey::None => return None,
    };
    let direction = if asc {
        SortDirection::Ascending
    } else {
        column.first_direction()
    };
    Some(SortState { column, direction })
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = DashboardConfig {
        catalog_base_url: args.catalog_url,
        conversion_base_url: args.conversion_url,
        ..Default::default()
    };

    let catalog_client = EnergiSwapClient::new(&config);
    let rate_client = CoinGeckoClient::new(&config);
    let (catalog, rate) = tokio::join!(
        catalog_client.fetch_assets(),
        rate_client.fetch_base_to_quote_rate()
    );
    log::info!("Fetched {} assets", catalog.len());

    let mut table = AssetTable::new(catalog.into_assets());
    table.set_sorting(sorting_for(args.sort, args.asc));
    table.set_page_index(args.page.saturating_sub(1));

    let rows: Vec<SnapshotRow> = table.current_page().into_iter().map(Into::into).collect();

    println!("Snapshot at {}", local_now_string());
    if rows.is_empty() {
        println!("No results.");
    } else {
        println!("{}", Table::new(rows).with(Style::rounded()));
    }
    println!(
        "Page {} of {} | ETH/USD {}",
        table.page_index() + 1,
        table.page_count().max(1),
        rate
    );
    Ok(())
}
