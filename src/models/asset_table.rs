use strum::IntoEnumIterator;

use crate::config::{DF, TABLE};
use crate::domain::Asset;
use crate::models::pagination::PageState;
use crate::models::sorting::{AssetColumn, SortDirection, SortState, next_sorting, sorted_indices};

/// A data row as displayed on the current page.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRow {
    /// 1-based position within the page
    pub position: usize,
    pub address: String,
    pub name: String,
    /// Icon key
    pub symbol: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub column: AssetColumn,
    pub label: String,
    pub sortable: bool,
    pub sorted: Option<SortDirection>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// Placeholder shape shown while the first catalog fetch is in flight.
    Skeleton { rows: usize, columns: usize },
    Empty,
    Rows(Vec<AssetRow>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub index: usize,
    pub active: bool,
}

impl PageLink {
    pub fn label(&self) -> String {
        (self.index + 1).to_string()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginationView {
    pub links: Vec<PageLink>,
    pub can_previous: bool,
    pub can_next: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub headers: Vec<HeaderCell>,
    pub body: TableBody,
    pub pagination: PaginationView,
}

/// Sortable, paginated view over the asset list. Holds only transient UI state.
#[derive(Debug, Clone)]
pub struct AssetTable {
    rows: Vec<Asset>,
    sorting: Option<SortState>,
    page: PageState,
}

impl Default for AssetTable {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            sorting: Some(SortState::default()),
            page: PageState::default(),
        }
    }
}

impl AssetTable {
    pub fn new(rows: Vec<Asset>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    /// Swap in a fresh asset list. Sorting survives, the page goes back to the first.
    pub fn set_assets(&mut self, rows: Vec<Asset>) {
        self.rows = rows;
        self.page.reset();
    }

    pub fn sorting(&self) -> Option<SortState> {
        self.sorting
    }

    pub fn page_index(&self) -> usize {
        self.page.page_index()
    }

    pub fn page_count(&self) -> usize {
        self.page.page_count(self.rows.len())
    }

    /// Header click. Returns false for columns that cannot sort.
    pub fn toggle_sort(&mut self, column: AssetColumn) -> bool {
        if !column.is_sortable() {
            return false;
        }
        self.sorting = next_sorting(self.sorting, column);
        self.page.reset();
        if DF.log_table {
            log::info!("Sorting now {:?}", self.sorting);
        }
        true
    }

    pub fn set_sorting(&mut self, sorting: Option<SortState>) {
        self.sorting = sorting.filter(|s| s.column.is_sortable());
        self.page.reset();
    }

    pub fn set_page_index(&mut self, index: usize) {
        self.page.set_page_index(index, self.rows.len());
    }

    pub fn previous_page(&mut self) {
        self.page.previous();
    }

    pub fn next_page(&mut self) {
        self.page.next(self.rows.len());
    }

    pub fn current_page(&self) -> Vec<AssetRow> {
        let order = sorted_indices(&self.rows, self.sorting);
        let range = self.page.row_range(order.len());
        order[range]
            .iter()
            .enumerate()
            .map(|(i, &idx)| {
                let asset = &self.rows[idx];
                AssetRow {
                    position: i + 1,
                    address: asset.address.clone(),
                    name: asset.name.clone(),
                    symbol: asset.symbol.clone(),
                    price: format_price_cell(asset.last_price),
                }
            })
            .collect()
    }

    pub fn headers(&self) -> Vec<HeaderCell> {
        AssetColumn::iter()
            .map(|column| HeaderCell {
                column,
                label: column.to_string(),
                sortable: column.is_sortable(),
                sorted: self
                    .sorting
                    .filter(|s| s.column == column)
                    .map(|s| s.direction),
            })
            .collect()
    }

    pub fn pagination(&self) -> PaginationView {
        let row_count = self.rows.len();
        PaginationView {
            links: self
                .page
                .link_window(row_count)
                .map(|index| PageLink {
                    index,
                    active: index == self.page.page_index(),
                })
                .collect(),
            can_previous: self.page.can_previous(),
            can_next: self.page.can_next(row_count),
        }
    }

    /// Everything the renderer needs for one frame. `loading` swaps the body for a skeleton.
    pub fn view(&self, loading: bool) -> TableView {
        let body = if loading {
            TableBody::Skeleton {
                rows: TABLE.skeleton.rows,
                columns: TABLE.skeleton.columns,
            }
        } else {
            let rows = self.current_page();
            if rows.is_empty() {
                TableBody::Empty
            } else {
                TableBody::Rows(rows)
            }
        };

        TableView {
            headers: self.headers(),
            body,
            pagination: self.pagination(),
        }
    }
}

/// `$` + two decimals for a non-zero number. Zero, NaN and missing values are shown raw
/// (`$0`, `$NaN`, `$`) rather than formatted. Magnitudes of 1e21 and above switch to
/// exponent form (`$1e+21`), as `Number.prototype.toFixed` does.
pub fn format_price_cell(price: Option<f64>) -> String {
    match price {
        Some(v) if v.abs() >= 1e21 => format!("${}", exponent_form(v)),
        Some(v) if v != 0.0 && !v.is_nan() => format!("${:.2}", v),
        Some(v) if v.is_nan() => "$NaN".to_string(),
        Some(_) => "$0".to_string(),
        None => "$".to_string(),
    }
}

/// `1.5e21` -> `1.5e+21`, `inf` -> `Infinity`
fn exponent_form(v: f64) -> String {
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    format!("{:e}", v).replacen('e', "e+", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AssetCatalog;
    use serde_json::json;

    fn numbered(count: usize) -> Vec<Asset> {
        (0..count)
            .map(|i| Asset {
                address: format!("0x{:02}", i),
                name: format!("Coin {}", i),
                symbol: format!("C{}", i),
                last_price: Some(i as f64),
            })
            .collect()
    }

    #[test]
    fn formats_price_cells() {
        assert_eq!(format_price_cell(Some(1234.5)), "$1234.50");
        assert_eq!(format_price_cell(Some(0.004)), "$0.00");
        assert_eq!(format_price_cell(Some(0.0)), "$0");
        assert_eq!(format_price_cell(Some(f64::NAN)), "$NaN");
        assert_eq!(format_price_cell(None), "$");
    }

    #[test]
    fn huge_prices_use_exponent_form() {
        assert_eq!(format_price_cell(Some(1e21)), "$1e+21");
        assert_eq!(format_price_cell(Some(1.5e22)), "$1.5e+22");
        assert_eq!(format_price_cell(Some(-2e21)), "$-2e+21");
        assert_eq!(format_price_cell(Some(f64::INFINITY)), "$Infinity");
        assert_eq!(format_price_cell(Some(9.99e20)), "$999000000000000000000.00");
    }

    #[test]
    fn default_view_sorts_by_price_descending() {
        let body = json!({
            "0xabc": {"name": "Coin A", "symbol": "CNA", "last_price": 10},
            "0xdef": {"name": "Coin B", "symbol": "CNB", "last_price": 5},
        });
        let table = AssetTable::new(AssetCatalog::from_json(&body).into_assets());

        let TableBody::Rows(rows) = table.view(false).body else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].position, rows[0].name.as_str()), (1, "Coin A"));
        assert_eq!((rows[1].position, rows[1].name.as_str()), (2, "Coin B"));
        assert_eq!(rows[0].price, "$10.00");
    }

    #[test]
    fn headers_reflect_sort_state() {
        let mut table = AssetTable::default();
        let headers = table.headers();
        let labels: Vec<&str> = headers.iter().map(|h| h.label.as_str()).collect();
        assert_eq!(labels, ["#", "Coin", "Symbol", "Price"]);
        assert!(!headers[0].sortable);
        assert_eq!(headers[3].sorted, Some(SortDirection::Descending));

        assert!(table.toggle_sort(AssetColumn::Symbol));
        let headers = table.headers();
        assert_eq!(headers[2].sorted, Some(SortDirection::Ascending));
        assert_eq!(headers[3].sorted, None);

        assert!(!table.toggle_sort(AssetColumn::Index));
    }

    #[test]
    fn positions_restart_on_every_page() {
        let mut table = AssetTable::new(numbered(23));
        table.next_page();
        let rows = table.current_page();
        assert_eq!(rows.len(), 10);
        assert_eq!(rows[0].position, 1);
        // Descending price: page two starts at the 11th highest.
        assert_eq!(rows[0].address, "0x12");

        table.set_page_index(7);
        assert_eq!(table.page_index(), 2);
        assert_eq!(table.current_page().len(), 3);
    }

    #[test]
    fn sorting_and_new_data_reset_the_page() {
        let mut table = AssetTable::new(numbered(30));
        table.set_page_index(2);
        table.toggle_sort(AssetColumn::Name);
        assert_eq!(table.page_index(), 0);

        table.set_page_index(1);
        table.set_assets(numbered(30));
        assert_eq!(table.page_index(), 0);
        assert_eq!(table.sorting().map(|s| s.column), Some(AssetColumn::Name));
    }

    #[test]
    fn explicit_sorting_ignores_index_column() {
        let mut table = AssetTable::new(numbered(12));
        table.set_page_index(1);
        table.set_sorting(Some(SortState {
            column: AssetColumn::LastPrice,
            direction: SortDirection::Ascending,
        }));
        assert_eq!(table.page_index(), 0);
        assert_eq!(table.current_page()[0].address, "0x00");

        table.set_sorting(Some(SortState {
            column: AssetColumn::Index,
            direction: SortDirection::Ascending,
        }));
        assert_eq!(table.sorting(), None);
    }

    #[test]
    fn empty_and_loading_bodies() {
        let table = AssetTable::default();
        assert_eq!(table.view(false).body, TableBody::Empty);
        assert_eq!(
            table.view(true).body,
            TableBody::Skeleton {
                rows: 5,
                columns: 4
            }
        );
        let pagination = table.pagination();
        assert!(pagination.links.is_empty());
        assert!(!pagination.can_previous && !pagination.can_next);
    }

    #[test]
    fn pagination_view_marks_active_link() {
        let mut table = AssetTable::new(numbered(55));
        table.set_page_index(3);
        let view = table.pagination();
        let labels: Vec<String> = view.links.iter().map(PageLink::label).collect();
        assert_eq!(labels, ["3", "4", "5", "6"]);
        assert!(view.links[1].active);
        assert!(view.can_previous && view.can_next);
    }
}
