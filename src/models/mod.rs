pub mod asset_table;
pub mod pagination;
pub mod sorting;

pub use asset_table::{
    AssetRow, AssetTable, HeaderCell, PageLink, PaginationView, TableBody, TableView,
    format_price_cell,
};
pub use pagination::PageState;
pub use sorting::{AssetColumn, SortDirection, SortState, compare_alphanumeric, next_sorting};
