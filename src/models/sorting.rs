use std::cmp::Ordering;

use strum_macros::{Display, EnumIter};

use crate::domain::Asset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Columns of the asset table, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum AssetColumn {
    #[strum(to_string = "#")]
    Index,
    #[strum(to_string = "Coin")]
    Name,
    #[strum(to_string = "Symbol")]
    Symbol,
    #[strum(to_string = "Price")]
    LastPrice,
}

impl AssetColumn {
    pub fn id(&self) -> &'static str {
        match self {
            AssetColumn::Index => "index",
            AssetColumn::Name => "name",
            AssetColumn::Symbol => "symbol",
            AssetColumn::LastPrice => "last_price",
        }
    }

    pub fn is_sortable(&self) -> bool {
        !matches!(self, AssetColumn::Index)
    }

    /// Numbers open on descending, text on ascending.
    pub fn first_direction(&self) -> SortDirection {
        match self {
            AssetColumn::LastPrice => SortDirection::Descending,
            _ => SortDirection::Ascending,
        }
    }

    /// Ascending comparison of two rows on this column. Ties are left to the caller.
    pub fn compare(&self, a: &Asset, b: &Asset) -> Ordering {
        match self {
            AssetColumn::Index => Ordering::Equal,
            AssetColumn::Name => compare_alphanumeric(&a.name, &b.name),
            AssetColumn::Symbol => compare_alphanumeric(&a.symbol, &b.symbol),
            AssetColumn::LastPrice => match (a.last_price, b.last_price) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                // Missing values rank above any number before the direction is applied.
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (None, None) => Ordering::Equal,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: AssetColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            column: AssetColumn::LastPrice,
            direction: SortDirection::Descending,
        }
    }
}

/// Header click: first direction -> opposite -> unsorted. Clicking a different column starts over on it.
pub fn next_sorting(current: Option<SortState>, clicked: AssetColumn) -> Option<SortState> {
    if !clicked.is_sortable() {
        return current;
    }
    let first = clicked.first_direction();
    match current {
        Some(state) if state.column == clicked => {
            if state.direction != first {
                None
            } else {
                Some(SortState {
                    column: clicked,
                    direction: state.direction.toggle(),
                })
            }
        }
        _ => Some(SortState {
            column: clicked,
            direction: first,
        }),
    }
}

/// Indices of `rows` in display order. Ties (and the unsorted case) keep insertion order.
pub fn sorted_indices(rows: &[Asset], sorting: Option<SortState>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..rows.len()).collect();
    if let Some(state) = sorting {
        order.sort_by(|&a, &b| {
            let ord = state.column.compare(&rows[a], &rows[b]);
            let ord = match state.direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            };
            ord.then(a.cmp(&b))
        });
    }
    order
}

/// Case-insensitive natural ordering: runs of digits compare by value, text compares lexically,
/// and a text chunk sorts before a number chunk.
pub fn compare_alphanumeric(a: &str, b: &str) -> Ordering {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let a_chunks = split_digit_runs(&a);
    let b_chunks = split_digit_runs(&b);

    for (x, y) in a_chunks.iter().zip(b_chunks.iter()) {
        let x_num = x.starts_with(|c: char| c.is_ascii_digit());
        let y_num = y.starts_with(|c: char| c.is_ascii_digit());
        let ord = match (x_num, y_num) {
            (false, false) => x.cmp(y),
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater,
            (true, true) => compare_digit_runs(x, y),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a_chunks.len().cmp(&b_chunks.len())
}

fn split_digit_runs(s: &str) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let mut in_digits: Option<bool> = None;
    for (i, c) in s.char_indices() {
        let is_digit = c.is_ascii_digit();
        match in_digits {
            Some(prev) if prev != is_digit => {
                chunks.push(&s[start..i]);
                start = i;
            }
            _ => {}
        }
        in_digits = Some(is_digit);
    }
    if start < s.len() {
        chunks.push(&s[start..]);
    }
    chunks
}

// Compare digit strings by numeric value without overflowing.
fn compare_digit_runs(x: &str, y: &str) -> Ordering {
    let x = x.trim_start_matches('0');
    let y = y.trim_start_matches('0');
    x.len().cmp(&y.len()).then_with(|| x.cmp(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset(address: &str, name: &str, symbol: &str, price: Option<f64>) -> Asset {
        Asset {
            address: address.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            last_price: price,
        }
    }

    fn sample() -> Vec<Asset> {
        vec![
            asset("0x1", "beta", "BET", Some(2.0)),
            asset("0x2", "Alpha", "ALP", Some(30.0)),
            asset("0x3", "gamma", "GAM", None),
            asset("0x4", "Delta", "DEL", Some(0.5)),
        ]
    }

    fn addresses(rows: &[Asset], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| rows[i].address.clone()).collect()
    }

    #[test]
    fn price_cycle_is_desc_asc_none() {
        let start = Some(SortState::default());
        let second = next_sorting(start, AssetColumn::LastPrice);
        assert_eq!(
            second,
            Some(SortState {
                column: AssetColumn::LastPrice,
                direction: SortDirection::Ascending
            })
        );
        assert_eq!(next_sorting(second, AssetColumn::LastPrice), None);
        assert_eq!(next_sorting(None, AssetColumn::LastPrice), start);
    }

    #[test]
    fn text_cycle_is_asc_desc_none() {
        let first = next_sorting(Some(SortState::default()), AssetColumn::Name);
        assert_eq!(
            first,
            Some(SortState {
                column: AssetColumn::Name,
                direction: SortDirection::Ascending
            })
        );
        let second = next_sorting(first, AssetColumn::Name);
        assert_eq!(second.map(|s| s.direction), Some(SortDirection::Descending));
        assert_eq!(next_sorting(second, AssetColumn::Name), None);
    }

    #[test]
    fn index_column_ignores_clicks() {
        let state = Some(SortState::default());
        assert_eq!(next_sorting(state, AssetColumn::Index), state);
        assert_eq!(next_sorting(None, AssetColumn::Index), None);
    }

    #[test]
    fn price_descending_puts_missing_first() {
        let rows = sample();
        let order = sorted_indices(&rows, Some(SortState::default()));
        assert_eq!(addresses(&rows, &order), ["0x3", "0x2", "0x1", "0x4"]);
    }

    #[test]
    fn toggling_reverses_and_third_click_restores_insertion_order() {
        let rows = sample();
        let asc = next_sorting(None, AssetColumn::Name);
        let desc = next_sorting(asc, AssetColumn::Name);

        let asc_order = sorted_indices(&rows, asc);
        let mut desc_order = sorted_indices(&rows, desc);
        assert_eq!(addresses(&rows, &asc_order), ["0x2", "0x1", "0x4", "0x3"]);
        desc_order.reverse();
        assert_eq!(asc_order, desc_order);

        let none = next_sorting(desc, AssetColumn::Name);
        assert_eq!(sorted_indices(&rows, none), vec![0, 1, 2, 3]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let rows = vec![
            asset("0xa", "Same", "S", Some(1.0)),
            asset("0xb", "Same", "S", Some(1.0)),
            asset("0xc", "Same", "S", Some(1.0)),
        ];
        let order = sorted_indices(&rows, Some(SortState::default()));
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn alphanumeric_is_natural_and_case_insensitive() {
        assert_eq!(compare_alphanumeric("Token2", "token10"), Ordering::Less);
        assert_eq!(compare_alphanumeric("ABC", "abc"), Ordering::Equal);
        assert_eq!(compare_alphanumeric("abc", "abd"), Ordering::Less);
        assert_eq!(compare_alphanumeric("a", "a1"), Ordering::Less);
        assert_eq!(compare_alphanumeric("x", "1"), Ordering::Less);
        assert_eq!(compare_alphanumeric("", "a"), Ordering::Less);
        assert_eq!(compare_alphanumeric("007", "7"), Ordering::Equal);
    }
}
