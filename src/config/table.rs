/// Pagination window around the current page: one page back, two ahead.
pub struct PageWindow {
    pub before: usize,
    pub after: usize,
}

pub struct SkeletonShape {
    pub rows: usize,
    pub columns: usize,
}

pub struct TableConfig {
    pub page_size: usize,
    pub window: PageWindow,
    pub skeleton: SkeletonShape,
    pub icon_size: f32,
    pub balance_icon_size: f32,
}

pub const TABLE: TableConfig = TableConfig {
    page_size: 10,
    window: PageWindow {
        before: 1,
        after: 2,
    },
    skeleton: SkeletonShape {
        rows: 5,
        columns: 4,
    },
    icon_size: 25.0,
    balance_icon_size: 15.0,
};
