use {
    crate::{
        config::{DashboardConfig, TABLE},
        models::{AssetColumn, HeaderCell, PaginationView, SortDirection, TableBody, TableView},
        ui::{UI_CONFIG, UI_TEXT, UiStyleExt, colored_heading},
    },
    eframe::egui::{Button, Grid, Image, RichText, ScrollArea, Ui, Vec2},
};

/// What the user clicked in the table this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TableAction {
    Sort(AssetColumn),
    Page(usize),
    Previous,
    Next,
}

pub(crate) fn render_asset_table(
    ui: &mut Ui,
    view: &TableView,
    config: &DashboardConfig,
) -> Vec<TableAction> {
    let mut actions = Vec::new();

    ScrollArea::vertical().auto_shrink([false, true]).show(ui, |ui| {
        Grid::new("asset_table")
            .striped(true)
            .num_columns(view.headers.len())
            .spacing([24.0, 8.0])
            .min_row_height(UI_CONFIG.row_height)
            .show(ui, |ui| {
                for header in &view.headers {
                    if let Some(action) = render_header(ui, header) {
                        actions.push(action);
                    }
                }
                ui.end_row();

                match &view.body {
                    TableBody::Skeleton { rows, columns } => {
                        for _ in 0..*rows {
                            for _ in 0..*columns {
                                ui.skeleton_bar(80.0);
                            }
                            ui.end_row();
                        }
                    }
                    TableBody::Empty => {}
                    TableBody::Rows(rows) => {
                        for row in rows {
                            ui.label(row.position.to_string());
                            ui.horizontal(|ui| {
                                ui.add(
                                    Image::new(config.icon_uri(&row.symbol))
                                        .fit_to_exact_size(Vec2::splat(TABLE.icon_size)),
                                );
                                ui.label(&row.name);
                            });
                            ui.label(&row.symbol);
                            ui.label(RichText::new(&row.price).color(UI_CONFIG.colors.price));
                            ui.end_row();
                        }
                    }
                }
            });

        if view.body == TableBody::Empty {
            ui.add_space(12.0);
            ui.vertical_centered(|ui| {
                ui.label_subdued(&UI_TEXT.table_empty);
            });
        }
    });

    ui.add_space(8.0);
    render_pagination(ui, &view.pagination, &mut actions);
    actions
}

fn render_header(ui: &mut Ui, header: &HeaderCell) -> Option<TableAction> {
    if !header.sortable {
        ui.label(colored_heading(&header.label));
        return None;
    }

    let icon = match header.sorted {
        Some(SortDirection::Ascending) => &UI_TEXT.icon_sort_asc,
        Some(SortDirection::Descending) => &UI_TEXT.icon_sort_desc,
        None => &UI_TEXT.icon_sort,
    };
    let text = colored_heading(format!("{} {}", header.label, icon));
    ui.add(Button::new(text).frame(false))
        .on_hover_text(&UI_TEXT.hover_sort)
        .clicked()
        .then_some(TableAction::Sort(header.column))
}

fn render_pagination(ui: &mut Ui, pagination: &PaginationView, actions: &mut Vec<TableAction>) {
    ui.horizontal(|ui| {
        if ui
            .add_enabled(pagination.can_previous, Button::new(UI_TEXT.icon_previous.as_str()))
            .clicked()
        {
            actions.push(TableAction::Previous);
        }

        for link in &pagination.links {
            if ui.selectable_label(link.active, link.label()).clicked() && !link.active {
                actions.push(TableAction::Page(link.index));
            }
        }

        if ui
            .add_enabled(pagination.can_next, Button::new(UI_TEXT.icon_next.as_str()))
            .clicked()
        {
            actions.push(TableAction::Next);
        }
    });
}
