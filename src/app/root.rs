use {
    anyhow::{Context as _, Result},
    eframe::{
        Frame,
        egui::{CentralPanel, Context, Key},
    },
    std::sync::Arc,
    tokio::runtime::Runtime,
};

use crate::{
    Cli,
    app::{Dashboard, Tab, ThemeChoice, WalletConnection, WatchOnlyWallet},
    config::{DF, DashboardConfig},
    data::{Notify, RpcBalanceClient},
    ui::{
        TableAction, ToolbarAction, UI_CONFIG, WalletAction, render_asset_table,
        render_status_bar, render_toolbar, render_wallet_panel,
    },
};

pub struct App {
    config: DashboardConfig,
    // Owns the worker threads for every fetch. Dropped with the app.
    runtime: Runtime,
    notify: Notify,
    dashboard: Dashboard,
    wallet: WatchOnlyWallet,
    tab: Tab,
    theme: ThemeChoice,
    address_input: String,
    connect_error: Option<String>,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Result<Self> {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let config = DashboardConfig::from(&args);
        let runtime = Runtime::new().context("Failed to create runtime")?;

        let ctx = cc.egui_ctx.clone();
        let notify: Notify = Arc::new(move || ctx.request_repaint());

        let mut app = Self {
            dashboard: Dashboard::from_config(&config),
            wallet: WatchOnlyWallet::new(Arc::new(RpcBalanceClient::new(&config))),
            config,
            runtime,
            notify,
            tab: Tab::default(),
            theme: ThemeChoice::default(),
            address_input: args.address.clone().unwrap_or_default(),
            connect_error: None,
        };

        app.dashboard.select_theme(app.theme, &cc.egui_ctx);
        app.refresh();
        if let Some(address) = args.address {
            app.connect_wallet(&address);
        }
        Ok(app)
    }

    fn refresh(&mut self) {
        let handle = self.runtime.handle();
        self.dashboard.refresh(handle, self.notify.clone());
        self.wallet.refresh_balance(handle, self.notify.clone());
    }

    fn connect_wallet(&mut self, address: &str) {
        match self
            .wallet
            .connect(address, self.runtime.handle(), self.notify.clone())
        {
            Ok(()) => self.connect_error = None,
            Err(e) => {
                if DF.log_wallet {
                    log::info!("Connect rejected: {:#}", e);
                }
                self.connect_error = Some(e.to_string());
            }
        }
    }

    fn handle_table_action(&mut self, action: TableAction) {
        let table = self.dashboard.table_mut();
        match action {
            TableAction::Sort(column) => {
                table.toggle_sort(column);
            }
            TableAction::Page(index) => table.set_page_index(index),
            TableAction::Previous => table.previous_page(),
            TableAction::Next => table.next_page(),
        }
    }

    fn handle_wallet_action(&mut self, ctx: &Context, action: WalletAction) {
        match action {
            WalletAction::Connect(address) => self.connect_wallet(&address),
            WalletAction::Disconnect => {
                self.wallet.disconnect();
                self.connect_error = None;
            }
            WalletAction::CopyAddress => {
                self.dashboard.copy_address(&self.wallet.status(), ctx);
            }
        }
    }

    fn render_central(&mut self, ctx: &Context) {
        let mut table_actions = Vec::new();
        let mut wallet_action = None;

        CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::Assets => {
                let view = self
                    .dashboard
                    .table()
                    .view(self.dashboard.assets_loading());
                table_actions = render_asset_table(ui, &view, &self.config);
            }
            Tab::Wallet => {
                let view = self.dashboard.wallet_view(&self.wallet.status());
                wallet_action = render_wallet_panel(
                    ui,
                    &view,
                    &mut self.address_input,
                    self.connect_error.as_deref(),
                    &self.config,
                );
            }
        });

        for action in table_actions {
            self.handle_table_action(action);
        }
        if let Some(action) = wallet_action {
            self.handle_wallet_action(ctx, action);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);

        self.dashboard.update();
        self.wallet.poll();

        if ctx.input(|i| i.key_pressed(Key::F5)) {
            self.refresh();
        }

        match render_toolbar(
            ctx,
            &mut self.tab,
            self.theme,
            self.dashboard.is_fetching(),
        ) {
            Some(ToolbarAction::Refresh) => self.refresh(),
            Some(ToolbarAction::Theme(choice)) => {
                self.theme = choice;
                self.dashboard.select_theme(choice, ctx);
            }
            None => {}
        }

        render_status_bar(
            ctx,
            self.dashboard.assets_status(),
            self.dashboard.rate_status(),
            self.dashboard.conversion_rate().is_available(),
            &self.dashboard.last_updated(),
        );

        self.render_central(ctx);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    ctx.style_mut(|s| {
        s.interaction.selectable_labels = false;
        s.visuals.hyperlink_color = UI_CONFIG.colors.heading;
    });
}
