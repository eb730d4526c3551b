//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Log every request/response of the catalog and price clients.
    pub log_fetches: bool,

    /// Log query lifecycle: started, resolved, dropped as stale.
    pub log_queries: bool,

    /// Sort toggles and page changes coming from the table.
    pub log_table: bool,

    /// Wallet connect / disconnect and balance reads
    pub log_wallet: bool,

    pub log_theme: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetches: true,
    log_queries: false,

    log_table: false,
    log_wallet: true,
    log_theme: false,
};
