use serde_json::Value;

/// One row of the asset table.
#[derive(Debug, Clone, PartialEq)]
pub struct Asset {
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub last_price: Option<f64>,
}

/// Catalog record for a single address, as served by the catalog API.
/// Fields are taken as-is: nothing here rejects a malformed record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetInfo {
    pub name: String,
    pub symbol: String,
    pub last_price: Option<f64>,
}

impl AssetInfo {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>, last_price: Option<f64>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
            last_price,
        }
    }

    pub fn from_json(value: &Value) -> Self {
        Self {
            name: text_field(value.get("name")),
            symbol: text_field(value.get("symbol")),
            last_price: value.get("last_price").and_then(Value::as_f64),
        }
    }
}

// Missing or null renders as nothing; other non-strings render as their JSON text.
fn text_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Address -> info mapping, kept in the order the catalog sent it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetCatalog {
    entries: Vec<(String, AssetInfo)>,
}

impl AssetCatalog {
    /// Objects give one entry per key, arrays one entry per element keyed by index.
    /// Anything else is an empty catalog.
    pub fn from_json(body: &Value) -> Self {
        match body {
            Value::Object(map) => map
                .iter()
                .map(|(address, info)| (address.clone(), AssetInfo::from_json(info)))
                .collect(),
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(i, info)| (i.to_string(), AssetInfo::from_json(info)))
                .collect(),
            _ => Self::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetInfo)> {
        self.entries.iter().map(|(a, info)| (a.as_str(), info))
    }

    /// Flatten into table rows, one per address, preserving catalog order.
    pub fn into_assets(self) -> Vec<Asset> {
        self.entries
            .into_iter()
            .map(|(address, info)| Asset {
                address,
                name: info.name,
                symbol: info.symbol,
                last_price: info.last_price,
            })
            .collect()
    }
}

impl FromIterator<(String, AssetInfo)> for AssetCatalog {
    fn from_iter<I: IntoIterator<Item = (String, AssetInfo)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
