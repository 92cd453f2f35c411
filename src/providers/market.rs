use anyhow::Result;
use time::OffsetDateTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderKind {
    Market,
    Limit,
    StopLoss,
}

impl OrderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            OrderKind::Market => "market",
            OrderKind::Limit => "limit",
            OrderKind::StopLoss => "stop-loss",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Order {
    pub kind: OrderKind,
    pub symbol: String,
    pub placed_at: OffsetDateTime,
}

#[derive(Clone, Debug)]
pub struct Quote {
    pub symbol: String,
    pub price: f64,
}

/// Mock market desk. Quotes are derived from the symbol name so refreshes
/// are deterministic; orders accumulate for the session.
#[derive(Debug, Default)]
pub struct MarketDesk {
    pub selected_symbol: String,
    orders: Vec<Order>,
    last_refresh: Option<OffsetDateTime>,
}

const WATCHLIST: &[&str] = &["ETH", "BTC", "SOL", "ARB", "OP"];

impl MarketDesk {
    pub fn new() -> Self {
        Self {
            selected_symbol: "ETH".to_string(),
            orders: Vec::new(),
            last_refresh: None,
        }
    }

    pub fn refresh(&mut self) -> Result<Vec<Quote>> {
        self.last_refresh = Some(OffsetDateTime::now_utc());
        Ok(self.quotes())
    }

    /// Current watchlist quotes; read-only and deterministic.
    pub fn quotes(&self) -> Vec<Quote> {
        WATCHLIST
            .iter()
            .map(|symbol| Quote {
                symbol: (*symbol).to_string(),
                price: stub_price(symbol),
            })
            .collect()
    }

    pub fn last_refresh(&self) -> Option<OffsetDateTime> {
        self.last_refresh
    }

    pub fn place_order(&mut self, kind: OrderKind) -> Result<Order> {
        let order = Order {
            kind,
            symbol: self.selected_symbol.clone(),
            placed_at: OffsetDateTime::now_utc(),
        };
        self.orders.push(order.clone());
        Ok(order)
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn sentiment(&self) -> &'static str {
        // Stub: keyed off the selected symbol, never time.
        match blake3::hash(self.selected_symbol.as_bytes()).as_bytes()[0] % 3 {
            0 => "bearish",
            1 => "neutral",
            _ => "bullish",
        }
    }

    pub fn portfolio_value(&self) -> f64 {
        WATCHLIST.iter().map(|s| stub_price(s)).sum()
    }

    pub fn profit_loss(&self, window: &str) -> f64 {
        let h = blake3::hash(format!("{}:{window}", self.selected_symbol).as_bytes());
        f64::from(h.as_bytes()[0] as i32 - 128) / 10.0
    }
}

fn stub_price(symbol: &str) -> f64 {
    let h = blake3::hash(symbol.as_bytes());
    let b = h.as_bytes();
    let raw = u32::from_le_bytes([b[0], b[1], b[2], b[3]]);
    f64::from(raw % 500_000) / 100.0
}
