//! External collaborators behind the command handlers. Each provider owns
//! the mutable state its commands act on; the dispatch core only sees
//! zero-argument closures over `Rc<RefCell<Providers>>`.

mod analytics;
mod blockchain;
mod layout;
mod market;
mod theme;

use std::cell::RefCell;
use std::rc::Rc;

pub use analytics::{AnalyticsDesk, ReportMeta};
pub use blockchain::ChainGateway;
pub use layout::{LayoutMode, LayoutState};
pub use market::{MarketDesk, Order, OrderKind, Quote};
pub use theme::{ThemeMode, ThemeState};

#[derive(Debug)]
pub struct Providers {
    pub theme: ThemeState,
    pub layout: LayoutState,
    pub chain: ChainGateway,
    pub market: MarketDesk,
    pub analytics: AnalyticsDesk,
}

impl Providers {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            theme: ThemeState::new(theme),
            layout: LayoutState::default(),
            chain: ChainGateway::new(),
            market: MarketDesk::new(),
            analytics: AnalyticsDesk::new(),
        }
    }

    pub fn shared(theme: ThemeMode) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::new(theme)))
    }
}
