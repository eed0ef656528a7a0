//! Static lookup tables backing the dashboard.
//!
//! Presentation-only data: nothing here is fetched, computed, or
//! persisted. The dashboard renders these tables as-is.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use crate::components::icon::Icon;
use crate::state::dashboard::NavTab;

pub const BALANCE: &str = "Rp 24,321,900";
pub const POINTS: &str = "1,972 Points";

/// A "Send Again" contact.
#[derive(Clone, Copy, Debug)]
pub struct Contact {
    pub name: &'static str,
    pub avatar_url: &'static str,
}

pub const CONTACTS: &[Contact] = &[
    Contact {
        name: "Alexandria",
        avatar_url: "https://images.unsplash.com/photo-1494790108755-2616b9e6ad95?w=60&h=60&fit=crop&crop=face",
    },
    Contact {
        name: "Immanuel",
        avatar_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=60&h=60&fit=crop&crop=face",
    },
    Contact {
        name: "Kayshania",
        avatar_url: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=60&h=60&fit=crop&crop=face",
    },
    Contact {
        name: "Ibrahim",
        avatar_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=60&h=60&fit=crop&crop=face",
    },
];

/// Kind of a listed transaction; drives the row icon and its tint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransactionKind {
    Transfer,
    TopUp,
    Internet,
}

impl TransactionKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Transfer => "Transfer",
            Self::TopUp => "Top Up",
            Self::Internet => "Internet",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Self::Transfer => Icon::Send,
            Self::TopUp => Icon::Wallet,
            Self::Internet => Icon::Wifi,
        }
    }

    /// Suffix for the `transaction__badge--*` tint classes.
    pub fn tint(self) -> &'static str {
        match self {
            Self::Transfer => "red",
            Self::TopUp => "green",
            Self::Internet => "blue",
        }
    }
}

/// Whether an amount left or entered the account; drives the amount color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Debit,
    Credit,
}

#[derive(Clone, Copy, Debug)]
pub struct Transaction {
    pub kind: TransactionKind,
    pub date: &'static str,
    pub amount: &'static str,
    pub direction: Direction,
}

pub const TRANSACTIONS: &[Transaction] = &[
    Transaction {
        kind: TransactionKind::Transfer,
        date: "Yesterday \u{2022} 19:12",
        amount: "-Rp 600.000",
        direction: Direction::Debit,
    },
    Transaction {
        kind: TransactionKind::TopUp,
        date: "May 29, 2023 \u{2022} 19:12",
        amount: "+Rp 260.000",
        direction: Direction::Credit,
    },
    Transaction {
        kind: TransactionKind::Internet,
        date: "May 16, 2023 \u{2022} 17:34",
        amount: "-Rp 350.000",
        direction: Direction::Debit,
    },
];

/// Navigation grid entry in the menu drawer.
#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub tab: NavTab,
    pub icon: Icon,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { tab: NavTab::Home, icon: Icon::Home },
    NavItem { tab: NavTab::Reports, icon: Icon::Chart },
    NavItem { tab: NavTab::History, icon: Icon::FileText },
    NavItem { tab: NavTab::Profile, icon: Icon::User },
];

/// Entry in the Main Menu or Payment List drawer sections.
#[derive(Clone, Copy, Debug)]
pub struct MenuEntry {
    pub name: &'static str,
    pub icon: Icon,
    /// Suffix for the `tile--*` tint classes.
    pub tint: &'static str,
}

pub const MAIN_MENU: &[MenuEntry] = &[
    MenuEntry { name: "Transfer", icon: Icon::Send, tint: "blue" },
    MenuEntry { name: "Top Up", icon: Icon::Wallet, tint: "green" },
    MenuEntry { name: "Withdraw", icon: Icon::ArrowDownToLine, tint: "orange" },
    MenuEntry { name: "Request", icon: Icon::HandCoins, tint: "purple" },
];

pub const PAYMENT_LIST: &[MenuEntry] = &[
    MenuEntry { name: "Electricity", icon: Icon::Zap, tint: "yellow" },
    MenuEntry { name: "Online Ticket", icon: Icon::Ticket, tint: "pink" },
    MenuEntry { name: "Education", icon: Icon::GraduationCap, tint: "indigo" },
    MenuEntry { name: "Insurance", icon: Icon::Shield, tint: "red" },
    MenuEntry { name: "Invest", icon: Icon::TrendingUp, tint: "emerald" },
    MenuEntry { name: "Internet & TV Cable", icon: Icon::Wifi, tint: "cyan" },
    MenuEntry { name: "Water", icon: Icon::Droplets, tint: "teal" },
];
