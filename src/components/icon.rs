//! Inline SVG icon set.
//!
//! Stroke-style 24x24 icons rendered inline so the crate carries no icon
//! font or image assets. Shapes are approximations of the usual feather
//! forms; each variant is a single `d` string (subpaths separated by `M`).

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Mail,
    Lock,
    Eye,
    EyeOff,
    Check,
    Cross,
    Alert,
    Menu,
    Home,
    Chart,
    FileText,
    User,
    LogOut,
    Send,
    Wallet,
    ArrowDownToLine,
    HandCoins,
    Zap,
    Ticket,
    GraduationCap,
    Shield,
    TrendingUp,
    Wifi,
    Droplets,
    Plus,
    ArrowRight,
    MoreHorizontal,
}

impl Icon {
    fn path(self) -> &'static str {
        match self {
            Self::Mail => "M4 6h16v12H4z M4 7l8 6 8-6",
            Self::Lock => "M6 11h12v9H6z M9 11V8a3 3 0 0 1 6 0v3",
            Self::Eye => {
                "M2 12s3.5-6 10-6 10 6 10 6-3.5 6-10 6-10-6-10-6z M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6z"
            }
            Self::EyeOff => {
                "M3 3l18 18 M10.5 5.2A11 11 0 0 1 12 5c6.5 0 10 7 10 7a17.6 17.6 0 0 1-3.2 3.9 M6.1 6.1A17 17 0 0 0 2 12s3.5 7 10 7c1.4 0 2.7-.3 4-.8"
            }
            Self::Check => "M4 12l5 5 11-11",
            Self::Cross => "M6 6l12 12 M18 6L6 18",
            Self::Alert => "M12 3a9 9 0 1 0 0 18 9 9 0 0 0 0-18z M12 8v4 M12 16h.01",
            Self::Menu => "M4 6h16 M4 12h16 M4 18h16",
            Self::Home => "M3 11l9-8 9 8 M5 10v10h14V10",
            Self::Chart => "M3 3v18h18 M7 16v-5 M12 16V8 M17 16v-3",
            Self::FileText => "M6 2h9l5 5v15H6z M14 2v6h6 M9 13h6 M9 17h6",
            Self::User => "M12 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z M4 21a8 8 0 0 1 16 0",
            Self::LogOut => "M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4 M16 17l5-5-5-5 M21 12H9",
            Self::Send => "M22 2L11 13 M22 2l-7 20-4-9-9-4z",
            Self::Wallet => {
                "M3 7h16a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z M3 7V5a2 2 0 0 1 2-2h12 M16 13h.01"
            }
            Self::ArrowDownToLine => "M12 3v12 M7 10l5 5 5-5 M5 21h14",
            Self::HandCoins => {
                "M12 3a3 3 0 1 0 0 6 3 3 0 0 0 0-6z M3 14h4l3 2h5a2 2 0 0 1 0 4H9l-6-2 M3 14v7"
            }
            Self::Zap => "M13 2L4 14h6l-1 8 9-12h-6z",
            Self::Ticket => {
                "M4 5h16v4a2 2 0 0 0 0 6v4H4v-4a2 2 0 0 0 0-6z M13 5v2 M13 11v2 M13 17v2"
            }
            Self::GraduationCap => {
                "M2 9l10-5 10 5-10 5z M6 11v5c0 1.5 2.7 3 6 3s6-1.5 6-3v-5"
            }
            Self::Shield => "M12 2l8 4v6c0 5-3.5 8.5-8 10-4.5-1.5-8-5-8-10V6z",
            Self::TrendingUp => "M3 17l6-6 4 4 8-8 M15 7h6v6",
            Self::Wifi => {
                "M2 9a15 15 0 0 1 20 0 M5.5 12.5a10 10 0 0 1 13 0 M9 16a5 5 0 0 1 6 0 M12 20h.01"
            }
            Self::Droplets => "M12 3s-6 6.5-6 11a6 6 0 0 0 12 0c0-4.5-6-11-6-11z",
            Self::Plus => "M12 5v14 M5 12h14",
            Self::ArrowRight => "M5 12h14 M13 6l6 6-6 6",
            Self::MoreHorizontal => "M5 12h.01 M12 12h.01 M19 12h.01",
        }
    }
}

/// One inline SVG icon, sized by the surrounding CSS.
#[component]
pub fn SvgIcon(icon: Icon, #[prop(optional)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d=icon.path()></path>
        </svg>
    }
}
