//! Dashboard page: balance header, shortcuts, contacts, transactions.
//!
//! Everything rendered here comes from the static tables in [`crate::data`];
//! the only local state is the active navigation tab and the drawer flag.

use leptos::prelude::*;

use crate::components::icon::{Icon, SvgIcon};
use crate::components::menu_drawer::MenuDrawer;
use crate::data::{BALANCE, CONTACTS, Direction, POINTS, TRANSACTIONS};
use crate::state::dashboard::DashboardState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());

    let open_menu = move |_| state.update(|s| s.menu_open = true);
    let dimmed = move || state.get().menu_open;

    let transactions = TRANSACTIONS
        .iter()
        .map(|tx| {
            let amount_class = match tx.direction {
                Direction::Debit => "transaction__amount transaction__amount--debit",
                Direction::Credit => "transaction__amount transaction__amount--credit",
            };
            view! {
                <div class="transaction">
                    <span class=format!("transaction__badge transaction__badge--{}", tx.kind.tint())>
                        <SvgIcon icon=tx.kind.icon() class="transaction__icon"/>
                    </span>
                    <div class="transaction__detail">
                        <p class="transaction__type">{tx.kind.label()}</p>
                        <p class="transaction__date">{tx.date}</p>
                    </div>
                    <span class=amount_class>{tx.amount}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let contacts = CONTACTS
        .iter()
        .map(|contact| {
            view! {
                <div class="contact">
                    <img class="contact__avatar" src=contact.avatar_url alt=contact.name/>
                    <span class="contact__name">{contact.name}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="dashboard-page">
            <MenuDrawer state=state/>

            <div class="dashboard-page__main" class:dashboard-page__main--dimmed=dimmed>
                <header class="dashboard-page__header">
                    <div class="dashboard-page__header-row">
                        <div class="dashboard-page__welcome">
                            <button class="dashboard-page__menu-button" on:click=open_menu>
                                <SvgIcon icon=Icon::Menu/>
                            </button>
                            <div>
                                <h1 class="dashboard-page__greeting">"Welcome back!"</h1>
                                <p class="dashboard-page__subtitle">
                                    "Manage your finances with ease"
                                </p>
                            </div>
                        </div>
                        <div class="dashboard-page__points">
                            <span class="dashboard-page__points-star">"\u{2b50}"</span>
                            <span>{POINTS}</span>
                        </div>
                    </div>

                    <div class="dashboard-page__balance">
                        <p class="dashboard-page__balance-caption">"Your Balance"</p>
                        <h2 class="dashboard-page__balance-amount">{BALANCE}</h2>
                    </div>
                </header>

                <div class="dashboard-page__content">
                    <div class="dashboard-page__shortcuts">
                        <div class="shortcut">
                            <span class="shortcut__badge tile--blue">
                                <SvgIcon icon=Icon::Send class="shortcut__icon"/>
                            </span>
                            <span class="shortcut__name">"Transfer"</span>
                        </div>
                        <div class="shortcut">
                            <span class="shortcut__badge tile--green">
                                <SvgIcon icon=Icon::Wallet class="shortcut__icon"/>
                            </span>
                            <span class="shortcut__name">"Top Up"</span>
                        </div>
                        <div class="shortcut">
                            <span class="shortcut__badge tile--orange">
                                <SvgIcon icon=Icon::ArrowDownToLine class="shortcut__icon"/>
                            </span>
                            <span class="shortcut__name">"Withdraw"</span>
                        </div>
                        <div class="shortcut" on:click=open_menu>
                            <span class="shortcut__badge tile--purple">
                                <SvgIcon icon=Icon::MoreHorizontal class="shortcut__icon"/>
                            </span>
                            <span class="shortcut__name">"More"</span>
                        </div>
                    </div>

                    <div class="dashboard-page__cards">
                        <section class="card">
                            <div class="card__header">
                                <h3 class="card__title">"Send Again"</h3>
                                <button class="card__see-all">
                                    "See all"
                                    <SvgIcon icon=Icon::ArrowRight class="card__see-all-icon"/>
                                </button>
                            </div>
                            <div class="card__contacts">
                                <div class="contact contact--add">
                                    <span class="contact__add-badge">
                                        <SvgIcon icon=Icon::Plus class="contact__add-icon"/>
                                    </span>
                                    <span class="contact__name contact__name--add">"Add New"</span>
                                </div>
                                {contacts}
                            </div>
                        </section>

                        <section class="card">
                            <div class="card__header">
                                <h3 class="card__title">"Latest Transactions"</h3>
                                <button class="card__see-all">
                                    "See all"
                                    <SvgIcon icon=Icon::ArrowRight class="card__see-all-icon"/>
                                </button>
                            </div>
                            <div class="card__transactions">{transactions}</div>
                        </section>
                    </div>
                </div>
            </div>
        </div>
    }
}
