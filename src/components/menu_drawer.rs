//! Slide-out menu drawer for the dashboard.

use leptos::prelude::*;

use crate::components::icon::{Icon, SvgIcon};
use crate::data::{MAIN_MENU, MenuEntry, NAV_ITEMS, PAYMENT_LIST};
use crate::state::dashboard::DashboardState;

/// Left-hand drawer with the navigation grid, main menu, payment list,
/// and a logout row. Selecting a navigation item sets the active tab and
/// closes the drawer; the backdrop and close button just close it.
#[component]
pub fn MenuDrawer(state: RwSignal<DashboardState>) -> impl IntoView {
    let open = move || state.get().menu_open;
    let close = move |_| state.update(|s| s.menu_open = false);

    let nav_grid = move || {
        let active = state.get().active_tab;
        NAV_ITEMS
            .iter()
            .map(|item| {
                let tab = item.tab;
                view! {
                    <button
                        class="drawer__nav-item"
                        class:drawer__nav-item--active=move || active == tab
                        on:click=move |_| {
                            state
                                .update(|s| {
                                    s.active_tab = tab;
                                    s.menu_open = false;
                                })
                        }
                    >
                        <SvgIcon icon=item.icon class="drawer__nav-icon"/>
                        <span>{tab.label()}</span>
                    </button>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <Show when=open>
            <div class="drawer__backdrop" on:click=close></div>
        </Show>

        <div class="drawer" class:drawer--open=open>
            <div class="drawer__header">
                <div class="drawer__brand">
                    <span class="drawer__logo">"G"</span>
                    <span class="drawer__title">"CashEase"</span>
                </div>
                <button class="drawer__close" on:click=close>
                    <SvgIcon icon=Icon::Cross/>
                </button>
            </div>

            <div class="drawer__content">
                <div class="drawer__section drawer__nav-grid">{nav_grid}</div>

                <div class="drawer__section">
                    <h3 class="drawer__section-title">"Main Menu"</h3>
                    <div class="drawer__tile-grid">
                        <MenuTiles entries=MAIN_MENU state=state/>
                    </div>
                </div>

                <div class="drawer__section">
                    <h3 class="drawer__section-title">"Payment List"</h3>
                    <div class="drawer__tile-grid">
                        <MenuTiles entries=PAYMENT_LIST state=state/>
                    </div>
                </div>

                <div class="drawer__footer">
                    <button class="drawer__logout">
                        <SvgIcon icon=Icon::LogOut class="drawer__logout-icon"/>
                        <span>"Logout"</span>
                    </button>
                </div>
            </div>
        </div>
    }
}

/// One tile grid section; tiles are inert beyond closing the drawer.
#[component]
fn MenuTiles(entries: &'static [MenuEntry], state: RwSignal<DashboardState>) -> impl IntoView {
    entries
        .iter()
        .map(|entry| {
            view! {
                <button
                    class="drawer__tile"
                    on:click=move |_| state.update(|s| s.menu_open = false)
                >
                    <span class=format!("drawer__tile-badge tile--{}", entry.tint)>
                        <SvgIcon icon=entry.icon class="drawer__tile-icon"/>
                    </span>
                    <span class="drawer__tile-name">{entry.name}</span>
                </button>
            }
        })
        .collect::<Vec<_>>()
}
