use super::*;

#[test]
fn four_send_again_contacts() {
    let names: Vec<_> = CONTACTS.iter().map(|c| c.name).collect();
    assert_eq!(names, ["Alexandria", "Immanuel", "Kayshania", "Ibrahim"]);
}

#[test]
fn three_latest_transactions() {
    assert_eq!(TRANSACTIONS.len(), 3);
    assert_eq!(TRANSACTIONS[0].kind, TransactionKind::Transfer);
    assert_eq!(TRANSACTIONS[0].direction, Direction::Debit);
    assert_eq!(TRANSACTIONS[1].kind, TransactionKind::TopUp);
    assert_eq!(TRANSACTIONS[1].direction, Direction::Credit);
    assert_eq!(TRANSACTIONS[2].amount, "-Rp 350.000");
}

#[test]
fn transaction_kind_labels() {
    assert_eq!(TransactionKind::Transfer.label(), "Transfer");
    assert_eq!(TransactionKind::TopUp.label(), "Top Up");
    assert_eq!(TransactionKind::Internet.label(), "Internet");
}

#[test]
fn nav_grid_covers_every_tab() {
    assert_eq!(NAV_ITEMS.len(), crate::state::dashboard::NavTab::ALL.len());
}

#[test]
fn menu_section_sizes() {
    assert_eq!(MAIN_MENU.len(), 4);
    assert_eq!(PAYMENT_LIST.len(), 7);
}

#[test]
fn payment_list_entries() {
    let names: Vec<_> = PAYMENT_LIST.iter().map(|e| e.name).collect();
    assert_eq!(
        names,
        [
            "Electricity",
            "Online Ticket",
            "Education",
            "Insurance",
            "Invest",
            "Internet & TV Cable",
            "Water",
        ]
    );
}
