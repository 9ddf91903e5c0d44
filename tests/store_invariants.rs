use proptest::prelude::*;

use stockbook::{
    core::store::{Store, StoreError, StoreSnapshot},
    item::{Item, ItemKey},
};

#[derive(Debug, Clone)]
enum Action {
    Stock { idx: u8, quantity: u8, priced: bool },
    Sell { idx: u8, quantity: u8 },
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        (0u8..12, 1u8..20, any::<bool>())
            .prop_map(|(idx, quantity, priced)| Action::Stock { idx, quantity, priced }),
        (0u8..12, 1u8..30).prop_map(|(idx, quantity)| Action::Sell { idx, quantity }),
    ]
}

fn catalog_cost(idx: u8) -> f64 {
    0.25 * f64::from(idx + 1)
}

fn template(idx: u8, priced: bool) -> Item {
    let cost = catalog_cost(idx);
    let mut item = Item::new(format!("sku{idx}"), cost).expect("item");
    if priced {
        item.set_price(cost * 1.6).expect("price");
    }
    item
}

fn key_for(idx: u8) -> ItemKey {
    ItemKey::new(format!("sku{idx}"), catalog_cost(idx))
}

proptest! {
    #[test]
    fn random_stock_sell_sequences_preserve_ledger_invariants(
        actions in prop::collection::vec(action_strategy(), 1..200)
    ) {
        let initial = 10_000.0;
        let mut store = Store::new(initial).expect("store");
        let mut last_revenue = 0.0;
        let mut last_expenditure = 0.0;

        for action in actions {
            let before = store.export_snapshot();
            match action {
                Action::Stock { idx, quantity, priced } => {
                    match store.stock(template(idx, priced), u32::from(quantity)) {
                        Ok(true) => {}
                        // a declined purchase must change nothing
                        Ok(false) => prop_assert_eq!(&store.export_snapshot(), &before),
                        Err(err) => prop_assert!(false, "unexpected stock error: {err:?}"),
                    }
                }
                Action::Sell { idx, quantity } => {
                    match store.sell(&key_for(idx), u32::from(quantity)) {
                        Ok(true) => {}
                        Ok(false) => prop_assert_eq!(&store.export_snapshot(), &before),
                        Err(StoreError::InsufficientQuantity { .. }) => {
                            prop_assert_eq!(&store.export_snapshot(), &before)
                        }
                        Err(err) => prop_assert!(false, "unexpected sell error: {err:?}"),
                    }
                }
            }

            prop_assert!(store.asset() >= 0.0);
            prop_assert!(store.revenue() >= last_revenue);
            prop_assert!(store.expenditure() >= last_expenditure);
            last_revenue = store.revenue();
            last_expenditure = store.expenditure();

            let reconstructed = initial - store.expenditure() + store.revenue();
            prop_assert!(
                (store.asset() - reconstructed).abs() < 1e-6,
                "ledger drifted: asset {} vs {}",
                store.asset(),
                reconstructed
            );

            for (pos, entry) in store.items().iter().enumerate() {
                prop_assert_eq!(store.index_of(&entry.key()), Some(pos));
            }
        }

        let snapshot = store.export_snapshot();
        let text = serde_json::to_string(&snapshot).expect("encode");
        let decoded: StoreSnapshot = serde_json::from_str(&text).expect("decode");
        prop_assert_eq!(&decoded, &snapshot);

        let restored = Store::from_snapshot(decoded).expect("restore");
        prop_assert_eq!(restored.export_snapshot(), snapshot);
    }
}
