//! Scenario and Property Tests
//!
//! Walks the seed list through the gestures a user performs and checks the
//! list-wide invariants over arbitrary add/delete sequences.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use crate::{is_visible, render, Action, ItemId, NameCell, SeedConfig, ShoppingList, Store};

    fn seeded() -> ShoppingList {
        ShoppingList::from_seed(&SeedConfig::bundled())
    }

    fn id_of(list: &ShoppingList, name: &str) -> ItemId {
        list.store()
            .items()
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.id.clone())
            .expect("item should exist")
    }

    fn visible_names(list: &ShoppingList) -> Vec<String> {
        list.render()
            .rows
            .into_iter()
            .map(|row| match row.name {
                NameCell::Static(name) => name,
                NameCell::Editing { draft } => draft,
            })
            .collect()
    }

    #[test]
    fn test_hide_completed_scenario() {
        let mut list = seeded();
        list.dispatch(Action::ToggleHideCompleted).unwrap();
        assert_eq!(visible_names(&list), ["apples", "oranges", "bread"]);
    }

    #[test]
    fn test_search_scenario() {
        let mut list = seeded();
        list.dispatch(Action::SubmitSearch("a".into())).unwrap();
        assert_eq!(visible_names(&list), ["apples"]);
    }

    #[test]
    fn test_add_eggs_scenario() {
        let mut list = seeded();
        list.dispatch(Action::Add("eggs".into())).unwrap();
        let view = list.render();
        let last = view.rows.last().unwrap();
        assert_eq!(last.name, NameCell::Static("eggs".into()));
        assert!(!last.checked);
        assert_eq!(view.total, 5);
    }

    #[test]
    fn test_edit_scenario() {
        let mut list = seeded();
        let milk = id_of(&list, "milk");
        list.dispatch(Action::Edit(milk.clone())).unwrap();

        for row in list.render().rows {
            if row.id == milk {
                assert_eq!(row.name, NameCell::Editing { draft: "milk".into() });
                assert!(row.edit_disabled);
            } else {
                assert!(matches!(row.name, NameCell::Static(_)));
                assert!(!row.edit_disabled);
            }
        }
    }

    // Corrected behavior: confirming an edit persists the typed name.
    #[test]
    fn test_confirm_edit_persists_rename() {
        let mut list = seeded();
        let milk = id_of(&list, "milk");
        list.dispatch(Action::Edit(milk.clone())).unwrap();
        list.dispatch(Action::ConfirmEdit { id: milk.clone(), name: "oat milk".into() })
            .unwrap();

        assert_eq!(list.store().editing(), None);
        assert_eq!(list.store().get(&milk).unwrap().name, "oat milk");
        assert!(list.render().rows.iter().all(|row| !row.is_editing()));
    }

    // Corrected behavior: deleting the edited item leaves edit mode.
    #[test]
    fn test_delete_while_editing_scenario() {
        let mut list = seeded();
        let bread = id_of(&list, "bread");
        list.dispatch(Action::Edit(bread.clone())).unwrap();
        list.dispatch(Action::Delete(bread)).unwrap();
        assert_eq!(list.store().editing(), None);
        assert_eq!(visible_names(&list), ["apples", "oranges", "milk"]);
    }

    #[test]
    fn test_switching_edit_abandons_previous_draft() {
        let mut list = seeded();
        let apples = id_of(&list, "apples");
        let milk = id_of(&list, "milk");
        list.dispatch(Action::Edit(apples.clone())).unwrap();
        list.dispatch(Action::Edit(milk.clone())).unwrap();

        assert_eq!(list.store().editing(), Some(&milk));
        assert_eq!(list.store().get(&apples).unwrap().name, "apples");
        let editing: Vec<_> = list.render().rows.into_iter().filter(|r| r.is_editing()).collect();
        assert_eq!(editing.len(), 1);
        assert_eq!(editing[0].id, milk);
    }

    #[test]
    fn test_render_is_pure() {
        let mut list = seeded();
        let apples = id_of(&list, "apples");
        list.dispatch(Action::Edit(apples)).unwrap();
        list.dispatch(Action::SubmitSearch("a".into())).unwrap();

        let before = list.store().clone();
        let first = render(list.store(), "a");
        let second = render(list.store(), "a");
        assert_eq!(first, second);
        assert_eq!(list.store(), &before);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(String),
        Delete(usize),
        Toggle(usize),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            "[a-z]{1,8}".prop_map(Op::Add),
            any::<usize>().prop_map(Op::Delete),
            any::<usize>().prop_map(Op::Toggle),
        ]
    }

    proptest! {
        #[test]
        fn prop_ids_unique_and_stable(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let mut list = seeded();
            for op in ops {
                let ids: Vec<ItemId> = list.store().items().iter().map(|i| i.id.clone()).collect();
                match op {
                    Op::Add(name) => list.dispatch(Action::Add(name)).unwrap(),
                    Op::Delete(n) if !ids.is_empty() => {
                        list.dispatch(Action::Delete(ids[n % ids.len()].clone())).unwrap()
                    }
                    Op::Toggle(n) if !ids.is_empty() => {
                        list.dispatch(Action::Toggle(ids[n % ids.len()].clone())).unwrap()
                    }
                    _ => {}
                }

                let unique: HashSet<&ItemId> = list.store().items().iter().map(|i| &i.id).collect();
                prop_assert_eq!(unique.len(), list.store().len());

                let first: Vec<ItemId> = list.render().rows.into_iter().map(|r| r.id).collect();
                let second: Vec<ItemId> = list.render().rows.into_iter().map(|r| r.id).collect();
                prop_assert_eq!(first, second);
            }
        }

        #[test]
        fn prop_visibility_matches_filter_composition(
            items in prop::collection::vec(("[ab]{1,3}", any::<bool>()), 0..12),
            filtered in any::<bool>(),
            hide_completed in any::<bool>(),
            term in "[ab]{0,2}",
        ) {
            let seed = SeedConfig {
                items: items
                    .iter()
                    .map(|(name, checked)| crate::SeedItem { name: name.clone(), checked: *checked })
                    .collect(),
            };
            let mut store = Store::from_seed(&seed);
            store.set_filtered(filtered);
            store.set_hide_completed(hide_completed);

            let view = render(&store, &term);
            let rendered: Vec<&ItemId> = view.rows.iter().map(|r| &r.id).collect();
            let expected: Vec<&ItemId> = store
                .items()
                .iter()
                .filter(|item| {
                    (!filtered || item.name.starts_with(term.as_str()))
                        && (!hide_completed || !item.checked)
                })
                .map(|item| &item.id)
                .collect();
            prop_assert_eq!(&rendered, &expected);

            for item in store.items() {
                prop_assert_eq!(is_visible(item, &store, &term), expected.contains(&&item.id));
            }
        }
    }
}
