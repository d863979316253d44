use std::collections::BTreeSet;

use contracts::domain::a003_cost_center::{CostCenter, CostCenterKind, CostCenterStatus};
use contracts::shared::record_list::{
    ExpansionState, FilterCategory, FilterState, ListRecord, RecordList,
};
use proptest::prelude::*;

const CODES: &[&str] = &["cost", "profit", "investment", "unknown"];

fn arb_kind() -> impl Strategy<Value = CostCenterKind> {
    prop::sample::select(CostCenterKind::ALL.to_vec())
}

fn arb_records() -> impl Strategy<Value = Vec<CostCenter>> {
    prop::collection::vec(("[a-zA-Z ]{0,10}", "[A-Z]{2}-[0-9]{3}", arb_kind()), 0..12).prop_map(
        |rows| {
            rows.into_iter()
                .enumerate()
                .map(|(index, (name, code, kind))| CostCenter {
                    id: format!("cc-{index}"),
                    code,
                    name,
                    manager: "Anne Leroy".to_string(),
                    kind,
                    status: CostCenterStatus::Active,
                    budget: 1000.0,
                    spent: 0.0,
                })
                .collect()
        },
    )
}

fn arb_query() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z -]{0,4}",
        Just(" ".to_string()),
        Just("e ".to_string()),
        Just(" L".to_string()),
    ]
}

fn arb_codes() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(CODES.to_vec()), 0..4)
}

fn visible_ids(list: &RecordList<CostCenter>) -> Vec<String> {
    list.visible_records()
        .iter()
        .map(|r| r.id().to_string())
        .collect()
}

/// Ожидаемый результат поиска, посчитанный напрямую по полям записи.
fn ids_matching_search(records: &[CostCenter], query: &str) -> Vec<String> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| {
            query.is_empty()
                || [&r.code, &r.name, &r.manager]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
        })
        .map(|r| r.id.clone())
        .collect()
}

/// Ожидаемый результат фильтра категорий: симметричная разность кодов.
fn ids_in_categories(records: &[CostCenter], codes: &[&str]) -> Vec<String> {
    let mut selected: BTreeSet<&str> = BTreeSet::new();
    for &code in codes {
        if !selected.remove(code) {
            selected.insert(code);
        }
    }
    records
        .iter()
        .filter(|r| selected.is_empty() || selected.contains(r.kind.code()))
        .map(|r| r.id.clone())
        .collect()
}

proptest! {
    #[test]
    fn search_returns_exactly_matching_records(records in arb_records(), query in arb_query()) {
        let expected = ids_matching_search(&records, &query);
        let mut list = RecordList::try_new(records).unwrap();
        list.set_search_query(query);
        prop_assert_eq!(visible_ids(&list), expected);
    }

    #[test]
    fn category_filter_returns_exactly_selected(records in arb_records(), codes in arb_codes()) {
        let expected = ids_in_categories(&records, &codes);
        let mut list = RecordList::try_new(records).unwrap();
        for code in &codes {
            list.toggle_category(code);
        }
        prop_assert_eq!(visible_ids(&list), expected);
    }

    #[test]
    fn combined_filter_is_intersection(
        records in arb_records(),
        query in arb_query(),
        codes in arb_codes(),
    ) {
        let by_search = ids_matching_search(&records, &query);
        let expected: Vec<String> = ids_in_categories(&records, &codes)
            .into_iter()
            .filter(|id| by_search.contains(id))
            .collect();

        let mut list = RecordList::try_new(records).unwrap();
        list.set_search_query(query);
        for code in &codes {
            list.toggle_category(code);
        }
        prop_assert_eq!(visible_ids(&list), expected);
    }

    #[test]
    fn filtering_is_idempotent(records in arb_records(), query in arb_query()) {
        let mut list = RecordList::try_new(records).unwrap();
        list.set_search_query(query.clone());
        let first = visible_ids(&list);
        list.set_search_query(query);
        prop_assert_eq!(visible_ids(&list), first);
    }

    #[test]
    fn double_toggle_restores_filter(code in prop::sample::select(CODES.to_vec())) {
        let mut state = FilterState::default();
        state.toggle_category(code);
        state.toggle_category(code);
        prop_assert_eq!(state, FilterState::default());
    }

    #[test]
    fn expand_toggle_is_an_involution(id in "[a-z0-9]{1,6}") {
        let mut state = ExpansionState::Collapsed;
        state.toggle(&id);
        state.toggle(&id);
        prop_assert_eq!(state, ExpansionState::Collapsed);
    }

    #[test]
    fn at_most_one_row_expanded(ids in prop::collection::vec("[a-c]", 1..10)) {
        let mut state = ExpansionState::Collapsed;
        for id in &ids {
            state.toggle(id);
            let expanded = ["a", "b", "c"].iter().filter(|c| state.is_expanded(c)).count();
            prop_assert!(expanded <= 1);
        }
    }

    #[test]
    fn category_counts_sum_to_collection_size(records in arb_records(), query in arb_query()) {
        let mut list = RecordList::try_new(records).unwrap();
        list.set_search_query(query);
        let total: usize = list.category_counts().iter().map(|(_, n)| n).sum();
        prop_assert_eq!(total, list.len());
    }
}
