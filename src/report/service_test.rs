/// Tests for the report entry points
#[cfg(test)]
mod tests {
    use crate::locale::ResourceTable;
    use crate::report::service::*;
    use crate::report::types::RenderContext;
    use crate::store::{InventoryStore, StockStore};
    use crate::types::{Inventory, Mate, StockRecord, StockType};
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn record(owner: &str, kind: &str, amount: u64, age: Duration) -> StockRecord {
        StockRecord { owner: Mate::new(owner), stock_type: StockType::new(kind), amount, updated: now() - age }
    }

    fn store() -> InventoryStore {
        InventoryStore::new(Inventory {
            types: vec![StockType::new("ORE"), StockType::new("WOOD")],
            mates: vec![Mate::new("alice"), Mate::new("carol")],
            stocks: vec![
                record("alice", "ORE", 1500, Duration::milliseconds(90_000_000)),
                record("bob", "ORE", 20, Duration::minutes(3)),
                record("bob", "GOLD", 7, Duration::days(9)),
            ],
        })
    }

    #[test]
    fn test_by_type_without_groups_is_resource_unknown() {
        let resources = ResourceTable::builtin();
        let store = store();
        let service = ReportService::new(&store, RenderContext::new(&resources, "en", now()));

        let report = service.render_by_type(&[]);

        assert_eq!(report, resources.get_string(RESOURCE_UNKNOWN, "en"));
        assert!(!report.contains("```"));
    }

    #[test]
    fn test_by_owner_without_groups_is_user_unknown() {
        let resources = ResourceTable::builtin();
        let store = store();
        let service = ReportService::new(&store, RenderContext::new(&resources, "de", now()));
        assert_eq!(service.render_by_owner(&[]), "Diesen Benutzer kenne ich nicht.");
    }

    #[test]
    fn test_by_type_renders_rows_and_total() {
        let resources = ResourceTable::builtin();
        let store = store();
        let service = ReportService::new(&store, RenderContext::new(&resources, "en", now()));

        let report = service.render_by_type(&[StockType::new("ORE")]);

        assert!(report.starts_with("```dsconfig\n"));
        assert!(report.contains("│ alice │  1,500 │   1d 1h │"));
        assert!(report.contains("│ bob   │     20 │      3m │"));
        assert!(report.contains("│ Ore   │  1,520 │         │"));
        assert!(report.contains("│ User  │ Amount │ Updated │"));
    }

    #[test]
    fn test_declared_type_without_records_gets_sentinel_row() {
        let resources = ResourceTable::builtin();
        let store = store();
        let service = ReportService::new(&store, RenderContext::new(&resources, "en", now()));

        let report = service.render_by_type(&[StockType::new("WOOD")]);

        assert!(report.contains("│ Wood"));
        assert!(report.contains("│ -    │      - │       - │"));
    }

    #[test]
    fn test_by_owner_lists_types_without_total() {
        let resources = ResourceTable::builtin();
        let store = store();
        let service = ReportService::new(&store, RenderContext::new(&resources, "de", now()));

        let report = service.render_by_owner(&[Mate::new("bob")]);

        assert!(report.contains("│ bob "));
        assert!(report.contains("Rohstoff"));
        assert!(report.contains("│ Erz "));
        assert!(report.contains("│ Gold "));
        assert!(report.contains("1w 2d"));
        // only the rule below the header row; no footer
        assert_eq!(report.matches('┼').count(), 2);
    }

    #[test]
    fn test_type_index_lists_names() {
        let resources = ResourceTable::builtin();
        let store = store();
        let service = ReportService::new(&store, RenderContext::new(&resources, "de", now()));

        let index = service.render_type_index(&store.stock_types());

        assert_eq!(index, "```\nErz\nHolz\nGold\n\n```\n");
    }

    #[test]
    fn test_type_index_without_types_says_no_data() {
        let resources = ResourceTable::builtin();
        let store = store();
        let service = ReportService::new(&store, RenderContext::new(&resources, "en", now()));
        assert_eq!(service.render_type_index(&[]), "```\nNo data available.\n```\n");
    }

    #[test]
    fn test_type_index_respects_budget() {
        let resources = ResourceTable::builtin();
        let store = store();
        let service = ReportService::new(&store, RenderContext::new(&resources, "en", now())).with_max_len(60);
        let types: Vec<StockType> = (0..100).map(|i| StockType::new(format!("TYPE_{:03}", i))).collect();

        let index = service.render_type_index(&types);

        assert!(index.chars().count() <= 60);
        assert!(index.starts_with("```\nTYPE_000\n"));
        assert!(index.ends_with("\n```\n"));
    }

    #[test]
    fn test_many_groups_stay_within_budget() {
        let resources = ResourceTable::builtin();
        let mut stocks = Vec::new();
        for t in 0..40 {
            for m in 0..4 {
                stocks.push(record(&format!("mate{}", m), &format!("T{}", t), 100 * m, Duration::hours(t as i64)));
            }
        }
        let store = InventoryStore::new(Inventory { stocks, ..Default::default() });
        let service = ReportService::new(&store, RenderContext::new(&resources, "en", now()));

        let report = service.render_by_type(&store.stock_types());

        assert!(!report.is_empty());
        assert!(report.chars().count() <= 2000);
        assert!(report.contains("│ T0 "));
        assert!(!report.contains("│ T39 "));
    }

    #[test]
    fn test_select_groups_by_key_or_display_name() {
        let resources = ResourceTable::builtin();
        let store = store();
        let service = ReportService::new(&store, RenderContext::new(&resources, "de", now()));

        let selected = service.select_types(&["erz".to_string(), "gold".to_string(), "nothing".to_string()]);
        assert_eq!(selected, vec![StockType::new("ORE"), StockType::new("GOLD")]);
        assert_eq!(service.select_types(&[]).len(), 3);
        assert!(service.select_types(&["nothing".to_string()]).is_empty());

        assert_eq!(service.select_mates(&["BOB".to_string()]), vec![Mate::new("bob")]);
        assert_eq!(service.select_mates(&[]).len(), 3);
    }

    #[test]
    fn test_huge_amounts_render_exactly() {
        let resources = ResourceTable::builtin();
        let store = InventoryStore::new(Inventory {
            stocks: vec![
                record("a", "ORE", u64::MAX, Duration::hours(1)),
                record("b", "ORE", 5, Duration::hours(1)),
            ],
            ..Default::default()
        });
        let service = ReportService::new(&store, RenderContext::new(&resources, "en", now()));

        let report = service.render_by_type(&[StockType::new("ORE")]);

        assert!(report.contains("│ a    │ 18,446,744,073,709,551,615 │"));
        assert!(report.contains("│ Ore  │ 18,446,744,073,709,551,620 │"));
        assert!(!report.contains("..."));
    }

    #[test]
    fn test_budget_smaller_than_fences_renders_nothing() {
        let resources = ResourceTable::builtin();
        let store = store();
        let service = ReportService::new(&store, RenderContext::new(&resources, "en", now())).with_max_len(5);

        assert_eq!(service.render_type_index(&store.stock_types()), "");
        assert_eq!(service.render_type_index(&[]), "");
        assert_eq!(service.render_by_type(&[]), "");
        assert_eq!(service.render_by_type(&[StockType::new("ORE")]), "");
    }

    #[test]
    fn test_type_index_never_exceeds_any_budget() {
        let resources = ResourceTable::builtin();
        let store = store();
        for max_len in 0..40 {
            let service =
                ReportService::new(&store, RenderContext::new(&resources, "en", now())).with_max_len(max_len);
            let index = service.render_type_index(&store.stock_types());
            assert!(index.chars().count() <= max_len, "budget {}: {:?}", max_len, index);
            assert!(index.is_empty() || index.ends_with("\n```\n"));
        }
    }

    #[test]
    fn test_backtick_names_keep_fences_balanced() {
        let resources = ResourceTable::builtin();
        let store = InventoryStore::new(Inventory {
            stocks: vec![record("x```y", "A```B", 1, Duration::minutes(1))],
            ..Default::default()
        });
        let service = ReportService::new(&store, RenderContext::new(&resources, "en", now()));

        let by_owner = service.render_by_owner(&store.mates());
        assert_eq!(by_owner.matches("```").count(), 2);
        assert!(by_owner.contains("│ x'''y "));

        let by_type = service.render_by_type(&store.stock_types());
        assert_eq!(by_type.matches("```").count(), 2);

        assert_eq!(service.render_type_index(&store.stock_types()), "```\nA'''B\n\n```\n");
    }
}
