//! 物料需求彙總

use chrono::NaiveDate;
use prodlog_core::{BillOfMaterials, MaterialTotals, ProdError, ProductionLog, ProductionPlan};

/// 物料需求彙總計算器
///
/// 純函數：結果只取決於輸入的計劃/紀錄與物料清單
pub struct AggregationCalculator;

impl AggregationCalculator {
    /// 計算單一生產計劃所需的物料總量
    ///
    /// 數量為 0 的品項不查表，即使不在物料清單中也不報錯
    pub fn aggregate_plan(
        plan: &ProductionPlan,
        bom: &BillOfMaterials,
    ) -> prodlog_core::Result<MaterialTotals> {
        tracing::debug!("彙總生產計劃：品項 {} 個", plan.len());

        let mut totals = MaterialTotals::new();
        for (item, &quantity) in plan {
            Self::accumulate(&mut totals, item, quantity, bom)?;
        }
        Ok(totals)
    }

    /// 計算日期區間 `[start, end]` 內所有紀錄所需的物料總量
    ///
    /// 任一品項不在物料清單中即整體失敗，不回傳部分結果
    pub fn aggregate_log_range(
        log: &ProductionLog,
        start: NaiveDate,
        end: NaiveDate,
        bom: &BillOfMaterials,
    ) -> prodlog_core::Result<MaterialTotals> {
        let mut totals = MaterialTotals::new();
        let mut entry_count = 0usize;

        for entry in log.entries_in_range(start, end) {
            entry_count += 1;
            for line in &entry.items {
                Self::accumulate(&mut totals, &line.item_type, line.quantity, bom)?;
            }
        }

        tracing::debug!(
            "彙總區間 {} ~ {}：紀錄 {} 筆，物料 {} 種",
            start,
            end,
            entry_count,
            totals.len()
        );

        Ok(totals)
    }

    /// 將 `quantity` 個 `item` 的物料用量累加到 `totals`
    fn accumulate(
        totals: &mut MaterialTotals,
        item: &str,
        quantity: u64,
        bom: &BillOfMaterials,
    ) -> prodlog_core::Result<()> {
        if quantity == 0 {
            return Ok(());
        }

        for (material, &per_unit) in bom.requirements_for(item)? {
            let overflow = || ProdError::QuantityOverflow {
                material: material.clone(),
            };
            let required = per_unit.checked_mul(quantity).ok_or_else(overflow)?;
            let total = totals.entry(material.clone()).or_insert(0);
            *total = total.checked_add(required).ok_or_else(overflow)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prodlog_core::ProductionEntry;
    use proptest::prelude::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plan(items: &[(&str, u64)]) -> ProductionPlan {
        items.iter().map(|(i, q)| (i.to_string(), *q)).collect()
    }

    fn totals(items: &[(&str, u64)]) -> MaterialTotals {
        items.iter().map(|(m, q)| (m.to_string(), *q)).collect()
    }

    #[test]
    fn test_aggregate_plan_default_table() {
        let bom = BillOfMaterials::default_table();

        let result =
            AggregationCalculator::aggregate_plan(&plan(&[("A", 2), ("B", 1)]), &bom).unwrap();

        assert_eq!(result, totals(&[("X", 3), ("Y", 2), ("Z", 1)]));
    }

    #[test]
    fn test_aggregate_plan_zero_quantity_unknown_item() {
        let bom = BillOfMaterials::default_table();

        let result =
            AggregationCalculator::aggregate_plan(&plan(&[("A", 1), ("Q", 0)]), &bom).unwrap();
        assert_eq!(result, totals(&[("X", 1), ("Y", 1)]));

        let err = AggregationCalculator::aggregate_plan(&plan(&[("Q", 1)]), &bom).unwrap_err();
        assert!(matches!(err, ProdError::UnknownItem(ref item) if item == "Q"));
    }

    #[test]
    fn test_aggregate_plan_overflow() {
        let bom = BillOfMaterials::new().with_item("A", [("X", 2)]);

        let err =
            AggregationCalculator::aggregate_plan(&plan(&[("A", u64::MAX)]), &bom).unwrap_err();
        assert!(matches!(err, ProdError::QuantityOverflow { .. }));
    }

    #[test]
    fn test_aggregate_log_range_filters_dates() {
        let bom = BillOfMaterials::default_table();
        let log = ProductionLog::from_entries(vec![
            ProductionEntry::new(date(2024, 1, 1), vec![]).with_item("A", 1),
            ProductionEntry::new(date(2024, 1, 5), vec![]).with_item("B", 2),
        ]);

        let result = AggregationCalculator::aggregate_log_range(
            &log,
            date(2024, 1, 1),
            date(2024, 1, 3),
            &bom,
        )
        .unwrap();

        assert_eq!(result, totals(&[("X", 1), ("Y", 1)]));
    }

    #[test]
    fn test_aggregate_log_range_empty() {
        let bom = BillOfMaterials::default_table();

        let result = AggregationCalculator::aggregate_log_range(
            &ProductionLog::new(),
            date(2024, 1, 1),
            date(2024, 12, 31),
            &bom,
        )
        .unwrap();
        assert!(result.is_empty());

        // 起日晚於迄日
        let log = ProductionLog::from_entries(vec![
            ProductionEntry::new(date(2024, 1, 2), vec![]).with_item("A", 1),
        ]);
        let result =
            AggregationCalculator::aggregate_log_range(&log, date(2024, 1, 3), date(2024, 1, 1), &bom)
                .unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_aggregate_log_range_unknown_item_fails_whole_range() {
        let bom = BillOfMaterials::default_table();
        let log = ProductionLog::from_entries(vec![
            ProductionEntry::new(date(2024, 1, 1), vec![]).with_item("A", 1),
            ProductionEntry::new(date(2024, 1, 2), vec![]).with_item("Q", 1),
        ]);

        let err = AggregationCalculator::aggregate_log_range(
            &log,
            date(2024, 1, 1),
            date(2024, 1, 2),
            &bom,
        )
        .unwrap_err();
        assert!(matches!(err, ProdError::UnknownItem(_)));

        // 區間外的未知品項不影響結果
        let result = AggregationCalculator::aggregate_log_range(
            &log,
            date(2024, 1, 1),
            date(2024, 1, 1),
            &bom,
        )
        .unwrap();
        assert_eq!(result, totals(&[("X", 1), ("Y", 1)]));
    }

    fn arb_plan() -> impl Strategy<Value = ProductionPlan> {
        prop::collection::btree_map(
            prop_oneof![Just("A".to_string()), Just("B".to_string()), Just("C".to_string())],
            0u64..10_000,
            0..3,
        )
    }

    proptest! {
        #[test]
        fn prop_aggregate_plan_is_linear(plan in arb_plan()) {
            let bom = BillOfMaterials::default_table();
            let whole = AggregationCalculator::aggregate_plan(&plan, &bom).unwrap();

            let mut summed = MaterialTotals::new();
            for (item, qty) in &plan {
                let single: ProductionPlan = [(item.clone(), *qty)].into_iter().collect();
                for (material, q) in AggregationCalculator::aggregate_plan(&single, &bom).unwrap() {
                    *summed.entry(material).or_insert(0) += q;
                }
            }

            prop_assert_eq!(whole, summed);
        }
    }
}
