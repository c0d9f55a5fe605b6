//! 物料清單（BOM）模型

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::{ProdError, Result};

/// 物料需求合計（物料ID → 數量），僅為計算結果，不落地
pub type MaterialTotals = BTreeMap<String, u64>;

/// 生產計劃（品項 → 數量）
pub type ProductionPlan = BTreeMap<String, u64>;

/// 由 `(品項, 數量)` 建立生產計劃，同品項數量相加
pub fn build_plan<I, S>(pairs: I) -> Result<ProductionPlan>
where
    I: IntoIterator<Item = (S, u64)>,
    S: Into<String>,
{
    let mut plan = ProductionPlan::new();
    for (item, qty) in pairs {
        let item = item.into();
        let total = plan.entry(item.clone()).or_insert(0);
        *total = total
            .checked_add(qty)
            .ok_or(ProdError::QuantityOverflow { material: item })?;
    }
    Ok(plan)
}

/// 物料清單：品項 → (物料 → 單位用量)
///
/// 檔案格式即為此映射本身：`{"A": {"X": 1, "Y": 1}, ...}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillOfMaterials {
    items: BTreeMap<String, BTreeMap<String, u64>>,
}

impl BillOfMaterials {
    /// 創建空的物料清單
    pub fn new() -> Self {
        Self::default()
    }

    /// 預設物料清單（A、B、C 三個品項）
    pub fn default_table() -> Self {
        Self::new()
            .with_item("A", [("X", 1), ("Y", 1)])
            .with_item("B", [("X", 1), ("Z", 1)])
            .with_item("C", [("X", 1), ("Z", 2)])
    }

    /// 建構器模式：設置品項的完整用量表
    pub fn with_item<I, S>(mut self, item: &str, requirements: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let requirements = requirements
            .into_iter()
            .filter(|(_, qty)| *qty > 0)
            .map(|(material, qty)| (material.into(), qty))
            .collect();
        self.items.insert(item.to_string(), requirements);
        self
    }

    /// 查詢品項的單位物料用量
    pub fn requirements_for(&self, item: &str) -> Result<&BTreeMap<String, u64>> {
        self.items
            .get(item)
            .ok_or_else(|| ProdError::UnknownItem(item.to_string()))
    }

    /// 新增品項（空用量表）
    ///
    /// 品項已存在時不做任何變更，回傳 `false`
    pub fn add_item(&mut self, name: &str) -> bool {
        if self.items.contains_key(name) {
            return false;
        }
        self.items.insert(name.to_string(), BTreeMap::new());
        true
    }

    /// 設置單一物料用量
    ///
    /// 用量為 0 時移除該物料，與重新載入後的狀態一致
    pub fn set_requirement(&mut self, item: &str, material: &str, qty: u64) -> Result<()> {
        let requirements = self
            .items
            .get_mut(item)
            .ok_or_else(|| ProdError::UnknownItem(item.to_string()))?;

        if qty == 0 {
            requirements.remove(material);
        } else {
            requirements.insert(material.to_string(), qty);
        }
        Ok(())
    }

    /// 刪除品項
    pub fn delete_item(&mut self, item: &str) -> Result<()> {
        self.items
            .remove(item)
            .map(|_| ())
            .ok_or_else(|| ProdError::UnknownItem(item.to_string()))
    }

    /// 檢查品項是否存在
    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    /// 所有品項名稱（依名稱排序）
    pub fn items(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(String::as_str)
    }

    /// 所有品項及其用量表
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, u64>)> {
        self.items.iter().map(|(item, reqs)| (item.as_str(), reqs))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 載入後正規化：移除用量為 0 的物料
    pub fn normalize(&mut self) {
        for requirements in self.items.values_mut() {
            requirements.retain(|_, qty| *qty > 0);
        }
    }
}
