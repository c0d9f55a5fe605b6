//! 物料清單檔儲存

use std::path::{Path, PathBuf};

use prodlog_core::{BillOfMaterials, Result};

use crate::file::{read_json, write_json, FileKind};

/// 可編輯的物料清單，每次變更立即整檔寫回
pub struct BomStore {
    path: PathBuf,
    table: BillOfMaterials,
}

impl BomStore {
    /// 開啟物料清單檔，檔案不存在時為空表
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open_or_seed(path, BillOfMaterials::new())
    }

    /// 開啟物料清單檔，檔案不存在時使用 `seed`
    ///
    /// `seed` 在第一次變更前不會寫入檔案
    pub fn open_or_seed(path: impl Into<PathBuf>, seed: BillOfMaterials) -> Result<Self> {
        let path = path.into();
        let table = match read_json::<BillOfMaterials>(&path, FileKind::BillOfMaterials)? {
            Some(mut table) => {
                table.normalize();
                table
            }
            None => seed,
        };

        tracing::debug!("載入物料清單 {}：品項 {} 個", path.display(), table.len());

        Ok(Self { path, table })
    }

    pub fn table(&self) -> &BillOfMaterials {
        &self.table
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 新增品項，已存在時不變更也不寫檔
    pub fn add_item(&mut self, name: &str) -> Result<bool> {
        let added = self.table.add_item(name);
        if added {
            self.save()?;
        }
        Ok(added)
    }

    /// 設置物料用量（0 表示移除）
    pub fn set_requirement(&mut self, item: &str, material: &str, qty: u64) -> Result<()> {
        self.table.set_requirement(item, material, qty)?;
        self.save()
    }

    /// 刪除品項
    pub fn delete_item(&mut self, item: &str) -> Result<()> {
        self.table.delete_item(item)?;
        self.save()
    }

    /// 將整份物料清單寫回檔案
    pub fn save(&self) -> Result<()> {
        write_json(&self.path, &self.table)?;
        tracing::info!("已儲存物料清單 {}：品項 {} 個", self.path.display(), self.table.len());
        Ok(())
    }
}
