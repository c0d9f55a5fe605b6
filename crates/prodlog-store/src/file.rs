//! JSON 檔案讀寫

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use prodlog_core::{ProdError, Result};

/// 檔案種類（決定格式錯誤的回報方式）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// 生產紀錄檔
    ProductionLog,
    /// 物料清單檔
    BillOfMaterials,
}

impl FileKind {
    fn malformed(self, path: &Path, reason: impl ToString) -> ProdError {
        let path = path.to_path_buf();
        let reason = reason.to_string();
        match self {
            FileKind::ProductionLog => ProdError::MalformedLogFile { path, reason },
            FileKind::BillOfMaterials => ProdError::MalformedBomFile { path, reason },
        }
    }
}

fn unavailable(path: &Path, source: io::Error) -> ProdError {
    ProdError::FileUnavailable {
        path: path.to_path_buf(),
        source,
    }
}

/// 讀取 JSON 檔
///
/// 檔案不存在時回傳 `None`，由呼叫端決定預設值
pub fn read_json<T: DeserializeOwned>(path: &Path, kind: FileKind) -> Result<Option<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("檔案不存在，視為空資料: {}", path.display());
            return Ok(None);
        }
        Err(e) if e.kind() == io::ErrorKind::InvalidData => {
            return Err(kind.malformed(path, e));
        }
        Err(e) => return Err(unavailable(path, e)),
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| kind.malformed(path, e))
}

/// 寫入 JSON 檔（整檔覆寫）
///
/// 先寫入同目錄的暫存檔再改名，中途失敗時舊檔保持完整
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| unavailable(dir, e))?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| unavailable(dir, e))?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer_pretty(&mut writer, value)
            .map_err(|e| unavailable(path, io::Error::new(io::ErrorKind::Other, e)))?;
        writer.write_all(b"\n").map_err(|e| unavailable(path, e))?;
        writer.flush().map_err(|e| unavailable(path, e))?;
    }
    tmp.as_file().sync_all().map_err(|e| unavailable(path, e))?;
    tmp.persist(path).map_err(|e| unavailable(path, e.error))?;

    Ok(())
}
