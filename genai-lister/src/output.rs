//! Rendering of the model listing.

use std::io::Write;

use genai_lister_types::models::ModelList;

use crate::error::Result;

/// 将模型列表按接收顺序写为 JSON 数组（不过滤、不排序）。
///
/// # Errors
/// 当序列化或写入失败时返回错误。
pub fn write_models<W: Write>(writer: &mut W, models: &ModelList) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, models)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
