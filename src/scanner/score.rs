use std::borrow::Cow;
use std::path::Path;
use anyhow::{Context, Result};

use crate::config::ReadConfig;

/// 计算字符串中每个字符码点之和，包括空格、换行等控制字符
pub fn score(text: &str) -> u64 {
    text.chars().map(u64::from).sum()
}

/// 计算文件得分。
///
/// 文件按 UTF-8 文本读取；内容不是合法 UTF-8 时视为二进制文件，
/// 记录警告并返回 0。其他 I/O 错误返回给调用方处理。
pub fn score_file(path: &Path, config: &ReadConfig) -> Result<u64> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("无法读取文件 {}", path.display()))?;

    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(_) => {
            tracing::warn!("跳过二进制文件 {}", path.display());
            return Ok(0);
        }
    };

    if config.translate_newlines {
        Ok(score(&translate_newlines(&text)))
    } else {
        Ok(score(&text))
    }
}

/// 通用换行模式：`\r\n` 与单独的 `\r` 都视为 `\n`
fn translate_newlines(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
}
