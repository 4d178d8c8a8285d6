use std::collections::HashSet;
use std::path::PathBuf;

pub struct DefaultConfig;

impl DefaultConfig {
    /// 默认忽略的目录名
    pub fn default_ignore_dirs() -> HashSet<String> {
        let mut dirs = HashSet::new();

        // 版本控制
        dirs.insert(".git".to_string());

        // Python 缓存
        dirs.insert("__pycache__".to_string());

        // IDE 和工具目录
        dirs.insert(".idea".to_string());
        dirs.insert(".vscode".to_string());

        dirs
    }

    /// 默认忽略的文件名后缀（按文件名结尾匹配，而不是按扩展名）
    pub fn default_ignore_suffixes() -> Vec<String> {
        [
            // 仓库元数据
            ".gitignore",
            ".DS_Store",
            // 文档
            ".md",
            // 图片
            ".jpg",
            ".png",
            ".gif",
            ".bmp",
            ".tiff",
            ".ico",
            // Git 对象包
            ".pack",
            ".idx",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect()
    }

    /// 默认的 JSON 输出文件
    pub fn default_json_path() -> PathBuf {
        PathBuf::from("score.json")
    }
}
