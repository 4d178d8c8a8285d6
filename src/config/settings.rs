use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};

use crate::config::defaults::DefaultConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 忽略配置
    pub ignore: IgnoreConfig,

    /// 文件读取配置
    pub read: ReadConfig,

    /// 输出配置
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IgnoreConfig {
    /// 忽略的目录名（遍历时整棵子树被剪掉）
    pub directories: HashSet<String>,

    /// 忽略的文件名后缀
    pub suffixes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadConfig {
    /// 是否将 `\r\n` 和单独的 `\r` 转换为 `\n` 后再计分
    pub translate_newlines: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// `--all` 模式下 JSON 结果的保存路径
    pub json_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore: IgnoreConfig::default(),
            read: ReadConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for IgnoreConfig {
    fn default() -> Self {
        Self {
            directories: DefaultConfig::default_ignore_dirs(),
            suffixes: DefaultConfig::default_ignore_suffixes(),
        }
    }
}

impl Default for ReadConfig {
    fn default() -> Self {
        Self {
            translate_newlines: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json_path: DefaultConfig::default_json_path(),
        }
    }
}

impl IgnoreConfig {
    /// 目录名是否在忽略列表中
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.directories.contains(name)
    }

    /// 文件名是否以任一忽略后缀结尾
    pub fn is_ignored_file(&self, name: &str) -> bool {
        self.suffixes.iter().any(|suffix| name.ends_with(suffix.as_str()))
    }
}

impl Config {
    /// 从文件加载配置
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("无法读取配置文件 {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("配置文件格式错误 {}", path.display()))?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;

        // 确保目录存在
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// 获取默认配置文件路径
    pub fn default_config_path() -> Result<PathBuf> {
        let mut path = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("无法找到配置目录"))?;
        path.push("submission-scorer");
        path.push("config.toml");
        Ok(path)
    }

    /// 加载默认位置的配置，文件不存在时使用内置默认值
    pub fn load_or_default() -> Result<Self> {
        let config_path = match Self::default_config_path() {
            Ok(path) => path,
            Err(err) => {
                tracing::debug!("{}，使用默认配置", err);
                return Ok(Self::default());
            }
        };

        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}
