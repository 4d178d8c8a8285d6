use std::cell::Cell;
use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::models::{ProjectResult, ScoreEntry};
use crate::scanner::score::score_file;

/// 文件遍历器 - 负责遍历项目目录并为每个文件计分
#[derive(Debug, Clone)]
pub struct FileWalker {
    config: Config,
}

/// 单个项目的遍历统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// 计分的文件数量
    pub scored_files: usize,

    /// 因后缀被忽略的文件数量
    pub ignored_files: usize,

    /// 被剪掉的目录数量
    pub ignored_dirs: usize,

    /// 读取失败被跳过的文件数量
    pub failed_files: usize,
}

impl FileWalker {
    /// 创建新的文件遍历器
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// 获取遍历配置
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// 递归遍历项目目录，返回总分和按遍历顺序排列的文件明细。
    ///
    /// 忽略目录整棵跳过，忽略后缀的文件不计分；单个文件读取失败只记录
    /// 警告，不影响其余文件。
    pub fn score_project_dir(&self, project_path: &Path) -> ProjectResult {
        let (result, stats) = self.score_project_dir_with_stats(project_path);
        tracing::debug!(
            "项目 {} 得分 {}：计分 {} 个文件，忽略 {} 个文件、{} 个目录，失败 {} 个",
            project_path.display(),
            result.score,
            stats.scored_files,
            stats.ignored_files,
            stats.ignored_dirs,
            stats.failed_files
        );
        result
    }

    /// 同 [`score_project_dir`](Self::score_project_dir)，额外返回遍历统计
    pub fn score_project_dir_with_stats(&self, project_path: &Path) -> (ProjectResult, WalkStats) {
        let mut result = ProjectResult::default();
        let mut stats = WalkStats::default();
        let ignored_dirs = Cell::new(0usize);

        // 同级条目按名称排序，保证明细顺序可复现
        let walker = WalkDir::new(project_path)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                if self.should_ignore_directory(entry) {
                    ignored_dirs.set(ignored_dirs.get() + 1);
                    false
                } else {
                    true
                }
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("遍历目录时出错: {}", err);
                    continue;
                }
            };

            if !Self::is_file_like(&entry) {
                continue;
            }

            if self.should_ignore_file(&entry) {
                stats.ignored_files += 1;
                continue;
            }

            let path = entry.path();
            match score_file(path, &self.config.read) {
                Ok(score) => {
                    stats.scored_files += 1;
                    result.push(ScoreEntry::new(path.display().to_string(), score));
                }
                Err(err) => {
                    stats.failed_files += 1;
                    tracing::warn!("无法读取文件 {}: {:#}", path.display(), err);
                }
            }
        }

        stats.ignored_dirs = ignored_dirs.get();
        (result, stats)
    }

    /// 检查是否应该剪掉指定目录；遍历的根目录本身从不剪掉
    fn should_ignore_directory(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        let dir_name = entry.file_name().to_string_lossy();
        self.config.ignore.is_ignored_dir(&dir_name)
    }

    /// 检查文件名是否以忽略后缀结尾
    fn should_ignore_file(&self, entry: &DirEntry) -> bool {
        let file_name = entry.file_name().to_string_lossy();
        self.config.ignore.is_ignored_file(&file_name)
    }

    /// 普通文件，或者不指向目录的符号链接（失效链接在读取时报错跳过）
    fn is_file_like(entry: &DirEntry) -> bool {
        let file_type = entry.file_type();
        if file_type.is_file() {
            return true;
        }
        file_type.is_symlink() && !entry.path().is_dir()
    }
}
