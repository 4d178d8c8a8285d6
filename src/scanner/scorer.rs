use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::models::{AllUsersResult, ProjectResult, UserResult};
use crate::scanner::file_walker::FileWalker;
use crate::scanner::score::score_file;

/// 计分器 - 按项目、用户、全部用户三个粒度汇总得分
#[derive(Debug, Clone)]
pub struct Scorer {
    walker: FileWalker,
    show_progress: bool,
}

impl Scorer {
    pub fn new(config: Config) -> Self {
        Self {
            walker: FileWalker::new(config),
            show_progress: false,
        }
    }

    /// 统计全部用户时是否显示进度条
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn config(&self) -> &Config {
        self.walker.config()
    }

    /// 计算单个文件的得分
    pub fn score_file(&self, path: &Path) -> Result<u64> {
        score_file(path, &self.config().read)
    }

    /// 计算单个项目目录的得分
    pub fn score_project_dir(&self, project_path: &Path) -> ProjectResult {
        self.walker.score_project_dir(project_path)
    }

    /// 遍历用户目录下的所有项目目录（非目录条目被忽略），记录每个项目的
    /// 得分并找出得分最低的项目
    pub fn score_user_dir(&self, user_path: &Path) -> Result<UserResult> {
        let mut user_result = UserResult::default();

        for (project_name, project_path) in list_subdirectories(user_path)? {
            let project_result = self.walker.score_project_dir(&project_path);
            user_result.record(project_name, project_result);
        }

        Ok(user_result)
    }

    /// 遍历根目录下所有用户目录（跳过忽略目录），汇总每个用户的得分
    pub fn score_all_users(&self, root: &Path) -> Result<AllUsersResult> {
        let users: Vec<(String, PathBuf)> = list_subdirectories(root)?
            .into_iter()
            .filter(|(name, _)| !self.config().ignore.is_ignored_dir(name))
            .collect();

        let progress = if self.show_progress {
            create_progress_bar(users.len() as u64)
        } else {
            ProgressBar::hidden()
        };

        let mut all_results = AllUsersResult::default();
        for (user_name, user_path) in users {
            progress.set_message(user_name.clone());

            let user_result = match self.score_user_dir(&user_path) {
                Ok(result) => result,
                Err(err) => {
                    tracing::warn!("无法统计用户 {}: {:#}", user_name, err);
                    UserResult::default()
                }
            };
            all_results.insert(user_name, user_result);
            progress.inc(1);
        }

        progress.finish_and_clear();
        tracing::info!("统计完成，共 {} 个用户", all_results.users.len());

        Ok(all_results)
    }
}

/// 列出目录下的直接子目录（跟随符号链接判断），按名称排序
fn list_subdirectories(path: &Path) -> Result<Vec<(String, PathBuf)>> {
    let entries = std::fs::read_dir(path)
        .with_context(|| format!("无法读取目录 {}", path.display()))?;

    let mut dirs = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!("读取目录 {} 时出错: {}", path.display(), err);
                continue;
            }
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        // 当前目录下的条目不带 `./` 前缀，明细路径与用户输入的相对路径一致
        let entry_path = if path == Path::new(".") {
            PathBuf::from(entry.file_name())
        } else {
            entry.path()
        };
        if entry_path.is_dir() {
            dirs.push((name, entry_path));
        }
    }

    dirs.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(dirs)
}

/// 创建进度条
fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]);
    pb.set_style(style);
    pb
}
