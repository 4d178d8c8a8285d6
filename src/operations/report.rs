use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::AllUsersResult;
use crate::scanner::Scorer;

/// 统计目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// 单个项目目录
    Project(PathBuf),

    /// 单个用户目录
    User(PathBuf),

    /// 根目录下的全部用户
    All,
}

impl Target {
    /// 解析交互输入：含 `/` 视为用户路径，非空视为项目路径，空则统计全部
    pub fn from_prompt_input(input: &str) -> Self {
        let input = input.trim_end_matches(['\n', '\r']);
        if input.contains('/') {
            Target::User(PathBuf::from(input))
        } else if !input.is_empty() {
            Target::Project(PathBuf::from(input))
        } else {
            Target::All
        }
    }
}

/// 报告操作 - 执行统计并把结果写到输出流
pub struct ReportOperation {
    scorer: Scorer,

    /// `All` 模式下的用户根目录
    root: PathBuf,

    /// `All` 模式下 JSON 结果的保存路径
    json_path: PathBuf,
}

impl ReportOperation {
    pub fn new(scorer: Scorer, root: impl Into<PathBuf>, json_path: impl Into<PathBuf>) -> Self {
        Self {
            scorer,
            root: root.into(),
            json_path: json_path.into(),
        }
    }

    pub fn run<W: Write>(&self, target: &Target, out: &mut W) -> Result<()> {
        match target {
            Target::Project(path) => self.report_project(path, out),
            Target::User(path) => self.report_user(path, out),
            Target::All => self.report_all(out).map(|_| ()),
        }
    }

    /// 输出项目总分和每个文件的得分明细
    pub fn report_project<W: Write>(&self, path: &Path, out: &mut W) -> Result<()> {
        if !path.is_dir() {
            writeln!(out, "未找到项目 {}", path.display())?;
            return Ok(());
        }

        let result = self.scorer.score_project_dir(path);
        writeln!(out, "总分: {}", result.score)?;
        writeln!(out, "以下是得分明细：")?;
        for entry in &result.details {
            writeln!(out, "- {} {}", entry.path, entry.score)?;
        }
        Ok(())
    }

    /// 输出用户每个项目的总分以及最佳项目
    pub fn report_user<W: Write>(&self, path: &Path, out: &mut W) -> Result<()> {
        if !path.is_dir() {
            writeln!(out, "未找到用户 {}", path.display())?;
            return Ok(());
        }

        let result = self.scorer.score_user_dir(path)?;
        writeln!(out, "以下是得分明细：")?;
        for (project, detail) in &result.projects {
            writeln!(out, "- {} {}", project, detail.score)?;
        }
        match &result.best_program {
            Some(best) => writeln!(out, "最佳项目: {} ;得分： {}", best.name, best.score)?,
            None => writeln!(out, "用户 {} 下没有项目", path.display())?,
        }
        Ok(())
    }

    /// 输出按最佳得分排序的用户表，并把完整结果保存为 JSON
    pub fn report_all<W: Write>(&self, out: &mut W) -> Result<AllUsersResult> {
        let results = self.scorer.score_all_users(&self.root)?;

        writeln!(out, "以下是得分明细（按分数从低到高排序，分数越低越好）：")?;
        writeln!(out, "用户|最佳项目|得分")?;
        for row in results.ranking() {
            writeln!(out, "{}|{}|{}", row.user, row.best_project, row.best_score)?;
        }

        write_json(&results, &self.json_path)?;
        writeln!(out, "已将结果保存到 {}", self.json_path.display())?;

        Ok(results)
    }
}

/// 以 4 空格缩进写出 JSON
fn write_json(results: &AllUsersResult, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("无法创建结果文件 {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    results
        .serialize(&mut serializer)
        .with_context(|| format!("无法写入结果文件 {}", path.display()))?;

    writer.flush()?;
    Ok(())
}
