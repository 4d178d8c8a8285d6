use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use anyhow::Result;

use submission_scorer::operations::Target;

#[derive(Parser)]
#[command(name = "submission-scorer")]
#[command(about = "项目计分工具：按文件字符码点之和为用户提交的项目计分，分数越低越好")]
#[command(version)]
pub struct Cli {
    /// 计算某个项目的得分
    #[arg(long, value_name = "PATH")]
    pub project: Option<PathBuf>,

    /// 计算某个用户的得分明细
    #[arg(long, value_name = "PATH")]
    pub user: Option<PathBuf>,

    /// 计算所有用户的得分
    #[arg(long)]
    pub all: bool,

    /// `--all` 模式下的用户根目录
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// `--all` 模式下 JSON 结果的保存路径（默认 score.json）
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// 按 project > user > all 的优先级确定统计目标；都未指定时返回 `None`
    pub fn target(&self) -> Option<Target> {
        let non_empty = |path: &Option<PathBuf>| {
            path.as_ref()
                .filter(|p| !p.as_os_str().is_empty())
                .cloned()
        };

        if let Some(project) = non_empty(&self.project) {
            Some(Target::Project(project))
        } else if let Some(user) = non_empty(&self.user) {
            Some(Target::User(user))
        } else if self.all {
            Some(Target::All)
        } else {
            None
        }
    }
}

/// 交互式询问统计目标
pub fn prompt_target<R: BufRead, W: Write>(mut input: R, mut out: W) -> Result<Target> {
    write!(out, "请输入要统计的用户/项目，留空则统计所有：")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        anyhow::bail!("未读取到输入");
    }
    Ok(Target::from_prompt_input(&line))
}
