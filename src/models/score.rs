use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// 单个文件的得分，序列化为 `[path, score]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(String, u64)", from = "(String, u64)")]
pub struct ScoreEntry {
    /// 遍历时得到的文件路径（项目路径 + 相对路径）
    pub path: String,

    /// 文件得分
    pub score: u64,
}

impl ScoreEntry {
    pub fn new(path: impl Into<String>, score: u64) -> Self {
        Self {
            path: path.into(),
            score,
        }
    }
}

impl From<ScoreEntry> for (String, u64) {
    fn from(entry: ScoreEntry) -> Self {
        (entry.path, entry.score)
    }
}

impl From<(String, u64)> for ScoreEntry {
    fn from((path, score): (String, u64)) -> Self {
        Self { path, score }
    }
}

/// 单个项目目录的得分
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectResult {
    /// 项目总分
    pub score: u64,

    /// 按遍历顺序排列的文件得分明细
    pub details: Vec<ScoreEntry>,
}

impl ProjectResult {
    /// 添加一个文件得分并累加总分
    pub fn push(&mut self, entry: ScoreEntry) {
        self.score += entry.score;
        self.details.push(entry);
    }

    pub fn file_count(&self) -> usize {
        self.details.len()
    }
}

/// 得分最低的项目，序列化为 `[name, score]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(String, u64)", from = "(String, u64)")]
pub struct BestProject {
    pub name: String,
    pub score: u64,
}

impl From<BestProject> for (String, u64) {
    fn from(best: BestProject) -> Self {
        (best.name, best.score)
    }
}

impl From<(String, u64)> for BestProject {
    fn from((name, score): (String, u64)) -> Self {
        Self { name, score }
    }
}

/// 单个用户目录的得分
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResult {
    /// 项目名 -> 项目得分，保持遍历顺序
    pub projects: IndexMap<String, ProjectResult>,

    /// 得分最低的项目；用户没有任何项目时为空，序列化为 `[]`
    #[serde(with = "best_program_serde")]
    pub best_program: Option<BestProject>,
}

impl UserResult {
    /// 记录一个项目的得分，同时更新最低分项目。
    ///
    /// 第一个项目总是成为初始最低分；之后只有严格更低的分数才会替换，
    /// 因此并列时保留先遇到的项目。
    pub fn record(&mut self, name: impl Into<String>, result: ProjectResult) {
        let name = name.into();
        let replace = match &self.best_program {
            None => true,
            Some(best) => result.score < best.score,
        };
        if replace {
            self.best_program = Some(BestProject {
                name: name.clone(),
                score: result.score,
            });
        }
        self.projects.insert(name, result);
    }
}

/// 所有用户的得分，序列化为 `{user: UserResult}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllUsersResult {
    pub users: IndexMap<String, UserResult>,
}

/// 排行表中的一行
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedUser {
    pub user: String,
    pub best_project: String,
    pub best_score: u64,
}

impl AllUsersResult {
    pub fn insert(&mut self, user: impl Into<String>, result: UserResult) {
        self.users.insert(user.into(), result);
    }

    /// 按最佳得分从低到高排序的排行表；没有项目的用户不参与排名。
    /// 排序是稳定的，同分用户保持遍历顺序。
    pub fn ranking(&self) -> Vec<RankedUser> {
        let mut ranked: Vec<RankedUser> = self
            .users
            .iter()
            .filter_map(|(user, result)| {
                result.best_program.as_ref().map(|best| RankedUser {
                    user: user.clone(),
                    best_project: best.name.clone(),
                    best_score: best.score,
                })
            })
            .collect();
        ranked.sort_by_key(|row| row.best_score);
        ranked
    }
}

/// `Option<BestProject>` 序列化模块：`None` 写作空数组
mod best_program_serde {
    use super::*;
    use serde::de::IgnoredAny;
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(best: &Option<BestProject>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match best {
            Some(best) => best.serialize(serializer),
            None => Vec::<()>::new().serialize(serializer),
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Pair(String, u64),
        Empty(Vec<IgnoredAny>),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BestProject>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Repr::deserialize(deserializer)? {
            Repr::Pair(name, score) => Some(BestProject { name, score }),
            Repr::Empty(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(score: u64) -> ProjectResult {
        ProjectResult {
            score,
            details: Vec::new(),
        }
    }

    #[test]
    fn test_record_tracks_minimum() {
        let mut user = UserResult::default();
        user.record("a", project(50));
        user.record("b", project(10));
        user.record("c", project(30));

        assert_eq!(
            user.best_program,
            Some(BestProject {
                name: "b".to_string(),
                score: 10
            })
        );
        assert_eq!(user.projects.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_record_tie_keeps_first() {
        let mut user = UserResult::default();
        user.record("first", project(7));
        user.record("second", project(7));

        assert_eq!(user.best_program.unwrap().name, "first");
    }

    #[test]
    fn test_empty_project_still_competes() {
        let mut user = UserResult::default();
        user.record("full", project(120));
        user.record("empty", ProjectResult::default());

        assert_eq!(user.best_program.unwrap().score, 0);
    }

    #[test]
    fn test_json_shape() {
        let mut details = ProjectResult::default();
        details.push(ScoreEntry::new("u/p/main.py", 120));
        details.push(ScoreEntry::new("u/p/utils/string.py", 70));
        assert_eq!(details.score, 190);

        let mut user = UserResult::default();
        user.record("p", details);

        let mut all = AllUsersResult::default();
        all.insert("u", user);
        all.insert("nobody", UserResult::default());

        let value = serde_json::to_value(&all).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "u": {
                    "projects": {
                        "p": {
                            "score": 190,
                            "details": [["u/p/main.py", 120], ["u/p/utils/string.py", 70]]
                        }
                    },
                    "best_program": ["p", 190]
                },
                "nobody": {
                    "projects": {},
                    "best_program": []
                }
            })
        );

        let back: AllUsersResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, all);
    }

    #[test]
    fn test_ranking_sorted_and_stable() {
        let mut all = AllUsersResult::default();
        for (user, score) in [("carol", 30), ("alice", 10), ("bob", 30), ("dave", 5)] {
            let mut result = UserResult::default();
            result.record(format!("{}-proj", user), project(score));
            all.insert(user, result);
        }
        all.insert("empty", UserResult::default());

        let users: Vec<_> = all.ranking().into_iter().map(|row| row.user).collect();
        assert_eq!(users, vec!["dave", "alice", "carol", "bob"]);
    }
}
