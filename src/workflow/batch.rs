//! 批量提交获取 - 流程层
//!
//! 每个课程分组只发一次提交查询：
//! 请求数等于含有效作业的课程数，与作业数无关

use std::collections::HashMap;

use anyhow::{Context, Result};
use futures::future::join_all;
use tracing::debug;

use crate::models::StudentSubmission;
use crate::services::sources::SubmissionSource;
use crate::workflow::work_item::CourseGroups;

/// 提交索引：课程ID → (作业ID → 提交列表)
///
/// 每门课程独占一个槽位，并发合并时不会互相覆盖
pub type SubmissionIndex = HashMap<String, HashMap<String, Vec<StudentSubmission>>>;

/// 对每个课程分组并发发起一次批量查询，并把结果合并进提交索引
///
/// 各分组相互独立，所有请求都会跑完（不因一组失败而取消其余）；
/// 任何一组失败时，本次运行最终以该组的错误结束。
/// 响应中缺失某个作业ID不是错误，下游按零提交处理
pub async fn fetch_submissions(
    source: &dyn SubmissionSource,
    groups: &CourseGroups,
) -> Result<SubmissionIndex> {
    let fetches = groups.iter().map(|(course_id, items)| {
        let course_work_ids: Vec<String> =
            items.iter().map(|item| item.work.id.clone()).collect();
        async move {
            let result = source
                .fetch_batch(course_id, &course_work_ids)
                .await
                .with_context(|| format!("批量获取提交失败 (课程: {})", course_id));
            (course_id.to_string(), result)
        }
    });

    let mut index = SubmissionIndex::new();
    for (course_id, result) in join_all(fetches).await {
        let by_work_id = result?;
        debug!("课程 {} 合并 {} 个作业的提交", course_id, by_work_id.len());
        index.insert(course_id, by_work_id);
    }

    Ok(index)
}
