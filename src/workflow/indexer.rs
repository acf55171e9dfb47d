//! 选择索引 - 流程层
//!
//! 把分组后的工作项序列编成给用户看的编号列表，
//! 并记录编号到工作项的反向映射

use crate::models::CourseWork;
use crate::workflow::batch::SubmissionIndex;
use crate::workflow::classifier;
use crate::workflow::work_item::WorkItem;

/// 列表条目：一个被编号的工作项及其可展示提交的状态
#[derive(Debug, Clone)]
pub struct ListingEntry {
    /// 显示编号（从 1 开始，连续无空洞）
    pub display_number: usize,
    /// 指向展平工作项序列的索引
    pub work_item_index: usize,
    pub course_name: String,
    pub title: String,
    /// 截止时间标签（字段不完整时为回退文案）
    pub due_label: String,
    /// 该工作项下所有可展示提交的状态
    pub submission_states: Vec<String>,
}

/// 编号列表
///
/// 条目按编号顺序存放，`entries[n-1]` 即编号 n 的条目（arena+索引）
#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<ListingEntry>,
}

impl Listing {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 最大显示编号
    pub fn last_display_number(&self) -> usize {
        self.entries.len()
    }

    /// 把显示编号解析回工作项索引
    pub fn resolve(&self, display_number: usize) -> Option<usize> {
        if display_number == 0 {
            return None;
        }
        self.entries
            .get(display_number - 1)
            .map(|entry| entry.work_item_index)
    }
}

/// 渲染截止时间标签
///
/// 五个字段全部存在才渲染具体时间，否则使用回退文案
pub fn due_label(work: &CourseWork) -> String {
    if let (Some(due_date), Some(due_time)) = (&work.due_date, &work.due_time) {
        if let (Some(year), Some(month), Some(day), Some(hours), Some(minutes)) = (
            due_date.year,
            due_date.month,
            due_date.day,
            due_time.hours,
            due_time.minutes,
        ) {
            return format!("截止: {}-{}-{} {}:{:02}", month, day, year, hours, minutes);
        }
    }
    "截止时间未完全指定".to_string()
}

/// 构建编号列表
///
/// 按展平顺序扫描工作项：出现第一个可展示提交时分配下一个编号，
/// 随后列出该工作项下所有可展示提交的状态；
/// 没有可展示提交的工作项不占编号，编号因此连续无空洞
pub fn build_listing(work_items: &[WorkItem], index: &SubmissionIndex) -> Listing {
    let mut listing = Listing::default();

    for (item_index, item) in work_items.iter().enumerate() {
        // 批量响应中缺失该作业ID：按零提交处理
        let Some(submissions) = index
            .get(item.work.course_id.as_str())
            .and_then(|by_work| by_work.get(item.work.id.as_str()))
        else {
            continue;
        };

        let states: Vec<String> = submissions
            .iter()
            .filter(|submission| classifier::is_displayable(submission))
            .map(|submission| submission.state.clone())
            .collect();

        if states.is_empty() {
            continue;
        }

        listing.entries.push(ListingEntry {
            display_number: listing.entries.len() + 1,
            work_item_index: item_index,
            course_name: item.course_name.clone(),
            title: item.work.title.clone(),
            due_label: due_label(&item.work),
            submission_states: states,
        });
    }

    listing
}
