//! 工作项与课程分组 - 流程层
//!
//! WorkItem 是一次运行中 (课程名, 作业) 的配对；
//! CourseGroups 按课程ID归组，保持首次出现的插入顺序

use std::collections::HashMap;

use crate::models::CourseWork;

/// 工作项：课程名与作业的配对，只在一次管线运行内存活
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub course_name: String,
    pub work: CourseWork,
}

/// 按课程ID归组的工作项集合
///
/// 分组键是作业的 course_id 而不是课程显示名；
/// 哈希表加独立的键插入顺序表，保证遍历顺序稳定
#[derive(Debug, Default)]
pub struct CourseGroups {
    groups: HashMap<String, Vec<WorkItem>>,
    order: Vec<String>,
}

impl CourseGroups {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个工作项，必要时创建新组
    pub fn insert(&mut self, item: WorkItem) {
        let course_id = item.work.course_id.clone();
        match self.groups.get_mut(&course_id) {
            Some(items) => items.push(item),
            None => {
                self.order.push(course_id.clone());
                self.groups.insert(course_id, vec![item]);
            }
        }
    }

    /// 按插入顺序遍历 (课程ID, 该课程的工作项)
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[WorkItem])> {
        self.order.iter().map(|course_id| {
            (
                course_id.as_str(),
                self.groups
                    .get(course_id)
                    .map(|items| items.as_slice())
                    .unwrap_or(&[]),
            )
        })
    }

    /// 分组数量（等于含有效作业的课程数）
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// 工作项总数
    pub fn item_count(&self) -> usize {
        self.groups.values().map(|items| items.len()).sum()
    }

    /// 按分组顺序展平为一个工作项序列
    pub fn into_flattened(mut self) -> Vec<WorkItem> {
        let mut items = Vec::with_capacity(self.item_count());
        for course_id in &self.order {
            if let Some(group) = self.groups.remove(course_id) {
                items.extend(group);
            }
        }
        items
    }
}

/// 把通过过滤的工作项按课程ID归组
///
/// 没有工作项的课程不会产生分组
pub fn group_by_course(items: Vec<WorkItem>) -> CourseGroups {
    let mut groups = CourseGroups::new();
    for item in items {
        groups.insert(item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(course_id: &str, course_name: &str, work_id: &str) -> WorkItem {
        WorkItem {
            course_name: course_name.to_string(),
            work: CourseWork {
                id: work_id.to_string(),
                course_id: course_id.to_string(),
                title: format!("作业 {}", work_id),
                description: None,
                due_date: None,
                due_time: None,
            },
        }
    }

    #[test]
    fn test_grouping_is_complete() {
        let items = vec![
            item("c1", "语文", "w1"),
            item("c2", "数学", "w2"),
            item("c1", "语文", "w3"),
            item("c3", "英语", "w4"),
        ];

        let groups = group_by_course(items);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups.item_count(), 4);

        // 所有工作项都恰好落在一个组里，无重复无丢失
        let mut work_ids: Vec<String> = groups
            .iter()
            .flat_map(|(_, items)| items.iter().map(|i| i.work.id.clone()))
            .collect();
        work_ids.sort();
        assert_eq!(work_ids, vec!["w1", "w2", "w3", "w4"]);
    }

    #[test]
    fn test_groups_keep_insertion_order() {
        let items = vec![
            item("c2", "数学", "w1"),
            item("c1", "语文", "w2"),
            item("c2", "数学", "w3"),
        ];

        let groups = group_by_course(items);
        let order: Vec<&str> = groups.iter().map(|(course_id, _)| course_id).collect();
        assert_eq!(order, vec!["c2", "c1"]);

        // 展平顺序按组序，组内按发现顺序
        let flattened = groups.into_flattened();
        let work_ids: Vec<&str> = flattened.iter().map(|i| i.work.id.as_str()).collect();
        assert_eq!(work_ids, vec!["w1", "w3", "w2"]);
    }

    #[test]
    fn test_grouping_key_is_course_id_not_name() {
        // 两条记录课程名不同但ID相同，必须归入同一组
        let items = vec![item("c1", "语文(上)", "w1"), item("c1", "语文(下)", "w2")];

        let groups = group_by_course(items);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups.item_count(), 2);
    }

    #[test]
    fn test_empty_input_creates_no_groups() {
        let groups = group_by_course(Vec::new());
        assert!(groups.is_empty());
        assert_eq!(groups.item_count(), 0);
        assert!(groups.into_flattened().is_empty());
    }
}
