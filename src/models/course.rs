//! 课程与作业模型
//!
//! 与 Classroom API 的线上格式一一对应（camelCase 字段）

use serde::{Deserialize, Serialize};

/// 课程
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub name: String,
    /// 课程状态（如 ACTIVE / ARCHIVED）
    #[serde(default)]
    pub course_state: Option<String>,
}

/// 课程作业
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseWork {
    pub id: String,
    /// 所属课程ID（分组键）
    pub course_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// 截止日期对象，可能整体缺失
    #[serde(default)]
    pub due_date: Option<DueDate>,
    /// 截止时间对象，可能整体缺失
    #[serde(default)]
    pub due_time: Option<DueTime>,
}

/// 截止日期（三个字段各自都可能缺失）
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DueDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

/// 截止时间（两个字段各自都可能缺失）
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DueTime {
    pub hours: Option<u32>,
    pub minutes: Option<u32>,
}
