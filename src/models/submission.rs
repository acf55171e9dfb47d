//! 学生提交模型

use serde::{Deserialize, Serialize};

/// 学生提交
///
/// `state` 保持线上字符串原样：未识别的状态（包括未来新增的）
/// 由分类逻辑统一按不活跃处理
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSubmission {
    pub id: String,
    /// 所属作业ID
    pub course_work_id: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub assignment_submission: Option<AssignmentSubmission>,
}

impl StudentSubmission {
    /// 提交携带的全部附件（没有 assignment_submission 时为空切片）
    pub fn attachments(&self) -> &[Attachment] {
        self.assignment_submission
            .as_ref()
            .map(|assignment| assignment.attachments.as_slice())
            .unwrap_or(&[])
    }
}

/// 作业类提交的内容
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSubmission {
    #[serde(default)]
    pub attachments: Vec<Attachment>,
}

/// 附件：可能包装一个云端文件引用
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    #[serde(default)]
    pub drive_file: Option<DriveFile>,
}

/// 云端文件引用
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    /// 打开该文件的链接，文档判定依据此链接
    #[serde(default)]
    pub alternate_link: Option<String>,
}

/// 文档链接的主机路径标记
const DOCUMENT_LINK_MARKER: &str = "docs.google.com/document";

impl DriveFile {
    /// 该文件是否指向一篇文档（大小写不敏感）
    pub fn is_document(&self) -> bool {
        self.alternate_link
            .as_deref()
            .map(|link| link.to_lowercase().contains(DOCUMENT_LINK_MARKER))
            .unwrap_or(false)
    }
}
