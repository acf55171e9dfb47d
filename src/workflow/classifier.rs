//! 提交分类 - 流程层
//!
//! 纯谓词：判断提交是否活跃、是否携带文档附件

use crate::models::{DriveFile, StudentSubmission};

/// 活跃状态集合：仍待完成的提交
static ACTIVE_STATES: phf::Set<&'static str> = phf::phf_set! {
    "NEW",
    "CREATED",
};

/// 提交是否处于活跃状态
///
/// 未识别的状态（包括未来新增的状态）一律视为不活跃
pub fn is_active(submission: &StudentSubmission) -> bool {
    ACTIVE_STATES.contains(submission.state.as_str())
}

/// 提交是否携带至少一个文档附件
pub fn has_document(submission: &StudentSubmission) -> bool {
    submission
        .attachments()
        .iter()
        .any(|attachment| {
            attachment
                .drive_file
                .as_ref()
                .map_or(false, DriveFile::is_document)
        })
}

/// 提交是否符合展示条件：活跃且带文档
pub fn is_displayable(submission: &StudentSubmission) -> bool {
    is_active(submission) && has_document(submission)
}
