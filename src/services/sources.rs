//! 外部数据源契约 - 业务能力层
//!
//! 核心管线只通过这三个窄接口与外部服务交互，
//! 测试可以用内存实现替换真实的 REST 客户端

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{CourseWork, DocumentHandle, StudentSubmission};

/// 课程作业数据源
#[async_trait]
pub trait CourseWorkSource: Send + Sync {
    /// 返回 (课程名称, 该课程的作业列表)，按扫描课程的顺序排列
    async fn fetch_all(&self) -> Result<Vec<(String, Vec<CourseWork>)>>;
}

/// 提交数据源
#[async_trait]
pub trait SubmissionSource: Send + Sync {
    /// 针对一门课程，一次请求取回多个作业的全部提交
    ///
    /// `course_work_ids` 为空时返回空映射；
    /// 响应中缺失某个作业ID不是错误，调用方按零提交处理
    async fn fetch_batch(
        &self,
        course_id: &str,
        course_work_ids: &[String],
    ) -> Result<HashMap<String, Vec<StudentSubmission>>>;
}

/// 文档解析器
#[async_trait]
pub trait DocumentResolver: Send + Sync {
    /// 从提交的附件中解析出文档句柄
    async fn fetch_documents(
        &self,
        submissions: &[StudentSubmission],
    ) -> Result<Vec<DocumentHandle>>;

    /// 获取并提取单个文档的文本内容
    async fn extract_content(&self, handle: &DocumentHandle) -> Result<String>;
}
