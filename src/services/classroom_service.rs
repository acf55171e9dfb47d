//! Classroom 服务 - 业务能力层
//!
//! 只负责课程 / 作业 / 提交的读取能力，不关心流程
//!
//! ## 批量约定
//! 提交查询按课程批量：一门课程只发一次 `courseWork/-` 请求，
//! 再在本地按请求的作业ID归组，请求数与作业数无关

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::infrastructure::ApiExecutor;
use crate::models::{Course, CourseWork, StudentSubmission};
use crate::services::sources::{CourseWorkSource, SubmissionSource};

/// 课程列表响应
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListCoursesResponse {
    #[serde(default)]
    courses: Vec<Course>,
    #[serde(default)]
    next_page_token: Option<String>,
}

/// 作业列表响应
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListCourseWorkResponse {
    #[serde(default)]
    course_work: Vec<CourseWork>,
    #[serde(default)]
    next_page_token: Option<String>,
}

/// 提交列表响应
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListSubmissionsResponse {
    #[serde(default)]
    student_submissions: Vec<StudentSubmission>,
    #[serde(default)]
    next_page_token: Option<String>,
}

/// Classroom 服务
pub struct ClassroomService {
    executor: Arc<ApiExecutor>,
    base_url: String,
}

impl ClassroomService {
    /// 创建新的 Classroom 服务
    pub fn new(executor: Arc<ApiExecutor>, config: &Config) -> Self {
        Self {
            executor,
            base_url: config.classroom_api_base_url.clone(),
        }
    }

    /// 列出所有 ACTIVE 状态的课程（自动翻页）
    async fn list_courses(&self) -> Result<Vec<Course>> {
        let url = format!("{}/v1/courses", self.base_url);
        let mut courses = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![("courseStates", "ACTIVE")];
            if let Some(token) = page_token.as_deref() {
                query.push(("pageToken", token));
            }

            let response: ListCoursesResponse =
                self.executor.get_as("courses.list", &url, &query).await?;
            courses.extend(response.courses);

            match response.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(courses)
    }

    /// 列出一门课程的所有作业（自动翻页）
    async fn list_course_work(&self, course_id: &str) -> Result<Vec<CourseWork>> {
        let url = format!("{}/v1/courses/{}/courseWork", self.base_url, course_id);
        let mut works = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query: Vec<(&str, &str)> = Vec::new();
            if let Some(token) = page_token.as_deref() {
                query.push(("pageToken", token));
            }

            let response: ListCourseWorkResponse = self
                .executor
                .get_as("courseWork.list", &url, &query)
                .await?;
            works.extend(response.course_work);

            match response.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        Ok(works)
    }
}

#[async_trait]
impl CourseWorkSource for ClassroomService {
    async fn fetch_all(&self) -> Result<Vec<(String, Vec<CourseWork>)>> {
        let courses = self.list_courses().await?;
        debug!("共找到 {} 门课程", courses.len());

        let mut result = Vec::with_capacity(courses.len());
        for course in courses {
            let works = self.list_course_work(&course.id).await?;
            debug!("课程 {} 共 {} 项作业", course.name, works.len());
            result.push((course.name, works));
        }

        Ok(result)
    }
}

#[async_trait]
impl SubmissionSource for ClassroomService {
    async fn fetch_batch(
        &self,
        course_id: &str,
        course_work_ids: &[String],
    ) -> Result<HashMap<String, Vec<StudentSubmission>>> {
        if course_work_ids.is_empty() {
            return Ok(HashMap::new());
        }

        // courseWork/- 一次取回整门课程的提交
        let url = format!(
            "{}/v1/courses/{}/courseWork/-/studentSubmissions",
            self.base_url, course_id
        );
        let mut submissions = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query: Vec<(&str, &str)> = Vec::new();
            if let Some(token) = page_token.as_deref() {
                query.push(("pageToken", token));
            }

            let response: ListSubmissionsResponse = self
                .executor
                .get_as("studentSubmissions.list", &url, &query)
                .await?;
            submissions.extend(response.student_submissions);

            match response.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }

        // 只保留本次请求涉及的作业，其余提交丢弃
        let wanted: HashSet<&str> = course_work_ids.iter().map(|id| id.as_str()).collect();
        let mut by_work_id: HashMap<String, Vec<StudentSubmission>> = HashMap::new();
        for submission in submissions {
            if wanted.contains(submission.course_work_id.as_str()) {
                by_work_id
                    .entry(submission.course_work_id.clone())
                    .or_default()
                    .push(submission);
            }
        }

        debug!(
            "课程 {} 批量取回 {} 个作业的提交",
            course_id,
            by_work_id.len()
        );
        Ok(by_work_id)
    }
}
