//! # Classroom Assistant
//!
//! 一个聚合课程作业与学生提交的交互式命令行工具
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（认证 HTTP 客户端），只暴露能力
//! - `ApiExecutor` - 唯一的 client owner，提供 get_as() 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单次请求
//! - `ClassroomService` - 课程 / 作业 / 提交读取能力（按课程批量）
//! - `DocsService` - 文档获取与文本提取能力
//! - `GeminiService` - AI 点评能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 一次运行的核心管线
//! - `due_filter` - 截止时间过滤（过期判定三态化）
//! - `work_item` - 按课程ID归组，保持插入顺序
//! - `batch` - 每组一次的并发批量提交查询
//! - `classifier` / `indexer` - 提交分类与编号列表
//! - `selection` - 交互选择（唯一的挂起点）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/pipeline` - 应用入口，串起聚合、批量查询与交互解析
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::ApiExecutor;
pub use models::{Course, CourseWork, StudentSubmission};
pub use orchestrator::App;
pub use workflow::{CourseGroups, DueStatus, Listing, WorkItem};
