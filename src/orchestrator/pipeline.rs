//! 作业管线 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责把各层能力串成一次完整运行。
//!
//! ## 核心流程
//!
//! 1. **应用初始化**：加载令牌、创建 API 执行器和各服务
//! 2. **聚合**：拉取全部课程作业，过滤出未过期的工作项
//! 3. **分组与批量**：按课程ID归组，每组只发一次提交查询（并发）
//! 4. **编号与交互**：构建编号列表，读取用户选择（唯一的挂起点）
//! 5. **解析**：取回所选作业的文档并输出内容，单个文档失败不影响其余
//!
//! ## 设计特点
//!
//! - **顶层编排**：不关心单个谓词和单次请求的细节
//! - **资源所有者**：唯一持有各服务实例的模块
//! - **向下委托**：过滤、归组、编号都委托给 workflow 层

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use chrono::Local;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::infrastructure::{credentials, ApiExecutor};
use crate::models::StudentSubmission;
use crate::services::sources::{CourseWorkSource, DocumentResolver};
use crate::services::{ClassroomService, DocsService, GeminiService};
use crate::workflow::batch;
use crate::workflow::due_filter;
use crate::workflow::indexer::{self, Listing};
use crate::workflow::selection;
use crate::workflow::work_item::{group_by_course, WorkItem};

/// 应用主结构
pub struct App {
    config: Config,
    classroom: Arc<ClassroomService>,
    docs: Arc<DocsService>,
    gemini: Option<GeminiService>,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let access_token = credentials::load_access_token(&config.token_path)?;
        let executor = Arc::new(ApiExecutor::new(access_token));

        let classroom = Arc::new(ClassroomService::new(executor.clone(), &config));
        let docs = Arc::new(DocsService::new(executor, &config));
        let gemini = if config.gemini_api_key.is_empty() {
            info!("未配置 GEMINI_API_KEY，跳过 AI 点评功能");
            None
        } else {
            Some(GeminiService::new(&config))
        };

        Ok(Self {
            config,
            classroom,
            docs,
            gemini,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with_io(&mut stdin.lock(), &mut stdout.lock())
            .await
    }

    /// 用注入的输入输出运行管线
    async fn run_with_io(
        &self,
        reader: &mut impl BufRead,
        writer: &mut impl Write,
    ) -> Result<()> {
        // 聚合 + 过滤
        let work_items = collect_eligible_work(self.classroom.as_ref()).await?;
        if work_items.is_empty() {
            info!("没有找到带截止时间且未过期的作业，程序结束");
            return Ok(());
        }
        info!("✓ 共 {} 项未过期作业", work_items.len());

        // 分组 + 批量获取提交
        let groups = group_by_course(work_items);
        info!("📦 {} 门课程需要批量查询提交", groups.len());
        let index = batch::fetch_submissions(self.classroom.as_ref(), &groups).await?;
        let work_items = groups.into_flattened();

        // 编号列表
        let listing = indexer::build_listing(&work_items, &index);
        if listing.is_empty() {
            info!("没有可展示的活跃文档提交，程序结束");
            return Ok(());
        }
        if self.config.verbose_logging {
            for entry in &listing.entries {
                debug!(
                    "条目 {} → 工作项 {} ({})",
                    entry.display_number, entry.work_item_index, entry.title
                );
            }
        }
        render_listing(writer, &listing)?;

        // 交互选择（唯一的挂起点）
        let number = selection::read_selection(
            reader,
            writer,
            "请选择要查看的作业编号",
            listing.last_display_number(),
        )?;
        let item_index = listing
            .resolve(number)
            .ok_or_else(|| anyhow::anyhow!("编号 {} 无法解析回工作项", number))?;
        let item = &work_items[item_index];

        // 解析所选作业：传入该作业批量取回的完整提交列表
        let submissions = index
            .get(item.work.course_id.as_str())
            .and_then(|by_work| by_work.get(item.work.id.as_str()))
            .map(|subs| subs.as_slice())
            .unwrap_or(&[]);

        info!("📄 正在获取 \"{}\" 的文档...", item.work.title);
        let extracted =
            resolve_selection(self.docs.as_ref(), writer, item, submissions).await?;

        // 可选：Gemini 点评
        if let Some(gemini) = &self.gemini {
            if !extracted.is_empty()
                && selection::read_yes_no(reader, writer, "是否让 Gemini 点评该提交?")?
            {
                let description = item.work.description.as_deref().unwrap_or("");
                match gemini
                    .summarize_submission(&extracted.join("\n\n"), description)
                    .await
                {
                    Ok(review) => {
                        writeln!(writer, "\n===== Gemini 点评 =====")?;
                        writeln!(writer, "{}", review)?;
                    }
                    Err(e) => warn!("Gemini 点评失败: {}", e),
                }
            }
        }

        Ok(())
    }
}

/// 拉取全部课程作业并过滤出未过期的工作项
///
/// 课程顺序与数据源返回顺序一致，组内顺序与作业扫描顺序一致
pub async fn collect_eligible_work(source: &dyn CourseWorkSource) -> Result<Vec<WorkItem>> {
    info!("📁 正在拉取课程作业...");
    let courses = source.fetch_all().await?;
    let now = Local::now().naive_local();

    let mut items = Vec::new();
    for (course_name, works) in courses {
        for work in works {
            if due_filter::is_eligible(&work, now) {
                items.push(WorkItem {
                    course_name: course_name.clone(),
                    work,
                });
            }
        }
    }

    Ok(items)
}

/// 解析所选工作项：输出作业描述，再逐个输出文档内容
///
/// 单个文档获取失败只输出一条错误提示，不影响其余文档；
/// 返回成功提取的内容（供后续 AI 点评使用）
pub async fn resolve_selection(
    resolver: &dyn DocumentResolver,
    writer: &mut impl Write,
    item: &WorkItem,
    submissions: &[StudentSubmission],
) -> Result<Vec<String>> {
    let handles = resolver.fetch_documents(submissions).await?;

    writeln!(writer)?;
    match &item.work.description {
        Some(description) if !description.is_empty() => writeln!(writer, "{}", description)?,
        _ => writeln!(writer, "（该作业没有描述）")?,
    }

    if handles.is_empty() {
        warn!("作业 \"{}\" 的提交中没有可解析的文档", item.work.title);
        return Ok(Vec::new());
    }

    let mut extracted = Vec::new();
    for handle in &handles {
        writeln!(writer, "\n===== {} =====", handle.title)?;
        match resolver.extract_content(handle).await {
            Ok(content) => {
                writeln!(writer, "{}", content)?;
                extracted.push(content);
            }
            Err(e) => {
                writeln!(writer, "⚠️ 文档内容获取失败: {}", e)?;
                warn!("文档 {} 内容获取失败: {}", handle.document_id, e);
            }
        }
    }

    Ok(extracted)
}

/// 输出编号列表
pub fn render_listing(writer: &mut impl Write, listing: &Listing) -> Result<()> {
    for entry in &listing.entries {
        writeln!(writer, "{}. 课程: {}", entry.display_number, entry.course_name)?;
        writeln!(writer, "  - {} ({})", entry.title, entry.due_label)?;
        for state in &entry.submission_states {
            writeln!(writer, "    - {}", state)?;
        }
    }
    Ok(())
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 课程作业查看模式");
    info!("📡 Classroom API: {}", config.classroom_api_base_url);
    info!("{}", "=".repeat(60));
}
