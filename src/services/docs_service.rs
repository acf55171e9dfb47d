//! 文档服务 - 业务能力层
//!
//! 只负责"取文档、提取文本"能力，不关心流程

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use regex::Regex;
use tracing::{debug, warn};

use crate::config::Config;
use crate::infrastructure::ApiExecutor;
use crate::models::document::{Document, DocumentHandle, StructuralElement};
use crate::models::StudentSubmission;
use crate::services::sources::DocumentResolver;
use crate::utils::logging::truncate_text;

/// 文档服务
pub struct DocsService {
    executor: Arc<ApiExecutor>,
    base_url: String,
}

impl DocsService {
    /// 创建新的文档服务
    pub fn new(executor: Arc<ApiExecutor>, config: &Config) -> Self {
        Self {
            executor,
            base_url: config.docs_api_base_url.clone(),
        }
    }

    /// 从附件链接中提取文档ID
    ///
    /// 链接形如 https://docs.google.com/document/d/<ID>/edit
    fn extract_document_id(link: &str) -> Option<String> {
        let re = Regex::new(r"/document/d/([A-Za-z0-9_-]+)").ok()?;
        re.captures(link).map(|caps| caps[1].to_string())
    }

    /// 获取单个文档
    async fn fetch_document(&self, document_id: &str) -> Result<Document> {
        let url = format!("{}/v1/documents/{}", self.base_url, document_id);
        let document = self.executor.get_as("documents.get", &url, &[]).await?;
        Ok(document)
    }
}

#[async_trait]
impl DocumentResolver for DocsService {
    async fn fetch_documents(
        &self,
        submissions: &[StudentSubmission],
    ) -> Result<Vec<DocumentHandle>> {
        let mut handles = Vec::new();

        for submission in submissions {
            for attachment in submission.attachments() {
                let Some(drive_file) = &attachment.drive_file else {
                    continue;
                };
                if !drive_file.is_document() {
                    continue;
                }

                let Some(link) = &drive_file.alternate_link else {
                    continue;
                };
                match Self::extract_document_id(link) {
                    Some(document_id) => {
                        let title = drive_file
                            .title
                            .clone()
                            .unwrap_or_else(|| "未命名文档".to_string());
                        handles.push(DocumentHandle { document_id, title });
                    }
                    // 单个链接解析失败只跳过该附件
                    None => warn!("附件链接中找不到文档ID: {}", link),
                }
            }
        }

        debug!("从 {} 条提交中解析出 {} 个文档", submissions.len(), handles.len());
        Ok(handles)
    }

    async fn extract_content(&self, handle: &DocumentHandle) -> Result<String> {
        let document = self.fetch_document(&handle.document_id).await?;

        let mut text = String::new();
        if let Some(body) = &document.body {
            collect_text(&body.content, &mut text);
        }

        debug!(
            "文档 {} 内容预览: {}",
            handle.document_id,
            truncate_text(&text, 80)
        );
        Ok(text)
    }
}

/// 递归遍历文档结构元素，拼接所有文本
fn collect_text(elements: &[StructuralElement], out: &mut String) {
    for element in elements {
        if let Some(paragraph) = &element.paragraph {
            for paragraph_element in &paragraph.elements {
                if let Some(text_run) = &paragraph_element.text_run {
                    out.push_str(&text_run.content);
                }
            }
        }
        if let Some(table) = &element.table {
            for row in &table.table_rows {
                for cell in &row.table_cells {
                    collect_text(&cell.content, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{Body, Paragraph, ParagraphElement, TextRun};

    #[test]
    fn test_extract_document_id() {
        assert_eq!(
            DocsService::extract_document_id("https://docs.google.com/document/d/XYZ_1-a/edit"),
            Some("XYZ_1-a".to_string())
        );
        assert_eq!(
            DocsService::extract_document_id("https://docs.google.com/spreadsheets/d/XYZ"),
            None
        );
    }

    #[test]
    fn test_collect_text_walks_paragraphs() {
        let elements = vec![
            StructuralElement {
                paragraph: Some(Paragraph {
                    elements: vec![
                        ParagraphElement {
                            text_run: Some(TextRun {
                                content: "第一段\n".to_string(),
                            }),
                        },
                        ParagraphElement { text_run: None },
                    ],
                }),
                table: None,
            },
            StructuralElement {
                paragraph: Some(Paragraph {
                    elements: vec![ParagraphElement {
                        text_run: Some(TextRun {
                            content: "第二段\n".to_string(),
                        }),
                    }],
                }),
                table: None,
            },
        ];

        let mut text = String::new();
        collect_text(&elements, &mut text);
        assert_eq!(text, "第一段\n第二段\n");

        // Body 为空时不输出任何内容
        let empty = Body::default();
        let mut text = String::new();
        collect_text(&empty.content, &mut text);
        assert!(text.is_empty());
    }
}
