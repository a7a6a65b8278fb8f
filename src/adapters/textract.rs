use crate::domain::ports::DocumentOcr;
use crate::utils::error::{QaError, Result};
use async_trait::async_trait;
use aws_sdk_textract::error::DisplayErrorContext;
use aws_sdk_textract::primitives::Blob;
use aws_sdk_textract::types::{Block, BlockType, Document};
use aws_sdk_textract::Client as TextractClient;

/// Synchronous `DetectDocumentText`; single-page documents sent inline.
#[derive(Debug, Clone)]
pub struct TextractOcr {
    client: TextractClient,
}

impl TextractOcr {
    pub fn new(client: TextractClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DocumentOcr for TextractOcr {
    async fn detect_lines(&self, document: &[u8]) -> Result<Vec<String>> {
        let document = Document::builder()
            .bytes(Blob::new(document.to_vec()))
            .build();

        let resp = self
            .client
            .detect_document_text()
            .document(document)
            .send()
            .await
            .map_err(|e| QaError::OcrError {
                message: format!("DetectDocumentText failed: {}", DisplayErrorContext(&e)),
            })?;

        Ok(line_texts(resp.blocks()))
    }
}

fn line_texts(blocks: &[Block]) -> Vec<String> {
    blocks
        .iter()
        .filter(|block| block.block_type() == Some(&BlockType::Line))
        .filter_map(|block| block.text().map(str::to_string))
        .collect()
}
