use crate::adapters::bedrock::BedrockGenerator;
use crate::adapters::textract::TextractOcr;
use crate::config::ReferenceSource;
use crate::core::reference::{NoReference, OcrDocument, TextObject};
use crate::domain::ports::{ObjectStore, ReferenceProvider};
use aws_config::BehaviorVersion;
use aws_sdk_s3::config::Region;

/// Service clients created once per cold start and shared read-only.
#[derive(Debug, Clone)]
pub struct AwsClients {
    pub s3: aws_sdk_s3::Client,
    pub textract: aws_sdk_textract::Client,
    pub bedrock: aws_sdk_bedrockruntime::Client,
}

impl AwsClients {
    pub async fn load(region: Option<&str>) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region.to_string()));
        }
        let config = loader.load().await;

        Self {
            s3: aws_sdk_s3::Client::new(&config),
            textract: aws_sdk_textract::Client::new(&config),
            bedrock: aws_sdk_bedrockruntime::Client::new(&config),
        }
    }

    pub fn generator(&self) -> BedrockGenerator {
        BedrockGenerator::new(self.bedrock.clone())
    }

    pub fn ocr(&self) -> TextractOcr {
        TextractOcr::new(self.textract.clone())
    }
}

pub fn reference_for<S>(
    source: &ReferenceSource,
    storage: S,
    ocr: TextractOcr,
) -> Box<dyn ReferenceProvider>
where
    S: ObjectStore + 'static,
{
    match source {
        ReferenceSource::None => Box::new(NoReference),
        ReferenceSource::Text { bucket, key } => {
            Box::new(TextObject::new(storage, bucket.clone(), key.clone()))
        }
        ReferenceSource::PdfOcr { bucket, key } => Box::new(OcrDocument::new(
            storage,
            ocr,
            bucket.clone(),
            key.clone(),
        )),
    }
}
