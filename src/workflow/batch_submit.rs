//! 批量提交流程 - 流程层
//!
//! 核心职责：把一组图片提交识别，并把结果按原位置合并回来
//!
//! 流程顺序：
//! 1. 空批次直接失败，不发任何请求
//! 2. 已有标签的图片原样保留
//! 3. 未识别的图片并发请求，全部结束后再返回（不是遇错即停）
//! 4. 单张失败写入错误标签，不影响其他图片

use futures::future::join_all;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::ImageRecord;
use crate::services::Classifier;

/// 上传时使用的文件名，由批次中的位置决定
pub fn synthetic_filename(index: usize) -> String {
    format!("plant{}.jpg", index)
}

/// 单次提交统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SubmitStats {
    pub total: usize,
    pub requested: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

/// 单张图片的结算结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settled {
    Skipped,
    Succeeded,
    Failed,
}

/// 批量提交流程
///
/// - 不持有图片集合，输入按值传入、输出为新序列
/// - 只依赖识别能力（Classifier）
pub struct BatchSubmitter<C> {
    classifier: C,
}

impl<C: Classifier> BatchSubmitter<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// 提交一批图片
    ///
    /// 输出与输入长度相同、顺序一致
    pub async fn submit(&self, records: Vec<ImageRecord>) -> AppResult<Vec<ImageRecord>> {
        let (records, _) = self.submit_with_stats(records).await?;
        Ok(records)
    }

    /// 提交一批图片，同时返回统计
    pub async fn submit_with_stats(
        &self,
        records: Vec<ImageRecord>,
    ) -> AppResult<(Vec<ImageRecord>, SubmitStats)> {
        if records.is_empty() {
            warn!("⚠️ 没有选择任何图片，不发送请求");
            return Err(AppError::EmptyBatch);
        }

        let mut stats = SubmitStats {
            total: records.len(),
            ..Default::default()
        };

        // join_all 保证按输入顺序返回
        let settled = join_all(
            records
                .into_iter()
                .enumerate()
                .map(|(index, record)| self.settle(index, record)),
        )
        .await;

        let mut output = Vec::with_capacity(stats.total);
        for (record, outcome) in settled {
            match outcome {
                Settled::Skipped => stats.skipped += 1,
                Settled::Succeeded => {
                    stats.requested += 1;
                    stats.succeeded += 1;
                }
                Settled::Failed => {
                    stats.requested += 1;
                    stats.failed += 1;
                }
            }
            output.push(record);
        }

        info!(
            "✓ 批次完成: 请求 {} 张，成功 {}，失败 {}，跳过 {}",
            stats.requested, stats.succeeded, stats.failed, stats.skipped
        );

        Ok((output, stats))
    }

    async fn settle(&self, index: usize, record: ImageRecord) -> (ImageRecord, Settled) {
        if record.is_labeled() {
            return (record, Settled::Skipped);
        }

        let filename = synthetic_filename(index);
        info!("[图片 {}] 🔍 开始识别...", index + 1);

        match self.classifier.classify(record.reference(), &filename).await {
            Ok(label) => {
                info!("[图片 {}] ✓ 识别结果: {}", index + 1, label);
                (record.with_label(label), Settled::Succeeded)
            }
            Err(e) => {
                warn!("[图片 {}] ❌ 识别失败: {}", index + 1, e);
                (record.with_error(), Settled::Failed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClassifyError;
    use crate::models::ERROR_SENTINEL;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::sync::Barrier;

    /// 按引用返回预设结果，并记录每次调用
    #[derive(Default)]
    struct FakeClassifier {
        labels: HashMap<String, String>,
        calls: Mutex<Vec<(String, String)>>,
    }

    impl FakeClassifier {
        fn with_labels(labels: &[(&str, &str)]) -> Self {
            Self {
                labels: labels
                    .iter()
                    .map(|(r, l)| (r.to_string(), l.to_string()))
                    .collect(),
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<(String, String)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Classifier for FakeClassifier {
        async fn classify(&self, reference: &str, filename: &str) -> Result<String, ClassifyError> {
            self.calls
                .lock()
                .unwrap()
                .push((reference.to_string(), filename.to_string()));
            self.labels
                .get(reference)
                .cloned()
                .ok_or_else(|| ClassifyError::MalformedResponse("no prediction".to_string()))
        }
    }

    /// 所有请求都到达屏障后才返回，用于验证并发
    struct BarrierClassifier {
        barrier: Barrier,
    }

    #[async_trait]
    impl Classifier for BarrierClassifier {
        async fn classify(&self, _reference: &str, filename: &str) -> Result<String, ClassifyError> {
            self.barrier.wait().await;
            Ok(filename.to_string())
        }
    }

    #[tokio::test]
    async fn test_empty_batch_issues_no_requests() {
        let submitter = BatchSubmitter::new(FakeClassifier::default());

        let result = submitter.submit(Vec::new()).await;

        assert!(matches!(result, Err(AppError::EmptyBatch)));
        assert!(submitter.classifier().calls().is_empty());
    }

    #[tokio::test]
    async fn test_failure_is_contained_and_order_kept() {
        let submitter = BatchSubmitter::new(FakeClassifier::with_labels(&[
            ("1.jpg", "Rose"),
            ("3.jpg", "Tulip"),
        ]));

        let (output, stats) = submitter
            .submit_with_stats(vec![
                ImageRecord::new("1.jpg"),
                ImageRecord::new("2.jpg"),
                ImageRecord::new("3.jpg"),
            ])
            .await
            .unwrap();

        assert_eq!(
            output,
            vec![
                ImageRecord::labeled("1.jpg", "Rose"),
                ImageRecord::labeled("2.jpg", ERROR_SENTINEL),
                ImageRecord::labeled("3.jpg", "Tulip"),
            ]
        );
        assert_eq!(
            stats,
            SubmitStats {
                total: 3,
                requested: 3,
                succeeded: 2,
                failed: 1,
                skipped: 0,
            }
        );
    }

    #[tokio::test]
    async fn test_labeled_records_are_skipped() {
        let submitter = BatchSubmitter::new(FakeClassifier::with_labels(&[
            ("oak.jpg", "Maple"),
            ("pine.jpg", "Pine"),
        ]));

        let output = submitter
            .submit(vec![
                ImageRecord::labeled("oak.jpg", "Oak"),
                ImageRecord::new("pine.jpg"),
            ])
            .await
            .unwrap();

        assert_eq!(
            output,
            vec![
                ImageRecord::labeled("oak.jpg", "Oak"),
                ImageRecord::labeled("pine.jpg", "Pine"),
            ]
        );
        // 文件名按批次中的位置生成
        assert_eq!(
            submitter.classifier().calls(),
            vec![("pine.jpg".to_string(), "plant1.jpg".to_string())]
        );
    }

    #[tokio::test]
    async fn test_service_label_is_stored_verbatim() {
        let submitter = BatchSubmitter::new(FakeClassifier::with_labels(&[(
            "rosa.jpg",
            "  Rosa canina\n",
        )]));

        let output = submitter
            .submit(vec![ImageRecord::new("rosa.jpg")])
            .await
            .unwrap();

        assert_eq!(output, vec![ImageRecord::labeled("rosa.jpg", "  Rosa canina\n")]);
    }

    #[tokio::test]
    async fn test_resubmit_is_idempotent() {
        let submitter = BatchSubmitter::new(FakeClassifier::with_labels(&[("rose.jpg", "Rose")]));

        let first = submitter
            .submit(vec![ImageRecord::new("rose.jpg"), ImageRecord::new("broken.jpg")])
            .await
            .unwrap();
        let second = submitter.submit(first.clone()).await.unwrap();

        assert_eq!(first, second);
        assert!(second[1].is_error());
        assert_eq!(submitter.classifier().calls().len(), 2);
    }

    #[tokio::test]
    async fn test_requests_run_concurrently() {
        let submitter = BatchSubmitter::new(BarrierClassifier {
            barrier: Barrier::new(3),
        });
        let records = vec![
            ImageRecord::new("a.jpg"),
            ImageRecord::labeled("b.jpg", "Fern"),
            ImageRecord::new("c.jpg"),
            ImageRecord::new("d.jpg"),
        ];

        // 串行执行时第一个请求会永远等在屏障上
        let output = tokio::time::timeout(Duration::from_secs(5), submitter.submit(records))
            .await
            .expect("请求应当并发执行")
            .unwrap();

        let labels: Vec<_> = output.iter().map(|r| r.label().unwrap()).collect();
        assert_eq!(labels, vec!["plant0.jpg", "Fern", "plant2.jpg", "plant3.jpg"]);
    }

    #[test]
    fn test_synthetic_filename() {
        assert_eq!(synthetic_filename(0), "plant0.jpg");
        assert_eq!(synthetic_filename(4), "plant4.jpg");
    }
}
