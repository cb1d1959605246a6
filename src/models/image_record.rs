use serde::{Deserialize, Serialize};

/// 识别失败时写入的错误标签
pub const ERROR_SENTINEL: &str = "Error analyzing image";

/// 单张图片记录
///
/// `reference` 创建后不可变；`label` 只会从 `None` 变为 `Some`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRecord {
    reference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
}

impl ImageRecord {
    /// 创建未识别的图片记录
    pub fn new(reference: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            label: None,
        }
    }

    /// 创建已带标签的图片记录
    pub fn labeled(reference: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            reference: reference.into(),
            label: Some(label.into()),
        }
    }

    pub fn reference(&self) -> &str {
        &self.reference
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_labeled(&self) -> bool {
        self.label.is_some()
    }

    /// 标签是否为错误标签
    pub fn is_error(&self) -> bool {
        self.label.as_deref() == Some(ERROR_SENTINEL)
    }

    /// 写入标签，已有标签时保持不变
    pub(crate) fn with_label(mut self, label: impl Into<String>) -> Self {
        if self.label.is_none() {
            self.label = Some(label.into());
        }
        self
    }

    pub(crate) fn with_error(self) -> Self {
        self.with_label(ERROR_SENTINEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_written_once() {
        let record = ImageRecord::new("rose.jpg");
        assert!(!record.is_labeled());

        let record = record.with_label("Rose").with_label("Tulip");
        assert_eq!(record.label(), Some("Rose"));
        assert_eq!(record.reference(), "rose.jpg");
    }

    #[test]
    fn test_error_sentinel() {
        let record = ImageRecord::new("broken.jpg").with_error();
        assert!(record.is_labeled());
        assert!(record.is_error());
        assert_eq!(record.label(), Some(ERROR_SENTINEL));
        assert!(!ImageRecord::labeled("oak.jpg", "Oak").is_error());
    }
}
