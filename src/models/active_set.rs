//! 当前图片集合
//!
//! 有序序列，新图片追加到末尾；按位置删除不改变其余图片的相对顺序

use super::image_record::ImageRecord;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveSet {
    records: Vec<ImageRecord>,
}

impl ActiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加单张图片（相机拍摄）
    pub fn append(&mut self, record: ImageRecord) {
        self.records.push(record);
    }

    /// 追加多张图片（相册多选）
    pub fn extend(&mut self, records: impl IntoIterator<Item = ImageRecord>) {
        self.records.extend(records);
    }

    /// 按位置删除图片
    ///
    /// 位置越界时不做任何修改，返回 `None`
    pub fn remove(&mut self, position: usize) -> Option<ImageRecord> {
        if position < self.records.len() {
            Some(self.records.remove(position))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// 用批量提交的结果替换当前集合
    pub fn replace(&mut self, records: Vec<ImageRecord>) {
        self.records = records;
    }

    pub fn records(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 尚未识别的图片数量
    pub fn pending(&self) -> usize {
        self.records.iter().filter(|r| !r.is_labeled()).count()
    }
}

impl From<Vec<ImageRecord>> for ActiveSet {
    fn from(records: Vec<ImageRecord>) -> Self {
        Self { records }
    }
}
