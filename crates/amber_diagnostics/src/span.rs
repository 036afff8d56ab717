//! Span - 源码位置信息
//!
//! 表示源代码中的字节偏移区间。区间半开：`start..end`。

/// 源码位置范围 (字节偏移)
pub type Span = std::ops::Range<usize>;

/// Span 辅助函数
pub trait SpanExt {
    /// 获取起始位置
    fn start(&self) -> usize;

    /// 获取结束位置
    fn end(&self) -> usize;

    /// 是否为空
    fn is_empty(&self) -> bool;

    /// 是否包含某个字节偏移
    fn contains_offset(&self, offset: usize) -> bool;
}

impl SpanExt for Span {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }

    fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    fn contains_offset(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}
