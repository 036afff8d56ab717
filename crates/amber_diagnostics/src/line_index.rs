//! LineIndex - 行列索引
//!
//! 预先记录每一行的起始字节偏移，把字节偏移映射为
//! (1-based 行号, 0-based 字节列)。列保持字节单位，
//! 与分析器上报的列单位一致。

/// 行列索引
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// 每一行的起始字节偏移（首行恒为 0）
    line_starts: Vec<usize>,
    /// 源文本总长度
    len: usize,
}

impl LineIndex {
    /// 扫描源文本构建索引
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0];
        for (offset, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset + 1);
            }
        }
        Self {
            line_starts,
            len: text.len(),
        }
    }

    /// 行数
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// 把字节偏移映射为 (1-based 行号, 0-based 字节列)
    ///
    /// 越界偏移被钳制到文本末尾。
    pub fn line_col(&self, offset: usize) -> (u32, u32) {
        let offset = offset.min(self.len);
        // partition_point 返回第一个起始偏移大于 offset 的行
        let line = self.line_starts.partition_point(|&start| start <= offset);
        let start = self.line_starts[line - 1];
        (line as u32, (offset - start) as u32)
    }
}
