//! Resolve - 文档解析
//!
//! 把分析器上报的文件名解析为规范的文档标识（URI）。
//! 解析是全函数：任何输入都不会失败，最多返回 `None`（排除该报告）。

use std::path::{Path, PathBuf};

use tower_lsp::lsp_types::Url;

/// 未保存缓冲区的文件名前缀（编辑器的虚拟缓冲区命名）
pub const UNTITLED_PREFIX: &str = "Untitled-";

/// 文档解析器
#[derive(Debug, Clone)]
pub struct DocumentResolver {
    /// 相对路径的根目录（服务器工作区根）
    root: PathBuf,
}

impl DocumentResolver {
    /// 以指定根目录创建解析器
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// 以当前工作目录创建解析器
    pub fn from_cwd() -> Self {
        Self {
            root: std::env::current_dir().unwrap_or_else(|_| PathBuf::from("/")),
        }
    }

    /// 更新根目录（initialize 时由客户端提供）
    pub fn set_root(&mut self, root: PathBuf) {
        self.root = root;
    }

    /// 解析文件名为文档标识
    ///
    /// - `None` / 空字符串：不可归属，返回 `None`
    /// - `Untitled-` 前缀：未保存缓冲区，直接构造 `untitled:` URI，不查文件系统
    /// - 其他：以根目录补全为绝对路径后构造 `file:` URI
    pub fn resolve(&self, file: Option<&str>) -> Option<Url> {
        let name = file?;
        if name.is_empty() {
            return None;
        }
        if name.starts_with(UNTITLED_PREFIX) {
            return Url::parse(&format!("untitled:{name}")).ok();
        }
        let path = Path::new(name);
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        };
        Url::from_file_path(absolute).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver() -> DocumentResolver {
        DocumentResolver::new(PathBuf::from("/workspace"))
    }

    #[test]
    fn test_no_file_excluded() {
        assert_eq!(resolver().resolve(None), None);
        assert_eq!(resolver().resolve(Some("")), None);
    }

    #[test]
    fn test_untitled_buffer() {
        let uri = resolver().resolve(Some("Untitled-1")).unwrap();
        assert_eq!(uri.as_str(), "untitled:Untitled-1");
        assert_eq!(uri.scheme(), "untitled");
    }

    #[test]
    fn test_relative_path_rooted() {
        let uri = resolver().resolve(Some("src/main.am")).unwrap();
        assert_eq!(uri.as_str(), "file:///workspace/src/main.am");
    }

    #[test]
    fn test_absolute_path_kept() {
        let uri = resolver().resolve(Some("/other/lib.am")).unwrap();
        assert_eq!(uri.as_str(), "file:///other/lib.am");
    }

    #[test]
    fn test_total_never_panics() {
        // 各种边角输入都只会得到 Some 或 None
        let r = resolver();
        for name in ["..", "a b.am", "././x", "Untitled-42"] {
            let _ = r.resolve(Some(name));
        }
    }
}
