//! ModuleRewriter - 影子模块名重写器
//!
//! 顶层求值把每个脚本装进一个生成的影子模块（形如
//! `__amber_shadow_1__`）。分析器渲染的消息里会带着这些内部名字；
//! 发给用户之前必须改写回真实模块名。

/// 影子模块名重写器
#[derive(Debug, Clone, Default)]
pub struct ModuleRewriter {
    /// (影子模块名, 真实模块名) 映射，按注册顺序应用
    entries: Vec<(String, String)>,
}

impl ModuleRewriter {
    /// 创建空的重写器
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// 注册一条映射
    pub fn add(&mut self, shadow: impl Into<String>, real: impl Into<String>) {
        self.entries.push((shadow.into(), real.into()));
    }

    /// 注册一条映射（builder 风格）
    pub fn with_mapping(mut self, shadow: impl Into<String>, real: impl Into<String>) -> Self {
        self.add(shadow, real);
        self
    }

    /// 把消息中所有影子模块名替换为真实模块名
    pub fn process(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (shadow, real) in &self.entries {
            out = out.replace(shadow.as_str(), real.as_str());
        }
        out
    }
}
