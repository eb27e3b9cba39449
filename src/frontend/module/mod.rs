//! 源文件加载
//!
//! 提供统一的源文件读取与 include 路径解析接口。
//!
//! # 模块结构
//!
//! - [`loader`] - 源文件加载器（文件系统 / 内存）
//! - [`resolver`] - include 路径解析与去重

pub mod loader;
pub mod resolver;

pub use loader::{FsLoader, MemoryLoader, SourceLoader};
pub use resolver::{IncludeResolver, Opened};

use std::path::{Path, PathBuf};

/// 已读入的源文件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// 打开时使用的路径（用于诊断）
    pub path: PathBuf,
    /// 规范化路径，作为文件身份用于去重
    pub canonical: PathBuf,
    /// 源代码
    pub text: String,
}

impl SourceFile {
    pub fn new(
        path: PathBuf,
        canonical: PathBuf,
        text: String,
    ) -> Self {
        Self {
            path,
            canonical,
            text,
        }
    }

    /// include 相对的目录
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or(Path::new(""))
    }
}
