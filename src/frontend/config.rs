//! 编译配置
//!
//! 管理程序装配选项：源文件扩展名、include 搜索路径、include 深度限制等。

use super::core::parser::DEFAULT_MAX_NESTING_DEPTH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 默认源文件扩展名
pub const DEFAULT_EXTENSION: &str = "bp";

/// 默认 include 深度限制
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 64;

fn default_extension() -> String {
    DEFAULT_EXTENSION.to_string()
}

fn default_max_include_depth() -> usize {
    DEFAULT_MAX_INCLUDE_DEPTH
}

fn default_max_nesting_depth() -> usize {
    DEFAULT_MAX_NESTING_DEPTH
}

fn default_true() -> bool {
    true
}

/// 编译配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompileConfig {
    /// 源文件扩展名（不含点）
    #[serde(default = "default_extension")]
    pub extension: String,

    /// include 搜索路径，相对当前文件找不到时依次尝试
    #[serde(default)]
    pub include_paths: Vec<PathBuf>,

    /// include 链的最大深度，超过的文件被跳过
    #[serde(default = "default_max_include_depth")]
    pub max_include_depth: usize,

    /// 表达式与代码块的最大嵌套层数
    #[serde(default = "default_max_nesting_depth")]
    pub max_nesting_depth: usize,

    /// 被 include 的文件中残留顶层代码时是否警告
    #[serde(default = "default_true")]
    pub warn_trailing_code: bool,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            include_paths: Vec::new(),
            max_include_depth: DEFAULT_MAX_INCLUDE_DEPTH,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            warn_trailing_code: true,
        }
    }
}

impl CompileConfig {
    /// 创建默认配置
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置源文件扩展名
    #[inline]
    pub fn with_extension(
        mut self,
        extension: impl Into<String>,
    ) -> Self {
        self.extension = extension.into();
        self
    }

    /// 添加 include 搜索路径
    #[inline]
    pub fn add_include_path(
        mut self,
        path: PathBuf,
    ) -> Self {
        self.include_paths.push(path);
        self
    }

    /// 设置 include 深度限制
    #[inline]
    pub fn with_max_include_depth(
        mut self,
        depth: usize,
    ) -> Self {
        self.max_include_depth = depth;
        self
    }

    /// 设置最大嵌套层数
    pub fn with_max_nesting_depth(
        mut self,
        depth: usize,
    ) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    /// 开启/关闭残留代码警告
    #[inline]
    pub fn warn_trailing_code(
        mut self,
        warn: bool,
    ) -> Self {
        self.warn_trailing_code = warn;
        self
    }

    /// 检查路径是否带有配置的扩展名
    pub fn has_source_extension(
        &self,
        path: &Path,
    ) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }

    /// 用另一份配置中的非默认值覆盖当前值，include 路径追加在后
    pub fn merge(
        mut self,
        other: CompileConfig,
    ) -> Self {
        if other.extension != DEFAULT_EXTENSION {
            self.extension = other.extension;
        }
        if other.max_include_depth != DEFAULT_MAX_INCLUDE_DEPTH {
            self.max_include_depth = other.max_include_depth;
        }
        if other.max_nesting_depth != DEFAULT_MAX_NESTING_DEPTH {
            self.max_nesting_depth = other.max_nesting_depth;
        }
        if !other.warn_trailing_code {
            self.warn_trailing_code = false;
        }
        self.include_paths.extend(other.include_paths);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CompileConfig::new();
        assert_eq!(config.extension, "bp");
        assert_eq!(config.max_include_depth, 64);
        assert_eq!(config.max_nesting_depth, 128);
        assert!(config.warn_trailing_code);
        assert!(config.include_paths.is_empty());
    }

    #[test]
    fn test_extension_check() {
        let config = CompileConfig::new();
        assert!(config.has_source_extension(Path::new("dir/main.bp")));
        assert!(!config.has_source_extension(Path::new("main.b")));
        assert!(!config.has_source_extension(Path::new("bp")));
        let custom = config.with_extension("bpl");
        assert!(custom.has_source_extension(Path::new("main.bpl")));
    }

    #[test]
    fn test_partial_toml() {
        let config: CompileConfig = toml::from_str("include_paths = [\"lib\"]").unwrap();
        assert_eq!(config.extension, "bp");
        assert_eq!(config.include_paths, vec![PathBuf::from("lib")]);
    }

    #[test]
    fn test_merge() {
        let base = CompileConfig::new().add_include_path(PathBuf::from("a"));
        let project = CompileConfig::new()
            .with_max_include_depth(8)
            .with_max_nesting_depth(32)
            .add_include_path(PathBuf::from("b"));
        let merged = base.merge(project);
        assert_eq!(merged.max_include_depth, 8);
        assert_eq!(merged.max_nesting_depth, 32);
        assert_eq!(
            merged.include_paths,
            vec![PathBuf::from("a"), PathBuf::from("b")]
        );
    }
}
