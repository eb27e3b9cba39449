//! 编译器入口
//!
//! 包装程序装配流水线，把诊断按类别归入 [`CompileError`]。

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::config::CompileConfig;
use super::core::lexer::{tokenize, Token};
use super::module::{FsLoader, SourceFile, SourceLoader};
use super::pipeline::{Pipeline, Program};
use crate::util::diagnostic::{Diagnostic, ErrorCategory};

/// 编译器
///
/// # 示例
///
/// ```
/// use brainplus::frontend::{CompileConfig, Compiler};
///
/// let mut compiler = Compiler::new(CompileConfig::new());
/// let program = compiler.compile_source("main.bp", "5 + 3 .").unwrap();
/// assert_eq!(program.main.unwrap().to_string(), "(5)+(3)\n.");
/// ```
pub struct Compiler {
    /// 编译配置
    config: CompileConfig,
    /// 源文件加载器
    loader: Box<dyn SourceLoader>,
    /// 上一次编译的警告
    warnings: Vec<String>,
}

impl fmt::Debug for Compiler {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Compiler")
            .field("config", &self.config)
            .field("warnings", &self.warnings)
            .finish()
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(CompileConfig::default())
    }
}

impl Compiler {
    /// 创建读取文件系统的编译器
    #[inline]
    pub fn new(config: CompileConfig) -> Self {
        Self::with_loader(config, FsLoader)
    }

    /// 使用自定义加载器创建编译器
    pub fn with_loader(
        config: CompileConfig,
        loader: impl SourceLoader + 'static,
    ) -> Self {
        Self {
            config,
            loader: Box::new(loader),
            warnings: Vec::new(),
        }
    }

    /// 获取编译配置
    #[inline]
    pub fn config(&self) -> &CompileConfig {
        &self.config
    }

    /// 上一次编译产生的警告
    #[inline]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// 编译入口文件及其 include 的所有文件
    pub fn compile_file(
        &mut self,
        path: &Path,
    ) -> Result<Program, CompileError> {
        debug!("compiling {}", path.display());
        let mut pipeline = Pipeline::new(&self.config, self.loader.as_ref());
        let result = pipeline.run(path);
        self.warnings = pipeline.warnings().to_vec();
        result.map_err(CompileError::from)
    }

    /// 编译内存中的入口源码
    ///
    /// `name` 用于诊断，include 相对它的目录通过加载器查找。
    pub fn compile_source(
        &mut self,
        name: &str,
        source: &str,
    ) -> Result<Program, CompileError> {
        debug!("compiling source {} ({} bytes)", name, source.len());
        let path = PathBuf::from(name);
        let entry = SourceFile::new(
            path.clone(),
            self.loader.canonicalize(&path),
            source.to_string(),
        );
        let mut pipeline = Pipeline::new(&self.config, self.loader.as_ref());
        let result = pipeline.run_source(entry);
        self.warnings = pipeline.warnings().to_vec();
        result.map_err(CompileError::from)
    }

    /// 只进行词法分析
    pub fn lex(
        &self,
        source: &str,
    ) -> Result<Vec<Token>, CompileError> {
        tokenize(source).map_err(CompileError::from)
    }
}

/// 编译错误
///
/// 按诊断类别区分；致命错误只有一个。
#[derive(Debug, Clone, Error)]
pub enum CompileError {
    /// 词法错误
    #[error("{0}")]
    Lex(Diagnostic),

    /// 语法错误
    #[error("{0}")]
    Syntax(Diagnostic),

    /// 定义冲突、宏循环、未知标识符等
    #[error("{0}")]
    Semantic(Diagnostic),

    /// 源文件无法打开或扩展名错误
    #[error("{0}")]
    Environment(Diagnostic),
}

impl From<Diagnostic> for CompileError {
    fn from(diagnostic: Diagnostic) -> Self {
        match diagnostic.category {
            ErrorCategory::Lexer => CompileError::Lex(diagnostic),
            ErrorCategory::Parser => CompileError::Syntax(diagnostic),
            ErrorCategory::Semantic => CompileError::Semantic(diagnostic),
            ErrorCategory::Io => CompileError::Environment(diagnostic),
        }
    }
}

impl CompileError {
    /// 获取诊断信息
    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            CompileError::Lex(d)
            | CompileError::Syntax(d)
            | CompileError::Semantic(d)
            | CompileError::Environment(d) => d,
        }
    }

    /// 错误码
    #[inline]
    pub fn code(&self) -> &'static str {
        self.diagnostic().code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::module::MemoryLoader;

    #[test]
    fn test_error_categories() {
        let mut compiler = Compiler::default();
        assert!(matches!(
            compiler.compile_source("main.bp", "'"),
            Err(CompileError::Lex(_))
        ));
        assert!(matches!(
            compiler.compile_source("main.bp", "("),
            Err(CompileError::Syntax(_))
        ));
        assert!(matches!(
            compiler.compile_source("main.bp", "loop"),
            Err(CompileError::Semantic(_))
        ));
        assert!(matches!(
            compiler.compile_file(Path::new("main.b")),
            Err(CompileError::Environment(_))
        ));
    }

    #[test]
    fn test_error_display() {
        let mut compiler = Compiler::default();
        let err = compiler.compile_source("main.bp", ". loop").unwrap_err();
        assert_eq!(err.code(), "E2003");
        assert_eq!(
            err.to_string(),
            "error[E2003]: Unknown identifier \"loop\" (main.bp:1:3)"
        );
    }

    #[test]
    fn test_compile_source_with_includes() {
        let loader = MemoryLoader::new().with_file("src/lib.bp", "define ONE 1 enddef");
        let mut compiler = Compiler::with_loader(CompileConfig::new(), loader);
        let program = compiler
            .compile_source("src/main.bp", "include \"lib.bp\" + ONE")
            .unwrap();
        assert_eq!(program.files.len(), 2);
        assert_eq!(program.main.unwrap().to_string(), "+(1)");
        assert!(compiler.warnings().is_empty());
    }

    #[test]
    fn test_lex() {
        let tokens = Compiler::default().lex("@5").unwrap();
        assert_eq!(tokens.len(), 3);
        assert!(tokens[2].kind.is_eof());
    }
}
