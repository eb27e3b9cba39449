//! 程序装配流水线
//!
//! 把入口文件及其 include 的所有文件装配成一个 [`Program`]。各阶段对整个
//! 程序执行，而不是逐文件执行：
//!
//! 1. 发现：按广度优先读入全部 include 文件（按规范化路径去重）
//! 2. 收集所有文件的 define
//! 3. 展开 define（检测循环）
//! 4. 收集所有文件的函数
//! 5. 校验 define 与函数体中的标识符
//! 6. 解析入口文件的顶层代码
//!
//! 每个文件持有自己的词法分析器，阶段之间从上次停下的位置继续。

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;

use super::config::CompileConfig;
use super::core::lexer::{Keyword, Lexer, TokenKind};
use super::core::macros::resolve_defines;
use super::core::parser::{Include, Node, ParserState};
use super::core::resolve::{validate_calls, validate_symbols};
use super::core::symbols::SymbolTable;
use super::module::{IncludeResolver, Opened, SourceFile, SourceLoader};
use crate::util::diagnostic::{Diagnostic, ErrorCodeDefinition};

/// 流水线状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// 空闲状态
    Idle,
    /// 读入 include 文件
    Discovering,
    /// 收集 define
    Defining,
    /// 展开 define
    ResolvingMacros,
    /// 收集函数
    CollectingFunctions,
    /// 标识符校验
    Validating,
    /// 解析入口代码
    ParsingMain,
    /// 装配完成
    Completed,
    /// 装配失败
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            PipelineState::Idle => write!(f, "idle"),
            PipelineState::Discovering => write!(f, "discovering"),
            PipelineState::Defining => write!(f, "defining"),
            PipelineState::ResolvingMacros => write!(f, "resolving macros"),
            PipelineState::CollectingFunctions => write!(f, "collecting functions"),
            PipelineState::Validating => write!(f, "validating"),
            PipelineState::ParsingMain => write!(f, "parsing main"),
            PipelineState::Completed => write!(f, "completed"),
            PipelineState::Failed => write!(f, "failed"),
        }
    }
}

/// 装配结果，交给代码生成
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Program {
    /// 参与装配的文件，入口文件在前
    pub files: Vec<PathBuf>,
    /// 所有 include 指令（含被跳过的）
    pub includes: Vec<Include>,
    /// 全局 define / 函数表（define 已展开）
    pub symbols: SymbolTable,
    /// 入口文件的顶层代码
    pub main: Option<Node>,
}

/// 参与装配的单个文件
struct Unit {
    path: PathBuf,
    dir: PathBuf,
    lexer: Lexer,
}

impl Unit {
    fn open(file: SourceFile) -> Result<Self, Diagnostic> {
        let dir = file.dir().to_path_buf();
        let mut lexer = Lexer::new(&file.text);
        lexer
            .next_token()
            .map_err(|e| e.in_file(file.path.display().to_string()))?;
        Ok(Self {
            path: file.path,
            dir,
            lexer,
        })
    }

    fn name(&self) -> String {
        self.path.display().to_string()
    }
}

/// 程序装配流水线
pub struct Pipeline<'a> {
    /// 当前状态
    state: PipelineState,
    /// 配置
    config: &'a CompileConfig,
    /// 源文件加载器
    loader: &'a dyn SourceLoader,
    /// 警告消息
    warnings: Vec<String>,
    /// 各阶段耗时
    phase_durations: Vec<(PipelineState, u128)>,
}

impl fmt::Debug for Pipeline<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("warnings", &self.warnings.len())
            .finish()
    }
}

impl<'a> Pipeline<'a> {
    /// 创建新流水线
    pub fn new(
        config: &'a CompileConfig,
        loader: &'a dyn SourceLoader,
    ) -> Self {
        Self {
            state: PipelineState::Idle,
            config,
            loader,
            warnings: Vec::new(),
            phase_durations: Vec::new(),
        }
    }

    /// 获取当前状态
    #[inline]
    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// 本次装配产生的警告
    #[inline]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// 各阶段耗时（微秒）
    #[inline]
    pub fn phase_durations(&self) -> &[(PipelineState, u128)] {
        &self.phase_durations
    }

    /// 打开入口文件
    ///
    /// 扩展名不对或无法读取是致命错误。
    pub fn open_entry(
        &self,
        path: &Path,
    ) -> Result<SourceFile, Diagnostic> {
        let name = path.display().to_string();
        if !self.config.has_source_extension(path) {
            return Err(
                ErrorCodeDefinition::wrong_extension(&name, &self.config.extension)
                    .build()
                    .in_file(name),
            );
        }
        let text = self.loader.read(path).map_err(|err| {
            ErrorCodeDefinition::cannot_open_source(&name, &err.to_string())
                .build()
                .in_file(name.clone())
        })?;
        Ok(SourceFile::new(
            path.to_path_buf(),
            self.loader.canonicalize(path),
            text,
        ))
    }

    /// 装配磁盘上的入口文件
    pub fn run(
        &mut self,
        entry: &Path,
    ) -> Result<Program, Diagnostic> {
        let result = self.open_entry(entry).and_then(|file| self.assemble(file));
        self.finish(result)
    }

    /// 装配已读入的入口文件
    pub fn run_source(
        &mut self,
        entry: SourceFile,
    ) -> Result<Program, Diagnostic> {
        let result = self.assemble(entry);
        self.finish(result)
    }

    /// 重置流水线状态
    pub fn reset(&mut self) {
        self.state = PipelineState::Idle;
        self.warnings.clear();
        self.phase_durations.clear();
    }

    fn finish(
        &mut self,
        result: Result<Program, Diagnostic>,
    ) -> Result<Program, Diagnostic> {
        match &result {
            Ok(program) => {
                self.state = PipelineState::Completed;
                tracing::info!(
                    "assembled {} file(s): {} define(s), {} function(s)",
                    program.files.len(),
                    program.symbols.define_count(),
                    program.symbols.function_count()
                );
            }
            Err(err) => {
                tracing::debug!("assembly failed while {}: {}", self.state, err);
                self.state = PipelineState::Failed;
            }
        }
        result
    }

    fn enter(
        &mut self,
        state: PipelineState,
    ) -> Instant {
        tracing::debug!("pipeline: {}", state);
        self.state = state;
        Instant::now()
    }

    fn leave(
        &mut self,
        start: Instant,
    ) {
        self.phase_durations
            .push((self.state, start.elapsed().as_micros()));
    }

    fn warn(
        &mut self,
        message: String,
    ) {
        tracing::warn!("{}", message);
        self.warnings.push(message);
    }

    fn assemble(
        &mut self,
        entry: SourceFile,
    ) -> Result<Program, Diagnostic> {
        let mut symbols = SymbolTable::new();
        let max_depth = self.config.max_nesting_depth;

        let start = self.enter(PipelineState::Discovering);
        let (mut units, includes) = self.discover(entry)?;
        self.leave(start);

        let start = self.enter(PipelineState::Defining);
        for unit in &mut units {
            loop {
                let define = ParserState::new(&mut unit.lexer, &symbols, &unit.dir)
                    .with_max_depth(max_depth)
                    .parse_define()
                    .map_err(|e| e.in_file(unit.name()))?;
                let Some(define) = define else {
                    break;
                };
                symbols.insert_define(define, &unit.path);
            }
        }
        self.leave(start);

        let start = self.enter(PipelineState::ResolvingMacros);
        resolve_defines(&mut symbols)?;
        self.leave(start);

        let start = self.enter(PipelineState::CollectingFunctions);
        for unit in &mut units {
            loop {
                let function = ParserState::new(&mut unit.lexer, &symbols, &unit.dir)
                    .with_max_depth(max_depth)
                    .parse_function()
                    .map_err(|e| e.in_file(unit.name()))?;
                let Some(function) = function else {
                    break;
                };
                symbols.insert_function(function, &unit.path);
            }
        }
        self.leave(start);

        // directives after code in an included file would be silently dropped
        for unit in units.iter().skip(1) {
            let token = unit.lexer.current();
            if matches!(
                token.kind,
                TokenKind::Keyword(Keyword::Include | Keyword::Define)
            ) {
                return Err(ErrorCodeDefinition::unexpected_token(&token.kind.describe())
                    .at(token.location)
                    .build()
                    .in_file(unit.name()));
            }
        }

        if self.config.warn_trailing_code {
            let trailing: Vec<String> = units
                .iter()
                .skip(1)
                .filter(|unit| !unit.lexer.current().kind.is_eof())
                .map(|unit| {
                    format!(
                        "ignoring top-level code in included file {} at {}",
                        unit.name(),
                        unit.lexer.current().location
                    )
                })
                .collect();
            for message in trailing {
                self.warn(message);
            }
        }

        let start = self.enter(PipelineState::Validating);
        validate_symbols(&symbols)?;
        self.leave(start);

        let start = self.enter(PipelineState::ParsingMain);
        let Some(main) = units.first_mut() else {
            return Ok(Program {
                symbols,
                includes,
                ..Program::default()
            });
        };
        let body = ParserState::new(&mut main.lexer, &symbols, &main.dir)
            .with_max_depth(max_depth)
            .parse_code()
            .map_err(|e| e.in_file(main.name()))?;
        if let Some(body) = &body {
            validate_calls(&symbols, body, &main.path)?;
        }
        self.leave(start);

        Ok(Program {
            files: units.into_iter().map(|unit| unit.path).collect(),
            includes,
            symbols,
            main: body,
        })
    }

    /// 广度优先读入入口文件与其 include 的文件
    fn discover(
        &mut self,
        entry: SourceFile,
    ) -> Result<(Vec<Unit>, Vec<Include>), Diagnostic> {
        let no_symbols = SymbolTable::new();
        let config = self.config;
        let resolver = IncludeResolver::new(self.loader, &config.include_paths);

        let mut units = Vec::new();
        let mut includes = Vec::new();
        let mut seen = HashSet::from([entry.canonical.clone()]);
        let mut queue = VecDeque::from([(entry, 0usize)]);

        while let Some((file, depth)) = queue.pop_front() {
            let mut unit = Unit::open(file)?;
            loop {
                let include = ParserState::new(&mut unit.lexer, &no_symbols, &unit.dir)
                    .parse_include()
                    .map_err(|e| e.in_file(unit.name()))?;
                let Some(include) = include else {
                    break;
                };
                includes.push(include.clone());

                let target = include.path.display().to_string();
                if depth + 1 > config.max_include_depth {
                    self.warn(format!(
                        "skipping include \"{}\" at {}:{}: include depth exceeds {}",
                        include.target,
                        unit.name(),
                        include.location,
                        config.max_include_depth
                    ));
                    continue;
                }
                if !config.has_source_extension(&include.path) {
                    self.warn(format!(
                        "skipping include {} at {}:{}: not a .{} file",
                        target,
                        unit.name(),
                        include.location,
                        config.extension
                    ));
                    continue;
                }
                match resolver.open(&include, &seen) {
                    Ok(Opened::Fresh(file)) => {
                        tracing::debug!("discovered {}", file.path.display());
                        seen.insert(file.canonical.clone());
                        queue.push_back((file, depth + 1));
                    }
                    Ok(Opened::Seen(canonical)) => {
                        tracing::debug!("{} already included", canonical.display());
                    }
                    Err(err) => {
                        self.warn(format!(
                            "skipping include {} at {}:{}: {}",
                            target,
                            unit.name(),
                            include.location,
                            err
                        ));
                    }
                }
            }
            units.push(unit);
        }

        Ok((units, includes))
    }
}
