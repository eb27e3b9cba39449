//! include 路径解析
//!
//! # 搜索顺序
//!
//! 1. 相对 include 所在文件的目录
//! 2. 配置的 include 搜索路径（按顺序）
//!
//! 已经装配过的文件（按规范化路径判断）不会再次读取。

use std::collections::HashSet;
use std::io;
use std::path::{Path, PathBuf};

use super::{SourceFile, SourceLoader};
use crate::frontend::core::parser::Include;

/// include 解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Opened {
    /// 新文件
    Fresh(SourceFile),
    /// 已装配过的文件（规范化路径）
    Seen(PathBuf),
}

/// include 路径解析器
pub struct IncludeResolver<'a> {
    loader: &'a dyn SourceLoader,
    include_paths: &'a [PathBuf],
}

impl<'a> IncludeResolver<'a> {
    pub fn new(
        loader: &'a dyn SourceLoader,
        include_paths: &'a [PathBuf],
    ) -> Self {
        Self {
            loader,
            include_paths,
        }
    }

    /// 候选路径：先是相对当前文件的路径，然后是各搜索路径
    pub fn candidates(
        &self,
        include: &Include,
    ) -> Vec<PathBuf> {
        let mut candidates = vec![include.path.clone()];
        if Path::new(&include.target).is_relative() {
            candidates.extend(
                self.include_paths
                    .iter()
                    .map(|dir| dir.join(&include.target)),
            );
        }
        candidates
    }

    /// 打开 include 指向的文件
    ///
    /// 返回第一个可读的候选；全部失败时返回第一个候选的错误。
    pub fn open(
        &self,
        include: &Include,
        seen: &HashSet<PathBuf>,
    ) -> io::Result<Opened> {
        let mut first_error = None;
        for candidate in self.candidates(include) {
            let canonical = self.loader.canonicalize(&candidate);
            if seen.contains(&canonical) {
                return Ok(Opened::Seen(canonical));
            }
            match self.loader.read(&candidate) {
                Ok(text) => {
                    return Ok(Opened::Fresh(SourceFile::new(candidate, canonical, text)));
                }
                Err(err) => {
                    tracing::trace!("include candidate {} failed: {}", candidate.display(), err);
                    first_error.get_or_insert(err);
                }
            }
        }
        Err(first_error
            .unwrap_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no include candidates")))
    }
}
