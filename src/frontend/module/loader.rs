//! 源文件加载器
//!
//! 程序装配只通过 [`SourceLoader`] 访问文件：按路径规范化与读取。
//! [`FsLoader`] 读磁盘，[`MemoryLoader`] 用于测试和嵌入场景。

use std::collections::HashMap;
use std::io;
use std::path::{Component, Path, PathBuf};

/// 源文件访问接口
pub trait SourceLoader {
    /// 文件身份；同一文件的不同写法必须得到相同结果
    fn canonicalize(
        &self,
        path: &Path,
    ) -> PathBuf;

    /// 读取整个文件
    fn read(
        &self,
        path: &Path,
    ) -> io::Result<String>;
}

/// 文件系统加载器
#[derive(Debug, Clone, Copy, Default)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn canonicalize(
        &self,
        path: &Path,
    ) -> PathBuf {
        std::fs::canonicalize(path).unwrap_or_else(|_| normalize(path))
    }

    fn read(
        &self,
        path: &Path,
    ) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// 内存加载器
///
/// 路径只做词法规范化（去掉 `.`，折叠 `..`），不访问文件系统。
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    files: HashMap<PathBuf, String>,
}

impl MemoryLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加文件（链式）
    pub fn with_file(
        mut self,
        path: impl AsRef<Path>,
        text: impl Into<String>,
    ) -> Self {
        self.insert(path, text);
        self
    }

    /// 添加或替换文件
    pub fn insert(
        &mut self,
        path: impl AsRef<Path>,
        text: impl Into<String>,
    ) {
        self.files.insert(normalize(path.as_ref()), text.into());
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SourceLoader for MemoryLoader {
    fn canonicalize(
        &self,
        path: &Path,
    ) -> PathBuf {
        normalize(path)
    }

    fn read(
        &self,
        path: &Path,
    ) -> io::Result<String> {
        self.files.get(&normalize(path)).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }
}

/// 词法规范化路径
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("a/./b/../c.bp")), PathBuf::from("a/c.bp"));
        assert_eq!(normalize(Path::new("../x.bp")), PathBuf::from("../x.bp"));
        assert_eq!(normalize(Path::new("/../x.bp")), PathBuf::from("/x.bp"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn test_memory_loader() {
        let loader = MemoryLoader::new().with_file("src/main.bp", ".");
        assert_eq!(loader.read(Path::new("src/lib/../main.bp")).unwrap(), ".");
        assert_eq!(
            loader.canonicalize(Path::new("./src/main.bp")),
            PathBuf::from("src/main.bp")
        );
        let err = loader.read(Path::new("src/other.bp")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_fs_loader() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("main.bp");
        std::fs::write(&file, "5 .").unwrap();

        let loader = FsLoader;
        assert_eq!(loader.read(&file).unwrap(), "5 .");
        let dotted = dir.path().join(".").join("main.bp");
        assert_eq!(loader.canonicalize(&dotted), loader.canonicalize(&file));
        assert!(loader.read(&dir.path().join("missing.bp")).is_err());
    }
}
