//! 通用文本图像数据加载器.
//!
//! 提供迭代器风格的数据集获取模式.

use super::text;
use crate::data::{FramedGrid, LoadError};
use std::path::{Path, PathBuf};

/// 文件名构造器. 接受数据集索引数, 获得文件名.
pub type FilenameBuilder = fn(u32) -> String;

/// 从指定索引、路径、文件名构造器来创建通用的文本图像加载器.
///
/// # 注意
///
/// 1. `path` 必须是目录, 否则程序 panic.
/// 2. `data` 的所有取值 `value` 必须在 `path` 下有形如 `builder(value)`
///    的文本图像文件, 否则加载器在迭代时会返回 `Result::Error`.
pub fn grid_loader<I: IntoIterator<Item = u32>, P: AsRef<Path>>(
    data: I,
    path: P,
    builder: FilenameBuilder,
) -> GridLoader {
    let path = path.as_ref().to_owned();
    assert!(path.is_dir());

    let mut data: Vec<u32> = data.into_iter().collect();
    data.reverse();

    GridLoader {
        path,
        data_rev: data,
        builder,
    }
}

/// 文本图像数据加载器, 并在内部自动转换文件名.
#[derive(Debug)]
pub struct GridLoader {
    path: PathBuf,
    data_rev: Vec<u32>,
    builder: FilenameBuilder,
}

impl Iterator for GridLoader {
    type Item = (u32, Result<FramedGrid, LoadError>);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.data_rev.pop()?;

        self.path.push((self.builder)(idx));
        let data = text::open(self.path.as_path());
        self.path.pop();

        Some((idx, data))
    }
}

impl ExactSizeIterator for GridLoader {
    #[inline]
    fn len(&self) -> usize {
        self.data_rev.len()
    }
}
