//! 网格镜像. 用于提取和复原扫描前后的像素数据.

use super::FramedGrid;

/// 一个拥有所有权的网格像素数据不透明镜像.
/// 用于临时保存网格 (包括零边框) 的像素值, 并在随后恢复.
///
/// 镜像只覆盖像素数据, 不包括强度范围信息.
///
/// 注意该结构是被设计来 **快速** 回填原数据的, 因此并不压缩原数据.
/// 若需要压缩的持久化存储, 见 [`super::CompactGrid`].
#[derive(Clone, Debug)]
pub struct GridMirror(pub(crate) Vec<i32>);

impl From<&FramedGrid> for GridMirror {
    fn from(value: &FramedGrid) -> Self {
        Self(value.as_row_major_vec())
    }
}
