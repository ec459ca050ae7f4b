use std::io::{Read, Write};
use std::ops::{Index, IndexMut};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;
use ndarray::{s, Array2, ArrayView2};

use crate::consts::pixel::BACKGROUND;
use crate::Idx2d;

mod error;
mod iter;
mod mirror;
mod range;
mod save;

pub use error::LoadError;
pub use iter::{InteriorIter, InteriorIterRev};
pub use mirror::GridMirror;
pub use range::IntensityRange;
pub use save::{ImgWriteRaw, ImgWriteVis};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 带一像素厚零边框的二维灰度图像网格.
///
/// 底层缓冲区为 `(rows + 2) x (cols + 2)` 的连续存储; 逻辑图像占据内部
/// `[1..=rows] x [1..=cols]`, 外围一圈是永久的零边框, 代表 "无穷远处的背景".
/// 像素值 `0` 为背景, 正值为前景 (加载后是原始强度, 扫描后是传播的距离值).
///
/// 这里有意把代码写死为 `Array2<i32>` 降低灵活性, 但使结构的意图更加明确.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FramedGrid {
    /// 底层数据, 含边框.
    data: Array2<i32>,

    /// 声明范围与观测范围.
    range: IntensityRange,
}

impl Index<Idx2d> for FramedGrid {
    type Output = i32;

    #[inline]
    fn index(&self, index: Idx2d) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<Idx2d> for FramedGrid {
    #[inline]
    fn index_mut(&mut self, index: Idx2d) -> &mut Self::Output {
        &mut self.data[index]
    }
}

impl FramedGrid {
    /// 创建逻辑尺寸为 `rows x cols` 的全零网格.
    ///
    /// `rows` 和 `cols` 必须为正, 否则返回 `None` (不进行任何分配).
    pub fn new(rows: usize, cols: usize, range: IntensityRange) -> Option<FramedGrid> {
        if rows == 0 || cols == 0 {
            return None;
        }
        Some(Self {
            data: Array2::zeros((rows + 2, cols + 2)),
            range,
        })
    }

    /// 将所有像素 (包括边框和内部) 置零, 以建立边框不变式. 幂等.
    #[inline]
    pub fn zero_fill(&mut self) {
        self.data.fill(BACKGROUND);
    }

    /// 将 `rows * cols` 个像素按行优先顺序写入内部区域. 边框保持不变.
    ///
    /// 如果 `pixels` 提供的像素不足, 则返回 [`LoadError::NotEnoughPixels`];
    /// 此时已消费的像素保留在网格中, 其余内部像素维持原值.
    /// 多余的像素不会被消费.
    pub fn load<I: IntoIterator<Item = i32>>(&mut self, pixels: I) -> Result<(), LoadError> {
        let (rows, cols) = self.interior_shape();
        let expected = rows * cols;
        let mut it = pixels.into_iter();
        let mut got = 0usize;
        for pos in self.interior_pos_iter() {
            match it.next() {
                Some(v) => {
                    self.data[pos] = v;
                    got += 1;
                }
                None => return Err(LoadError::NotEnoughPixels(expected, got)),
            }
        }
        Ok(())
    }

    /// 含边框的缓冲区形状 (行, 列).
    #[inline]
    pub fn framed_shape(&self) -> Idx2d {
        let &[h, w] = self.data.shape() else {
            unreachable!()
        };
        (h, w)
    }

    /// 逻辑图像 (内部区域) 的形状 (行, 列).
    #[inline]
    pub fn interior_shape(&self) -> Idx2d {
        let (h, w) = self.framed_shape();
        (h - 2, w - 2)
    }

    /// 获得逻辑图像的行数 (高).
    #[inline]
    pub fn rows(&self) -> usize {
        self.interior_shape().0
    }

    /// 获得逻辑图像的列数 (宽).
    #[inline]
    pub fn cols(&self) -> usize {
        self.interior_shape().1
    }

    /// 获取给定位置 (含边框坐标系) 的像素值. 越界时返回 `None`.
    #[inline]
    pub fn get(&self, pos: Idx2d) -> Option<&i32> {
        self.data.get(pos)
    }

    /// 判断一个索引是否位于零边框上.
    #[inline]
    pub fn is_border(&self, (h, w): Idx2d) -> bool {
        let (fh, fw) = self.framed_shape();
        h == 0 || h.saturating_add(1) == fh || w == 0 || w.saturating_add(1) == fw
    }

    /// 内部区域 (逻辑图像) 的只读视图.
    #[inline]
    pub fn interior(&self) -> ArrayView2<i32> {
        let (rows, cols) = self.interior_shape();
        self.data.slice(s![1..=rows, 1..=cols])
    }

    /// 以行优先规则 (自上而下, 自左而右) 迭代内部区域索引 (含边框坐标系).
    #[inline]
    pub fn interior_pos_iter(&self) -> InteriorIter {
        InteriorIter::new(self.interior_shape())
    }

    /// 以倒序 (自下而上, 自右而左) 迭代内部区域索引 (含边框坐标系).
    #[inline]
    pub fn interior_pos_iter_rev(&self) -> InteriorIterRev {
        InteriorIterRev::new(self.interior_shape())
    }

    /// 声明范围与观测范围.
    #[inline]
    pub fn range(&self) -> &IntensityRange {
        &self.range
    }

    #[inline]
    pub(crate) fn range_mut(&mut self) -> &mut IntensityRange {
        &mut self.range
    }

    /// 将全部像素 (含边框) 转化为行优先的序列化存储.
    pub fn as_row_major_vec(&self) -> Vec<i32> {
        let mut buf = Vec::with_capacity(self.data.len());
        buf.extend(self.data.iter());
        buf
    }

    /// 获取拥有所有权的像素镜像, 供以后可能的恢复.
    #[inline]
    pub fn mirror(&self) -> GridMirror {
        self.into()
    }

    /// 用 `mirror` 覆写像素数据. 范围信息保持不变.
    ///
    /// 如果镜像大小与缓冲区不符, 则程序 panic.
    pub fn resume(&mut self, mirror: &GridMirror) {
        assert_eq!(self.data.len(), mirror.0.len(), "镜像大小不符");
        for (r, w) in mirror.0.iter().zip(self.data.iter_mut()) {
            *w = *r;
        }
    }

    /// 压缩数据.
    pub fn compress(&self) -> CompactGrid {
        let raw = bincode::serialize(&self.as_row_major_vec()).expect("Serialization error");
        let mut e = ZlibEncoder::new(Vec::with_capacity(8), Compression::best());
        e.write_all(&raw).expect("Compression error");
        CompactGrid {
            buf: e.finish().expect("Compression error"),
            sh: self.framed_shape(),
            range: self.range,
        }
    }
}

/// 压缩存储的 [`FramedGrid`]; 不透明类型.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CompactGrid {
    /// 压缩的不透明字节流.
    buf: Vec<u8>,

    /// 含边框的形状.
    sh: Idx2d,

    /// 声明范围与观测范围.
    range: IntensityRange,
}

impl CompactGrid {
    /// 解压缩数据.
    pub fn decompress(self) -> FramedGrid {
        let Self {
            buf,
            sh: (h, w),
            range,
        } = self;
        let mut d = ZlibDecoder::new(buf.as_slice());
        let mut raw = Vec::with_capacity(8);
        d.read_to_end(&mut raw).expect("Decompression error");
        let data: Vec<i32> = bincode::deserialize(&raw).expect("Decompression error");
        debug_assert_eq!(data.len(), h * w);
        // 该操作不会生成 `Err`, 可直接 unwrap.
        let data = Array2::<i32>::from_shape_vec((h, w), data).unwrap();
        FramedGrid { data, range }
    }
}

#[cfg(test)]
mod tests {
    use super::{FramedGrid, IntensityRange, LoadError};

    fn small_grid() -> FramedGrid {
        FramedGrid::new(2, 3, IntensityRange::new(0, 9)).unwrap()
    }

    #[test]
    fn test_new_rejects_degenerate_shapes() {
        let range = IntensityRange::new(0, 9);
        assert!(FramedGrid::new(0, 3, range).is_none());
        assert!(FramedGrid::new(3, 0, range).is_none());
        assert!(FramedGrid::new(0, 0, range).is_none());
        assert!(FramedGrid::new(1, 1, range).is_some());
    }

    #[test]
    fn test_framed_shapes() {
        let g = small_grid();
        assert_eq!(g.framed_shape(), (4, 5));
        assert_eq!(g.interior_shape(), (2, 3));
        assert_eq!((g.rows(), g.cols()), (2, 3));
    }

    #[test]
    fn test_border_is_zero_after_new_and_load() {
        let mut g = small_grid();
        g.load([1, 2, 3, 4, 5, 6]).unwrap();

        let (fh, fw) = g.framed_shape();
        for h in 0..fh {
            for w in 0..fw {
                if g.is_border((h, w)) {
                    assert_eq!(g[(h, w)], 0, "边框像素 ({h}, {w}) 非零");
                }
            }
        }
    }

    #[test]
    fn test_load_row_major() {
        let mut g = small_grid();
        g.load([1, 2, 3, 4, 5, 6]).unwrap();

        assert_eq!(g[(1, 1)], 1);
        assert_eq!(g[(1, 2)], 2);
        assert_eq!(g[(1, 3)], 3);
        assert_eq!(g[(2, 1)], 4);
        assert_eq!(g[(2, 2)], 5);
        assert_eq!(g[(2, 3)], 6);
    }

    #[test]
    fn test_load_underflow() {
        let mut g = small_grid();
        let err = g.load([7, 8, 9, 10]).unwrap_err();
        assert!(matches!(err, LoadError::NotEnoughPixels(6, 4)));

        // 已消费的像素保留, 缺失处维持原值 (这里是零初始化).
        assert_eq!(g[(1, 1)], 7);
        assert_eq!(g[(1, 2)], 8);
        assert_eq!(g[(1, 3)], 9);
        assert_eq!(g[(2, 1)], 10);
        assert_eq!(g[(2, 2)], 0);
        assert_eq!(g[(2, 3)], 0);
    }

    #[test]
    fn test_zero_fill_idempotent() {
        let mut g = small_grid();
        g.load([1, 2, 3, 4, 5, 6]).unwrap();

        g.zero_fill();
        let once = g.as_row_major_vec();
        assert!(once.iter().all(|&p| p == 0));

        g.zero_fill();
        assert_eq!(once, g.as_row_major_vec());
    }

    #[test]
    fn test_mirror_resume_roundtrip() {
        let mut g = small_grid();
        g.load([1, 2, 3, 4, 5, 6]).unwrap();

        let m = g.mirror();
        g.zero_fill();
        assert_eq!(g[(1, 1)], 0);

        g.resume(&m);
        assert_eq!(g.as_row_major_vec(), m.0);
        assert_eq!(g[(2, 3)], 6);
    }

    #[test]
    fn test_compress_roundtrip() {
        let mut g = small_grid();
        g.load([1, 0, 3, 0, 5, 6]).unwrap();

        let back = g.clone().compress().decompress();
        assert_eq!(back.framed_shape(), g.framed_shape());
        assert_eq!(back.as_row_major_vec(), g.as_row_major_vec());
        assert_eq!(back.range(), g.range());
    }

    #[test]
    fn test_interior_view() {
        let mut g = small_grid();
        g.load([1, 2, 3, 4, 5, 6]).unwrap();

        let interior: Vec<i32> = g.interior().iter().copied().collect();
        assert_eq!(interior, vec![1, 2, 3, 4, 5, 6]);
    }
}
