//! 图像的持久化存储.

use super::FramedGrid;
use crate::consts::gray::*;
use crate::consts::pixel::is_background;
use image::ImageResult;
use std::path::Path;

/// 表明一个可以通过 **可视化友好** 模式持久化存储的图像对象.
///
/// `ImgWriteVis` trait 的意图是, 图像将以 "可视化友好" 的方式保存,
/// 而不是 "as is" 的方式. 这意味着, 对于以距离值存储的网格,
/// 保存时会按观测范围把距离线性映射到肉眼较易区分的亮度区间,
/// 背景像素固定渲染为黑色.
pub trait ImgWriteVis {
    /// 按照一定的可视化规则将图片保存到 `path` 路径.
    fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()>;
}

/// 表明一个可以通过 **按原样** 模式持久化存储的图像对象.
///
/// `ImgWriteRaw` trait 的额外意图是, 图像将按原样保存.
/// 超出单通道表示能力的像素值会被截断到 `[0, 255]`.
pub trait ImgWriteRaw {
    /// 按原样将图片保存到 `path` 路径.
    fn save_raw<P: AsRef<Path>>(&self, path: P) -> ImageResult<()>;
}

/// 将一个距离值按观测范围映射为单通道亮度.
///
/// 观测范围退化为单点时, 所有前景都渲染为白色.
#[inline]
fn ramp(value: i32, lo: i32, hi: i32) -> u8 {
    if lo >= hi {
        return WHITE;
    }
    let v = value.clamp(lo, hi);
    let span = (hi - lo) as i64;
    let scaled = (v - lo) as i64 * (WHITE - DARK_GRAY) as i64 / span;
    DARK_GRAY + scaled as u8
}

/// 背景渲染为黑色, 前景按观测范围映射到暗灰至白色的亮度区间.
impl ImgWriteVis for FramedGrid {
    fn save<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let (rows, cols) = self.interior_shape();
        let (lo, hi) = (self.range().observed_min(), self.range().observed_max());
        let mut buf = image::GrayImage::new(cols as u32, rows as u32);
        for ((h, w), &pix) in self.interior().indexed_iter() {
            let gray = if is_background(pix) {
                BLACK
            } else {
                ramp(pix, lo, hi)
            };
            buf.put_pixel(w as u32, h as u32, image::Luma([gray]));
        }
        buf.save(path)
    }
}

/// 按原样存储, 越界值截断.
impl ImgWriteRaw for FramedGrid {
    fn save_raw<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let (rows, cols) = self.interior_shape();
        let mut buf = image::GrayImage::new(cols as u32, rows as u32);
        for ((h, w), &pix) in self.interior().indexed_iter() {
            buf.put_pixel(w as u32, h as u32, image::Luma([pix.clamp(0, 255) as u8]));
        }
        buf.save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::ramp;
    use crate::consts::gray::*;

    #[test]
    fn test_ramp_degenerate_range() {
        assert_eq!(ramp(1, 5, 5), WHITE);
        assert_eq!(ramp(9, 5, 5), WHITE);
    }

    #[test]
    fn test_ramp_endpoints() {
        assert_eq!(ramp(1, 1, 9), DARK_GRAY);
        assert_eq!(ramp(9, 1, 9), WHITE);

        // 范围外的值被截断.
        assert_eq!(ramp(0, 1, 9), DARK_GRAY);
        assert_eq!(ramp(100, 1, 9), WHITE);
    }

    #[test]
    fn test_ramp_monotonic() {
        let mut last = 0u8;
        for v in 1..=9 {
            let g = ramp(v, 1, 9);
            assert!(g >= last);
            last = g;
        }
    }
}
