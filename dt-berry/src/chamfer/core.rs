//! 两遍距离变换的算法实现块.

use super::{causal4_backward, causal4_forward};
use crate::consts::pixel::is_foreground;
use crate::{FramedGrid, Idx2d};

/// 距离变换实现块.
impl FramedGrid {
    /// 第一遍扫描: 自上而下、自左而右.
    ///
    /// 每个前景像素被替换为 4 个因果邻居 (左上, 上, 右上, 左)
    /// 的最小值加一. 这些邻居要么在本遍中已被处理完毕, 要么属于零边框,
    /// 因此与背景相邻的像素必然收敛到 1. 扫描方向之外的邻居此时仍持有
    /// 原始强度值, 本遍不读取它们.
    ///
    /// # 注意
    ///
    /// 本遍依赖严格的行优先顺序, 不可重排.
    pub fn first_pass_distance(&mut self) {
        for pos in self.interior_pos_iter() {
            if is_foreground(self[pos]) {
                let m = self.causal_min(causal4_forward(pos));
                self[pos] = m + 1;
            }
        }
    }

    /// 第二遍扫描: 自下而上、自右而左.
    ///
    /// 每个前景像素取本遍 4 个因果邻居 (右, 左下, 下, 右下)
    /// 的最小值加一, 再与该像素第一遍的结果取较小者. 也就是说,
    /// 像素自身的第一遍值显式参与最小值竞争, 第二遍只会维持或减小像素值,
    /// 两遍扫描信任的邻居集合并不对称.
    ///
    /// 本遍同时用每个像素的最终值维护观测范围.
    pub fn second_pass_distance(&mut self) {
        for pos in self.interior_pos_iter_rev() {
            if is_foreground(self[pos]) {
                let candidate = self.causal_min(causal4_backward(pos)) + 1;
                let refined = candidate.min(self[pos]);
                self[pos] = refined;
                self.range_mut().observe(refined);
            }
        }
    }

    /// 完整的两遍距离变换.
    ///
    /// 第一遍必须完整结束后才能开始第二遍:
    /// 第二遍的正确性依赖第一遍的结果作为上界.
    #[inline]
    pub fn distance_transform(&mut self) {
        self.first_pass_distance();
        self.second_pass_distance();
    }

    /// 4 个因果邻居中的最小像素值.
    #[inline]
    fn causal_min(&self, neighbours: [Idx2d; 4]) -> i32 {
        // 邻居恰有 4 个, 不会是空序列, 可直接 unwrap.
        neighbours.into_iter().map(|pos| self[pos]).min().unwrap()
    }
}
