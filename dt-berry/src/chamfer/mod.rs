//! 两遍光栅扫描 (chamfer) 距离变换.

mod core;

use crate::Idx2d;

/// 获得第一遍扫描中 `(h, w)` 的 4 个因果邻居索引
/// (左上, 上, 右上, 左). 不检查越界.
#[inline]
pub(crate) fn causal4_forward((h, w): Idx2d) -> [Idx2d; 4] {
    [
        (h.wrapping_sub(1), w.wrapping_sub(1)),
        (h.wrapping_sub(1), w),
        (h.wrapping_sub(1), w.saturating_add(1)),
        (h, w.wrapping_sub(1)),
    ]
}

/// 获得第二遍 (倒序) 扫描中 `(h, w)` 的 4 个因果邻居索引
/// (右, 左下, 下, 右下). 不检查越界.
#[inline]
pub(crate) fn causal4_backward((h, w): Idx2d) -> [Idx2d; 4] {
    [
        (h, w.saturating_add(1)),
        (h.saturating_add(1), w.wrapping_sub(1)),
        (h.saturating_add(1), w),
        (h.saturating_add(1), w.saturating_add(1)),
    ]
}
