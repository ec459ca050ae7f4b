use crate::Idx2d;

/// 内部区域 `[1..=rows] x [1..=cols]` 的行优先索引迭代器 (自上而下, 自左而右).
///
/// 虽然 `flat_map` 组合子也能实现相同的功能, 但手写迭代器对象更小,
/// 且能与 [`InteriorIterRev`] 保持对称的实现形式.
#[derive(Debug)]
pub struct InteriorIter {
    cur_h: usize,
    cur_w: usize,
    rows: usize,
    cols: usize,
}

impl InteriorIter {
    #[inline]
    pub(crate) fn new((rows, cols): Idx2d) -> Self {
        Self {
            cur_h: 1,
            cur_w: 1,
            rows,
            cols,
        }
    }
}

impl Iterator for InteriorIter {
    type Item = Idx2d;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rows == 0 || self.cols == 0 || self.cur_h > self.rows {
            return None;
        }
        let ret_pos = (self.cur_h, self.cur_w);
        if self.cur_w == self.cols {
            self.cur_w = 1;
            self.cur_h += 1;
        } else {
            self.cur_w += 1;
        }
        Some(ret_pos)
    }
}

/// 内部区域 `[1..=rows] x [1..=cols]` 的倒序索引迭代器 (自下而上, 自右而左).
///
/// 第二遍扫描依赖该顺序: 此时一个像素的 "因果" 邻居恰好是本遍已处理过的
/// 右侧与下方像素.
#[derive(Debug)]
pub struct InteriorIterRev {
    cur_h: usize,
    cur_w: usize,
    cols: usize,
}

impl InteriorIterRev {
    #[inline]
    pub(crate) fn new((rows, cols): Idx2d) -> Self {
        Self {
            cur_h: if cols == 0 { 0 } else { rows },
            cur_w: cols,
            cols,
        }
    }
}

impl Iterator for InteriorIterRev {
    type Item = Idx2d;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cur_h == 0 {
            return None;
        }
        let ret_pos = (self.cur_h, self.cur_w);
        if self.cur_w == 1 {
            self.cur_w = self.cols;
            self.cur_h -= 1;
        } else {
            self.cur_w -= 1;
        }
        Some(ret_pos)
    }
}
