//! 通用常量.

/// 距离图像素语义.
pub mod pixel {
    /// 背景像素值. 两遍扫描永远不会修改背景像素.
    pub const BACKGROUND: i32 = 0;

    /// 像素是否是背景?
    #[inline]
    pub const fn is_background(p: i32) -> bool {
        p == BACKGROUND
    }

    /// 像素是否是前景? 加载后的前景像素为正的原始强度,
    /// 扫描后的前景像素为正的距离值.
    #[inline]
    pub const fn is_foreground(p: i32) -> bool {
        p > BACKGROUND
    }
}

/// 单通道颜色.
pub mod gray {
    /// 单通道黑色.
    pub const BLACK: u8 = 0b_0000_0000;

    /// 单通道暗灰色. 可视化时观测范围内最小的距离值从该亮度开始.
    pub const DARK_GRAY: u8 = 0b_0100_0000;

    /// 单通道白色.
    pub const WHITE: u8 = 0b_1111_1111;
}
