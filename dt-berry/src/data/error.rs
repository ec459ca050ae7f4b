//! 运行时错误.

/// 加载图像时的运行时错误.
#[derive(Debug)]
pub enum LoadError {
    /// 底层 I/O 错误.
    Io(std::io::Error),

    /// 无法解析为整数的词法单元.
    BadToken(String),

    /// 头部不完整 (不足 4 个整数).
    TruncatedHeader,

    /// 图像尺寸非法. 两个参数分别是声明的行数和列数,
    /// 其中至少一个不是正数.
    BadShape(i32, i32),

    /// 像素数量不足.
    ///
    /// 第一个参数代表期望的像素个数, 第二个参数代表实际消费的个数.
    NotEnoughPixels(usize, usize),
}
