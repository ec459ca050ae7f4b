//! 文本格式灰度图像加载.
//!
//! 格式: 头部为 4 个以空白分隔的整数 (行数, 列数, 声明最小值, 声明最大值),
//! 随后是 `rows * cols` 个以空白分隔的整数像素值, 按行优先排列.
//! 像素之后多余的词法单元会被忽略.

use crate::data::{FramedGrid, IntensityRange, LoadError};
use itertools::Itertools;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 从文件加载文本格式图像, 构建零边框网格.
///
/// 如果打开成功, 则返回 `Ok(FramedGrid)`, 否则返回 `Err`.
pub fn open<P: AsRef<Path>>(path: P) -> Result<FramedGrid, LoadError> {
    let mut file = File::open(path.as_ref()).map_err(LoadError::Io)?;
    let mut content = String::new();
    file.read_to_string(&mut content).map_err(LoadError::Io)?;
    parse(&content)
}

/// 从已读入内存的文本解析图像, 构建零边框网格.
///
/// 头部的声明范围只用于给观测范围的中点取值, 不会校验像素.
pub fn parse(content: &str) -> Result<FramedGrid, LoadError> {
    let mut tokens = content.split_ascii_whitespace();

    // 头部: 行数, 列数, 声明最小值, 声明最大值.
    let (rows, cols, lo, hi) = tokens.next_tuple().ok_or(LoadError::TruncatedHeader)?;
    let (rows, cols) = (parse_token(rows)?, parse_token(cols)?);
    let (lo, hi) = (parse_token(lo)?, parse_token(hi)?);
    if rows <= 0 || cols <= 0 {
        return Err(LoadError::BadShape(rows, cols));
    }

    // 尺寸已检查为正, 不会返回 `None`, 可直接 unwrap.
    let mut grid =
        FramedGrid::new(rows as usize, cols as usize, IntensityRange::new(lo, hi)).unwrap();
    grid.zero_fill();

    let expected = grid.rows() * grid.cols();
    let pixels: Vec<i32> = tokens
        .take(expected)
        .map(parse_token)
        .collect::<Result<_, _>>()?;
    grid.load(pixels)?;
    Ok(grid)
}

#[inline]
fn parse_token(token: &str) -> Result<i32, LoadError> {
    token
        .parse()
        .map_err(|_| LoadError::BadToken(token.to_string()))
}
