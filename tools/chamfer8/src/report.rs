//! 结果输出.

use dt_berry::FramedGrid;
use std::io::{self, Write};

/// 将一遍扫描后的网格内部以定宽格式写入 `w`.
///
/// 背景像素渲染为两个空格; `1..=9` 渲染为一个空格加数字;
/// 其余值按十进制原样输出, 不做对齐.
pub fn pretty_print<W: Write>(grid: &FramedGrid, pass: u32, w: &mut W) -> io::Result<()> {
    writeln!(w, "Result of Pass {pass}: ")?;
    for row in grid.interior().outer_iter() {
        for &pix in row.iter() {
            match pix {
                0 => write!(w, "  ")?,
                1..=9 => write!(w, " {pix}")?,
                _ => write!(w, "{pix}")?,
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

/// 最终结构化输出.
///
/// 第一行为 4 个整数 (行数, 列数, 观测最小值, 观测最大值),
/// 随后逐行输出内部像素 (背景以字面 `0` 输出), 每个值后跟一个空格.
pub fn print_final<W: Write>(grid: &FramedGrid, w: &mut W) -> io::Result<()> {
    let (rows, cols) = grid.interior_shape();
    let range = grid.range();
    writeln!(
        w,
        "{rows} {cols} {} {}",
        range.observed_min(),
        range.observed_max()
    )?;
    for row in grid.interior().outer_iter() {
        for &pix in row.iter() {
            write!(w, "{pix} ")?;
        }
        writeln!(w)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{pretty_print, print_final};
    use dt_berry::{FramedGrid, IntensityRange};

    fn render<F: Fn(&FramedGrid, &mut Vec<u8>) -> std::io::Result<()>>(
        grid: &FramedGrid,
        f: F,
    ) -> String {
        let mut buf = Vec::new();
        f(grid, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_pretty_print_widths() {
        let mut g = FramedGrid::new(1, 3, IntensityRange::new(0, 9)).unwrap();
        g.load([0, 5, 12]).unwrap();

        let text = render(&g, |g, w| pretty_print(g, 1, w));
        assert_eq!(text, "Result of Pass 1: \n   512\n");
    }

    #[test]
    fn test_pretty_print_pass_label() {
        let mut g = FramedGrid::new(1, 1, IntensityRange::new(0, 9)).unwrap();
        g.load([3]).unwrap();

        let text = render(&g, |g, w| pretty_print(g, 2, w));
        assert_eq!(text, "Result of Pass 2: \n 3\n");
    }

    #[test]
    fn test_print_final_plus_shape() {
        let mut g = FramedGrid::new(3, 3, IntensityRange::new(1, 1)).unwrap();
        g.load([0, 1, 0, 1, 1, 1, 0, 1, 0]).unwrap();
        g.distance_transform();

        let text = render(&g, |g, w| print_final(g, w));
        assert_eq!(text, "3 3 1 1\n0 1 0 \n1 1 1 \n0 1 0 \n");
    }

    #[test]
    fn test_print_final_echoes_dimensions() {
        let mut g = FramedGrid::new(2, 4, IntensityRange::new(0, 8)).unwrap();
        g.load([1, 1, 1, 1, 1, 1, 1, 1]).unwrap();
        g.distance_transform();

        let text = render(&g, |g, w| print_final(g, w));
        assert!(text.starts_with("2 4 "));
        assert_eq!(text.lines().count(), 3);
    }
}
