//! 程序运行函数.

use crate::report;
use dt_berry::dataset::text;
use dt_berry::{FramedGrid, LoadError};
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use utils::loader;

/// 运行过程中可能出现的错误.
#[derive(Debug)]
pub enum RunError {
    /// 输入图像加载错误.
    Load(LoadError),

    /// 输出目标 I/O 错误.
    Io(io::Error),
}

impl From<LoadError> for RunError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// 两遍扫描并输出: 每遍结束后向 `trace` 写一个定宽渲染块,
/// 全部结束后向 `out` 写最终结果.
fn transform_and_report<O: Write, T: Write>(
    grid: &mut FramedGrid,
    out: &mut O,
    trace: &mut T,
) -> io::Result<()> {
    grid.first_pass_distance();
    report::pretty_print(grid, 1, trace)?;

    grid.second_pass_distance();
    report::pretty_print(grid, 2, trace)?;

    report::print_final(grid, out)
}

/// 处理单个文本图像.
///
/// `output` 以截断模式创建, `trace` 以追加模式打开.
/// 输出目标不可用时在使用点直接上抛, 不重试.
pub fn run_one(input: &Path, output: &Path, trace: &Path) -> Result<(), RunError> {
    let mut grid = text::open(input)?;

    let mut out = BufWriter::new(File::create(output)?);
    let mut trace = BufWriter::new(OpenOptions::new().create(true).append(true).open(trace)?);

    transform_and_report(&mut grid, &mut out, &mut trace)?;
    out.flush()?;
    trace.flush()?;
    Ok(())
}

/// 批量处理标准数据集目录下的全部文本图像.
///
/// 对输入目录下形如 `img-{idx}.txt` 的每个文件, 最终结果写入输出目录的
/// `dist-{idx}.txt`, 扫描渲染写入 `trace-{idx}.txt`. 单个图像的加载失败
/// 只会跳过该图像, 不会中断批处理.
pub fn run_all() -> Result<(), RunError> {
    let input_dir = loader::text_dir_from_env_or_home();
    assert!(input_dir.is_dir());
    let out_dir = loader::out_dir_from_env_or(&input_dir);

    let images = loader::full_grid_loader(&input_dir);
    println!("Running distance transform on {} image(s)...", images.len());
    utils::sep();

    for (idx, parsed) in images {
        let mut grid = match parsed {
            Ok(grid) => grid,
            Err(e) => {
                eprintln!("img-{idx}: skipped ({e:?})");
                continue;
            }
        };

        let mut out = BufWriter::new(File::create(out_dir.join(format!("dist-{idx}.txt")))?);
        let mut trace = BufWriter::new(
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(out_dir.join(format!("trace-{idx}.txt")))?,
        );
        transform_and_report(&mut grid, &mut out, &mut trace)?;
        out.flush()?;
        trace.flush()?;

        let range = grid.range();
        println!(
            "img-{idx}: {} x {}, observed [{}, {}]",
            grid.rows(),
            grid.cols(),
            range.observed_min(),
            range.observed_max(),
        );
    }
    Ok(())
}
