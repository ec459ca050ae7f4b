//! 两遍 chamfer 距离变换命令行工具.
//!
//! 用法:
//!
//! 1. `chamfer8 <input> <output> <trace>`: 处理单个文本图像.
//!    最终结果写入 `output`, 每遍扫描的定宽渲染追加到 `trace`.
//! 2. `chamfer8` (无参数): 批量处理标准数据集目录下的全部文本图像.
//!    输入目录取 `$DT_TEXT_DIR` 或 `$HOME/dataset/text`,
//!    输出目录取 `$DT_OUT_DIR` 或输入目录本身.

mod report;
mod runner;

use std::env;
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let result = match args.as_slice() {
        [input, output, trace] => {
            runner::run_one(Path::new(input), Path::new(output), Path::new(trace))
        }
        [] => runner::run_all(),
        _ => {
            eprintln!("Usage: chamfer8 [<input> <output> <trace>]");
            return ExitCode::FAILURE;
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("chamfer8: {e:?}");
            ExitCode::FAILURE
        }
    }
}
