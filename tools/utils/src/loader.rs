//! 对 `dt-berry::dataset` 的更一层封装. 提供更直接的数据集加载器.

use dt_berry::dataset::{self, generic::GridLoader};
use std::env;
use std::path::{Path, PathBuf};

/// 标准文本图像文件名构造器: `img-{idx}.txt`.
pub fn text_filename(idx: u32) -> String {
    format!("img-{idx}.txt")
}

/// 获取文本图像数据集基本路径.
///
/// 1. 若环境变量 `$DT_TEXT_DIR` 非空, 则返回其值;
/// 2. 否则, 返回 `$HOME/dataset/text`.
pub fn text_dir_from_env_or_home() -> PathBuf {
    if let Ok(d) = env::var("DT_TEXT_DIR") {
        PathBuf::from(d)
    } else {
        dataset::home_dataset_dir_with(["text"]).unwrap()
    }
}

/// 获取输出目录.
///
/// 1. 若环境变量 `$DT_OUT_DIR` 非空, 则返回其值;
/// 2. 否则, 返回输入目录 `input` 本身.
pub fn out_dir_from_env_or<P: AsRef<Path>>(input: P) -> PathBuf {
    if let Ok(d) = env::var("DT_OUT_DIR") {
        PathBuf::from(d)
    } else {
        input.as_ref().to_owned()
    }
}

/// 获取给定目录下按标准文件名连续编号 (从 0 开始) 的全部文本图像加载器.
///
/// `path` 必须是目录, 否则程序 panic.
pub fn full_grid_loader<P: AsRef<Path>>(path: P) -> GridLoader {
    let path = path.as_ref();
    let len = (0u32..)
        .take_while(|idx| path.join(text_filename(*idx)).is_file())
        .count() as u32;
    dataset::generic::grid_loader(0..len, path, text_filename)
}
