//! 🫐欢迎光临🫐
//!
//! 涵盖了本 crate 一系列常用的功能.

pub use crate::Idx2d;

pub use crate::{
    CompactGrid, FramedGrid, GridMirror, ImgWriteRaw, ImgWriteVis, IntensityRange, LoadError,
};

pub use crate::consts::pixel::{is_background, is_foreground, BACKGROUND};

pub use crate::dataset::{self, home_dataset_dir_with};
