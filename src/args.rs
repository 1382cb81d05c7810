// src/args.rs
use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "prefix_lines",
    version = crate::VERSION,
    about = "2つのテキストファイルの先頭から一致する行数を数える",
    long_about = "2つのテキストファイルを1行ずつ読み比べ、最初に異なる行（またはどちらかの終端）に\n\
                  達するまでに一致した行数を出力します。改行コードも比較対象に含まれます。"
)]
pub struct Args {
    /// 比較元ファイル
    #[arg(value_name = "FIRST", default_value = "test1.txt", value_hint = ValueHint::FilePath)]
    pub first: PathBuf,

    /// 比較先ファイル
    #[arg(value_name = "SECOND", default_value = "test2.txt", value_hint = ValueHint::FilePath)]
    pub second: PathBuf,

    /// 出力フォーマット
    #[arg(long, value_enum, default_value = "text", help_heading = "出力")]
    pub format: OutputFormat,
}
