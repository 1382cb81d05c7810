// src/options.rs
use clap::ValueEnum;

/// 出力フォーマット
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 一致行数のみを1行で出力
    #[default]
    Text,
    /// 比較結果全体をJSONで出力
    Json,
    /// 比較結果全体をYAMLで出力
    Yaml,
}

impl OutputFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}
