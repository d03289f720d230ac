use crate::config::SearchConfig;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "fapesp-opportunities")]
#[command(about = "List open FAPESP funding opportunities matching your keywords")]
pub struct CliArgs {
    /// Settings file (created with defaults when missing)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the listing page url
    #[arg(long)]
    pub url: Option<String>,

    /// Replace the title keywords (repeatable)
    #[arg(long = "title")]
    pub title: Vec<String>,

    /// Replace the content keywords (repeatable)
    #[arg(long = "content")]
    pub content: Vec<String>,

    /// Disable the title filter
    #[arg(long, conflicts_with = "title")]
    pub no_title_filter: bool,

    /// Disable the content filter
    #[arg(long, conflicts_with = "content")]
    pub no_content_filter: bool,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print the effective configuration and exit
    #[arg(long)]
    pub show_config: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliArgs {
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::settings::SettingsStore::default_path)
    }

    /// 將命令列參數覆蓋到設定檔內容上
    pub fn apply_overrides(&self, config: &mut SearchConfig) {
        if let Some(url) = &self.url {
            config.url = url.clone();
        }
        if self.no_title_filter {
            config.title_filters.clear();
        } else if !self.title.is_empty() {
            config.title_filters = self.title.iter().cloned().collect();
        }
        if self.no_content_filter {
            config.content_filters.clear();
        } else if !self.content.is_empty() {
            config.content_filters = self.content.iter().cloned().collect();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = Some(timeout);
        }
    }
}
