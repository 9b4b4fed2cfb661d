use clap::{command, Parser};

const CONFIG_FILE_PATH: &str = "./strokes.json";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Recorded pointer events to replay (.json, otherwise MessagePack)
    pub recording: String,

    /// Where to load palette and stroke width config
    #[arg(long="configPath",default_value_t=String::from(CONFIG_FILE_PATH))]
    pub config_path: String,

    /// Abort on the first event referencing an unknown pointer, instead of
    /// logging it and carrying on
    #[arg(long = "strict")]
    pub strict: bool,

    #[arg(long = "loglevel",default_value_t=String::from("info"))]
    pub log_level: String,
}
