use clap::{command, Parser};

const CONFIG_FILE_PATH: &str = "./strokes.json";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Where to load palette and stroke width config
    #[arg(long="configPath",default_value_t=String::from(CONFIG_FILE_PATH))]
    pub config_path: String,

    /// Also draw with the primary mouse button, as if it were a touch
    #[arg(long = "mouse")]
    pub mouse: bool,

    /// Pointer id given to the mouse when --mouse is enabled
    #[arg(long = "mousePointerId", default_value_t = 0)]
    pub mouse_pointer_id: u64,

    /// Save every accepted event to this file on exit (.json, otherwise MessagePack)
    #[arg(long = "recordTo")]
    pub record_to: Option<String>,

    #[arg(long = "loglevel",default_value_t=String::from("info"))]
    pub log_level: String,
}
