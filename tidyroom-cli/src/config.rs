use serde::{Deserialize, Serialize};
use tidyroom::io::svg::SvgDrawOptions;
use tidyroom::util::GeneratorConfig;

/// Configuration of the command line tool
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
pub struct CliConfig {
    /// Parameters of the room generator
    #[serde(default)]
    pub generator: GeneratorConfig,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}
