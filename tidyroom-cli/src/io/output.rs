use serde::{Deserialize, Serialize};
use tidyroom::io::ext_repr::ExtRoomConfiguration;

use crate::config::CliConfig;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoomOutput {
    pub date: String,
    #[serde(flatten)]
    pub room: ExtRoomConfiguration,
    pub config: CliConfig,
}
