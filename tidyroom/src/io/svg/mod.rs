mod room_to_svg;
mod svg_util;

#[doc(inline)]
pub use room_to_svg::*;

#[doc(inline)]
pub use svg_util::SvgDrawOptions;
#[doc(inline)]
pub use svg_util::SvgRoomTheme;
#[doc(inline)]
pub use svg_util::change_brightness;
