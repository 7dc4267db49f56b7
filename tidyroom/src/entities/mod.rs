mod item;
mod placed_item;
mod room_config;
mod template;

#[doc(inline)]
pub use item::ItemCategory;
#[doc(inline)]
pub use item::ItemDescriptor;
#[doc(inline)]
pub use item::SizeClass;

#[doc(inline)]
pub use placed_item::PlacedItem;
#[doc(inline)]
pub use placed_item::PlacementOrigin;

#[doc(inline)]
pub use room_config::RoomConfiguration;

#[doc(inline)]
pub use template::CleaningZone;
#[doc(inline)]
pub use template::Furniture;
#[doc(inline)]
pub use template::RoomTemplate;
#[doc(inline)]
pub use template::TemplateSummary;
